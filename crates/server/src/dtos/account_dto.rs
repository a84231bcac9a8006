use database::account::model::Account;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 批量创建账户的请求体
#[derive(Clone, Serialize, Deserialize, Debug, Validate, Default, ToSchema)]
pub struct SetAccountsDto {
    /// 账户列表
    pub accounts: Vec<Account>,
}

/// 批量创建账户的结果
#[derive(Clone, Serialize, Deserialize, Debug, ToSchema)]
pub struct CreatedAccountsDto {
    pub message: String,
    /// 实际新建的账户数（已存在的地址被跳过）
    pub created: usize,
}
