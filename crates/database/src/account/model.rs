use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 账户模型
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Account {
    /// 账户地址
    pub address: String, // Address
    /// 当前余额，只能由账务单元内的借记/贷记修改
    #[schema(value_type = String)]
    pub balance: Decimal,
    /// 推荐人地址，链条顶端的账户为None
    pub sponsor: Option<String>, // Address
    /// 创建时间戳（毫秒）
    pub created_at: i64,
}

impl Account {
    pub fn new(address: &str, balance: Decimal, sponsor: Option<String>) -> Self {
        Self {
            address: address.to_string(),
            balance,
            sponsor,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}
