use crate::services::purchase::purchase_service::PurchaseOutcome;
use database::ledger::model::Transaction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 购买请求体
#[derive(Clone, Serialize, Deserialize, Debug, Validate, Default, ToSchema)]
pub struct PurchaseRequestDto {
    /// 购买金额，必须为正数
    #[schema(example = 100.0)]
    pub amount: f64,
}

/// 购买成功后的响应
#[derive(Clone, Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponseDto {
    pub message: String,
    /// 买家借记后的余额
    #[schema(value_type = String)]
    pub buyer_balance: Decimal,
    /// 本次写入的购买交易
    pub transaction: Transaction,
    /// 本次产生的佣金条数
    pub commissions_created: usize,
}

impl From<PurchaseOutcome> for PurchaseResponseDto {
    fn from(outcome: PurchaseOutcome) -> Self {
        Self {
            message: "Purchase completed successfully! 💸".to_string(),
            buyer_balance: outcome.buyer_balance,
            transaction: outcome.transaction,
            commissions_created: outcome.commissions_created,
        }
    }
}
