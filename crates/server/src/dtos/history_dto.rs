use database::ledger::model::{Transaction, TransactionKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 历史记录投影：只暴露类型、金额和时间
#[derive(Clone, Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistoryDto {
    /// 交易类型
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// 交易金额，购买为负数
    #[schema(value_type = String)]
    pub amount: Decimal,
    /// 交易时间（毫秒时间戳）
    pub created_at: i64,
}

impl From<Transaction> for TransactionHistoryDto {
    fn from(transaction: Transaction) -> Self {
        Self {
            kind: transaction.kind,
            amount: transaction.amount,
            created_at: transaction.created_at,
        }
    }
}
