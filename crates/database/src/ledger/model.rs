use mongodb::bson::oid::ObjectId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 交易类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Buy,
}

/// 交易记录模型，每笔购买恰好写入一条，金额取负值
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Transaction {
    /// MongoDB文档ID，客户端生成，同一账务单元内的佣金记录靠它引用本交易
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    /// 记账账户地址（购买时即买家）
    pub receiver: String, // Address
    /// 交易类型
    pub kind: TransactionKind,
    /// 交易金额，购买为负数
    #[schema(value_type = String)]
    pub amount: Decimal,
    /// 创建时间戳（毫秒）
    pub created_at: i64,
}

impl Transaction {
    /// 购买记录，金额取负值入账
    pub fn buy(receiver: &str, amount: Decimal) -> Self {
        Self {
            id: ObjectId::new(),
            receiver: receiver.to_string(),
            kind: TransactionKind::Buy,
            amount: -amount,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// 佣金记录模型
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Commission {
    /// MongoDB文档ID
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    /// 买家地址（佣金来源）
    pub sender: String, // Address
    /// 上级受益人地址
    pub receiver: String, // Address
    /// 关联的购买交易ID
    #[schema(value_type = String)]
    pub transaction_ref: ObjectId,
    /// 距离买家的层级（1..=10）
    pub level: u8,
    /// 佣金金额，正数
    #[schema(value_type = String)]
    pub amount: Decimal,
    /// 创建时间戳（毫秒）
    pub created_at: i64,
}

impl Commission {
    pub fn new(sender: &str, receiver: &str, transaction_ref: ObjectId, level: u8, amount: Decimal) -> Self {
        Self {
            id: ObjectId::new(),
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            transaction_ref,
            level,
            amount,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_transaction_records_negative_amount() {
        let transaction = Transaction::buy("9xQeWvG8", Decimal::from(100));

        assert_eq!(transaction.receiver, "9xQeWvG8");
        assert_eq!(transaction.kind, TransactionKind::Buy);
        assert_eq!(transaction.amount, Decimal::from(-100));

        println!("✅ 测试通过: 购买交易金额取负值");
    }

    #[test]
    fn test_transaction_kind_serializes_lowercase() {
        let kind = serde_json::to_string(&TransactionKind::Buy).expect("应该能够序列化交易类型");
        assert_eq!(kind, "\"buy\"");

        println!("✅ 测试通过: 交易类型序列化为小写");
    }

    #[test]
    fn test_commission_links_transaction() {
        let transaction = Transaction::buy("buyer", Decimal::from(100));
        let commission = Commission::new("buyer", "sponsor", transaction.id, 1, Decimal::from(3));

        assert_eq!(commission.transaction_ref, transaction.id);
        assert_eq!(commission.level, 1);
        assert_eq!(commission.amount, Decimal::from(3));

        println!("✅ 测试通过: 佣金记录关联交易ID");
    }
}
