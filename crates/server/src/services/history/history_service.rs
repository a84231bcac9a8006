use async_trait::async_trait;
use database::{Commission, DynLedgerStore, Transaction};
use std::sync::Arc;
use utils::AppResult;

pub type DynHistoryService = Arc<dyn HistoryServiceTrait + Send + Sync>;

/// 历史窗口固定为最近4条
const HISTORY_WINDOW: i64 = 4;

#[async_trait]
pub trait HistoryServiceTrait {
    async fn recent_transactions(&self, address: String) -> AppResult<Vec<Transaction>>;
    async fn commissions_for_account(&self, address: String) -> AppResult<Vec<Commission>>;
}

#[derive(Clone)]
pub struct HistoryService {
    store: DynLedgerStore,
}

impl HistoryService {
    pub fn new(store: DynLedgerStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HistoryServiceTrait for HistoryService {
    /// 某地址最近的交易，按时间从新到旧
    async fn recent_transactions(&self, address: String) -> AppResult<Vec<Transaction>> {
        let transactions = self.store.recent_transactions(&address, HISTORY_WINDOW).await?;

        Ok(transactions)
    }

    /// 某地址收到的全部佣金，按时间从新到旧
    async fn commissions_for_account(&self, address: String) -> AppResult<Vec<Commission>> {
        let commissions = self.store.commissions_for_account(&address).await?;

        Ok(commissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::{Account, LedgerStore, LedgerUnit, MemoryLedger};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_history_returns_four_newest_transactions() {
        let ledger = MemoryLedger::new();
        ledger
            .create_accounts(vec![Account::new("trader", Decimal::from(100), None)])
            .await
            .expect("应该能够创建账户");

        let mut unit = ledger.begin().await.expect("应该能够开启账务单元");
        for i in 0..6i64 {
            let mut transaction = Transaction::buy("trader", Decimal::from(10 + i));
            transaction.created_at = 1_700_000_000_000 + i;
            unit.insert_transaction(&transaction).await.expect("应该能够写入交易");
        }
        unit.commit().await.expect("应该能够提交账务单元");

        let service = HistoryService::new(Arc::new(ledger));
        let history = service
            .recent_transactions("trader".to_string())
            .await
            .expect("查询不应失败");

        assert_eq!(history.len(), 4);
        assert_eq!(history[0].created_at, 1_700_000_000_005);
        assert_eq!(history[3].created_at, 1_700_000_000_002);

        println!("✅ 测试通过: 历史窗口只含最近4条交易");
    }

    #[tokio::test]
    async fn test_history_for_unknown_address_is_empty() {
        let service = HistoryService::new(Arc::new(MemoryLedger::new()));

        let history = service
            .recent_transactions("nobody".to_string())
            .await
            .expect("查询不应失败");
        assert!(history.is_empty());

        let commissions = service
            .commissions_for_account("nobody".to_string())
            .await
            .expect("查询不应失败");
        assert!(commissions.is_empty());

        println!("✅ 测试通过: 未知地址的历史为空列表");
    }
}
