use async_trait::async_trait;
use database::{Account, DynLedgerStore};
use std::sync::Arc;
use tracing::info;
use utils::AppResult;

pub type DynAccountService = Arc<dyn AccountServiceTrait + Send + Sync>;

#[async_trait]
pub trait AccountServiceTrait {
    async fn get_account(&self, address: String) -> AppResult<Option<Account>>;
    async fn create_accounts(&self, accounts: Vec<Account>) -> AppResult<usize>;
}

#[derive(Clone)]
pub struct AccountService {
    store: DynLedgerStore,
}

impl AccountService {
    pub fn new(store: DynLedgerStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccountServiceTrait for AccountService {
    async fn get_account(&self, address: String) -> AppResult<Option<Account>> {
        let account = self.store.get_account(&address).await?;

        Ok(account)
    }

    /// 批量建账户，已存在的地址跳过，返回实际新建条数
    async fn create_accounts(&self, accounts: Vec<Account>) -> AppResult<usize> {
        let created = self.store.create_accounts(accounts).await?;

        info!("📦 {} account(s) created", created);

        Ok(created)
    }
}
