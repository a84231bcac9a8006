////////////////////////////////////////////////////////////////////////
//
// 1. 每个Domain(Entity)单独一个文件夹:
//    - model: 定义Schema
// 2. store模块承载账本的存储契约与两套实现:
//    - mongo: 多文档事务（生产环境，要求副本集部署）
//    - memory: 进程内实现（测试/本地），与mongo遵守同一原子性契约
//
//////////////////////////////////////////////////////////////////////

use mongodb::{Client, Collection};
use std::sync::Arc;
use tracing::info;
use utils::{AppConfig, AppResult};

pub mod account;
pub mod ledger;
pub mod store;

pub use account::model::Account;
pub use ledger::model::{Commission, Transaction, TransactionKind};
pub use store::memory::MemoryLedger;
pub use store::{DynLedgerStore, LedgerStore, LedgerUnit};

#[derive(Clone)]
pub struct Database {
    pub client: Client,
    pub accounts: Collection<Account>,
    pub transactions: Collection<Transaction>,
    pub commissions: Collection<Commission>,
}

impl Database {
    pub async fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        let client = Client::with_uri_str(&config.mongo_uri).await?;
        let db: mongodb::Database = client.database(&config.mongo_db);

        let accounts = db.collection("Account");
        let transactions = db.collection("Transaction");
        let commissions = db.collection("Commission");

        info!("🧱 database({:#}) connected.", &config.mongo_db);

        Ok(Database {
            client,
            accounts,
            transactions,
            commissions,
        })
    }
}
