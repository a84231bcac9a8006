use crate::account::model::Account;
use crate::ledger::model::{Commission, Transaction};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use utils::AppResult;

pub mod memory;
pub mod mongo;


pub type DynLedgerStore = Arc<dyn LedgerStore + Send + Sync>;

// 主要用于Service中，表示提供了账本存储功能
#[async_trait]
pub trait LedgerStore {
    // 开启一个账务单元，单元内的读写要么全部提交，要么全部丢弃
    async fn begin(&self) -> AppResult<Box<dyn LedgerUnit>>;

    // 单元外的账户查询
    async fn get_account(&self, address: &str) -> AppResult<Option<Account>>;

    // 批量创建账户(api调用，播种/注册挂钩)
    async fn create_accounts(&self, accounts: Vec<Account>) -> AppResult<usize>;

    // 某账户最近的交易记录，时间倒序
    async fn recent_transactions(&self, address: &str, limit: i64) -> AppResult<Vec<Transaction>>;

    // 某账户获得的全部佣金记录，时间倒序
    async fn commissions_for_account(&self, address: &str) -> AppResult<Vec<Commission>>;
}

/// 账务单元：一笔购买内的全部读写都必须经由同一个单元，
/// commit前对外不可见，abort或整体丢弃时不留任何痕迹
#[async_trait]
pub trait LedgerUnit: Send {
    /// 单元内读账户，可见本单元尚未提交的余额写入
    async fn find_account(&mut self, address: &str) -> AppResult<Option<Account>>;

    /// 单元内覆写余额
    async fn update_balance(&mut self, address: &str, balance: Decimal) -> AppResult<()>;

    /// 单元内追加一条交易记录
    async fn insert_transaction(&mut self, transaction: &Transaction) -> AppResult<()>;

    /// 单元内批量追加佣金记录，空批次为no-op
    async fn insert_commissions(&mut self, commissions: &[Commission]) -> AppResult<()>;

    /// 提交单元，全部写入一次性可见
    async fn commit(self: Box<Self>) -> AppResult<()>;

    /// 放弃单元，丢弃全部暂存写入
    async fn abort(self: Box<Self>) -> AppResult<()>;
}
