use crate::account::model::Account;
use crate::ledger::model::{Commission, Transaction};
use crate::store::{LedgerStore, LedgerUnit};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use utils::{AppError, AppResult};

/// 进程内账本，与mongo实现遵守同一原子性契约：
/// 单元持有全局锁（单元之间完全串行），写入先进暂存区，
/// commit时一次性落地，abort或单元被丢弃时暂存区直接作废
#[derive(Clone, Default)]
pub struct MemoryLedger {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    accounts: HashMap<String, Account>,
    transactions: Vec<Transaction>,
    commissions: Vec<Commission>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 进程内账务单元：全局锁 + 暂存写集
pub struct MemoryUnit {
    state: OwnedMutexGuard<MemoryState>,
    staged_balances: HashMap<String, Decimal>,
    staged_transactions: Vec<Transaction>,
    staged_commissions: Vec<Commission>,
}

#[async_trait]
impl LedgerStore for MemoryLedger {
    async fn begin(&self) -> AppResult<Box<dyn LedgerUnit>> {
        let state = self.state.clone().lock_owned().await;

        Ok(Box::new(MemoryUnit {
            state,
            staged_balances: HashMap::new(),
            staged_transactions: Vec::new(),
            staged_commissions: Vec::new(),
        }))
    }

    async fn get_account(&self, address: &str) -> AppResult<Option<Account>> {
        let state = self.state.lock().await;

        Ok(state.accounts.get(address).cloned())
    }

    async fn create_accounts(&self, accounts: Vec<Account>) -> AppResult<usize> {
        let mut state = self.state.lock().await;

        let mut inserted = 0;
        for account in accounts {
            if state.accounts.contains_key(&account.address) {
                continue;
            }
            state.accounts.insert(account.address.clone(), account);
            inserted += 1;
        }

        if inserted == 0 {
            return Err(AppError::Conflict("All accounts already exist.".to_string()));
        }

        Ok(inserted)
    }

    async fn recent_transactions(&self, address: &str, limit: i64) -> AppResult<Vec<Transaction>> {
        let state = self.state.lock().await;

        // 逆插入序打底，再按时间稳定排序，同一毫秒内后写入的排在前面
        let mut transactions: Vec<Transaction> = state
            .transactions
            .iter()
            .rev()
            .filter(|transaction| transaction.receiver == address)
            .cloned()
            .collect();
        transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        transactions.truncate(limit as usize);

        Ok(transactions)
    }

    async fn commissions_for_account(&self, address: &str) -> AppResult<Vec<Commission>> {
        let state = self.state.lock().await;

        let mut commissions: Vec<Commission> = state
            .commissions
            .iter()
            .rev()
            .filter(|commission| commission.receiver == address)
            .cloned()
            .collect();
        commissions.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(commissions)
    }
}

#[async_trait]
impl LedgerUnit for MemoryUnit {
    async fn find_account(&mut self, address: &str) -> AppResult<Option<Account>> {
        let mut account = match self.state.accounts.get(address) {
            Some(account) => account.clone(),
            None => return Ok(None),
        };

        // 单元内读取可见本单元的暂存余额
        if let Some(balance) = self.staged_balances.get(address) {
            account.balance = *balance;
        }

        Ok(Some(account))
    }

    async fn update_balance(&mut self, address: &str, balance: Decimal) -> AppResult<()> {
        // 与mongo的update_one一致：目标账户不存在时为no-op
        self.staged_balances.insert(address.to_string(), balance);

        Ok(())
    }

    async fn insert_transaction(&mut self, transaction: &Transaction) -> AppResult<()> {
        self.staged_transactions.push(transaction.clone());

        Ok(())
    }

    async fn insert_commissions(&mut self, commissions: &[Commission]) -> AppResult<()> {
        self.staged_commissions.extend_from_slice(commissions);

        Ok(())
    }

    async fn commit(mut self: Box<Self>) -> AppResult<()> {
        for (address, balance) in self.staged_balances.drain() {
            if let Some(account) = self.state.accounts.get_mut(&address) {
                account.balance = balance;
            }
        }
        self.state.transactions.append(&mut self.staged_transactions);
        self.state.commissions.append(&mut self.staged_commissions);

        Ok(())
    }

    async fn abort(self: Box<Self>) -> AppResult<()> {
        // 暂存写集随单元一起丢弃
        Ok(())
    }
}
