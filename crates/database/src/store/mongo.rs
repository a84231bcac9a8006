use crate::account::model::Account;
use crate::ledger::model::{Commission, Transaction};
use crate::store::{LedgerStore, LedgerUnit};
use crate::Database;
use async_trait::async_trait;
use mongodb::{
    bson::doc,
    options::{Acknowledgment, FindOptions, ReadConcern, TransactionOptions, WriteConcern},
    ClientSession, Collection,
};
use rust_decimal::Decimal;
use std::collections::HashSet;
use tokio_stream::StreamExt;
use utils::{AppError, AppResult};

/// 基于MongoDB多文档事务的账务单元，要求副本集部署。
/// 并发购买之间的写写冲突由mongo报错，调用方重试整笔购买。
pub struct MongoLedgerUnit {
    session: ClientSession,
    accounts: Collection<Account>,
    transactions: Collection<Transaction>,
    commissions: Collection<Commission>,
}

#[async_trait]
impl LedgerStore for Database {
    async fn begin(&self) -> AppResult<Box<dyn LedgerUnit>> {
        let mut session = self.client.start_session(None).await?;

        let options = TransactionOptions::builder()
            .read_concern(ReadConcern::majority())
            .write_concern(WriteConcern::builder().w(Acknowledgment::Majority).build())
            .build();
        session.start_transaction(options).await?;

        Ok(Box::new(MongoLedgerUnit {
            session,
            accounts: self.accounts.clone(),
            transactions: self.transactions.clone(),
            commissions: self.commissions.clone(),
        }))
    }

    async fn get_account(&self, address: &str) -> AppResult<Option<Account>> {
        let filter = doc! {"address": address};
        let account = self.accounts.find_one(filter, None).await?;

        Ok(account)
    }

    async fn create_accounts(&self, accounts: Vec<Account>) -> AppResult<usize> {
        // Step 1: 按地址去重
        let mut seen_addresses = HashSet::new();
        let unique_accounts: Vec<Account> = accounts
            .into_iter()
            .filter(|account| seen_addresses.insert(account.address.clone()))
            .collect();

        // Step 2: 查询数据库中已存在的地址
        let addresses: Vec<String> = unique_accounts.iter().map(|account| account.address.clone()).collect();
        let mut cursor = self.accounts.find(doc! { "address": { "$in": addresses }}, None).await?;

        let mut existing_addresses: HashSet<String> = HashSet::new();
        while let Some(account) = cursor.try_next().await? {
            existing_addresses.insert(account.address);
        }

        // Step 3: 过滤掉已存在的账户
        let accounts_to_insert: Vec<Account> = unique_accounts
            .into_iter()
            .filter(|account| !existing_addresses.contains(&account.address))
            .collect();

        if accounts_to_insert.is_empty() {
            return Err(AppError::Conflict("All accounts already exist.".to_string()));
        }

        // Step 4: 插入剩余的账户
        let result = self.accounts.insert_many(accounts_to_insert, None).await?;

        Ok(result.inserted_ids.len())
    }

    async fn recent_transactions(&self, address: &str, limit: i64) -> AppResult<Vec<Transaction>> {
        let filter = doc! {"receiver": address};
        // 同一毫秒内按_id倒序兜底
        let options = FindOptions::builder().sort(doc! {"created_at": -1, "_id": -1}).limit(limit).build();

        let mut cursor = self.transactions.find(filter, options).await?;

        let mut transactions = Vec::new();
        while let Some(transaction) = cursor.try_next().await? {
            transactions.push(transaction);
        }

        Ok(transactions)
    }

    async fn commissions_for_account(&self, address: &str) -> AppResult<Vec<Commission>> {
        let filter = doc! {"receiver": address};
        let options = FindOptions::builder().sort(doc! {"created_at": -1, "_id": -1}).build();

        let mut cursor = self.commissions.find(filter, options).await?;

        let mut commissions = Vec::new();
        while let Some(commission) = cursor.try_next().await? {
            commissions.push(commission);
        }

        Ok(commissions)
    }
}

#[async_trait]
impl LedgerUnit for MongoLedgerUnit {
    async fn find_account(&mut self, address: &str) -> AppResult<Option<Account>> {
        let filter = doc! {"address": address};
        let account = self.accounts.find_one_with_session(filter, None, &mut self.session).await?;

        Ok(account)
    }

    async fn update_balance(&mut self, address: &str, balance: Decimal) -> AppResult<()> {
        let filter = doc! {"address": address};
        // balance在文档中以字符串存储，与Decimal的serde表示一致
        let update = doc! {"$set": {"balance": balance.to_string()}};

        self.accounts.update_one_with_session(filter, update, None, &mut self.session).await?;

        Ok(())
    }

    async fn insert_transaction(&mut self, transaction: &Transaction) -> AppResult<()> {
        self.transactions.insert_one_with_session(transaction, None, &mut self.session).await?;

        Ok(())
    }

    async fn insert_commissions(&mut self, commissions: &[Commission]) -> AppResult<()> {
        // insert_many不接受空批次
        if commissions.is_empty() {
            return Ok(());
        }

        self.commissions.insert_many_with_session(commissions, None, &mut self.session).await?;

        Ok(())
    }

    async fn commit(mut self: Box<Self>) -> AppResult<()> {
        self.session.commit_transaction().await?;

        Ok(())
    }

    async fn abort(mut self: Box<Self>) -> AppResult<()> {
        self.session.abort_transaction().await?;

        Ok(())
    }
}
