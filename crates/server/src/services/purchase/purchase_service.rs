use crate::services::purchase::chain::ReferralChain;
use crate::services::purchase::commission::CommissionTable;
use async_trait::async_trait;
use database::{Commission, DynLedgerStore, LedgerUnit, Transaction};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, warn};
use utils::{AppError, AppResult};

pub type DynPurchaseService = Arc<dyn PurchaseServiceTrait + Send + Sync>;

/// 一笔购买提交后的结果
#[derive(Debug, Clone)]
pub struct PurchaseOutcome {
    /// 买家借记后的余额
    pub buyer_balance: Decimal,
    /// 本次写入的购买交易
    pub transaction: Transaction,
    /// 本次产生的佣金条数
    pub commissions_created: usize,
}

#[async_trait]
pub trait PurchaseServiceTrait {
    async fn execute(&self, buyer: String, amount: Decimal) -> AppResult<PurchaseOutcome>;
}

/// 购买服务：借记买家、记账、沿推荐链逐级发佣金，整笔原子生效
#[derive(Clone)]
pub struct PurchaseService {
    store: DynLedgerStore,
    table: CommissionTable,
}

impl PurchaseService {
    pub fn new(store: DynLedgerStore) -> Self {
        Self {
            store,
            table: CommissionTable::default(),
        }
    }

    /// 账务单元内的完整购买流程，任何一步出错都由调用方放弃整个单元
    async fn apply(
        &self,
        unit: &mut dyn LedgerUnit,
        buyer: &str,
        amount: Decimal,
    ) -> AppResult<PurchaseOutcome> {
        let buyer_account = unit
            .find_account(buyer)
            .await?
            .ok_or_else(|| AppError::AccountNotFound(buyer.to_string()))?;

        if buyer_account.balance < amount {
            return Err(AppError::InsufficientBalance {
                balance: buyer_account.balance,
                amount,
            });
        }

        // 借记买家并记一笔负金额的购买交易
        let buyer_balance = buyer_account.balance - amount;
        unit.update_balance(buyer, buyer_balance).await?;

        let transaction = Transaction::buy(buyer, amount);
        unit.insert_transaction(&transaction).await?;

        // 沿推荐链逐级贷记。每次读到的是单元内最新余额，
        // 环路中重复出现的账户因此能拿到累计后的贷记
        let pool = self.table.pool_for(amount);
        let mut commissions = Vec::new();
        let mut chain = ReferralChain::above(&buyer_account, self.table.max_depth());

        while let Some((level, sponsor)) = chain.next(unit).await? {
            let cut = match self.table.cut_for(level, pool) {
                Some(cut) => cut,
                None => continue,
            };

            unit.update_balance(&sponsor.address, sponsor.balance + cut).await?;
            commissions.push(Commission::new(
                buyer,
                &sponsor.address,
                transaction.id,
                level,
                cut,
            ));
        }

        unit.insert_commissions(&commissions).await?;

        Ok(PurchaseOutcome {
            buyer_balance,
            transaction,
            commissions_created: commissions.len(),
        })
    }
}

#[async_trait]
impl PurchaseServiceTrait for PurchaseService {
    async fn execute(&self, buyer: String, amount: Decimal) -> AppResult<PurchaseOutcome> {
        // 金额必须为正，在开启任何账务单元之前拒绝
        if amount <= Decimal::ZERO {
            return Err(AppError::InvalidAmount(format!(
                "amount must be positive, got {}",
                amount
            )));
        }

        let mut unit = self.store.begin().await?;

        match self.apply(unit.as_mut(), &buyer, amount).await {
            Ok(outcome) => {
                unit.commit().await?;
                info!(
                    "💸 purchase committed: buyer={} amount={} commissions={}",
                    buyer, amount, outcome.commissions_created
                );
                Ok(outcome)
            }
            Err(err) => {
                warn!("❌ purchase aborted: buyer={} amount={} err={}", buyer, amount, err);
                if let Err(abort_err) = unit.abort().await {
                    warn!("⚠️ failed to abort ledger unit: {}", abort_err);
                }
                Err(err)
            }
        }
    }
}
