////////////////////////////////////////////////////////////////////////
//
// 1. 每个Domain单独一个文件夹:
//    - purchase: 购买 + 推荐链分佣（唯一会写账本的入口）
//    - history:  交易与佣金历史查询
//    - account:  账户查询与批量建账
// 2. 所有服务只依赖账本契约DynLedgerStore，
//    生产环境注入mongo实现，测试注入内存实现
//
//////////////////////////////////////////////////////////////////////

pub mod account;
pub mod history;
pub mod purchase;

use account::account_service::{AccountService, DynAccountService};
use database::{DynLedgerStore, MemoryLedger};
use history::history_service::{DynHistoryService, HistoryService};
use purchase::purchase_service::{DynPurchaseService, PurchaseService};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Services {
    pub purchase: DynPurchaseService,
    pub history: DynHistoryService,
    pub account: DynAccountService,
    pub store: DynLedgerStore,
}

impl Services {
    pub fn new(store: DynLedgerStore) -> Self {
        let purchase = Arc::new(PurchaseService::new(store.clone())) as DynPurchaseService;
        let history = Arc::new(HistoryService::new(store.clone())) as DynHistoryService;
        let account = Arc::new(AccountService::new(store.clone())) as DynAccountService;

        info!("🧠 services initialized");

        Self {
            purchase,
            history,
            account,
            store,
        }
    }

    /// 进程内账本上的服务集（测试/本地开发）
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryLedger::new()))
    }
}
