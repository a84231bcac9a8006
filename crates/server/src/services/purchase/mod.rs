pub mod chain;
pub mod commission;
pub mod purchase_service;


pub use chain::ReferralChain;
pub use commission::CommissionTable;
pub use purchase_service::*;
