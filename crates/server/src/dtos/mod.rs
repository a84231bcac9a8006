pub mod account_dto;
pub mod history_dto;
pub mod purchase_dto;
