use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Upline Referral Ledger API",
        description = "基于 Rust 和 Axum 的多级推荐佣金账本 API 文档",
        version = "1.0.0",
        contact(
            name = "API Support",
            email = "support@upline.dev"
        )
    ),
    paths(
        // System health check
        crate::api::health,
        // Purchase endpoints
        crate::api::purchase_controller::purchase,
        // History endpoints
        crate::api::history_controller::recent_transactions,
        crate::api::history_controller::commissions,
        // Account endpoints
        crate::api::account_controller::account,
        crate::api::account_controller::mock_accounts,
    ),
    components(
        schemas(
            // Database models
            database::account::model::Account,
            database::ledger::model::Transaction,
            database::ledger::model::TransactionKind,
            database::ledger::model::Commission,
            // DTOs
            crate::dtos::purchase_dto::PurchaseRequestDto,
            crate::dtos::purchase_dto::PurchaseResponseDto,
            crate::dtos::history_dto::TransactionHistoryDto,
            crate::dtos::account_dto::SetAccountsDto,
            crate::dtos::account_dto::CreatedAccountsDto,
        )
    ),
    tags(
        (name = "系统状态", description = "系统健康检查和状态监控"),
        (name = "purchase", description = "购买与推荐链分佣"),
        (name = "history", description = "交易与佣金历史"),
        (name = "account", description = "账户管理")
    )
)]
pub struct ApiDoc;
