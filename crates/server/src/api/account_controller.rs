use crate::{
    dtos::account_dto::{CreatedAccountsDto, SetAccountsDto},
    extractors::validation_extractor::ValidationExtractor,
    services::Services,
};
use axum::{
    extract::Path,
    routing::{get, post},
    Extension, Json, Router,
};
use database::account::model::Account;
use utils::{AppError, AppResult};

/// 查询账户
#[utoipa::path(
    get,
    path = "/api/v1/account/{address}",
    tag = "account",
    params(
        ("address" = String, Path, description = "账户地址")
    ),
    responses(
        (status = 200, description = "成功返回账户", body = Account),
        (status = 404, description = "账户不存在")
    )
)]
pub async fn account(
    Extension(services): Extension<Services>,
    Path(address): Path<String>,
) -> AppResult<Json<Account>> {
    match services.account.get_account(address.to_string()).await? {
        Some(account) => Ok(Json(account)),
        None => Err(AppError::NotFound(format!(
            "Account with address {} not found.",
            address
        ))),
    }
}

/// 批量创建账户
///
/// 已存在的地址跳过，全部已存在时返回409
#[utoipa::path(
    post,
    path = "/api/v1/account/mock_accounts",
    tag = "account",
    request_body = SetAccountsDto,
    responses(
        (status = 200, description = "成功创建账户", body = CreatedAccountsDto),
        (status = 409, description = "所有账户都已存在")
    )
)]
pub async fn mock_accounts(
    Extension(services): Extension<Services>,
    ValidationExtractor(req): ValidationExtractor<SetAccountsDto>,
) -> AppResult<Json<CreatedAccountsDto>> {
    let created = services.account.create_accounts(req.accounts).await?;

    Ok(Json(CreatedAccountsDto {
        message: "Accounts created successfully! 📦".to_string(),
        created,
    }))
}

pub struct AccountController;
impl AccountController {
    pub fn app() -> Router {
        Router::new()
            .route("/account/:address", get(account))
            .route("/account/mock_accounts", post(mock_accounts))
    }
}
