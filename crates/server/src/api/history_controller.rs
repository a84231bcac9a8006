use crate::{dtos::history_dto::TransactionHistoryDto, services::Services};
use axum::{extract::Path, routing::get, Extension, Json, Router};
use database::ledger::model::Commission;
use utils::AppResult;

/// 某地址最近的交易记录
///
/// 固定返回最近4条，从新到旧
#[utoipa::path(
    get,
    path = "/api/v1/history/{address}",
    tag = "history",
    params(
        ("address" = String, Path, description = "账户地址")
    ),
    responses(
        (status = 200, description = "成功返回最近交易", body = Vec<TransactionHistoryDto>)
    )
)]
pub async fn recent_transactions(
    Extension(services): Extension<Services>,
    Path(address): Path<String>,
) -> AppResult<Json<Vec<TransactionHistoryDto>>> {
    let transactions = services.history.recent_transactions(address).await?;
    let history = transactions.into_iter().map(TransactionHistoryDto::from).collect();

    Ok(Json(history))
}

/// 某地址收到的全部佣金
#[utoipa::path(
    get,
    path = "/api/v1/history/commissions/{address}",
    tag = "history",
    params(
        ("address" = String, Path, description = "账户地址")
    ),
    responses(
        (status = 200, description = "成功返回佣金列表", body = Vec<Commission>)
    )
)]
pub async fn commissions(
    Extension(services): Extension<Services>,
    Path(address): Path<String>,
) -> AppResult<Json<Vec<Commission>>> {
    let commissions = services.history.commissions_for_account(address).await?;

    Ok(Json(commissions))
}

pub struct HistoryController;
impl HistoryController {
    pub fn app() -> Router {
        Router::new()
            .route("/history/:address", get(recent_transactions))
            .route("/history/commissions/:address", get(commissions))
    }
}
