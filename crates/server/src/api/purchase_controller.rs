use crate::{
    dtos::purchase_dto::{PurchaseRequestDto, PurchaseResponseDto},
    extractors::validation_extractor::ValidationExtractor,
    services::Services,
};
use axum::{extract::Path, http::StatusCode, routing::post, Extension, Json, Router};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use utils::{AppError, AppResult};

/// 执行一笔购买
///
/// 借记买家并沿推荐链逐级发放佣金，整笔操作原子生效：
/// 任何一步失败都不会留下部分写入
#[utoipa::path(
    post,
    path = "/api/v1/purchase/{address}",
    tag = "purchase",
    params(
        ("address" = String, Path, description = "买家账户地址")
    ),
    request_body = PurchaseRequestDto,
    responses(
        (status = 201, description = "购买成功", body = PurchaseResponseDto),
        (status = 400, description = "金额非法"),
        (status = 500, description = "账务单元内失败，整笔已回滚")
    )
)]
pub async fn purchase(
    Extension(services): Extension<Services>,
    Path(address): Path<String>,
    ValidationExtractor(req): ValidationExtractor<PurchaseRequestDto>,
) -> AppResult<(StatusCode, Json<PurchaseResponseDto>)> {
    let amount = Decimal::from_f64(req.amount)
        .ok_or_else(|| AppError::InvalidAmount(format!("amount {} is not representable", req.amount)))?;

    let outcome = services.purchase.execute(address, amount).await?;

    Ok((StatusCode::CREATED, Json(PurchaseResponseDto::from(outcome))))
}

pub struct PurchaseController;
impl PurchaseController {
    pub fn app() -> Router {
        Router::new().route("/purchase/:address", post(purchase))
    }
}
