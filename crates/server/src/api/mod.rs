pub mod account_controller;
pub mod history_controller;
pub mod purchase_controller;

#[cfg(test)]
mod tests;

use axum::routing::{get, Router};

/// 系统健康检查
///
/// 返回服务器运行状态
///
/// # 响应
///
/// 返回简单的状态消息字符串
#[utoipa::path(
    get,
    path = "/api/v1/",
    responses(
        (status = 200, description = "服务器运行正常", body = String)
    ),
    tag = "系统状态"
)]
pub async fn health() -> &'static str {
    "Server is running! 🚀"
}

// 各控制器的路由自带完整路径前缀，直接merge避免重复嵌套
pub fn app() -> Router {
    Router::new()
        .route("/", get(health))
        .merge(purchase_controller::PurchaseController::app())
        .merge(history_controller::HistoryController::app())
        .merge(account_controller::AccountController::app())
}
