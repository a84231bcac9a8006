use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rust_decimal::Decimal;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// 购买金额必须为正数，在账务单元开启之前就拒绝
    #[error("invalid purchase amount: {0}")]
    InvalidAmount(String),

    #[error("account {0} does not exist")]
    AccountNotFound(String),

    #[error("balance {balance} is insufficient for amount {amount}")]
    InsufficientBalance { balance: Decimal, amount: Decimal },

    #[error("{0}")]
    StoreFailure(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("unexpected error has occurred")]
    InternalServerError,

    #[error("{0}")]
    InternalServerErrorWithContext(String),

    #[error(transparent)]
    InvalidRequest(#[from] validator::ValidationErrors),

    #[error(transparent)]
    AxumJsonRejection(#[from] JsonRejection),

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::StoreFailure(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Self::InvalidAmount(_) | Self::BadRequest(_) | Self::InvalidRequest(_) | Self::AxumJsonRejection(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            // 账务单元内部的失败对外统一按服务器错误返回，调用方重试整笔购买
            Self::AccountNotFound(_) | Self::InsufficientBalance { .. } | Self::StoreFailure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "errors": {
                "message": vec![error_message],
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_amount_maps_to_bad_request() {
        let response = AppError::InvalidAmount("amount must be positive, got -10".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        println!("✅ 测试通过: InvalidAmount -> 400");
    }

    #[test]
    fn test_unit_failures_map_to_internal_server_error() {
        // 账务单元内部的三类失败都按500返回
        let not_found = AppError::AccountNotFound("9xQeWvG8".to_string()).into_response();
        assert_eq!(not_found.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let insufficient = AppError::InsufficientBalance {
            balance: Decimal::new(50, 0),
            amount: Decimal::new(100, 0),
        }
        .into_response();
        assert_eq!(insufficient.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let store = AppError::StoreFailure("write conflict".to_string()).into_response();
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
        println!("✅ 测试通过: 账务单元内部失败 -> 500");
    }

    #[test]
    fn test_lookup_and_conflict_mapping() {
        let not_found = AppError::NotFound("account not found".to_string()).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let conflict = AppError::Conflict("accounts already exist".to_string()).into_response();
        assert_eq!(conflict.status(), StatusCode::CONFLICT);
        println!("✅ 测试通过: NotFound -> 404, Conflict -> 409");
    }
}
