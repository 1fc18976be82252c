//! 错误类型定义

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ApiResponse;

/// 预测服务错误
#[derive(Debug, Error)]
pub enum PredictError {
    /// 请求参数缺失或非法
    #[error("{0}")]
    Validation(String),
    /// 未知的模型类型
    #[error("unknown model type: {0}")]
    UnknownModel(String),
    /// 价格序列为空，无法取得最新价
    #[error("price series is empty")]
    EmptySeries,
    /// 计算过程中的内部错误
    #[error("internal error: {0}")]
    Internal(String),
}

impl PredictError {
    /// 面向调用方的错误信息，内部错误不暴露细节
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(_) | Self::UnknownModel(_) => self.to_string(),
            Self::EmptySeries | Self::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl ResponseError for PredictError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::UnknownModel(_) => StatusCode::BAD_REQUEST,
            Self::EmptySeries | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(self.public_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PredictError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PredictError::UnknownModel("gpt".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(PredictError::EmptySeries.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = PredictError::Internal("NaN in ensemble".into());
        assert_eq!(err.public_message(), "Internal server error");
        assert_eq!(
            PredictError::UnknownModel("gpt".into()).public_message(),
            "unknown model type: gpt"
        );
    }
}
