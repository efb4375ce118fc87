use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Employee not found for {0}")]
    NotFound(LookupKey),

    #[error("Upstream directory unavailable: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    #[error("Malformed upstream payload: {0}")]
    UpstreamPayload(#[from] serde_json::Error),

    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

/// 查找失败时携带的键，用于错误信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Id(String),
    Name(String),
}

impl std::fmt::Display for LookupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupKey::Id(id) => write!(f, "id: {}", id),
            LookupKey::Name(name) => write!(f, "name: {}", name),
        }
    }
}

impl AppError {
    pub fn not_found_id(id: impl Into<String>) -> Self {
        AppError::NotFound(LookupKey::Id(id.into()))
    }

    pub fn not_found_name(name: impl Into<String>) -> Self {
        AppError::NotFound(LookupKey::Name(name.into()))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamUnavailable(_)
            | AppError::UpstreamPayload(_)
            | AppError::MalformedInput(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 错误信息直接作为响应体
        (self.status_code(), self.to_string()).into_response()
    }
}
