//! Web API 오류 분류.

use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpotifyError>;

/// REST 클라이언트가 반환하는 오류.
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// 세션 토큰 없음(미설정 또는 logout 이후)
    #[error("not logged in")]
    MissingCredential,

    /// 토큰 만료/권한 부족(401/403)
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    /// 재생 가능한 활성 장치 없음
    #[error("no active device found")]
    NoActiveDevice,

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("rate limit exceeded, please try again later")]
    RateLimited,

    #[error("spotify API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorObject,
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    #[serde(default)]
    message: String,
    reason: Option<String>,
}

impl SpotifyError {
    /// 실패 응답(상태 코드 + 본문)을 오류 종류로 변환한다.
    /// 본문은 `{"error":{"status":..,"message":..,"reason":..}}` 형식을 기대하고, 아니면 원문을 메시지로 쓴다.
    pub fn from_response(status: u16, body: &str) -> Self {
        let (message, reason) = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => (envelope.error.message, envelope.error.reason),
            Err(_) => (body.trim().to_string(), None),
        };

        if reason.as_deref() == Some("NO_ACTIVE_DEVICE") {
            return Self::NoActiveDevice;
        }

        match status {
            401 | 403 => Self::Unauthorized(message),
            404 => Self::NotFound(message),
            429 => Self::RateLimited,
            _ => Self::Api { status, message },
        }
    }
}
