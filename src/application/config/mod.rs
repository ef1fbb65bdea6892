//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.spotify.com/v1";
/// 상태 변경 호출 직후 원격 상태가 반영될 때까지 기다리는 시간(ms)
pub const DEFAULT_API_DELAY_MS: u64 = 200;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;
pub const DEFAULT_TOKEN_ENV: &str = "SPOTIFY_TOKEN";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Web API 인증 토큰 설정
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// Web API base URL override(선택)
    pub api_base: Option<String>,
    /// 상태 변경 후 대기 시간(ms)
    pub api_delay_ms: Option<u64>,
    /// HTTP 요청 타임아웃(ms)
    pub request_timeout_ms: Option<u64>,
    /// `previous` 기본 조회 개수
    pub history_limit: Option<u32>,
    /// 검색/재생 조회에 사용할 마켓(ISO 3166-1 alpha-2, 예: KR)
    pub market: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AuthConfig {
    /// 고정 토큰(민감정보: 권장하지 않음)
    pub token: Option<String>,
    /// 토큰을 읽을 환경변수 이름(기본 SPOTIFY_TOKEN)
    pub token_env: Option<String>,
    /// 토큰을 stdout으로 출력하는 커맨드(예: ["spotify-token", "--print"])
    pub token_command: Option<Vec<String>>,
}

impl Config {
    pub fn api_base(&self) -> String {
        self.defaults
            .api_base
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn api_delay(&self) -> Duration {
        Duration::from_millis(self.defaults.api_delay_ms.unwrap_or(DEFAULT_API_DELAY_MS))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(
            self.defaults
                .request_timeout_ms
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        )
    }

    pub fn history_limit(&self) -> u32 {
        self.defaults.history_limit.unwrap_or(DEFAULT_HISTORY_LIMIT)
    }

    pub fn market(&self) -> Option<String> {
        self.defaults
            .market
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_ascii_uppercase)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
        self.auth.merge_from(other.auth);
    }
}

impl DefaultsConfig {
    pub fn merge_from(&mut self, other: DefaultsConfig) {
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
        if other.api_delay_ms.is_some() {
            self.api_delay_ms = other.api_delay_ms;
        }
        if other.request_timeout_ms.is_some() {
            self.request_timeout_ms = other.request_timeout_ms;
        }
        if other.history_limit.is_some() {
            self.history_limit = other.history_limit;
        }
        if other.market.is_some() {
            self.market = other.market;
        }
    }
}

impl AuthConfig {
    pub fn token_env(&self) -> &str {
        self.token_env
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_TOKEN_ENV)
    }

    pub fn merge_from(&mut self, other: AuthConfig) {
        if other.token.is_some() {
            self.token = other.token;
        }
        if other.token_env.is_some() {
            self.token_env = other.token_env;
        }
        if other.token_command.is_some() {
            self.token_command = other.token_command;
        }
    }
}
