//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::{AuthConfig, Config};
use crate::domain::playback::{
    Device, HistoryEntry, PlaybackSnapshot, PlaylistSummary, QueueView, RepeatState,
};
use crate::domain::search::{SearchRequest, SearchResults};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 인증 토큰 해석 결과.
#[derive(Debug, Clone)]
pub struct CredentialResolution {
    pub token: Option<String>,
    /// 토큰 출처 라벨(inline / env:NAME / cmd:...)
    pub source: Option<String>,
}

/// 설정(token/env/cmd)으로부터 런타임 토큰을 해석하는 포트.
pub trait CredentialResolver: Send + Sync {
    fn resolve(&self, auth: &AuthConfig) -> Result<CredentialResolution>;
}

/// 음악 스트리밍 Web API 연동 추상화 포트.
///
/// `Ok(None)`은 "재생 중인 항목 없음"(HTTP 204)을 뜻한다.
#[async_trait]
pub trait PlaybackGateway: Send + Sync {
    /// 세션 토큰 보유 여부
    fn has_credential(&self) -> bool;
    /// 세션 토큰을 폐기한다.
    fn sign_out(&self);

    async fn playback(&self) -> Result<Option<PlaybackSnapshot>>;
    async fn currently_playing(&self) -> Result<Option<PlaybackSnapshot>>;

    async fn resume(&self) -> Result<()>;
    async fn pause(&self) -> Result<()>;
    async fn next(&self) -> Result<()>;
    async fn previous(&self) -> Result<()>;
    async fn seek(&self, position_ms: u64) -> Result<()>;
    async fn set_volume(&self, percent: u8) -> Result<()>;
    async fn set_repeat(&self, state: RepeatState) -> Result<()>;
    async fn set_shuffle(&self, enabled: bool) -> Result<()>;

    async fn devices(&self) -> Result<Vec<Device>>;
    async fn transfer(&self, device_id: &str) -> Result<()>;

    async fn recently_played(&self, limit: u32) -> Result<Vec<HistoryEntry>>;
    async fn queue(&self) -> Result<QueueView>;

    async fn save_tracks(&self, ids: &[String]) -> Result<()>;
    async fn remove_saved_tracks(&self, ids: &[String]) -> Result<()>;

    async fn search(&self, request: &SearchRequest) -> Result<SearchResults>;
    async fn playlists(&self, limit: u32) -> Result<Vec<PlaylistSummary>>;
}

/// 설정과 토큰으로 게이트웨이를 생성하는 팩토리 포트.
pub trait GatewayFactory: Send + Sync {
    fn build(&self, config: &Config, token: Option<String>) -> Result<Box<dyn PlaybackGateway>>;
}

/// 콘솔 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn line(&self, line: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// 사용자 확인 입력 포트.
pub trait UserConfirmer: Send + Sync {
    fn confirm(&self, message: &str) -> Result<bool>;
}
