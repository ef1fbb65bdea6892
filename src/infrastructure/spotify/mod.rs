//! Spotify Web API 연동 구현.

pub mod error;
mod models;

use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_LENGTH};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use crate::application::ports::PlaybackGateway;
use crate::domain::playback::{
    Device, HistoryEntry, PlaybackSnapshot, PlaylistSummary, QueueView, RepeatState,
};
use crate::domain::search::{SearchRequest, SearchResults};

pub use error::{Result, SpotifyError};
use models::{
    DevicesResponse, Paging, PlayHistoryObject, PlaybackObject, PlaylistObject, QueueResponse,
    SearchResponse,
};

type Query<'q> = [(&'q str, String)];

/// 인증된 Web API 클라이언트. 프로세스 수명 동안 하나만 사용한다.
pub struct SpotifyClient {
    client: Client,
    api_base: String,
    market: Option<String>,
    token: Mutex<Option<String>>,
}

impl SpotifyClient {
    pub fn new(
        api_base: String,
        market: Option<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("spoticli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            market,
            token: Mutex::new(token),
        })
    }

    fn endpoint(&self, path: &str, query: &Query<'_>) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.api_base,
            path.trim_start_matches('/')
        ))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn market_query(&self) -> Vec<(&'static str, String)> {
        self.market
            .iter()
            .map(|m| ("market", m.clone()))
            .collect()
    }

    fn bearer(&self) -> Result<String> {
        self.token
            .lock()
            .ok()
            .and_then(|t| t.clone())
            .ok_or(SpotifyError::MissingCredential)
    }

    fn request(&self, method: Method, url: Url) -> Result<RequestBuilder> {
        // 공통 헤더/인증 적용.
        let token = self.bearer()?;
        Ok(self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .bearer_auth(token))
    }

    /// 요청을 보내고 본문을 반환한다. 204 또는 빈 본문은 `None`.
    async fn send(&self, req: RequestBuilder, label: &str) -> Result<Option<String>> {
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!("spotify: {label} -> {status}");

        if !status.is_success() {
            return Err(SpotifyError::from_response(status.as_u16(), &body));
        }
        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(body))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
    ) -> Result<Option<T>> {
        let url = self.endpoint(path, query)?;
        let req = self.request(Method::GET, url)?;
        match self.send(req, path).await? {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    async fn command(
        &self,
        method: Method,
        path: &str,
        query: &Query<'_>,
        body: Option<Value>,
    ) -> Result<()> {
        let url = self.endpoint(path, query)?;
        let req = self.request(method, url)?;
        // 본문 없는 PUT/POST도 Content-Length를 요구한다.
        let req = match body {
            Some(json) => req.json(&json),
            None => req.header(CONTENT_LENGTH, "0"),
        };
        self.send(req, path).await?;
        Ok(())
    }

    async fn player_state(&self, path: &str) -> Result<Option<PlaybackSnapshot>> {
        let state: Option<PlaybackObject> = self.get_json(path, &self.market_query()).await?;
        Ok(state.map(PlaybackObject::into_snapshot))
    }
}

#[async_trait]
impl PlaybackGateway for SpotifyClient {
    fn has_credential(&self) -> bool {
        self.token.lock().map(|t| t.is_some()).unwrap_or(false)
    }

    fn sign_out(&self) {
        if let Ok(mut token) = self.token.lock() {
            *token = None;
        }
    }

    async fn playback(&self) -> anyhow::Result<Option<PlaybackSnapshot>> {
        self.player_state("me/player")
            .await
            .context("spotify: failed to fetch playback state")
    }

    async fn currently_playing(&self) -> anyhow::Result<Option<PlaybackSnapshot>> {
        self.player_state("me/player/currently-playing")
            .await
            .context("spotify: failed to fetch currently playing track")
    }

    async fn resume(&self) -> anyhow::Result<()> {
        self.command(Method::PUT, "me/player/play", &[], None)
            .await
            .context("spotify: failed to resume playback")
    }

    async fn pause(&self) -> anyhow::Result<()> {
        self.command(Method::PUT, "me/player/pause", &[], None)
            .await
            .context("spotify: failed to pause playback")
    }

    async fn next(&self) -> anyhow::Result<()> {
        self.command(Method::POST, "me/player/next", &[], None)
            .await
            .context("spotify: failed to skip to next track")
    }

    async fn previous(&self) -> anyhow::Result<()> {
        self.command(Method::POST, "me/player/previous", &[], None)
            .await
            .context("spotify: failed to skip to previous track")
    }

    async fn seek(&self, position_ms: u64) -> anyhow::Result<()> {
        self.command(
            Method::PUT,
            "me/player/seek",
            &[("position_ms", position_ms.to_string())],
            None,
        )
        .await
        .context("spotify: failed to seek")
    }

    async fn set_volume(&self, percent: u8) -> anyhow::Result<()> {
        self.command(
            Method::PUT,
            "me/player/volume",
            &[("volume_percent", percent.to_string())],
            None,
        )
        .await
        .context("spotify: failed to set volume")
    }

    async fn set_repeat(&self, state: RepeatState) -> anyhow::Result<()> {
        self.command(
            Method::PUT,
            "me/player/repeat",
            &[("state", state.as_api().to_string())],
            None,
        )
        .await
        .context("spotify: failed to set repeat state")
    }

    async fn set_shuffle(&self, enabled: bool) -> anyhow::Result<()> {
        self.command(
            Method::PUT,
            "me/player/shuffle",
            &[("state", enabled.to_string())],
            None,
        )
        .await
        .context("spotify: failed to set shuffle state")
    }

    async fn devices(&self) -> anyhow::Result<Vec<Device>> {
        let resp: Option<DevicesResponse> = self
            .get_json("me/player/devices", &[])
            .await
            .context("spotify: failed to list devices")?;
        Ok(resp
            .map(|r| r.devices.into_iter().map(|d| d.into_device()).collect())
            .unwrap_or_default())
    }

    async fn transfer(&self, device_id: &str) -> anyhow::Result<()> {
        self.command(
            Method::PUT,
            "me/player",
            &[],
            Some(json!({ "device_ids": [device_id] })),
        )
        .await
        .context("spotify: failed to transfer playback")
    }

    async fn recently_played(&self, limit: u32) -> anyhow::Result<Vec<HistoryEntry>> {
        let resp: Option<Paging<PlayHistoryObject>> = self
            .get_json("me/player/recently-played", &[("limit", limit.to_string())])
            .await
            .context("spotify: failed to fetch recently played tracks")?;
        Ok(resp
            .map(|page| {
                page.items
                    .into_iter()
                    .flatten()
                    .map(PlayHistoryObject::into_entry)
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn queue(&self) -> anyhow::Result<QueueView> {
        let resp: Option<QueueResponse> = self
            .get_json("me/player/queue", &[])
            .await
            .context("spotify: failed to fetch queue")?;
        Ok(resp.map(QueueResponse::into_view).unwrap_or_default())
    }

    async fn save_tracks(&self, ids: &[String]) -> anyhow::Result<()> {
        self.command(Method::PUT, "me/tracks", &[("ids", ids.join(","))], None)
            .await
            .context("spotify: failed to save tracks")
    }

    async fn remove_saved_tracks(&self, ids: &[String]) -> anyhow::Result<()> {
        self.command(Method::DELETE, "me/tracks", &[("ids", ids.join(","))], None)
            .await
            .context("spotify: failed to remove saved tracks")
    }

    async fn search(&self, request: &SearchRequest) -> anyhow::Result<SearchResults> {
        let mut query = vec![
            ("q", request.query.clone()),
            ("type", request.type_param()),
            ("limit", request.limit.to_string()),
        ];
        query.extend(self.market_query());

        let resp: Option<SearchResponse> = self
            .get_json("search", &query)
            .await
            .context("spotify: search failed")?;
        Ok(resp
            .map(|r| r.into_results(&request.categories))
            .unwrap_or_default())
    }

    async fn playlists(&self, limit: u32) -> anyhow::Result<Vec<PlaylistSummary>> {
        let resp: Option<Paging<PlaylistObject>> = self
            .get_json("me/playlists", &[("limit", limit.to_string())])
            .await
            .context("spotify: failed to list playlists")?;
        Ok(resp
            .map(|page| {
                page.items
                    .into_iter()
                    .flatten()
                    .map(PlaylistObject::into_summary)
                    .collect()
            })
            .unwrap_or_default())
    }
}
