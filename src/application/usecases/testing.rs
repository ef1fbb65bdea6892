//! 유스케이스 테스트용 가짜 포트 구현.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Result, bail};
use async_trait::async_trait;
use tokio::time::Instant;

use crate::application::ports::{PlaybackGateway, Reporter, UserConfirmer};
use crate::domain::playback::{
    Device, HistoryEntry, PlaybackSnapshot, PlaylistSummary, QueueView, RepeatState, TrackInfo,
};
use crate::domain::search::{SearchRequest, SearchResults};

pub(crate) fn track(id: &str, name: &str, artist: &str, album: &str) -> TrackInfo {
    TrackInfo {
        id: Some(id.to_string()),
        name: name.to_string(),
        artist: Some(artist.to_string()),
        album: Some(album.to_string()),
        duration_ms: 264_000,
    }
}

pub(crate) fn playing_snapshot(volume: u8) -> PlaybackSnapshot {
    PlaybackSnapshot {
        item: Some(track(
            "track-1",
            "Make Me Wanna Die",
            "The Pretty Reckless",
            "Make Me Wanna Die",
        )),
        progress_ms: 5_000,
        is_playing: true,
        shuffle_state: false,
        repeat_state: RepeatState::Off,
        device: Some(Device {
            id: Some("device-1".to_string()),
            name: "Laptop".to_string(),
            kind: "Computer".to_string(),
            is_active: true,
            volume_percent: Some(volume),
        }),
    }
}

/// 호출 기록과 상태 변경을 흉내 내는 게이트웨이.
#[derive(Default)]
pub(crate) struct FakeGateway {
    pub snapshot: Mutex<Option<PlaybackSnapshot>>,
    pub devices: Vec<Device>,
    pub history: Vec<HistoryEntry>,
    pub queue: QueueView,
    pub playlists: Vec<PlaylistSummary>,
    pub search_results: SearchResults,
    pub fail_mutations: bool,
    pub fail_reads: bool,
    pub calls: Mutex<Vec<String>>,
    pub call_times: Mutex<Vec<Instant>>,
    pub searches: Mutex<Vec<SearchRequest>>,
    pub signed_out: AtomicBool,
}

impl FakeGateway {
    pub fn with_snapshot(snapshot: PlaybackSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(Some(snapshot)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// 호출과 그 시점(tokio 시계 기준)을 함께 돌려준다.
    pub fn timed_calls(&self) -> Vec<(String, Instant)> {
        let calls = self.calls.lock().unwrap();
        let times = self.call_times.lock().unwrap();
        calls.iter().cloned().zip(times.iter().copied()).collect()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
        self.call_times.lock().unwrap().push(Instant::now());
    }

    fn mutate(&self, call: String, apply: impl FnOnce(&mut PlaybackSnapshot)) -> Result<()> {
        self.record(call);
        if self.fail_mutations {
            bail!("player command failed: no active device");
        }
        if let Some(snapshot) = self.snapshot.lock().unwrap().as_mut() {
            apply(snapshot);
        }
        Ok(())
    }

    fn read_snapshot(&self, call: &str) -> Result<Option<PlaybackSnapshot>> {
        self.record(call);
        if self.fail_reads {
            bail!("service unavailable");
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }
}

#[async_trait]
impl PlaybackGateway for FakeGateway {
    fn has_credential(&self) -> bool {
        !self.signed_out.load(Ordering::SeqCst)
    }

    fn sign_out(&self) {
        self.signed_out.store(true, Ordering::SeqCst);
    }

    async fn playback(&self) -> Result<Option<PlaybackSnapshot>> {
        self.read_snapshot("playback")
    }

    async fn currently_playing(&self) -> Result<Option<PlaybackSnapshot>> {
        self.read_snapshot("currently_playing")
    }

    async fn resume(&self) -> Result<()> {
        self.mutate("resume".to_string(), |s| s.is_playing = true)
    }

    async fn pause(&self) -> Result<()> {
        self.mutate("pause".to_string(), |s| s.is_playing = false)
    }

    async fn next(&self) -> Result<()> {
        self.mutate("next".to_string(), |_| {})
    }

    async fn previous(&self) -> Result<()> {
        self.mutate("previous".to_string(), |_| {})
    }

    async fn seek(&self, position_ms: u64) -> Result<()> {
        self.mutate(format!("seek {position_ms}"), |s| s.progress_ms = position_ms)
    }

    async fn set_volume(&self, percent: u8) -> Result<()> {
        self.mutate(format!("volume {percent}"), |s| {
            if let Some(device) = s.device.as_mut() {
                device.volume_percent = Some(percent);
            }
        })
    }

    async fn set_repeat(&self, state: RepeatState) -> Result<()> {
        self.mutate(format!("repeat {}", state.as_api()), |s| s.repeat_state = state)
    }

    async fn set_shuffle(&self, enabled: bool) -> Result<()> {
        self.mutate(format!("shuffle {enabled}"), |s| s.shuffle_state = enabled)
    }

    async fn devices(&self) -> Result<Vec<Device>> {
        self.record("devices");
        Ok(self.devices.clone())
    }

    async fn transfer(&self, device_id: &str) -> Result<()> {
        self.mutate(format!("transfer {device_id}"), |_| {})
    }

    async fn recently_played(&self, limit: u32) -> Result<Vec<HistoryEntry>> {
        self.record(format!("recently_played {limit}"));
        Ok(self
            .history
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn queue(&self) -> Result<QueueView> {
        self.record("queue");
        Ok(self.queue.clone())
    }

    async fn save_tracks(&self, ids: &[String]) -> Result<()> {
        self.mutate(format!("save {}", ids.join(",")), |_| {})
    }

    async fn remove_saved_tracks(&self, ids: &[String]) -> Result<()> {
        self.mutate(format!("unsave {}", ids.join(",")), |_| {})
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchResults> {
        self.record("search");
        if self.fail_reads {
            bail!("service unavailable");
        }
        self.searches.lock().unwrap().push(request.clone());
        Ok(self.search_results.clone())
    }

    async fn playlists(&self, limit: u32) -> Result<Vec<PlaylistSummary>> {
        self.record(format!("playlists {limit}"));
        Ok(self.playlists.clone())
    }
}

/// 출력 라인을 수집하는 리포터.
#[derive(Default)]
pub(crate) struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }

    fn warn(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("warn: {message}"));
    }

    fn error(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("error: {message}"));
    }
}

pub(crate) struct FixedConfirmer(pub bool);

impl UserConfirmer for FixedConfirmer {
    fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(self.0)
    }
}
