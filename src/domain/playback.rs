//! 재생 상태 도메인 엔티티/값 객체.
//! 원격 응답의 일시적 뷰이며 로컬에 캐시하지 않는다.

/// 트랙(또는 에피소드) 요약 정보.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackInfo {
    pub id: Option<String>,
    pub name: String,
    /// 첫 번째 아티스트(대표 아티스트)
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration_ms: u64,
}

impl TrackInfo {
    pub fn artist_or_unknown(&self) -> &str {
        self.artist.as_deref().unwrap_or("unknown artist")
    }

    pub fn album_or_unknown(&self) -> &str {
        self.album.as_deref().unwrap_or("unknown album")
    }
}

/// 반복 재생 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatState {
    #[default]
    Off,
    Track,
    Context,
}

impl RepeatState {
    /// API 문자열(`off`/`track`/`context`)을 해석한다. 알 수 없는 값은 `Off`로 본다.
    pub fn from_api(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "track" => Self::Track,
            "context" => Self::Context,
            _ => Self::Off,
        }
    }

    pub fn as_api(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Track => "track",
            Self::Context => "context",
        }
    }
}

/// Spotify Connect 재생 장치.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Device {
    pub id: Option<String>,
    pub name: String,
    pub kind: String,
    pub is_active: bool,
    pub volume_percent: Option<u8>,
}

/// 특정 시점의 재생 상태 스냅샷.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaybackSnapshot {
    pub item: Option<TrackInfo>,
    pub progress_ms: u64,
    pub is_playing: bool,
    pub shuffle_state: bool,
    pub repeat_state: RepeatState,
    pub device: Option<Device>,
}

impl PlaybackSnapshot {
    pub fn duration_ms(&self) -> u64 {
        self.item.as_ref().map(|t| t.duration_ms).unwrap_or(0)
    }

    pub fn volume_percent(&self) -> Option<u8> {
        self.device.as_ref().and_then(|d| d.volume_percent)
    }
}

/// 최근 재생 기록 한 건.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub track: TrackInfo,
    pub played_at: String,
}

/// 재생 대기열 뷰.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueueView {
    pub current: Option<TrackInfo>,
    pub upcoming: Vec<TrackInfo>,
}

/// 사용자 플레이리스트 요약.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub name: String,
    pub owner: Option<String>,
    pub track_count: u32,
}

/// `play` 명령의 하위 동작.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportAction {
    Resume,
    Pause,
    Next,
    Previous,
}

/// 좋아요 목록 변경 동작.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryAction {
    Save,
    Unsave,
}
