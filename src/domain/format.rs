//! 재생 정보/검색 결과를 한 줄 텍스트로 변환하는 규칙.

use crate::domain::playback::{
    Device, HistoryEntry, PlaybackSnapshot, PlaylistSummary, RepeatState, TrackInfo,
};
use crate::domain::search::SearchItem;

/// ms 값을 `M:SS`(1시간 이상이면 `H:MM:SS`) 형식으로 변환한다.
pub fn ms_to_time(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// `position / duration` 타임스탬프.
pub fn timestamp(snapshot: &PlaybackSnapshot) -> String {
    format!(
        "{} / {}",
        ms_to_time(snapshot.progress_ms),
        ms_to_time(snapshot.duration_ms())
    )
}

/// `[Playing - 0:05 / 4:24] Song by Artist on Album`
pub fn now_playing_line(snapshot: &PlaybackSnapshot) -> Option<String> {
    let item = snapshot.item.as_ref()?;
    let state = if snapshot.is_playing {
        "Playing"
    } else {
        "Stopped"
    };

    Some(format!(
        "[{state} - {}] {} by {} on {}",
        timestamp(snapshot),
        item.name,
        item.artist_or_unknown(),
        item.album_or_unknown()
    ))
}

pub fn repeat_state_line(state: RepeatState) -> &'static str {
    match state {
        RepeatState::Context => "repeat is enabled",
        RepeatState::Off => "repeat is disabled",
        RepeatState::Track => "repeating track",
    }
}

pub fn shuffle_state_line(enabled: bool) -> &'static str {
    if enabled {
        "shuffle is enabled"
    } else {
        "shuffle is disabled"
    }
}

pub fn search_item_line(item: &SearchItem) -> String {
    match item {
        SearchItem::Track {
            name,
            artist,
            album,
        } => format!(
            "track - {name} by {} on {}",
            artist.as_deref().unwrap_or("unknown artist"),
            album.as_deref().unwrap_or("unknown album")
        ),
        SearchItem::Artist { name } => format!("artist - {name}"),
        SearchItem::Album { name, artist } => format!(
            "album - {name} by {}",
            artist.as_deref().unwrap_or("unknown artist")
        ),
        SearchItem::Playlist { name, .. } => format!("playlist - {name}"),
    }
}

/// `Track by Artist`
pub fn track_line(track: &TrackInfo) -> String {
    format!("{} by {}", track.name, track.artist_or_unknown())
}

/// 1부터 시작하는 순번 목록 한 줄.
pub fn numbered_line(index: usize, text: &str) -> String {
    format!("{}: {}", index + 1, text)
}

pub fn history_line(index: usize, entry: &HistoryEntry) -> String {
    numbered_line(index, &track_line(&entry.track))
}

/// 활성 장치는 `*`로 표시한다.
pub fn device_line(index: usize, device: &Device) -> String {
    let marker = if device.is_active { "*" } else { " " };
    let volume = device
        .volume_percent
        .map(|v| format!("{v}%"))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{marker}{}: {} ({}, volume {volume})",
        index + 1,
        device.name,
        device.kind.to_ascii_lowercase()
    )
}

pub fn playlist_line(index: usize, playlist: &PlaylistSummary) -> String {
    let unit = if playlist.track_count == 1 {
        "track"
    } else {
        "tracks"
    };
    numbered_line(
        index,
        &format!("{} ({} {unit})", playlist.name, playlist.track_count),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(is_playing: bool) -> PlaybackSnapshot {
        PlaybackSnapshot {
            item: Some(TrackInfo {
                id: Some("id-1".to_string()),
                name: "Make Me Wanna Die".to_string(),
                artist: Some("The Pretty Reckless".to_string()),
                album: Some("Make Me Wanna Die".to_string()),
                duration_ms: 264_000,
            }),
            progress_ms: 5_000,
            is_playing,
            ..PlaybackSnapshot::default()
        }
    }

    #[test]
    fn ms_to_time_pads_seconds() {
        assert_eq!(ms_to_time(65_000), "1:05");
        assert_eq!(ms_to_time(0), "0:00");
        assert_eq!(ms_to_time(264_999), "4:24");
        assert_eq!(ms_to_time(3_725_000), "1:02:05");
    }

    #[test]
    fn now_playing_line_reports_state_and_timestamp() {
        assert_eq!(
            now_playing_line(&snapshot(true)).unwrap(),
            "[Playing - 0:05 / 4:24] Make Me Wanna Die by The Pretty Reckless on Make Me Wanna Die"
        );
        assert!(now_playing_line(&snapshot(false))
            .unwrap()
            .starts_with("[Stopped - 0:05 / 4:24]"));
        assert_eq!(now_playing_line(&PlaybackSnapshot::default()), None);
    }

    #[test]
    fn search_items_use_type_specific_layout() {
        let track = SearchItem::Track {
            name: "Seven Nation Army".to_string(),
            artist: Some("The White Stripes".to_string()),
            album: Some("Elephant".to_string()),
        };
        assert_eq!(
            search_item_line(&track),
            "track - Seven Nation Army by The White Stripes on Elephant"
        );

        let album = SearchItem::Album {
            name: "Elephant".to_string(),
            artist: Some("The White Stripes".to_string()),
        };
        assert_eq!(search_item_line(&album), "album - Elephant by The White Stripes");

        let playlist = SearchItem::Playlist {
            name: "cool songs".to_string(),
            owner: Some("someone".to_string()),
        };
        assert_eq!(search_item_line(&playlist), "playlist - cool songs");
    }

    #[test]
    fn device_line_marks_active_device() {
        let device = Device {
            id: Some("d1".to_string()),
            name: "Kitchen".to_string(),
            kind: "Speaker".to_string(),
            is_active: true,
            volume_percent: Some(40),
        };
        assert_eq!(device_line(0, &device), "*1: Kitchen (speaker, volume 40%)");
    }
}
