//! Web API 응답 스키마와 도메인 변환.

use serde::Deserialize;

use crate::domain::playback::{
    Device, HistoryEntry, PlaybackSnapshot, PlaylistSummary, QueueView, RepeatState, TrackInfo,
};
use crate::domain::search::{SearchCategory, SearchItem, SearchResults};

/// `/me/player`, `/me/player/currently-playing` 공통 응답.
/// currently-playing에는 device/shuffle/repeat가 없으므로 모두 선택 필드다.
#[derive(Debug, Deserialize)]
pub(crate) struct PlaybackObject {
    pub device: Option<DeviceObject>,
    #[serde(default)]
    pub shuffle_state: bool,
    pub repeat_state: Option<String>,
    pub progress_ms: Option<u64>,
    #[serde(default)]
    pub is_playing: bool,
    pub item: Option<ItemObject>,
}

/// 트랙 또는 에피소드.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemObject {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
    pub album: Option<AlbumObject>,
    pub show: Option<ShowObject>,
    #[serde(default)]
    pub duration_ms: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistObject {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlbumObject {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ShowObject {
    pub name: String,
    pub publisher: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeviceObject {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub is_active: bool,
    pub volume_percent: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DevicesResponse {
    #[serde(default)]
    pub devices: Vec<DeviceObject>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayHistoryObject {
    pub track: ItemObject,
    #[serde(default)]
    pub played_at: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueueResponse {
    pub currently_playing: Option<ItemObject>,
    #[serde(default)]
    pub queue: Vec<ItemObject>,
}

/// 페이지 응답. search 결과의 항목은 null일 수 있다.
#[derive(Debug, Deserialize)]
pub(crate) struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<Option<T>>,
}

impl<T> Paging<T> {
    fn into_items(self) -> impl Iterator<Item = T> {
        self.items.into_iter().flatten()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistObject {
    pub name: String,
    pub owner: Option<OwnerObject>,
    pub tracks: Option<TracksRef>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnerObject {
    pub display_name: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TracksRef {
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub tracks: Option<Paging<ItemObject>>,
    pub artists: Option<Paging<ArtistObject>>,
    pub albums: Option<Paging<AlbumObject>>,
    pub playlists: Option<Paging<PlaylistObject>>,
}

impl PlaybackObject {
    pub fn into_snapshot(self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            item: self.item.map(ItemObject::into_track),
            progress_ms: self.progress_ms.unwrap_or(0),
            is_playing: self.is_playing,
            shuffle_state: self.shuffle_state,
            repeat_state: self
                .repeat_state
                .as_deref()
                .map(RepeatState::from_api)
                .unwrap_or_default(),
            device: self.device.map(DeviceObject::into_device),
        }
    }
}

impl ItemObject {
    /// 에피소드는 쇼 이름을 앨범, 퍼블리셔를 아티스트 자리에 채운다.
    pub fn into_track(self) -> TrackInfo {
        let artist = self
            .artists
            .into_iter()
            .next()
            .map(|a| a.name)
            .or_else(|| self.show.as_ref().and_then(|s| s.publisher.clone()));
        let album = self
            .album
            .map(|a| a.name)
            .or_else(|| self.show.map(|s| s.name));

        TrackInfo {
            id: self.id,
            name: self.name,
            artist,
            album,
            duration_ms: self.duration_ms,
        }
    }
}

impl DeviceObject {
    pub fn into_device(self) -> Device {
        Device {
            id: self.id,
            name: self.name,
            kind: self.kind,
            is_active: self.is_active,
            volume_percent: self.volume_percent,
        }
    }
}

impl PlayHistoryObject {
    pub fn into_entry(self) -> HistoryEntry {
        HistoryEntry {
            track: self.track.into_track(),
            played_at: self.played_at,
        }
    }
}

impl QueueResponse {
    pub fn into_view(self) -> QueueView {
        QueueView {
            current: self.currently_playing.map(ItemObject::into_track),
            upcoming: self.queue.into_iter().map(ItemObject::into_track).collect(),
        }
    }
}

impl PlaylistObject {
    pub fn into_summary(self) -> PlaylistSummary {
        PlaylistSummary {
            name: self.name,
            owner: self
                .owner
                .and_then(|o| o.display_name.or(o.id)),
            track_count: self.tracks.map(|t| t.total).unwrap_or(0),
        }
    }
}

impl SearchResponse {
    /// 요청한 카테고리 순서대로 결과를 펼친다.
    pub fn into_results(mut self, categories: &[SearchCategory]) -> SearchResults {
        let mut items = Vec::new();

        for category in categories {
            match category {
                SearchCategory::Track => {
                    if let Some(page) = self.tracks.take() {
                        items.extend(page.into_items().map(|t| {
                            let track = t.into_track();
                            SearchItem::Track {
                                name: track.name,
                                artist: track.artist,
                                album: track.album,
                            }
                        }));
                    }
                }
                SearchCategory::Artist => {
                    if let Some(page) = self.artists.take() {
                        items.extend(
                            page.into_items()
                                .map(|a| SearchItem::Artist { name: a.name }),
                        );
                    }
                }
                SearchCategory::Album => {
                    if let Some(page) = self.albums.take() {
                        items.extend(page.into_items().map(|a| SearchItem::Album {
                            artist: a.artists.into_iter().next().map(|artist| artist.name),
                            name: a.name,
                        }));
                    }
                }
                SearchCategory::Playlist => {
                    if let Some(page) = self.playlists.take() {
                        items.extend(page.into_items().map(|p| {
                            let summary = p.into_summary();
                            SearchItem::Playlist {
                                name: summary.name,
                                owner: summary.owner,
                            }
                        }));
                    }
                }
            }
        }

        SearchResults { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_player_state() {
        let raw = r#"{
            "device": {"id": "abc", "is_active": true, "name": "Laptop", "type": "Computer", "volume_percent": 64},
            "shuffle_state": true,
            "repeat_state": "context",
            "progress_ms": 5000,
            "is_playing": false,
            "item": {
                "id": "t1",
                "name": "Make Me Wanna Die",
                "duration_ms": 264000,
                "artists": [{"name": "The Pretty Reckless"}, {"name": "Guest"}],
                "album": {"name": "Light Me Up", "artists": []}
            }
        }"#;

        let snapshot = serde_json::from_str::<PlaybackObject>(raw)
            .unwrap()
            .into_snapshot();

        assert!(snapshot.shuffle_state);
        assert!(!snapshot.is_playing);
        assert_eq!(snapshot.repeat_state, RepeatState::Context);
        assert_eq!(snapshot.volume_percent(), Some(64));
        let item = snapshot.item.unwrap();
        assert_eq!(item.artist.as_deref(), Some("The Pretty Reckless"));
        assert_eq!(item.album.as_deref(), Some("Light Me Up"));
        assert_eq!(item.duration_ms, 264_000);
    }

    #[test]
    fn episode_uses_show_fields() {
        let raw = r#"{"id":"e1","name":"Episode 1","duration_ms":1000,
            "show":{"name":"Some Podcast","publisher":"Studio"}}"#;
        let track = serde_json::from_str::<ItemObject>(raw).unwrap().into_track();
        assert_eq!(track.artist.as_deref(), Some("Studio"));
        assert_eq!(track.album.as_deref(), Some("Some Podcast"));
    }

    #[test]
    fn search_results_follow_requested_order_and_skip_nulls() {
        let raw = r#"{
            "artists": {"items": [{"name": "Eminem"}]},
            "playlists": {"items": [null, {"name": "cool songs", "owner": {"display_name": "dj"}, "tracks": {"total": 3}}]},
            "albums": {"items": [{"name": "8 Mile", "artists": [{"name": "Eminem"}]}]}
        }"#;

        let results = serde_json::from_str::<SearchResponse>(raw)
            .unwrap()
            .into_results(&[
                SearchCategory::Album,
                SearchCategory::Artist,
                SearchCategory::Track,
                SearchCategory::Playlist,
            ]);

        assert_eq!(
            results.items,
            vec![
                SearchItem::Album {
                    name: "8 Mile".to_string(),
                    artist: Some("Eminem".to_string()),
                },
                SearchItem::Artist {
                    name: "Eminem".to_string(),
                },
                SearchItem::Playlist {
                    name: "cool songs".to_string(),
                    owner: Some("dj".to_string()),
                },
            ]
        );
    }

    #[test]
    fn parses_queue_and_devices() {
        let queue: QueueResponse = serde_json::from_str(
            r#"{"currently_playing": {"name": "Now", "artists": [{"name": "A"}]},
                "queue": [{"name": "Next", "artists": [{"name": "B"}]}]}"#,
        )
        .unwrap();
        let view = queue.into_view();
        assert_eq!(view.current.unwrap().name, "Now");
        assert_eq!(view.upcoming.len(), 1);

        let devices: DevicesResponse = serde_json::from_str(
            r#"{"devices": [{"id": null, "name": "TV", "type": "TV", "is_active": false, "volume_percent": null}]}"#,
        )
        .unwrap();
        let device = devices.devices.into_iter().next().unwrap().into_device();
        assert_eq!(device.id, None);
        assert_eq!(device.volume_percent, None);
    }
}
