//! 검색 요청/결과 값 객체.

/// 검색 대상 카테고리.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCategory {
    Album,
    Artist,
    Playlist,
    Track,
}

impl SearchCategory {
    /// 필터가 없을 때 조회하는 전체 카테고리(출력 순서이기도 하다).
    pub const ALL: [SearchCategory; 4] = [
        SearchCategory::Album,
        SearchCategory::Artist,
        SearchCategory::Track,
        SearchCategory::Playlist,
    ];

    pub fn as_api(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Artist => "artist",
            Self::Playlist => "playlist",
            Self::Track => "track",
        }
    }

    /// 단일 카테고리 필터 플래그를 해석한다.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "-a" | "--artist" => Some(Self::Artist),
            "-b" | "--album" => Some(Self::Album),
            "-p" | "--playlist" => Some(Self::Playlist),
            "-t" | "--track" => Some(Self::Track),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub categories: Vec<SearchCategory>,
    /// 카테고리별 최대 결과 수
    pub limit: u32,
}

impl SearchRequest {
    pub fn type_param(&self) -> String {
        self.categories
            .iter()
            .map(|c| c.as_api())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchItem {
    Track {
        name: String,
        artist: Option<String>,
        album: Option<String>,
    },
    Artist {
        name: String,
    },
    Album {
        name: String,
        artist: Option<String>,
    },
    Playlist {
        name: String,
        owner: Option<String>,
    },
}

/// 요청 카테고리 순서대로 정렬된 검색 결과.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults {
    pub items: Vec<SearchItem>,
}
