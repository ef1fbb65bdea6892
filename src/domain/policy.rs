//! 도메인 정책(입력 검증, 볼륨 보정, 검색 플래그 해석).
//!
//! 검증 실패는 사용자에게 그대로 보여줄 짧은 메시지(`String`)로 반환한다.

use crate::domain::search::{SearchCategory, SearchRequest};

pub const INVALID_TIME: &str = "invalid time";
pub const INVALID_VOLUME: &str = "invalid volume";
pub const INVALID_COUNT: &str = "invalid count";
pub const INVALID_AMOUNT: &str = "invalid amount";
pub const INVALID_DEVICE: &str = "invalid device";
pub const NO_QUERY: &str = "no query detected";

/// 부호만 입력했을 때(`+`/`-`) 적용할 볼륨 단계.
pub const DEFAULT_VOLUME_STEP: i64 = 10;
pub const MAX_VOLUME: i64 = 100;

pub const DEFAULT_SEARCH_LIMIT: u32 = 5;
pub const FILTERED_SEARCH_LIMIT: u32 = 10;
/// Web API 페이지 최대 크기(search/recently-played 공통)
pub const MAX_PAGE_LIMIT: u32 = 50;

/// `seek` 입력값. 단위는 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekTarget {
    Absolute(i64),
    Relative(i64),
}

/// `seek` 인자(초 단위 정수, 부호가 있으면 상대 이동)를 해석한다.
pub fn parse_seek(raw: &str) -> Result<SeekTarget, String> {
    let arg = raw.trim();
    let seconds: i64 = arg.parse().map_err(|_| INVALID_TIME.to_string())?;
    let ms = seconds
        .checked_mul(1000)
        .ok_or_else(|| INVALID_TIME.to_string())?;

    if is_signed(arg) {
        Ok(SeekTarget::Relative(ms))
    } else {
        Ok(SeekTarget::Absolute(ms))
    }
}

/// 현재 위치/곡 길이를 기준으로 최종 seek 위치를 계산한다.
/// 결과는 항상 `[0, duration_ms]` 범위 안이어야 한다.
pub fn resolve_seek_position(
    target: SeekTarget,
    progress_ms: u64,
    duration_ms: u64,
) -> Result<u64, String> {
    let duration = i64::try_from(duration_ms).map_err(|_| INVALID_TIME.to_string())?;
    let progress = i64::try_from(progress_ms).map_err(|_| INVALID_TIME.to_string())?;

    let step = match target {
        SeekTarget::Absolute(ms) | SeekTarget::Relative(ms) => ms,
    };
    if step > duration || step < -duration {
        return Err(INVALID_TIME.to_string());
    }

    let position = match target {
        SeekTarget::Absolute(ms) => ms,
        SeekTarget::Relative(ms) => progress + ms,
    };
    if !(0..=duration).contains(&position) {
        return Err(INVALID_TIME.to_string());
    }

    Ok(position as u64)
}

/// `volume` 입력값.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeChange {
    Absolute(i64),
    Relative(i64),
}

/// `volume` 인자를 해석한다.
/// - 숫자: 절대값, 부호가 있으면 상대값
/// - 숫자가 아니지만 `+`/`-`로 시작: 기본 단계(±10)
pub fn parse_volume(raw: &str) -> Result<VolumeChange, String> {
    let arg = raw.trim();
    match arg.parse::<i64>() {
        Ok(value) if is_signed(arg) => Ok(VolumeChange::Relative(value)),
        Ok(value) => Ok(VolumeChange::Absolute(value)),
        Err(_) if arg.starts_with('+') => Ok(VolumeChange::Relative(DEFAULT_VOLUME_STEP)),
        Err(_) if arg.starts_with('-') => Ok(VolumeChange::Relative(-DEFAULT_VOLUME_STEP)),
        Err(_) => Err(INVALID_VOLUME.to_string()),
    }
}

/// 현재 볼륨에 변경을 적용하고 `[0, 100]`으로 보정한다.
pub fn apply_volume(change: VolumeChange, current: u8) -> u8 {
    let target = match change {
        VolumeChange::Absolute(value) => value,
        VolumeChange::Relative(step) => i64::from(current).saturating_add(step),
    };
    target.clamp(0, MAX_VOLUME) as u8
}

/// `search [-a|-b|-p|-t] [-c N] query` 입력을 검색 요청으로 변환한다.
///
/// 선행 옵션(필터 1개, `-c N`)은 순서에 상관없이 쿼리 앞에만 올 수 있다.
/// 선행 옵션 안에서 `-c`가 두 번 나오면 `invalid count`.
/// 필터가 없으면 전체 카테고리를 카테고리당 5개씩 조회한다.
pub fn parse_search(raw: &str) -> Result<SearchRequest, String> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let mut category: Option<SearchCategory> = None;
    let mut count: Option<u32> = None;

    let mut idx = 0;
    while idx < tokens.len() {
        let token = tokens[idx];
        if category.is_none()
            && let Some(parsed) = SearchCategory::from_flag(token)
        {
            category = Some(parsed);
            idx += 1;
            continue;
        }
        if token == "-c" || token == "--count" {
            if count.is_some() {
                return Err(INVALID_COUNT.to_string());
            }
            let value = tokens.get(idx + 1).ok_or_else(|| INVALID_COUNT.to_string())?;
            count = Some(parse_page_limit(value, INVALID_COUNT)?);
            idx += 2;
            continue;
        }
        break;
    }

    let query = tokens[idx..].join(" ");
    if query.is_empty() {
        return Err(NO_QUERY.to_string());
    }

    let (categories, default_limit) = match category {
        Some(single) => (vec![single], FILTERED_SEARCH_LIMIT),
        None => (SearchCategory::ALL.to_vec(), DEFAULT_SEARCH_LIMIT),
    };

    Ok(SearchRequest {
        query,
        categories,
        limit: count.unwrap_or(default_limit),
    })
}

/// `previous [n]` 인자를 해석한다. 미지정 시 `default_limit`.
pub fn parse_history_limit(raw: Option<&str>, default_limit: u32) -> Result<u32, String> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => parse_page_limit(value, INVALID_AMOUNT),
        None => Ok(default_limit.clamp(1, MAX_PAGE_LIMIT)),
    }
}

/// 1부터 시작하는 장치 번호를 0 기반 인덱스로 변환한다.
pub fn parse_device_index(raw: &str, device_count: usize) -> Result<usize, String> {
    let index: usize = raw.trim().parse().map_err(|_| INVALID_DEVICE.to_string())?;
    if index == 0 || index > device_count {
        return Err(INVALID_DEVICE.to_string());
    }
    Ok(index - 1)
}

fn parse_page_limit(raw: &str, message: &str) -> Result<u32, String> {
    let value: u32 = raw.trim().parse().map_err(|_| message.to_string())?;
    if value == 0 || value > MAX_PAGE_LIMIT {
        return Err(message.to_string());
    }
    Ok(value)
}

fn is_signed(arg: &str) -> bool {
    arg.starts_with('+') || arg.starts_with('-')
}
