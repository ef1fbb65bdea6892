//! 쉘 명령별 유스케이스 모음.

pub mod devices;
pub mod history;
pub mod inspect_config;
pub mod library;
pub mod logout;
pub mod now_playing;
pub mod playback_mode;
pub mod search;
pub mod seek;
pub mod transport;
pub mod volume;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use anyhow::Result;
use tracing::debug;

/// 상태 변경 호출 직후 원격 상태가 반영될 시간을 준다.
/// 재시도/백오프가 아니라 고정 대기다.
pub(crate) async fn settle(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// 재생 제어 호출은 best-effort다. 실패는 로그로만 남기고 화면에는 표시하지 않는다.
pub(crate) fn discard_failure(action: &str, result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            debug!("{action} failed (ignored): {err:#}");
            false
        }
    }
}
