//! 재생 위치 이동 유스케이스.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{PlaybackGateway, Reporter};
use crate::application::usecases::{discard_failure, settle};
use crate::domain::format::ms_to_time;
use crate::domain::policy::{parse_seek, resolve_seek_position};

pub struct SeekUseCase<'a> {
    pub gateway: &'a dyn PlaybackGateway,
    pub reporter: &'a dyn Reporter,
    pub settle_delay: Duration,
}

impl<'a> SeekUseCase<'a> {
    /// `seek [+/-]<seconds>`
    /// - 숫자가 아니거나 곡 범위를 벗어나면 `invalid time`으로 중단한다.
    pub async fn execute(&self, arg: &str) -> Result<()> {
        let target = match parse_seek(arg) {
            Ok(target) => target,
            Err(msg) => {
                self.reporter.error(&msg);
                return Ok(());
            }
        };

        let Some(snapshot) = self.gateway.currently_playing().await? else {
            self.reporter.error("nothing is playing");
            return Ok(());
        };
        let duration_ms = snapshot.duration_ms();

        let position = match resolve_seek_position(target, snapshot.progress_ms, duration_ms) {
            Ok(position) => position,
            Err(msg) => {
                self.reporter.error(&msg);
                return Ok(());
            }
        };

        let succeeded = discard_failure("seek", self.gateway.seek(position).await);
        settle(self.settle_delay).await;

        if succeeded {
            self.reporter.line(&format!(
                "position: {} / {}",
                ms_to_time(position),
                ms_to_time(duration_ms)
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::testing::{FakeGateway, RecordingReporter, playing_snapshot};

    async fn run(gateway: &FakeGateway, arg: &str) -> Vec<String> {
        let reporter = RecordingReporter::default();
        SeekUseCase {
            gateway,
            reporter: &reporter,
            settle_delay: Duration::ZERO,
        }
        .execute(arg)
        .await
        .unwrap();
        reporter.lines()
    }

    #[tokio::test]
    async fn rejects_non_numeric_time_without_remote_calls() {
        let gateway = FakeGateway::with_snapshot(playing_snapshot(50));

        assert_eq!(run(&gateway, "abc").await, vec!["error: invalid time".to_string()]);
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn rejects_targets_beyond_duration_in_either_direction() {
        let gateway = FakeGateway::with_snapshot(playing_snapshot(50));

        assert_eq!(run(&gateway, "300").await, vec!["error: invalid time".to_string()]);
        assert_eq!(run(&gateway, "-300").await, vec!["error: invalid time".to_string()]);
        assert!(!gateway.calls().iter().any(|c| c.starts_with("seek")));
    }

    #[tokio::test]
    async fn absolute_and_relative_seek() {
        let gateway = FakeGateway::with_snapshot(playing_snapshot(50));

        assert_eq!(run(&gateway, "65").await, vec!["position: 1:05 / 4:24".to_string()]);
        // 현재 위치가 1:05로 갱신된 뒤 +10초
        assert_eq!(run(&gateway, "+10").await, vec!["position: 1:15 / 4:24".to_string()]);

        let seeks: Vec<String> = gateway
            .calls()
            .into_iter()
            .filter(|c| c.starts_with("seek"))
            .collect();
        assert_eq!(seeks, vec!["seek 65000".to_string(), "seek 75000".to_string()]);
    }

    #[tokio::test]
    async fn nothing_playing_is_reported() {
        let gateway = FakeGateway::default();
        assert_eq!(run(&gateway, "10").await, vec!["error: nothing is playing".to_string()]);
    }
}
