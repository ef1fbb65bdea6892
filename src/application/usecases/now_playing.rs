//! 현재 재생 곡 표시 유스케이스.

use anyhow::Result;

use crate::application::ports::{PlaybackGateway, Reporter};
use crate::domain::format::now_playing_line;

/// `[Playing - 0:05 / 4:24] Song by Artist on Album` 한 줄을 출력한다.
pub struct NowPlayingUseCase<'a> {
    pub gateway: &'a dyn PlaybackGateway,
    pub reporter: &'a dyn Reporter,
}

impl<'a> NowPlayingUseCase<'a> {
    pub async fn execute(&self) -> Result<()> {
        let snapshot = self.gateway.currently_playing().await?;
        match snapshot.as_ref().and_then(now_playing_line) {
            Some(line) => self.reporter.line(&line),
            None => self.reporter.line("nothing is playing"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::testing::{FakeGateway, RecordingReporter, playing_snapshot};

    #[tokio::test]
    async fn prints_current_track_line() {
        let gateway = FakeGateway::with_snapshot(playing_snapshot(50));
        let reporter = RecordingReporter::default();

        NowPlayingUseCase {
            gateway: &gateway,
            reporter: &reporter,
        }
        .execute()
        .await
        .unwrap();

        assert_eq!(
            reporter.lines(),
            vec![
                "[Playing - 0:05 / 4:24] Make Me Wanna Die by The Pretty Reckless on Make Me Wanna Die"
                    .to_string()
            ]
        );
        assert_eq!(gateway.calls(), vec!["currently_playing".to_string()]);
    }

    #[tokio::test]
    async fn reports_idle_player() {
        let gateway = FakeGateway::default();
        let reporter = RecordingReporter::default();

        NowPlayingUseCase {
            gateway: &gateway,
            reporter: &reporter,
        }
        .execute()
        .await
        .unwrap();

        assert_eq!(reporter.lines(), vec!["nothing is playing".to_string()]);
    }

    #[tokio::test]
    async fn read_failures_are_returned() {
        let gateway = FakeGateway {
            fail_reads: true,
            ..FakeGateway::with_snapshot(playing_snapshot(50))
        };
        let reporter = RecordingReporter::default();

        let result = NowPlayingUseCase {
            gateway: &gateway,
            reporter: &reporter,
        }
        .execute()
        .await;

        assert!(result.is_err());
        assert!(reporter.lines().is_empty());
    }
}
