//! 최근 재생 기록/대기열 조회 유스케이스.

use anyhow::Result;

use crate::application::ports::{PlaybackGateway, Reporter};
use crate::domain::format::{history_line, numbered_line, track_line};
use crate::domain::policy::parse_history_limit;

pub struct HistoryUseCase<'a> {
    pub gateway: &'a dyn PlaybackGateway,
    pub reporter: &'a dyn Reporter,
    /// `previous` 인자가 없을 때 조회 개수
    pub default_limit: u32,
}

impl<'a> HistoryUseCase<'a> {
    /// 최근 재생 곡을 1부터 번호를 붙여 출력한다.
    pub async fn recently_played(&self, arg: Option<&str>) -> Result<()> {
        let limit = match parse_history_limit(arg, self.default_limit) {
            Ok(limit) => limit,
            Err(msg) => {
                self.reporter.error(&msg);
                return Ok(());
            }
        };

        let entries = self.gateway.recently_played(limit).await?;
        if entries.is_empty() {
            self.reporter.line("no recently played tracks");
            return Ok(());
        }
        for (idx, entry) in entries.iter().enumerate() {
            self.reporter.line(&history_line(idx, entry));
        }
        Ok(())
    }

    /// 현재 곡과 다음 재생 예정 곡을 출력한다.
    pub async fn queue(&self) -> Result<()> {
        let queue = self.gateway.queue().await?;
        if queue.current.is_none() && queue.upcoming.is_empty() {
            self.reporter.line("queue is empty");
            return Ok(());
        }

        if let Some(current) = &queue.current {
            self.reporter.line(&format!("now: {}", track_line(current)));
        }
        for (idx, track) in queue.upcoming.iter().enumerate() {
            self.reporter.line(&numbered_line(idx, &track_line(track)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::testing::{FakeGateway, RecordingReporter, track};
    use crate::domain::playback::{HistoryEntry, QueueView};

    fn history_gateway() -> FakeGateway {
        let history = (1..=12)
            .map(|n| HistoryEntry {
                track: track(&format!("id-{n}"), &format!("Song {n}"), "Band", "Album"),
                played_at: format!("2024-01-01T00:{n:02}:00Z"),
            })
            .collect();
        FakeGateway {
            history,
            ..FakeGateway::default()
        }
    }

    #[tokio::test]
    async fn previous_lists_default_count_one_indexed() {
        let gateway = history_gateway();
        let reporter = RecordingReporter::default();

        HistoryUseCase {
            gateway: &gateway,
            reporter: &reporter,
            default_limit: 10,
        }
        .recently_played(None)
        .await
        .unwrap();

        let lines = reporter.lines();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "1: Song 1 by Band");
        assert_eq!(lines[9], "10: Song 10 by Band");
        assert_eq!(gateway.calls(), vec!["recently_played 10".to_string()]);
    }

    #[tokio::test]
    async fn previous_accepts_explicit_count() {
        let gateway = history_gateway();
        let reporter = RecordingReporter::default();
        let usecase = HistoryUseCase {
            gateway: &gateway,
            reporter: &reporter,
            default_limit: 10,
        };

        usecase.recently_played(Some("3")).await.unwrap();
        usecase.recently_played(Some("zero")).await.unwrap();

        let lines = reporter.lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "error: invalid amount");
    }

    #[tokio::test]
    async fn queue_shows_current_and_upcoming() {
        let gateway = FakeGateway {
            queue: QueueView {
                current: Some(track("a", "Now", "Band", "Album")),
                upcoming: vec![
                    track("b", "Next", "Band", "Album"),
                    track("c", "Later", "Other", "Album"),
                ],
            },
            ..FakeGateway::default()
        };
        let reporter = RecordingReporter::default();

        HistoryUseCase {
            gateway: &gateway,
            reporter: &reporter,
            default_limit: 10,
        }
        .queue()
        .await
        .unwrap();

        assert_eq!(
            reporter.lines(),
            vec![
                "now: Now by Band".to_string(),
                "1: Next by Band".to_string(),
                "2: Later by Other".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn empty_queue_is_reported() {
        let gateway = FakeGateway::default();
        let reporter = RecordingReporter::default();

        HistoryUseCase {
            gateway: &gateway,
            reporter: &reporter,
            default_limit: 10,
        }
        .queue()
        .await
        .unwrap();

        assert_eq!(reporter.lines(), vec!["queue is empty".to_string()]);
    }
}
