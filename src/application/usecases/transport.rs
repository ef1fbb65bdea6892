//! 재생/일시정지/이전·다음 곡 제어 유스케이스.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{PlaybackGateway, Reporter};
use crate::application::usecases::{discard_failure, settle};
use crate::domain::playback::TransportAction;

pub struct TransportUseCase<'a> {
    pub gateway: &'a dyn PlaybackGateway,
    pub reporter: &'a dyn Reporter,
    pub settle_delay: Duration,
}

impl<'a> TransportUseCase<'a> {
    /// 원격 실패는 조용히 무시한다. 곡 이동은 성공했을 때만 안내 문구를 출력한다.
    pub async fn execute(&self, action: TransportAction) -> Result<()> {
        let (label, result) = match action {
            TransportAction::Resume => ("resume", self.gateway.resume().await),
            TransportAction::Pause => ("pause", self.gateway.pause().await),
            TransportAction::Next => ("next", self.gateway.next().await),
            TransportAction::Previous => ("previous", self.gateway.previous().await),
        };
        let succeeded = discard_failure(label, result);
        settle(self.settle_delay).await;

        if succeeded {
            match action {
                TransportAction::Next => self.reporter.line("playing next"),
                TransportAction::Previous => self.reporter.line("playing previous"),
                TransportAction::Resume | TransportAction::Pause => {}
            }
        }
        Ok(())
    }
}
