//! 반복/셔플 모드 조회·변경 유스케이스.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{PlaybackGateway, Reporter};
use crate::application::usecases::{discard_failure, settle};
use crate::domain::format::{repeat_state_line, shuffle_state_line};
use crate::domain::playback::RepeatState;

pub struct PlaybackModeUseCase<'a> {
    pub gateway: &'a dyn PlaybackGateway,
    pub reporter: &'a dyn Reporter,
    pub settle_delay: Duration,
}

impl<'a> PlaybackModeUseCase<'a> {
    /// 상태를 지정하면 먼저 적용하고, 어느 경우든 현재 반복 상태를 다시 조회해 출력한다.
    pub async fn repeat(&self, state: Option<RepeatState>) -> Result<()> {
        if let Some(state) = state {
            discard_failure("repeat", self.gateway.set_repeat(state).await);
            settle(self.settle_delay).await;
        }

        match self.gateway.playback().await? {
            Some(snapshot) => self.reporter.line(repeat_state_line(snapshot.repeat_state)),
            None => self.reporter.error("no active playback"),
        }
        Ok(())
    }

    pub async fn shuffle(&self, enabled: Option<bool>) -> Result<()> {
        if let Some(enabled) = enabled {
            discard_failure("shuffle", self.gateway.set_shuffle(enabled).await);
            settle(self.settle_delay).await;
        }

        match self.gateway.playback().await? {
            Some(snapshot) => self.reporter.line(shuffle_state_line(snapshot.shuffle_state)),
            None => self.reporter.error("no active playback"),
        }
        Ok(())
    }
}
