//! 볼륨 조회/변경 유스케이스.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{PlaybackGateway, Reporter};
use crate::application::usecases::{discard_failure, settle};
use crate::domain::policy::{apply_volume, parse_volume};

pub struct VolumeUseCase<'a> {
    pub gateway: &'a dyn PlaybackGateway,
    pub reporter: &'a dyn Reporter,
    pub settle_delay: Duration,
}

impl<'a> VolumeUseCase<'a> {
    /// `volume [+/-][value]`
    /// 인자가 없으면 현재 볼륨만 보여주고, 있으면 `[0, 100]`으로 보정해 적용한 뒤 다시 조회한다.
    pub async fn execute(&self, arg: Option<&str>) -> Result<()> {
        let change = match arg.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => match parse_volume(raw) {
                Ok(change) => Some(change),
                Err(msg) => {
                    self.reporter.error(&msg);
                    return Ok(());
                }
            },
            None => None,
        };

        let Some(current) = self.current_volume().await? else {
            self.reporter.error("volume unavailable");
            return Ok(());
        };

        let reported = match change {
            Some(change) => {
                let target = apply_volume(change, current);
                discard_failure("volume", self.gateway.set_volume(target).await);
                settle(self.settle_delay).await;
                self.current_volume().await?.unwrap_or(current)
            }
            None => current,
        };

        self.reporter.line(&format!("current volume: {reported}"));
        Ok(())
    }

    async fn current_volume(&self) -> Result<Option<u8>> {
        Ok(self
            .gateway
            .playback()
            .await?
            .and_then(|snapshot| snapshot.volume_percent()))
    }
}
