//! Spotify Connect 장치 목록/재생 전환 유스케이스.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{PlaybackGateway, Reporter};
use crate::application::usecases::{discard_failure, settle};
use crate::domain::format::device_line;
use crate::domain::policy::parse_device_index;

pub struct DevicesUseCase<'a> {
    pub gateway: &'a dyn PlaybackGateway,
    pub reporter: &'a dyn Reporter,
    pub settle_delay: Duration,
}

impl<'a> DevicesUseCase<'a> {
    /// `endpoint` 는 장치 목록을, `endpoint <n>` 은 n번 장치로 재생을 넘긴다.
    pub async fn execute(&self, arg: Option<&str>) -> Result<()> {
        let devices = self.gateway.devices().await?;
        if devices.is_empty() {
            self.reporter.line("no devices available");
            return Ok(());
        }

        let Some(raw) = arg.map(str::trim).filter(|v| !v.is_empty()) else {
            for (idx, device) in devices.iter().enumerate() {
                self.reporter.line(&device_line(idx, device));
            }
            return Ok(());
        };

        let index = match parse_device_index(raw, devices.len()) {
            Ok(index) => index,
            Err(msg) => {
                self.reporter.error(&msg);
                return Ok(());
            }
        };
        let device = &devices[index];
        let Some(device_id) = device.id.as_deref() else {
            self.reporter.error(&format!("{} cannot be controlled", device.name));
            return Ok(());
        };

        let succeeded = discard_failure("transfer", self.gateway.transfer(device_id).await);
        settle(self.settle_delay).await;
        if succeeded {
            self.reporter
                .line(&format!("playback transferred to {}", device.name));
        }
        Ok(())
    }
}
