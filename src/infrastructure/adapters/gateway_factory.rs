//! 재생 게이트웨이 팩토리 포트 구현 어댑터.

use anyhow::{Context, Result};

use crate::application::config::Config;
use crate::application::ports::{GatewayFactory, PlaybackGateway};
use crate::infrastructure::spotify::SpotifyClient;

/// 설정으로 Web API 클라이언트를 구성한다.
pub struct SpotifyGatewayFactory;

impl GatewayFactory for SpotifyGatewayFactory {
    fn build(&self, config: &Config, token: Option<String>) -> Result<Box<dyn PlaybackGateway>> {
        let client = SpotifyClient::new(
            config.api_base(),
            config.market(),
            token,
            config.request_timeout(),
        )
        .context("failed to build spotify client")?;
        Ok(Box::new(client))
    }
}
