//! 애플리케이션 조립(composition root) 모듈.

use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

use crate::application::config::Config;
use crate::application::ports::{
    ConfigRepository, CredentialResolver, GatewayFactory, PlaybackGateway, Reporter, UserConfirmer,
};
use crate::application::usecases::devices::DevicesUseCase;
use crate::application::usecases::history::HistoryUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::library::LibraryUseCase;
use crate::application::usecases::logout::LogoutUseCase;
use crate::application::usecases::now_playing::NowPlayingUseCase;
use crate::application::usecases::playback_mode::PlaybackModeUseCase;
use crate::application::usecases::search::SearchUseCase;
use crate::application::usecases::seek::SeekUseCase;
use crate::application::usecases::transport::TransportUseCase;
use crate::application::usecases::volume::VolumeUseCase;
use crate::infrastructure::adapters::{
    ConfigCredentialResolver, ConsoleReporter, JsonConfigRepository, SpotifyGatewayFactory,
    StdinConfirmer,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
/// 게이트웨이는 프로세스 수명 동안 하나만 유지한다.
pub struct AppComposition {
    config: Config,
    gateway: Arc<dyn PlaybackGateway>,
    reporter: Arc<dyn Reporter>,
    confirmer: Box<dyn UserConfirmer>,
}

impl AppComposition {
    /// 설정을 로딩하고 토큰을 해석해 Web API 클라이언트까지 준비한다.
    pub fn bootstrap() -> Result<Self> {
        let config_repo = JsonConfigRepository;
        let config = config_repo.load()?;

        let resolution = ConfigCredentialResolver.resolve(&config.auth)?;
        if resolution.token.is_none() {
            warn!(
                "no spotify token resolved ({})",
                resolution.source.as_deref().unwrap_or("unconfigured")
            );
        }

        let gateway = SpotifyGatewayFactory.build(&config, resolution.token)?;

        Ok(Self {
            config,
            gateway: Arc::from(gateway),
            reporter: Arc::new(ConsoleReporter::new()),
            confirmer: Box::new(StdinConfirmer),
        })
    }

    /// 설정 점검 전용 조합. 네트워크 클라이언트는 만들지 않는다.
    pub fn inspect_config_pretty_json() -> Result<String> {
        InspectConfigUseCase {
            config_repo: &JsonConfigRepository,
        }
        .execute()
    }

    /// 구성 요소를 외부에서 주입한다.
    pub fn with_parts(
        config: Config,
        gateway: Arc<dyn PlaybackGateway>,
        reporter: Arc<dyn Reporter>,
        confirmer: Box<dyn UserConfirmer>,
    ) -> Self {
        Self {
            config,
            gateway,
            reporter,
            confirmer,
        }
    }

    pub fn gateway(&self) -> &dyn PlaybackGateway {
        self.gateway.as_ref()
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    pub fn now_playing_usecase(&self) -> NowPlayingUseCase<'_> {
        NowPlayingUseCase {
            gateway: self.gateway(),
            reporter: self.reporter(),
        }
    }

    pub fn transport_usecase(&self) -> TransportUseCase<'_> {
        TransportUseCase {
            gateway: self.gateway(),
            reporter: self.reporter(),
            settle_delay: self.config.api_delay(),
        }
    }

    pub fn seek_usecase(&self) -> SeekUseCase<'_> {
        SeekUseCase {
            gateway: self.gateway(),
            reporter: self.reporter(),
            settle_delay: self.config.api_delay(),
        }
    }

    pub fn volume_usecase(&self) -> VolumeUseCase<'_> {
        VolumeUseCase {
            gateway: self.gateway(),
            reporter: self.reporter(),
            settle_delay: self.config.api_delay(),
        }
    }

    pub fn playback_mode_usecase(&self) -> PlaybackModeUseCase<'_> {
        PlaybackModeUseCase {
            gateway: self.gateway(),
            reporter: self.reporter(),
            settle_delay: self.config.api_delay(),
        }
    }

    pub fn devices_usecase(&self) -> DevicesUseCase<'_> {
        DevicesUseCase {
            gateway: self.gateway(),
            reporter: self.reporter(),
            settle_delay: self.config.api_delay(),
        }
    }

    pub fn history_usecase(&self) -> HistoryUseCase<'_> {
        HistoryUseCase {
            gateway: self.gateway(),
            reporter: self.reporter(),
            default_limit: self.config.history_limit(),
        }
    }

    pub fn library_usecase(&self) -> LibraryUseCase<'_> {
        LibraryUseCase {
            gateway: self.gateway(),
            reporter: self.reporter(),
            settle_delay: self.config.api_delay(),
        }
    }

    pub fn search_usecase(&self) -> SearchUseCase<'_> {
        SearchUseCase {
            gateway: self.gateway(),
            reporter: self.reporter(),
        }
    }

    pub fn logout_usecase(&self) -> LogoutUseCase<'_> {
        LogoutUseCase {
            gateway: self.gateway(),
            confirmer: self.confirmer.as_ref(),
            reporter: self.reporter(),
        }
    }
}
