//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::resolve_credential;
use super::utils::command_exists;
use crate::application::config::{AuthConfig, Config, DefaultsConfig};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub effective_defaults: EffectiveDefaults,
    pub auth: AuthInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveDefaults {
    pub api_base: String,
    pub api_delay_ms: u64,
    pub request_timeout_ms: u64,
    pub history_limit: u32,
    pub market: Option<String>,
}

/// 토큰 값 자체는 노출하지 않는다.
#[derive(Debug, Clone, Serialize)]
pub struct AuthInspection {
    pub token_env: String,
    pub token_source: Option<String>,
    pub token_resolved: bool,
    pub token_command_available: Option<bool>,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        Self {
            searched_paths: display_paths(&loaded.searched_paths),
            loaded_paths: display_paths(&loaded.loaded_paths),
            defaults: loaded.config.defaults.clone(),
            effective_defaults: EffectiveDefaults::from_config(&loaded.config),
            auth: AuthInspection::from_config(&loaded.config.auth),
        }
    }
}

impl EffectiveDefaults {
    fn from_config(config: &Config) -> Self {
        Self {
            api_base: config.api_base(),
            api_delay_ms: config.api_delay().as_millis() as u64,
            request_timeout_ms: config.request_timeout().as_millis() as u64,
            history_limit: config.history_limit(),
            market: config.market(),
        }
    }
}

impl AuthInspection {
    fn from_config(cfg: &AuthConfig) -> Self {
        let resolution = resolve_credential(cfg).ok();
        Self {
            token_env: cfg.token_env().to_string(),
            token_source: resolution.as_ref().and_then(|r| r.source.clone()),
            token_resolved: resolution
                .as_ref()
                .and_then(|r| r.token.as_ref())
                .is_some(),
            token_command_available: cfg
                .token_command
                .as_ref()
                .and_then(|cmd| cmd.first())
                .map(|program| command_exists(program.trim())),
        }
    }
}

fn display_paths(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}
