//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::json;
use tracing::debug;

use crate::application::config::{
    Config, DEFAULT_API_DELAY_MS, DEFAULT_HISTORY_LIMIT, DEFAULT_REQUEST_TIMEOUT_MS,
    DEFAULT_TOKEN_ENV,
};

pub(crate) const CONFIG_ENV: &str = "SPOTICLI_CONFIG";
const PROJECT_CONFIG: &str = ".spoticli/config.json";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    let paths = config_paths();

    if let Ok(path) = env::var(CONFIG_ENV)
        && !Path::new(&path).exists()
    {
        bootstrap_template(Path::new(&path))?;
    }

    let (mut config, mut loaded_paths) = merge_paths(&paths)?;

    if loaded_paths.is_empty() {
        // 최초 실행 시 사용자 설정 템플릿을 생성해 바로 로딩한다.
        let target = default_bootstrap_config_path();
        bootstrap_template(&target)?;
        config.merge_from(read_config(&target)?);
        loaded_paths.push(target);
    }

    Ok(LoadedConfig {
        config,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 존재하는 파일만 낮은 우선순위부터 병합한다.
pub(crate) fn merge_paths(paths: &[PathBuf]) -> Result<(Config, Vec<PathBuf>)> {
    let mut merged = Config::default();
    let mut loaded = Vec::new();

    for path in paths {
        if !path.exists() {
            continue;
        }
        merged.merge_from(read_config(path)?);
        debug!("config loaded from {}", path.display());
        loaded.push(path.clone());
    }

    Ok((merged, loaded))
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/spoticli/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("spoticli").join("config.json"));
    }

    paths.push(PathBuf::from(PROJECT_CONFIG));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(PathBuf::from(path));
    }

    dedup_paths(paths)
}

fn read_config(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse JSON in {}", path.display()))
}

fn default_bootstrap_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .map(|base| base.join("spoticli").join("config.json"))
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG))
}

pub(crate) fn bootstrap_template(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let template = json!({
        "defaults": {
            "api_delay_ms": DEFAULT_API_DELAY_MS,
            "request_timeout_ms": DEFAULT_REQUEST_TIMEOUT_MS,
            "history_limit": DEFAULT_HISTORY_LIMIT
        },
        "auth": {
            "token_env": DEFAULT_TOKEN_ENV
        }
    });

    let rendered = serde_json::to_string_pretty(&template)?;
    fs::write(config_path, format!("{rendered}\n"))
        .with_context(|| format!("failed to create config template at {}", config_path.display()))
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_paths_take_precedence_and_missing_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let low = dir.path().join("low.json");
        let high = dir.path().join("high.json");
        fs::write(
            &low,
            r#"{"defaults":{"api_delay_ms":300,"market":"us"},"auth":{"token_env":"LOW"}}"#,
        )
        .unwrap();
        fs::write(&high, r#"{"defaults":{"api_delay_ms":50}}"#).unwrap();

        let paths = vec![low.clone(), dir.path().join("missing.json"), high.clone()];
        let (config, loaded) = merge_paths(&paths).unwrap();

        assert_eq!(loaded, vec![low, high]);
        assert_eq!(config.defaults.api_delay_ms, Some(50));
        assert_eq!(config.market().as_deref(), Some("US"));
        assert_eq!(config.auth.token_env(), "LOW");
    }

    #[test]
    fn invalid_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();

        let err = merge_paths(&[broken]).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }

    #[test]
    fn bootstrap_writes_parseable_template_once() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("config.json");

        bootstrap_template(&target).unwrap();
        let config = read_config(&target).unwrap();
        assert_eq!(config.defaults.api_delay_ms, Some(DEFAULT_API_DELAY_MS));
        assert_eq!(config.auth.token_env(), DEFAULT_TOKEN_ENV);

        fs::write(&target, "{}\n").unwrap();
        bootstrap_template(&target).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "{}\n");
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let paths = dedup_paths(vec![
            PathBuf::from("a"),
            PathBuf::from("b"),
            PathBuf::from("a"),
        ]);
        assert_eq!(paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }
}
