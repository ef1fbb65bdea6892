//! 설정 값(token/env/cmd)을 실제 런타임 토큰으로 해석하는 유틸리티.
//!
//! - 환경변수/프로세스 실행은 인프라 계층에서만 수행한다.

use std::env;
use std::process::Command;

use anyhow::{Context, Result};

use crate::application::config::AuthConfig;
use crate::application::ports::CredentialResolution;

/// inline -> env -> cmd 순으로 Web API 토큰을 해석한다.
/// 실패한 후보는 `source`에 사유를 남긴다.
pub fn resolve_credential(cfg: &AuthConfig) -> Result<CredentialResolution> {
    if let Some(token) = cfg.token.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(CredentialResolution {
            token: Some(token.to_string()),
            source: Some("inline".to_string()),
        });
    }

    let env_name = cfg.token_env();
    let env_hint = match env::var(env_name).ok().map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => {
            return Ok(CredentialResolution {
                token: Some(v),
                source: Some(format!("env:{env_name}")),
            });
        }
        _ => format!("env:{env_name} (missing)"),
    };

    let mut cmd_hint: Option<String> = None;
    if let Some(cmd) = cfg
        .token_command
        .as_ref()
        .filter(|v| v.iter().any(|s| !s.trim().is_empty()))
    {
        let label = format!("cmd:{}", cmd.join(" "));
        match run_token_command(cmd) {
            Ok(token) => {
                let trimmed = token.trim();
                if !trimmed.is_empty() {
                    return Ok(CredentialResolution {
                        token: Some(trimmed.to_string()),
                        source: Some(label),
                    });
                }
                cmd_hint = Some(format!("{label} (empty)"));
            }
            Err(err) => {
                tracing::debug!("{err:#}");
                cmd_hint = Some(format!("{label} (failed)"));
            }
        }
    }

    Ok(CredentialResolution {
        token: None,
        source: cmd_hint.or(Some(env_hint)),
    })
}

fn run_token_command(cmd: &[String]) -> Result<String> {
    let program = cmd
        .first()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .context("token_command is empty")?;
    let args: Vec<String> = cmd.iter().skip(1).map(|s| s.to_string()).collect();

    let output = Command::new(&program)
        .args(&args)
        .output()
        .with_context(|| format!("failed to run token command: {program}"))?;

    if !output.status.success() {
        anyhow::bail!("token command failed: {program} ({})", output.status);
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
