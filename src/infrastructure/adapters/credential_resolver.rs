//! 인증 토큰 해석 포트 구현.

use anyhow::Result;

use crate::application::config::AuthConfig;
use crate::application::ports::{CredentialResolution, CredentialResolver};
use crate::infrastructure::config::resolve_credential;

/// 설정(token/env/cmd)에 기반해 런타임 토큰을 해석한다.
pub struct ConfigCredentialResolver;

impl CredentialResolver for ConfigCredentialResolver {
    fn resolve(&self, auth: &AuthConfig) -> Result<CredentialResolution> {
        resolve_credential(auth)
    }
}
