//! 세션 로그아웃 유스케이스.

use anyhow::Result;

use crate::application::ports::{PlaybackGateway, Reporter, UserConfirmer};

pub const LOGOUT_PROMPT: &str = "are you sure? type 'yes' to proceed";

/// 확인을 받은 뒤 세션 토큰을 폐기한다.
/// 토큰 저장소는 다루지 않으므로 설정 파일의 토큰은 그대로 남는다.
pub struct LogoutUseCase<'a> {
    pub gateway: &'a dyn PlaybackGateway,
    pub confirmer: &'a dyn UserConfirmer,
    pub reporter: &'a dyn Reporter,
}

impl<'a> LogoutUseCase<'a> {
    pub fn execute(&self) -> Result<()> {
        if !self.confirmer.confirm(LOGOUT_PROMPT)? {
            self.reporter.warn("not logged out");
            return Ok(());
        }

        self.gateway.sign_out();
        self.reporter.warn("logged out");
        self.reporter
            .warn("configured token sources are kept; run `spoticli config` to see them");
        Ok(())
    }
}
