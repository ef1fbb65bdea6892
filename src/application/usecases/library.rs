//! 좋아요 목록 저장/해제, 플레이리스트 조회 유스케이스.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{PlaybackGateway, Reporter};
use crate::application::usecases::{discard_failure, settle};
use crate::domain::format::playlist_line;
use crate::domain::playback::LibraryAction;
use crate::domain::policy::MAX_PAGE_LIMIT;

pub struct LibraryUseCase<'a> {
    pub gateway: &'a dyn PlaybackGateway,
    pub reporter: &'a dyn Reporter,
    pub settle_delay: Duration,
}

impl<'a> LibraryUseCase<'a> {
    /// 현재 재생 곡을 좋아요 목록에 추가/제거한다.
    pub async fn toggle_current(&self, action: LibraryAction) -> Result<()> {
        let item = self.gateway.playback().await?.and_then(|s| s.item);
        let Some((id, name)) = item.and_then(|t| t.id.map(|id| (id, t.name))) else {
            self.reporter.error("nothing is playing");
            return Ok(());
        };

        let ids = [id];
        let succeeded = match action {
            LibraryAction::Save => discard_failure("save", self.gateway.save_tracks(&ids).await),
            LibraryAction::Unsave => discard_failure(
                "unsave",
                self.gateway.remove_saved_tracks(&ids).await,
            ),
        };
        settle(self.settle_delay).await;

        if succeeded {
            match action {
                LibraryAction::Save => self.reporter.line(&format!("<3 - saved song - {name}")),
                LibraryAction::Unsave => {
                    self.reporter.line(&format!("</3 - removed song - {name}"))
                }
            }
        }
        Ok(())
    }

    /// 사용자 플레이리스트 목록을 출력한다.
    pub async fn playlists(&self) -> Result<()> {
        let playlists = self.gateway.playlists(MAX_PAGE_LIMIT).await?;
        if playlists.is_empty() {
            self.reporter.line("no playlists");
            return Ok(());
        }
        for (idx, playlist) in playlists.iter().enumerate() {
            self.reporter.line(&playlist_line(idx, playlist));
        }
        Ok(())
    }
}
