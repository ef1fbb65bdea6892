//! 카탈로그 검색 유스케이스.

use anyhow::Result;

use crate::application::ports::{PlaybackGateway, Reporter};
use crate::domain::format::search_item_line;
use crate::domain::policy::parse_search;

pub struct SearchUseCase<'a> {
    pub gateway: &'a dyn PlaybackGateway,
    pub reporter: &'a dyn Reporter,
}

impl<'a> SearchUseCase<'a> {
    /// `search [-a|-b|-p|-t] [-c N] query`
    pub async fn execute(&self, raw: &str) -> Result<()> {
        let request = match parse_search(raw) {
            Ok(request) => request,
            Err(msg) => {
                self.reporter.error(&msg);
                return Ok(());
            }
        };

        let results = self.gateway.search(&request).await?;
        if results.items.is_empty() {
            self.reporter.line("no results");
            return Ok(());
        }
        for item in &results.items {
            self.reporter.line(&search_item_line(item));
        }
        Ok(())
    }
}
