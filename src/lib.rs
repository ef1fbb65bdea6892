//! spoticli library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::cli::AppComposition;

/// 쉘 명령 한 줄을 실행한다(라이브러리 직접 호출용).
pub async fn run_command(line: &str) -> Result<()> {
    let composition = AppComposition::bootstrap()?;
    interface::cli::run_once(&composition, line).await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    AppComposition::inspect_config_pretty_json()
}
