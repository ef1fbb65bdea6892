//! 설정 모듈 공용 유틸리티.

use std::env;
use std::path::Path;

/// `token_command` 실행 파일이 PATH에 있는지 탐지한다.
pub fn command_exists(command: &str) -> bool {
    if command.trim().is_empty() {
        return false;
    }

    // 경로가 주어지면 파일 존재만 검사한다.
    let command_path = Path::new(command);
    if command_path.components().count() > 1 {
        return command_path.is_file();
    }

    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };

    env::split_paths(&path_var).any(|dir| {
        dir.join(command).is_file()
            || (cfg!(windows)
                && command_path.extension().is_none()
                && dir.join(format!("{command}.exe")).is_file())
    })
}
