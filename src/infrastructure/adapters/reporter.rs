//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// 일반 출력은 stdout, 경고/오류는 stderr로 보낸다.
pub struct ConsoleReporter {
    color: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

impl Reporter for ConsoleReporter {
    fn line(&self, line: &str) {
        println!("{line}");
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", self.paint("33", message));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", self.paint("31", &format!("error: {message}")));
    }
}
