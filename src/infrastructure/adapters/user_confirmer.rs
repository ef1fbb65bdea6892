//! 사용자 확인 입력 포트 구현 어댑터.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::application::ports::UserConfirmer;

/// stdout에 질문을 출력하고 stdin으로 `yes` 확인을 받는 어댑터.
pub struct StdinConfirmer;

impl UserConfirmer for StdinConfirmer {
    fn confirm(&self, message: &str) -> Result<bool> {
        confirm_with(&mut io::stdin().lock(), &mut io::stdout(), message)
    }
}

// 질문은 다른 명령 출력과 같은 스트림에 한 줄로 쓴다.
fn confirm_with(reader: &mut impl BufRead, writer: &mut impl Write, message: &str) -> Result<bool> {
    writeln!(writer, "{message}")?;
    writer.flush()?;

    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}
