//! REPL 입력 처리기.
//! 입력 중 실시간으로 명령 추천과 사용법 힌트를 표시한다.

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::interface::cli::catalog::{self, COMMANDS, CommandSpec};

pub const PROMPT: &str = "spoticli ~$ ";
// 입력 영역 기본 높이: 상단 구분선 + 입력줄 + 하단 구분선
const PANEL_BASE_HEIGHT: usize = 3;
const MAX_SUGGESTIONS: usize = 6;

/// REPL 한 줄 입력을 읽는다. EOF(Ctrl-D)는 `None`.
/// - TTY + 지원 터미널: 실시간 추천 + 방향키 선택
/// - non-TTY/미지원 터미널: 일반 라인 입력
pub fn read_repl_input() -> Result<Option<String>> {
    if !supports_interactive_input() {
        return read_line_fallback();
    }

    match read_line_interactive() {
        Ok(v) => Ok(v),
        Err(_) => read_line_fallback(),
    }
}

fn supports_interactive_input() -> bool {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스 기반 UI를 비활성화한다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_fallback() -> Result<Option<String>> {
    print!("{PROMPT}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(trim_newline(line)))
}

fn read_line_interactive() -> Result<Option<String>> {
    let mut stdout = io::stdout();
    let _guard = InputGuard::enter(&mut stdout)?;

    let mut input = String::new();
    let mut cursor_chars = 0usize;
    let mut selected_idx = 0usize;

    loop {
        let suggestions = match_suggestions(&input);
        selected_idx = selected_idx.min(suggestions.len().saturating_sub(1));

        render_frame(&mut stdout, &input, cursor_chars, &suggestions, selected_idx)?;

        let key = match event::read()? {
            Event::Paste(text) => {
                for ch in text.chars().filter(|c| !c.is_control()) {
                    insert_char_at(&mut input, cursor_chars, ch);
                    cursor_chars += 1;
                }
                continue;
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        match key.code {
            KeyCode::Enter => {
                let line = submit_input(&input);
                clear_panel_for_output(&mut stdout)?;
                echo_command(&line);
                return Ok(Some(line));
            }
            KeyCode::Backspace if cursor_chars > 0 => {
                remove_char_at(&mut input, cursor_chars - 1);
                cursor_chars -= 1;
            }
            KeyCode::Delete if cursor_chars < input.chars().count() => {
                remove_char_at(&mut input, cursor_chars);
            }
            KeyCode::Left => cursor_chars = cursor_chars.saturating_sub(1),
            KeyCode::Right => cursor_chars = (cursor_chars + 1).min(input.chars().count()),
            KeyCode::Home => cursor_chars = 0,
            KeyCode::End => cursor_chars = input.chars().count(),
            KeyCode::Up => selected_idx = selected_idx.saturating_sub(1),
            KeyCode::Down if !suggestions.is_empty() => {
                selected_idx = (selected_idx + 1).min(suggestions.len() - 1);
            }
            KeyCode::Tab => {
                let completed = if !input.contains(' ') && !suggestions.is_empty() {
                    Some(format!("{} ", suggestions[selected_idx].name))
                } else {
                    complete_subcommand(&input)
                };
                if let Some(completed) = completed {
                    input = completed;
                    cursor_chars = input.chars().count();
                }
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                clear_panel_for_output(&mut stdout)?;
                return Ok(None);
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                clear_panel_for_output(&mut stdout)?;
                return Ok(Some("exit".to_string()));
            }
            KeyCode::Char(ch)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                insert_char_at(&mut input, cursor_chars, ch);
                cursor_chars += 1;
            }
            _ => {}
        }
    }
}

/// 첫 단어 입력 중일 때만 명령 이름을 추천한다.
fn match_suggestions(input: &str) -> Vec<&'static CommandSpec> {
    let typed = input.trim_start();
    if typed.is_empty() || typed.contains(' ') {
        return Vec::new();
    }

    let q = typed.to_ascii_lowercase();
    COMMANDS
        .iter()
        .filter(|spec| spec.name.starts_with(&q))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Enter로 제출할 줄. 추천 목록은 Tab으로만 적용되고, 입력 그대로 실행된다.
fn submit_input(input: &str) -> String {
    input.trim().to_string()
}

/// 서브커맨드/플래그 탭 완성. 후보가 하나일 때만 완성한다.
fn complete_subcommand(input: &str) -> Option<String> {
    let (head, rest) = input.trim_start().split_once(' ')?;
    let spec = catalog::find(head)?;

    let (done, partial) = match rest.rsplit_once(' ') {
        Some((done, partial)) => (Some(done), partial),
        None => (None, rest),
    };
    if partial.is_empty() && spec.name == "search" {
        return None;
    }

    let matches: Vec<&str> = spec
        .subcommands
        .iter()
        .copied()
        .filter(|s| s.starts_with(partial))
        .collect();
    if matches.len() != 1 || matches[0] == partial {
        return None;
    }

    Some(match done {
        Some(done) => format!("{} {done} {} ", spec.name, matches[0]),
        None => format!("{} {} ", spec.name, matches[0]),
    })
}

/// 입력 상태에 따른 실시간 힌트.
fn realtime_hint(input: &str) -> Option<(Color, String)> {
    let typed = input.trim_start();
    if typed.is_empty() {
        return None;
    }

    let (head, rest) = match typed.split_once(' ') {
        Some((head, rest)) => (head, rest.trim()),
        None => (typed, ""),
    };

    let Some(spec) = catalog::find(head) else {
        if !typed.contains(' ') && !match_suggestions(typed).is_empty() {
            return None;
        }
        return Some((Color::Red, format!("error: unrecognized command `{head}`")));
    };

    let usage = format!("hint: {}", spec.usage);
    if rest.is_empty() {
        return Some((Color::Yellow, usage));
    }

    // 고정 서브커맨드를 받는 명령만 즉시 검증한다.
    if spec.name == "search" || spec.subcommands.is_empty() {
        return Some((Color::Yellow, usage));
    }
    let rest = rest.to_ascii_lowercase();
    if spec.subcommands.contains(&rest.as_str()) {
        return Some((Color::Green, "ready: press Enter to run".to_string()));
    }
    if spec.subcommands.iter().any(|s| s.starts_with(&rest)) {
        return Some((Color::Yellow, usage));
    }
    Some((Color::Red, format!("error: unknown subcommand `{rest}`")))
}

fn render_frame(
    stdout: &mut io::Stdout,
    input: &str,
    cursor_chars: usize,
    suggestions: &[&CommandSpec],
    selected_idx: usize,
) -> Result<()> {
    let (w, h) = terminal::size().unwrap_or((100, 30));
    let width = (w as usize).max(20);
    let total_rows = h as usize;

    let hint = realtime_hint(input);
    let panel_height = PANEL_BASE_HEIGHT + usize::from(hint.is_some()) + suggestions.len();
    let panel_top = total_rows.saturating_sub(panel_height);
    let input_row = panel_top + 1;

    // 이전 프레임 잔상을 지우기 위해 가능한 최대 영역을 클리어한다.
    let clear_top = total_rows.saturating_sub(PANEL_BASE_HEIGHT + 1 + MAX_SUGGESTIONS);
    for row in clear_top..total_rows {
        execute!(
            stdout,
            cursor::MoveTo(0, row as u16),
            terminal::Clear(ClearType::CurrentLine)
        )?;
    }

    let divider = "─".repeat(width);
    draw_line(stdout, panel_top, &divider, width, Color::White, true)?;
    if input.is_empty() {
        let placeholder = render_prompt_line("Enter run · ↑↓ select · Tab complete", width);
        draw_line(stdout, input_row, &placeholder, width, Color::Grey, true)?;
    } else {
        let line = render_prompt_line(input, width);
        draw_line(stdout, input_row, &line, width, Color::White, true)?;
    }
    draw_line(stdout, panel_top + 2, &divider, width, Color::White, true)?;

    let mut next_row = panel_top + PANEL_BASE_HEIGHT;
    if let Some((color, line)) = hint {
        draw_line(stdout, next_row, &line, width, color, false)?;
        next_row += 1;
    }

    for (idx, spec) in suggestions.iter().enumerate() {
        let marker = if idx == selected_idx { ">" } else { " " };
        let line = format!("{marker} {:<10} {}", spec.name, spec.summary);
        draw_line(stdout, next_row, &line, width, Color::White, false)?;
        next_row += 1;
    }

    let col = prompt_cursor_col(input, cursor_chars, width) as u16;
    execute!(stdout, cursor::MoveTo(col, input_row as u16), cursor::Show)?;
    stdout.flush()?;
    Ok(())
}

fn render_prompt_line(input: &str, width: usize) -> String {
    let available = width.saturating_sub(display_width(PROMPT));
    let shown = tail_with_ellipsis_display(input, available);
    clip_line_display(&format!("{PROMPT}{shown}"), width)
}

fn prompt_cursor_col(input: &str, cursor_chars: usize, width: usize) -> usize {
    let prefix_width = display_width(PROMPT);
    let available = width.saturating_sub(prefix_width);
    let max_col = width.saturating_sub(1);

    if display_width(input) <= available {
        let before: String = input.chars().take(cursor_chars).collect();
        return (prefix_width + display_width(&before)).min(max_col);
    }

    // 넘치는 입력은 끝부분만 보이므로 커서도 끝에 맞춘다.
    (prefix_width + display_width(&tail_with_ellipsis_display(input, available))).min(max_col)
}

fn tail_with_ellipsis_display(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0usize;
    let mut tail: Vec<char> = Vec::new();
    for ch in text.chars().rev() {
        let cw = char_display_width(ch);
        if used + cw > budget {
            break;
        }
        tail.push(ch);
        used += cw;
    }

    let tail: String = tail.into_iter().rev().collect();
    format!("...{tail}")
}

fn clip_line_display(line: &str, max_width: usize) -> String {
    if display_width(line) <= max_width {
        return line.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0usize;
    let mut out = String::new();
    for ch in line.chars() {
        let cw = char_display_width(ch);
        if used + cw > budget {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push_str("...");
    out
}

fn pad_line_display(line: &str, width: usize) -> String {
    let used = display_width(line);
    format!("{line}{}", " ".repeat(width.saturating_sub(used)))
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

/// 한 줄을 그린다. `panel`이면 입력 영역 배경색을 적용한다.
fn draw_line(
    stdout: &mut io::Stdout,
    row: usize,
    text: &str,
    width: usize,
    fg: Color,
    panel: bool,
) -> Result<()> {
    execute!(stdout, cursor::MoveTo(0, row as u16))?;
    if panel {
        execute!(stdout, SetBackgroundColor(Color::DarkGrey))?;
    }
    execute!(
        stdout,
        SetForegroundColor(fg),
        terminal::Clear(ClearType::CurrentLine)
    )?;
    write!(
        stdout,
        "{}",
        pad_line_display(&clip_line_display(text, width), width)
    )?;
    execute!(stdout, ResetColor)?;
    Ok(())
}

fn clear_panel_for_output(stdout: &mut io::Stdout) -> Result<()> {
    // 명령 출력은 항상 화면 상단에서 시작한다.
    execute!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(ClearType::All),
        ResetColor,
        cursor::Show
    )?;
    stdout.flush()?;
    Ok(())
}

fn echo_command(line: &str) {
    if !line.trim().is_empty() {
        print!("{PROMPT}{line}\r\n");
    }
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// raw mode 진입/복구 가드.
struct InputGuard;

impl InputGuard {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout, cursor::Show)?;
        Ok(Self)
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, ResetColor);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

fn insert_char_at(input: &mut String, char_idx: usize, ch: char) {
    let byte_idx = byte_index_at_char(input, char_idx);
    input.insert(byte_idx, ch);
}

fn remove_char_at(input: &mut String, char_idx: usize) {
    let start = byte_index_at_char(input, char_idx);
    let end = byte_index_at_char(input, char_idx + 1);
    if start < end {
        input.replace_range(start..end, "");
    }
}

fn byte_index_at_char(input: &str, char_idx: usize) -> usize {
    input
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}
