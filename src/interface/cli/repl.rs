//! SpotiCLI 대화형 쉘(REPL) 인터페이스.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;

use crate::domain::playback::{LibraryAction, RepeatState, TransportAction};
use crate::domain::policy::NO_QUERY;
use crate::interface::cli::catalog;
use crate::interface::cli::composition::AppComposition;
use crate::interface::cli::repl_input::read_repl_input;

/// 한 줄씩 읽어 명령을 실행한다. 명령은 항상 끝까지 기다린 뒤 다음 줄을 읽는다.
pub async fn run_repl(composition: &AppComposition) -> Result<()> {
    print_welcome();
    io::stdout().flush()?;

    loop {
        let Some(raw_input) = read_repl_input()? else {
            println!();
            break;
        };
        let input = raw_input.trim();
        if input.is_empty() {
            continue;
        }

        match dispatch(composition, input).await {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => composition.reporter().error(&format!("{err:#}")),
        }
        composition.reporter().line("");
    }

    Ok(())
}

/// `spoticli run <command...>`: 명령 하나만 실행한다.
pub async fn run_once(composition: &AppComposition, line: &str) -> Result<()> {
    dispatch(composition, line).await.map(|_| ())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    About,
    Logout,
    Current,
    Transport(TransportAction),
    Seek(Option<String>),
    Volume(Option<String>),
    Endpoint(Option<String>),
    Repeat(Option<RepeatState>),
    Shuffle(Option<bool>),
    Playlists,
    Previous(Option<String>),
    Queue,
    Library(LibraryAction),
    Search(Option<String>),
    Help(Option<String>),
    Exit,
}

impl ShellCommand {
    /// Web API를 호출하는 명령인지 여부
    fn requires_session(&self) -> bool {
        !matches!(
            self,
            Self::About
                | Self::Logout
                | Self::Help(_)
                | Self::Exit
                | Self::Seek(None)
                | Self::Search(None)
        )
    }
}

pub(crate) async fn dispatch(composition: &AppComposition, input: &str) -> Result<Flow> {
    match parse_shell_line(input) {
        Ok(command) => execute(composition, command).await,
        Err(msg) => {
            composition.reporter().error(&msg);
            Ok(Flow::Continue)
        }
    }
}

async fn execute(composition: &AppComposition, command: ShellCommand) -> Result<Flow> {
    let reporter = composition.reporter();

    if command.requires_session() && !composition.gateway().has_credential() {
        reporter.warn("not logged in");
        return Ok(Flow::Continue);
    }

    match command {
        ShellCommand::Exit => return Ok(Flow::Exit),
        ShellCommand::About => {
            reporter.line(&format!("\nSpotiCLI {}", env!("CARGO_PKG_VERSION")));
        }
        ShellCommand::Logout => composition.logout_usecase().execute()?,
        ShellCommand::Current => composition.now_playing_usecase().execute().await?,
        ShellCommand::Transport(action) => {
            composition.transport_usecase().execute(action).await?
        }
        ShellCommand::Seek(None) => print_help(composition, Some("seek")),
        ShellCommand::Seek(Some(arg)) => composition.seek_usecase().execute(&arg).await?,
        ShellCommand::Volume(arg) => {
            composition
                .volume_usecase()
                .execute(arg.as_deref())
                .await?
        }
        ShellCommand::Endpoint(arg) => {
            composition
                .devices_usecase()
                .execute(arg.as_deref())
                .await?
        }
        ShellCommand::Repeat(state) => composition.playback_mode_usecase().repeat(state).await?,
        ShellCommand::Shuffle(enabled) => {
            composition
                .playback_mode_usecase()
                .shuffle(enabled)
                .await?
        }
        ShellCommand::Playlists => composition.library_usecase().playlists().await?,
        ShellCommand::Previous(arg) => {
            composition
                .history_usecase()
                .recently_played(arg.as_deref())
                .await?
        }
        ShellCommand::Queue => composition.history_usecase().queue().await?,
        ShellCommand::Library(action) => {
            composition
                .library_usecase()
                .toggle_current(action)
                .await?
        }
        ShellCommand::Search(None) => {
            reporter.warn(NO_QUERY);
            print_help(composition, Some("search"));
        }
        ShellCommand::Search(Some(raw)) => composition.search_usecase().execute(&raw).await?,
        ShellCommand::Help(name) => print_help(composition, name.as_deref()),
    }

    Ok(Flow::Continue)
}

fn print_help(composition: &AppComposition, name: Option<&str>) {
    match catalog::help_lines(name) {
        Ok(lines) => {
            for line in lines {
                composition.reporter().line(&line);
            }
        }
        Err(msg) => composition.reporter().error(&msg),
    }
}

/// 입력 한 줄을 명령으로 해석한다. 실패 시 사용자에게 보일 메시지를 반환한다.
pub(crate) fn parse_shell_line(input: &str) -> Result<ShellCommand, String> {
    let input = input.trim();
    let (head, rest) = match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    };
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    match head.to_ascii_lowercase().as_str() {
        "about" => Ok(ShellCommand::About),
        "logout" => Ok(ShellCommand::Logout),
        "current" => Ok(ShellCommand::Current),
        "play" => match rest.to_ascii_lowercase().as_str() {
            "" => Ok(ShellCommand::Transport(TransportAction::Resume)),
            "next" => Ok(ShellCommand::Transport(TransportAction::Next)),
            "previous" => Ok(ShellCommand::Transport(TransportAction::Previous)),
            _ => Err(usage("play")),
        },
        "pause" => Ok(ShellCommand::Transport(TransportAction::Pause)),
        "seek" => Ok(ShellCommand::Seek(arg)),
        "volume" => Ok(ShellCommand::Volume(arg)),
        "endpoint" => Ok(ShellCommand::Endpoint(arg)),
        "repeat" => match rest.to_ascii_lowercase().as_str() {
            "" => Ok(ShellCommand::Repeat(None)),
            "track" => Ok(ShellCommand::Repeat(Some(RepeatState::Track))),
            "enable" => Ok(ShellCommand::Repeat(Some(RepeatState::Context))),
            "disable" => Ok(ShellCommand::Repeat(Some(RepeatState::Off))),
            _ => Err(usage("repeat")),
        },
        "shuffle" => match rest.to_ascii_lowercase().as_str() {
            "" => Ok(ShellCommand::Shuffle(None)),
            "enable" => Ok(ShellCommand::Shuffle(Some(true))),
            "disable" => Ok(ShellCommand::Shuffle(Some(false))),
            _ => Err(usage("shuffle")),
        },
        "list" => Ok(ShellCommand::Playlists),
        "previous" => Ok(ShellCommand::Previous(arg)),
        "queue" => Ok(ShellCommand::Queue),
        "save" => Ok(ShellCommand::Library(LibraryAction::Save)),
        "unsave" => Ok(ShellCommand::Library(LibraryAction::Unsave)),
        "search" => Ok(ShellCommand::Search(arg)),
        "help" => Ok(ShellCommand::Help(arg)),
        "exit" | "quit" => Ok(ShellCommand::Exit),
        _ => Err("unrecognized command".to_string()),
    }
}

fn usage(name: &str) -> String {
    catalog::find(name)
        .map(|spec| format!("usage: {}", spec.usage))
        .unwrap_or_else(|| "unrecognized command".to_string())
}

fn print_welcome() {
    let interactive = io::stdout().is_terminal();
    let title = paint(
        &format!("SpotiCLI {}", env!("CARGO_PKG_VERSION")),
        "1;32",
        interactive,
    );
    let hint = paint("type `help` for commands, `exit` to leave", "2;37", interactive);

    println!("{title}");
    println!("{hint}");
    println!();
}

fn paint(text: &str, ansi: &str, interactive: bool) -> String {
    if interactive {
        format!("\x1b[{ansi}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::config::Config;
    use crate::application::usecases::testing::{
        FakeGateway, FixedConfirmer, RecordingReporter, playing_snapshot,
    };

    fn compose(gateway: Arc<FakeGateway>, reporter: Arc<RecordingReporter>) -> AppComposition {
        let mut config = Config::default();
        config.defaults.api_delay_ms = Some(0);
        AppComposition::with_parts(config, gateway, reporter, Box::new(FixedConfirmer(true)))
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_shell_line("play next"),
            Ok(ShellCommand::Transport(TransportAction::Next))
        );
        assert_eq!(
            parse_shell_line("  seek   -15 "),
            Ok(ShellCommand::Seek(Some("-15".to_string())))
        );
        assert_eq!(
            parse_shell_line("search -c 3 -p cool songs"),
            Ok(ShellCommand::Search(Some("-c 3 -p cool songs".to_string())))
        );
        assert_eq!(
            parse_shell_line("repeat enable"),
            Ok(ShellCommand::Repeat(Some(RepeatState::Context)))
        );
        assert_eq!(parse_shell_line("QUIT"), Ok(ShellCommand::Exit));
    }

    #[test]
    fn rejects_unknown_input() {
        assert_eq!(
            parse_shell_line("dance"),
            Err("unrecognized command".to_string())
        );
        assert_eq!(
            parse_shell_line("shuffle maybe"),
            Err("usage: shuffle [enable|disable]".to_string())
        );
        assert_eq!(
            parse_shell_line("play loud"),
            Err("usage: play [next|previous]".to_string())
        );
    }

    #[tokio::test]
    async fn current_prints_now_playing_line() {
        let gateway = Arc::new(FakeGateway::with_snapshot(playing_snapshot(50)));
        let reporter = Arc::new(RecordingReporter::default());
        let composition = compose(gateway, reporter.clone());

        let flow = dispatch(&composition, "current").await.unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(
            reporter.lines(),
            vec![
                "[Playing - 0:05 / 4:24] Make Me Wanna Die by The Pretty Reckless on Make Me Wanna Die"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn seek_without_argument_shows_help() {
        let gateway = Arc::new(FakeGateway::default());
        let reporter = Arc::new(RecordingReporter::default());
        let composition = compose(gateway.clone(), reporter.clone());

        dispatch(&composition, "seek").await.unwrap();

        assert_eq!(reporter.lines()[0], "usage: seek [+|-]<seconds>");
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_search_warns_and_shows_help() {
        let gateway = Arc::new(FakeGateway::default());
        let reporter = Arc::new(RecordingReporter::default());
        let composition = compose(gateway.clone(), reporter.clone());

        dispatch(&composition, "search").await.unwrap();

        let lines = reporter.lines();
        assert_eq!(lines[0], "warn: no query detected");
        assert_eq!(lines[1], "usage: search [-a|-b|-p|-t] [-c N] <query>");
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn remote_commands_stop_after_logout() {
        let gateway = Arc::new(FakeGateway::with_snapshot(playing_snapshot(50)));
        let reporter = Arc::new(RecordingReporter::default());
        let composition = compose(gateway.clone(), reporter.clone());

        dispatch(&composition, "logout").await.unwrap();
        dispatch(&composition, "current").await.unwrap();

        assert_eq!(reporter.lines().last().unwrap(), "warn: not logged in");
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn read_failures_propagate_to_loop() {
        let gateway = Arc::new(FakeGateway {
            fail_reads: true,
            ..FakeGateway::default()
        });
        let reporter = Arc::new(RecordingReporter::default());
        let composition = compose(gateway, reporter);

        let err = dispatch(&composition, "current").await.unwrap_err();
        assert!(format!("{err:#}").contains("service unavailable"));
    }

    #[tokio::test]
    async fn exit_and_unknown_commands() {
        let gateway = Arc::new(FakeGateway::default());
        let reporter = Arc::new(RecordingReporter::default());
        let composition = compose(gateway, reporter.clone());

        assert_eq!(dispatch(&composition, "exit").await.unwrap(), Flow::Exit);
        assert_eq!(
            dispatch(&composition, "rewind").await.unwrap(),
            Flow::Continue
        );
        assert_eq!(
            reporter.lines(),
            vec!["error: unrecognized command".to_string()]
        );
    }

    #[tokio::test]
    async fn about_prints_version_banner() {
        let reporter = Arc::new(RecordingReporter::default());
        let composition = compose(Arc::new(FakeGateway::default()), reporter.clone());

        dispatch(&composition, "about").await.unwrap();

        assert_eq!(
            reporter.lines(),
            vec![format!("\nSpotiCLI {}", env!("CARGO_PKG_VERSION"))]
        );
    }
}
