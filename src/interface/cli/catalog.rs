//! 쉘 명령 목록. 도움말 출력과 입력 추천이 같은 표를 사용한다.

pub struct CommandSpec {
    pub name: &'static str,
    pub summary: &'static str,
    pub usage: &'static str,
    /// Tab 완성 대상 서브커맨드/플래그
    pub subcommands: &'static [&'static str],
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "current",
        summary: "show the track that is playing",
        usage: "current",
        subcommands: &[],
    },
    CommandSpec {
        name: "play",
        summary: "resume playback or skip tracks",
        usage: "play [next|previous]",
        subcommands: &["next", "previous"],
    },
    CommandSpec {
        name: "pause",
        summary: "pause playback",
        usage: "pause",
        subcommands: &[],
    },
    CommandSpec {
        name: "seek",
        summary: "jump to a position in seconds",
        usage: "seek [+|-]<seconds>",
        subcommands: &[],
    },
    CommandSpec {
        name: "volume",
        summary: "show or change the volume",
        usage: "volume [+|-][0-100]",
        subcommands: &[],
    },
    CommandSpec {
        name: "endpoint",
        summary: "list devices or transfer playback",
        usage: "endpoint [number]",
        subcommands: &[],
    },
    CommandSpec {
        name: "repeat",
        summary: "show or set the repeat mode",
        usage: "repeat [track|enable|disable]",
        subcommands: &["track", "enable", "disable"],
    },
    CommandSpec {
        name: "shuffle",
        summary: "show or set shuffle",
        usage: "shuffle [enable|disable]",
        subcommands: &["enable", "disable"],
    },
    CommandSpec {
        name: "queue",
        summary: "show the playback queue",
        usage: "queue",
        subcommands: &[],
    },
    CommandSpec {
        name: "previous",
        summary: "list recently played tracks",
        usage: "previous [1-50]",
        subcommands: &[],
    },
    CommandSpec {
        name: "list",
        summary: "list your playlists",
        usage: "list",
        subcommands: &[],
    },
    CommandSpec {
        name: "save",
        summary: "save the current track to liked songs",
        usage: "save",
        subcommands: &[],
    },
    CommandSpec {
        name: "unsave",
        summary: "remove the current track from liked songs",
        usage: "unsave",
        subcommands: &[],
    },
    CommandSpec {
        name: "search",
        summary: "search the catalog",
        usage: "search [-a|-b|-p|-t] [-c N] <query>",
        subcommands: &[
            "--artist", "--album", "--playlist", "--track", "--count",
        ],
    },
    CommandSpec {
        name: "about",
        summary: "show version information",
        usage: "about",
        subcommands: &[],
    },
    CommandSpec {
        name: "logout",
        summary: "forget the session token",
        usage: "logout",
        subcommands: &[],
    },
    CommandSpec {
        name: "help",
        summary: "list commands or show usage",
        usage: "help [command]",
        subcommands: &[],
    },
    CommandSpec {
        name: "exit",
        summary: "leave the shell",
        usage: "exit",
        subcommands: &[],
    },
];

pub fn find(name: &str) -> Option<&'static CommandSpec> {
    let name = name.to_ascii_lowercase();
    if name == "quit" {
        return find("exit");
    }
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// `help` 출력 라인.
pub fn help_lines(name: Option<&str>) -> Result<Vec<String>, String> {
    match name {
        None => Ok(COMMANDS
            .iter()
            .map(|spec| format!("{:<10} {}", spec.name, spec.summary))
            .collect()),
        Some(name) => {
            let spec = find(name).ok_or_else(|| "unrecognized command".to_string())?;
            Ok(vec![
                format!("usage: {}", spec.usage),
                format!("  {}", spec.summary),
            ])
        }
    }
}
