//! Command-line parsing for the terminal front end.
//!
//! Each input line is one user action: selecting or dropping a file,
//! editing the prompt, pressing analyze, and so on.

use std::path::PathBuf;

use clipsight_core::prompt::PromptPreset;

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select (or drop) a file, optionally overriding its declared type.
    Open {
        path: PathBuf,
        media_type: Option<String>,
    },
    /// Replace the prompt text. May be empty.
    Prompt(String),
    /// Replace the prompt with a preset.
    Preset(PromptPreset),
    Analyze,
    Clear,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Type a command, or `help` to list them.")]
    Empty,

    #[error("Unknown command `{0}`. Type `help` to list commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    #[error("Unknown preset `{0}`. Choose one of: summary, visual, timeline.")]
    UnknownPreset(String),
}

const OPEN_USAGE: &str = "open <path> [--type <mime>]";
const PRESET_USAGE: &str = "preset <summary|visual|timeline>";
const TYPE_FLAG: &str = "--type";

/// Command reference shown by `help`.
pub const HELP_TEXT: &str = "\
Commands:
  open <path> [--type <mime>]   select a video (alias: drop)
  prompt <text>                 replace the prompt
  preset <summary|visual|timeline>
                                fill the prompt from a preset
  analyze                       send the video and prompt (alias: go)
  clear                         remove the selected video
  show                          redraw everything
  help                          this list
  quit                          leave (alias: exit)";

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        "open" | "drop" => parse_open(rest),
        "prompt" => Ok(Command::Prompt(rest.to_string())),
        "preset" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument(PRESET_USAGE));
            }
            PromptPreset::parse(rest)
                .map(Command::Preset)
                .ok_or_else(|| CommandError::UnknownPreset(rest.to_string()))
        }
        "analyze" | "analyse" | "go" => Ok(Command::Analyze),
        "clear" => Ok(Command::Clear),
        "show" | "status" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_open(rest: &str) -> Result<Command, CommandError> {
    let (path_part, media_type) = match rest.rsplit_once(TYPE_FLAG) {
        Some((before, after))
            if (before.is_empty() || before.ends_with(char::is_whitespace))
                && !after.trim().is_empty()
                && !after.trim().contains(char::is_whitespace) =>
        {
            (before.trim(), Some(after.trim().to_string()))
        }
        _ => (rest, None),
    };

    let path = unquote_path(path_part);
    if path.is_empty() {
        return Err(CommandError::MissingArgument(OPEN_USAGE));
    }

    Ok(Command::Open {
        path: PathBuf::from(path),
        media_type,
    })
}

/// Undo the quoting terminals apply to dropped paths: surrounding quotes,
/// or backslash-escaped spaces.
fn unquote_path(raw: &str) -> String {
    let raw = raw.trim();
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return raw[1..raw.len() - 1].to_string();
        }
    }
    raw.replace("\\ ", " ")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn open_with_plain_path() {
        assert_eq!(
            parse_command("open clips/a.mp4").unwrap(),
            Command::Open {
                path: PathBuf::from("clips/a.mp4"),
                media_type: None
            }
        );
    }

    #[test]
    fn drop_is_an_alias_and_handles_quotes() {
        assert_eq!(
            parse_command("drop '/home/me/My Clips/beach day.mov'").unwrap(),
            Command::Open {
                path: PathBuf::from("/home/me/My Clips/beach day.mov"),
                media_type: None
            }
        );
        assert_eq!(
            parse_command(r"drop /tmp/beach\ day.mov").unwrap(),
            Command::Open {
                path: PathBuf::from("/tmp/beach day.mov"),
                media_type: None
            }
        );
    }

    #[test]
    fn open_with_type_override() {
        assert_eq!(
            parse_command("open raw.bin --type video/mp4").unwrap(),
            Command::Open {
                path: PathBuf::from("raw.bin"),
                media_type: Some("video/mp4".into())
            }
        );
    }

    #[test]
    fn open_without_path_is_rejected() {
        assert_matches!(parse_command("open"), Err(CommandError::MissingArgument(_)));
        assert_matches!(
            parse_command("open --type video/mp4"),
            Err(CommandError::MissingArgument(_))
        );
    }

    #[test]
    fn prompt_keeps_text_verbatim_and_allows_empty() {
        assert_eq!(
            parse_command("prompt  What colour is the car?").unwrap(),
            Command::Prompt("What colour is the car?".into())
        );
        assert_eq!(parse_command("prompt").unwrap(), Command::Prompt(String::new()));
    }

    #[test]
    fn presets() {
        assert_eq!(
            parse_command("preset timeline").unwrap(),
            Command::Preset(PromptPreset::Timeline)
        );
        assert_matches!(parse_command("preset"), Err(CommandError::MissingArgument(_)));
        assert_matches!(parse_command("preset loud"), Err(CommandError::UnknownPreset(_)));
    }

    #[test]
    fn simple_keywords() {
        assert_eq!(parse_command("ANALYZE").unwrap(), Command::Analyze);
        assert_eq!(parse_command("go").unwrap(), Command::Analyze);
        assert_eq!(parse_command("clear").unwrap(), Command::Clear);
        assert_eq!(parse_command("show").unwrap(), Command::Show);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn blank_and_unknown_input() {
        assert_matches!(parse_command("   "), Err(CommandError::Empty));
        assert_matches!(parse_command("upload x"), Err(CommandError::Unknown(k)) if k == "upload");
    }
}
