//! Turns console lines into bot commands.
//!
//! A line reads `<user-id>[:<display-name>] <prefix><command> [args]`.
//! Lines whose message does not start with the prefix are chat, not
//! commands, and are ignored.
use game_core::PlayerId;
use runtime::BotCommand;
use thiserror::Error;

/// What the author asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Command(BotCommand),
    /// Answered by the transport without touching the runtime.
    Help,
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Incoming {
    pub author: PlayerId,
    pub display_name: Option<String>,
    pub request: Request,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("missing argument, usage: {usage}")]
    MissingArgument { usage: String },

    #[error("'{0}' is not a player id or mention")]
    InvalidTarget(String),
}

/// Parses one console line.
///
/// Returns `Ok(None)` for blank lines and for messages without the prefix.
pub fn parse_line(line: &str, prefix: &str) -> Result<Option<Incoming>, ParseError> {
    let line = line.trim();
    let Some((author, message)) = line.split_once(char::is_whitespace) else {
        return Ok(None);
    };

    let Some(body) = message.trim_start().strip_prefix(prefix) else {
        return Ok(None);
    };

    let (author, display_name) = match author.split_once(':') {
        Some((id, name)) if !name.is_empty() => (id, Some(name.to_owned())),
        Some((id, _)) => (id, None),
        None => (author, None),
    };
    if author.is_empty() {
        return Ok(None);
    }
    let author = PlayerId::from(author);

    let mut words = body.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };

    let request = match name.to_lowercase().as_str() {
        "create" | "crear" => {
            let class = words.next().ok_or_else(|| ParseError::MissingArgument {
                usage: format!("{prefix}create <class>"),
            })?;
            Request::Command(BotCommand::Create {
                player: author.clone(),
                class: class.to_owned(),
            })
        }
        "profile" | "perfil" => Request::Command(BotCommand::Profile {
            player: author.clone(),
        }),
        "story" | "historia" => Request::Command(BotCommand::Story {
            player: author.clone(),
        }),
        "duel" | "pvp" => {
            let target = words.next().ok_or_else(|| ParseError::MissingArgument {
                usage: format!("{prefix}duel <player>"),
            })?;
            Request::Command(BotCommand::Duel {
                challenger: author.clone(),
                opponent: parse_target(target)?,
            })
        }
        "ranking" => Request::Command(BotCommand::Ranking),
        "help" | "ayuda" => Request::Help,
        other => return Err(ParseError::UnknownCommand(other.to_owned())),
    };

    Ok(Some(Incoming {
        author,
        display_name,
        request,
    }))
}

/// Accepts a bare id or a chat mention (`<@id>` / `<@!id>`).
fn parse_target(raw: &str) -> Result<PlayerId, ParseError> {
    let id = match raw.strip_prefix("<@") {
        Some(rest) => rest
            .strip_suffix('>')
            .map(|inner| inner.strip_prefix('!').unwrap_or(inner))
            .ok_or_else(|| ParseError::InvalidTarget(raw.to_owned()))?,
        None => raw,
    };

    if id.is_empty() || id.contains(['<', '>', '@']) {
        return Err(ParseError::InvalidTarget(raw.to_owned()));
    }
    Ok(PlayerId::from(id))
}

/// Command list shown by `help`.
pub fn help_text(prefix: &str) -> String {
    format!(
        "📜 Commands\n\
         {prefix}create <warrior|mage|assassin> - create your character\n\
         {prefix}profile - show your character\n\
         {prefix}story - fight your next story chapter\n\
         {prefix}duel <player> - ranked duel against another player\n\
         {prefix}ranking - top players by ELO\n\
         {prefix}help - this list"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(line: &str) -> BotCommand {
        match parse_line(line, "!").unwrap().unwrap().request {
            Request::Command(command) => command,
            Request::Help => panic!("expected a bot command"),
        }
    }

    #[test]
    fn parses_author_and_display_name() {
        let incoming = parse_line("7:Alice !profile", "!").unwrap().unwrap();
        assert_eq!(incoming.author, PlayerId::from("7"));
        assert_eq!(incoming.display_name.as_deref(), Some("Alice"));

        let incoming = parse_line("7 !profile", "!").unwrap().unwrap();
        assert_eq!(incoming.display_name, None);
    }

    #[test]
    fn english_and_spanish_aliases() {
        assert_eq!(
            command("1 !crear Mago"),
            BotCommand::Create {
                player: "1".into(),
                class: "Mago".into()
            }
        );
        assert_eq!(command("1 !perfil"), command("1 !profile"));
        assert_eq!(command("1 !historia"), command("1 !story"));
        assert_eq!(command("1 !pvp 2"), command("1 !duel 2"));
        assert_eq!(command("1 !RANKING"), BotCommand::Ranking);
        assert_eq!(
            parse_line("1 !ayuda", "!").unwrap().unwrap().request,
            Request::Help
        );
    }

    #[test]
    fn duel_accepts_mentions() {
        let expected = BotCommand::Duel {
            challenger: "1".into(),
            opponent: "42".into(),
        };
        assert_eq!(command("1 !duel <@42>"), expected);
        assert_eq!(command("1 !duel <@!42>"), expected);
        assert_eq!(
            parse_line("1 !duel <@42", "!"),
            Err(ParseError::InvalidTarget("<@42".into()))
        );
        assert_eq!(
            parse_line("1 !duel <@>", "!"),
            Err(ParseError::InvalidTarget("<@>".into()))
        );
    }

    #[test]
    fn chat_without_prefix_is_ignored() {
        assert_eq!(parse_line("1 hello there", "!"), Ok(None));
        assert_eq!(parse_line("", "!"), Ok(None));
        assert_eq!(parse_line("1", "!"), Ok(None));
        assert_eq!(parse_line("1 !", "!"), Ok(None));
    }

    #[test]
    fn custom_prefix() {
        assert_eq!(
            command_with("1 ?story", "?"),
            Some(BotCommand::Story { player: "1".into() })
        );
        assert_eq!(parse_line("1 !story", "?"), Ok(None));
    }

    fn command_with(line: &str, prefix: &str) -> Option<BotCommand> {
        match parse_line(line, prefix).ok()??.request {
            Request::Command(command) => Some(command),
            Request::Help => None,
        }
    }

    #[test]
    fn reports_bad_commands() {
        assert_eq!(
            parse_line("1 !dance", "!"),
            Err(ParseError::UnknownCommand("dance".into()))
        );
        assert_eq!(
            parse_line("1 !create", "!"),
            Err(ParseError::MissingArgument {
                usage: "!create <class>".into()
            })
        );
        assert!(matches!(
            parse_line("1 !duel", "!"),
            Err(ParseError::MissingArgument { .. })
        ));
    }
}
