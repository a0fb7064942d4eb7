/// A `:`-prefixed line in chat mode that the shell handles itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Memory,
    Transcript,
    /// `None` when no path was given.
    Save(Option<String>),
    Help,
}

impl ChatCommand {
    /// Returns `None` for anything that is not a known command, so lines
    /// like `:)` or `:-(` still reach the responder.
    pub fn parse(input: &str) -> Option<Self> {
        let line = input.trim().strip_prefix(':')?;
        let (name, arg) = line
            .split_once(char::is_whitespace)
            .map(|(n, a)| (n, a.trim()))
            .unwrap_or((line, ""));

        match name {
            "memory" => Some(Self::Memory),
            "transcript" => Some(Self::Transcript),
            "save" if arg.is_empty() => Some(Self::Save(None)),
            "save" => Some(Self::Save(Some(arg.to_string()))),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_commands() {
        assert_eq!(ChatCommand::parse(":memory"), Some(ChatCommand::Memory));
        assert_eq!(ChatCommand::parse("  :transcript "), Some(ChatCommand::Transcript));
        assert_eq!(ChatCommand::parse(":help"), Some(ChatCommand::Help));
        assert_eq!(ChatCommand::parse(":save"), Some(ChatCommand::Save(None)));
        assert_eq!(
            ChatCommand::parse(":save  chat log.json "),
            Some(ChatCommand::Save(Some("chat log.json".to_string())))
        );
    }

    #[test]
    fn test_other_colon_lines_are_messages() {
        for input in [":)", ":-(", ":", ":d", ":Memory", "memory", "what is :help"] {
            assert_eq!(ChatCommand::parse(input), None, "{:?}", input);
        }
    }
}
