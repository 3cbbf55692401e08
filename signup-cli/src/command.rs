//! Parsing of replayed form events.

use signup_lib::FieldId;
use signup_lib::error::FieldParseError;

/// Error type for a malformed event line.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{0}' (expected type, blur, submit, show or reset)")]
    Unknown(String),

    #[error("'{0}' needs a field name")]
    MissingField(&'static str),

    #[error(transparent)]
    Field(#[from] FieldParseError),
}

/// One line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace a field's text, as if typed.
    Type { field: FieldId, text: String },
    Blur(FieldId),
    Submit,
    Show,
    Reset,
}

impl Command {
    /// Parse `type <field> [text]`, `blur <field>`, `submit`, `show` or `reset`.
    ///
    /// Text is everything after the field name, so it may contain spaces.
    /// Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        let command = match verb {
            "type" => {
                let (field, text) = rest.split_once(' ').unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(CommandError::MissingField("type"));
                }
                Command::Type {
                    field: field.parse()?,
                    text: text.to_string(),
                }
            }
            "blur" => {
                let field = rest.trim();
                if field.is_empty() {
                    return Err(CommandError::MissingField("blur"));
                }
                Command::Blur(field.parse()?)
            }
            "submit" => Command::Submit,
            "show" => Command::Show,
            "reset" => Command::Reset,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type_keeps_spaces() {
        assert_eq!(
            Command::parse("type name Ana María\n").unwrap(),
            Some(Command::Type {
                field: FieldId::Name,
                text: "Ana María".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_type_empty_text() {
        assert_eq!(
            Command::parse("type confirm").unwrap(),
            Some(Command::Type {
                field: FieldId::ConfirmPassword,
                text: String::new(),
            })
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(
            Command::parse("blur email").unwrap(),
            Some(Command::Blur(FieldId::Email))
        );
        assert_eq!(Command::parse("submit").unwrap(), Some(Command::Submit));
        assert_eq!(Command::parse("  # note").unwrap(), None);
        assert_eq!(Command::parse("").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Command::parse("jump"),
            Err(CommandError::Unknown(_))
        ));
        assert!(matches!(
            Command::parse("blur"),
            Err(CommandError::MissingField("blur"))
        ));
        assert!(matches!(
            Command::parse("blur phone"),
            Err(CommandError::Field(_))
        ));
    }
}
