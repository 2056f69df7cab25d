use std::str::FromStr;

use crate::common::error::CommandError;
use crate::common::generator::PasswordOptions;

pub const HELP: &str = "\
Available commands:
  length <6-32>          - Set the password length (alias: len)
  digits                 - Toggle digits 0-9
  symbols                - Toggle symbols
  new                    - Generate a new password (aliases: generate, regen)
  copy                   - Copy the password to the clipboard
  show                   - Show the current password and options
  save                   - Save the current options as defaults
  help                   - Show this help message
  exit/quit              - Exit";

/// One user intent typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetLength(usize),
    ToggleDigits,
    ToggleSymbols,
    Regenerate,
    Copy,
    Show,
    Save,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = match parts.as_slice() {
            [] => return Err(CommandError::Empty),
            ["length" | "len"] => return Err(CommandError::MissingLength),
            ["length" | "len", value] => Command::SetLength(parse_length(value)?),
            ["digits" | "numbers"] => Command::ToggleDigits,
            ["symbols" | "chars"] => Command::ToggleSymbols,
            ["new" | "generate" | "regen"] => Command::Regenerate,
            ["copy"] => Command::Copy,
            ["show"] => Command::Show,
            ["save"] => Command::Save,
            ["help"] => Command::Help,
            ["exit" | "quit"] => Command::Quit,
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };
        Ok(command)
    }
}

//The prompt plays the role of the range slider, so it clamps here
fn parse_length(value: &str) -> Result<usize, CommandError> {
    let length = value
        .parse::<usize>()
        .map_err(|_| CommandError::InvalidLength(value.to_string()))?;
    if !PasswordOptions::length_in_range(length) {
        return Err(CommandError::LengthOutOfRange(length));
    }
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("length 12".parse(), Ok(Command::SetLength(12)));
        assert_eq!("  len   6 ".parse(), Ok(Command::SetLength(6)));
        assert_eq!("digits".parse(), Ok(Command::ToggleDigits));
        assert_eq!("symbols".parse(), Ok(Command::ToggleSymbols));
        assert_eq!("regen".parse(), Ok(Command::Regenerate));
        assert_eq!("generate".parse(), Ok(Command::Regenerate));
        assert_eq!("copy".parse(), Ok(Command::Copy));
        assert_eq!("show".parse(), Ok(Command::Show));
        assert_eq!("save".parse(), Ok(Command::Save));
        assert_eq!("help".parse(), Ok(Command::Help));
        assert_eq!("quit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_length_is_range_checked() {
        assert_eq!("length 32".parse(), Ok(Command::SetLength(32)));
        assert_eq!(
            "length 5".parse::<Command>(),
            Err(CommandError::LengthOutOfRange(5))
        );
        assert_eq!(
            "length 33".parse::<Command>(),
            Err(CommandError::LengthOutOfRange(33))
        );
        assert_eq!(
            "length -1".parse::<Command>(),
            Err(CommandError::InvalidLength("-1".to_string()))
        );
        assert_eq!("length".parse::<Command>(), Err(CommandError::MissingLength));
    }

    #[test]
    fn test_bad_input() {
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "digits please".parse::<Command>(),
            Err(CommandError::Unknown("digits please".to_string()))
        );
    }
}
