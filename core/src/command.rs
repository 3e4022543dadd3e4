use crate::CommandError;

/// One line of player input.
///
/// Parsing never fails: malformed input becomes [`Command::Invalid`] carrying the
/// reason, which [`Game::apply`](crate::Game::apply) hands back as an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal { row: i64, col: i64 },
    Mark { row: i64, col: i64 },
    Guess { row: i64, col: i64 },
    Help,
    Quit,
    /// `nofog`: show the mines on the next rendered board only.
    ToggleMineOverlay,
    Invalid(CommandError),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        Self::try_parse(line).unwrap_or_else(Command::Invalid)
    }

    fn try_parse(line: &str) -> Result<Self, CommandError> {
        use Command::*;

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = tokens.split_first() else {
            return Err(CommandError::Empty);
        };

        match verb {
            "r" | "reveal" => coordinates("reveal", args).map(|(row, col)| Reveal { row, col }),
            "m" | "mark" => coordinates("mark", args).map(|(row, col)| Mark { row, col }),
            "g" | "guess" => coordinates("guess", args).map(|(row, col)| Guess { row, col }),
            "h" | "help" => bare("help", args).map(|()| Help),
            "q" | "quit" => bare("quit", args).map(|()| Quit),
            "nofog" => bare("nofog", args).map(|()| ToggleMineOverlay),
            other => Err(CommandError::UnknownVerb(other.to_owned())),
        }
    }
}

fn coordinates(verb: &'static str, args: &[&str]) -> Result<(i64, i64), CommandError> {
    let &[row, col] = args else {
        return Err(CommandError::WrongArity {
            verb,
            expected: 2,
            got: args.len(),
        });
    };
    Ok((number(row)?, number(col)?))
}

fn number(token: &str) -> Result<i64, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::NotANumber(token.to_owned()))
}

fn bare(verb: &'static str, args: &[&str]) -> Result<(), CommandError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::WrongArity {
            verb,
            expected: 0,
            got: args.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_and_short_verbs() {
        assert_eq!(Command::parse("reveal 2 3"), Command::Reveal { row: 2, col: 3 });
        assert_eq!(Command::parse("r 2 3"), Command::Reveal { row: 2, col: 3 });
        assert_eq!(Command::parse("mark 0 4"), Command::Mark { row: 0, col: 4 });
        assert_eq!(Command::parse("m 0 4"), Command::Mark { row: 0, col: 4 });
        assert_eq!(Command::parse("guess 1 1"), Command::Guess { row: 1, col: 1 });
        assert_eq!(Command::parse("g 1 1"), Command::Guess { row: 1, col: 1 });
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("h"), Command::Help);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("nofog"), Command::ToggleMineOverlay);
    }

    #[test]
    fn extra_whitespace_is_ignored() {
        assert_eq!(
            Command::parse("   reveal \t 4    0  \n"),
            Command::Reveal { row: 4, col: 0 }
        );
    }

    #[test]
    fn negative_and_huge_coordinates_still_parse() {
        assert_eq!(Command::parse("r -1 99"), Command::Reveal { row: -1, col: 99 });
    }

    #[test]
    fn empty_line_is_invalid() {
        assert_eq!(Command::parse(""), Command::Invalid(CommandError::Empty));
        assert_eq!(Command::parse("   "), Command::Invalid(CommandError::Empty));
    }

    #[test]
    fn unknown_verb_is_invalid() {
        assert_eq!(
            Command::parse("flag 1 1"),
            Command::Invalid(CommandError::UnknownVerb("flag".into()))
        );
        assert_eq!(
            Command::parse("REVEAL 1 1"),
            Command::Invalid(CommandError::UnknownVerb("REVEAL".into()))
        );
    }

    #[test]
    fn wrong_arity_is_invalid() {
        assert!(matches!(
            Command::parse("reveal 1"),
            Command::Invalid(CommandError::WrongArity { got: 1, .. })
        ));
        assert!(matches!(
            Command::parse("mark 1 2 3"),
            Command::Invalid(CommandError::WrongArity { got: 3, .. })
        ));
        assert!(matches!(
            Command::parse("help me"),
            Command::Invalid(CommandError::WrongArity { expected: 0, .. })
        ));
        assert!(matches!(
            Command::parse("q now"),
            Command::Invalid(CommandError::WrongArity { .. })
        ));
        assert!(matches!(
            Command::parse("nofog 1 1"),
            Command::Invalid(CommandError::WrongArity { .. })
        ));
    }

    #[test]
    fn non_numeric_coordinates_are_invalid() {
        assert_eq!(
            Command::parse("g 1 x"),
            Command::Invalid(CommandError::NotANumber("x".into()))
        );
        assert_eq!(
            Command::parse("g 1.5 2"),
            Command::Invalid(CommandError::NotANumber("1.5".into()))
        );
    }
}
