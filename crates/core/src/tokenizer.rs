//! Shell-like splitting of the free-form arguments input.
//!
//! Quoting and escaping follow a small subset of POSIX shell rules, without
//! variable expansion or globbing:
//!
//! - unquoted ASCII whitespace (space, tab, newline) separates arguments, runs of it collapse
//! - `'...'` and `"..."` group characters into one argument, the quotes are dropped
//! - inside either kind of quote, `\` makes the next character literal
//! - outside quotes, `\` is an ordinary character
//!
//! An unterminated quote is not an error: whatever was collected is emitted as
//! the final argument.

use log::debug;

use crate::parameters::ArgumentVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum QuoteState {
    #[default]
    Unquoted,
    InSingleQuote,
    InDoubleQuote,
}

impl QuoteState {
    fn closing_char(self) -> Option<char> {
        match self {
            Self::Unquoted => None,
            Self::InSingleQuote => Some('\''),
            Self::InDoubleQuote => Some('"'),
        }
    }
}

#[derive(Default)]
struct Tokenizer {
    arguments: ArgumentVector,
    current: String,
    state: QuoteState,
}

impl Tokenizer {
    fn tokenize(mut self, input: &str) -> ArgumentVector {
        let mut chars = input.chars();

        while let Some(c) = chars.next() {
            match self.state.closing_char() {
                None => self.handle_unquoted(c),
                Some(closing) if c == closing => self.state = QuoteState::Unquoted,
                Some(_) if c == '\\' => match chars.next() {
                    Some(escaped) => self.current.push(escaped),
                    // Nothing left to escape
                    None => self.current.push(c),
                },
                Some(_) => self.current.push(c),
            }
        }

        if self.state != QuoteState::Unquoted {
            debug!("Unterminated quote in arguments input, keeping partial argument");
        }

        self.finish_argument();
        self.arguments
    }

    fn handle_unquoted(&mut self, c: char) {
        match c {
            '"' => self.state = QuoteState::InDoubleQuote,
            '\'' => self.state = QuoteState::InSingleQuote,
            c if c.is_ascii_whitespace() => self.finish_argument(),
            _ => self.current.push(c),
        }
    }

    fn finish_argument(&mut self) {
        let argument = self.current.trim();
        if !argument.is_empty() {
            self.arguments.push(argument.to_string());
        }
        self.current.clear();
    }
}

/// Splits `input` into arguments, honouring quotes and escapes.
///
/// # Examples
///
/// ```
/// use apm_action_core::tokenizer::tokenize;
///
/// let arguments = tokenize(r#"--msg "Hello world" --file 'a/b' --flag"#);
/// assert_eq!(arguments, vec!["--msg", "Hello world", "--file", "a/b", "--flag"]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> ArgumentVector {
    Tokenizer::default().tokenize(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_flags() {
        assert_eq!(
            tokenize("--debug --verbose --flag=value"),
            vec!["--debug", "--verbose", "--flag=value"]
        );
    }

    #[test]
    fn test_single_and_double_quotes_group_words() {
        assert_eq!(
            tokenize(r#"--msg "Hello world" --file 'a/b' --flag"#),
            vec!["--msg", "Hello world", "--file", "a/b", "--flag"]
        );
    }

    #[test]
    fn test_escaped_quote_inside_double_quotes() {
        assert_eq!(tokenize(r#"--x "a\"b""#), vec!["--x", "a\"b"]);
    }

    #[test]
    fn test_escaped_backslash_and_quote_inside_single_quotes() {
        assert_eq!(tokenize(r"'a\\b' 'it\'s'"), vec![r"a\b", "it's"]);
    }

    #[test]
    fn test_backslash_outside_quotes_is_literal() {
        assert_eq!(tokenize(r"C:\temp a\ b"), vec![r"C:\temp", r"a\", "b"]);
    }

    #[test]
    fn test_other_quote_kind_is_literal_inside_quotes() {
        assert_eq!(
            tokenize(r#""it's here" 'say "hi"'"#),
            vec!["it's here", r#"say "hi""#]
        );
    }

    #[test]
    fn test_quotes_join_adjacent_text() {
        assert_eq!(tokenize(r#"--name="John Doe""#), vec!["--name=John Doe"]);
    }

    #[test]
    fn test_unterminated_quote_keeps_partial_argument() {
        assert_eq!(tokenize(r#"--unclosed "abc"#), vec!["--unclosed", "abc"]);
        assert_eq!(tokenize("--unclosed 'abc def"), vec!["--unclosed", "abc def"]);
    }

    #[test]
    fn test_trailing_backslash_in_quotes_is_kept() {
        assert_eq!(tokenize(r#""abc\"#), vec![r"abc\"]);
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(tokenize("   a    b  "), vec!["a", "b"]);
        assert_eq!(tokenize("a\tb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_multi_line_input_splits_on_newlines() {
        assert_eq!(tokenize("--a\n--b\tc"), vec!["--a", "--b", "c"]);
    }

    #[test]
    fn test_non_breaking_space_stays_inside_argument() {
        assert_eq!(tokenize("a\u{a0}b c"), vec!["a\u{a0}b", "c"]);
    }

    #[test]
    fn test_blank_input_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn test_empty_quotes_emit_nothing() {
        assert_eq!(tokenize(r#"a "" '' b"#), vec!["a", "b"]);
    }

    #[test]
    fn test_quoted_argument_is_trimmed() {
        assert_eq!(tokenize(r#"--m "  padded  ""#), vec!["--m", "padded"]);
    }

    #[test]
    fn test_non_ascii_characters() {
        assert_eq!(tokenize("--emoji '🚀 go' ñ"), vec!["--emoji", "🚀 go", "ñ"]);
    }
}
