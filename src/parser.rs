use crate::command::Command;

/// Default capacity of a single argument, counting the terminator slot the
/// C `argv` contract reserves. Tokens keep at most `MAX_ARG_LEN - 1` characters.
pub const MAX_ARG_LEN: usize = 256;

const SEPARATORS: [char; 3] = [' ', '\t', '\n'];

/// Splits input lines into [`Command`]s.
///
/// Tokens are maximal runs of characters other than space, tab and newline.
/// There is no quoting or escaping: `"a b"` is the two tokens `"a` and `b"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    max_arg_len: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            max_arg_len: MAX_ARG_LEN,
        }
    }
}

impl Parser {
    /// A parser whose arguments hold at most `max_arg_len - 1` characters.
    ///
    /// Values below 2 are raised to 2 so every token keeps its first character.
    pub fn with_max_arg_len(max_arg_len: usize) -> Self {
        Self {
            max_arg_len: max_arg_len.max(2),
        }
    }

    pub fn max_arg_len(&self) -> usize {
        self.max_arg_len
    }

    /// Tokenize one line. Over-long tokens are truncated, never rejected.
    pub fn parse(&self, line: &str) -> Command {
        let keep = self.max_arg_len - 1;
        let args = line
            .split(SEPARATORS)
            .filter(|token| !token.is_empty())
            .map(|token| truncate(token, keep))
            .collect::<Vec<_>>();
        tracing::debug!(argc = args.len(), "parsed line");
        Command::new(args)
    }

    /// Like [`Parser::parse`], but for a line source that may have nothing
    /// left to give. Absent input produces no command at all.
    pub fn parse_input(&self, line: Option<&str>) -> Option<Command> {
        line.map(|line| self.parse(line))
    }
}

fn truncate(token: &str, max_chars: usize) -> String {
    match token.char_indices().nth(max_chars) {
        Some((cut, _)) => token[..cut].to_owned(),
        None => token.to_owned(),
    }
}
