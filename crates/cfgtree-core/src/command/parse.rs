//! Tokenizer for single command lines.
//!
//! A line is `<dotted.address> [args...]`. Commas count as whitespace, so
//! `diamond_xyz 0.,0.,0.` and `diamond_xyz 0. 0. 0.` are the same command.

/// Reserved leaf token that creates a delegate from a type name.
pub const DELEGATE_DIRECTIVE: &str = "delegate()";

/// Reserved leaf token that replays another file.
pub const INCLUDE_DIRECTIVE: &str = "include()";

/// Reserved first segment that forwards to every child.
pub const BROADCAST_SEGMENT: &str = "*";

/// A normalized command: address plus single-space-joined arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub address: String,
    pub args: String,
}

impl CommandLine {
    /// Normalize and split a raw line. Returns `None` if it holds no tokens.
    pub fn parse(line: &str) -> Option<Self> {
        let normalized = line.replace(',', " ");
        let mut tokens = normalized.split_whitespace();
        let address = tokens.next()?.to_string();
        let args = tokens.collect::<Vec<_>>().join(" ");
        Some(Self { address, args })
    }

    /// Leading `.` continues the last prepend path.
    pub fn is_shorthand(&self) -> bool {
        self.address.starts_with('.')
    }

    pub fn has_args(&self) -> bool {
        !self.args.is_empty()
    }

    /// The last segment of the address.
    pub fn leaf(&self) -> &str {
        self.address
            .rsplit_once('.')
            .map_or(self.address.as_str(), |(_, leaf)| leaf)
    }

    pub fn arg_tokens(&self) -> Vec<&str> {
        self.args.split_whitespace().collect()
    }
}

/// What the head of an address refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// `*.rest`: forward `rest` to every child.
    Broadcast { rest: &'a str },
    /// `name.rest`: forward `rest` to the child `name`.
    Forward { delegate: &'a str, rest: &'a str },
    Directive(Directive),
    Value(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Delegate,
    Include,
}

impl Directive {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            DELEGATE_DIRECTIVE => Some(Directive::Delegate),
            INCLUDE_DIRECTIVE => Some(Directive::Include),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Directive::Delegate => DELEGATE_DIRECTIVE,
            Directive::Include => INCLUDE_DIRECTIVE,
        }
    }

    /// Number of arguments the directive takes.
    pub fn arity(self) -> usize {
        match self {
            Directive::Delegate => 2,
            Directive::Include => 1,
        }
    }
}

/// Classify an address by its first segment.
///
/// A trailing dot (`gen.`) leaves no leaf to address and is classified as
/// the whole address being a value name, which never resolves.
pub fn classify(address: &str) -> Target<'_> {
    match address.split_once('.') {
        Some((_, "")) => Target::Value(address),
        Some((BROADCAST_SEGMENT, rest)) => Target::Broadcast { rest },
        Some((delegate, rest)) => Target::Forward { delegate, rest },
        None => match Directive::from_token(address) {
            Some(directive) => Target::Directive(directive),
            None => Target::Value(address),
        },
    }
}
