use std::{error, fmt};

use crate::token::Pos;

/// The outcome type shared by the parser, the type checker and the
/// generators' pre-flight checks.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// A single human-readable failure message, already carrying the file path
/// and the 1-indexed source position. Callers surface it verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
}

impl Diagnostic {
    pub fn new(path: &str, pos: Pos, message: impl fmt::Display) -> Diagnostic {
        Diagnostic {
            message: format!("ERROR @ {path}:{pos} {message}"),
        }
    }

    /// Appends a secondary line pointing at another source position, used by
    /// "declared twice" style reports.
    pub fn with_note(mut self, path: &str, pos: Pos, note: impl fmt::Display) -> Diagnostic {
        self.message.push_str(&format!("\n  note: {note} @ {path}:{pos}."));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Diagnostic({})", self.message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message_format() {
        let diag = Diagnostic::new("cat.tg", Pos::new(2, 5), "Something went wrong.");
        assert_eq!(diag.message(), "ERROR @ cat.tg:2:5 Something went wrong.");
    }

    #[test]
    fn note_appends_second_line() {
        let diag = Diagnostic::new("cat.tg", Pos::new(4, 1), "Type 'Cat' was declared twice.")
            .with_note("cat.tg", Pos::new(1, 6), "first declared");
        assert_eq!(
            diag.message(),
            "ERROR @ cat.tg:4:1 Type 'Cat' was declared twice.\n  note: first declared @ cat.tg:1:6."
        );
    }
}
