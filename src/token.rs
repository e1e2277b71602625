use std::fmt;

use crate::lexer;

/// A source position. Both fields are 1-indexed; columns count characters,
/// not bytes.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Pos {
    pub line: u32,
    pub column: u32,
}

impl Pos {
    pub const START: Pos = Pos { line: 1, column: 1 };

    pub fn new(line: u32, column: u32) -> Pos {
        Pos { line, column }
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({self})")
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Pos,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Pos) -> Token {
        Token { kind, pos }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({:?}, {})", self.kind, self.pos)
    }
}

/// Token display, meant for the `--tokens` stream dump. Renders the token
/// category, its position and its value.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = format!("{}", self.pos);
        write!(f, "{:<14} {pos:<7} - {}", self.kind.category(), self.kind.value())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Error(lexer::Error),
    Keyword(Keyword),
    Identifier(String),

    Comma,
    Semicolon,
    /// `?`
    Question,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
}

impl TokenKind {
    /// The human-readable token category name.
    pub fn category(&self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Error(_) => "error",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Question => "nullable",
            TokenKind::LBrace => "curly open",
            TokenKind::RBrace => "curly close",
            TokenKind::LParen => "round open",
            TokenKind::RParen => "round close",
            TokenKind::LBracket => "square open",
            TokenKind::RBracket => "square close",
        }
    }

    /// The token's carried value: the keyword or identifier text, the literal
    /// punctuation character, or a fixed description.
    pub fn value(&self) -> &str {
        match self {
            TokenKind::Eof => "end of file",
            TokenKind::Error(error) => error.describe(),
            TokenKind::Keyword(keyword) => keyword.as_str(),
            TokenKind::Identifier(name) => name,
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Question => "?",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
        }
    }

    /// How this token reads inside an "expected X, but instead Y was found"
    /// diagnostic.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Eof => "end of file".to_string(),
            TokenKind::Error(error) => error.describe().to_string(),
            TokenKind::Keyword(keyword) => format!("keyword '{keyword}'"),
            TokenKind::Identifier(name) => format!("identifier '{name}'"),
            punctuation => format!("'{}'", punctuation.value()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Keyword {
    Type,
    Const,
    Func,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Type => "type",
            Keyword::Const => "const",
            Keyword::Func => "func",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub static KEYWORDS: phf::Map<&'static str, Keyword> = phf::phf_map! {
    "type" => Keyword::Type,
    "const" => Keyword::Const,
    "func" => Keyword::Func,
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn describe_for_diagnostics() {
        assert_eq!(TokenKind::Eof.describe(), "end of file");
        assert_eq!(TokenKind::Keyword(Keyword::Type).describe(), "keyword 'type'");
        assert_eq!(
            TokenKind::Identifier("Cat".to_string()).describe(),
            "identifier 'Cat'"
        );
        assert_eq!(TokenKind::LBrace.describe(), "'{'");
        assert_eq!(TokenKind::Semicolon.describe(), "';'");
    }

    #[test]
    fn display_stream_dump() {
        let token = Token::new(TokenKind::Keyword(Keyword::Const), Pos::new(3, 1));
        assert_eq!(format!("{token}"), "keyword        3:1     - const");

        let token = Token::new(TokenKind::RBrace, Pos::new(8, 9));
        assert_eq!(format!("{token}"), "curly close    8:9     - }");
    }
}
