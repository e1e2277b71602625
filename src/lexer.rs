use std::fmt;

use crate::{
    parser::Tokenizer,
    token::{Pos, Token, TokenKind, KEYWORDS},
};

/// The `.tg` lexer.
///
/// Scans a raw byte buffer into [`Token`]s, one call at a time. The buffer is
/// never rewound; once an EOF or error token has been produced, every
/// subsequent call returns the same terminal token again.
pub struct Lexer<'src> {
    data: &'src [u8],
    /// Byte offset of `current` within `data`.
    cursor: usize,
    current: Scanned,
    pos: Pos,
}

/// The decoded character under the cursor.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Scanned {
    /// A character and its encoded byte length.
    Char(char, u8),
    /// The bytes under the cursor are not valid UTF-8.
    Invalid,
    End,
}

impl<'src> Lexer<'src> {
    pub fn new(data: &'src [u8]) -> Lexer<'src> {
        Lexer {
            data,
            cursor: 0,
            current: decode(data),
            pos: Pos::START,
        }
    }

    /// Scans the next token, advancing the lexer past it.
    pub fn next_token(&mut self) -> Token {
        loop {
            let pos = self.pos;
            let Scanned::Char(c, _) = self.current else {
                return match self.current {
                    Scanned::End => Token::new(TokenKind::Eof, pos),
                    // Not advanced past, so the caller must treat this token
                    // as terminal.
                    _ => Token::new(TokenKind::Error(Error::InvalidEncoding), pos),
                };
            };

            match c {
                ' ' | '\t' | '\x0b' | '\r' | '\n' | '\x0c' => {
                    self.bump();
                }
                '{' => return self.bump_with(TokenKind::LBrace, pos),
                '}' => return self.bump_with(TokenKind::RBrace, pos),
                '(' => return self.bump_with(TokenKind::LParen, pos),
                ')' => return self.bump_with(TokenKind::RParen, pos),
                '[' => return self.bump_with(TokenKind::LBracket, pos),
                ']' => return self.bump_with(TokenKind::RBracket, pos),
                ',' => return self.bump_with(TokenKind::Comma, pos),
                ';' => return self.bump_with(TokenKind::Semicolon, pos),
                '?' => return self.bump_with(TokenKind::Question, pos),
                '#' => self.skip_comment(),
                _ => {
                    let Some(word) = self.scan_word() else {
                        return Token::new(TokenKind::Error(Error::UnknownSymbol), pos);
                    };
                    let kind = match KEYWORDS.get(word.as_str()) {
                        Some(&keyword) => TokenKind::Keyword(keyword),
                        None => TokenKind::Identifier(word),
                    };
                    return Token::new(kind, pos);
                }
            }
        }
    }

    /// Scans a word: a Unicode letter followed by any run of Unicode letters,
    /// digits or underscores. Returns `None` (without advancing) when the
    /// current character cannot start a word.
    fn scan_word(&mut self) -> Option<String> {
        let Scanned::Char(first, _) = self.current else {
            return None;
        };
        if !first.is_alphabetic() {
            return None;
        }

        let mut word = String::new();
        word.push(first);
        self.bump();

        while let Scanned::Char(c, _) = self.current {
            if !c.is_alphanumeric() && c != '_' {
                break;
            }
            word.push(c);
            self.bump();
        }
        Some(word)
    }

    /// Skips a `#` line comment up to, but not including, the next newline.
    fn skip_comment(&mut self) {
        while let Scanned::Char(c, _) = self.current {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    /// Consumes the current character, updating the line/column counters.
    fn bump(&mut self) {
        let Scanned::Char(c, size) = self.current else {
            return;
        };
        if c == '\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }
        self.cursor += size as usize;
        self.current = decode(&self.data[self.cursor..]);
    }

    /// Consumes the current character and produces a single-character token.
    fn bump_with(&mut self, kind: TokenKind, pos: Pos) -> Token {
        self.bump();
        Token::new(kind, pos)
    }
}

impl Tokenizer for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        Lexer::next_token(self)
    }
}

/// Decodes the first character of `bytes`.
fn decode(bytes: &[u8]) -> Scanned {
    let Some(&first) = bytes.first() else {
        return Scanned::End;
    };
    let len: usize = match first {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => return Scanned::Invalid,
    };
    if bytes.len() < len {
        return Scanned::Invalid;
    }
    match std::str::from_utf8(&bytes[..len]) {
        Ok(s) => match s.chars().next() {
            Some(c) => Scanned::Char(c, len as u8),
            None => Scanned::Invalid,
        },
        Err(_) => Scanned::Invalid,
    }
}

/// Lexical error kinds, carried by [`TokenKind::Error`].
///
/// `UnclosedString` and `UnclosedComment` are reserved: the current grammar
/// has neither string literals nor block comments, so no lexer rule produces
/// them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    InvalidEncoding,
    UnknownSymbol,
    UnclosedString,
    UnclosedComment,
}

impl Error {
    pub fn describe(self) -> &'static str {
        match self {
            Error::InvalidEncoding => "an invalid character encoding",
            Error::UnknownSymbol => "an unrecognized symbol",
            Error::UnclosedString => "an unclosed string",
            Error::UnclosedComment => "an unclosed block comment",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
