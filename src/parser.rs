use crate::{
    ast::{Field, FuncDecl, Modifiers, ReturnType, TypeDecl},
    diag::{Diagnostic, Result},
    lexer::Lexer,
    token::{Keyword, Pos, Token, TokenKind},
};

/// A source of tokens.
///
/// The parser depends on this narrow capability rather than on the lexer
/// directly, so tests can substitute a scripted in-memory stream.
pub trait Tokenizer {
    /// Produces the next token. Implementations must keep returning a
    /// terminal token (EOF or error) once the stream has ended.
    fn next_token(&mut self) -> Token;
}

/// Parses a whole `.tg` file into its type declarations.
pub fn parse_file(path: &str, data: &[u8]) -> Result<Vec<TypeDecl>> {
    Parser::new(path, Lexer::new(data)).parse_file()
}

/// Recursive-descent parser with one token of lookahead.
///
/// Parsing is fail-fast: the first structural error aborts the whole file and
/// the partially accumulated declarations are dropped.
pub struct Parser<'path, T> {
    tokenizer: T,
    current: Token,
    path: &'path str,
    types: Vec<TypeDecl>,
}

impl<'path, T: Tokenizer> Parser<'path, T> {
    pub fn new(path: &'path str, mut tokenizer: T) -> Parser<'path, T> {
        let current = tokenizer.next_token();
        Parser {
            tokenizer,
            current,
            path,
            types: Vec::new(),
        }
    }

    /// file := { typeDecl } EOF
    pub fn parse_file(mut self) -> Result<Vec<TypeDecl>> {
        loop {
            match &self.current.kind {
                TokenKind::Eof => return Ok(self.types),
                TokenKind::Keyword(Keyword::Type) => {
                    let decl = self.parse_type_declaration()?;
                    self.types.push(decl);
                }
                _ => return Err(self.unexpected("keyword 'type'")),
            }
        }
    }

    /// typeDecl := "type" IDENT "{" [ member { member } ] "}"
    fn parse_type_declaration(&mut self) -> Result<TypeDecl> {
        let type_token = self.advance();
        let (name, name_pos) = self.expect_identifier("a type name")?;
        self.expect(TokenKind::LBrace, "'{'")?;

        let mut decl = TypeDecl {
            pos: type_token.pos,
            name,
            name_pos,
            fields: Vec::new(),
            methods: Vec::new(),
        };

        // A type with no members is valid.
        if self.take(&TokenKind::RBrace) {
            return Ok(decl);
        }

        loop {
            if self.current.kind == TokenKind::Keyword(Keyword::Func) {
                decl.methods.push(self.parse_function_declaration()?);
            } else {
                decl.fields.push(self.parse_type_field()?);
            }
            self.expect(TokenKind::Semicolon, "';'")?;
            if self.take(&TokenKind::RBrace) {
                return Ok(decl);
            }
        }
    }

    /// field := ["const"] ["["] IDENT ["?"] ["]"] IDENT
    ///
    /// Also used for function parameters, which are field-shaped.
    fn parse_type_field(&mut self) -> Result<Field> {
        let mut modifiers = Modifiers::NONE;

        if self.current.kind == TokenKind::Keyword(Keyword::Const) {
            self.advance();
            modifiers |= Modifiers::CONST;
        }

        let array = self.take(&TokenKind::LBracket);
        if array {
            modifiers |= Modifiers::ARRAY;
        }

        let (type_name, type_pos) = self.expect_identifier("a type name")?;

        if self.take(&TokenKind::Question) {
            modifiers |= Modifiers::NULLABLE;
        }
        if array {
            self.expect(TokenKind::RBracket, "']'")?;
        }

        let (var_name, var_pos) = self.expect_identifier("a field name")?;

        Ok(Field {
            var_name,
            var_pos,
            type_name,
            type_pos,
            modifiers,
        })
    }

    /// funcDecl := "func" IDENT "(" [ field { "," field } ] ")" [ IDENT ]
    fn parse_function_declaration(&mut self) -> Result<FuncDecl> {
        self.advance();
        let (name, pos) = self.expect_identifier("a method name")?;
        self.expect(TokenKind::LParen, "'('")?;

        let mut params = Vec::new();
        if !self.take(&TokenKind::RParen) {
            loop {
                params.push(self.parse_type_field()?);
                if !self.take(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RParen, "')'")?;
        }

        // The return type is a lookahead-only optional production: a bare
        // identifier right after the closing parenthesis. Its absence means
        // "void" and is not an error.
        let return_type = if matches!(self.current.kind, TokenKind::Identifier(_)) {
            let (name, pos) = self.expect_identifier("a return type")?;
            Some(ReturnType { name, pos })
        } else {
            None
        };

        Ok(FuncDecl {
            name,
            pos,
            params,
            return_type,
        })
    }
}

impl<T: Tokenizer> Parser<'_, T> {
    /// Returns the current token and advances to the next one.
    fn advance(&mut self) -> Token {
        let next = self.tokenizer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Advances if the current token matches, returning true; otherwise
    /// leaves the stream untouched.
    fn take(&mut self, kind: &TokenKind) -> bool {
        if self.current.kind == *kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advances past the current token if it matches; fails otherwise.
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token> {
        if self.current.kind == kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Consumes an identifier token, returning its text and position.
    fn expect_identifier(&mut self, expected: &str) -> Result<(String, Pos)> {
        if !matches!(self.current.kind, TokenKind::Identifier(_)) {
            return Err(self.unexpected(expected));
        }
        let token = self.advance();
        let TokenKind::Identifier(name) = token.kind else {
            unreachable!()
        };
        Ok((name, token.pos))
    }

    /// Builds the failure for an unexpected token at a required-token point.
    /// Lexer error tokens surface here as parse failures too.
    fn unexpected(&self, expected: &str) -> Diagnostic {
        Diagnostic::new(
            self.path,
            self.current.pos,
            format_args!(
                "Expected {expected}, but instead {} was found.",
                self.current.kind.describe()
            ),
        )
    }
}
