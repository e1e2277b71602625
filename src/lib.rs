/// The lexer takes the source input, mapping it into a sequence of tokens.
pub mod lexer;

/// The parser takes a sequence of tokens, mapping it into a list of type
/// declarations.
pub mod parser;

/// The type checker verifies that every referenced type either names a
/// primitive or a declared type, and that no name is declared twice within
/// its scope.
pub mod type_checker;

/// The back ends, one module per target language.
pub mod generate;

pub mod ast;
pub mod cli;
pub mod diag;
pub mod token;
