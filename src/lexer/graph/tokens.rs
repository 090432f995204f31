// src/lexer/graph/tokens.rs

use serde::{Deserialize, Serialize};

/// Token kinds for the default C-like grammar, plus the structural kinds the
/// scanner itself produces.
///
/// `Unknown` doubles as the non-accepting label on states that do not end a
/// lexeme, so a match that finalizes in such a state surfaces as an `UNKNOWN`
/// token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    // keywords
    KwBreak,
    KwChar,
    KwConst,
    KwContinue,
    KwDo,
    KwElse,
    KwFloat,
    KwFor,
    KwIf,
    KwInt,
    KwReturn,
    KwVoid,
    KwWhile,

    // single-char punctuation
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Assign,
    Not,
    Amp,
    Pipe,
    Lt,
    Gt,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,

    // two-char operators
    EqEq,
    NotEq,
    Le,
    Ge,
    AndAnd,
    OrOr,

    // comment delimiters (recognized as lexemes, never emitted as-is)
    LineComment,
    BlockCommentStart,
    BlockCommentEnd,

    // produced by the scanner rather than the template
    Identifier,
    IntegerConstant,
    FloatingPointConstant,
    Unknown,
    Eof,
}

/// Ordered keyword and symbol tables fed to the graph builder.
///
/// Order matters only for duplicates: a lexeme inserted twice keeps the label
/// of its last entry. Lexemes are plain `String`s so a template can come out
/// of a JSON config file as well as from [`GrammarTemplate::c_like`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarTemplate {
    pub keywords: Vec<(String, TokenType)>,
    pub symbols: Vec<(String, TokenType)>,
}

impl GrammarTemplate {
    /// The default grammar: a small C subset with `//` and `/* */` comments.
    pub fn c_like() -> Self {
        use TokenType::*;
        let keywords = [
            ("break", KwBreak),
            ("char", KwChar),
            ("const", KwConst),
            ("continue", KwContinue),
            ("do", KwDo),
            ("else", KwElse),
            ("float", KwFloat),
            ("for", KwFor),
            ("if", KwIf),
            ("int", KwInt),
            ("return", KwReturn),
            ("void", KwVoid),
            ("while", KwWhile),
        ];
        let symbols = [
            ("+", Plus),
            ("-", Minus),
            ("*", Star),
            ("/", Slash),
            ("%", Percent),
            ("=", Assign),
            ("!", Not),
            ("&", Amp),
            ("|", Pipe),
            ("<", Lt),
            (">", Gt),
            ("(", LParen),
            (")", RParen),
            ("[", LBracket),
            ("]", RBracket),
            ("{", LBrace),
            ("}", RBrace),
            (",", Comma),
            (";", Semicolon),
            ("==", EqEq),
            ("!=", NotEq),
            ("<=", Le),
            (">=", Ge),
            ("&&", AndAnd),
            ("||", OrOr),
            ("//", LineComment),
            ("/*", BlockCommentStart),
            ("*/", BlockCommentEnd),
        ];
        Self {
            keywords: keywords
                .iter()
                .map(|&(s, t)| (s.to_owned(), t))
                .collect(),
            symbols: symbols.iter().map(|&(s, t)| (s.to_owned(), t)).collect(),
        }
    }
}

impl Default for GrammarTemplate {
    fn default() -> Self {
        Self::c_like()
    }
}
