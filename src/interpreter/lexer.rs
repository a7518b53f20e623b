use std::fmt;

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `let`
    #[token("let")]
    Let,
    /// `letrec`
    #[token("letrec")]
    LetRec,
    /// `in`
    #[token("in")]
    In,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `and`: logical and, or the start of the next definition in a block.
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// Identifier tokens; variable or function names such as `x` or `fact'`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_']*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(* Comments. *)`, which may span lines.
    #[regex(r"\(\*([^*]|\*+[^*)])*\*+\)", |lex| {
        let comment = lex.slice();
        if let Some(last) = comment.rfind('\n') {
            lex.extras.line += comment.matches('\n').count();
            lex.extras.line_start = lex.span().start + last + 1;
        }
        logos::Skip
    })]
    Comment,
    /// `->`
    #[token("->")]
    Arrow,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `&&`, same as `and` in expressions.
    #[token("&&")]
    AmpAmp,
    /// `||`, same as `or`.
    #[token("||")]
    PipePipe,
    /// `=`
    #[token("=")]
    Equals,
    /// `<>`
    #[token("<>")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;;`, an optional terminator after the main expression.
    #[token(";;")]
    SemiSemi,
    /// Line breaks; skipped after advancing the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
    /// End of input. Never produced by the generated lexer; [`tokenize`]
    /// appends it after the last real token.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so that
/// every token can be given a line and column.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// A 1-based line and column in the source text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Spells the token the way it appears in source code.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Integer(n) => return write!(f, "{n}"),
            Self::Bool(b) => return write!(f, "{b}"),
            Self::Identifier(name) => return write!(f, "{name}"),
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::Let => "let",
            Self::LetRec => "letrec",
            Self::In => "in",
            Self::Fun => "fun",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Comment => "(* *)",
            Self::Arrow => "->",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::AmpAmp => "&&",
            Self::PipePipe => "||",
            Self::Equals => "=",
            Self::NotEqual => "<>",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::SemiSemi => ";;",
            Self::NewLine => "newline",
            Self::Ignored => "whitespace",
            Self::Eof => "end of input",
        };
        write!(f, "{text}")
    }
}

/// Splits source text into positioned tokens.
///
/// The returned vector always ends with [`Token::Eof`], positioned just past
/// the last character of the input.
///
/// # Errors
/// - `InvalidToken` for characters outside the token alphabet.
/// - `LiteralTooLarge` for integer literals that do not fit in an `i64`.
///
/// # Example
/// ```
/// use minifun::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("f 1\n  x").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|(tok, _)| tok.clone()).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("f".into()),
///                 Token::Integer(1),
///                 Token::Identifier("x".into()),
///                 Token::Eof]);
/// assert_eq!(tokens[2].1.line, 2);
/// assert_eq!(tokens[2].1.column, 3);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line:       1,
                                                                   line_start: 0, });

    while let Some(token) = lexer.next() {
        let position = Position { line:   lexer.extras.line,
                                  column: lexer.span().start - lexer.extras.line_start + 1, };
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let slice = lexer.slice().to_string();
                if slice.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::LiteralTooLarge { literal: slice,
                                                             position });
                }
                return Err(ParseError::InvalidToken { token: slice,
                                                      position });
            },
        }
    }

    let end = Position { line:   lexer.extras.line,
                         column: source.len() - lexer.extras.line_start + 1, };
    tokens.push((Token::Eof, end));

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
