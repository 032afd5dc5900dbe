//! Token types and the scanner that turns Soorj source text into a token stream.

use std::fmt;

/// A 1-based source position carried on every token and AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const NONE: Self = Self { line: 0, column: 0 };

    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if *self == Self::NONE {
            write!(f, "?")
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// The kind of a token, carrying literal payloads inline where useful.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Str(String),
    Identifier(String),

    If,
    Else,
    While,
    Function,
    Return,
    True,
    False,
    Null,
    And,
    Or,
    Not,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Assign,
    EqualsEquals,
    NotEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,

    Newline,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Str(s) => write!(f, "{:?}", s),
            Self::Identifier(s) => write!(f, "{}", s),
            Self::If => write!(f, "եթե"),
            Self::Else => write!(f, "հպ"),
            Self::While => write!(f, "մինչև"),
            Self::Function => write!(f, "գործ"),
            Self::Return => write!(f, "տուր"),
            Self::True => write!(f, "այո"),
            Self::False => write!(f, "ոչ"),
            Self::Null => write!(f, "հեչ"),
            Self::And => write!(f, "և"),
            Self::Or => write!(f, "կամ"),
            Self::Not => write!(f, "չի"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Assign => write!(f, "="),
            Self::EqualsEquals => write!(f, "=="),
            Self::NotEquals => write!(f, "!="),
            Self::Less => write!(f, "<"),
            Self::LessEquals => write!(f, "<="),
            Self::Greater => write!(f, ">"),
            Self::GreaterEquals => write!(f, ">="),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::Newline => write!(f, "<newline>"),
            Self::Eof => write!(f, "<eof>"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind, position }
    }
}

/// True for code points in the two Armenian blocks Soorj restricts identifiers to:
/// the main Armenian block and the Armenian ligatures in Alphabetic Presentation Forms.
fn is_armenian_letter(c: char) -> bool {
    matches!(c as u32, 0x0530..=0x058F | 0xFB13..=0xFB17)
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Extra characters, beyond Armenian letters/digits/whitespace, allowed inside string literals.
fn is_allowed_string_char(c: char) -> bool {
    is_armenian_letter(c)
        || is_digit(c)
        || c.is_whitespace()
        || matches!(c, '.' | ',' | '!' | '?' | ':' | ';' | '-' | '(' | ')' | '[' | ']' | '{' | '}' | '"' | '\'' | '/' | '\\')
        || matches!(c as u32, 0x055A..=0x055F | 0x0589..=0x058A)
}

fn keyword_kind(word: &str) -> Option<TokenKind> {
    Some(match word {
        "եթե" => TokenKind::If,
        "հպ" => TokenKind::Else,
        "մինչև" => TokenKind::While,
        "գործ" => TokenKind::Function,
        "տուր" => TokenKind::Return,
        "այո" => TokenKind::True,
        "ոչ" => TokenKind::False,
        "հեչ" => TokenKind::Null,
        "և" => TokenKind::And,
        "կամ" => TokenKind::Or,
        "չի" => TokenKind::Not,
        _ => return None,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub message: String,
    pub position: Position,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Lexical error at {}: {}", self.position, self.message)
    }
}

impl std::error::Error for LexError {}

/// Scans an entire source string up front into a token vector; the parser consumes
/// it eagerly rather than pulling tokens lazily.
pub struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: u32,
    column: u32,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn pos(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let is_eof = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            match self.peek() {
                None => return Ok(Token::new(TokenKind::Eof, self.pos())),
                Some(' ') | Some('\t') | Some('\r') => {
                    self.advance();
                    continue;
                }
                Some('\n') => {
                    let start = self.pos();
                    self.advance();
                    return Ok(Token::new(TokenKind::Newline, start));
                }
                Some('#') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                    continue;
                }
                Some(c) if is_digit(c) => return self.read_number(),
                Some('"') | Some('\'') => return self.read_string(),
                Some(c) if is_armenian_letter(c) => return self.read_identifier(),
                Some(_) => return self.read_operator(),
            }
        }
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.pos();
        let mut lexeme = String::new();
        let mut seen_dot = false;
        while let Some(c) = self.peek() {
            if is_digit(c) {
                lexeme.push(c);
                self.advance();
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                lexeme.push(c);
                self.advance();
            } else {
                break;
            }
        }
        let value: f64 = lexeme.parse().map_err(|_| LexError {
            message: format!("malformed number literal '{}'", lexeme),
            position: start,
        })?;
        Ok(Token::new(TokenKind::Number(value), start))
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let start = self.pos();
        let quote = self.advance().unwrap();
        let mut value = String::new();
        loop {
            match self.peek() {
                None => break, // unterminated strings are accepted silently
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.advance() {
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        Some('r') => value.push('\r'),
                        Some('\\') => value.push('\\'),
                        Some(c) if c == quote => value.push(c),
                        Some(c) => value.push(c),
                        None => break,
                    }
                }
                Some(c) => {
                    if !is_allowed_string_char(c) {
                        return Err(LexError {
                            message: format!("invalid character '{}' in string literal", c),
                            position: self.pos(),
                        });
                    }
                    value.push(c);
                    self.advance();
                }
            }
        }
        Ok(Token::new(TokenKind::Str(value), start))
    }

    fn read_identifier(&mut self) -> Result<Token, LexError> {
        let start = self.pos();
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if is_armenian_letter(c) {
                word.push(c);
                self.advance();
            } else {
                break;
            }
        }
        let kind = keyword_kind(&word).unwrap_or(TokenKind::Identifier(word));
        Ok(Token::new(kind, start))
    }

    fn read_operator(&mut self) -> Result<Token, LexError> {
        let start = self.pos();
        let c = self.advance().unwrap();
        let kind = match c {
            '=' if self.peek() == Some('=') => {
                self.advance();
                TokenKind::EqualsEquals
            }
            '!' if self.peek() == Some('=') => {
                self.advance();
                TokenKind::NotEquals
            }
            '<' if self.peek() == Some('=') => {
                self.advance();
                TokenKind::LessEquals
            }
            '>' if self.peek() == Some('=') => {
                self.advance();
                TokenKind::GreaterEquals
            }
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            '=' => TokenKind::Assign,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            _ => {
                return Err(LexError {
                    message: format!("unexpected character '{}'", c),
                    position: start,
                })
            }
        };
        Ok(Token::new(kind, start))
    }
}
