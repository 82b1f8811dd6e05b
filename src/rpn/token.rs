
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// One unit of evaluator input. Tokens are classified by their first
/// character: an ASCII digit begins a [`Token::Number`], one of
/// `+ - * / %` begins a [`Token::Operator`], and the one-character
/// token `;` is the [`Token::Terminator`] ending an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
  Number(i64),
  Operator(BinOp),
  Terminator,
}

/// The five binary operators the evaluator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
  Add,
  Sub,
  Mul,
  Div,
  Rem,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TokenError {
  #[error("Unrecognized token `{text}`.")]
  UnknownToken {
    text: String,
  },
  #[error("Malformed number `{text}`.")]
  InvalidNumber {
    text: String,
    #[source]
    source: ParseIntError,
  },
}

impl BinOp {
  /// The operator beginning with `c`, if any.
  pub fn from_char(c: char) -> Option<Self> {
    match c {
      '+' => Some(Self::Add),
      '-' => Some(Self::Sub),
      '*' => Some(Self::Mul),
      '/' => Some(Self::Div),
      '%' => Some(Self::Rem),
      _ => None,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Add => "+",
      Self::Sub => "-",
      Self::Mul => "*",
      Self::Div => "/",
      Self::Rem => "%",
    }
  }
}

impl Display for BinOp {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Token {
  type Err = TokenError;

  /// Classifies one whitespace-free token. A token beginning with a
  /// digit must parse in full as a signed decimal integer; a token
  /// beginning with an operator character is that operator regardless
  /// of what follows. Anything else is undefined input and fails
  /// loudly.
  fn from_str(text: &str) -> Result<Self, TokenError> {
    if text == ";" {
      return Ok(Token::Terminator);
    }
    let first = text.chars().next().ok_or_else(|| TokenError::UnknownToken { text: String::new() })?;
    if first.is_ascii_digit() {
      text.parse::<i64>()
        .map(Token::Number)
        .map_err(|source| TokenError::InvalidNumber { text: text.to_owned(), source })
    } else if let Some(op) = BinOp::from_char(first) {
      Ok(Token::Operator(op))
    } else {
      Err(TokenError::UnknownToken { text: text.to_owned() })
    }
  }
}

static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+").unwrap());
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+").unwrap());

/// Scanner over a whitespace-separated token stream. Produced by
/// [`tokens`]; each item is one classified [`Token`] or the error for
/// an undefined token.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
  input: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
  type Item = Result<Token, TokenError>;

  fn next(&mut self) -> Option<Self::Item> {
    if let Some(m) = SPACES_RE.find(self.input) {
      self.input = &self.input[m.end()..];
    }
    let m = WORD_RE.find(self.input)?;
    self.input = &self.input[m.end()..];
    Some(m.as_str().parse())
  }
}

/// Scans `input` as a whitespace-separated token stream.
pub fn tokens(input: &str) -> Tokens<'_> {
  Tokens { input }
}
