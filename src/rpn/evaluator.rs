
use super::token::{tokens, BinOp, Token, TokenError};
use crate::alloc::AllocError;
use crate::stack::Stack;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-expression failure. These are recoverable: they invalidate the
/// current expression only, never the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ExprError {
  /// An operator arrived with fewer than two operands available.
  #[error("not enough operands")]
  NotEnoughOperands,
  /// The terminator arrived with more than one value still on the
  /// stack.
  #[error("too many operands")]
  TooManyOperands,
  /// Division or modulo with a zero right operand.
  #[error("division by zero")]
  DivisionByZero,
}

/// The structured result reported for one completed expression.
pub type ExprOutcome = Result<i64, ExprError>;

/// Failure that aborts a whole [`evaluate`] run, as opposed to the
/// per-expression [`ExprError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RunError {
  #[error("{0}")]
  Token(#[from] TokenError),
  #[error("{0}")]
  Alloc(#[from] AllocError),
}

/// Reading state for the current expression. Once invalid, an
/// expression stays invalid (keeping the error that broke it) until
/// its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
  Valid,
  Invalid(ExprError),
}

/// Evaluates one postfix expression at a time over a private working
/// stack.
///
/// Feed tokens with [`Evaluator::feed`]. Numbers are pushed;
/// operators pop the right operand first and the left operand second,
/// then push the computed value. An operator without two operands
/// available, or a division by zero, marks the expression invalid;
/// the remaining tokens of that expression are ignored. The
/// terminator reports the expression's outcome, drains the stack, and
/// resets for the next expression.
#[derive(Debug, Clone)]
pub struct Evaluator {
  stack: Stack<i64>,
  state: State,
}

impl Evaluator {
  pub fn new() -> Self {
    Self {
      stack: Stack::new(),
      state: State::Valid,
    }
  }

  /// Consumes one token. Returns `Ok(Some(outcome))` when `token` is
  /// a terminator completing a non-empty expression; otherwise
  /// `Ok(None)`.
  ///
  /// Allocation failure while pushing is fatal to the run and is
  /// surfaced as the `Err` case; the per-expression protocol does not
  /// model it.
  pub fn feed(&mut self, token: Token) -> Result<Option<ExprOutcome>, AllocError> {
    match token {
      Token::Number(n) => {
        if self.state == State::Valid {
          self.stack.push(n)?;
        }
        Ok(None)
      }
      Token::Operator(op) => {
        if self.state == State::Valid {
          self.apply_operator(op)?;
        }
        Ok(None)
      }
      Token::Terminator => Ok(self.finish_expression()),
    }
  }

  /// Pops the right then the left operand, computes, and pushes the
  /// result. The two pops are atomic: with fewer than two operands on
  /// the stack, nothing is popped and the expression becomes invalid.
  fn apply_operator(&mut self, op: BinOp) -> Result<(), AllocError> {
    match self.stack.pop_several(2) {
      Ok(operands) => {
        let (op1, op2) = (operands[0], operands[1]);
        match apply(op, op1, op2) {
          Ok(result) => self.stack.push(result)?,
          Err(error) => self.state = State::Invalid(error),
        }
      }
      Err(_) => {
        self.state = State::Invalid(ExprError::NotEnoughOperands);
      }
    }
    Ok(())
  }

  /// Handles the terminator: reports the outcome of the expression
  /// just read, then drains the stack and resets the state for the
  /// next one.
  fn finish_expression(&mut self) -> Option<ExprOutcome> {
    let outcome = match self.state {
      State::Invalid(error) => Some(Err(error)),
      State::Valid => {
        match self.stack.len() {
          // A terminator with nothing before it reports nothing.
          0 => None,
          1 => Some(Ok(self.stack.pop().unwrap())), // unwrap: exactly one element
          _ => Some(Err(ExprError::TooManyOperands)),
        }
      }
    };
    self.stack.pop_all();
    self.state = State::Valid;
    outcome
  }

  /// Number of values currently on the working stack.
  pub fn depth(&self) -> usize {
    self.stack.len()
  }

  /// True if the current expression has already failed and is waiting
  /// for its terminator.
  pub fn is_invalid(&self) -> bool {
    matches!(self.state, State::Invalid(_))
  }
}

impl Default for Evaluator {
  fn default() -> Self {
    Self::new()
  }
}

fn apply(op: BinOp, op1: i64, op2: i64) -> Result<i64, ExprError> {
  match op {
    BinOp::Add => Ok(op1 + op2),
    BinOp::Sub => Ok(op1 - op2),
    BinOp::Mul => Ok(op1 * op2),
    BinOp::Div => {
      if op2 == 0 {
        Err(ExprError::DivisionByZero)
      } else {
        Ok(op1 / op2)
      }
    }
    BinOp::Rem => {
      if op2 == 0 {
        Err(ExprError::DivisionByZero)
      } else {
        Ok(op1 % op2)
      }
    }
  }
}

/// Tokenizes `input` and feeds every token through a fresh
/// [`Evaluator`], collecting one outcome per terminated expression.
/// Tokens after the final terminator are consumed but report nothing.
pub fn evaluate(input: &str) -> Result<Vec<ExprOutcome>, RunError> {
  let mut evaluator = Evaluator::new();
  let mut outcomes = Vec::new();
  for token in tokens(input) {
    if let Some(outcome) = evaluator.feed(token?)? {
      outcomes.push(outcome);
    }
  }
  Ok(outcomes)
}
