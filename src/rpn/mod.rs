
//! Postfix (RPN) expression evaluation: a token model, a
//! whitespace-separated token scanner, and a per-expression evaluator
//! driving a [`Stack`](crate::stack::Stack).

mod evaluator;
mod token;

pub use evaluator::{evaluate, Evaluator, ExprError, ExprOutcome, RunError};
pub use token::{tokens, BinOp, Token, TokenError, Tokens};
