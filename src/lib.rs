
pub mod alloc;
mod buffer;
pub mod node;
pub mod ordered;
pub mod queue;
pub mod rpn;
pub mod seq;
pub mod stack;
