//! AST node model for the lslc LSL-to-C# compiler.
//!
//! The parser (an external collaborator) produces this tree; the emitter
//! consumes it read-only. Node kinds form a closed sum type, so dispatch in
//! the emitter is an exhaustive match rather than a subclass-ordered chain
//! of type tests.

pub mod node;
pub use node::{Node, NodeKind};

pub mod types;
pub use types::{AssignOp, BinOp, StepOp, Type, UnaryOp};
