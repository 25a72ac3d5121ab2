//! LSL-to-C# emitter for the lslc compiler.
//!
//! This crate is the code-generation backend: it walks a parsed script AST
//! and produces C# source text, a generated→source position map, and a list
//! of advisory warnings. The parser that builds the AST and the C# toolchain
//! that compiles the output are external collaborators.

pub mod emitter;
pub use emitter::{CsEmitter, EmitOptions, Emitted, generate};

pub mod multi_assign;
pub mod reserved;
pub mod source_writer;
