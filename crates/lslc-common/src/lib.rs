//! Common types and utilities for the lslc LSL-to-C# compiler.
//!
//! This crate provides the foundational types shared by the AST and emitter
//! crates:
//! - Source locations (`SourcePosition`) and the generated-to-source
//!   `PositionMap` built during emission
//! - The ordered, de-duplicated `WarningSink` for advisory diagnostics
//! - `EmitError`, the fatal internal-error type for contract violations

// Position types and the generated→source position map
pub mod position;
pub use position::{PositionMap, SourcePosition};

// Warning collection and the emit error type
pub mod diagnostics;
pub use diagnostics::{EmitError, WarningSink};
