//! LSL-to-C# code generator.
//!
//! A single-pass recursive descent over the AST that produces the C# program
//! unit text, the generated→source position map, and the advisory warning
//! list. One `CsEmitter` serves exactly one `generate` call; instances hold
//! no cross-call state, so concurrent compilations each own their own
//! emitter.
//!
//! ```text
//! default { state_entry() { llSay(0, "hi"); } }
//! ```
//!
//! becomes
//!
//! ```text
//! namespace SecondLife
//! {
//!     public class Script : ScriptBaseClass
//!     {
//!         public void default_event_state_entry()
//!         {
//!             llSay(new LSL_Types.LSLInteger(0), new LSL_Types.LSLString("hi"));
//!         }
//!     }
//! }
//! ```

mod expressions;
mod functions;
mod literals;
mod statements;

use lslc_ast::{Node, NodeKind};
use lslc_common::{EmitError, PositionMap, WarningSink};

use crate::multi_assign;
use crate::source_writer::SourceWriter;

/// The three artifacts of one generation run.
#[derive(Clone, Debug)]
pub struct Emitted {
    pub text: String,
    pub position_map: PositionMap,
    pub warnings: Vec<String>,
}

/// Names used in the fixed program-unit scaffolding.
#[derive(Clone, Debug)]
pub struct EmitOptions {
    pub namespace: String,
    pub class_name: String,
    /// Base class supplying the script API surface (`llSay`, `NoOp`, ...).
    /// Part of the external runtime wrapper library.
    pub base_class: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            namespace: "SecondLife".to_string(),
            class_name: "Script".to_string(),
            base_class: "ScriptBaseClass".to_string(),
        }
    }
}

/// Single-use LSL-to-C# emitter.
#[derive(Debug)]
pub struct CsEmitter {
    writer: SourceWriter,
    warnings: WarningSink,
    options: EmitOptions,
}

impl Default for CsEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsEmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EmitOptions::default())
    }

    #[must_use]
    pub fn with_options(options: EmitOptions) -> Self {
        Self {
            writer: SourceWriter::new(),
            warnings: WarningSink::new(),
            options,
        }
    }

    /// Generate the C# program unit for a parsed script.
    ///
    /// The input must be a `Script` root as produced by the parser; a tree
    /// that places a node in a role the parser can never produce is a
    /// contract violation and yields an `EmitError` with no partial text.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn generate(mut self, script: &Node) -> Result<Emitted, EmitError> {
        let NodeKind::Script { decls } = &script.kind else {
            return Err(EmitError::unexpected(
                script.kind_name(),
                "script root",
                script.position(),
            ));
        };

        let namespace = self.options.namespace.clone();
        let class_name = self.options.class_name.clone();
        let base_class = self.options.base_class.clone();

        // Fixed preamble: open the namespace and the script class.
        self.write("namespace ");
        self.write(&namespace);
        self.write_line();
        self.write("{");
        self.write_line();
        self.increase_indent();
        self.write_indent();
        self.write("public class ");
        self.write(&class_name);
        self.write(" : ");
        self.write(&base_class);
        self.write_line();
        self.write_indent();
        self.write("{");
        self.write_line();
        self.increase_indent();

        for decl in decls {
            match &decl.kind {
                NodeKind::GlobalVariable { decl: declaration } => {
                    self.emit_global_variable(decl, declaration)?;
                }
                NodeKind::GlobalFunction {
                    return_ty,
                    name,
                    params,
                    body,
                } => self.emit_global_function(decl, *return_ty, name, params, body)?,
                NodeKind::State { name, handlers } => self.emit_state(name, handlers)?,
                _ => {
                    return Err(EmitError::unexpected(
                        decl.kind_name(),
                        "top-level declaration",
                        decl.position(),
                    ));
                }
            }
        }

        // Matching epilogue: close the class, then the namespace.
        self.decrease_indent();
        self.write_indent();
        self.write("}");
        self.write_line();
        self.decrease_indent();
        self.write("}");
        self.write_line();

        debug_assert_eq!(self.writer.indent_depth(), 0);

        let (text, position_map) = self.writer.finish();
        Ok(Emitted {
            text,
            position_map,
            warnings: self.warnings.into_vec(),
        })
    }

    // =========================================================================
    // Statement-level dispatch
    // =========================================================================

    /// Emit one node in statement position (a compound's child, a loop body,
    /// an if branch).
    pub(super) fn emit_statement_node(&mut self, node: &Node) -> Result<(), EmitError> {
        match &node.kind {
            NodeKind::Statement { expr } => self.emit_statement(node, expr.as_deref()),
            NodeKind::Compound { stmts } => self.emit_compound_stmts(stmts),
            NodeKind::If {
                cond,
                then_branch,
                else_branch,
            } => self.emit_if(node, cond, then_branch, else_branch.as_deref()),
            NodeKind::While { cond, body } => self.emit_while(node, cond, body),
            NodeKind::DoWhile { body, cond } => self.emit_do_while(node, body, cond),
            NodeKind::For {
                init,
                cond,
                step,
                body,
            } => self.emit_for(node, init, cond.as_deref(), step, body),
            NodeKind::Return { value } => self.emit_return(node, value.as_deref()),
            NodeKind::Label { name } => self.emit_label(node, name),
            NodeKind::Jump { target } => self.emit_jump(node, target),
            NodeKind::StateChange { target } => self.emit_state_change(node, target),
            _ => Err(EmitError::unexpected(
                node.kind_name(),
                "statement",
                node.position(),
            )),
        }
    }

    /// Emit a compound body node, which must actually be a `Compound`.
    pub(super) fn emit_compound(&mut self, node: &Node) -> Result<(), EmitError> {
        let NodeKind::Compound { stmts } = &node.kind else {
            return Err(EmitError::unexpected(
                node.kind_name(),
                "compound statement",
                node.position(),
            ));
        };
        self.emit_compound_stmts(stmts)
    }

    fn emit_compound_stmts(&mut self, stmts: &[Node]) -> Result<(), EmitError> {
        self.write_indent();
        self.write("{");
        self.write_line();
        self.increase_indent();
        for stmt in stmts {
            self.emit_statement_node(stmt)?;
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
        self.write_line();
        Ok(())
    }

    fn emit_statement(&mut self, node: &Node, expr: Option<&Node>) -> Result<(), EmitError> {
        multi_assign::audit_statement(node, &mut self.warnings);

        let Some(expr) = expr else {
            // The empty statement, a lone `;`.
            self.write_indent();
            self.write(";");
            self.write_line();
            return Ok(());
        };

        // A bare identifier is a legal no-op statement in LSL but an illegal
        // expression-statement in C#; drop it.
        if matches!(expr.kind, NodeKind::Ident { .. }) {
            return Ok(());
        }

        self.write_indent();
        match &expr.kind {
            NodeKind::Declaration { ty, name, init } => {
                self.emit_declaration(expr, *ty, name, init.as_deref())?;
            }
            _ => self.emit_expression(expr)?,
        }
        self.write(";");
        self.write_line();
        Ok(())
    }

    /// Record an advisory warning; the sink de-duplicates repeats.
    pub(super) fn warn(&mut self, message: String) {
        tracing::trace!(warning = %message, "advisory warning");
        self.warnings.add(message);
    }

    // =========================================================================
    // Output helpers (delegate to SourceWriter)
    // =========================================================================

    pub(super) fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    /// Write a token that originated from `node`, recording a position-map
    /// entry at the token's first generated character.
    pub(super) fn write_node(&mut self, text: &str, node: &Node) {
        self.writer.write_node(text, node.position());
    }

    pub(super) fn write_line(&mut self) {
        self.writer.write_line();
    }

    pub(super) fn write_indent(&mut self) {
        self.writer.write_indent();
    }

    pub(super) fn increase_indent(&mut self) {
        self.writer.increase_indent();
    }

    pub(super) fn decrease_indent(&mut self) {
        self.writer.decrease_indent();
    }
}

/// Convenience entry point: a fresh emitter with default options.
pub fn generate(script: &Node) -> Result<Emitted, EmitError> {
    CsEmitter::new().generate(script)
}
