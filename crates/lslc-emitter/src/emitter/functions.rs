//! Globals, functions, states, and event handlers.

use lslc_ast::{Node, NodeKind, Type};
use lslc_common::EmitError;

use super::CsEmitter;
use crate::reserved;

impl CsEmitter {
    // =========================================================================
    // Top-level declarations
    // =========================================================================

    /// A global variable becomes a field of the script class.
    pub(super) fn emit_global_variable(
        &mut self,
        node: &Node,
        decl: &Node,
    ) -> Result<(), EmitError> {
        let NodeKind::Declaration { ty, name, init } = &decl.kind else {
            return Err(EmitError::unexpected(
                decl.kind_name(),
                "global variable declaration",
                node.position(),
            ));
        };
        self.write_indent();
        self.emit_declaration(decl, *ty, name, init.as_deref())?;
        self.write(";");
        self.write_line();
        Ok(())
    }

    pub(super) fn emit_declaration(
        &mut self,
        node: &Node,
        ty: Type,
        name: &str,
        init: Option<&Node>,
    ) -> Result<(), EmitError> {
        self.write_node(&format!("{} {}", ty.cs_name(), reserved::escape(name)), node);
        if let Some(init) = init {
            self.write(" = ");
            self.emit_expression(init)?;
        }
        Ok(())
    }

    /// `<returnType> <escapedName>(<params>)` followed by the compound body.
    /// A script function with no declared return type renders `void`.
    pub(super) fn emit_global_function(
        &mut self,
        node: &Node,
        return_ty: Option<Type>,
        name: &str,
        params: &[Node],
        body: &Node,
    ) -> Result<(), EmitError> {
        let ret = return_ty.map_or("void", Type::cs_name);
        self.write_indent();
        self.write_node(&format!("{} {}(", ret, reserved::escape(name)), node);
        self.emit_parameters(params)?;
        self.write(")");
        self.write_line();
        self.emit_compound(body)
    }

    /// A state flattens to one method per handler, named
    /// `<stateName>_event_<handlerName>`, at class scope.
    pub(super) fn emit_state(&mut self, name: &str, handlers: &[Node]) -> Result<(), EmitError> {
        for handler in handlers {
            let NodeKind::EventHandler {
                name: handler_name,
                params,
                body,
            } = &handler.kind
            else {
                return Err(EmitError::unexpected(
                    handler.kind_name(),
                    "state event handler",
                    handler.position(),
                ));
            };
            self.write_indent();
            self.write_node(
                &format!("public void {name}_event_{handler_name}("),
                handler,
            );
            self.emit_parameters(params)?;
            self.write(")");
            self.write_line();
            self.emit_compound(body)?;
        }
        Ok(())
    }

    fn emit_parameters(&mut self, params: &[Node]) -> Result<(), EmitError> {
        let mut first = true;
        for param in params {
            let NodeKind::Parameter { ty, name } = &param.kind else {
                return Err(EmitError::unexpected(
                    param.kind_name(),
                    "parameter declaration",
                    param.position(),
                ));
            };
            if !first {
                self.write(", ");
            }
            first = false;
            self.write_node(&format!("{} {}", ty.cs_name(), reserved::escape(name)), param);
        }
        Ok(())
    }
}
