//! Script types and operator kinds.

use serde::{Deserialize, Serialize};

/// The LSL value types, plus `Void` for functions without a declared return
/// type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Integer,
    Float,
    String,
    Key,
    Vector,
    Rotation,
    List,
    Void,
}

impl Type {
    /// The C# rendering of this type, against the external `LSL_Types`
    /// runtime wrapper library.
    #[must_use]
    pub const fn cs_name(self) -> &'static str {
        match self {
            Type::Integer => "LSL_Types.LSLInteger",
            Type::Float => "LSL_Types.LSLFloat",
            // `key` has no distinct runtime representation; it rides on the
            // string wrapper.
            Type::String | Type::Key => "LSL_Types.LSLString",
            Type::Vector => "LSL_Types.Vector3",
            Type::Rotation => "LSL_Types.Quaternion",
            Type::List => "LSL_Types.list",
            Type::Void => "void",
        }
    }

    /// The spelling of this type in script source.
    #[must_use]
    pub const fn script_name(self) -> &'static str {
        match self {
            Type::Integer => "integer",
            Type::Float => "float",
            Type::String => "string",
            Type::Key => "key",
            Type::Vector => "vector",
            Type::Rotation => "rotation",
            Type::List => "list",
            Type::Void => "void",
        }
    }
}

/// Binary expression operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

impl BinOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
            BinOp::BitAnd => "&",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
        }
    }

    /// Whether this is `&&` or `||`, whose operands need an explicit boolean
    /// coercion in the generated C#.
    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(self, BinOp::And | BinOp::Or)
    }
}

/// Unary expression operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Neg,
    Not,
    BitNot,
}

impl UnaryOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
        }
    }
}

/// Assignment operators, including the compound forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
}

impl AssignOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
            AssignOp::MulAssign => "*=",
            AssignOp::DivAssign => "/=",
            AssignOp::ModAssign => "%=",
        }
    }
}

/// Increment/decrement operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOp {
    Increment,
    Decrement,
}

impl StepOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            StepOp::Increment => "++",
            StepOp::Decrement => "--",
        }
    }
}
