//! C# reserved words and the verbatim-identifier escape.
//!
//! A script identifier that collides with a C# keyword cannot be emitted
//! verbatim. Prefixing `@` makes it a C# verbatim identifier: `@while` is a
//! legal identifier that binds under the name `while`, so the same escape
//! applied at the declaration and at every use site preserves name binding.
//! `@` never appears in script identifiers, so the escape cannot itself
//! collide.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

static RESERVED: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
        "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
        "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
        "void", "volatile", "while",
    ]
    .into_iter()
    .collect()
});

/// Whether `name` collides with a C# keyword.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(name)
}

/// Escape `name` if it is reserved; otherwise return it unchanged.
#[must_use]
pub fn escape(name: &str) -> Cow<'_, str> {
    if is_reserved(name) {
        Cow::Owned(format!("@{name}"))
    } else {
        Cow::Borrowed(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_reserved() {
        assert!(is_reserved("while"));
        assert!(is_reserved("event"));
        assert!(is_reserved("string"));
        assert!(!is_reserved("llSay"));
        assert!(!is_reserved("touched"));
    }

    #[test]
    fn escape_is_deterministic_and_not_reserved() {
        assert_eq!(escape("default"), "@default");
        assert_eq!(escape("default"), "@default");
        assert!(!is_reserved(&escape("default")));
    }

    #[test]
    fn non_reserved_names_pass_through_unowned() {
        assert!(matches!(escape("counter"), Cow::Borrowed("counter")));
    }
}
