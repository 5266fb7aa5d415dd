//! The closed type set of L1 (`spec.md` §3).

use std::fmt;

/// `{Int, Bool, String, Void}`. `Void` is not a value type: a variable of
/// type `Void` is a checker error, and it only ever appears as a function
/// return type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Int,
    Bool,
    Str,
    Void,
}

impl Type {
    #[must_use]
    pub fn is_value_type(self) -> bool {
        !matches!(self, Type::Void)
    }

    /// The LLVM machine type used for a storage slot / SSA value of this type.
    #[must_use]
    pub fn llvm_name(self) -> &'static str {
        match self {
            Type::Int => "i32",
            Type::Bool => "i1",
            Type::Str => "i8*",
            Type::Void => "void",
        }
    }

    /// Default value used by `decl` when no initializer is given
    /// (`spec.md` §4.E): `Int`/`Bool` → `0`, `String` → the empty literal.
    #[must_use]
    pub fn default_literal(self) -> &'static str {
        match self {
            Type::Int => "0",
            Type::Bool => "0",
            Type::Str => "",
            Type::Void => unreachable!("Void has no default value"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Bool => write!(f, "boolean"),
            Type::Str => write!(f, "string"),
            Type::Void => write!(f, "void"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn void_is_not_a_value_type() {
        assert!(!Type::Void.is_value_type());
        assert!(Type::Int.is_value_type());
    }

    #[test]
    fn llvm_names_match_spec() {
        assert_eq!(Type::Int.llvm_name(), "i32");
        assert_eq!(Type::Bool.llvm_name(), "i1");
        assert_eq!(Type::Str.llvm_name(), "i8*");
        assert_eq!(Type::Void.llvm_name(), "void");
    }
}
