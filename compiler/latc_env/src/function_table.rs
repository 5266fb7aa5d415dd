//! Function signature table (`spec.md` §3 "Function signature", §4.B).
//!
//! Populated in a first pass over all top-level definitions before any body
//! is lowered, so mutual recursion and forward references work
//! (`spec.md` §4.E "Pass 1 — signature collection").

use latc_diagnostic::Diagnostic;
use latc_ir::{Span, Type};
use rustc_hash::FxHashMap;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    pub name: String,
    pub ret_type: Type,
    pub params: Vec<Type>,
}

impl Signature {
    #[must_use]
    pub fn new(name: impl Into<String>, ret_type: Type, params: Vec<Type>) -> Self {
        Signature {
            name: name.into(),
            ret_type,
            params,
        }
    }
}

pub struct FunctionTable {
    sigs: FxHashMap<String, Signature>,
}

impl FunctionTable {
    /// Builds a table pre-populated with the runtime builtins
    /// (`printInt`, `printString`, `readInt`, `readString`, `error`,
    /// `strcmp`, `strconcat` — `spec.md` §6 "Runtime ABI").
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut sigs = FxHashMap::default();
        for sig in builtin_signatures() {
            sigs.insert(sig.name.clone(), sig);
        }
        FunctionTable { sigs }
    }

    /// Declares a user function. Fails with *duplicate function* if the name
    /// collides with a builtin or another user function. Additionally
    /// enforces that a function named `main` is `() -> Int`
    /// (`spec.md` §3 invariant, §4.B).
    pub fn declare_function(&mut self, sig: Signature, span: Span) -> Result<(), Diagnostic> {
        if sig.name == "main" && (sig.ret_type != Type::Int || !sig.params.is_empty()) {
            return Err(Diagnostic::invalid_main_signature(span));
        }
        if self.sigs.contains_key(&sig.name) {
            return Err(Diagnostic::duplicate_function(&sig.name, span));
        }
        self.sigs.insert(sig.name.clone(), sig);
        Ok(())
    }

    pub fn lookup(&self, name: &str, span: Span) -> Result<&Signature, Diagnostic> {
        self.sigs.get(name).ok_or_else(|| Diagnostic::undeclared(name, span))
    }

    #[must_use]
    pub fn has_main(&self) -> bool {
        self.sigs
            .get("main")
            .is_some_and(|s| s.ret_type == Type::Int && s.params.is_empty())
    }

    #[must_use]
    pub fn is_builtin(&self, name: &str) -> bool {
        builtin_signatures().iter().any(|s| s.name == name)
    }
}

impl Default for FunctionTable {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// `spec.md` §6 "Runtime ABI": the fixed external runtime surface.
#[must_use]
pub fn builtin_signatures() -> Vec<Signature> {
    vec![
        Signature::new("printInt", Type::Void, vec![Type::Int]),
        Signature::new("printString", Type::Void, vec![Type::Str]),
        Signature::new("error", Type::Void, vec![]),
        Signature::new("readInt", Type::Int, vec![]),
        Signature::new("readString", Type::Str, vec![]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_preregistered() {
        let table = FunctionTable::with_builtins();
        let sig = table.lookup("printInt", Span::DUMMY).unwrap();
        assert_eq!(sig.params, vec![Type::Int]);
    }

    #[test]
    fn duplicate_function_name_is_rejected() {
        let mut table = FunctionTable::with_builtins();
        table
            .declare_function(Signature::new("f", Type::Int, vec![]), Span::DUMMY)
            .unwrap();
        let err = table
            .declare_function(Signature::new("f", Type::Int, vec![]), Span::DUMMY)
            .unwrap_err();
        assert_eq!(err.code, latc_diagnostic::ErrorCode::E2003);
    }

    #[test]
    fn colliding_with_a_builtin_is_rejected() {
        let mut table = FunctionTable::with_builtins();
        let err = table
            .declare_function(Signature::new("printInt", Type::Void, vec![Type::Int]), Span::DUMMY)
            .unwrap_err();
        assert_eq!(err.code, latc_diagnostic::ErrorCode::E2003);
    }

    #[test]
    fn main_must_return_int_and_take_no_args() {
        let mut table = FunctionTable::with_builtins();
        let err = table
            .declare_function(Signature::new("main", Type::Void, vec![]), Span::DUMMY)
            .unwrap_err();
        assert_eq!(err.code, latc_diagnostic::ErrorCode::E2010);
    }

    #[test]
    fn well_formed_main_is_accepted_and_detected() {
        let mut table = FunctionTable::with_builtins();
        table
            .declare_function(Signature::new("main", Type::Int, vec![]), Span::DUMMY)
            .unwrap();
        assert!(table.has_main());
    }
}
