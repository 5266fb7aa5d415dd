//! Whole-module text assembly (`spec.md` §4.C, §4.G).
//!
//! Ordering is fixed: builtin declares, then string pool globals, then
//! function bodies, each group separated by a blank line, with exactly one
//! trailing newline on the whole module (§4.G "Ensures exactly one
//! trailing newline").

use crate::builtins;
use crate::session::Session;

pub struct EmittedFunction {
    pub ret_type: String,
    pub name: String,
    /// `(llvm_type, register)` pairs, in declaration order.
    pub params: Vec<(String, String)>,
    pub body: Vec<String>,
}

/// Wraps a lowered body in `define ... { ... }`.
#[must_use]
pub fn assemble_function(f: &EmittedFunction) -> String {
    let params = f
        .params
        .iter()
        .map(|(ty, reg)| format!("{ty} {reg}"))
        .collect::<Vec<_>>()
        .join(", ");
    let mut lines = vec![format!("define {} @{}({}) {{", f.ret_type, f.name, params)];
    lines.extend(f.body.iter().cloned());
    lines.push("}".to_string());
    lines.join("\n")
}

/// Assembles the full module text.
#[must_use]
pub fn assemble_module(session: &Session, functions: &[EmittedFunction]) -> String {
    let mut sections: Vec<String> = Vec::new();

    let declares = builtins::declare_lines(session.used_builtins());
    if !declares.is_empty() {
        sections.push(declares.join("\n"));
    }

    let globals = session.string_pool.global_defs();
    if !globals.is_empty() {
        sections.push(globals.join("\n"));
    }

    for f in functions {
        sections.push(assemble_function(f));
    }

    let mut text = sections.join("\n\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_fn(body: Vec<&str>) -> EmittedFunction {
        EmittedFunction {
            ret_type: "i32".to_string(),
            name: "main".to_string(),
            params: Vec::new(),
            body: body.into_iter().map(str::to_string).collect(),
        }
    }

    #[test]
    fn module_has_exactly_one_trailing_newline() {
        let session = Session::new();
        let text = assemble_module(&session, &[main_fn(vec!["    ret i32 0"])]);
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn declares_come_before_globals_come_before_functions() {
        let mut session = Session::new();
        session.mark_used("printInt");
        session.string_pool.intern(b"x");
        let text = assemble_module(&session, &[main_fn(vec!["    ret i32 0"])]);
        let declare_pos = text.find("declare void @printInt").unwrap();
        let global_pos = text.find("@.str0").unwrap();
        let define_pos = text.find("define i32 @main").unwrap();
        assert!(declare_pos < global_pos);
        assert!(global_pos < define_pos);
    }

    #[test]
    fn module_with_no_builtins_or_strings_omits_those_sections() {
        let session = Session::new();
        let text = assemble_module(&session, &[main_fn(vec!["    ret i32 0"])]);
        assert!(!text.contains("declare"));
        assert!(!text.contains("internal constant"));
    }

    #[test]
    fn function_wraps_body_in_define_braces() {
        let f = EmittedFunction {
            ret_type: "void".to_string(),
            name: "f".to_string(),
            params: vec![("i32".to_string(), "%x".to_string())],
            body: vec!["    ret void".to_string()],
        };
        let text = assemble_function(&f);
        assert_eq!(text, "define void @f(i32 %x) {\n    ret void\n}");
    }
}
