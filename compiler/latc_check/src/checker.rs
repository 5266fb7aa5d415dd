//! Two-pass L1 checker+lowerer entry point (`spec.md` §4.E).
//!
//! Pass 1 collects every function signature (enabling forward references
//! and mutual recursion); pass 2 lowers each function body against the
//! now-complete table.

use latc_diagnostic::Diagnostic;
use latc_env::{Binding, Environment, FunctionTable, Signature};
use latc_ir::ast::l1::{Program, TopDef};
use latc_ir::{Spanned, Type};
use latc_llvm::{assemble_module, EmittedFunction, FunctionEmitter, Session};

use crate::stmt::lower_block;

/// Runs both passes and assembles the final LLVM module text.
pub fn check_and_lower(program: &Program) -> Result<String, Vec<Diagnostic>> {
    let func_table = collect_signatures(program)?;
    if !func_table.has_main() {
        return Err(vec![Diagnostic::missing_main(program.span)]);
    }

    let mut session = Session::new();
    let mut functions = Vec::new();
    for def in &program.defs {
        if let TopDef::Function(f) = def {
            let emitted = lower_function(f, &func_table, &mut session).map_err(|e| vec![e])?;
            functions.push(emitted);
        }
    }
    Ok(assemble_module(&session, &functions))
}

fn collect_signatures(program: &Program) -> Result<FunctionTable, Vec<Diagnostic>> {
    let mut table = FunctionTable::with_builtins();
    let mut errors = Vec::new();
    for def in &program.defs {
        match def {
            TopDef::Function(f) => {
                let sig = Signature::new(
                    f.name.clone(),
                    f.ret_type,
                    f.params.iter().map(|p| p.ty).collect(),
                );
                if let Err(e) = table.declare_function(sig, f.span) {
                    errors.push(e);
                }
            }
            TopDef::ClassDef { span, .. } => {
                errors.push(Diagnostic::extension_not_implemented(*span));
            }
        }
    }
    if errors.is_empty() {
        Ok(table)
    } else {
        Err(errors)
    }
}

fn lower_function(
    f: &latc_ir::ast::l1::FunctionDef,
    func_table: &FunctionTable,
    session: &mut Session,
) -> Result<EmittedFunction, Diagnostic> {
    let mut emitter = FunctionEmitter::new(session);
    let mut env: Environment<String> = Environment::new();
    let mut llvm_params = Vec::with_capacity(f.params.len());

    // `spec.md` §4.E: "its first line is `entry:`".
    emitter.emit_label("entry");

    for p in &f.params {
        if p.ty == Type::Void {
            return Err(Diagnostic::void_variable(&p.name, p.span));
        }
        let llvm = p.ty.llvm_name();
        let incoming = format!("%{}", p.name);
        let ptr = emitter.new_reg();
        emitter.emit(format!("{ptr} = alloca {llvm}"));
        emitter.emit(format!("store {llvm} {incoming}, {llvm}* {ptr}"));
        env.declare(&p.name, Binding::new(p.ty, ptr), p.span)?;
        llvm_params.push((llvm.to_string(), incoming));
    }

    let guaranteed = lower_block(&f.body, &mut env, &mut emitter, func_table, f.ret_type)?;
    if guaranteed.is_none() {
        if f.ret_type == Type::Void {
            emitter.emit("ret void");
        } else {
            return Err(Diagnostic::missing_return(&f.name, f.span));
        }
    }

    Ok(EmittedFunction {
        ret_type: f.ret_type.llvm_name().to_string(),
        name: f.name.clone(),
        params: llvm_params,
        body: emitter.finish(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lower(src: &str) -> Result<String, Vec<Diagnostic>> {
        let program = latc_parse::parse_l1(src).expect("source parses");
        check_and_lower(&program)
    }

    #[test]
    fn rejects_a_program_without_main() {
        let err = lower("int f() { return 0; }").unwrap_err();
        assert_eq!(err[0].code, latc_diagnostic::ErrorCode::E2010);
    }

    #[test]
    fn accepts_minimal_main_and_emits_one_function() {
        let text = lower("int main() { return 0; }").unwrap();
        assert!(text.contains("define i32 @main()"));
        assert!(text.contains("ret i32 0"));
    }

    #[test]
    fn rejects_a_function_missing_a_return() {
        let err = lower("int f() { int x = 1; } int main() { return 0; }").unwrap_err();
        assert_eq!(err[0].code, latc_diagnostic::ErrorCode::E2007);
    }

    #[test]
    fn rejects_duplicate_function_names() {
        let err = lower("int f() { return 0; } int f() { return 1; } int main() { return 0; }")
            .unwrap_err();
        assert_eq!(err[0].code, latc_diagnostic::ErrorCode::E2003);
    }

    #[test]
    fn mutual_recursion_across_forward_references_is_accepted() {
        let text = lower(
            "int isEven(int n) { if (n == 0) { return 1; } return isOdd(n - 1); }
             int isOdd(int n) { if (n == 0) { return 0; } return isEven(n - 1); }
             int main() { return isEven(4); }",
        )
        .unwrap();
        assert!(text.contains("call i32 @isOdd"));
        assert!(text.contains("call i32 @isEven"));
    }

    #[test]
    fn rejects_class_definitions_as_an_unimplemented_extension() {
        let err = lower("class Foo { } int main() { return 0; }").unwrap_err();
        assert_eq!(err[0].code, latc_diagnostic::ErrorCode::E2011);
    }

    #[test]
    fn string_concatenation_marks_strconcat_used() {
        let text = lower(
            r#"int main() { string s = "a" + "b"; printString(s); return 0; }"#,
        )
        .unwrap();
        assert!(text.contains("declare i8* @strconcat"));
    }

    #[test]
    fn constant_true_condition_folds_away_the_else_branch() {
        let text = lower("int main() { if (True) { return 1; } else { return 2; } }").unwrap();
        assert!(!text.contains("ret i32 2"));
        assert!(text.contains("ret i32 1"));
    }

    #[test]
    fn returning_error_from_an_int_function_is_accepted_as_unreachable() {
        let text = lower("int f() { return error(); } int main() { return 0; }").unwrap();
        assert!(text.contains("call void @error()"));
        assert!(text.contains("unreachable"));
    }
}
