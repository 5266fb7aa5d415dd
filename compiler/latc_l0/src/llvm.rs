//! L0 → LLVM lowering (`spec.md` §4.F): one anonymous `main`,
//! `alloca+store/load` per variable, `call void @printInt(i32 v)` per
//! print, `ret i32 0` at the end. `printInt` is declared only if at least
//! one print occurred.

use latc_ir::ast::l0::{AddOp, Expr, MulOp, Program, Stmt};
use latc_llvm::{assemble_module, EmittedFunction, FunctionEmitter, Session};
use rustc_hash::FxHashMap;

/// Lowers a whole L0 program into a complete LLVM IR module text.
#[must_use]
pub fn lower_program(program: &Program) -> String {
    let mut session = Session::new();
    let mut emitter = FunctionEmitter::new(&mut session);
    let mut vars: FxHashMap<String, String> = FxHashMap::default();

    for stmt in &program.stmts {
        lower_stmt(stmt, &mut emitter, &mut vars);
    }
    emitter.emit("ret i32 0");

    let function = EmittedFunction {
        ret_type: "i32".to_string(),
        name: "main".to_string(),
        params: Vec::new(),
        body: emitter.finish(),
    };
    assemble_module(&session, &[function])
}

fn lower_stmt(stmt: &Stmt, emitter: &mut FunctionEmitter, vars: &mut FxHashMap<String, String>) {
    match stmt {
        Stmt::Assign { name, value, .. } => {
            let operand = lower_expr(value, emitter, vars);
            let ptr = alloc_once(name, emitter, vars);
            emitter.emit(format!("store i32 {operand}, i32* {ptr}"));
        }
        Stmt::Print { value, .. } => {
            let operand = lower_expr(value, emitter, vars);
            emitter.mark_used("printInt");
            emitter.emit(format!("call void @printInt(i32 {operand})"));
        }
    }
}

/// First reference to `name` allocates its slot; later references reuse
/// the same pointer. Unlike L1, L0 has no declarations — a variable comes
/// into existence at its first assignment.
fn alloc_once(name: &str, emitter: &mut FunctionEmitter, vars: &mut FxHashMap<String, String>) -> String {
    if let Some(ptr) = vars.get(name) {
        return ptr.clone();
    }
    let ptr = emitter.new_reg();
    emitter.emit(format!("{ptr} = alloca i32"));
    vars.insert(name.to_string(), ptr.clone());
    ptr
}

fn lower_expr(expr: &Expr, emitter: &mut FunctionEmitter, vars: &mut FxHashMap<String, String>) -> String {
    match expr {
        Expr::IntLit(v, _) => v.to_string(),
        Expr::Var(name, _) => {
            let ptr = alloc_once(name, emitter, vars);
            let reg = emitter.new_reg();
            emitter.emit(format!("{reg} = load i32, i32* {ptr}"));
            reg
        }
        Expr::Paren(inner, _) => lower_expr(inner, emitter, vars),
        Expr::Mul(l, op, r, _) => {
            let lv = lower_expr(l, emitter, vars);
            let rv = lower_expr(r, emitter, vars);
            let mnemonic = match op {
                MulOp::Mul => "mul",
                MulOp::Div => "sdiv",
            };
            let reg = emitter.new_reg();
            emitter.emit(format!("{reg} = {mnemonic} i32 {lv}, {rv}"));
            reg
        }
        Expr::Add(l, op, r, _) => {
            let lv = lower_expr(l, emitter, vars);
            let rv = lower_expr(r, emitter, vars);
            let mnemonic = match op {
                AddOp::Add => "add",
                AddOp::Sub => "sub",
            };
            let reg = emitter.new_reg();
            emitter.emit(format!("{reg} = {mnemonic} i32 {lv}, {rv}"));
            reg
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_allocates_once_and_reuses_on_reread() {
        let program = latc_parse::parse_l0("a = 2; a").unwrap();
        let text = lower_program(&program);
        assert_eq!(text.matches("alloca i32").count(), 1);
    }

    #[test]
    fn printing_emits_printint_and_its_declare() {
        let program = latc_parse::parse_l0("7").unwrap();
        let text = lower_program(&program);
        assert!(text.contains("declare void @printInt(i32)"));
        assert!(text.contains("call void @printInt(i32 7)"));
    }

    #[test]
    fn no_print_means_no_printint_declare() {
        let program = latc_parse::parse_l0("a = 1").unwrap();
        let text = lower_program(&program);
        assert!(!text.contains("printInt"));
    }

    #[test]
    fn subtraction_is_right_associative_in_the_lowered_ir() {
        // `10 - 3 - 2` parses as `10 - (3 - 2)` (`spec.md` §4.F).
        let program = latc_parse::parse_l0("10 - 3 - 2").unwrap();
        let text = lower_program(&program);
        assert!(text.contains("sub i32 3, 2"));
    }

    #[test]
    fn ends_with_ret_i32_0() {
        let program = latc_parse::parse_l0("1").unwrap();
        let text = lower_program(&program);
        assert!(text.contains("ret i32 0"));
    }
}
