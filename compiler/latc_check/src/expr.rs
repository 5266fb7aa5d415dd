//! Expression lowering (`spec.md` §4.E "Expression lowering").
//!
//! Every case returns `(type, operand, finish_label?)`: `finish_label` is
//! only ever set by a short-circuit `&&`/`||`, naming the block where its
//! φ-node materializes the final value, so an enclosing short-circuit can
//! wire its own φ's predecessor correctly.

use latc_diagnostic::Diagnostic;
use latc_env::{Environment, FunctionTable};
use latc_ir::ast::l1::Expr;
use latc_ir::{AddOp, LogicOp, MulOp, RelOp, Spanned, Type};
use latc_llvm::FunctionEmitter;

#[derive(Clone, Debug)]
pub struct ExprResult {
    pub ty: Type,
    pub operand: String,
    pub finish_label: Option<String>,
}

impl ExprResult {
    fn simple(ty: Type, operand: String) -> Self {
        ExprResult {
            ty,
            operand,
            finish_label: None,
        }
    }
}

/// `error()` never returns to its caller, so a position that expects some
/// other type accepts a direct call to it regardless of `error`'s own
/// declared (`Void`) return type — the bottom/never-type treatment
/// `spec.md` §9 calls for.
#[must_use]
pub fn is_noreturn_call(expr: &Expr) -> bool {
    matches!(expr, Expr::App { callee, .. } if callee == "error")
}

pub fn lower_expr(
    expr: &Expr,
    env: &mut Environment<String>,
    emitter: &mut FunctionEmitter,
    func_table: &FunctionTable,
) -> Result<ExprResult, Diagnostic> {
    match expr {
        Expr::IntLit(n, _) => Ok(ExprResult::simple(Type::Int, n.to_string())),
        Expr::BoolLit(b, _) => {
            Ok(ExprResult::simple(Type::Bool, if *b { "1" } else { "0" }.to_string()))
        }
        Expr::StrLit(s, _) => {
            let reg = emitter.intern_string(s.as_bytes());
            Ok(ExprResult::simple(Type::Str, reg))
        }
        Expr::Var(name, span) => {
            let binding = env.lookup(name, *span)?.clone();
            let reg = emitter.new_reg();
            let llvm = binding.ty.llvm_name();
            emitter.emit(format!("{reg} = load {llvm}, {llvm}* {}", binding.storage));
            Ok(ExprResult::simple(binding.ty, reg))
        }
        Expr::Paren(inner, _) => lower_expr(inner, env, emitter, func_table),
        Expr::Neg(inner, span) => {
            let v = lower_expr(inner, env, emitter, func_table)?;
            if v.ty != Type::Int {
                return Err(Diagnostic::invalid_operator_type("-", v.ty, *span));
            }
            let reg = emitter.new_reg();
            emitter.emit(format!("{reg} = sub i32 0, {}", v.operand));
            Ok(ExprResult::simple(Type::Int, reg))
        }
        Expr::Not(inner, span) => {
            let v = lower_expr(inner, env, emitter, func_table)?;
            if v.ty != Type::Bool {
                return Err(Diagnostic::invalid_operator_type("!", v.ty, *span));
            }
            let reg = emitter.new_reg();
            emitter.emit(format!("{reg} = xor i1 {}, 1", v.operand));
            Ok(ExprResult::simple(Type::Bool, reg))
        }
        Expr::Mul(l, op, r, span) => lower_mul(l, *op, r, *span, env, emitter, func_table),
        Expr::Add(l, op, r, span) => lower_add(l, *op, r, *span, env, emitter, func_table),
        Expr::Rel(l, op, r, span) => lower_rel(l, *op, r, *span, env, emitter, func_table),
        Expr::Logic(l, op, r, span) => lower_logic(l, *op, r, *span, env, emitter, func_table),
        Expr::App { callee, args, span } => lower_call(callee, args, *span, env, emitter, func_table),
    }
}

fn lower_mul(
    l: &Expr,
    op: MulOp,
    r: &Expr,
    span: latc_ir::Span,
    env: &mut Environment<String>,
    emitter: &mut FunctionEmitter,
    func_table: &FunctionTable,
) -> Result<ExprResult, Diagnostic> {
    let lv = lower_expr(l, env, emitter, func_table)?;
    let rv = lower_expr(r, env, emitter, func_table)?;
    if lv.ty != Type::Int {
        return Err(Diagnostic::invalid_operator_type(op.as_symbol(), lv.ty, span));
    }
    if rv.ty != Type::Int {
        return Err(Diagnostic::invalid_operator_type(op.as_symbol(), rv.ty, span));
    }
    let reg = emitter.new_reg();
    emitter.emit(format!(
        "{reg} = {} i32 {}, {}",
        op.llvm_mnemonic(),
        lv.operand,
        rv.operand
    ));
    Ok(ExprResult::simple(Type::Int, reg))
}

fn lower_add(
    l: &Expr,
    op: AddOp,
    r: &Expr,
    span: latc_ir::Span,
    env: &mut Environment<String>,
    emitter: &mut FunctionEmitter,
    func_table: &FunctionTable,
) -> Result<ExprResult, Diagnostic> {
    let lv = lower_expr(l, env, emitter, func_table)?;
    let rv = lower_expr(r, env, emitter, func_table)?;
    match op {
        AddOp::Add if lv.ty == Type::Int && rv.ty == Type::Int => {
            let reg = emitter.new_reg();
            emitter.emit(format!("{reg} = add i32 {}, {}", lv.operand, rv.operand));
            Ok(ExprResult::simple(Type::Int, reg))
        }
        AddOp::Add if lv.ty == Type::Str && rv.ty == Type::Str => {
            emitter.mark_used("strconcat");
            let reg = emitter.new_reg();
            emitter.emit(format!(
                "{reg} = call i8* @strconcat(i8* {}, i8* {})",
                lv.operand, rv.operand
            ));
            Ok(ExprResult::simple(Type::Str, reg))
        }
        AddOp::Add => Err(Diagnostic::invalid_operator_type("+", lv.ty, span)),
        AddOp::Sub if lv.ty == Type::Int && rv.ty == Type::Int => {
            let reg = emitter.new_reg();
            emitter.emit(format!("{reg} = sub i32 {}, {}", lv.operand, rv.operand));
            Ok(ExprResult::simple(Type::Int, reg))
        }
        AddOp::Sub => Err(Diagnostic::invalid_operator_type("-", lv.ty, span)),
    }
}

fn lower_rel(
    l: &Expr,
    op: RelOp,
    r: &Expr,
    span: latc_ir::Span,
    env: &mut Environment<String>,
    emitter: &mut FunctionEmitter,
    func_table: &FunctionTable,
) -> Result<ExprResult, Diagnostic> {
    let lv = lower_expr(l, env, emitter, func_table)?;
    let rv = lower_expr(r, env, emitter, func_table)?;
    if lv.ty != rv.ty {
        return Err(Diagnostic::type_mismatch(lv.ty, rv.ty, span));
    }
    match lv.ty {
        Type::Int | Type::Bool => {
            let reg = emitter.new_reg();
            emitter.emit(format!(
                "{reg} = icmp {} {} {}, {}",
                op.llvm_icmp(),
                lv.ty.llvm_name(),
                lv.operand,
                rv.operand
            ));
            Ok(ExprResult::simple(Type::Bool, reg))
        }
        Type::Str => {
            emitter.mark_used("strcmp");
            let cmp = emitter.new_reg();
            emitter.emit(format!(
                "{cmp} = call i32 @strcmp(i8* {}, i8* {})",
                lv.operand, rv.operand
            ));
            let reg = emitter.new_reg();
            emitter.emit(format!("{reg} = icmp {} i32 {cmp}, 0", op.llvm_icmp()));
            Ok(ExprResult::simple(Type::Bool, reg))
        }
        Type::Void => Err(Diagnostic::invalid_operator_type(op.as_symbol(), lv.ty, span)),
    }
}

/// Three-label diamond with a φ-merge (`spec.md` §4.E "Short-circuit").
fn lower_logic(
    l: &Expr,
    op: LogicOp,
    r: &Expr,
    span: latc_ir::Span,
    env: &mut Environment<String>,
    emitter: &mut FunctionEmitter,
    func_table: &FunctionTable,
) -> Result<ExprResult, Diagnostic> {
    let entry = emitter.new_label();
    let check = emitter.new_label();
    let skip = emitter.new_label();

    emitter.emit(format!("br label %{entry}"));
    emitter.emit_label(&entry);
    let lv = lower_expr(l, env, emitter, func_table)?;
    if lv.ty != Type::Bool {
        return Err(Diagnostic::invalid_operator_type(op.as_symbol(), lv.ty, span));
    }
    let l_finish = lv.finish_label.unwrap_or_else(|| entry.clone());

    let (true_label, false_label) = match op {
        LogicOp::And => (check.clone(), skip.clone()),
        LogicOp::Or => (skip.clone(), check.clone()),
    };
    emitter.emit(format!(
        "br i1 {}, label %{true_label}, label %{false_label}",
        lv.operand
    ));

    emitter.emit_label(&check);
    let rv = lower_expr(r, env, emitter, func_table)?;
    if rv.ty != Type::Bool {
        return Err(Diagnostic::invalid_operator_type(op.as_symbol(), rv.ty, span));
    }
    let r_finish = rv.finish_label.unwrap_or_else(|| check.clone());
    emitter.emit(format!("br label %{skip}"));

    emitter.emit_label(&skip);
    let reg = emitter.new_reg();
    emitter.emit(format!(
        "{reg} = phi i1 [ {}, %{l_finish} ], [ {}, %{r_finish} ]",
        lv.operand, rv.operand
    ));
    Ok(ExprResult {
        ty: Type::Bool,
        operand: reg,
        finish_label: Some(skip),
    })
}

fn lower_call(
    callee: &str,
    args: &[Expr],
    span: latc_ir::Span,
    env: &mut Environment<String>,
    emitter: &mut FunctionEmitter,
    func_table: &FunctionTable,
) -> Result<ExprResult, Diagnostic> {
    let sig = func_table.lookup(callee, span)?.clone();
    if sig.params.len() != args.len() {
        return Err(Diagnostic::arity_mismatch(
            callee,
            sig.params.len(),
            args.len(),
            span,
        ));
    }
    let mut rendered_args = Vec::with_capacity(args.len());
    for (arg, expected) in args.iter().zip(&sig.params) {
        let v = lower_expr(arg, env, emitter, func_table)?;
        if v.ty != *expected {
            return Err(Diagnostic::type_mismatch(*expected, v.ty, arg.span()));
        }
        rendered_args.push(format!("{} {}", expected.llvm_name(), v.operand));
    }
    if func_table.is_builtin(callee) {
        emitter.mark_used(callee);
    }
    let args_text = rendered_args.join(", ");
    if sig.ret_type == Type::Void {
        emitter.emit(format!("call void @{callee}({args_text})"));
        Ok(ExprResult::simple(Type::Void, String::new()))
    } else {
        let reg = emitter.new_reg();
        emitter.emit(format!(
            "{reg} = call {} @{callee}({args_text})",
            sig.ret_type.llvm_name()
        ));
        Ok(ExprResult::simple(sig.ret_type, reg))
    }
}

