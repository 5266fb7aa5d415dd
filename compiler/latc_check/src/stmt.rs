//! Statement lowering (`spec.md` §4.E "Statement lowering").
//!
//! Each statement returns `Option<Type>`: `None` means no guaranteed
//! return along this path, `Some(ty)` means every path through this
//! statement ends in a `return` of type `ty`. A block's result is its
//! first guaranteed-returning statement's type, if any — later statements
//! in the block are unreachable and are not lowered.

use latc_diagnostic::Diagnostic;
use latc_env::{Binding, Environment, FunctionTable};
use latc_ir::ast::l1::{Block, Stmt};
use latc_ir::{Spanned, Type};
use latc_llvm::FunctionEmitter;

use crate::expr::{is_noreturn_call, lower_expr};

pub fn lower_block(
    block: &Block,
    env: &mut Environment<String>,
    emitter: &mut FunctionEmitter,
    func_table: &FunctionTable,
    ret_type: Type,
) -> Result<Option<Type>, Diagnostic> {
    env.push_scope();
    let mut guaranteed = None;
    for stmt in &block.stmts {
        if guaranteed.is_some() {
            break;
        }
        guaranteed = lower_stmt(stmt, env, emitter, func_table, ret_type)?;
    }
    env.pop_scope();
    Ok(guaranteed)
}

pub fn lower_stmt(
    stmt: &Stmt,
    env: &mut Environment<String>,
    emitter: &mut FunctionEmitter,
    func_table: &FunctionTable,
    ret_type: Type,
) -> Result<Option<Type>, Diagnostic> {
    match stmt {
        Stmt::Empty(_) => Ok(None),
        Stmt::Block(b) => lower_block(b, env, emitter, func_table, ret_type),
        Stmt::Decl { ty, items, span } => lower_decl(*ty, items, *span, env, emitter, func_table),
        Stmt::Assign { target, value, span } => {
            lower_assign(target, value, *span, env, emitter, func_table)
        }
        Stmt::Incr { target, span } => lower_incr_decr(target, *span, env, emitter, true),
        Stmt::Decr { target, span } => lower_incr_decr(target, *span, env, emitter, false),
        Stmt::ReturnValue { value, span } => {
            let v = lower_expr(value, env, emitter, func_table)?;
            if v.ty != ret_type {
                if is_noreturn_call(value) {
                    emitter.emit("unreachable");
                    return Ok(Some(ret_type));
                }
                return Err(Diagnostic::invalid_return(ret_type, v.ty, *span));
            }
            emitter.emit(format!("ret {} {}", ret_type.llvm_name(), v.operand));
            Ok(Some(ret_type))
        }
        Stmt::ReturnVoid { span } => {
            if ret_type != Type::Void {
                return Err(Diagnostic::invalid_return(ret_type, Type::Void, *span));
            }
            emitter.emit("ret void");
            Ok(Some(Type::Void))
        }
        Stmt::If {
            cond,
            then_branch,
            else_branch,
            span,
        } => lower_if(cond, then_branch, else_branch.as_deref(), *span, env, emitter, func_table, ret_type),
        Stmt::While { cond, body, span } => {
            lower_while(cond, body, *span, env, emitter, func_table, ret_type)
        }
        Stmt::For { span } => Err(Diagnostic::extension_not_implemented(*span)),
        Stmt::ExprStmt { expr, span: _ } => {
            lower_expr(expr, env, emitter, func_table)?;
            Ok(None)
        }
    }
}

fn lower_decl(
    ty: Type,
    items: &[latc_ir::ast::l1::DeclItem],
    span: latc_ir::Span,
    env: &mut Environment<String>,
    emitter: &mut FunctionEmitter,
    func_table: &FunctionTable,
) -> Result<Option<Type>, Diagnostic> {
    if ty == Type::Void {
        let name = items.first().map_or("", |i| i.name.as_str());
        return Err(Diagnostic::void_variable(name, span));
    }
    let llvm = ty.llvm_name();
    for item in items {
        let operand = match &item.init {
            Some(e) => {
                let v = lower_expr(e, env, emitter, func_table)?;
                if v.ty != ty {
                    return Err(Diagnostic::type_mismatch(ty, v.ty, e.span()));
                }
                v.operand
            }
            None => match ty {
                Type::Str => {
                    let bytes = ty.default_literal().as_bytes();
                    emitter.intern_string(bytes)
                }
                _ => ty.default_literal().to_string(),
            },
        };
        let ptr = emitter.new_reg();
        emitter.emit(format!("{ptr} = alloca {llvm}"));
        emitter.emit(format!("store {llvm} {operand}, {llvm}* {ptr}"));
        env.declare(&item.name, Binding::new(ty, ptr), item.span)?;
    }
    Ok(None)
}

fn lower_assign(
    target: &str,
    value: &latc_ir::ast::l1::Expr,
    span: latc_ir::Span,
    env: &mut Environment<String>,
    emitter: &mut FunctionEmitter,
    func_table: &FunctionTable,
) -> Result<Option<Type>, Diagnostic> {
    let binding = env.lookup(target, span)?.clone();
    let v = lower_expr(value, env, emitter, func_table)?;
    if v.ty != binding.ty {
        return Err(Diagnostic::type_mismatch(binding.ty, v.ty, span));
    }
    let llvm = binding.ty.llvm_name();
    emitter.emit(format!("store {llvm} {}, {llvm}* {}", v.operand, binding.storage));
    Ok(None)
}

fn lower_incr_decr(
    target: &str,
    span: latc_ir::Span,
    env: &mut Environment<String>,
    emitter: &mut FunctionEmitter,
    is_incr: bool,
) -> Result<Option<Type>, Diagnostic> {
    let binding = env.lookup(target, span)?.clone();
    if binding.ty != Type::Int {
        return Err(Diagnostic::invalid_operator_type(
            if is_incr { "++" } else { "--" },
            binding.ty,
            span,
        ));
    }
    let loaded = emitter.new_reg();
    emitter.emit(format!("{loaded} = load i32, i32* {}", binding.storage));
    let result = emitter.new_reg();
    let mnemonic = if is_incr { "add" } else { "sub" };
    emitter.emit(format!("{result} = {mnemonic} i32 {loaded}, 1"));
    emitter.emit(format!("store i32 {result}, i32* {}", binding.storage));
    Ok(None)
}

#[allow(clippy::too_many_arguments)]
fn lower_if(
    cond: &latc_ir::ast::l1::Expr,
    then_branch: &Stmt,
    else_branch: Option<&Stmt>,
    span: latc_ir::Span,
    env: &mut Environment<String>,
    emitter: &mut FunctionEmitter,
    func_table: &FunctionTable,
    ret_type: Type,
) -> Result<Option<Type>, Diagnostic> {
    let cond_result = lower_expr(cond, env, emitter, func_table)?;
    if cond_result.ty != Type::Bool {
        return Err(Diagnostic::type_mismatch(Type::Bool, cond_result.ty, span));
    }

    // Constant-condition folding (`spec.md` §4.E, the one optimization this
    // system performs): a literal `True`/`False` condition lowers only the
    // live branch.
    if cond_result.operand == "1" {
        return lower_stmt(then_branch, env, emitter, func_table, ret_type);
    }
    if cond_result.operand == "0" {
        return match else_branch {
            Some(e) => lower_stmt(e, env, emitter, func_table, ret_type),
            None => Ok(None),
        };
    }

    let lt = emitter.new_label();
    if let Some(else_stmt) = else_branch {
        let lf = emitter.new_label();
        let lafter = emitter.new_label();
        emitter.emit(format!("br i1 {}, label %{lt}, label %{lf}", cond_result.operand));
        emitter.emit_label(&lt);
        let then_guaranteed = lower_stmt(then_branch, env, emitter, func_table, ret_type)?;
        if then_guaranteed.is_none() {
            emitter.emit(format!("br label %{lafter}"));
        }
        emitter.emit_label(&lf);
        let else_guaranteed = lower_stmt(else_stmt, env, emitter, func_table, ret_type)?;
        if else_guaranteed.is_none() {
            emitter.emit(format!("br label %{lafter}"));
        }
        match (then_guaranteed, else_guaranteed) {
            (Some(t1), Some(t2)) if t1 == t2 => Ok(Some(t1)),
            _ => {
                emitter.emit_label(&lafter);
                Ok(None)
            }
        }
    } else {
        let lafter = emitter.new_label();
        emitter.emit(format!("br i1 {}, label %{lt}, label %{lafter}", cond_result.operand));
        emitter.emit_label(&lt);
        let then_guaranteed = lower_stmt(then_branch, env, emitter, func_table, ret_type)?;
        if then_guaranteed.is_none() {
            emitter.emit(format!("br label %{lafter}"));
        }
        emitter.emit_label(&lafter);
        Ok(None)
    }
}

#[allow(clippy::too_many_arguments)]
fn lower_while(
    cond: &latc_ir::ast::l1::Expr,
    body: &Stmt,
    span: latc_ir::Span,
    env: &mut Environment<String>,
    emitter: &mut FunctionEmitter,
    func_table: &FunctionTable,
    ret_type: Type,
) -> Result<Option<Type>, Diagnostic> {
    let lcheck = emitter.new_label();
    let lt = emitter.new_label();
    let lf = emitter.new_label();

    emitter.emit(format!("br label %{lcheck}"));
    emitter.emit_label(&lcheck);
    let cond_result = lower_expr(cond, env, emitter, func_table)?;
    if cond_result.ty != Type::Bool {
        return Err(Diagnostic::type_mismatch(Type::Bool, cond_result.ty, span));
    }
    emitter.emit(format!("br i1 {}, label %{lt}, label %{lf}", cond_result.operand));
    emitter.emit_label(&lt);
    lower_stmt(body, env, emitter, func_table, ret_type)?;
    emitter.emit(format!("br label %{lcheck}"));
    emitter.emit_label(&lf);
    Ok(None)
}
