//! L0 → JVM lowering (`spec.md` §4.D, §4.F): Ershov-minimal stack code for
//! expressions, wrapped in a one-method Jasmin class whose `main` mirrors
//! the standard `public static void main(String[])` entry point.

use latc_ir::ast::l0::{AddOp, Expr, MulOp, Program, Stmt};
use latc_jvm::{assemble_class, iconst, iload, istore, stack_limit, JvmMethod, LocalSlots, StackShape};

/// Lowers a whole L0 program into a complete Jasmin `.j` class text.
#[must_use]
pub fn lower_program(class_name: &str, program: &Program) -> String {
    let mut locals = LocalSlots::new();
    let mut body = Vec::new();
    let mut max_height = 1;
    let mut has_print = false;

    for stmt in &program.stmts {
        let h = lower_stmt(stmt, &mut body, &mut locals, &mut has_print);
        max_height = max_height.max(h);
    }

    let method = JvmMethod {
        name: "main".to_string(),
        descriptor: "([Ljava/lang/String;)V".to_string(),
        stack_limit: stack_limit(max_height, has_print),
        locals_limit: locals.count(),
        body,
    };
    assemble_class(class_name, &[method])
}

fn lower_stmt(stmt: &Stmt, body: &mut Vec<String>, locals: &mut LocalSlots, has_print: &mut bool) -> u32 {
    match stmt {
        Stmt::Assign { name, value, .. } => {
            let h = lower_expr(value, body, locals);
            let slot = locals.slot_for(name);
            body.push(istore(slot));
            h
        }
        Stmt::Print { value, .. } => {
            *has_print = true;
            // Evaluate the operand first, *then* push `System.out` and
            // `swap` it underneath: pushing the stream reference ahead of
            // the operand would make the operand's own evaluation run one
            // slot higher than its Ershov height accounts for. Printing an
            // expression of height `h` therefore peaks at `h + 1`, once the
            // stream reference joins it on the stack just before `swap`.
            let h = lower_expr(value, body, locals);
            body.push("getstatic java/lang/System/out Ljava/io/PrintStream;".to_string());
            body.push("swap".to_string());
            body.push("invokevirtual java/io/PrintStream/println(I)V".to_string());
            h + 1
        }
    }
}

fn shape_of(expr: &Expr) -> StackShape {
    match expr {
        Expr::IntLit(..) | Expr::Var(..) => StackShape::leaf(),
        Expr::Paren(inner, _) => shape_of(inner),
        Expr::Mul(l, op, r, _) => StackShape::bin(op.is_commutative(), shape_of(l), shape_of(r)),
        Expr::Add(l, op, r, _) => StackShape::bin(op.is_commutative(), shape_of(l), shape_of(r)),
    }
}

/// Emits the code for `expr` using the Ershov-minimal evaluation order,
/// returning the stack height it required.
fn lower_expr(expr: &Expr, body: &mut Vec<String>, locals: &mut LocalSlots) -> u32 {
    match expr {
        Expr::IntLit(v, _) => {
            body.push(iconst(*v as i32));
            1
        }
        Expr::Var(name, _) => {
            let slot = locals.slot_for(name);
            body.push(iload(slot));
            1
        }
        Expr::Paren(inner, _) => lower_expr(inner, body, locals),
        Expr::Mul(l, op, r, _) => {
            let mnemonic = match op {
                MulOp::Mul => "imul",
                MulOp::Div => "idiv",
            };
            lower_binary(l, r, op.is_commutative(), mnemonic, body, locals)
        }
        Expr::Add(l, op, r, _) => {
            let mnemonic = match op {
                AddOp::Add => "iadd",
                AddOp::Sub => "isub",
            };
            lower_binary(l, r, op.is_commutative(), mnemonic, body, locals)
        }
    }
}

fn lower_binary(
    l: &Expr,
    r: &Expr,
    commutative: bool,
    mnemonic: &str,
    body: &mut Vec<String>,
    locals: &mut LocalSlots,
) -> u32 {
    let shape = StackShape::bin(commutative, shape_of(l), shape_of(r));
    let plan = shape.eval_plan();
    if plan.right_first {
        lower_expr(r, body, locals);
        lower_expr(l, body, locals);
    } else {
        lower_expr(l, body, locals);
        lower_expr(r, body, locals);
    }
    if plan.swap {
        body.push("swap".to_string());
    }
    body.push(mnemonic.to_string());
    shape.height()
}
