//! Jasmin bytecode emitter and operand-stack oracle (component D, and the
//! JVM half of component G, `spec.md` §4.D / §4.G).
//!
//! Never shells out to `jasmin.jar` or links against a JVM bytecode crate —
//! this crate only renders Jasmin assembly text; invoking the assembler
//! jar is the driver's job (`spec.md` §5, §6).

mod class_template;
mod ershov;
mod instr;
mod locals;

pub use class_template::{assemble_class, assemble_method, JvmMethod};
pub use ershov::{stack_limit, EvalPlan, StackShape};
pub use instr::{aload, astore, iconst, iload, istore};
pub use locals::LocalSlots;
