//! L0 lowerers (component F, `spec.md` §4.F): the minimal
//! expression-and-print language, targeting both the JVM and LLVM.

mod jvm;
mod llvm;

pub use jvm::lower_program as lower_to_jvm;
pub use llvm::lower_program as lower_to_llvm;
