//! Symbol environment (component B, `spec.md` §4.B): scope stack plus the
//! function signature table.

mod function_table;
mod scope;

pub use function_table::{builtin_signatures, FunctionTable, Signature};
pub use scope::{Binding, Environment};
