//! Textual LLVM IR emitter and module assembler (component C, and the LLVM
//! half of component G, `spec.md` §4.C / §4.G).
//!
//! This crate only renders LLVM assembly text; it never links against
//! `llvm-sys`/`inkwell` and never invokes `llvm-as`/`llvm-link` itself —
//! those remain external, driver-invoked tools (`spec.md` §5).

mod builtins;
mod emitter;
mod module;
mod session;
mod string_pool;

pub use builtins::declare_lines;
pub use emitter::FunctionEmitter;
pub use module::{assemble_function, assemble_module, EmittedFunction};
pub use session::Session;
pub use string_pool::StringPool;
