//! Per-function code buffer and fresh-name generator
//! (`spec.md` §4.C "Maintains: per-function code buffer; fresh register
//! counter; fresh label counter; string pool; used-builtin set").

use crate::session::Session;

pub struct FunctionEmitter<'a> {
    session: &'a mut Session,
    code: Vec<String>,
    reg_counter: u32,
    label_counter: u32,
}

impl<'a> FunctionEmitter<'a> {
    #[must_use]
    pub fn new(session: &'a mut Session) -> Self {
        FunctionEmitter {
            session,
            code: Vec::new(),
            reg_counter: 0,
            label_counter: 0,
        }
    }

    /// A fresh virtual register, rendered `%.tN` (`spec.md` §4.C).
    pub fn new_reg(&mut self) -> String {
        let reg = format!("%.t{}", self.reg_counter);
        self.reg_counter += 1;
        reg
    }

    /// A fresh basic block label, rendered `LN`.
    pub fn new_label(&mut self) -> String {
        let label = format!("L{}", self.label_counter);
        self.label_counter += 1;
        label
    }

    /// Appends an indented instruction line.
    pub fn emit(&mut self, line: impl Into<String>) {
        self.code.push(format!("    {}", line.into()));
    }

    /// Appends an unindented `label:` line.
    pub fn emit_label(&mut self, label: &str) {
        self.code.push(format!("{label}:"));
    }

    /// Interns `bytes` into the session's string pool, emits the
    /// `getelementptr` that materializes an `i8*` pointing at its first
    /// byte, and returns the register holding that pointer
    /// (`spec.md` §4.C "`intern_string(bytes) -> operand`").
    pub fn intern_string(&mut self, bytes: &[u8]) -> String {
        let global = self.session.string_pool.intern(bytes);
        let len = bytes.len() + 1;
        let reg = self.new_reg();
        self.emit(format!(
            "{reg} = getelementptr [{len} x i8], [{len} x i8]* {global}, i32 0, i32 0"
        ));
        reg
    }

    pub fn mark_used(&mut self, builtin: &str) {
        self.session.mark_used(builtin);
    }

    /// Consumes the emitter, returning the accumulated body lines.
    #[must_use]
    pub fn finish(self) -> Vec<String> {
        self.code
    }
}
