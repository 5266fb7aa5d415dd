//! Binary and unary operators, carrying their textual symbol so lowering can
//! pick the IR mnemonic directly (`spec.md` §4.A: "Operators carry their
//! textual symbol so lowering selects the IR mnemonic").

/// Relational operators. Shared by `Int`, `Bool` and `String` operands
/// (`spec.md` §4.E, §9 open question on `Bool`/`String` ordering).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RelOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl RelOp {
    #[must_use]
    pub const fn as_symbol(self) -> &'static str {
        match self {
            RelOp::Lt => "<",
            RelOp::Le => "<=",
            RelOp::Gt => ">",
            RelOp::Ge => ">=",
            RelOp::Eq => "==",
            RelOp::Ne => "!=",
        }
    }

    /// The LLVM `icmp` condition code for this operator.
    #[must_use]
    pub const fn llvm_icmp(self) -> &'static str {
        match self {
            RelOp::Lt => "slt",
            RelOp::Le => "sle",
            RelOp::Gt => "sgt",
            RelOp::Ge => "sge",
            RelOp::Eq => "eq",
            RelOp::Ne => "ne",
        }
    }
}

/// `+`/`-`. `+` additionally accepts `String` (concatenation); `-` is
/// `Int`-only (`spec.md` §4.E "Binary additive").
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AddOp {
    Add,
    Sub,
}

impl AddOp {
    #[must_use]
    pub const fn as_symbol(self) -> &'static str {
        match self {
            AddOp::Add => "+",
            AddOp::Sub => "-",
        }
    }

    #[must_use]
    pub const fn llvm_mnemonic(self) -> &'static str {
        match self {
            AddOp::Add => "add",
            AddOp::Sub => "sub",
        }
    }

    /// Ershov scheduling (`spec.md` §4.D) treats `+` as commutative, `-` as not.
    #[must_use]
    pub const fn is_commutative(self) -> bool {
        matches!(self, AddOp::Add)
    }
}

/// `*`/`/`/`%`, `Int`-only (`spec.md` §4.E "Binary multiplicative").
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MulOp {
    Mul,
    Div,
    Mod,
}

impl MulOp {
    #[must_use]
    pub const fn as_symbol(self) -> &'static str {
        match self {
            MulOp::Mul => "*",
            MulOp::Div => "/",
            MulOp::Mod => "%",
        }
    }

    #[must_use]
    pub const fn llvm_mnemonic(self) -> &'static str {
        match self {
            MulOp::Mul => "mul",
            MulOp::Div => "sdiv",
            MulOp::Mod => "srem",
        }
    }

    /// Only `*` is commutative for Ershov scheduling purposes.
    #[must_use]
    pub const fn is_commutative(self) -> bool {
        matches!(self, MulOp::Mul)
    }
}

/// `&&`/`||`, lowered as short-circuit branches, never as boolean arithmetic
/// (`spec.md` §4.E "Short-circuit").
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogicOp {
    And,
    Or,
}

impl LogicOp {
    #[must_use]
    pub const fn as_symbol(self) -> &'static str {
        match self {
            LogicOp::And => "&&",
            LogicOp::Or => "||",
        }
    }
}
