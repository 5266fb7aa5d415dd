//! AST model (`spec.md` §4.A, component A).
//!
//! L0 and L1 have unrelated grammars (`spec.md` §4.F: "a program is a
//! sequence of statements" vs. the much larger L1 program of function
//! definitions), so they get separate modules rather than one tree with
//! unused variants for each language.

pub mod l0;
pub mod l1;
