//! Recursive-descent parsers for L0 and L1 (`spec.md` §1 "Out of scope"
//! notes parsing as an external collaborator; built here anyway so the
//! crate is runnable end to end — `SPEC_FULL.md` §1).

mod cursor;
mod l0;
mod l1;

pub use l0::parse_program as parse_l0;
pub use l1::parse_program as parse_l1;
