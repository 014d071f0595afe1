//! Pure, stateless helpers with no I/O.

pub mod code_generator;
pub mod password;
