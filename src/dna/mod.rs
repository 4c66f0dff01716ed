//! DNA grid types: validation, the validated matrix and fingerprints.

pub mod fingerprint;
mod matrix;
mod validator;

pub use matrix::{DnaMatrix, BASES};
pub use validator::{is_base, validate, DnaError, MIN_SIZE};
