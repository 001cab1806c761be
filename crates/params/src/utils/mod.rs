//! Constants for symmetric primitives and file formats

pub mod hash;
pub mod keyfile;
pub mod symmetric;
