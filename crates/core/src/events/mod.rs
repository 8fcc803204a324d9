//! Event validation and wire assembly

pub mod assembler;
mod wire;

pub use assembler::{AssembledRequest, RequestAssembler, Route};
