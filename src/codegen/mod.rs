//! Code generation: target AST → output text

pub mod generator;

pub use generator::generate;
