//! Tree transformation
//!
//! - [`target`]: target AST node definitions
//! - [`transformer`]: source AST → target AST, via a rule table keyed by
//!   [`NodeKind`](crate::parser::ast::NodeKind)

pub mod target;
pub mod transformer;

pub use transformer::transform;
