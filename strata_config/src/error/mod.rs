//! Error and violation types produced by the resolution pipeline.

mod types;
mod violation;

pub use types::{StrataError, StrataResult};
pub use violation::{Violation, ViolationKind, Violations};

#[cfg(test)]
mod tests;
