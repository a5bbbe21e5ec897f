pub mod post;
pub mod user;

use thiserror::Error;

/// Outcome of the presence checks run before a record reaches the gateway.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required fields: {}", .0.join(", "))]
pub struct MissingFields(pub Vec<&'static str>);
