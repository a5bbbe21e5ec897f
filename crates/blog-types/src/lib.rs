//! blog-types: domain entities and persistence ports shared across the blog crates.

pub mod domain;
pub mod ports;
