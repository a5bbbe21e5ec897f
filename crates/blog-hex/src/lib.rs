//! blog-hex: hexagonal blog API library (core + inbound HTTP)

pub mod config;
pub mod errors;

pub mod application;

pub use blog_types::{domain, ports};

pub mod inbound; // HTTP adapter (router, handlers, middleware)
