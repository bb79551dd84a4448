//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and decorates every
//! response with hypermedia links.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Extractors reporting rejections as JSON errors
//! - [`handlers`] - HTTP request handlers
//! - [`links`] - Link construction and linked response wrappers
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod links;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod tests;
