//! Security Module
//!
//! Provides security features for the chat API:
//! - Request Validation
//! - Security Middleware

pub mod middleware;
pub mod validation;

pub use middleware::{build_cors_layer, security_headers_middleware};
pub use validation::{RequestValidator, ValidationError, ValidationResult};
