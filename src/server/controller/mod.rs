//! HTTP request handlers.
//!
//! Each handler authenticates the caller through the `AuthUser` extractor, binds its
//! validated body, calls a service and wraps the result in the response envelope.

pub mod agora;
pub mod room;
pub mod user;

#[cfg(test)]
mod test;
