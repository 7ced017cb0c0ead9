//! Wire-level request and response types.

pub mod agora;
pub mod api;
pub mod room;
pub mod user;
