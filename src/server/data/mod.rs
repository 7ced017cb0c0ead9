//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally. Each one is generic over
//! `ConnectionTrait`, so it runs equally against the connection pool or inside an open
//! `DatabaseTransaction` when several writes must commit together.

pub mod room;
pub mod room_doc;
pub mod room_user;
pub mod user;

#[cfg(test)]
mod test;
