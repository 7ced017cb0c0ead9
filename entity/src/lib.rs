//! SeaORM entities for the classroom database schema.

pub mod prelude;

pub mod room;
pub mod room_doc;
pub mod room_user;
pub mod user;
