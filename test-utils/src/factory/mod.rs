//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .user_name("Alice")
//!     .build()
//!     .await?;
//! let room = factory::create_room(&db, &user.user_uuid).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `room` - Create room entities
//! - `helpers` - Unique id generation and entities with their dependencies

pub mod helpers;
pub mod room;
pub mod user;

pub use room::create_room;
pub use user::create_user;
