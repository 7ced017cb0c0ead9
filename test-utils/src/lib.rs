//! Classroom Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the classroom
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for seeding rows, and local HTTP servers that stand in for the
//! third-party services the backend talks to.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **TestServer** / **FakeUpstream**: Routers served on an ephemeral local port
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_room_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_room_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod server;
pub mod upstream;
