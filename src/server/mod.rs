//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access, and outbound service clients.
//! The backend uses Axum as the web framework, SeaORM for database operations, and
//! reqwest for the whiteboard and AI conversation services.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, outbound calls and transactions
//! - **Data Layer** (`data/`) - Database operations over a connection or transaction
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and response envelope mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication
//! - **Validation** (`validate`) - Request body constraints checked before handlers run
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, endpoints)
//! - **Startup** (`startup`) - Tracing, database, HTTP client and CORS setup
//! - **Router** (`router`) - Route table and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the handler
//! 2. **Middleware** verifies the bearer token
//! 3. **Validation** deserializes and checks the body
//! 4. **Controller** converts the DTO to params and calls the service
//! 5. **Service** executes business logic, orchestrates data operations
//! 6. **Data** queries database, returns entity or domain models
//! 7. **Controller** converts the domain model to a DTO inside the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validate;
