//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Time-window checks and ownership rules for rooms
//! - **Orchestration**: Coordinating repository calls with the whiteboard and AI services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Committing the rows of one room creation together

pub mod agora;
pub mod room;
pub mod user;
pub mod whiteboard;

#[cfg(test)]
mod test;
