//! API layer: REST handlers, DTOs, middleware, and routes.
//!
//! A thin adapter translating HTTP requests into calls on the registry
//! engine; no business logic lives here.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
