//! On-chain credential verification.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/credentials/{user_id}/verify` | Check the user's stored hash against the registry contract |

pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{CredentialVerifier, PgCredentialStore};
