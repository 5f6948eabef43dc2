//! demo-server: a minimal HTTP demo-deployment service.
//!
//! Binds a single port, registers one route, and returns a fixed plaintext
//! body for `GET /`. Exists to verify that a deployment came up; everything
//! else is delegated to the underlying HTTP stack.

pub mod config;
pub mod http;
pub mod routes;
pub mod state;
