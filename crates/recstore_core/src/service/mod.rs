//! Use-case services over record stores.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Emit structured log events; the store itself stays silent.

pub mod cart_service;
pub mod contact_service;
