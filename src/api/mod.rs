//! # API Module
//!
//! Contains HTTP API implementation for the relayer service.
//!
//! ## Structure
//!
//! * `controllers` - Request handling and business logic
//! * `routes` - API endpoint definitions and routing

pub mod controllers;

pub mod routes;
