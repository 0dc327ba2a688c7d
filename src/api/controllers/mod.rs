//! # API Controllers Module
//!
//! Handles HTTP request processing and business logic coordination.
//!
//! ## Controllers
//!
//! * `relayer` - Transaction and relayer management endpoints

pub mod relayer;
