//! # Models Module
//!
//! Contains core data structures and type definitions for the relayer service.

mod app_state;
pub use app_state::*;

mod request;
pub use request::*;

mod resource;
pub use resource::*;

mod transaction;
pub use transaction::*;

mod relayer;
pub use relayer::*;

mod error;
pub use error::*;

mod secret_string;
pub use secret_string::*;

mod plain_or_env_value;
pub use plain_or_env_value::*;
