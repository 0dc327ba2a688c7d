//! This module contains all the constant values used in the system
mod transaction;
pub use transaction::*;
