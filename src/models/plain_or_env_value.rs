//! Sensitive configuration values that can be given either as plain text or
//! as a reference to an environment variable.
//!
//! The network config file uses this for the relayer signing key, so deployments
//! can keep the key out of the file and inject it through the environment.
use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::SecretString;

#[derive(Error, Debug, PartialEq)]
pub enum PlainOrEnvValueError {
    #[error("Environment variable {0} not found")]
    MissingEnvVar(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlainOrEnvValue {
    Env { value: String },
    Plain { value: SecretString },
}

impl PlainOrEnvValue {
    /// Resolves the configured value, reading the environment for `env` entries.
    pub fn get_value(&self) -> Result<SecretString, PlainOrEnvValueError> {
        match self {
            PlainOrEnvValue::Env { value } => {
                let resolved = env::var(value)
                    .map_err(|_| PlainOrEnvValueError::MissingEnvVar(value.clone()))?;
                Ok(SecretString::new(&resolved))
            }
            PlainOrEnvValue::Plain { value } => Ok(value.clone()),
        }
    }
}
