//! Client for the Token Dispenser Service (TDS).
//!
//! The dispenser is a Lambda whose ARN is published in SSM Parameter Store,
//! by default as the single parameter under `/service/token-dispenser`.
//! [`TokenDispenserClient::get_token`] validates the caller's input, resolves
//! that ARN, invokes the function synchronously and hands back its response.

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate failure_derive;

pub mod client;
pub mod config;
pub mod error;
pub mod invoker;
pub mod lambda_ops;
pub mod resolver;
pub mod ssm_ops;
pub mod ssm_parameters;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use client::{TokenDispenserClient, TokenRequest};
pub use config::ClientConfig;
pub use error::{ErrorEnvelope, InvocationError, ResolutionError, TokenError, TransportError};
pub use validation::validate;

/// One-shot `get_token` against AWS with configuration from the environment.
pub fn get_token(client_id: &str, minimum_alive_secs: Option<f64>, endpoint_override: Option<&str>) -> Result<String, TokenError> {
    TokenDispenserClient::from_config(&ClientConfig::from_env()).get_token(client_id, minimum_alive_secs, endpoint_override)
}
