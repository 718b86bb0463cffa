use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{InvocationError, TokenError, ValidationErrors};
use crate::invoker::Invoker;
use crate::lambda_ops::{FunctionInvoker, LambdaOps};
use crate::resolver::EndpointResolver;
use crate::ssm_ops::{ParameterStore, SSMOps};
use crate::validation::{self, DEFAULT_MINIMUM_ALIVE_SECS};

/// Body sent to the token dispenser.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TokenRequest {
    pub client_id: String,
    pub minimum_alive_secs: i64,
}

/// Validates, resolves the dispenser ARN, then invokes it. The first failing
/// stage ends the call.
#[derive(Debug)]
pub struct TokenDispenserClient<S, F> {
    resolver: EndpointResolver<S>,
    invoker: Invoker<F>,
}

impl TokenDispenserClient<SSMOps, LambdaOps> {
    pub fn from_config(config: &ClientConfig) -> Self {
        TokenDispenserClient::new(SSMOps::new(&config.region), LambdaOps::new(&config.region), config)
    }
}

impl<S: ParameterStore, F: FunctionInvoker> TokenDispenserClient<S, F> {
    pub fn new(store: S, functions: F, config: &ClientConfig) -> Self {
        TokenDispenserClient {
            resolver: EndpointResolver::new(store, config),
            invoker: Invoker::new(functions),
        }
    }

    pub fn resolver(&self) -> &EndpointResolver<S> {
        &self.resolver
    }

    pub fn invoker(&self) -> &Invoker<F> {
        &self.invoker
    }

    /// Returns the dispenser's JSON response untouched (a token plus
    /// `created_at` / `expired_at` epoch seconds). `minimum_alive_secs`
    /// defaults to 300; `endpoint_override` names an SSM key holding the ARN.
    pub fn get_token(&self, client_id: &str, minimum_alive_secs: Option<f64>, endpoint_override: Option<&str>) -> Result<String, TokenError> {
        let minimum_alive_secs = minimum_alive_secs.unwrap_or(DEFAULT_MINIMUM_ALIVE_SECS as f64);
        let errors = validation::validate(Some(client_id), Some(minimum_alive_secs));
        if !errors.is_empty() {
            info!(client_id = %client_id, errors = ?errors, "rejected token request");
            return Err(TokenError::Validation(ValidationErrors(errors)));
        }

        let tds_arn = self.resolver.resolve_endpoint(endpoint_override)?;
        debug!(tds_arn = %tds_arn, "resolved token dispenser");

        let request = TokenRequest {
            client_id: client_id.to_string(),
            minimum_alive_secs: validation::as_integer(minimum_alive_secs).unwrap_or(DEFAULT_MINIMUM_ALIVE_SECS),
        };
        let payload = serde_json::to_string(&request)
            .map_err(|err| InvocationError::InvalidPayload { reason: err.to_string() })?;
        Ok(self.invoker.invoke(&payload, Some(&tds_arn))?)
    }
}
