use tracing::{debug, error};

use crate::error::InvocationError;
use crate::lambda_ops::FunctionInvoker;

/// Gatekeeper around a single synchronous call to the token dispenser function.
#[derive(Debug)]
pub struct Invoker<F> {
    functions: F,
}

impl<F: FunctionInvoker> Invoker<F> {
    pub fn new(functions: F) -> Self {
        Invoker { functions }
    }

    pub fn functions(&self) -> &F {
        &self.functions
    }

    /// Returns the response body exactly as the function produced it.
    pub fn invoke(&self, payload_json: &str, arn: Option<&str>) -> Result<String, InvocationError> {
        let arn = match arn {
            Some(arn) if !arn.trim().is_empty() => arn,
            _ => return Err(InvocationError::MissingTarget),
        };
        if let Err(err) = serde_json::from_str::<serde_json::Value>(payload_json) {
            return Err(InvocationError::InvalidPayload { reason: err.to_string() });
        }

        let output = self.functions.invoke(arn, payload_json.as_bytes())?;
        if let Some(kind) = output.function_error {
            let body = String::from_utf8_lossy(&output.payload).into_owned();
            error!(arn = %arn, kind = %kind, body = %body, "token dispenser reported a function error");
            return Err(InvocationError::RemoteError { body });
        }

        let body = String::from_utf8(output.payload).map_err(|err| InvocationError::TransportError {
            reason: format!("response body is not utf-8: {}", err),
        })?;
        debug!(arn = %arn, status = ?output.status_code, "token dispenser responded");
        Ok(body)
    }
}
