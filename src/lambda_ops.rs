use rusoto_core::Region;
use rusoto_lambda::{InvocationRequest, Lambda, LambdaClient};
use std::fmt;
use tracing::{debug, error};

use crate::error::TransportError;

const REQUEST_RESPONSE: &str = "RequestResponse";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct InvokeOutput {
    pub status_code: Option<i64>,
    pub payload: Vec<u8>,
    /// Set when the function ran but reported a handled or unhandled error.
    pub function_error: Option<String>,
}

/// Synchronous remote invocation of a function by name or ARN.
pub trait FunctionInvoker {
    fn invoke(&self, function_name: &str, payload: &[u8]) -> Result<InvokeOutput, TransportError>;
}

pub struct LambdaOps {
    region: String,
    lambda_client: LambdaClient,
}

impl fmt::Debug for LambdaOps {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{ region: {} }}", self.region)
    }
}

impl LambdaOps {
    pub fn new(region: &str) -> Self {
        LambdaOps::with_client(region, LambdaClient::new(region.parse::<Region>().unwrap_or_default()))
    }

    pub fn with_client(region: &str, lambda_client: LambdaClient) -> Self {
        LambdaOps { region: region.to_string(), lambda_client }
    }
}

impl FunctionInvoker for LambdaOps {
    fn invoke(&self, function_name: &str, payload: &[u8]) -> Result<InvokeOutput, TransportError> {
        let input = InvocationRequest {
            function_name: function_name.to_string(),
            invocation_type: Some(String::from(REQUEST_RESPONSE)),
            payload: Some(payload.to_vec().into()),
            ..Default::default()
        };
        match self.lambda_client.invoke(input).sync() {
            Ok(output) => {
                debug!(function = function_name, status = ?output.status_code, function_error = ?output.function_error, "lambda invoke returned");
                Ok(InvokeOutput {
                    status_code: output.status_code,
                    payload: output.payload.map(|p| p.to_vec()).unwrap_or_default(),
                    function_error: output.function_error,
                })
            }
            Err(err) => {
                error!(function = function_name, error = %err, "lambda invoke failed");
                Err(TransportError { reason: err.to_string() })
            }
        }
    }
}
