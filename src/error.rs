use crate::ssm_parameters::StoreError;

pub const VALIDATION_STATUS: u16 = 422;
pub const INTERNAL_STATUS: u16 = 500;

/// Failure of the transport under a remote call: connectivity, auth, throttling.
#[derive(Debug, Fail, Clone, PartialEq)]
#[fail(display = "{}", reason)]
pub struct TransportError {
    pub reason: String,
}

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum ResolutionError {
    #[fail(display = "Not able to find tds arn for: {}", path)]
    NotFound { path: String },
    #[fail(display = "Found {} values in path: {}. Please provide specific ssm name which points to the TDS lambda ARN. Not path", count, path)]
    Ambiguous { path: String, count: usize },
    /// An explicitly named parameter that the store does not know.
    #[fail(display = "Parameter not found: {}", name)]
    ParameterNotFound { name: String },
    #[fail(display = "Parameter {} has no value", name)]
    MissingValue { name: String },
    #[fail(display = "Parameter store error: {}", reason)]
    Transport { reason: String },
}

impl From<StoreError> for ResolutionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ParameterNotFound { name } => ResolutionError::ParameterNotFound { name },
            StoreError::Request { reason } => ResolutionError::Transport { reason },
        }
    }
}

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum InvocationError {
    #[fail(display = "Error: lambda_arn not provided")]
    MissingTarget,
    #[fail(display = "Error: Invalid JSON: {}", reason)]
    InvalidPayload { reason: String },
    /// The function ran and reported an error; carries the raw response body.
    #[fail(display = "Error: Lambda function error: {}", body)]
    RemoteError { body: String },
    #[fail(display = "Error: Lambda invocation failed: {}", reason)]
    TransportError { reason: String },
}

impl From<TransportError> for InvocationError {
    fn from(err: TransportError) -> Self {
        InvocationError::TransportError { reason: err.reason }
    }
}

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum TokenError {
    #[fail(display = "{}", _0)]
    Validation(ValidationErrors),
    #[fail(display = "{}", _0)]
    Resolution(#[cause] ResolutionError),
    #[fail(display = "{}", _0)]
    Invocation(#[cause] InvocationError),
}

/// Every message the validator reported for one call, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<String>);

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.join("\n"))
    }
}

impl From<ResolutionError> for TokenError {
    fn from(err: ResolutionError) -> Self {
        TokenError::Resolution(err)
    }
}

impl From<InvocationError> for TokenError {
    fn from(err: InvocationError) -> Self {
        TokenError::Invocation(err)
    }
}

impl TokenError {
    pub fn status_code(&self) -> u16 {
        match self {
            TokenError::Validation(_) => VALIDATION_STATUS,
            TokenError::Resolution(_) | TokenError::Invocation(_) => INTERNAL_STATUS,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope { status_code: self.status_code(), body: self.to_string() }
    }
}

/// JSON rendering of a failed `get_token` call: `{"statusCode": .., "body": ..}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ErrorEnvelope {
    pub fn to_json(&self) -> String {
        // Two plain fields; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}
