#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Option<String>,
    pub p_type: Option<String>,
    pub value: Option<String>,
    pub version: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRequest {
    pub name: String,
    pub with_decryption: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParametersByPathRequest {
    pub path: String,
    pub with_decryption: Option<bool>,
    pub recursive: Option<bool>,
}

/// One page of a prefix listing. `next_token` is set while the store has more.
#[derive(Debug, Default)]
pub struct ParameterPage {
    pub parameters: Vec<Parameter>,
    pub next_token: Option<String>,
}

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum StoreError {
    #[fail(display = "Parameter not found: {}", name)]
    ParameterNotFound { name: String },
    #[fail(display = "Parameter store request failed: {}", reason)]
    Request { reason: String },
}
