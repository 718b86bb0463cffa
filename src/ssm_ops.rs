use rusoto_core::{Region, RusotoError};
use rusoto_ssm::{GetParameterError, GetParameterRequest, GetParametersByPathRequest, Ssm, SsmClient};
use std::fmt;
use tracing::{debug, error};

use crate::ssm_parameters::{Parameter, ParameterPage, ParameterRequest, ParametersByPathRequest, StoreError};

/// Read side of the parameter store: point lookups and one page of a prefix listing.
pub trait ParameterStore {
    fn get_parameter(&self, req: &ParameterRequest) -> Result<Parameter, StoreError>;

    fn get_parameters_by_path(&self, req: &ParametersByPathRequest, next_token: Option<String>) -> Result<ParameterPage, StoreError>;
}

pub struct SSMOps {
    region: String,
    ssm_client: SsmClient,
}

impl fmt::Debug for SSMOps {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{ region: {} }}", self.region)
    }
}

impl SSMOps {
    pub fn new(region: &str) -> Self {
        SSMOps::with_client(region, SsmClient::new(region.parse::<Region>().unwrap_or_default()))
    }

    pub fn with_client(region: &str, ssm_client: SsmClient) -> Self {
        SSMOps { region: region.to_string(), ssm_client }
    }
}

fn to_parameter(p: rusoto_ssm::Parameter) -> Parameter {
    Parameter { name: p.name, p_type: p.type_, value: p.value, version: p.version }
}

impl ParameterStore for SSMOps {
    fn get_parameter(&self, req: &ParameterRequest) -> Result<Parameter, StoreError> {
        let input = GetParameterRequest { name: req.name.clone(), with_decryption: req.with_decryption, ..Default::default() };
        match self.ssm_client.get_parameter(input).sync() {
            Ok(output) => {
                debug!(name = %req.name, region = %self.region, "get_parameter returned");
                output.parameter
                    .map(to_parameter)
                    .ok_or_else(|| StoreError::ParameterNotFound { name: req.name.clone() })
            }
            Err(RusotoError::Service(GetParameterError::ParameterNotFound(_))) => {
                error!(name = %req.name, "parameter not found");
                Err(StoreError::ParameterNotFound { name: req.name.clone() })
            }
            Err(err) => {
                error!(name = %req.name, error = %err, "get_parameter failed");
                Err(StoreError::Request { reason: err.to_string() })
            }
        }
    }

    fn get_parameters_by_path(&self, req: &ParametersByPathRequest, next_token: Option<String>) -> Result<ParameterPage, StoreError> {
        let input = GetParametersByPathRequest {
            path: req.path.clone(),
            recursive: req.recursive,
            with_decryption: req.with_decryption,
            next_token,
            ..Default::default()
        };
        match self.ssm_client.get_parameters_by_path(input).sync() {
            Ok(output) => {
                let parameters: Vec<Parameter> = output.parameters
                    .unwrap_or_default()
                    .into_iter()
                    .map(to_parameter)
                    .collect();
                debug!(path = %req.path, count = parameters.len(), more = output.next_token.is_some(), "get_parameters_by_path page");
                Ok(ParameterPage { parameters, next_token: output.next_token })
            }
            Err(err) => {
                error!(path = %req.path, error = %err, "get_parameters_by_path failed");
                Err(StoreError::Request { reason: err.to_string() })
            }
        }
    }
}
