use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ResolutionError;
use crate::ssm_ops::ParameterStore;
use crate::ssm_parameters::{Parameter, ParameterRequest, ParametersByPathRequest};

/// Turns an explicit parameter name, or the default namespace, into exactly one ARN.
#[derive(Debug)]
pub struct EndpointResolver<S> {
    store: S,
    default_path: String,
    with_decryption: bool,
    max_pages: usize,
}

impl<S: ParameterStore> EndpointResolver<S> {
    pub fn new(store: S, config: &ClientConfig) -> Self {
        EndpointResolver {
            store,
            default_path: config.default_path.clone(),
            with_decryption: config.with_decryption,
            max_pages: config.max_pages,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn resolve_endpoint(&self, explicit_key: Option<&str>) -> Result<String, ResolutionError> {
        match explicit_key {
            Some(name) if !name.is_empty() => self.resolve_by_name(name),
            _ => self.resolve_by_path(),
        }
    }

    /// The caller's name is trusted as-is; a missing key is reported as the store saw it.
    fn resolve_by_name(&self, name: &str) -> Result<String, ResolutionError> {
        let req = ParameterRequest { name: name.to_string(), with_decryption: Some(self.with_decryption) };
        let parameter = self.store.get_parameter(&req)?;
        debug!(name = %name, "resolved tds arn by name");
        parameter.value.ok_or_else(|| ResolutionError::MissingValue { name: name.to_string() })
    }

    fn resolve_by_path(&self) -> Result<String, ResolutionError> {
        let mut parameters = self.list_all(&self.default_path)?;
        match parameters.len() {
            0 => Err(ResolutionError::NotFound { path: self.default_path.clone() }),
            1 => {
                let parameter = parameters.remove(0);
                debug!(path = %self.default_path, name = ?parameter.name, "found single ssm param value by default path");
                let name = parameter.name.unwrap_or_else(|| self.default_path.clone());
                parameter.value.ok_or(ResolutionError::MissingValue { name })
            }
            count => Err(ResolutionError::Ambiguous { path: self.default_path.clone(), count }),
        }
    }

    /// Follows continuation tokens until exhausted, giving up after `max_pages` pages.
    fn list_all(&self, path: &str) -> Result<Vec<Parameter>, ResolutionError> {
        let req = ParametersByPathRequest {
            path: path.to_string(),
            recursive: Some(true),
            with_decryption: Some(self.with_decryption),
        };
        let mut out_parms: Vec<Parameter> = Vec::new();
        let mut next_token: Option<String> = None;
        for _ in 0..self.max_pages {
            let page = self.store.get_parameters_by_path(&req, next_token.take())?;
            out_parms.extend(page.parameters);
            match page.next_token {
                Some(token) => next_token = Some(token),
                None => return Ok(out_parms),
            }
        }
        Err(ResolutionError::Transport {
            reason: format!("parameter store kept paginating {} after {} pages", path, self.max_pages),
        })
    }
}
