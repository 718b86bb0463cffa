//! In-memory stand-ins for the parameter store and lambda, recording every call.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::TransportError;
use crate::lambda_ops::{FunctionInvoker, InvokeOutput};
use crate::ssm_ops::ParameterStore;
use crate::ssm_parameters::{Parameter, ParameterPage, ParameterRequest, ParametersByPathRequest, StoreError};

pub fn parameter(name: &str, value: &str) -> Parameter {
    Parameter {
        name: Some(name.to_string()),
        p_type: Some(String::from("String")),
        value: Some(value.to_string()),
        version: Some(1),
    }
}

/// A parameter as the store returns it when the entry carries no value.
pub fn valueless_parameter(name: &str) -> Parameter {
    Parameter { value: None, ..parameter(name, "") }
}

#[derive(Debug, Default)]
pub struct FakeStore {
    named: HashMap<String, Parameter>,
    pages: Vec<Vec<Parameter>>,
    forever: bool,
    failure: Option<StoreError>,
    point_lookups: RefCell<Vec<String>>,
    path_requests: RefCell<Vec<ParametersByPathRequest>>,
    tokens_seen: RefCell<Vec<Option<String>>>,
}

impl FakeStore {
    pub fn with_parameter(mut self, name: &str, value: &str) -> Self {
        self.named.insert(name.to_string(), parameter(name, value));
        self
    }

    pub fn with_valueless_parameter(mut self, name: &str) -> Self {
        self.named.insert(name.to_string(), valueless_parameter(name));
        self
    }

    /// Pages are served in order; every page but the last carries a continuation token.
    pub fn with_page(mut self, parameters: Vec<Parameter>) -> Self {
        self.pages.push(parameters);
        self
    }

    pub fn paginating_forever(mut self) -> Self {
        self.forever = true;
        self
    }

    pub fn failing_with(mut self, err: StoreError) -> Self {
        self.failure = Some(err);
        self
    }

    pub fn point_lookups(&self) -> Vec<String> {
        self.point_lookups.borrow().clone()
    }

    pub fn path_requests(&self) -> Vec<ParametersByPathRequest> {
        self.path_requests.borrow().clone()
    }

    pub fn tokens_seen(&self) -> Vec<Option<String>> {
        self.tokens_seen.borrow().clone()
    }

    pub fn page_calls(&self) -> usize {
        self.path_requests.borrow().len()
    }

    pub fn call_count(&self) -> usize {
        self.point_lookups.borrow().len() + self.page_calls()
    }
}

impl ParameterStore for FakeStore {
    fn get_parameter(&self, req: &ParameterRequest) -> Result<Parameter, StoreError> {
        self.point_lookups.borrow_mut().push(req.name.clone());
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.named
            .get(&req.name)
            .cloned()
            .ok_or_else(|| StoreError::ParameterNotFound { name: req.name.clone() })
    }

    fn get_parameters_by_path(&self, req: &ParametersByPathRequest, next_token: Option<String>) -> Result<ParameterPage, StoreError> {
        let index = self.page_calls();
        self.path_requests.borrow_mut().push(req.clone());
        self.tokens_seen.borrow_mut().push(next_token);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        if self.forever {
            return Ok(ParameterPage { parameters: vec![], next_token: Some(format!("page-{}", index + 1)) });
        }
        let parameters = self.pages.get(index).cloned().unwrap_or_default();
        let next_token = if index + 1 < self.pages.len() { Some(format!("page-{}", index + 1)) } else { None };
        Ok(ParameterPage { parameters, next_token })
    }
}

#[derive(Debug)]
pub struct FakeFunctions {
    response: Result<InvokeOutput, TransportError>,
    calls: RefCell<Vec<(String, String)>>,
}

impl FakeFunctions {
    fn new(response: Result<InvokeOutput, TransportError>) -> Self {
        FakeFunctions { response, calls: RefCell::new(Vec::new()) }
    }

    pub fn responding(body: &str) -> Self {
        Self::responding_bytes(body.as_bytes().to_vec())
    }

    pub fn responding_bytes(body: Vec<u8>) -> Self {
        Self::new(Ok(InvokeOutput { status_code: Some(200), payload: body, function_error: None }))
    }

    pub fn function_error(kind: &str, body: &str) -> Self {
        Self::function_error_bytes(kind, body.as_bytes().to_vec())
    }

    pub fn function_error_bytes(kind: &str, body: Vec<u8>) -> Self {
        Self::new(Ok(InvokeOutput { status_code: Some(200), payload: body, function_error: Some(kind.to_string()) }))
    }

    pub fn failing(err: TransportError) -> Self {
        Self::new(Err(err))
    }

    /// (function name, payload as text) for each call made.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl FunctionInvoker for FakeFunctions {
    fn invoke(&self, function_name: &str, payload: &[u8]) -> Result<InvokeOutput, TransportError> {
        self.calls
            .borrow_mut()
            .push((function_name.to_string(), String::from_utf8_lossy(payload).into_owned()));
        self.response.clone()
    }
}
