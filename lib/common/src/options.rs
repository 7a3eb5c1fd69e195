use std::time::Duration;
use thiserror::Error;

/// The negotiated result-serialization hint sent alongside a compiled query.
///
/// The transport puts this into the `Accept` header; the response parser collaborator picks the
/// matching document reader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultFormat {
    #[default]
    Xml,
    Json,
}

impl ResultFormat {
    pub fn media_type(self) -> &'static str {
        match self {
            ResultFormat::Xml => "application/sparql-results+xml",
            ResultFormat::Json => "application/sparql-results+json",
        }
    }
}

/// How often and how long the transport may retry a request.
///
/// Retries apply to transport-level failures only, never to remote error statuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub request_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            attempts: 3,
            request_timeout: Duration::from_secs(300),
        }
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("the endpoint URL must use the http or https scheme: {0}")]
    InvalidEndpoint(String),
    #[error("the retry count must be at least 1")]
    ZeroAttempts,
}

/// Connection options for one remote endpoint, validated at construction.
///
/// This crate performs no I/O itself; the options are handed to the transport collaborator
/// together with the compiled query.
#[derive(Clone, Debug)]
pub struct EndpointOptions {
    endpoint: String,
    result_format: ResultFormat,
    retry: RetryPolicy,
    enable_pushdown: bool,
    http_proxy: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl EndpointOptions {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, OptionsError> {
        let endpoint = endpoint.into();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(OptionsError::InvalidEndpoint(endpoint));
        }
        Ok(EndpointOptions {
            endpoint,
            result_format: ResultFormat::default(),
            retry: RetryPolicy::default(),
            enable_pushdown: true,
            http_proxy: None,
            username: None,
            password: None,
        })
    }

    pub fn with_result_format(mut self, result_format: ResultFormat) -> Self {
        self.result_format = result_format;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Result<Self, OptionsError> {
        if retry.attempts == 0 {
            return Err(OptionsError::ZeroAttempts);
        }
        self.retry = retry;
        Ok(self)
    }

    pub fn with_pushdown(mut self, enable: bool) -> Self {
        self.enable_pushdown = enable;
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.http_proxy = Some(proxy.into());
        self
    }

    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn result_format(&self) -> ResultFormat {
        self.result_format
    }

    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }

    pub fn pushdown_enabled(&self) -> bool {
        self.enable_pushdown
    }

    pub fn http_proxy(&self) -> Option<&str> {
        self.http_proxy.as_deref()
    }

    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username, password)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_scheme_is_validated() {
        EndpointOptions::new("https://example.com/sparql").unwrap();
        EndpointOptions::new("ftp://example.com/sparql").unwrap_err();
    }

    #[test]
    fn retry_must_attempt_at_least_once() {
        let options = EndpointOptions::new("http://example.com/sparql").unwrap();
        let result = options.with_retry(RetryPolicy {
            attempts: 0,
            request_timeout: Duration::from_secs(1),
        });
        assert!(matches!(result, Err(OptionsError::ZeroAttempts)));
    }

    #[test]
    fn defaults() {
        let options = EndpointOptions::new("http://example.com/sparql").unwrap();
        assert!(options.pushdown_enabled());
        assert_eq!(options.result_format().media_type(),
            "application/sparql-results+xml");
    }
}
