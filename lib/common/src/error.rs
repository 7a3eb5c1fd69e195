use std::error::Error;
use thiserror::Error;

/// An error surfaced after the transport collaborator has exhausted its retries.
///
/// Retries only apply to transport-level failures; a response with a remote error status is
/// surfaced immediately, enriched with a human hint where the status is well known.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConnectionError {
    #[error("unable to establish a connection to {endpoint}")]
    Unreachable {
        endpoint: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync + 'static>>,
    },
    #[error("the endpoint {endpoint} answered with status {status}{}", status_hint(*status))]
    RemoteStatus { endpoint: String, status: u16 },
    #[error("the transfer to {endpoint} timed out")]
    Timeout { endpoint: String },
    #[error("the transfer was interrupted")]
    Interrupted,
}

impl ConnectionError {
    pub fn remote_status(endpoint: impl Into<String>, status: u16) -> Self {
        ConnectionError::RemoteStatus {
            endpoint: endpoint.into(),
            status,
        }
    }
}

fn status_hint(status: u16) -> &'static str {
    match status {
        401 | 403 => " (check the authentication credentials)",
        404 => " (check that the endpoint URL points to a SPARQL service)",
        405 => " (the endpoint does not accept the request method)",
        500..=599 => " (the remote server failed to evaluate the query)",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_carry_a_hint() {
        let error = ConnectionError::remote_status("http://example.com/sparql", 404);
        assert!(error.to_string().contains("SPARQL service"));
        let error = ConnectionError::remote_status("http://example.com/sparql", 503);
        assert!(error.to_string().contains("remote server"));
    }

    #[test]
    fn unknown_statuses_have_no_hint() {
        let error = ConnectionError::remote_status("http://example.com/sparql", 418);
        assert!(error.to_string().ends_with("status 418"));
    }
}
