//! Outbound relay of enquiries to the form collection endpoint.

use super::Enquiry;
use crate::config::SiteConfig;
use std::time::Duration;
use thiserror::Error;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("endpoint responded with status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),
}

/// Sends one enquiry. Called once per submission, never retried.
pub trait Submitter {
    fn submit(&self, enquiry: &Enquiry) -> Result<(), SubmitError>;
}

/// Posts enquiries as `application/x-www-form-urlencoded` with a timeout.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.form.endpoint, config.form.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Submitter for HttpSubmitter {
    fn submit(&self, enquiry: &Enquiry) -> Result<(), SubmitError> {
        let response = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", FORM_CONTENT_TYPE)
            .send_string(&enquiry.to_urlencoded());

        match response {
            Ok(resp) if (200..300).contains(&resp.status()) => Ok(()),
            Ok(resp) => Err(SubmitError::Status(resp.status())),
            Err(ureq::Error::Status(code, _)) => Err(SubmitError::Status(code)),
            Err(err) => Err(SubmitError::Transport(err.to_string())),
        }
    }
}
