//! HTTP transport seam.
//!
//! The request pipeline only needs "POST this JSON body, give me the
//! response body back", so that is the whole trait. The default
//! implementation rides on `reqwest`; tests and embedders can inject
//! anything else.
//!
//! This layer imposes no timeout of its own. Callers that need one
//! configure it on the `reqwest::Client` they pass to
//! [`HttpTransport::with_client`].

use async_trait::async_trait;

use crate::{PaygridError, Result};

/// Minimal transport contract: one blocking round trip per call.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// POST `body` as `application/json` to `url` and return the full
    /// response body.
    async fn post(&self, url: &str, body: String) -> Result<String>;
}

/// Default `reqwest`-backed transport.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a default client (no timeout).
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().build().map_err(|err| {
            PaygridError::Configuration(format!("failed to build HTTP client: {}", err))
        })?;
        Ok(Self { client })
    }

    /// Create a transport from a preconfigured client. Use this to set
    /// timeouts, proxies or TLS options.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn post(&self, url: &str, body: String) -> Result<String> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| PaygridError::connection(url, err))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| PaygridError::connection(url, err))?;

        if !status.is_success() {
            return Err(PaygridError::connection(
                url,
                format!("HTTP {}: {}", status.as_u16(), text),
            ));
        }

        Ok(text)
    }
}
