use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// The three form fields forwarded to the relay template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Request body for the EmailJS send endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

/// HTTP client for an EmailJS-compatible email relay
#[derive(Clone)]
pub struct EmailRelayClient {
    endpoint: String,
    client: Client,
}

impl EmailRelayClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build relay HTTP client")?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Deliver one form submission. Any 2xx answer counts as success.
    pub async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        payload: &ContactPayload,
        user_id: &str,
    ) -> Result<()> {
        let url = format!("{}/api/v1.0/email/send", self.endpoint);
        let body = SendRequest {
            service_id,
            template_id,
            user_id,
            template_params: payload,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Failed to reach email relay")?;

        if let Some(status_err) = response.error_for_status_ref().err() {
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow::Error::new(status_err)
                .context(format!("Relay rejected message: {}", detail.trim())));
        }

        Ok(())
    }
}
