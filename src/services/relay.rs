use tokio::sync::mpsc;

use crate::relay::{ContactPayload, EmailRelayClient};

/// Relay-specific identifiers, supplied by configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
}

impl From<&crate::config::RelayConfig> for RelayCredentials {
    fn from(config: &crate::config::RelayConfig) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.user_id.clone(),
        }
    }
}

/// Relay request types
#[derive(Debug, Clone)]
pub enum RelayRequest {
    /// Send a contact-form submission
    Send {
        submission_id: u64,
        payload: ContactPayload,
    },
}

/// Relay response types
#[derive(Debug)]
pub enum RelayResponse {
    SendResult {
        submission_id: u64,
        result: Result<(), anyhow::Error>,
    },
}

/// Worker that forwards submissions to the relay client
struct RelayService {
    client: EmailRelayClient,
    credentials: RelayCredentials,
    response_tx: mpsc::UnboundedSender<RelayResponse>,
}

impl RelayService {
    /// Run one request on its own task so the receive loop never blocks.
    /// Submissions are not serialized: two rapid sends are both delivered.
    fn dispatch(&self, request: RelayRequest) {
        let client = self.client.clone();
        let credentials = self.credentials.clone();
        let response_tx = self.response_tx.clone();

        tokio::spawn(async move {
            let response = Self::execute_request(&client, &credentials, request).await;
            let _ = response_tx.send(response);
        });
    }

    async fn execute_request(
        client: &EmailRelayClient,
        credentials: &RelayCredentials,
        request: RelayRequest,
    ) -> RelayResponse {
        match request {
            RelayRequest::Send {
                submission_id,
                payload,
            } => {
                tracing::debug!(submission_id, "relay send: start");
                let result = client
                    .send(
                        &credentials.service_id,
                        &credentials.template_id,
                        &payload,
                        &credentials.user_id,
                    )
                    .await;
                tracing::debug!(submission_id, success = result.is_ok(), "relay send: end");

                RelayResponse::SendResult {
                    submission_id,
                    result,
                }
            }
        }
    }
}

/// Spawn the relay service worker
///
/// The worker stops when every request sender has been dropped.
pub fn spawn_relay_service(
    client: EmailRelayClient,
    credentials: RelayCredentials,
) -> (
    mpsc::UnboundedSender<RelayRequest>,
    mpsc::UnboundedReceiver<RelayResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<RelayRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<RelayResponse>();

    tokio::spawn(async move {
        let service = RelayService {
            client,
            credentials,
            response_tx,
        };

        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }
        tracing::debug!("relay service: request channel closed");
    });

    (request_tx, response_rx)
}
