use planeboard_application::use_cases::IngestEntryUseCase;
use planeboard_domain::{DomainError, IncomingMessage};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Producer half of the ingestion channel. Cheap to clone.
#[derive(Clone)]
pub struct IngestionSender {
    sender: mpsc::Sender<IncomingMessage>,
}

impl IngestionSender {
    /// Hand a message to the pipeline without waiting.
    ///
    /// Returns `Ok(false)` when the channel is full and the message was dropped.
    pub fn submit(&self, message: IncomingMessage) -> Result<bool, DomainError> {
        match self.sender.try_send(message) {
            Ok(()) => Ok(true),
            Err(mpsc::error::TrySendError::Full(message)) => {
                warn!(id = message.id, account = %message.account, "Ingestion channel full, dropping message");
                Ok(false)
            }
            Err(mpsc::error::TrySendError::Closed(_)) => Err(DomainError::IngestionDelivery(
                "ingestion channel closed".to_string(),
            )),
        }
    }

    /// Like [`submit`](Self::submit) but waits for room instead of dropping.
    pub async fn submit_wait(&self, message: IncomingMessage) -> Result<(), DomainError> {
        self.sender
            .send(message)
            .await
            .map_err(|_| DomainError::IngestionDelivery("ingestion channel closed".to_string()))
    }

    /// Blocking form of [`submit_wait`](Self::submit_wait) for producers running on
    /// their own thread. Panics if called from within the async runtime.
    pub fn submit_blocking(&self, message: IncomingMessage) -> Result<(), DomainError> {
        self.sender
            .blocking_send(message)
            .map_err(|_| DomainError::IngestionDelivery("ingestion channel closed".to_string()))
    }
}

/// Bounded channel between producers and the store's insert path.
pub struct IngestionPipeline;

impl IngestionPipeline {
    pub fn spawn(
        use_case: Arc<IngestEntryUseCase>,
        capacity: usize,
        shutdown: CancellationToken,
    ) -> (IngestionSender, JoinHandle<u64>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));

        info!(capacity, "Ingestion pipeline started");

        let handle = tokio::spawn(consume_loop(use_case, receiver, shutdown));
        (IngestionSender { sender }, handle)
    }
}

async fn consume_loop(
    use_case: Arc<IngestEntryUseCase>,
    mut receiver: mpsc::Receiver<IncomingMessage>,
    shutdown: CancellationToken,
) -> u64 {
    let mut stored = 0u64;
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                info!(stored, "Ingestion pipeline shutting down");
                break;
            }
            maybe_message = receiver.recv() => {
                let Some(message) = maybe_message else {
                    info!(stored, "Ingestion channel closed");
                    break;
                };
                let id = message.id;
                match use_case.execute(message).await {
                    Ok(()) => {
                        stored += 1;
                        debug!(id, "Message ingested");
                    }
                    Err(e) => warn!(id, error = %e, "Dropping message"),
                }
            }
        }
    }
    stored
}
