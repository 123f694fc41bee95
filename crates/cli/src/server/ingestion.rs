use planeboard_domain::DomainError;
use planeboard_infrastructure::ingestion::{IngestionSender, JsonLinesSource, SourceStats};
use tokio::io::BufReader;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const STDIN_SOURCE: &str = "-";

/// Feed `source` (a file path, or `-` for stdin) into the ingestion pipeline.
pub fn spawn_ingest_source(
    source: String,
    sender: IngestionSender,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(source = %source, "Reading messages");

        let run = async {
            if source == STDIN_SOURCE {
                read_stdin(sender).await
            } else {
                let file = tokio::fs::File::open(&source).await.map_err(|e| {
                    DomainError::IngestionDelivery(format!("cannot open {}: {}", source, e))
                })?;
                JsonLinesSource::new(BufReader::new(file), sender).run().await
            }
        };

        tokio::select! {
            _ = shutdown.cancelled() => {
                info!(source = %source, "Ingestion source cancelled");
            }
            result = run => {
                if let Err(e) = result {
                    error!(source = %source, error = %e, "Ingestion source failed");
                }
            }
        }
    })
}

/// Stdin is read on a detached OS thread so a pending read never holds up
/// runtime shutdown. The thread ends at EOF or once the pipeline is closed.
async fn read_stdin(sender: IngestionSender) -> Result<SourceStats, DomainError> {
    let (done_tx, done_rx) = oneshot::channel();

    std::thread::Builder::new()
        .name("planeboard-stdin".to_string())
        .spawn(move || {
            let stdin = std::io::stdin().lock();
            let _ = done_tx.send(JsonLinesSource::new(stdin, sender).run_blocking());
        })
        .map_err(|e| DomainError::IngestionDelivery(format!("cannot spawn stdin reader: {}", e)))?;

    done_rx.await.map_err(|_| {
        DomainError::IngestionDelivery("stdin reader exited without a result".to_string())
    })?
}
