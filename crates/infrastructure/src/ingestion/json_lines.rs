use super::pipeline::IngestionSender;
use planeboard_domain::{DomainError, IncomingMessage};
use std::io::BufRead;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStats {
    pub accepted: u64,
    pub rejected: u64,
}

/// Reads newline-delimited JSON messages and feeds them to the pipeline:
///
/// ```json
/// {"id": 1, "account": "acme", "created_at": "Mon Jan 02 15:04:05 -0700 2006", "text": "hi"}
/// ```
pub struct JsonLinesSource<R> {
    reader: R,
    sender: IngestionSender,
}

impl<R> JsonLinesSource<R> {
    pub fn new(reader: R, sender: IngestionSender) -> Self {
        Self { reader, sender }
    }
}

impl<R: AsyncBufRead + Unpin> JsonLinesSource<R> {
    /// Read to EOF. Malformed lines are logged and skipped; a closed pipeline ends the run.
    pub async fn run(self) -> Result<SourceStats, DomainError> {
        let mut stats = SourceStats::default();
        let mut lines = self.reader.lines();
        let mut line_no = 0u64;

        while let Some(line) = lines.next_line().await.map_err(read_error)? {
            line_no += 1;
            if let Some(message) = decode_line(&line, line_no, &mut stats) {
                self.sender.submit_wait(message).await?;
                stats.accepted += 1;
            }
        }

        finish(stats)
    }
}

impl<R: BufRead> JsonLinesSource<R> {
    /// Same as [`run`](Self::run) for a blocking reader. Must be called off the
    /// async runtime, e.g. from a dedicated thread reading stdin.
    pub fn run_blocking(self) -> Result<SourceStats, DomainError> {
        let mut stats = SourceStats::default();

        for (index, line) in self.reader.lines().enumerate() {
            let line = line.map_err(read_error)?;
            if let Some(message) = decode_line(&line, index as u64 + 1, &mut stats) {
                self.sender.submit_blocking(message)?;
                stats.accepted += 1;
            }
        }

        finish(stats)
    }
}

fn decode_line(line: &str, line_no: u64, stats: &mut SourceStats) -> Option<IncomingMessage> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match serde_json::from_str::<IncomingMessage>(line) {
        Ok(message) => Some(message),
        Err(e) => {
            warn!(line = line_no, error = %e, "Skipping malformed message");
            stats.rejected += 1;
            None
        }
    }
}

fn read_error(e: std::io::Error) -> DomainError {
    DomainError::IngestionDelivery(e.to_string())
}

fn finish(stats: SourceStats) -> Result<SourceStats, DomainError> {
    info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        "Ingestion source finished"
    );
    Ok(stats)
}
