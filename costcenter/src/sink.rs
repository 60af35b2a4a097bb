use costcenter_core::{Branch, Outcome, RecordShape, RecordSink};

/// Default sink: one `tracing` event per outcome.
///
/// Decoded records are emitted at `INFO` with the branch, record shape,
/// count and the records themselves as a structured debug field. Failures
/// are emitted at `ERROR` with the error kind and message. Each outcome is
/// a single event, so concurrent branches never interleave within one.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// Create the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RecordSink for TracingSink {
    fn record(&self, branch: Branch, outcome: Outcome<'_>) {
        if let Outcome::Failed(err) = outcome {
            tracing::error!(
                branch = %branch,
                kind = err.kind(),
                error = %err,
                "branch failed"
            );
            return;
        }
        tracing::info!(
            branch = %branch,
            shape = outcome.shape().map_or("", RecordShape::as_str),
            count = outcome.len(),
            records = ?outcome,
            "decoded records"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use costcenter_core::CostCenterError;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = out.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn failures_are_error_events() {
        let err = CostCenterError::transport("connection refused");
        let log = capture(|| TracingSink.record(Branch::CostCenterName, Outcome::Failed(&err)));
        assert!(log.contains("ERROR"));
        assert!(log.contains("branch failed"));
        assert!(log.contains("CostCenterName"));
        assert!(log.contains("API request error: connection refused"));
    }

    #[test]
    fn records_are_info_events_with_count() {
        let log = capture(|| TracingSink.record(Branch::Header, Outcome::Texts(&[])));
        assert!(log.contains("INFO"));
        assert!(log.contains("decoded records"));
        assert!(log.contains("count=0"));
        assert!(log.contains("shape=\"text\"") || log.contains("shape=text"));
    }
}
