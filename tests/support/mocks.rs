// tests/support/mocks.rs
use async_trait::async_trait;
use inno_core::infrastructure::db::{QueryExecutor, SqlParam};
use serde_json::Value;
use std::io;
use std::sync::{Arc, Mutex};

/// Scripted executor: returns the configured rows, or fails like a driver.
#[derive(Default)]
pub struct StubExecutor {
    rows: Vec<Value>,
    fail: bool,
    seen: Mutex<Vec<(String, Vec<SqlParam>)>>,
}

impl StubExecutor {
    pub fn returning(rows: Vec<Value>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<SqlParam>)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryExecutor for StubExecutor {
    type Row = Value;

    async fn fetch_all(&self, query: &str, params: &[SqlParam]) -> Result<Vec<Value>, sqlx::Error> {
        self.seen
            .lock()
            .unwrap()
            .push((query.to_owned(), params.to_vec()));
        if self.fail {
            return Err(sqlx::Error::Protocol(
                "password authentication failed for user \"app\"".into(),
            ));
        }
        Ok(self.rows.clone())
    }
}

/// In-memory log sink for asserting on emitted events.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Install a thread-local subscriber writing into this capture.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
