//! Console reporter.

use std::io::{self, Stderr, Stdout, Write};
use std::sync::Mutex;

use serde_json::json;
use tracing::error;

use storefront_catalog::PageData;
use storefront_core::PageError;
use storefront_infra::Reporter;

/// Prints the page to `out` on success and the error to `err` on failure, each
/// framed with the program name.
#[derive(Debug)]
pub struct ConsoleReporter<O, E> {
    name: String,
    out: Mutex<O>,
    err: Mutex<E>,
}

impl ConsoleReporter<Stdout, Stderr> {
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdout(), io::stderr())
    }
}

impl<O: Write + Send, E: Write + Send> ConsoleReporter<O, E> {
    pub fn new(name: impl Into<String>, out: O, err: E) -> Self {
        Self {
            name: name.into(),
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    pub fn into_parts(self) -> (O, E) {
        let out = self.out.into_inner().unwrap_or_else(|p| p.into_inner());
        let err = self.err.into_inner().unwrap_or_else(|p| p.into_inner());
        (out, err)
    }

    pub fn flush(&self) -> io::Result<()> {
        if let Ok(mut out) = self.out.lock() {
            out.flush()?;
        }
        if let Ok(mut err) = self.err.lock() {
            err.flush()?;
        }
        Ok(())
    }
}

/// The JSON document printed for a failure.
pub fn failure_body(err: &PageError) -> serde_json::Value {
    json!({
        "error": err.kind(),
        "message": err.to_string(),
    })
}

fn framed(name: &str, status: &str, body: &str) -> String {
    format!("\n====== {name}: {status} Result:\n{body}\n====== {status}\n")
}

fn write_to<W: Write>(sink: &Mutex<W>, text: &str) {
    let result = match sink.lock() {
        Ok(mut w) => w.write_all(text.as_bytes()),
        Err(_) => Err(io::Error::other("console writer poisoned")),
    };
    if let Err(e) = result {
        error!(error = %e, "failed to write result");
    }
}

impl<O: Write + Send, E: Write + Send> Reporter for ConsoleReporter<O, E> {
    fn on_success(&self, page: &PageData) {
        match serde_json::to_string_pretty(page) {
            Ok(body) => write_to(&self.out, &framed(&self.name, "SUCCESS", &body)),
            Err(e) => error!(error = %e, "failed to serialize page"),
        }
    }

    fn on_failure(&self, err: &PageError) {
        let body = serde_json::to_string_pretty(&failure_body(err))
            .unwrap_or_else(|_| err.to_string());
        write_to(&self.err, &framed(&self.name, "FAILURE", &body));
    }
}
