//! optimization::logging — injected logging port.
//!
//! Purpose
//! -------
//! Give every solver an explicit logger handle at construction instead of
//! reaching for process-wide state. The handle speaks the `log` crate's
//! [`Log`] trait, so any existing `log` backend can be plugged in, and the
//! default handle simply forwards to whatever global logger the host
//! application installed.
//!
//! Conventions
//! -----------
//! - Records are emitted with the target `"boxopt"`.
//! - The handle is cheap to clone (`Arc`), and clones share one sink.
//! - [`RecordingLog`] is an in-memory sink for reporting layers and tests
//!   that need to inspect emitted records.
use log::{Level, Log, Metadata, Record};
use std::{
    fmt,
    sync::{Arc, Mutex},
};

const TARGET: &str = "boxopt";

/// Logger handle threaded through solver constructors.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn Log>,
}

impl Logger {
    /// Wrap an explicit sink.
    pub fn new(sink: Arc<dyn Log>) -> Self {
        Self { sink }
    }

    /// Handle that forwards to the globally installed `log` backend.
    pub fn global() -> Self {
        Self::new(Arc::new(GlobalFacade))
    }

    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        let metadata = Metadata::builder().level(level).target(TARGET).build();
        if !self.sink.enabled(&metadata) {
            return;
        }
        self.sink.log(&Record::builder().metadata(metadata).args(args).build());
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::global()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("target", &TARGET).finish_non_exhaustive()
    }
}

struct GlobalFacade;

impl Log for GlobalFacade {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level() && log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        log::logger().log(record);
    }

    fn flush(&self) {
        log::logger().flush();
    }
}

/// In-memory `log` sink that keeps every record's level and rendered message.
#[derive(Debug, Default)]
pub struct RecordingLog {
    records: Mutex<Vec<(Level, String)>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<(Level, String)> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Messages recorded at exactly `level`.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records().into_iter().filter(|(l, _)| *l == level).map(|(_, msg)| msg).collect()
    }
}

impl Log for RecordingLog {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let entry = (record.level(), record.args().to_string());
        match self.records.lock() {
            Ok(mut guard) => guard.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }

    fn flush(&self) {}
}
