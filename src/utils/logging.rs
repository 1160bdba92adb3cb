use log::{Level, log_enabled, trace};
use std::time::Instant;

/// Trace-level timer around a labelled section. Costs nothing unless trace
/// logging is enabled.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Option<Instant>,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        let start = log_enabled!(Level::Trace).then(|| {
            trace!("{label} started");
            Instant::now()
        });
        Self { label, start }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        if let Some(start) = self.start {
            trace!("{} took {} ns", self.label, start.elapsed().as_nanos());
        }
    }
}
