//! Diagnostic log of live contacts.
//!
//! Emits one tab-separated line per handled contact, listing every
//! attached marker slot with its renumbered index, the triggering phase
//! code, position and radius. Consecutive identical lines are suppressed
//! so a stationary finger does not flood the output.

use std::io::{self, Write};

use crate::input::Contact;
use crate::model::LOG_TAG;

use super::pool::TouchViewPool;

pub struct DiagnosticLog {
    previous: String,
    sink: Box<dyn Write>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::with_sink(Box::new(io::stdout()))
    }

    pub fn with_sink(sink: Box<dyn Write>) -> Self {
        Self {
            previous: String::new(),
            sink,
        }
    }

    /// Emits one line describing the attached slots after `contact` was
    /// handled. Indexes are renumbered over attached slots only, so the
    /// first entry is always `[0]` regardless of pool layout.
    pub fn record(&mut self, pool: &TouchViewPool, contact: &Contact) {
        let mut line = format!("{}: ", LOG_TAG);
        let mut index = 0usize;
        for (_, view) in pool.views() {
            if !view.is_attached() {
                continue;
            }
            let pos = view.position();
            line.push_str(&format!(
                "[{}]<{}> c:({:.2}, {:.2}) r:{:.2}\t",
                index,
                contact.phase.code(),
                pos.x,
                pos.y,
                contact.radius,
            ));
            index += 1;
        }
        if line == self.previous {
            return;
        }
        self.previous.clear();
        self.previous.push_str(&line);
        // A broken sink degrades the log, never the overlay.
        let _ = writeln!(self.sink, "{}", line);
        let _ = self.sink.flush();
    }
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DiagnosticLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticLog")
            .field("previous", &self.previous)
            .finish_non_exhaustive()
    }
}
