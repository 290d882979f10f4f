//! CSV output backend.
//!
//! Creates `events.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::EventWriter;
use crate::{EventRow, OutputResult};

/// File name of the event log inside the output directory.
pub const EVENTS_FILE: &str = "events.csv";

/// Column order of [`EVENTS_FILE`].
pub const EVENTS_HEADER: [&str; 9] =
    ["time_secs", "controller", "agent", "event", "x", "y", "z", "distance", "detail"];

/// Writes controller events to one CSV file.
pub struct CsvEventWriter {
    events:   Writer<File>,
    finished: bool,
}

impl CsvEventWriter {
    /// Create (or truncate) `events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(EVENTS_HEADER)?;
        Ok(Self {
            events,
            finished: false,
        })
    }
}

impl EventWriter for CsvEventWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            let (x, y, z) = match row.position {
                Some(p) => (p.x.to_string(), p.y.to_string(), p.z.to_string()),
                None    => (String::new(), String::new(), String::new()),
            };
            self.events.write_record(&[
                format!("{:.3}", row.time_secs),
                row.controller.to_string(),
                row.agent.to_string(),
                row.kind.as_str().to_string(),
                x,
                y,
                z,
                row.distance.map(|d| d.to_string()).unwrap_or_default(),
                row.detail.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        Ok(())
    }
}
