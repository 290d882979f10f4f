//! `tether-output`: event logs for the tether framework.
//!
//! | Backend | Files created |
//! |---------|---------------|
//! | CSV     | `events.csv`  |
//!
//! Backends implement [`EventWriter`] and are driven by [`EventLogObserver`],
//! which implements `tether_squad::SquadObserver` and turns every controller
//! callback into one [`EventRow`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use tether_output::{CsvEventWriter, EventLogObserver};
//!
//! let writer = CsvEventWriter::new(Path::new("./output"))?;
//! let mut squad = SquadBuilder::new(config)
//!     .observer(EventLogObserver::new(writer))
//!     .build()?;
//! // ... attach, command, tick ...
//! let mut log = squad.into_observer();
//! log.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvEventWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EventLogObserver;
pub use row::{EventKind, EventRow};
pub use writer::EventWriter;
