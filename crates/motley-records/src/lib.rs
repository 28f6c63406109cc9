//! Flat-record codec for the Motley person registry.
//!
//! Converts the legacy four-field line format into [`motley_core`] person
//! records. Pure synchronous; no I/O, HTTP, or database dependencies.
//!
//! A logical record is four comma-separated fields —
//! `lastName, name, "zipCode city", colorId` — but one record's fields may
//! be spread over several physical lines. The parser reassembles them with
//! an accumulation buffer and silently drops anything malformed; it never
//! fails.
//!
//! # Quick start
//!
//! ```
//! let records = motley_records::parse_str("Mustermann, Max, 10115 Berlin, 1\n");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].zip_code, "10115");
//! assert_eq!(records[0].city, "Berlin");
//! ```

mod parse;

pub use parse::{parse_lines, parse_str};
