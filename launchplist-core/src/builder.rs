//! The record builder: generic typed setters, calendar accumulation, build/reset.
//!
//! [`LaunchPlist`] owns a single [`Record`]. Setters validate first and write
//! second, so a rejected call leaves the record exactly as it was. Every
//! mutating call returns `&mut Self`, which lets setters chain with `?`:
//!
//! ```
//! use launchplist_core::LaunchPlist;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut job = LaunchPlist::new();
//! job.set_label("com.example.backup")?
//!     .set_program_args(vec!["/usr/local/bin/backup", "--quiet"])?
//!     .add_calendar_interval(json!({"Hour": 3, "Minute": 30}))?
//!     .set_run_at_load(false)?;
//! let xml = job.build()?;
//! assert!(xml.contains("<key>Label</key>"));
//! # Ok(())
//! # }
//! ```

use plist::{Dictionary, Value as PlistValue};
use serde_json::Value;

use crate::calendar::{CalendarEntry, CalendarIntervals};
use crate::error::ValidationError;
use crate::keys::START_CALENDAR_INTERVAL;
use crate::value::{coerce_boolean, coerce_number, coerce_object, coerce_string, normalize_array};

/// The accumulated key/value data of one launchd job, in insertion order.
pub type Record = Dictionary;

/// Fluent builder over one launchd job record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchPlist {
    record: Record,
}

impl LaunchPlist {
    /// Start from an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-seeded record, e.g. one parsed from an existing plist.
    pub fn with_record(record: Record) -> Self {
        Self { record }
    }

    /// Read-only view of the record.
    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn get(&self, key: &str) -> Option<&PlistValue> {
        self.record.get(key)
    }

    /// `Label`, if one has been set as a string.
    pub fn label(&self) -> Option<&str> {
        self.record
            .get(crate::keys::LABEL)
            .and_then(PlistValue::as_string)
    }

    // -----------------------------------------------------------------------
    // Generic typed setters
    // -----------------------------------------------------------------------

    /// Store a boolean under `key`.
    pub fn add_boolean(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self, ValidationError> {
        let b = coerce_boolean(key, &value.into())?;
        Ok(self.insert(key, PlistValue::Boolean(b)))
    }

    /// Store a string under `key`. Numbers are stringified; a non-empty
    /// `allowed` list restricts the value to its members.
    pub fn add_string(
        &mut self,
        key: &str,
        value: impl Into<Value>,
        allowed: &[&str],
    ) -> Result<&mut Self, ValidationError> {
        let s = coerce_string(key, &value.into(), allowed)?;
        Ok(self.insert(key, PlistValue::String(s)))
    }

    /// Store an array under `key`, wrapping scalars and emptying blanks.
    pub fn add_array(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self, ValidationError> {
        let items = normalize_array(key, &value.into())?;
        Ok(self.insert(key, PlistValue::Array(items)))
    }

    /// Store a number under `key`; numeric strings are parsed.
    pub fn add_number(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self, ValidationError> {
        let n = coerce_number(key, &value.into())?;
        Ok(self.insert(key, n))
    }

    /// Store a dictionary under `key`. Arrays are rejected.
    pub fn add_object(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self, ValidationError> {
        let dict = coerce_object(key, &value.into())?;
        Ok(self.insert(key, PlistValue::Dictionary(dict)))
    }

    pub(crate) fn insert(&mut self, key: &str, value: PlistValue) -> &mut Self {
        self.record.insert(key.to_owned(), value);
        self
    }

    // -----------------------------------------------------------------------
    // StartCalendarInterval
    // -----------------------------------------------------------------------

    /// Validate `entry` and merge it into `StartCalendarInterval`.
    ///
    /// The first entry is stored as a dictionary; the second turns the value
    /// into an array of both; later entries are appended. Whatever is already
    /// stored is kept as-is, only `entry` is validated.
    pub fn add_calendar_interval(
        &mut self,
        entry: impl Into<Value>,
    ) -> Result<&mut Self, ValidationError> {
        let entry = CalendarEntry::from_value(&entry.into())?;
        let mut intervals = self.calendar_intervals();
        intervals.push(&entry);
        if let Some(value) = intervals.into_plist() {
            self.insert(START_CALENDAR_INTERVAL, value);
        }
        Ok(self)
    }

    /// The current `StartCalendarInterval` collection.
    pub fn calendar_intervals(&self) -> CalendarIntervals {
        CalendarIntervals::from_stored(self.record.get(START_CALENDAR_INTERVAL))
    }

    /// Drop `StartCalendarInterval`. Absent is fine.
    pub fn delete_start_calendar_interval(&mut self) -> &mut Self {
        self.record.remove(START_CALENDAR_INTERVAL);
        self
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Serialize the record as an XML property list.
    pub fn build(&self) -> Result<String, plist::Error> {
        let mut buf = Vec::new();
        plist::to_writer_xml(&mut buf, &self.record)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Discard everything set so far.
    pub fn reset(&mut self) -> &mut Self {
        self.record = Record::new();
        self
    }
}
