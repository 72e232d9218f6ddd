//! `StartCalendarInterval` entries and their one-or-many accumulation.
//!
//! launchd accepts either a single dictionary or an array of dictionaries
//! under `StartCalendarInterval`. [`CalendarIntervals`] models that as a
//! tagged variant and owns the transitions between the shapes:
//!
//! ```text
//! Empty ──push──▶ Single(a) ──push──▶ Many([a, b]) ──push──▶ Many([a, b, c])
//! ```
//!
//! Once `Many`, the collection never goes back to `Single`. Entries already
//! stored are carried over as-is; only the incoming entry is validated.

use plist::{Dictionary, Value as PlistValue};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::keys::{DAY, HOUR, MINUTE, MONTH, START_CALENDAR_INTERVAL, WEEKDAY};
use crate::parse::{is_empty_object, parse_number, parse_weekday};

/// One calendar trigger. `None` fields are wildcards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarEntry {
    pub minute: Option<i64>,
    pub hour: Option<i64>,
    pub day: Option<i64>,
    pub weekday: Option<i64>,
    pub month: Option<i64>,
}

impl CalendarEntry {
    /// Validate a loosely typed entry such as `{"Hour": 3, "Weekday": "Mon"}`.
    ///
    /// Rejects non-objects and empty objects. Keys other than the five
    /// calendar fields are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let map = value.as_object().ok_or_else(|| {
            ValidationError::new(START_CALENDAR_INTERVAL, "entry must be an object")
        })?;
        if is_empty_object(value) {
            return Err(ValidationError::new(
                START_CALENDAR_INTERVAL,
                "cannot be an empty object",
            ));
        }
        Self::from_map(map)
    }

    fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        let number = |field: &'static str| -> Result<Option<i64>, ValidationError> {
            map.get(field)
                .map(|v| {
                    parse_number(v)
                        .ok_or_else(|| ValidationError::new(field, "key must be a number"))
                })
                .transpose()
        };

        let weekday = map
            .get(WEEKDAY)
            .map(|v| {
                parse_weekday(v).ok_or_else(|| {
                    ValidationError::new(
                        WEEKDAY,
                        "key must be a number or a string containing the day of the week",
                    )
                })
            })
            .transpose()?;

        Ok(Self {
            minute: number(MINUTE)?,
            hour: number(HOUR)?,
            day: number(DAY)?,
            weekday,
            month: number(MONTH)?,
        })
    }

    pub fn to_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        let fields = [
            (MINUTE, self.minute),
            (HOUR, self.hour),
            (DAY, self.day),
            (WEEKDAY, self.weekday),
            (MONTH, self.month),
        ];
        for (key, value) in fields {
            if let Some(v) = value {
                dict.insert(key.to_owned(), PlistValue::Integer(v.into()));
            }
        }
        dict
    }
}

/// The value stored under `StartCalendarInterval`.
///
/// Stored entries are kept opaque: a seeded record may hold keys this crate
/// does not know, or values launchd accepts but [`CalendarEntry`] would
/// normalize, and a merge must not rewrite them.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CalendarIntervals {
    #[default]
    Empty,
    Single(Dictionary),
    Many(Vec<PlistValue>),
}

impl CalendarIntervals {
    /// Read back what a record currently stores under `StartCalendarInterval`.
    ///
    /// A value that is neither a dictionary nor an array is treated as
    /// absent and will be replaced by the next push.
    pub fn from_stored(stored: Option<&PlistValue>) -> Self {
        match stored {
            Some(PlistValue::Dictionary(dict)) => Self::Single(dict.clone()),
            Some(PlistValue::Array(items)) => Self::Many(items.clone()),
            _ => Self::Empty,
        }
    }

    /// Merge one more entry in.
    pub fn push(&mut self, entry: &CalendarEntry) {
        let new = entry.to_dictionary();
        *self = match std::mem::take(self) {
            Self::Empty => Self::Single(new),
            // Only reachable from a seeded `{}`; nothing to keep.
            Self::Single(prev) if prev.is_empty() => Self::Single(new),
            Self::Single(prev) => Self::Many(vec![
                PlistValue::Dictionary(prev),
                PlistValue::Dictionary(new),
            ]),
            Self::Many(mut entries) => {
                entries.push(PlistValue::Dictionary(new));
                Self::Many(entries)
            }
        };
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single(_) => 1,
            Self::Many(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The stored entries that are dictionaries, in order.
    pub fn entries(&self) -> Vec<&Dictionary> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(entry) => vec![entry],
            Self::Many(entries) => entries.iter().filter_map(PlistValue::as_dictionary).collect(),
        }
    }

    /// The plist shape launchd expects, or `None` when there is nothing to store.
    pub fn into_plist(self) -> Option<PlistValue> {
        match self {
            Self::Empty => None,
            Self::Single(entry) => Some(PlistValue::Dictionary(entry)),
            Self::Many(entries) => Some(PlistValue::Array(entries)),
        }
    }
}
