//! launchplist core library — validated builder for launchd property lists.
//!
//! - [`builder`] — [`LaunchPlist`], the generic typed setters, build/reset
//! - [`launchd`] — named setters for every supported launchd key
//! - [`calendar`] — `StartCalendarInterval` entries and accumulation
//! - [`job`] — YAML/JSON job files applied through the setters
//! - [`writer`] — atomic plist writes and reads
//! - [`error`] — [`ValidationError`], [`LaunchError`]

pub mod builder;
pub mod calendar;
pub mod error;
pub mod job;
pub mod keys;
pub mod launchd;
pub mod parse;
pub mod value;
pub mod writer;

pub use builder::{LaunchPlist, Record};
pub use calendar::{CalendarEntry, CalendarIntervals};
pub use error::{LaunchError, ValidationError};
pub use job::{build_job, load_job, parse_job, JobSpec};
pub use value::KeepAlive;
pub use writer::{read_plist, write_launch_agent, write_plist_at, write_plist_to};
