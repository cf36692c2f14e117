//! Conversion between Gregorian dates and the Chinese lunisolar calendar.
//!
//! Lunar years 1900 through 2049 are supported, from a compiled-in table of
//! month lengths and leap months. Dates outside that range are rejected, never
//! approximated.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use nongli::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(2451545, date.jdn());
//! assert_eq!("2000-01-31", date.checked_add_days(30).unwrap().iso_gregorian());
//! ```
//!
//! Chinese lunisolar calendar:
//!
//! ```
//! use nongli::chinese::ChineseCalendar;
//!
//! let date = ChineseCalendar::from_solar_date(1976, 10, 1).unwrap();
//!
//! assert_eq!(ChineseCalendar::new(1976, 8, 8, true), date);
//! assert_eq!("丙辰年閏八月初八", date.to_string());
//! assert_eq!(Ok(ChineseCalendar::new(1976, 8, 9, true)), date.next_day());
//! ```
//!
//! # Features
//!
//! - `clock` (default): conversions from `chrono` timestamps and
//!   [`ChineseCalendar::today`](chinese::ChineseCalendar::today).
//!
//! Diagnostics are emitted through `tracing`; install a subscriber to see
//! them.

pub mod chinese;
pub mod date;

pub use chinese::{ChineseCalendar, Error};
pub use date::Date;
