//! Calendar-independent date, counted in Julian day numbers.

use std::ops::Sub;

/// A calendar-independent date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar
/// (JDN 0), and ends at JDN `u32::MAX`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a proleptic Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if `month` or `day` does not name a real day of that
    /// year (e.g. February 30), or if the day falls outside the JDN range.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert_eq!(None, Date::from_gregorian(1900, 2, 29));
    /// assert_eq!(None, Date::from_gregorian(i32::MIN, 1, 1));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=days_in_month(year, month)).contains(&day) {
            return None;
        }
        // Shift the year to start in March so the leap day closes it.
        let (y, m) = if month <= 2 {
            (i64::from(year) - 1, i64::from(month) + 9)
        } else {
            (i64::from(year), i64::from(month) - 3)
        };
        let era = y.div_euclid(400);
        let year_of_era = y.rem_euclid(400);
        let day_of_year = (153 * m + 2) / 5 + i64::from(day) - 1;
        let day_of_era = 365 * year_of_era + year_of_era / 4 - year_of_era / 100 + day_of_year;
        // JDN of 0000-03-01 is 1721120.
        u32::try_from(era * 146097 + day_of_era + 1721120)
            .map(Self::from_jdn)
            .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let days = i64::from(self.jdn) - 1721120;
        let era = days.div_euclid(146097);
        let day_of_era = days.rem_euclid(146097);
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let m = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * m + 2) / 5 + 1;
        let (year_shift, month) = if m < 10 { (0, m + 3) } else { (1, m - 9) };
        // u32 JDNs stay within about 11.7 million years, well inside i32.
        let year = era * 400 + year_of_era + year_shift;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(1976, 10, 1).unwrap();
    /// assert_eq!("1976-10-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Moves the date by `days`, `None` if the result leaves the JDN range.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(1900, 1, 31).unwrap();
    /// assert_eq!("1900-02-01", date.checked_add_days(1).unwrap().iso_gregorian());
    /// assert_eq!(None, Date::from_jdn(0).checked_add_days(-1));
    /// ```
    pub fn checked_add_days(&self, days: i32) -> Option<Self> {
        self.jdn.checked_add_signed(days).map(Self::from_jdn)
    }
}

/// Signed number of days from `rhs` to `self`.
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        i64::from(self.jdn) - i64::from(rhs.jdn)
    }
}

#[cfg(feature = "clock")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = crate::chinese::Error;
    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;
        // 0001-01-01 (day 1 from CE) is JDN 1721426.
        u32::try_from(i64::from(date.num_days_from_ce()) + 1721425)
            .map(Self::from_jdn)
            .map_err(|_| crate::chinese::Error::YearOutOfRange)
    }
}

#[cfg(feature = "clock")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = crate::chinese::Error;
    fn try_from(date: Date) -> Result<Self, Self::Error> {
        let (y, m, d) = date.gregorian();
        chrono::NaiveDate::from_ymd_opt(y, m as u32, d as u32)
            .ok_or(crate::chinese::Error::YearOutOfRange)
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && year % 100 != 0 || year % 400 == 0
}

/// Number of days in a Gregorian month, `0` if `month` is not in `1..=12`.
///
/// # Example
///
/// ```
/// use nongli::date::days_in_month;
///
/// assert_eq!(28, days_in_month(1900, 2));
/// assert_eq!(29, days_in_month(2000, 2));
/// ```
pub fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + is_leap_year(year) as i32,
        _ => 0,
    }
}
