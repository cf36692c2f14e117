//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序採用逐年預製的夏曆編碼表（見 [`year_info`]）編算 1900–2049 年的夏曆。
//! 所有換算、比較與加減日均經由「日序」（自夏曆 1900 年正月初一起算的日數）進行。

use std::cmp::Ordering;
use std::fmt::{self as std_fmt, Display};

use tracing::debug;

use crate::date::Date;

pub mod fmt;
mod offset;
pub mod year_info;

use year_info::YearInfo;

/// 支持的首個夏曆年
pub const FIRST_YEAR: i32 = 1900;
/// 支持的末個夏曆年
pub const LAST_YEAR: i32 = 2049;

/// 夏曆 1900 年正月初一，即公曆 1900-01-31，日序起點。
const EPOCH_JDN: u32 = 2415051;

/// 換算或驗證失敗的原因。
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Error {
    #[error("year out of range [1900, 2049]")]
    YearOutOfRange,
    #[error("month out of range [1, 12]")]
    MonthOutOfRange,
    #[error("day out of range for the month")]
    DayOutOfRange,
    #[error("not a leap month")]
    NotLeapMonth,
    #[error("not a valid Gregorian date")]
    InvalidSolarDate,
}

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月稱「冬月」「臘月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

/// 夏曆日期。
///
/// 各字段可任意組合，未必是有效日期；換算前須經 [`validate`](Self::validate)
/// 檢查，換算類方法亦會自行驗證。
///
/// # 用例
///
/// ```
/// use nongli::chinese::ChineseCalendar;
///
/// let date = ChineseCalendar::from_solar_date(1976, 10, 1).unwrap();
/// assert_eq!(ChineseCalendar::new(1976, 8, 8, true), date);
/// assert_eq!("1976-10-01", date.to_solar_date().unwrap().iso_gregorian());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ChineseCalendar {
    /// 年，以正月為首
    pub year: i32,
    /// 月序號，`1..=12`
    pub month: i32,
    /// 日，自 1 起
    pub day: i32,
    /// 是否為閏月
    pub is_leap: bool,
}

impl ChineseCalendar {
    /// 以各字段直接構造，不作驗證。
    pub const fn new(year: i32, month: i32, day: i32, is_leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap,
        }
    }

    /// 檢查日期是否有效，依次檢查年、月、閏月、日。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::{ChineseCalendar, Error};
    ///
    /// assert_eq!(Ok(()), ChineseCalendar::new(1976, 8, 1, true).validate());
    /// assert_eq!(
    ///     Err(Error::NotLeapMonth),
    ///     ChineseCalendar::new(1900, 1, 1, true).validate()
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        let info = YearInfo::get(self.year).ok_or(Error::YearOutOfRange)?;
        if !(1..=12).contains(&self.month) {
            return Err(Error::MonthOutOfRange);
        }
        if self.is_leap && info.leap_month() != self.month {
            return Err(Error::NotLeapMonth);
        }
        if !(1..=info.month_length(self.month, self.is_leap)).contains(&self.day) {
            return Err(Error::DayOutOfRange);
        }
        Ok(())
    }

    /// 由公曆日期求夏曆日期。
    ///
    /// 不在 1900-01-31 至 2050-01-22 間則回報 [`Error::YearOutOfRange`]，
    /// 年份在範圍內而月、日不存在（如 2 月 30 日）則回報 [`Error::InvalidSolarDate`]。
    pub fn from_solar_date(year: i32, month: i32, day: i32) -> Result<Self, Error> {
        // 夏曆 2049 年末日落在公曆 2050 年
        if !(FIRST_YEAR..=LAST_YEAR + 1).contains(&year) {
            debug!(year, "solar year not covered");
            return Err(Error::YearOutOfRange);
        }
        let date = Date::from_gregorian(year, month, day).ok_or(Error::InvalidSolarDate)?;
        Self::from_date(date)
    }

    /// 由 [`Date`] 求夏曆日期。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::Date;
    /// use nongli::chinese::ChineseCalendar;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(
    ///     Ok(ChineseCalendar::new(1999, 11, 25, false)),
    ///     ChineseCalendar::from_date(date)
    /// );
    /// ```
    pub fn from_date(date: Date) -> Result<Self, Error> {
        let offset = i32::try_from(date - epoch()).map_err(|_| Error::YearOutOfRange)?;
        offset::from_offset(offset)
    }

    /// 由時間戳求夏曆日期，取時間戳所在時區的日期，忽略時刻。
    #[cfg(feature = "clock")]
    pub fn from_time<Tz: chrono::TimeZone>(time: &chrono::DateTime<Tz>) -> Result<Self, Error> {
        use chrono::Datelike;
        let naive = time.date_naive();
        Self::from_solar_date(naive.year(), naive.month() as i32, naive.day() as i32)
    }

    /// 取得本地時區的今日。
    ///
    /// # Panics
    ///
    /// 若系統時鐘不在 1900-01-31 至 2050-01-22 間則 panic。
    #[cfg(feature = "clock")]
    pub fn today() -> Self {
        Self::from_time(&chrono::Local::now())
            .unwrap_or_else(|e| panic!("system date not convertible: {}", e))
    }

    /// 轉為公曆日期，先行驗證。
    pub fn to_solar_date(&self) -> Result<Date, Error> {
        self.validate()?;
        epoch()
            .checked_add_days(offset::to_offset(self)?)
            .ok_or(Error::YearOutOfRange)
    }

    /// 同 [`to_solar_date`](Self::to_solar_date)，但出錯即 panic。
    ///
    /// 僅用於已經驗證過的日期；未經驗證的外部輸入應使用
    /// [`to_solar_date`](Self::to_solar_date)。
    ///
    /// # Panics
    ///
    /// 若日期無效則 panic。
    pub fn must_to_solar_date(&self) -> Date {
        self.to_solar_date()
            .unwrap_or_else(|e| panic!("{:?} is not a valid date: {}", self, e))
    }

    /// 轉為 `chrono` 的公曆日期。
    #[cfg(feature = "clock")]
    pub fn to_naive_date(&self) -> Result<chrono::NaiveDate, Error> {
        self.to_solar_date()?.try_into()
    }

    /// 比較兩日期先後。任一方無效則回報其錯誤。
    pub fn compare(&self, other: &Self) -> Result<Ordering, Error> {
        Ok(self.offset()?.cmp(&other.offset()?))
    }

    /// 嚴格早於 `other` 則為 `true`。任一方無效則為 `false`。
    pub fn before(&self, other: &Self) -> bool {
        self.compare(other) == Ok(Ordering::Less)
    }

    /// 嚴格晚於 `other` 則為 `true`。任一方無效則為 `false`。
    pub fn after(&self, other: &Self) -> bool {
        self.compare(other) == Ok(Ordering::Greater)
    }

    /// 加 `days` 日，可為負。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::ChineseCalendar;
    ///
    /// let date = ChineseCalendar::new(1976, 8, 29, true);
    /// assert_eq!(Ok(ChineseCalendar::new(1976, 9, 2, false)), date.add_days(2));
    /// ```
    pub fn add_days(&self, days: i32) -> Result<Self, Error> {
        let offset = self
            .offset()?
            .checked_add(days)
            .ok_or(Error::YearOutOfRange)?;
        offset::from_offset(offset)
    }

    /// 次日。
    pub fn next_day(&self) -> Result<Self, Error> {
        self.add_days(1)
    }

    /// 前一日。
    pub fn prev_day(&self) -> Result<Self, Error> {
        self.add_days(-1)
    }

    /// 本月日數。
    pub fn days_in_month(&self) -> Result<i32, Error> {
        self.validate()?;
        let info = YearInfo::get(self.year).ok_or(Error::YearOutOfRange)?;
        Ok(info.month_length(self.month, self.is_leap))
    }

    /// 本年日數。
    pub fn days_in_year(&self) -> Result<i32, Error> {
        YearInfo::get(self.year)
            .map(|info| info.total_days())
            .ok_or(Error::YearOutOfRange)
    }

    /// 以 [`Month`] 表示的月。
    ///
    /// 月序號為負時返回 `None`。
    pub fn month_kind(&self) -> Option<Month> {
        let num = u32::try_from(self.month).ok()?;
        Some(if self.is_leap {
            Month::Leap(num)
        } else {
            Month::Common(num)
        })
    }

    /// 取得月名，如「閏八月」。
    pub fn month_name(&self) -> Result<String, Error> {
        self.validate()?;
        self.month_kind().map(fmt::month).ok_or(Error::MonthOutOfRange)
    }

    /// 取得日名，如「初八」。
    pub fn day_name(&self) -> Result<String, Error> {
        self.validate()?;
        Ok(fmt::day(self.day as u32))
    }

    fn offset(&self) -> Result<i32, Error> {
        self.validate()?;
        offset::to_offset(self)
    }
}

/// 以干支紀年、漢字月日輸出，如「丙辰年閏八月初八」。無效日期則輸出各字段數值。
impl Display for ChineseCalendar {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        match (self.month_name(), self.day_name()) {
            (Ok(month), Ok(day)) => write!(
                f,
                "{}年{}{}",
                fmt::sexagenary(sexagenary_for_year(self.year)),
                month,
                day
            ),
            _ => write!(
                f,
                "{}-{}{}-{}",
                self.year,
                if self.is_leap { "L" } else { "" },
                self.month,
                self.day
            ),
        }
    }
}

fn epoch() -> Date {
    Date::from_jdn(EPOCH_JDN)
}

/// 取得所給夏曆年的干支。
///
/// # 用例
///
/// ```
/// use nongli::chinese::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(-2696));
/// assert_eq!(53, sexagenary_for_year(1976)); // 丙辰
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}
