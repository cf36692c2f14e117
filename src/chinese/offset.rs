//! 日序與夏曆日期互換
//!
//! 日序為自夏曆 1900 年正月初一（公曆 1900-01-31）起算的日數。

use tracing::{debug, trace};

use super::year_info::YearInfo;
use super::{ChineseCalendar, Error, FIRST_YEAR};

/// 由日序求夏曆日期。
///
/// 日序為負或超出 2049 年末則回報 [`Error::YearOutOfRange`]。
///
/// # Panics
///
/// 編碼表中某年 `total_days` 與各月日數之和不符時 panic。
pub(crate) fn from_offset(offset: i32) -> Result<ChineseCalendar, Error> {
    if offset < 0 {
        debug!(offset, "offset before first covered lunar year");
        return Err(Error::YearOutOfRange);
    }

    let mut rest = offset;
    let mut year = FIRST_YEAR;
    let info = loop {
        let Some(info) = YearInfo::get(year) else {
            debug!(offset, "offset past last covered lunar year");
            return Err(Error::YearOutOfRange);
        };
        let days = info.total_days();
        if rest < days {
            break info;
        }
        rest -= days;
        year += 1;
    };

    let leap = info.leap_month();
    for month in 1..=12 {
        let days = info.regular_month_length(month);
        if rest < days {
            return Ok(decoded(offset, year, month, rest + 1, false));
        }
        rest -= days;
        if month == leap {
            let days = info.leap_month_length();
            if rest < days {
                return Ok(decoded(offset, year, month, rest + 1, true));
            }
            rest -= days;
        }
    }
    // `rest < info.total_days()` here, and total_days is the sum of the month
    // lengths walked above; year_info's tests check that for every year.
    unreachable!("{} days left after the last month of {}", rest, year);
}

fn decoded(offset: i32, year: i32, month: i32, day: i32, is_leap: bool) -> ChineseCalendar {
    let date = ChineseCalendar {
        year,
        month,
        day,
        is_leap,
    };
    trace!(offset, ?date, "decoded offset");
    date
}

/// 由夏曆日期求日序。
///
/// 僅檢查年份是否在表內，月、日須已由調用方驗證。
pub(crate) fn to_offset(date: &ChineseCalendar) -> Result<i32, Error> {
    let Some(info) = YearInfo::get(date.year) else {
        debug!(?date, "year not covered");
        return Err(Error::YearOutOfRange);
    };

    let mut offset: i32 = (FIRST_YEAR..date.year)
        .filter_map(YearInfo::get)
        .map(|i| i.total_days())
        .sum();
    offset += (1..date.month)
        .map(|m| info.regular_month_length(m))
        .sum::<i32>();

    let leap = info.leap_month();
    if leap != 0 && leap < date.month {
        offset += info.leap_month_length();
    }
    if date.is_leap {
        // 閏月在同名平月之後
        offset += info.regular_month_length(date.month);
    }
    offset += date.day - 1;

    trace!(?date, offset, "encoded date");
    Ok(offset)
}
