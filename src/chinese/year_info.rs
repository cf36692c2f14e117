//! 逐年夏曆編碼表及其解碼
//!
//! 每年以一個整數記錄月大小與閏月：
//!
//! - 第 0–3 位：閏月位置，0 為無閏月，`m` 為閏於 `m` 月之後；
//! - 第 4–15 位：第 `4 + (m - 1)` 位表示 `m` 月大小，置位為大月（30 日），否則為小月（29 日）；
//! - 第 16 位：閏月大小，僅在有閏月時有意義。

use super::{FIRST_YEAR, LAST_YEAR};

/// 一年的編碼
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct YearInfo {
    /// 夏曆年份
    pub year: i32,
    /// 編碼值
    pub info: u32,
}

impl YearInfo {
    /// 取得夏曆 `year` 年的編碼。
    ///
    /// 不在 1900–2049 年間則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::year_info::YearInfo;
    ///
    /// let info = YearInfo::get(1976).unwrap();
    /// assert_eq!(8, info.leap_month());
    /// assert_eq!(384, info.total_days());
    /// assert_eq!(None, YearInfo::get(2050));
    /// ```
    pub fn get(year: i32) -> Option<Self> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return None;
        }
        Some(YearInfo {
            year,
            info: YEAR_INFO[(year - FIRST_YEAR) as usize],
        })
    }

    /// 閏月位置，無閏月則為 0。
    pub fn leap_month(&self) -> i32 {
        (self.info & 0xf) as i32
    }

    /// 平月 `month` 的日數，29 或 30。
    ///
    /// `month` 須在 `1..=12` 間，由調用方保證。
    pub fn regular_month_length(&self, month: i32) -> i32 {
        debug_assert!((1..=12).contains(&month), "month {} not in 1..=12", month);
        29 + ((self.info >> (4 + (month - 1))) & 1) as i32
    }

    /// 閏月的日數，僅在 [`leap_month`](Self::leap_month) 非 0 時有意義。
    pub fn leap_month_length(&self) -> i32 {
        29 + ((self.info >> 16) & 1) as i32
    }

    /// 全年日數。
    pub fn total_days(&self) -> i32 {
        let regular: i32 = (1..=12).map(|m| self.regular_month_length(m)).sum();
        if self.leap_month() != 0 {
            regular + self.leap_month_length()
        } else {
            regular
        }
    }

    /// 指定月的日數，`is_leap` 為 `true` 時取閏月。
    pub fn month_length(&self, month: i32, is_leap: bool) -> i32 {
        if is_leap {
            self.leap_month_length()
        } else {
            self.regular_month_length(month)
        }
    }
}

/// 1900–2049 年編碼表，以 `year - 1900` 為下標。
static YEAR_INFO: [u32; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    0x0bd28, 0x07520, 0x0ea50, 0x0b2a5, 0x064b0, 0x0a9b0, 0x1aa64, 0x056a0, 0x0b590, 0x0baa2, // 1900
    0x07520, 0x0da56, 0x0b250, 0x0a4b0, 0x1a4b5, 0x02ad0, 0x056b0, 0x05b52, 0x0da90, 0x1e927, // 1910
    0x0e920, 0x0d250, 0x0d2d5, 0x0a560, 0x02b60, 0x1ad54, 0x06d40, 0x0ea90, 0x0f4a2, 0x0e920, // 1920
    0x06a66, 0x052b0, 0x0a570, 0x19565, 0x0b5a0, 0x06d40, 0x17613, 0x07490, 0x1b137, 0x0a930, // 1930
    0x052b0, 0x151b6, 0x0aad0, 0x056a0, 0x1da54, 0x0ba40, 0x0b490, 0x0d4b2, 0x0a950, 0x0aad7, // 1940
    0x05360, 0x0aad0, 0x1aca5, 0x05b20, 0x0da50, 0x1ea23, 0x0d4a0, 0x05958, 0x0a970, 0x05560, // 1950
    0x05756, 0x0ad50, 0x06d20, 0x07554, 0x0ea50, 0x064a0, 0x064f3, 0x0a9b0, 0x0ada7, 0x056a0, // 1960
    0x0b690, 0x0bb25, 0x0b520, 0x0b250, 0x0b2b4, 0x0a4b0, 0x0aab8, 0x02ad0, 0x056d0, 0x15a96, // 1970
    0x0da90, 0x0d920, 0x0e954, 0x0d250, 0x0e4da, 0x0a560, 0x02b60, 0x02f56, 0x06d50, 0x0ea90, // 1980
    0x0f525, 0x0e920, 0x0d260, 0x052e3, 0x0a570, 0x0ad68, 0x035a0, 0x06d50, 0x0b695, 0x07490, // 1990
    0x06930, 0x0a9b4, 0x052b0, 0x0a5b0, 0x0aae2, 0x056a0, 0x0dd57, 0x0ba40, 0x0b490, 0x0d535, // 2000
    0x0a950, 0x052d0, 0x055d4, 0x0ab50, 0x0baa9, 0x05d20, 0x0da50, 0x1e8a6, 0x0d4a0, 0x0c950, // 2010
    0x0a9e4, 0x05560, 0x0ab50, 0x0ada2, 0x06d20, 0x07656, 0x07250, 0x064b0, 0x06575, 0x0cab0, // 2020
    0x055a0, 0x056e3, 0x0b690, 0x0f52b, 0x0b520, 0x0b250, 0x1d0b6, 0x0a4b0, 0x04ab0, 0x02bb5, // 2030
    0x05ad0, 0x0b6a0, 0x0daa2, 0x0d920, 0x0ea57, 0x0d250, 0x0a550, 0x1a4d5, 0x04b60, 0x05b50, // 2040
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_days() {
        for (info, std) in [
            (0, 348),                          // 無閏月，全為小月
            (1, 377),                          // 閏正月，全為小月
            (((1 << 12) - 1) << 4, 360),       // 無閏月，全為大月
            ((((1 << 13) - 1) << 4) + 1, 390), // 閏正月，全為大月
            ((((1 << 12) - 1) << 4) + 1, 389), // 閏正月為小月，平月全為大月
        ] {
            assert_eq!(std, YearInfo { year: 1900, info }.total_days(), "info {info:#x}");
        }
    }

    #[test]
    fn total_days_matches_month_sum() {
        for year in FIRST_YEAR..=LAST_YEAR {
            let info = YearInfo::get(year).unwrap();
            let mut sum: i32 = (1..=12).map(|m| info.regular_month_length(m)).sum();
            if info.leap_month() != 0 {
                sum += info.leap_month_length();
            }
            assert_eq!(sum, info.total_days(), "year {year}");
            assert!((353..=385).contains(&sum), "year {year} has {sum} days");
            assert!(info.leap_month() <= 12, "year {year}");
        }
    }

    #[test]
    fn months() {
        let info = YearInfo::get(1900).unwrap();
        assert_eq!(8, info.leap_month());
        assert_eq!(29, info.regular_month_length(1));
        assert_eq!(30, info.regular_month_length(2));
        assert_eq!(29, info.leap_month_length());

        let info = YearInfo::get(2017).unwrap();
        assert_eq!(6, info.leap_month());
        assert_eq!(29, info.month_length(6, false));
        assert_eq!(30, info.month_length(6, true));

        assert_eq!(0, YearInfo::get(2000).unwrap().leap_month());
    }

    #[test]
    fn lookup_range() {
        assert_eq!(None, YearInfo::get(FIRST_YEAR - 1));
        assert_eq!(None, YearInfo::get(LAST_YEAR + 1));
        assert_eq!(Some(FIRST_YEAR), YearInfo::get(FIRST_YEAR).map(|i| i.year));
        assert_eq!(Some(LAST_YEAR), YearInfo::get(LAST_YEAR).map(|i| i.year));
    }
}
