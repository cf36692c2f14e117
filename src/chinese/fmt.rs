//! 格式化日期相關功能

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 干支序號轉為文本形式，可與 [`super::sexagenary_for_year`] 合用。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("乙巳", chinese::fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    static NAME1: &[&str] = &["癸", "甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬"];
    static NAME2: &[&str] = &[
        "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌",
    ];
    NAME1[num.rem_euclid(10) as usize].to_owned() + NAME2[num.rem_euclid(12) as usize]
}

/// 取得月名（含「月」字）。十一、十二月稱「冬月」「臘月」。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{self, Month::*};
///
/// assert_eq!("冬月", chinese::fmt::month(Common(11)));
/// assert_eq!("閏正月", chinese::fmt::month(Leap(1)));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(m: super::Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "閏";
    }
    let num = m.num();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "臘",
        _ => panic!("month {} not in 1..=12", num),
    };
    rt += "月";
    rt
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序號不在 `1..=30` 間則 panic。
pub fn day(d: u32) -> String {
    match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {} not in 1..=30", d),
    }
    .to_owned()
        + NUM_CHINESE[(d % 10) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sexagenary() {
        for (std, num) in [("甲子", 1), ("庚寅", 27), ("癸亥", 60)] {
            assert_eq!(std, sexagenary(num));
        }
    }

    #[test]
    fn test_month() {
        use crate::chinese::Month::*;
        for (std, m) in [
            ("正月", Common(1)),
            ("閏四月", Leap(4)),
            ("十月", Common(10)),
            ("冬月", Common(11)),
            ("閏臘月", Leap(12)),
        ] {
            assert_eq!(std, month(m));
        }
    }

    #[test]
    #[should_panic(expected = "not in 1..=12")]
    fn test_month_out_of_range() {
        month(crate::chinese::Month::Common(13));
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("二十", 20),
            ("廿一", 21),
            ("三十", 30),
        ] {
            assert_eq!(std, day(d));
        }
    }
}
