//! 日付処理モジュール
//!
//! - 日付列の文字列パース（dd.mm.yyyy 固定）
//! - スプレッドシートのシリアル値 → chrono 型
//! - フィルタ用の IsoDate

use crate::error::{Error, Result};
use crate::types::CellValue;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::fmt;

/// 不正な日付を表すマーカー（data-date 属性に出力される）
pub const INVALID_DATE_MARKER: &str = "invalid";

/// 9999-12-31 のシリアル値
const MAX_SERIAL_DAYS: f64 = 2_958_465.0;

const SECONDS_PER_DAY: u32 = 86_400;

/// 日付列の文字列をパース
///
/// 受け付ける形式は `дд.мм.гггг`（例: `31.12.2024`）のみ。
/// 日・月は1桁でもよい。前後の空白は無視する。
///
/// # Examples
/// ```
/// use journal_common::date::parse_date_text;
///
/// let date = parse_date_text("31.12.2024").unwrap();
/// assert_eq!(date.to_string(), "2024-12-31");
/// assert!(parse_date_text("2024-12-31").is_err());
/// ```
pub fn parse_date_text(text: &str) -> Result<NaiveDate> {
    lazy_static::lazy_static! {
        static ref DATE_RE: Regex = Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})$").unwrap();
    }

    let trimmed = text.trim();
    let caps = DATE_RE
        .captures(trimmed)
        .ok_or_else(|| Error::Parse(format!("ожидался формат дд.мм.гггг: {:?}", trimmed)))?;

    let day: u32 = caps[1].parse().map_err(|_| Error::Parse(trimmed.to_string()))?;
    let month: u32 = caps[2].parse().map_err(|_| Error::Parse(trimmed.to_string()))?;
    let year: i32 = caps[3].parse().map_err(|_| Error::Parse(trimmed.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::Parse(format!("несуществующая дата: {}", trimmed)))
}

/// スプレッドシートのシリアル値をセル値に変換
///
/// - 整数部が0 → 時刻
/// - 小数部が0 → 日付
/// - それ以外 → 日時
///
/// 範囲外（負数、9999年以降、NaN）は `None`。
pub fn from_excel_serial(serial: f64) -> Option<CellValue> {
    if !serial.is_finite() || serial < 0.0 || serial >= MAX_SERIAL_DAYS {
        return None;
    }

    let mut days = serial.trunc() as i64;
    let mut seconds = ((serial - serial.trunc()) * SECONDS_PER_DAY as f64).round() as u32;
    if seconds >= SECONDS_PER_DAY {
        days += 1;
        seconds = 0;
    }
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)?;

    if days == 0 {
        return Some(CellValue::Time(time));
    }

    // 1900-02-29（Lotus互換の存在しない日）より前は1日ずれる。
    // シリアル60はその架空の日で、59と同じ1900-02-28になる
    let epoch = if days < 60 {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };
    let date = epoch.checked_add_signed(Duration::days(days))?;

    if seconds == 0 {
        Some(CellValue::Date(date))
    } else {
        Some(CellValue::DateTime(date.and_time(time)))
    }
}

/// ISO 8601 文字列（ODS の日付セル）をセル値に変換
pub fn from_iso_text(text: &str) -> Option<CellValue> {
    let trimmed = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(CellValue::Date(date));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(CellValue::DateTime(dt));
    }
    if let Ok(time) = NaiveTime::parse_from_str(trimmed, "%H:%M:%S") {
        return Some(CellValue::Time(time));
    }
    None
}

/// 行のフィルタ用日付（YYYY-MM-DD または不正）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsoDate {
    Valid(NaiveDate),
    Invalid,
}

impl IsoDate {
    /// 日付列のセルから生成
    ///
    /// 文字列は `дд.мм.гггг` でパースする。スプレッドシートの日付型セルは
    /// そのまま受け付ける。それ以外（数値、空、時刻のみ）は不正。
    pub fn from_cell(cell: &CellValue) -> Self {
        match cell {
            CellValue::Text(s) => parse_date_text(s).map(IsoDate::Valid).unwrap_or(IsoDate::Invalid),
            CellValue::Date(d) => IsoDate::Valid(*d),
            CellValue::DateTime(dt) => IsoDate::Valid(dt.date()),
            _ => IsoDate::Invalid,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            IsoDate::Valid(d) => Some(*d),
            IsoDate::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, IsoDate::Valid(_))
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsoDate::Valid(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            IsoDate::Invalid => write!(f, "{}", INVALID_DATE_MARKER),
        }
    }
}
