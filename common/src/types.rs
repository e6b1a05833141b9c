//! journal の型定義
//!
//! リーダーと変換処理で共有される型:
//! - CellValue: ワークシートのセル値
//! - RawSheet: リーダーの出力（正規化前）
//! - DisplayRow / SheetTable: 変換後、HTMLに出力される行とシート

use crate::date::IsoDate;
use crate::photo::PhotoCell;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// 画面表示用の日付書式（ru-RU）
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// セル値
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
}

impl CellValue {
    /// 空セル判定（空文字列も空とみなす）
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// テーブルに出力する文字列
    ///
    /// 空セルは `""` になるので、描画側で欠損を特別扱いする必要はない。
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            CellValue::Date(d) => d.format(DISPLAY_DATE_FORMAT).to_string(),
            CellValue::DateTime(dt) => {
                if dt.time() == NaiveTime::MIN {
                    dt.date().format(DISPLAY_DATE_FORMAT).to_string()
                } else {
                    dt.format("%d.%m.%Y %H:%M").to_string()
                }
            }
            CellValue::Time(t) => {
                if t.second() == 0 {
                    t.format("%H:%M").to_string()
                } else {
                    t.format("%H:%M:%S").to_string()
                }
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// 整数値は小数部なしで表示（5.0 → "5"）
fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

/// リーダーが返すシート（ヘッダー行 + データ行、未加工）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSheet {
    pub name: String,
    pub header: Vec<CellValue>,
    pub rows: Vec<Vec<CellValue>>,
}

/// HTMLに出力される1行
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// 許可リスト順のセル文字列（写真列は含まない）
    pub cells: Vec<String>,
    pub photo: PhotoCell,
    /// フィルタ用の日付（表示はしない）
    pub iso_date: IsoDate,
}

/// 変換済みシート
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub name: String,
    /// 出力列（末尾に写真列）
    pub columns: Vec<String>,
    pub rows: Vec<DisplayRow>,
}

impl SheetTable {
    /// 日付が不正な行の数
    pub fn invalid_date_count(&self) -> usize {
        self.rows.iter().filter(|r| !r.iso_date.is_valid()).count()
    }

    /// 写真のない行の数
    pub fn placeholder_count(&self) -> usize {
        self.rows.iter().filter(|r| r.photo.is_placeholder()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_cells() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text(String::new()).is_blank());
        assert!(!CellValue::Text(" ".into()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
        assert!(!CellValue::Bool(false).is_blank());
    }

    #[test]
    fn test_display_text_numbers() {
        assert_eq!(CellValue::Number(5.0).display_text(), "5");
        assert_eq!(CellValue::Number(-0.0).display_text(), "0");
        assert_eq!(CellValue::Number(2.5).display_text(), "2.5");
        assert_eq!(CellValue::Number(1200.0).display_text(), "1200");
    }

    #[test]
    fn test_display_text_dates_and_times() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(CellValue::Date(date).display_text(), "31.12.2024");

        let midnight = date.and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(CellValue::DateTime(midnight).display_text(), "31.12.2024");

        let evening = date.and_hms_opt(18, 5, 0).unwrap();
        assert_eq!(CellValue::DateTime(evening).display_text(), "31.12.2024 18:05");

        let time = NaiveTime::from_hms_opt(7, 30, 0).unwrap();
        assert_eq!(CellValue::Time(time).display_text(), "07:30");
        let time = NaiveTime::from_hms_opt(7, 30, 15).unwrap();
        assert_eq!(CellValue::Time(time).display_text(), "07:30:15");
    }

    #[test]
    fn test_display_text_other() {
        assert_eq!(CellValue::Empty.display_text(), "");
        assert_eq!(CellValue::from("Въезд").display_text(), "Въезд");
        assert_eq!(CellValue::Bool(true).display_text(), "TRUE");
    }
}
