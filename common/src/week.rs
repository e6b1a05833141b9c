//! 週フィルタ
//!
//! ページに埋め込むスクリプトと同じ規則を Rust 側で表現したもの。
//! 状態（週の起点）はモジュール変数ではなく WeekFilter / PageState が持つ。
//!
//! - 起点は常に月曜日
//! - 表示範囲は [月曜, 月曜+6日]（両端を含む）
//! - 不正な日付の行はどの週でも表示しない
//! - タブ切り替えで週はリセットしない

use crate::date::IsoDate;
use crate::types::{DisplayRow, SheetTable, DISPLAY_DATE_FORMAT};
use chrono::{Datelike, Duration, NaiveDate};

/// 週ラベルの区切り
pub const WEEK_LABEL_SEPARATOR: &str = " — ";

/// 日付以前の直近の月曜日（日曜は7として数える）
///
/// ```
/// use chrono::NaiveDate;
/// use journal_common::week::get_monday;
///
/// let wednesday = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
/// assert_eq!(get_monday(wednesday), NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
/// ```
pub fn get_monday(date: NaiveDate) -> NaiveDate {
    let day = date.weekday().number_from_monday(); // 月=1 … 日=7
    date - Duration::days(i64::from(day - 1))
}

/// 週の起点（月曜日）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekFilter {
    monday: NaiveDate,
}

impl WeekFilter {
    /// 指定日を含む週
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            monday: get_monday(date),
        }
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    pub fn sunday(&self) -> NaiveDate {
        self.monday + Duration::days(6)
    }

    /// 表示範囲（両端を含む）
    pub fn range(&self) -> (NaiveDate, NaiveDate) {
        (self.monday, self.sunday())
    }

    /// n週ずらす（負数で過去へ）
    pub fn change_week(&mut self, n: i64) {
        self.monday += Duration::weeks(n);
    }

    pub fn contains(&self, date: &IsoDate) -> bool {
        match date.date() {
            Some(d) => d >= self.monday && d <= self.sunday(),
            None => false,
        }
    }

    /// この週に表示される行
    pub fn visible_rows<'a>(&self, table: &'a SheetTable) -> Vec<&'a DisplayRow> {
        table.rows.iter().filter(|r| self.contains(&r.iso_date)).collect()
    }

    /// 週ラベル（ru-RU 表記: `10.06.2024 — 16.06.2024`）
    pub fn label(&self) -> String {
        format!(
            "{}{}{}",
            self.monday.format(DISPLAY_DATE_FORMAT),
            WEEK_LABEL_SEPARATOR,
            self.sunday().format(DISPLAY_DATE_FORMAT)
        )
    }
}

/// ページの表示状態（アクティブなタブ + 週）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    active_tab: Option<usize>,
    tab_count: usize,
    week: WeekFilter,
}

impl PageState {
    /// 読み込み直後: 今日を含む週、先頭タブを選択
    pub fn new(today: NaiveDate, tab_count: usize) -> Self {
        Self {
            active_tab: if tab_count > 0 { Some(0) } else { None },
            tab_count,
            week: WeekFilter::containing(today),
        }
    }

    pub fn active_tab(&self) -> Option<usize> {
        self.active_tab
    }

    pub fn week(&self) -> &WeekFilter {
        &self.week
    }

    /// タブを開く（範囲外なら何もしない）。週は変えない。
    pub fn open_tab(&mut self, index: usize) -> bool {
        if index >= self.tab_count {
            return false;
        }
        self.active_tab = Some(index);
        true
    }

    pub fn change_week(&mut self, n: i64) {
        self.week.change_week(n);
    }

    /// アクティブなタブで表示される行
    pub fn visible_rows<'a>(&self, tables: &'a [SheetTable]) -> Vec<&'a DisplayRow> {
        self.active_tab
            .and_then(|i| tables.get(i))
            .map(|t| self.week.visible_rows(t))
            .unwrap_or_default()
    }
}
