//! シート変換モジュール
//!
//! RawSheet を表示用の SheetTable に変換する。
//!
//! ## 処理フロー
//! 1. 全セル空の行を除去
//! 2. ヘッダーをトリムして文字列化
//! 3. 日付列がなければシートごとスキップ
//! 4. 行ごとに IsoDate と PhotoCell を生成
//! 5. 許可リスト ∩ シートの列（許可リスト順）+ 写真列

use crate::config::JournalConfig;
use crate::date::IsoDate;
use crate::photo::PhotoCell;
use crate::types::{CellValue, DisplayRow, RawSheet, SheetTable};

static EMPTY_CELL: CellValue = CellValue::Empty;

/// ワークブック変換の結果
#[derive(Debug, Clone, Default)]
pub struct TransformOutcome {
    /// 出力するシート（ワークブック順）
    pub tables: Vec<SheetTable>,
    /// 設定で除外したシート
    pub excluded: Vec<String>,
    /// 日付列がないためスキップしたシート
    pub skipped: Vec<String>,
}

/// 全セルが空の行か
pub fn is_blank_row(row: &[CellValue]) -> bool {
    row.iter().all(CellValue::is_blank)
}

/// ヘッダー行を文字列化
///
/// 空の見出しは `Unnamed: {列番号}` にする（設定の列名とは一致しない）。
pub fn normalize_headers(header: &[CellValue]) -> Vec<String> {
    header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let text = cell.display_text().trim().to_string();
            if text.is_empty() {
                format!("Unnamed: {}", i)
            } else {
                text
            }
        })
        .collect()
}

/// 列名の位置（重複時は最初の列）
fn column_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn cell_at(row: &[CellValue], index: usize) -> &CellValue {
    row.get(index).unwrap_or(&EMPTY_CELL)
}

/// 1シートを変換
///
/// 日付列がないシートは `None`（エラーではない）。
pub fn transform_sheet(sheet: &RawSheet, config: &JournalConfig) -> Option<SheetTable> {
    let headers = normalize_headers(&sheet.header);
    let date_index = column_index(&headers, &config.date_column)?;
    let photo_index = column_index(&headers, &config.photo_link_column);

    let selected: Vec<(&String, usize)> = config
        .columns
        .iter()
        .filter_map(|name| column_index(&headers, name).map(|i| (name, i)))
        .collect();

    let mut columns: Vec<String> = selected.iter().map(|(name, _)| (*name).clone()).collect();
    columns.push(config.photo_column.clone());

    let rows = sheet
        .rows
        .iter()
        .filter(|row| !is_blank_row(row))
        .map(|row| {
            let cells = selected
                .iter()
                .map(|(_, i)| cell_at(row, *i).display_text())
                .collect();

            let link = photo_index
                .map(|i| cell_at(row, i).display_text())
                .unwrap_or_default();

            DisplayRow {
                cells,
                photo: PhotoCell::from_link(&link, &sheet.name, &config.images_dir),
                iso_date: IsoDate::from_cell(cell_at(row, date_index)),
            }
        })
        .collect();

    Some(SheetTable {
        name: sheet.name.clone(),
        columns,
        rows,
    })
}

/// ワークブック全体を変換（除外 → 変換、ワークブック順を維持）
pub fn transform_workbook(sheets: &[RawSheet], config: &JournalConfig) -> TransformOutcome {
    let mut outcome = TransformOutcome::default();

    for sheet in sheets {
        if config.is_excluded(&sheet.name) {
            outcome.excluded.push(sheet.name.clone());
            continue;
        }
        match transform_sheet(sheet, config) {
            Some(table) => outcome.tables.push(table),
            None => outcome.skipped.push(sheet.name.clone()),
        }
    }

    outcome
}
