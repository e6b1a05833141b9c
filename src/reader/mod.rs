//! ワークブック読み込み（calamine）
//!
//! 各シートの使用範囲の先頭行をヘッダー、残りをデータ行として RawSheet にする。
//! 正規化（空行除去、ヘッダーのトリムなど）は journal_common::transform が行う。

use crate::error::{JournalError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use journal_common::date::{from_excel_serial, from_iso_text};
use journal_common::{CellValue, RawSheet};
use std::path::Path;

/// ワークブックの全シートを順番に読み込む
///
/// ファイルがない、または壊れている場合はエラー（部分的な結果は返さない）。
pub fn read_workbook(path: &Path) -> Result<Vec<RawSheet>> {
    if !path.exists() {
        return Err(JournalError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| JournalError::Workbook(format!("{}: {}", path.display(), e)))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| JournalError::Workbook(format!("лист «{}»: {}", name, e)))?;
        sheets.push(sheet_from_range(&name, &range));
    }

    Ok(sheets)
}

/// セル範囲 → RawSheet
pub fn sheet_from_range(name: &str, range: &Range<Data>) -> RawSheet {
    let mut rows = range.rows();
    let header = rows
        .next()
        .map(|r| r.iter().map(convert_cell).collect())
        .unwrap_or_default();
    let rows = rows
        .map(|r| r.iter().map(convert_cell).collect())
        .collect();

    RawSheet {
        name: name.to_string(),
        header,
        rows,
    }
}

/// calamine のセル値 → CellValue
pub fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            from_excel_serial(serial).unwrap_or(CellValue::Number(serial))
        }
        Data::DateTimeIso(s) => from_iso_text(s).unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}
