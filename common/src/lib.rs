//! Surveillance Journal Common Library
//!
//! ワークブックのリーダーやHTML出力から独立した、純粋な型と変換処理

pub mod types;
pub mod error;
pub mod config;
pub mod date;
pub mod photo;
pub mod transform;
pub mod week;

pub use types::{CellValue, DisplayRow, RawSheet, SheetTable};
pub use error::{Error, Result};
pub use config::JournalConfig;
pub use date::{IsoDate, parse_date_text, from_excel_serial};
pub use photo::{PhotoCell, PHOTO_PLACEHOLDER};
pub use transform::{transform_sheet, transform_workbook, TransformOutcome};
pub use week::{get_monday, PageState, WeekFilter};
