pub mod html;

use crate::error::Result;
use crate::{reader, scanner};
use html::PageOptions;
use journal_common::{transform_workbook, JournalConfig, SheetTable, TransformOutcome, WeekFilter};
use std::path::{Path, PathBuf};

/// 生成結果
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub output: PathBuf,
    /// 出力したシート名（タブ順）
    pub sheets: Vec<String>,
    pub rows: usize,
    pub excluded: Vec<String>,
    pub skipped: Vec<String>,
}

/// ページを生成して書き込む（既存ファイルは上書き）
///
/// 文字列を組み立ててからファイルを開くので、生成途中で失敗しても
/// 書きかけのファイルは残らない。
pub fn write_page(tables: &[SheetTable], options: &PageOptions, output: &Path) -> Result<()> {
    let page = html::render_page(tables, options);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output, page)?;
    Ok(())
}

/// 読み込み → 変換 → HTML出力
pub fn generate(
    config: &JournalConfig,
    input: &Path,
    output: &Path,
    verbose: bool,
) -> Result<GenerationSummary> {
    // 1. 読み込み
    println!("[1/3] Чтение книги {}...", input.display());
    let sheets = reader::read_workbook(input)?;
    println!("✔ Листов в книге: {}\n", sheets.len());

    // 2. 変換
    println!("[2/3] Подготовка таблиц...");
    let outcome = transform_workbook(&sheets, config);
    if verbose {
        report_outcome(&outcome, config, output);
    }
    println!("✔ Листов в журнале: {}\n", outcome.tables.len());

    // 3. 出力
    println!("[3/3] Запись HTML...");
    write_page(&outcome.tables, &PageOptions::from(config), output)?;
    println!("✔ HTML: {}", output.display());

    Ok(GenerationSummary {
        output: output.to_path_buf(),
        sheets: outcome.tables.iter().map(|t| t.name.clone()).collect(),
        rows: outcome.tables.iter().map(|t| t.rows.len()).sum(),
        excluded: outcome.excluded,
        skipped: outcome.skipped,
    })
}

/// 詳細ログ: シートごとの集計と、見つからない写真
fn report_outcome(outcome: &TransformOutcome, config: &JournalConfig, output: &Path) {
    for name in &outcome.excluded {
        println!("  - лист «{}» исключён настройками", name);
    }
    for name in &outcome.skipped {
        println!("  - лист «{}» пропущен: нет колонки «{}»", name, config.date_column);
    }

    // 画像パスはHTMLからの相対パス
    let images_root = output
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&config.images_dir);
    let this_week = WeekFilter::containing(chrono::Local::now().date_naive());

    for table in &outcome.tables {
        println!(
            "  • {}: строк {}, без даты {}, без фото {}, на текущей неделе ({}) {}",
            table.name,
            table.rows.len(),
            table.invalid_date_count(),
            table.placeholder_count(),
            this_week.label(),
            this_week.visible_rows(table).len(),
        );

        if table.placeholder_count() == table.rows.len() {
            continue;
        }
        match scanner::scan_sheet_images(&images_root, &table.name) {
            Ok(images) => {
                let missing = scanner::missing_photos(table, &images);
                if !missing.is_empty() {
                    eprintln!("    ⚠ нет файлов ({}): {}", missing.len(), missing.join(", "));
                }
            }
            Err(e) => eprintln!("    ⚠ {}", e),
        }
    }
}
