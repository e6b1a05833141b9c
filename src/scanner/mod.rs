//! 画像フォルダのスキャン
//!
//! `{images_root}/{シート名}/` 直下の画像を列挙し、表が参照しているのに
//! 存在しない写真を調べる。出力HTMLには影響しない（詳細ログ用）。

use crate::error::{JournalError, Result};
use journal_common::SheetTable;
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub file_name: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

/// シートの画像フォルダをスキャン
pub fn scan_sheet_images(images_root: &Path, sheet_name: &str) -> Result<Vec<ImageInfo>> {
    let folder = images_root.join(sheet_name);
    if !folder.is_dir() {
        return Err(JournalError::FolderNotFound(folder.display().to_string()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(&folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_image = path
            .extension()
            .map(|ext| is_image_extension(&ext.to_string_lossy()))
            .unwrap_or(false);
        if !is_image {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        images.push(ImageInfo { file_name });
    }

    // ファイル名でソート
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

/// 表が参照しているがフォルダにない写真（参照順、重複なし）
pub fn missing_photos(table: &SheetTable, images: &[ImageInfo]) -> Vec<String> {
    let present: HashSet<&str> = images.iter().map(|i| i.file_name.as_str()).collect();
    let mut seen = HashSet::new();

    table
        .rows
        .iter()
        .filter_map(|r| r.photo.file_name())
        .filter(|name| !present.contains(name))
        .filter(|name| seen.insert(*name))
        .map(|name| name.to_string())
        .collect()
}
