//! 写真セル
//!
//! 写真リンク列からファイル名だけを取り出し、
//! `{images_root}/{シート名}/{ファイル名}` の画像パスを組み立てる。

/// 写真がない行に表示するプレースホルダー
pub const PHOTO_PLACEHOLDER: &str = "—";

/// 写真列の値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoCell {
    Placeholder,
    Image {
        /// img の src（画像ルート/シート名/ファイル名）
        src: String,
        file_name: String,
    },
}

impl PhotoCell {
    /// 写真リンクのセル文字列から生成
    ///
    /// ```
    /// use journal_common::photo::PhotoCell;
    ///
    /// let cell = PhotoCell::from_link(r"C:\cam\2024\IMG_001.jpg", "Пост 1", "Images");
    /// assert_eq!(cell.src(), Some("Images/Пост 1/IMG_001.jpg"));
    /// assert!(PhotoCell::from_link("", "Пост 1", "Images").is_placeholder());
    /// ```
    pub fn from_link(link: &str, sheet_name: &str, images_root: &str) -> Self {
        match photo_file_name(link) {
            Some(file_name) => PhotoCell::Image {
                src: image_src(images_root, sheet_name, file_name),
                file_name: file_name.to_string(),
            },
            None => PhotoCell::Placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PhotoCell::Placeholder)
    }

    pub fn src(&self) -> Option<&str> {
        match self {
            PhotoCell::Image { src, .. } => Some(src),
            PhotoCell::Placeholder => None,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            PhotoCell::Image { file_name, .. } => Some(file_name),
            PhotoCell::Placeholder => None,
        }
    }
}

/// リンクのファイル名部分（`/` と `\` の両方を区切りとみなす）
///
/// 空リンク、またはディレクトリだけのリンクは `None`。
pub fn photo_file_name(link: &str) -> Option<&str> {
    let name = link
        .trim()
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// 画像パスを組み立てる（URLとして使うので区切りは常に `/`）
pub fn image_src(images_root: &str, sheet_name: &str, file_name: &str) -> String {
    if images_root.is_empty() {
        return format!("{}/{}", sheet_name, file_name);
    }
    let root = images_root.trim_end_matches(|c: char| c == '/' || c == '\\');
    format!("{}/{}/{}", root, sheet_name, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_file_name() {
        assert_eq!(photo_file_name("IMG_001.jpg"), Some("IMG_001.jpg"));
        assert_eq!(photo_file_name("photos/2024/IMG_001.jpg"), Some("IMG_001.jpg"));
        assert_eq!(photo_file_name(r"D:\Камера\IMG_001.jpg"), Some("IMG_001.jpg"));
        assert_eq!(photo_file_name("  ./a/b.png  "), Some("b.png"));
    }

    #[test]
    fn test_photo_file_name_empty() {
        assert_eq!(photo_file_name(""), None);
        assert_eq!(photo_file_name("   "), None);
        assert_eq!(photo_file_name("photos/2024/"), None);
    }

    #[test]
    fn test_from_link_builds_src() {
        let cell = PhotoCell::from_link("old/dir/cam1.jpg", "Склад", "Images");
        assert_eq!(
            cell,
            PhotoCell::Image {
                src: "Images/Склад/cam1.jpg".to_string(),
                file_name: "cam1.jpg".to_string(),
            }
        );
    }

    #[test]
    fn test_from_link_placeholder() {
        let cell = PhotoCell::from_link("", "Склад", "Images");
        assert!(cell.is_placeholder());
        assert_eq!(cell.src(), None);
        assert_eq!(cell.file_name(), None);
    }

    #[test]
    fn test_image_src_root_variants() {
        assert_eq!(image_src("Images/", "A", "x.jpg"), "Images/A/x.jpg");
        assert_eq!(image_src(r"media\img\", "A", "x.jpg"), "media\\img/A/x.jpg");
        assert_eq!(image_src("", "A", "x.jpg"), "A/x.jpg");
        assert_eq!(image_src("/", "A", "x.jpg"), "/A/x.jpg");
    }
}
