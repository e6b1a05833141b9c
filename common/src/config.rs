//! 変換・出力の設定
//!
//! 除外シート、出力列の許可リスト、画像ルートなどは固定の設定値として扱い、
//! 実行時に推測はしない。JSONファイルで上書きでき、省略したフィールドは既定値になる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JournalConfig {
    /// HTMLに出力しないシート
    pub excluded_sheets: Vec<String>,
    /// 出力列（この順で出力）
    pub columns: Vec<String>,
    /// 日付列。これがないシートは出力しない
    pub date_column: String,
    /// 写真リンク列
    pub photo_link_column: String,
    /// 写真列の見出し
    pub photo_column: String,
    /// 画像ルート（画像は `{images_dir}/{シート名}/` に置かれる）
    pub images_dir: String,
    pub page_title: String,
    pub page_heading: String,
    /// 週ラベルの表示ロケール
    pub locale: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            excluded_sheets: vec!["СпрСобытий".into()],
            columns: vec![
                "День нед".into(),
                "Дата".into(),
                "Время".into(),
                "Событие".into(),
                "Объект".into(),
                "Груз".into(),
                "Кол-во".into(),
                "Примечание".into(),
            ],
            date_column: "Дата".into(),
            photo_link_column: "Ссылка на фото".into(),
            photo_column: "Фото".into(),
            images_dir: "Images".into(),
            page_title: "Журнал видеонаблюдения".into(),
            page_heading: "Фотоотчёт видеонаблюдения".into(),
            locale: "ru-RU".into(),
        }
    }
}

impl JournalConfig {
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::Config("список колонок (columns) пуст".into()));
        }
        if self.date_column.trim().is_empty() {
            return Err(Error::Config("не задана колонка даты (dateColumn)".into()));
        }
        if self.photo_column.trim().is_empty() {
            return Err(Error::Config("не задан заголовок колонки фото (photoColumn)".into()));
        }
        Ok(())
    }

    pub fn is_excluded(&self, sheet_name: &str) -> bool {
        self.excluded_sheets.iter().any(|s| s == sheet_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JournalConfig::default();
        assert_eq!(config.columns.len(), 8);
        assert_eq!(config.columns[1], "Дата");
        assert_eq!(config.date_column, "Дата");
        assert!(config.is_excluded("СпрСобытий"));
        assert!(!config.is_excluded("Пост 1"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{"imagesDir": "media", "excludedSheets": ["Справочник", "Итоги"]}"#;
        let config: JournalConfig = serde_json::from_str(json).expect("デシリアライズ失敗");

        assert_eq!(config.images_dir, "media");
        assert!(config.is_excluded("Итоги"));
        assert!(!config.is_excluded("СпрСобытий"));
        // 省略したフィールドは既定値
        assert_eq!(config.photo_link_column, "Ссылка на фото");
        assert_eq!(config.locale, "ru-RU");
    }

    #[test]
    fn test_validate_rejects_empty_columns() {
        let config = JournalConfig { columns: vec![], ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_blank_date_column() {
        let config = JournalConfig { date_column: "  ".into(), ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_string(&JournalConfig::default()).expect("シリアライズ失敗");
        assert!(json.contains("\"excludedSheets\":[\"СпрСобытий\"]"));
        assert!(json.contains("\"photoLinkColumn\""));
    }
}
