//! 設定の読み込み
//!
//! 設定ファイルを指定しなければ既定値（固定の除外シート・列・画像ルート）。
//! 環境変数は読まない。

use crate::error::{JournalError, Result};
use journal_common::JournalConfig;
use std::path::Path;

/// 設定を読み込む
pub fn load(config_path: Option<&Path>) -> Result<JournalConfig> {
    let source = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "по умолчанию".to_string());

    let config = match config_path {
        Some(path) => {
            if !path.exists() {
                return Err(JournalError::FileNotFound(path.display().to_string()));
            }
            let content = std::fs::read_to_string(path)?;
            let config: JournalConfig = serde_json::from_str(&content)?;
            config
        }
        None => JournalConfig::default(),
    };

    config.validate().map_err(|e| match e {
        journal_common::Error::Config(msg) => JournalError::Config(format!("{}: {}", source, msg)),
        other => JournalError::Common(other),
    })?;
    Ok(config)
}

/// CLIの上書きを適用
pub fn apply_overrides(mut config: JournalConfig, images_dir: Option<&str>) -> JournalConfig {
    if let Some(dir) = images_dir {
        config.images_dir = dir.to_string();
    }
    config
}

/// 設定をJSONで表示用に整形
pub fn to_pretty_json(config: &JournalConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}
