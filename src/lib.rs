//! Журнал видеонаблюдения: Excel → HTML
//!
//! ワークブックの各シートをタブ付きテーブルにし、写真サムネイルと
//! 週単位の表示フィルタを埋め込んだ静的HTMLを1ファイル生成する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod reader;
pub mod scanner;
