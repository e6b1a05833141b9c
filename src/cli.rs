use clap::Parser;
use std::path::PathBuf;

/// 既定の入力ブック
pub const DEFAULT_INPUT: &str = "journal.xlsx";
/// 既定の出力HTML
pub const DEFAULT_OUTPUT: &str = "journal.html";

/// 引数なしで実行すると journal.xlsx → journal.html を生成する
#[derive(Parser, Debug)]
#[command(name = "journal-html")]
#[command(about = "Журнал видеонаблюдения: Excel → HTML с фото и фильтром по неделям", long_about = None)]
pub struct Cli {
    /// 入力ブック（xlsx/xlsm/xls/ods）
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// 出力HTML（既存ファイルは上書き）
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// 画像ルート（設定ファイルの imagesDir より優先）
    #[arg(long)]
    pub images_dir: Option<String>,

    /// 設定JSONファイル
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 有効な設定をJSONで表示して終了
    #[arg(long)]
    pub dump_config: bool,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}
