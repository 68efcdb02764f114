use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "convidados")]
#[command(about = "招待客チェックリスト（JSON/XLSX のインポート・エクスポート対応）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 招待客リストを表示
    List {
        /// 名前にこの文字列を含む招待客だけ（大文字小文字を区別しない）
        #[arg(short, long)]
        search: Option<String>,
    },

    /// 招待客の確認状態を切り替える
    Toggle {
        /// 招待客ID
        #[arg(required = true)]
        id: i64,
    },

    /// 初期リストに戻し、保存済みの名簿を消す
    Reset {
        /// 確認プロンプトを省略
        #[arg(short, long)]
        yes: bool,
    },

    /// 招待客リストをファイルに出力
    Export {
        /// 出力ファイル（デフォルト: convidados.xlsx、--format json なら .json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (xlsx/json)
        #[arg(short, long, default_value = "xlsx")]
        format: ExportFormat,
    },

    /// .json / .xlsx ファイルで招待客リストを置き換える
    Import {
        /// 入力ファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 設定の表示・変更
    Config {
        /// 保存ファイルのパスを設定
        #[arg(long)]
        set_storage: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unknown format: {}. Use xlsx or json", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
