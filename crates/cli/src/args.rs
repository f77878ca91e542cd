// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use textractor_engine::config::{DEFAULT_OUTPUT_FILE, WordBudget};

use crate::options::OutputFormat;
use crate::parsers::parse_word_budget;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "textractor",
    version = crate::VERSION,
    about = "ディレクトリ配下のテキストファイルを単語数上限ごとに分割して結合するツール"
)]
pub struct Args {
    /// 入力ディレクトリ（再帰的に走査）
    #[arg(short = 'd', long = "input-directory", value_hint = ValueHint::DirPath, help_heading = "入力")]
    pub input_directory: PathBuf,

    /// 出力ファイルのベース名（実際の出力は `{ベース名}_{番号}{拡張子}`）
    #[arg(
        short = 'o',
        long = "output-file",
        default_value = DEFAULT_OUTPUT_FILE,
        value_hint = ValueHint::FilePath,
        help_heading = "出力"
    )]
    pub output_file: PathBuf,

    /// 無視する拡張子（カンマ区切り/複数指定可, ドットは省略可）
    #[arg(
        short = 'i',
        long = "ignored-exts",
        value_delimiter = ',',
        default_values = [".jpg", ".png"],
        help_heading = "フィルタ"
    )]
    pub ignored_exts: Vec<String>,

    /// この拡張子のファイルのみ処理（カンマ区切り/複数指定可）
    #[arg(long = "only", value_delimiter = ',', help_heading = "フィルタ")]
    pub only: Vec<String>,

    /// `--only` 指定時も無視リストを先に適用する
    #[arg(long, help_heading = "フィルタ")]
    pub ignore_first: bool,

    /// 出力ファイル1つあたりの最大単語数（正の整数 または unbounded）
    #[arg(
        short = 'w',
        long = "max-words-per-file",
        value_parser = parse_word_budget,
        default_value = "unbounded",
        help_heading = "出力"
    )]
    pub max_words_per_file: WordBudget,

    /// ファイルを書き込まずに分割結果だけを表示
    #[arg(long, help_heading = "出力")]
    pub dry_run: bool,

    /// サマリの出力形式
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// ログを詳細化（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "ログ")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, help_heading = "ログ")]
    pub quiet: bool,
}
