use clap::ValueEnum;

/// 実行結果サマリの出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 人間向けの表形式
    #[default]
    Text,
    Json,
}
