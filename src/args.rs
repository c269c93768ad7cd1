// src/args.rs
use crate::options::OutputFormat;
use crate::parsers;
use clap::{Args as ClapArgs, Parser, ValueHint};
use csvstats_ports::DEFAULT_SAMPLE_SIZE;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "csvstats",
    version,
    about = "区切りテキストの数値列ごとに min/max/mean を集計するツール"
)]
pub struct Args {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// ログ詳細度 (-v: info, -vv: debug)。RUST_LOG が優先される
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// 対象ファイル (CSV/TSV など)
    #[arg(value_hint = ValueHint::FilePath)]
    pub path: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct InputOptions {
    /// 区切り文字を固定する (省略時は自動判定。例: ',', ';', tab)
    #[arg(long, short = 'd', value_parser = parsers::parse_delimiter, help_heading = "入力")]
    pub delimiter: Option<u8>,

    /// 区切り文字判定に読む先頭バイト数
    #[arg(
        long,
        default_value_t = DEFAULT_SAMPLE_SIZE,
        value_parser = parsers::parse_positive_usize,
        help_heading = "入力"
    )]
    pub sample_size: usize,

    /// 読めないレコードがあれば中断する (既定ではスキップして警告)
    #[arg(long, help_heading = "入力")]
    pub strict: bool,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,
}
