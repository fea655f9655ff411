// src/args.rs
use crate::options::{LockArg, OutputFormat};
use crate::parsers::{self, SizeArg};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};
use typed_read_shared_kernel::OpenMode;

#[derive(Parser, Debug)]
#[command(
    name = "typed_read",
    version,
    about = "型付きアクセサでファイルを読み取るツール"
)]
pub struct Args {
    #[command(flatten)]
    pub open: OpenOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// 対象ファイル (パスまたは file:// URL)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug)]
pub struct OpenOptions {
    /// オープンモード (読み取り専用ストリームは rb のみ対応)
    #[arg(long, default_value = "rb", help_heading = "オープン")]
    pub mode: OpenMode,

    /// オープンを遅延し、明示的に open してから読む
    #[arg(long, help_heading = "オープン")]
    pub defer: bool,

    /// オープン直後に取得するロック
    #[arg(long, value_enum, help_heading = "オープン")]
    pub lock: Option<LockArg>,

    /// ロック競合時に待たずに失敗する
    #[arg(long, requires = "lock", help_heading = "オープン")]
    pub no_wait: bool,

    /// 読み取りバッファサイズ (例: 8K, 1MiB)
    #[arg(long, help_heading = "オープン")]
    pub buffer: Option<SizeArg>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// 終端に達しているか
    Eof,
    /// N バイト読む
    Read {
        #[arg(allow_hyphen_values = true)]
        length: i64,
    },
    /// N バイトを UTF-8 文字列として読む
    String {
        #[arg(allow_hyphen_values = true)]
        length: i64,
    },
    /// 1 文字読む
    Char,
    /// 1 バイトを真偽値として読む
    Bool,
    /// N バイト (既定 1) を整数として読む
    Int {
        #[arg(allow_hyphen_values = true, default_value_t = 1)]
        length: i64,
    },
    /// N バイト (既定 1) を浮動小数点数として読む
    Float {
        #[arg(allow_hyphen_values = true, default_value_t = 1)]
        length: i64,
    },
    /// 1 行読む
    Line,
    /// 残りの行をすべて読む
    Lines,
    /// 指定オフセットから末尾まで読む
    All {
        #[arg(long, default_value_t = 0, value_parser = parsers::parse_offset)]
        offset: u64,
    },
    /// 1 行を scanf 形式で解析する
    Scan {
        format: String,
        /// 終端まで 1 行ずつ繰り返す
        #[arg(long)]
        all: bool,
    },
    /// scan の別名
    Array { format: String },
}

impl Command {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Eof => "eof",
            Self::Read { .. } => "read",
            Self::String { .. } => "string",
            Self::Char => "char",
            Self::Bool => "bool",
            Self::Int { .. } => "int",
            Self::Float { .. } => "float",
            Self::Line => "line",
            Self::Lines => "lines",
            Self::All { .. } => "all",
            Self::Scan { .. } => "scan",
            Self::Array { .. } => "array",
        }
    }
}
