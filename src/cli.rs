use clap::{Args, Parser, Subcommand};

use scholar_signals::venue::BadgeKind;

#[derive(Parser)]
#[command(name = "scholar-signals")]
#[command(about = "Venue quality badges, citation indices and author statistics for scholarly listings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print normalized lookup keys for venue strings
    Normalize(NormalizeArgs),

    /// Compile ranking sources into a quality index and summarise it
    Compile(CompileArgs),

    /// Annotate paper records with badges, venue weight, velocity and CSS
    Annotate(AnnotateArgs),

    /// Compute author-level statistics for a profile's papers
    Stats(StatsArgs),
}

/// Parse `kind=path`, e.g. `h5=data/h5.parquet`
pub fn parse_table_spec(raw: &str) -> Result<(BadgeKind, String), String> {
    let (kind, path) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=PATH, got '{}'", raw))?;
    let kind = kind.trim().to_lowercase();
    let kind = BadgeKind::ALL
        .into_iter()
        .find(|k| k.as_str() == kind)
        .ok_or_else(|| format!("unknown ranking system '{}'", kind))?;
    let path = path.trim();
    if path.is_empty() {
        return Err(format!("missing path for '{}'", kind));
    }
    Ok((kind, path.to_string()))
}

/// Where ranking data comes from
#[derive(Args, Clone, Debug, Default)]
pub struct IndexArgs {
    /// Settings JSON with ranking lists and badge toggles (optionally .gz)
    #[arg(short, long)]
    pub settings: Option<String>,

    /// Extra indices JSON (quartiles, JCR, h5, ...), optionally .gz
    #[arg(short, long)]
    pub extra: Option<String>,

    /// Parquet rank table with name/value columns, as KIND=PATH (repeatable)
    #[arg(long = "table", value_parser = parse_table_spec)]
    pub tables: Vec<(BadgeKind, String)>,
}

#[derive(Parser, Clone)]
pub struct NormalizeArgs {
    /// Venue strings to normalize
    pub venues: Vec<String>,

    /// File with one venue per line (optionally .gz)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Write JSONL instead of printing tab-separated lines
    #[arg(short, long)]
    pub output: Option<String>,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct CompileArgs {
    #[command(flatten)]
    pub index: IndexArgs,

    /// Write every non-empty table that --table can load back as <kind>.parquet into this directory
    #[arg(long)]
    pub export_dir: Option<String>,

    /// Summary JSON file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct AnnotateArgs {
    /// Paper records, one JSON object per line (optionally .gz)
    #[arg(short, long, required = true)]
    pub input: String,

    /// Annotated JSONL output
    #[arg(short, long, default_value = "annotated.jsonl")]
    pub output: String,

    #[command(flatten)]
    pub index: IndexArgs,

    /// Year used for ages and velocities (default: current UTC year)
    #[arg(long)]
    pub current_year: Option<i32>,

    /// Number of threads (0 for auto)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct StatsArgs {
    /// Profile paper records, one JSON object per line (optionally .gz)
    #[arg(short, long, required = true)]
    pub input: String,

    /// Profile owner's full name, used to find them in author lists
    #[arg(short, long, required = true)]
    pub author: String,

    /// Authorship positions to include: all, first, last, middle, solo or a combination like first+last
    #[arg(short, long, default_value = "all")]
    pub position: String,

    #[command(flatten)]
    pub index: IndexArgs,

    /// Stats JSON file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Year used for ages and velocities (default: current UTC year)
    #[arg(long)]
    pub current_year: Option<i32>,

    /// Number of threads (0 for auto)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}
