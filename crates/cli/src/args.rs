// crates/cli/src/args.rs
use clap::{ArgAction, Parser, ValueEnum};

/// Graph scale selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ScaleArg {
    Linear,
    Log,
    None,
}

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "hist",
    version,
    about = "Compute a weighted frequency histogram over stdin",
    long_about = "hist computes a histogram on its input.\n\n\
        Output order is by increasing counts. To change the order, pipe\n\
        through sort and possibly its -n and -k flags.\n\n\
        Only integer weights are supported."
)]
pub struct Args {
    /// Input field delimiter (regexp); a literal \t is taken as a tab
    #[arg(long, default_value = r"\s+")]
    pub ifs: String,

    /// Output separator. Empty selects fixed-width auto formatting; \t is
    /// taken as a tab, other values literally
    #[arg(long, default_value = "")]
    pub ofs: String,

    /// Tokenize input on Unicode whitespace. Excludes -k and -w
    #[arg(long, conflicts_with_all = ["keys", "weight"])]
    pub words: bool,

    /// Key fields, comma separated; empty to key on the entire record.
    /// Negative values count back from the last field
    #[arg(
        short = 'k',
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        value_parser = parse_field_index
    )]
    pub keys: Vec<i32>,

    /// Weight column. Zero for an implicit weight of 1 per record; negative
    /// values count back from the last field
    #[arg(short = 'w', long, default_value_t = 0, allow_negative_numbers = true)]
    pub weight: i32,

    /// Render the graph column
    #[arg(
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub graph: bool,

    /// Graph scale
    #[arg(long, value_enum, default_value_t = ScaleArg::Linear)]
    pub scale: ScaleArg,

    /// Terminal width (autodetected by default, falling back to 80)
    #[arg(long)]
    pub width: Option<usize>,

    /// Snippet long keys
    #[arg(long)]
    pub snippet: bool,
}

fn parse_field_index(s: &str) -> Result<i32, String> {
    let index: i32 = s
        .parse()
        .map_err(|err| format!("invalid field index '{s}': {err}"))?;
    if index == 0 {
        return Err("field indices are 1-based; 0 is not a field".to_string());
    }
    Ok(index)
}
