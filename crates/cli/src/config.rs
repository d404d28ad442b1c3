// crates/cli/src/config.rs
use hist_core::{GraphMode, HistogramConfig, HistogramConfigBuilder};

use crate::args::{Args, ScaleArg};

const DEFAULT_WIDTH: usize = 80;
const MIN_WIDTH: usize = 20;

/// Builds the core configuration from parsed flags, resolving the terminal
/// width and unescaping `\t` sequences in the delimiters.
pub fn config_from_args(args: &Args) -> anyhow::Result<HistogramConfig> {
    let config = HistogramConfigBuilder::default()
        .key_fields(args.keys.clone())
        .weight_field(args.weight)
        .words(args.words)
        .graph(graph_mode(args))
        .field_delimiter(unescape_tabs(&args.ifs))
        .output_separator(unescape_tabs(&args.ofs))
        .terminal_width(resolve_width(args))
        .snippet(args.snippet)
        .build()?;
    Ok(config)
}

fn graph_mode(args: &Args) -> GraphMode {
    if !args.graph {
        return GraphMode::None;
    }
    match args.scale {
        ScaleArg::Linear => GraphMode::Linear,
        ScaleArg::Log => GraphMode::Log,
        ScaleArg::None => GraphMode::None,
    }
}

fn resolve_width(args: &Args) -> usize {
    let width = args.width.filter(|w| *w > 0).unwrap_or_else(|| {
        if !args.ofs.is_empty() {
            // Consistent output for CSV and friends regardless of the
            // terminal the command runs in.
            DEFAULT_WIDTH
        } else {
            detected_width()
        }
    });
    width.max(MIN_WIDTH)
}

fn detected_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| usize::from(w))
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

fn unescape_tabs(s: &str) -> String {
    s.replace("\\t", "\t")
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn width_override_wins_but_is_floored() {
        let args = Args::parse_from(["hist", "--width", "55"]);
        assert_eq!(resolve_width(&args), 55);
        let args = Args::parse_from(["hist", "--width", "5"]);
        assert_eq!(resolve_width(&args), MIN_WIDTH);
    }

    #[test]
    fn literal_separator_pins_the_default_width() {
        let args = Args::parse_from(["hist", "--ofs", ","]);
        assert_eq!(resolve_width(&args), DEFAULT_WIDTH);
    }

    #[test]
    fn scale_flag_maps_to_graph_mode() {
        let args = Args::parse_from(["hist", "--scale", "log"]);
        assert_eq!(graph_mode(&args), GraphMode::Log);
        let args = Args::parse_from(["hist", "--graph", "false", "--scale", "log"]);
        assert_eq!(graph_mode(&args), GraphMode::None);
        let args = Args::parse_from(["hist", "--scale", "none"]);
        assert_eq!(graph_mode(&args), GraphMode::None);
    }

    #[test]
    fn tab_sequences_are_unescaped() {
        let args = Args::parse_from(["hist", "--ofs", r"\t", "--ifs", r"\t+"]);
        let config = config_from_args(&args).unwrap();
        assert_eq!(config.output_separator, "\t");
        assert_eq!(config.field_delimiter, "\t+");
    }
}
