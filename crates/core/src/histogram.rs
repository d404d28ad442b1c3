use std::io::{BufRead, Write};

use crate::aggregate::{SkippedRecord, aggregate};
use crate::config::{GraphMode, HistogramConfig};
use crate::error::Result;
use crate::layout::Layout;
use crate::rank::{Entry, rank};
use crate::render::render_line;
use crate::scale::compute_scale;

/// Ranked output of one histogram run.
#[derive(Debug)]
pub struct Report {
    /// Entries ordered by count ascending, ties broken by key byte order.
    pub entries: Vec<Entry>,
    /// Byte length of the longest key seen during aggregation.
    pub max_key_len: usize,
    /// Records dropped because their weight field would not parse.
    pub skipped: Vec<SkippedRecord>,
}

/// Aggregates `input` and ranks the result. One pass over the stream; a
/// read error aborts with no partial report.
pub fn run<R: BufRead>(config: &HistogramConfig, input: R) -> Result<Report> {
    let aggregation = aggregate(input, config)?;
    Ok(Report {
        entries: rank(aggregation.counts),
        max_key_len: aggregation.max_key_len,
        skipped: aggregation.skipped,
    })
}

/// Renders `report` to `out`, one terminated line per entry, lowest counts
/// first. Nothing follows the last entry.
pub fn print_report<W: Write>(config: &HistogramConfig, report: &Report, mut out: W) -> Result<()> {
    let layout = Layout::plan(
        config.terminal_width,
        config.graph != GraphMode::None,
        &config.output_separator,
    );
    let scale = compute_scale(&report.entries, layout.graph_width, config.graph);
    for entry in &report.entries {
        let line = render_line(entry, &layout, scale, config.graph, config.snippet);
        writeln!(out, "{line}")?;
    }
    Ok(())
}
