/// Character positions reserved for the count column in every mode.
pub const COUNT_WIDTH: usize = 15;

/// Planned column widths for one report.
///
/// In auto mode (`separator` is `None`) columns are separated by one space
/// and padded: the count right-justified to [`COUNT_WIDTH`], the key
/// left-justified to `key_width`. With a literal separator, fields render at
/// natural width and the separator is emitted verbatim between them (it is
/// never spliced into a format template, so `%` and braces need no
/// escaping); the computed widths still drive snippeting and scaling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub separator: Option<String>,
    pub key_width: usize,
    pub graph_width: usize,
}

impl Layout {
    /// Partitions `terminal_width` across the count, key, and graph columns.
    /// Subtractions saturate at zero so degenerate widths collapse in
    /// rendering instead of panicking.
    pub fn plan(terminal_width: usize, graph: bool, output_separator: &str) -> Self {
        let separator = if output_separator.is_empty() {
            None
        } else {
            Some(output_separator.to_string())
        };
        if graph {
            // One gap after the count column, two more around the key
            // column plus rounding slack from the halved width.
            let key_width = (terminal_width / 2).saturating_sub(COUNT_WIDTH + 1);
            let graph_width = terminal_width.saturating_sub(COUNT_WIDTH + key_width + 3);
            Self {
                separator,
                key_width,
                graph_width,
            }
        } else {
            Self {
                separator,
                key_width: terminal_width.saturating_sub(COUNT_WIDTH + 2),
                graph_width: 0,
            }
        }
    }
}
