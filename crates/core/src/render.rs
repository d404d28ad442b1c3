use std::borrow::Cow;

use crate::config::GraphMode;
use crate::layout::{COUNT_WIDTH, Layout};
use crate::rank::Entry;
use crate::snippet::snippet;

/// Formats one ranked entry into a report line. Trailing padding from a
/// short key or graph cell is trimmed off.
pub fn render_line(
    entry: &Entry,
    layout: &Layout,
    scale: f64,
    mode: GraphMode,
    snippet_enabled: bool,
) -> String {
    let key = if snippet_enabled {
        snippet(&entry.key, layout.key_width).0
    } else {
        Cow::Borrowed(entry.key.as_str())
    };
    let key = key.as_ref();
    let line = match mode {
        GraphMode::None => join(layout, entry.count, key, None),
        GraphMode::Linear => {
            let value = entry.count as f64 / scale;
            join(layout, entry.count, key, Some(&bar(value)))
        }
        GraphMode::Log => {
            // log2 of a negative count is NaN and of zero is -Inf. Both are
            // rendered literally, never clamped to an empty bar.
            let value = (entry.count as f64).log2() / scale;
            join(layout, entry.count, key, Some(&bar(value)))
        }
    };
    line.trim_end_matches(' ').to_string()
}

fn join(layout: &Layout, count: i64, key: &str, graph: Option<&str>) -> String {
    match (&layout.separator, graph) {
        (Some(sep), Some(graph)) => format!("{count}{sep}{key}{sep}{graph}"),
        (Some(sep), None) => format!("{count}{sep}{key}"),
        (None, Some(graph)) => format!(
            "{count:>COUNT_WIDTH$} {key:<key_width$} {graph}",
            key_width = layout.key_width
        ),
        (None, None) => format!(
            "{count:>COUNT_WIDTH$} {key:<key_width$}",
            key_width = layout.key_width
        ),
    }
}

/// Builds the graph cell for a scaled value: a run of `+` or `-`, or the
/// literal text of a non-finite value.
fn bar(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    let sign = if value < 0.0 { '-' } else { '+' };
    // f64::round ties away from zero, which is the rounding the original
    // tool used for bar lengths.
    let len = value.abs().round() as usize;
    std::iter::repeat_n(sign, len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_renders_sign_runs() {
        assert_eq!(bar(1.8), "++");
        assert_eq!(bar(-1.8), "--");
        assert_eq!(bar(0.4), "");
        assert_eq!(bar(-0.5), "-");
        assert_eq!(bar(0.0), "");
    }

    #[test]
    fn bar_renders_non_finite_values_literally() {
        assert_eq!(bar(f64::NAN), "NaN");
        assert_eq!(bar(f64::INFINITY), "+Inf");
        assert_eq!(bar(f64::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn auto_mode_pads_and_trims() {
        let layout = Layout::plan(40, false, "");
        let entry = Entry {
            key: "a".to_string(),
            count: 7,
        };
        assert_eq!(
            render_line(&entry, &layout, 0.0, GraphMode::None, false),
            "              7 a"
        );
    }

    #[test]
    fn literal_separator_joins_at_natural_width() {
        let layout = Layout::plan(60, true, "%,");
        let entry = Entry {
            key: "k".to_string(),
            count: 4,
        };
        // 4 / (scale 2.0) rounds to 2. The separator passes through
        // verbatim, percent sign included.
        assert_eq!(
            render_line(&entry, &layout, 2.0, GraphMode::Linear, false),
            "4%,k%,++"
        );
    }
}
