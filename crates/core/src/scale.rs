use crate::config::GraphMode;
use crate::rank::Entry;

/// Derives the divisor that maps the data's magnitude range onto the graph
/// column. `entries` must already be ranked: the extreme counts sit at both
/// ends of the slice.
///
/// IEEE-754 semantics flow through the edge cases deliberately: a zero
/// `graph_width` divides to an infinity, and `log2(0)` is negative infinity.
/// Both propagate into rendering unmodified.
pub fn compute_scale(entries: &[Entry], graph_width: usize, mode: GraphMode) -> f64 {
    let max_magnitude = match (entries.first(), entries.last()) {
        (Some(first), Some(last)) => first.count.unsigned_abs().max(last.count.unsigned_abs()),
        _ => 0,
    };
    let magnitude = max_magnitude as f64;
    match mode {
        GraphMode::None => 0.0,
        GraphMode::Linear => magnitude / graph_width as f64,
        GraphMode::Log => magnitude.log2() / graph_width as f64,
    }
}
