use std::borrow::Cow;

/// Marker appended to truncated keys. One code point.
pub const SNIP_MARK: char = '…';

/// Truncates `s` to at most `max_width` Unicode code points, appending the
/// ellipsis marker when truncation occurs.
///
/// This counts code points, not display columns: double-width glyphs are
/// not special-cased. An input that fits is returned unchanged; when
/// `max_width <= 1` there is no room for a prefix and only the marker is
/// returned.
pub fn snippet(s: &str, max_width: usize) -> (Cow<'_, str>, bool) {
    if s.chars().count() <= max_width {
        return (Cow::Borrowed(s), false);
    }
    if max_width <= 1 {
        return (Cow::Owned(SNIP_MARK.to_string()), true);
    }
    let end = s
        .char_indices()
        .nth(max_width - 1)
        .map_or(s.len(), |(pos, _)| pos);
    let mut out = String::with_capacity(end + SNIP_MARK.len_utf8());
    out.push_str(&s[..end]);
    out.push(SNIP_MARK);
    (Cow::Owned(out), true)
}
