use regex::Regex;

use crate::error::Result;

/// Selects fields out of a record by 1-based index, splitting on a
/// regular-expression delimiter. Negative indices count back from the last
/// field.
#[derive(Debug)]
pub struct FieldSelector {
    delimiter: Regex,
    indices: Vec<i32>,
}

impl FieldSelector {
    pub fn new(delimiter: &str, indices: &[i32]) -> Result<Self> {
        Ok(Self {
            delimiter: Regex::new(delimiter)?,
            indices: indices.to_vec(),
        })
    }

    /// Returns the selected fields of `line`, one slot per configured index.
    /// Out-of-range indices yield `None`. An empty index list returns every
    /// field.
    pub fn fields<'a>(&self, line: &'a str) -> Vec<Option<&'a str>> {
        let parts: Vec<&str> = self.delimiter.split(line).collect();
        if self.indices.is_empty() {
            return parts.into_iter().map(Some).collect();
        }
        self.indices
            .iter()
            .map(|&index| {
                let slot = if index < 0 {
                    parts.len() as i64 + i64::from(index)
                } else {
                    i64::from(index) - 1
                };
                usize::try_from(slot).ok().and_then(|i| parts.get(i).copied())
            })
            .collect()
    }
}
