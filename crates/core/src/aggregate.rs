use std::collections::HashMap;
use std::io::BufRead;

use crate::config::HistogramConfig;
use crate::error::{Result, WeightError};
use crate::fields::FieldSelector;

/// One input record dropped during aggregation, identified by its 1-based
/// position in the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub record: u64,
    pub error: WeightError,
}

/// Result of the aggregation pass.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub counts: HashMap<String, i64>,
    /// Byte length of the longest key seen. Diagnostic only; layout does not
    /// depend on it.
    pub max_key_len: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl Aggregation {
    fn accumulate(&mut self, key: String, weight: i64) {
        self.max_key_len = self.max_key_len.max(key.len());
        *self.counts.entry(key).or_insert(0) += weight;
    }
}

/// Consumes `input` and accumulates a signed count per key.
///
/// Records are lines, or whitespace-delimited tokens in word mode. A record
/// whose weight field is missing or not an integer is discarded entirely and
/// noted in [`Aggregation::skipped`]; only a stream read error is fatal.
pub fn aggregate<R: BufRead>(input: R, config: &HistogramConfig) -> Result<Aggregation> {
    let key_selector = match config.key_fields.as_slice() {
        [] => None,
        indices => Some(FieldSelector::new(&config.field_delimiter, indices)?),
    };
    let weight_selector = match config.weight_field {
        0 => None,
        index => Some(FieldSelector::new(&config.field_delimiter, &[index])?),
    };

    let mut aggregation = Aggregation::default();
    let mut record = 0u64;
    for line in input.lines() {
        let line = line?;
        if config.words {
            for token in line.split_whitespace() {
                record += 1;
                aggregation.accumulate(token.to_string(), 1);
            }
            continue;
        }

        record += 1;
        let weight = match &weight_selector {
            None => 1,
            Some(selector) => match parse_weight(selector, &line) {
                Ok(weight) => weight,
                Err(error) => {
                    aggregation.skipped.push(SkippedRecord { record, error });
                    continue;
                }
            },
        };
        let key = match &key_selector {
            None => line,
            Some(selector) => join_fields(&selector.fields(&line)),
        };
        aggregation.accumulate(key, weight);
    }
    Ok(aggregation)
}

fn parse_weight(selector: &FieldSelector, line: &str) -> std::result::Result<i64, WeightError> {
    match selector.fields(line).first() {
        Some(Some(raw)) => raw
            .parse()
            .map_err(|_| WeightError::NotAnInteger((*raw).to_string())),
        _ => Err(WeightError::ShortRecord),
    }
}

/// Rejoins selected key fields with a single ASCII space, regardless of the
/// output separator. Missing fields contribute empty strings.
fn join_fields(fields: &[Option<&str>]) -> String {
    let mut key = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            key.push(' ');
        }
        key.push_str(field.unwrap_or(""));
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HistogramConfigBuilder;

    #[test]
    fn whole_lines_count_once_each() {
        let config = HistogramConfigBuilder::default().build().unwrap();
        let aggregation = aggregate("x\ny\nx\n".as_bytes(), &config).unwrap();
        assert_eq!(aggregation.counts.get("x"), Some(&2));
        assert_eq!(aggregation.counts.get("y"), Some(&1));
        assert_eq!(aggregation.max_key_len, 1);
        assert!(aggregation.skipped.is_empty());
    }

    #[test]
    fn missing_key_fields_join_as_empty() {
        let config = HistogramConfigBuilder::default()
            .key_fields(vec![1, 3])
            .build()
            .unwrap();
        let aggregation = aggregate("a b\n".as_bytes(), &config).unwrap();
        assert_eq!(aggregation.counts.get("a "), Some(&1));
    }

    #[test]
    fn bad_weight_discards_the_whole_record() {
        let config = HistogramConfigBuilder::default()
            .weight_field(2)
            .build()
            .unwrap();
        let aggregation = aggregate("a x\nb 2\nc\n".as_bytes(), &config).unwrap();
        assert_eq!(aggregation.counts.len(), 1);
        assert_eq!(aggregation.counts.get("b 2"), Some(&2));
        assert_eq!(
            aggregation.skipped,
            vec![
                SkippedRecord {
                    record: 1,
                    error: WeightError::NotAnInteger("x".to_string()),
                },
                SkippedRecord {
                    record: 3,
                    error: WeightError::ShortRecord,
                },
            ]
        );
    }

    #[test]
    fn negative_weights_accumulate() {
        let config = HistogramConfigBuilder::default()
            .key_fields(vec![1])
            .weight_field(-1)
            .build()
            .unwrap();
        let aggregation = aggregate("a 5\na -7\n".as_bytes(), &config).unwrap();
        assert_eq!(aggregation.counts.get("a"), Some(&-2));
    }
}
