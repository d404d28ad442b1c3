use derive_builder::Builder;
use regex::Regex;

/// Scale applied to the graph column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphMode {
    /// No graph column.
    None,
    /// Bars proportional to the count.
    #[default]
    Linear,
    /// Bars proportional to log2 of the count.
    Log,
}

/// Immutable configuration for one histogram run.
///
/// Built once before processing via [`HistogramConfigBuilder`]; the builder
/// rejects word mode combined with key or weight fields, and key indices of
/// zero.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct HistogramConfig {
    /// 1-based key field indices; negative values count back from the last
    /// field. Empty means the whole record is the key.
    #[builder(default)]
    pub key_fields: Vec<i32>,

    /// Weight column, indexed as above. Zero means an implicit weight of 1
    /// for every record.
    #[builder(default)]
    pub weight_field: i32,

    /// Tokenize input on Unicode whitespace runs instead of reading lines.
    #[builder(default)]
    pub words: bool,

    #[builder(default)]
    pub graph: GraphMode,

    /// Regular expression splitting a record into fields.
    #[builder(default = r#""\\s+".to_string()"#)]
    pub field_delimiter: String,

    /// Empty selects fixed-width auto formatting; anything else is emitted
    /// literally between columns.
    #[builder(default)]
    pub output_separator: String,

    /// Caller-resolved terminal width. Callers floor this at 20.
    #[builder(default = "80")]
    pub terminal_width: usize,

    /// Snippet keys that overflow the key column.
    #[builder(default)]
    pub snippet: bool,
}

impl HistogramConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        let words = self.words.unwrap_or(false);
        let has_keys = self.key_fields.as_ref().is_some_and(|k| !k.is_empty());
        let has_weight = self.weight_field.is_some_and(|w| w != 0);
        if words && (has_keys || has_weight) {
            return Err("word mode cannot be combined with key or weight fields".into());
        }
        if self.key_fields.as_ref().is_some_and(|k| k.contains(&0)) {
            return Err("key field indices are 1-based; 0 is not a field".into());
        }
        // Compile the delimiter here so a bad regex fails at configuration
        // time, whether or not key or weight selectors end up using it.
        if let Some(delimiter) = &self.field_delimiter {
            if let Err(err) = Regex::new(delimiter) {
                return Err(format!("invalid field delimiter: {err}"));
            }
        }
        Ok(())
    }
}
