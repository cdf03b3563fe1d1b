use super::strip_keyword;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBy {
    text: String,
}

impl GroupBy {
    /// Caller-written grouping. A leading `GROUP BY` is optional.
    pub fn raw(text: impl AsRef<str>) -> Self {
        Self {
            text: strip_keyword(text.as_ref(), "GROUP BY").to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
