use super::strip_keyword;
use braise_core::stmt::Value;

/// A caller-written query. The leading `SELECT` is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSql {
    text: String,
    params: Vec<Value>,
}

impl RawSql {
    pub fn raw(text: impl AsRef<str>) -> Self {
        Self {
            text: strip_keyword(text.as_ref(), "SELECT").to_string(),
            params: vec![],
        }
    }

    pub fn param(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    /// The query text without its leading `SELECT`.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}
