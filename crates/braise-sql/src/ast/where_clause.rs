use super::strip_keyword;
use braise_core::stmt::Value;

/// A WHERE predicate: SQL text plus the values of its placeholders, in the
/// order the placeholders first appear.
#[derive(Debug, Clone, PartialEq)]
pub struct Where {
    text: String,
    params: Vec<Value>,
}

impl Where {
    /// Caller-written predicate. A leading `WHERE` is optional.
    pub fn raw(text: impl AsRef<str>) -> Self {
        Self {
            text: strip_keyword(text.as_ref(), "WHERE").to_string(),
            params: vec![],
        }
    }

    /// Appends the value for the next placeholder.
    pub fn param(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    pub(crate) fn with_params(text: String, params: Vec<Value>) -> Self {
        Self { text, params }
    }

    /// Combines two predicates with `AND`. Parameters of `self` come first.
    pub fn and(self, other: Where) -> Where {
        self.combine("AND", other)
    }

    /// Combines two predicates with `OR`. Parameters of `self` come first.
    pub fn or(self, other: Where) -> Where {
        self.combine("OR", other)
    }

    fn combine(mut self, op: &str, other: Where) -> Where {
        self.params.extend(other.params);
        Where {
            text: format!("({}) {op} ({})", self.text, other.text),
            params: self.params,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}
