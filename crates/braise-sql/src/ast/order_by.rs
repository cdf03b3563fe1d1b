use super::strip_keyword;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    text: String,
}

impl OrderBy {
    /// Caller-written ordering. A leading `ORDER BY` is optional.
    pub fn raw(text: impl AsRef<str>) -> Self {
        Self {
            text: strip_keyword(text.as_ref(), "ORDER BY").to_string(),
        }
    }

    /// Joins `column [ASC|DESC]` fragments, first fragment outermost.
    pub(crate) fn from_fragments(fragments: &[String]) -> Self {
        Self {
            text: fragments.join(", "),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
