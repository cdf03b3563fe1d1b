use crate::stmt::Value;

/// A native command object that holds SQL text and named parameters.
pub trait Command {
    fn set_text(&mut self, text: &str);

    fn text(&self) -> &str;

    /// Adds a named parameter. `name` is the placeholder token as it appears
    /// in the text, prefix included (e.g. `@0`).
    fn add_parameter(&mut self, name: &str, value: Value);

    /// Parameters in the order they were added.
    fn parameters(&self) -> Vec<(&str, &Value)>;
}
