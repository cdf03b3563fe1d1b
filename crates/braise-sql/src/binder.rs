//! Binds placeholder values into a native command.

use crate::ParamSource;
use braise_core::{stmt::Value, Command};

use indexmap::IndexSet;

const PREFIX: char = '@';

/// Scans `sql` for placeholders and adds one parameter per distinct name.
///
/// Each placeholder is owned by the first source whose text references it.
/// The first occurrence of a name pops the next value off its owner's queue;
/// an exhausted queue, or a placeholder no source owns, binds null. Later
/// occurrences of a bound name are skipped.
pub fn bind(sql: &str, sources: &[ParamSource], command: &mut impl Command) {
    let owners = sources
        .iter()
        .map(|source| placeholders(&source.text).collect::<IndexSet<_>>())
        .collect::<Vec<_>>();

    let mut cursors = vec![0; sources.len()];
    let mut bound = IndexSet::new();

    for name in placeholders(sql) {
        if !bound.insert(name) {
            continue;
        }

        let value = match owners.iter().position(|names| names.contains(name)) {
            Some(owner) => {
                let value = sources[owner].values.get(cursors[owner]).cloned();
                cursors[owner] += 1;
                value.unwrap_or_default()
            }
            None => Value::Null,
        };

        tracing::trace!(name, ?value, "binding parameter");
        command.add_parameter(name, value);
    }
}

/// Placeholder tokens in order of appearance, prefix included. Text inside
/// single-quoted literals and `@@` system variables are skipped.
pub fn placeholders(sql: &str) -> impl Iterator<Item = &str> + '_ {
    let bytes = sql.as_bytes();
    let mut pos = 0;
    let mut quoted = false;

    std::iter::from_fn(move || {
        while pos < bytes.len() {
            let c = bytes[pos];

            if c == b'\'' {
                quoted = !quoted;
                pos += 1;
                continue;
            }

            if quoted || c != PREFIX as u8 {
                pos += 1;
                continue;
            }

            let start = pos;
            pos += 1;
            while pos < bytes.len() && !is_terminator(bytes[pos]) {
                pos += 1;
            }

            let token = &sql[start..pos];
            if token.len() > 1 && !token.starts_with("@@") {
                return Some(token);
            }
        }

        None
    })
}

fn is_terminator(c: u8) -> bool {
    c.is_ascii_whitespace() || c == b',' || c == b')'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_stop_at_terminators() {
        let names = placeholders("f(@a,@b) = @c\n AND @@ROWCOUNT > 0 AND x = '@d'")
            .collect::<Vec<_>>();
        assert_eq!(names, ["@a", "@b", "@c"]);
    }
}
