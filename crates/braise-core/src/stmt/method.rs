use std::{fmt, ops::RangeInclusive};

/// String methods that predicates may call.
///
/// The table is fixed: any other method name is reported as unsupported by
/// the translator. Lookup by name ignores ASCII case.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    StartsWith,
    EndsWith,
    Contains,
    IsNullOrEmpty,
    ToUpper,
    ToLower,
    Replace,
    Trim,
    Substring,
}

const METHODS: &[(&str, Method)] = &[
    ("StartsWith", Method::StartsWith),
    ("EndsWith", Method::EndsWith),
    ("Contains", Method::Contains),
    ("IsNullOrEmpty", Method::IsNullOrEmpty),
    ("ToUpper", Method::ToUpper),
    ("ToLower", Method::ToLower),
    ("Replace", Method::Replace),
    ("Trim", Method::Trim),
    ("Substring", Method::Substring),
];

impl Method {
    pub fn from_name(name: &str) -> Option<Method> {
        METHODS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, method)| *method)
    }

    pub fn name(self) -> &'static str {
        METHODS
            .iter()
            .find(|(_, method)| *method == self)
            .map(|(name, _)| *name)
            .unwrap_or("?")
    }

    /// Static methods take their subject as the first argument instead of a
    /// call target.
    pub fn is_static(self) -> bool {
        matches!(self, Method::IsNullOrEmpty)
    }

    /// Returns true if the method produces a boolean.
    pub fn is_predicate(self) -> bool {
        matches!(
            self,
            Method::StartsWith | Method::EndsWith | Method::Contains | Method::IsNullOrEmpty
        )
    }

    /// Number of accepted arguments, not counting the call target.
    pub fn arity(self) -> RangeInclusive<usize> {
        match self {
            Method::ToUpper | Method::ToLower | Method::Trim => 0..=0,
            Method::StartsWith | Method::EndsWith | Method::Contains | Method::IsNullOrEmpty => {
                1..=1
            }
            Method::Replace => 2..=2,
            Method::Substring => 1..=2,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Method::from_name("startswith"), Some(Method::StartsWith));
        assert_eq!(Method::from_name("TOUPPER"), Some(Method::ToUpper));
        assert_eq!(Method::from_name("PadLeft"), None);
    }

    #[test]
    fn names_round_trip() {
        for (name, method) in METHODS {
            assert_eq!(method.name(), *name);
        }
    }
}
