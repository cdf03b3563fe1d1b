/// Removes a leading `keyword` (case-insensitive, words separated by any
/// whitespace) and trims the result. Text that does not start with the
/// keyword is only trimmed.
pub(crate) fn strip_keyword<'a>(text: &'a str, keyword: &str) -> &'a str {
    let mut rest = text.trim_start();

    for word in keyword.split_whitespace() {
        let Some(head) = rest.get(..word.len()) else {
            return text.trim();
        };

        if !head.eq_ignore_ascii_case(word) {
            return text.trim();
        }

        let tail = &rest[word.len()..];
        if !tail.is_empty() && !tail.starts_with(char::is_whitespace) {
            return text.trim();
        }

        rest = tail.trim_start();
    }

    rest.trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_word() {
        assert_eq!(strip_keyword("  where Id = 1 ", "WHERE"), "Id = 1");
        assert_eq!(strip_keyword("Id = 1", "WHERE"), "Id = 1");
    }

    #[test]
    fn strips_two_words() {
        assert_eq!(strip_keyword("ORDER   by Name DESC", "ORDER BY"), "Name DESC");
        assert_eq!(strip_keyword("order Name", "ORDER BY"), "order Name");
    }

    #[test]
    fn keyword_must_end_at_word_boundary() {
        assert_eq!(strip_keyword("WhereUsed = 1", "WHERE"), "WhereUsed = 1");
        assert_eq!(strip_keyword("SELECT", "SELECT"), "");
    }
}
