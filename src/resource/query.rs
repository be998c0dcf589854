//! Query-string parameters of a resource address
//!
//! A parameter may appear several times (`?status=active&status=closed`).
//! Every occurrence is kept in arrival order, and readers that want a single
//! value take the first one.

use std::borrow::Cow;

/// Ordered mapping from parameter name to its raw values
///
/// Names keep the order of their first appearance; values keep the order in
/// which they occurred. Names and values are percent-decoded, with `+`
/// standing for a space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        QueryParams { params: Vec::new() }
    }

    /// Parse the part of an address after `?`
    ///
    /// Empty segments (`a=1&&b=2`) are skipped and a segment without `=`
    /// binds its name to the empty string.
    ///
    /// # Arguments
    ///
    /// * `query` - Raw query string, without the leading `?`
    pub fn parse(query: &str) -> Self {
        let mut params = QueryParams::new();
        for segment in query.split('&').filter(|segment| !segment.is_empty()) {
            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            params.append(decode_component(name), decode_component(value));
        }
        params
    }

    /// Add one occurrence of a parameter
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, values)) => values.push(value),
            None => self.params.push((name, vec![value])),
        }
    }

    /// Effective value of a parameter: its first occurrence
    pub fn first(&self, name: &str) -> Option<&str> {
        self.all(name).first().map(String::as_str)
    }

    /// Every occurrence of a parameter, in arrival order
    pub fn all(&self, name: &str) -> &[String] {
        self.params
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (name, value) in iter {
            params.append(name, value);
        }
        params
    }
}

/// Percent-decode one query component, treating `+` as a space
///
/// Sequences that do not decode to UTF-8 are kept verbatim.
pub(crate) fn decode_component(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_single_values() {
        let params = QueryParams::parse("status=active&balanceMin=1000");

        assert_eq!(params.first("status"), Some("active"));
        assert_eq!(params.first("balanceMin"), Some("1000"));
        assert_eq!(params.first("name"), None);
    }

    #[test]
    fn test_repeated_parameter_first_wins() {
        let params = QueryParams::parse("status=closed&type=credit&status=active");

        assert_eq!(params.first("status"), Some("closed"));
        assert_eq!(params.all("status"), ["closed".to_string(), "active".to_string()]);
    }

    #[rstest]
    #[case::percent_space("name=Robert%20Collins", "Robert Collins")]
    #[case::plus_space("name=Robert+Collins", "Robert Collins")]
    #[case::encoded_plus("name=A%2BB", "A+B")]
    #[case::invalid_utf8("name=%FF", "%FF")]
    fn test_values_are_decoded(#[case] query: &str, #[case] expected: &str) {
        let params = QueryParams::parse(query);
        assert_eq!(params.first("name"), Some(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::only_separators("&&")]
    fn test_parse_empty(#[case] query: &str) {
        assert!(QueryParams::parse(query).is_empty());
    }

    #[test]
    fn test_name_without_value_binds_empty_string() {
        let params = QueryParams::parse("recipient&sender=acc-001");

        assert_eq!(params.first("recipient"), Some(""));
        assert_eq!(params.first("sender"), Some("acc-001"));
    }

    #[test]
    fn test_from_iterator_groups_by_name() {
        let params: QueryParams = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();

        assert_eq!(params.all("a"), ["1".to_string(), "3".to_string()]);
        assert_eq!(params.first("b"), Some("2"));
    }
}
