use serde::{Deserialize, Serialize};
use url::Url;

use super::configuration::ConfigValue;

/// Kind of a validation rule attached to a configuration item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConstraintKind {
    StringLength,
    NumberRange,
    SimpleBoolean,
    EnumStrings,
    Uri,
    /// Anything this core does not know. Never satisfied.
    Unknown,
}

impl ConstraintKind {
    pub fn from_wire(kind: &str) -> Self {
        match kind {
            "STRING_LENGTH" => Self::StringLength,
            "NUMBER_RANGE" => Self::NumberRange,
            "SIMPLE_BOOLEAN" => Self::SimpleBoolean,
            "ENUM_STRINGS" => Self::EnumStrings,
            "URI" => Self::Uri,
            _ => Self::Unknown,
        }
    }
}

/// Rule-specific bounds. A missing bound does not restrict.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConstraintData {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub strings: Vec<String>,
}

impl ConstraintData {
    fn within_bounds(&self, n: i64) -> bool {
        self.min.is_none_or(|min| n >= min) && self.max.is_none_or(|max| n <= max)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub data: ConstraintData,
}

impl Constraint {
    pub fn string_length(min: i64, max: i64) -> Self {
        Self {
            kind: ConstraintKind::StringLength,
            data: ConstraintData {
                min: Some(min),
                max: Some(max),
                ..Default::default()
            },
        }
    }

    pub fn number_range(min: i64, max: i64) -> Self {
        Self {
            kind: ConstraintKind::NumberRange,
            data: ConstraintData {
                min: Some(min),
                max: Some(max),
                ..Default::default()
            },
        }
    }

    pub fn enum_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: ConstraintKind::EnumStrings,
            data: ConstraintData {
                strings: strings.into_iter().map(Into::into).collect(),
                ..Default::default()
            },
        }
    }

    pub fn of_kind(kind: ConstraintKind) -> Self {
        Self {
            kind,
            data: ConstraintData::default(),
        }
    }

    /// Check a draft against this single rule.
    pub fn accepts(&self, draft: &ConfigValue) -> bool {
        match self.kind {
            ConstraintKind::StringLength => draft.as_text().is_some_and(|text| {
                // lengths are counted in UTF-16 units, like the browser input
                let len = text.encode_utf16().count() as i64;
                self.data.within_bounds(len)
            }),
            ConstraintKind::NumberRange => {
                parse_integer(draft).is_some_and(|n| self.data.within_bounds(n))
            }
            ConstraintKind::SimpleBoolean => matches!(draft, ConfigValue::Boolean(_)),
            ConstraintKind::EnumStrings => draft
                .as_text()
                .is_some_and(|text| self.data.strings.iter().any(|s| s == text)),
            ConstraintKind::Uri => draft.as_text().is_some_and(is_valid_uri),
            ConstraintKind::Unknown => false,
        }
    }
}

/// Read an integer from a draft.
///
/// Text is parsed the way number inputs are read back: leading whitespace and
/// an optional sign are accepted and parsing stops at the first non-digit
/// (`"12px"` is 12). Text without leading digits, booleans and values outside
/// the `i64` range yield `None`.
pub fn parse_integer(draft: &ConfigValue) -> Option<i64> {
    match draft {
        ConfigValue::Number(n) => Some(*n),
        ConfigValue::Text(text) => {
            let trimmed = text.trim_start();
            let (sign, rest) = match trimmed.as_bytes().first() {
                Some(b'-') => ("-", &trimmed[1..]),
                Some(b'+') => ("", &trimmed[1..]),
                _ => ("", trimmed),
            };
            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if digits_end == 0 {
                return None;
            }
            format!("{sign}{}", &rest[..digits_end]).parse::<i64>().ok()
        }
        ConfigValue::Boolean(_) => None,
    }
}

/// Check that text is an absolute URI
pub fn is_valid_uri(text: &str) -> bool {
    Url::parse(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> ConfigValue {
        ConfigValue::Text(s.to_string())
    }

    mod number_range {
        use super::*;

        #[test]
        fn accepts_values_inside_range() {
            let c = Constraint::number_range(1, 10);
            assert!(c.accepts(&text("5")));
            assert!(c.accepts(&text("1")));
            assert!(c.accepts(&text("10")));
            assert!(c.accepts(&ConfigValue::Number(7)));
        }

        #[test]
        fn rejects_out_of_range_and_garbage() {
            let c = Constraint::number_range(1, 10);
            assert!(!c.accepts(&text("11")));
            assert!(!c.accepts(&text("0")));
            assert!(!c.accepts(&text("abc")));
            assert!(!c.accepts(&text("")));
            assert!(!c.accepts(&ConfigValue::Boolean(true)));
        }

        #[test]
        fn missing_bounds_do_not_restrict() {
            let c = Constraint::of_kind(ConstraintKind::NumberRange);
            assert!(c.accepts(&text("-99999")));
            assert!(!c.accepts(&text("x")));
        }
    }

    mod string_length {
        use super::*;

        #[test]
        fn accepts_lengths_within_bounds() {
            let c = Constraint::string_length(3, 8);
            assert!(c.accepts(&text("abc")));
            assert!(c.accepts(&text("abcdefgh")));
        }

        #[test]
        fn rejects_lengths_outside_bounds() {
            let c = Constraint::string_length(3, 8);
            assert!(!c.accepts(&text("")));
            assert!(!c.accepts(&text("ab")));
            assert!(!c.accepts(&text("abcdefghi")));
        }

        #[test]
        fn non_text_drafts_fail_closed() {
            // a number has no length to compare, so it never satisfies the rule
            let c = Constraint::string_length(0, 8);
            assert!(!c.accepts(&ConfigValue::Number(5)));
        }
    }

    #[test]
    fn enum_strings_checks_membership() {
        let c = Constraint::enum_strings(["a", "b"]);
        assert!(c.accepts(&text("a")));
        assert!(!c.accepts(&text("c")));
    }

    #[test]
    fn simple_boolean_requires_boolean() {
        let c = Constraint::of_kind(ConstraintKind::SimpleBoolean);
        assert!(c.accepts(&ConfigValue::Boolean(false)));
        assert!(!c.accepts(&text("true")));
    }

    #[test]
    fn uri_rejects_malformed_input() {
        let c = Constraint::of_kind(ConstraintKind::Uri);
        assert!(c.accepts(&text("https://example.org/hook")));
        assert!(!c.accepts(&text("not a uri")));
        assert!(!c.accepts(&text("")));
    }

    #[test]
    fn unknown_constraint_never_accepts() {
        let c = Constraint::of_kind(ConstraintKind::Unknown);
        assert!(!c.accepts(&text("anything")));
    }

    #[test]
    fn parse_integer_reads_leading_digits() {
        assert_eq!(parse_integer(&text("  42")), Some(42));
        assert_eq!(parse_integer(&text("-7")), Some(-7));
        assert_eq!(parse_integer(&text("+3")), Some(3));
        assert_eq!(parse_integer(&text("12px")), Some(12));
        assert_eq!(parse_integer(&text("px12")), None);
        assert_eq!(parse_integer(&text("-")), None);
        assert_eq!(parse_integer(&text("99999999999999999999")), None);
    }
}
