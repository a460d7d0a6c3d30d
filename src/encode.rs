//! Group Serializer
//!
//! Walks a nested mapping recursively and emits the text lines the tokenizer
//! can read back. Names are sorted at every level so the output is
//! reproducible across runs, settings are emitted before subsections, and
//! every name and scalar goes through the escaper so the round trip is
//! lossless.

use crate::value::{Group, Value};

/// Characters that force a name or value to be serialized quoted.
///
/// Everything the tokenizer treats specially: the list delimiter, both quote
/// characters, both separators, the comment marker, the escape character, and
/// whitespace.
const QUOTE_TRIGGERS: &[char] = &[
    ',', '"', '\'', '=', ':', ' ', '#', '\\', '\t', '\x0b', '\x0c', '\n', '\r',
];

/// Spaces per indentation level in serialized output.
const INDENT_WIDTH: usize = 4;

/// Serialize a whole configuration tree to document text.
///
/// The document always ends with a newline; an empty mapping serializes to a
/// single blank line.
pub fn serialize(group: &Group) -> String {
    let mut text = serialize_group(group, 0).join("\n");
    text.push('\n');
    text
}

/// Serialize one mapping level to its output lines at the given depth.
fn serialize_group(group: &Group, indentation: usize) -> Vec<String> {
    let indent = " ".repeat(INDENT_WIDTH * indentation);
    let mut setting_lines = Vec::new();
    let mut group_lines = Vec::new();

    let mut names: Vec<&String> = group.keys().collect();
    names.sort();
    for name in names {
        match &group[name] {
            Value::Absent => {
                setting_lines.push(format!("{}{} =", indent, escape(name)));
            }
            Value::String(value) => {
                setting_lines.push(format!("{}{} = {}", indent, escape(name), escape(value)));
            }
            Value::List(items) => {
                let mut joined = items
                    .iter()
                    .map(|item| escape(item))
                    .collect::<Vec<_>>()
                    .join(", ");
                // A one-element list needs the trailing comma to load back as
                // a list rather than a scalar.
                if items.len() == 1 {
                    joined.push(',');
                }
                setting_lines.push(format!("{}{} = {}", indent, escape(name), joined));
            }
            Value::Group(child) => {
                group_lines.push(format!("{}{}:", indent, escape(name)));
                group_lines.extend(serialize_group(child, indentation + 1));
                group_lines.push(String::new());
            }
        }
    }

    setting_lines.extend(group_lines);
    setting_lines
}

/// Escape a name or scalar so that tokenizing it reproduces the input
/// exactly.
///
/// The empty string escapes to an explicit `""`, which would otherwise load
/// back as an absent value. Strings containing any tokenizer-significant
/// character are wrapped in double quotes with the backslash, double quote,
/// LF, and CR characters backslash-escaped. Everything else passes through
/// unchanged.
pub fn escape(value: &str) -> String {
    if value.is_empty() {
        return "\"\"".to_string();
    }
    if !value.contains(QUOTE_TRIGGERS) {
        return value.to_string();
    }
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            ch => escaped.push(ch),
        }
    }
    escaped.push('"');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn root(entries: Vec<(&str, Value)>) -> Group {
        entries
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    #[test]
    fn test_escape_plain_string_unchanged() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("dotted.name-1"), "dotted.name-1");
    }

    #[test]
    fn test_escape_empty_string() {
        assert_eq!(escape(""), "\"\"");
    }

    #[test]
    fn test_escape_quotes_significant_characters() {
        assert_eq!(escape("a b"), "\"a b\"");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("a#b"), "\"a#b\"");
        assert_eq!(escape("a:b"), "\"a:b\"");
        assert_eq!(escape("it's"), "\"it's\"");
    }

    #[test]
    fn test_escape_translates_control_characters() {
        assert_eq!(escape("a\nb"), "\"a\\nb\"");
        assert_eq!(escape("a\rb"), "\"a\\rb\"");
        assert_eq!(escape("a\\b"), "\"a\\\\b\"");
        assert_eq!(escape("a\"b"), "\"a\\\"b\"");
    }

    #[test]
    fn test_empty_tree_is_one_blank_line() {
        assert_eq!(serialize(&Group::new()), "\n");
    }

    #[test]
    fn test_names_sorted_and_settings_before_sections() {
        let tree = root(vec![
            ("zeta", Value::String("1".into())),
            ("section", Value::Group(root(vec![("inner", Value::String("2".into()))]))),
            ("alpha", Value::String("3".into())),
        ]);
        assert_eq!(
            serialize(&tree),
            "alpha = 3\nzeta = 1\nsection:\n    inner = 2\n\n"
        );
    }

    #[test]
    fn test_absent_value_has_no_right_hand_side() {
        let tree = root(vec![("gone", Value::Absent)]);
        assert_eq!(serialize(&tree), "gone =\n");
    }

    #[test]
    fn test_single_element_list_gets_trailing_comma() {
        let tree = root(vec![("one", Value::List(vec!["a".into()]))]);
        assert_eq!(serialize(&tree), "one = a,\n");
        let tree = root(vec![(
            "two",
            Value::List(vec!["a".into(), "b".into()]),
        )]);
        assert_eq!(serialize(&tree), "two = a, b\n");
    }

    #[test]
    fn test_serialize_parse_round_trip() {
        let tree = root(vec![
            ("plain", Value::String("value".into())),
            ("spaced", Value::String("needs, escaping: here #\"".into())),
            ("empty", Value::String("".into())),
            ("missing", Value::Absent),
            ("items", Value::List(vec!["a b".into(), "c".into()])),
            (
                "section",
                Value::Group(root(vec![(
                    "nested",
                    Value::Group(root(vec![("deep", Value::String("1".into()))])),
                )])),
            ),
        ]);
        let reparsed = parse(&serialize(&tree)).unwrap();
        assert_eq!(reparsed, tree);
    }
}
