use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Represents a number that can preserve distinction between I64, U64, and F64 for round-tripping.
/// CDDA data is sensitive to integer vs float formatting in some fields.
#[derive(Debug, Clone)]
pub enum CdNumber {
    I64(i64),
    U64(u64),
    F64(f64),
}

/// Integer equality crosses the signedness variants: the parser delivers
/// non-negative integers as U64 while edits produce I64, and both spell the
/// same number. Integers and floats stay distinct (3 != 3.0).
impl PartialEq for CdNumber {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CdNumber::I64(a), CdNumber::I64(b)) => a == b,
            (CdNumber::U64(a), CdNumber::U64(b)) => a == b,
            (CdNumber::F64(a), CdNumber::F64(b)) => a == b,
            (CdNumber::I64(a), CdNumber::U64(b)) | (CdNumber::U64(b), CdNumber::I64(a)) => {
                u64::try_from(*a).is_ok_and(|a| a == *b)
            }
            _ => false,
        }
    }
}

impl CdNumber {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CdNumber::I64(v) => Some(*v),
            CdNumber::U64(v) => i64::try_from(*v).ok(),
            CdNumber::F64(_) => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            CdNumber::I64(v) => *v as f64,
            CdNumber::U64(v) => *v as f64,
            CdNumber::F64(v) => *v,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, CdNumber::I64(_) | CdNumber::U64(_))
    }
}

impl Serialize for CdNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CdNumber::I64(v) => serializer.serialize_i64(*v),
            CdNumber::U64(v) => serializer.serialize_u64(*v),
            CdNumber::F64(v) => serializer.serialize_f64(*v),
        }
    }
}

impl<'de> Deserialize<'de> for CdNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumberVisitor;

        impl<'de> de::Visitor<'de> for NumberVisitor {
            type Value = CdNumber;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a JSON number")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(CdNumber::I64(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(CdNumber::U64(v))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(CdNumber::F64(v))
            }
        }

        deserializer.deserialize_any(NumberVisitor)
    }
}

/// Represents one JSON value from a CDDA data file.
/// Object keys keep their file order so edited files stay diff-friendly.
#[derive(Debug, Clone, PartialEq)]
pub enum CdValue {
    Null,
    Bool(bool),
    Number(CdNumber),
    String(String),
    Array(Vec<CdValue>),
    Object(IndexMap<String, CdValue>),
}

impl CdValue {
    pub fn as_object(&self) -> Option<&IndexMap<String, CdValue>> {
        match self {
            CdValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut IndexMap<String, CdValue>> {
        match self {
            CdValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[CdValue]> {
        match self {
            CdValue::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CdValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CdValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&CdValue> {
        self.as_object().and_then(|m| m.get(key))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            CdValue::Null => "null",
            CdValue::Bool(_) => "bool",
            CdValue::Number(_) => "number",
            CdValue::String(_) => "string",
            CdValue::Array(_) => "array",
            CdValue::Object(_) => "object",
        }
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, CdValue::Array(_) | CdValue::Object(_))
    }

    pub fn empty_object() -> CdValue {
        CdValue::Object(IndexMap::new())
    }

    /// Parse a CDDA data file. The game's JSON dialect allows `//` and
    /// `/* ... */` comments, which the JSON5 grammar covers; going through a
    /// real lexer means comment-like text inside string literals survives.
    pub fn parse_relaxed(text: &str) -> anyhow::Result<CdValue> {
        Ok(json5::from_str::<CdValue>(text)?)
    }

    /// Serialize in CDME's canonical pretty style:
    /// - 2-space indentation
    /// - keys always quoted
    /// - non-ASCII characters left unescaped (UTF-8 output)
    /// - one object/array entry per line
    /// - trailing newline
    pub fn format_pretty(&self) -> String {
        let mut out = String::new();
        self.write_json(&mut out, 0, true);
        out.push('\n');
        out
    }

    /// Single-line form for previews and scalar fallbacks.
    pub fn format_compact(&self) -> String {
        let mut out = String::new();
        self.write_json(&mut out, 0, false);
        out
    }

    /// How a value reads when stuffed into a single-line text editor:
    /// strings verbatim, null as empty, other values in compact JSON form.
    pub fn to_display_string(&self) -> String {
        match self {
            CdValue::String(s) => s.clone(),
            CdValue::Null => String::new(),
            other => other.format_compact(),
        }
    }

    fn write_json(&self, out: &mut String, indent: usize, pretty: bool) {
        match self {
            CdValue::Null => out.push_str("null"),
            CdValue::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
            CdValue::Number(n) => n.write_json(out),
            CdValue::String(s) => write_escaped_string(out, s),
            CdValue::Array(values) => {
                out.push('[');
                if pretty && !values.is_empty() {
                    out.push('\n');
                }
                for (i, v) in values.iter().enumerate() {
                    if pretty {
                        out.push_str(&" ".repeat(indent + 2));
                    } else if i > 0 {
                        out.push(' ');
                    }
                    v.write_json(out, indent + 2, pretty);
                    if i + 1 != values.len() {
                        out.push(',');
                    }
                    if pretty {
                        out.push('\n');
                    }
                }
                if pretty && !values.is_empty() {
                    out.push_str(&" ".repeat(indent));
                }
                out.push(']');
            }
            CdValue::Object(map) => {
                out.push('{');
                if pretty && !map.is_empty() {
                    out.push('\n');
                }
                for (i, (k, v)) in map.iter().enumerate() {
                    if pretty {
                        out.push_str(&" ".repeat(indent + 2));
                    } else if i > 0 {
                        out.push(' ');
                    }
                    write_escaped_string(out, k);
                    out.push(':');
                    out.push(' ');
                    v.write_json(out, indent + 2, pretty);
                    if i + 1 != map.len() {
                        out.push(',');
                    }
                    if pretty {
                        out.push('\n');
                    }
                }
                if pretty && !map.is_empty() {
                    out.push_str(&" ".repeat(indent));
                }
                out.push('}');
            }
        }
    }
}

impl CdNumber {
    pub(crate) fn write_json(&self, out: &mut String) {
        match self {
            CdNumber::I64(v) => out.push_str(&v.to_string()),
            CdNumber::U64(v) => out.push_str(&v.to_string()),
            CdNumber::F64(v) => {
                if v.is_finite() {
                    let mut buf = ryu::Buffer::new();
                    out.push_str(buf.format(*v));
                } else {
                    // Relaxed input can carry NaN/Infinity; strict JSON
                    // output cannot, so they degrade to null.
                    out.push_str("null");
                }
            }
        }
    }
}

fn write_escaped_string(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write as _;
                write!(out, "\\u{:04x}", c as u32).ok();
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

impl Serialize for CdValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CdValue::Null => serializer.serialize_unit(),
            CdValue::Bool(v) => serializer.serialize_bool(*v),
            CdValue::Number(n) => n.serialize(serializer),
            CdValue::String(s) => serializer.serialize_str(s),
            CdValue::Array(values) => values.serialize(serializer),
            CdValue::Object(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for CdValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> de::Visitor<'de> for ValueVisitor {
            type Value = CdValue;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a JSON value")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(CdValue::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(CdValue::Null)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(CdValue::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(CdValue::Number(CdNumber::I64(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(CdValue::Number(CdNumber::U64(v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(CdValue::Number(CdNumber::F64(v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(CdValue::String(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(CdValue::String(v))
            }

            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut values = Vec::new();
                while let Some(value) = seq.next_element::<CdValue>()? {
                    values.push(value);
                }
                Ok(CdValue::Array(values))
            }

            fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut values = IndexMap::new();
                while let Some((key, value)) = map.next_entry::<String, CdValue>()? {
                    values.insert(key, value);
                }
                Ok(CdValue::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::{CdNumber, CdValue};
    use indexmap::IndexMap;

    #[test]
    fn parse_relaxed_strips_comments() {
        let v = CdValue::parse_relaxed(
            "{\n  // line comment\n  \"a\": 1, /* block\n  comment */ \"b\": 2\n}",
        )
        .unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.get("a"), Some(&CdValue::Number(CdNumber::I64(1))));
        assert_eq!(obj.get("b"), Some(&CdValue::Number(CdNumber::I64(2))));
    }

    #[test]
    fn parse_relaxed_protects_comment_text_inside_strings() {
        // A naive stripper would truncate the URL here. The lexer must not.
        let v = CdValue::parse_relaxed(r#"{ "url": "http://example.com/*x*/" }"#).unwrap();
        assert_eq!(
            v.get("url").and_then(|s| s.as_str()),
            Some("http://example.com/*x*/")
        );
    }

    #[test]
    fn parse_relaxed_rejects_garbage() {
        assert!(CdValue::parse_relaxed("{bad").is_err());
    }

    #[test]
    fn format_pretty_uses_two_space_indent_and_trailing_newline() {
        let mut inner = IndexMap::new();
        inner.insert("b".to_string(), CdValue::Number(CdNumber::I64(2)));
        let mut map = IndexMap::new();
        map.insert(
            "a".to_string(),
            CdValue::Array(vec![CdValue::Object(inner)]),
        );
        let v = CdValue::Object(map);
        assert_eq!(
            v.format_pretty(),
            "{\n  \"a\": [\n    {\n      \"b\": 2\n    }\n  ]\n}\n"
        );
    }

    #[test]
    fn format_pretty_leaves_non_ascii_unescaped() {
        let v = CdValue::String("кошка 😀".to_string());
        assert_eq!(v.format_pretty(), "\"кошка 😀\"\n");
    }

    #[test]
    fn format_pretty_escapes_control_characters() {
        let v = CdValue::String("a\u{0001}b\nc".to_string());
        assert_eq!(v.format_pretty(), "\"a\\u0001b\\nc\"\n");
    }

    #[test]
    fn format_compact_single_line() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), CdValue::Bool(true));
        map.insert("b".to_string(), CdValue::Array(vec![CdValue::Null]));
        assert_eq!(
            CdValue::Object(map).format_compact(),
            "{\"a\": true, \"b\": [null]}"
        );
    }

    #[test]
    fn display_string_keeps_strings_verbatim() {
        assert_eq!(
            CdValue::String("STR_UP".into()).to_display_string(),
            "STR_UP"
        );
        assert_eq!(
            CdValue::Number(CdNumber::F64(1.5)).to_display_string(),
            "1.5"
        );
        assert_eq!(CdValue::Bool(false).to_display_string(), "false");
    }

    #[test]
    fn integer_equality_ignores_signedness_variant() {
        assert_eq!(CdNumber::I64(10), CdNumber::U64(10));
        assert_eq!(CdNumber::U64(0), CdNumber::I64(0));
        // -1 and u64::MAX share a bit pattern but are different numbers.
        assert_ne!(CdNumber::I64(-1), CdNumber::U64(u64::MAX));
        assert_ne!(CdNumber::I64(3), CdNumber::F64(3.0));

        // An edited-in integer must deep-equal its own reparsed output.
        let written = CdValue::Number(CdNumber::I64(10));
        let reparsed = CdValue::parse_relaxed(&written.format_pretty()).unwrap();
        assert_eq!(written, reparsed);
    }

    #[test]
    fn non_finite_floats_write_as_null() {
        let v = CdValue::parse_relaxed("{ \"a\": Infinity, \"b\": NaN, \"c\": -Infinity }").unwrap();
        let out = v.format_pretty();
        assert_eq!(
            out,
            "{\n  \"a\": null,\n  \"b\": null,\n  \"c\": null\n}\n"
        );
    }

    #[test]
    fn number_distinction_survives_parse() {
        let v = CdValue::parse_relaxed("{ \"i\": 3, \"f\": 3.0 }").unwrap();
        match v.get("i").unwrap() {
            CdValue::Number(n) => assert!(n.is_integer()),
            other => panic!("expected number, got {}", other.type_name()),
        }
        match v.get("f").unwrap() {
            CdValue::Number(n) => assert!(!n.is_integer()),
            other => panic!("expected number, got {}", other.type_name()),
        }
    }
}
