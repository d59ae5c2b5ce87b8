//! Literal-value parsing
//!
//! Turns the literal text of an edition default into a typed
//! `FieldValue`. Scalar and enum literals are single tokens; record
//! defaults use a flat fragment syntax:
//!
//! ```text
//! name: value, nested { x: 1 y: "two" }
//! ```
//!
//! Entries are separated by commas or whitespace; nested records are
//! braced. String literals may be double-quoted (no escape sequences).

use crate::descriptor::{FieldDescriptor, FieldKind, RecordDescriptor};
use crate::value::{FieldValue, RecordValue};

/// Literal parse failures, reported back through the compiler as
/// default-parse errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("expected `true` or `false` for field {field}, found `{literal}`")]
    InvalidBool { field: String, literal: String },

    #[error("expected an integer for field {field}, found `{literal}`")]
    InvalidInt { field: String, literal: String },

    #[error("`{literal}` is not a known value of enum {enum_name}")]
    UnknownEnumValue { enum_name: String, literal: String },

    #[error("record {record} has no field named `{field}`")]
    UnknownField { record: String, field: String },

    #[error("malformed fragment for record {record}: {reason}")]
    Malformed { record: String, reason: String },
}

/// Parse a literal into the typed value of `field`.
pub fn parse_literal(field: &FieldDescriptor, text: &str) -> Result<FieldValue, LiteralError> {
    let text = text.trim();
    match &field.kind {
        FieldKind::Bool => match text {
            "true" => Ok(FieldValue::Bool(true)),
            "false" => Ok(FieldValue::Bool(false)),
            _ => Err(LiteralError::InvalidBool {
                field: field.name.clone(),
                literal: text.to_string(),
            }),
        },
        FieldKind::Int => text
            .parse::<i64>()
            .map(FieldValue::Int)
            .map_err(|_| LiteralError::InvalidInt {
                field: field.name.clone(),
                literal: text.to_string(),
            }),
        FieldKind::String => Ok(FieldValue::String(unquote(text).to_string())),
        FieldKind::Enum(desc) => desc
            .value_by_name(text)
            .map(|v| FieldValue::Enum {
                name: v.name.clone(),
                number: v.number,
            })
            .ok_or_else(|| LiteralError::UnknownEnumValue {
                enum_name: desc.name.clone(),
                literal: text.to_string(),
            }),
        FieldKind::Record(record) => parse_record_fragment(record, text).map(FieldValue::Record),
    }
}

/// Parse a `name: value` fragment into a partial record value.
///
/// Only the fields the fragment mentions are set; the compiler merges
/// successive fragments cumulatively across editions.
pub fn parse_record_fragment(
    record: &RecordDescriptor,
    text: &str,
) -> Result<RecordValue, LiteralError> {
    let mut scanner = Scanner::new(text);
    let mut value = RecordValue::new();

    loop {
        scanner.skip_separators();
        if scanner.at_end() {
            break;
        }

        let name = scanner.identifier(record)?;
        let field = record
            .field(&name)
            .ok_or_else(|| LiteralError::UnknownField {
                record: record.name.clone(),
                field: name.clone(),
            })?;

        scanner.skip_separators();
        scanner.expect(':', record)?;
        scanner.skip_separators();

        let parsed = if scanner.peek() == Some('{') {
            let inner = scanner.braced(record)?;
            let nested = field
                .kind
                .as_record()
                .ok_or_else(|| LiteralError::Malformed {
                    record: record.name.clone(),
                    reason: format!("field `{}` is not record-typed but has a braced value", name),
                })?;
            FieldValue::Record(parse_record_fragment(nested, inner)?)
        } else {
            let token = scanner.token(record)?;
            if field.kind.as_record().is_some() {
                return Err(LiteralError::Malformed {
                    record: record.name.clone(),
                    reason: format!("record field `{}` requires a braced value", name),
                });
            }
            parse_literal(field, &token)?
        };

        value.set(name, parsed);
    }

    Ok(value)
}

/// Strip one layer of surrounding double quotes, if present.
fn unquote(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// Character scanner over a fragment.
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Commas and whitespace both separate entries
    fn skip_separators(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace() || c == ',') {
            self.bump();
        }
    }

    fn expect(&mut self, wanted: char, record: &RecordDescriptor) -> Result<(), LiteralError> {
        match self.bump() {
            Some(c) if c == wanted => Ok(()),
            found => Err(LiteralError::Malformed {
                record: record.name.clone(),
                reason: match found {
                    Some(c) => format!("expected `{}`, found `{}`", wanted, c),
                    None => format!("expected `{}`, found end of input", wanted),
                },
            }),
        }
    }

    fn identifier(&mut self, record: &RecordDescriptor) -> Result<String, LiteralError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        if self.pos == start {
            return Err(LiteralError::Malformed {
                record: record.name.clone(),
                reason: "expected a field name".to_string(),
            });
        }
        Ok(self.text[start..self.pos].to_string())
    }

    /// One scalar value token: a quoted string or a bare word
    fn token(&mut self, record: &RecordDescriptor) -> Result<String, LiteralError> {
        if self.peek() == Some('"') {
            let start = self.pos;
            self.bump();
            while let Some(c) = self.bump() {
                if c == '"' {
                    return Ok(self.text[start..self.pos].to_string());
                }
            }
            return Err(LiteralError::Malformed {
                record: record.name.clone(),
                reason: "unterminated string literal".to_string(),
            });
        }

        let start = self.pos;
        while matches!(self.peek(), Some(c) if !c.is_whitespace() && c != ',' && c != '}') {
            self.bump();
        }
        if self.pos == start {
            return Err(LiteralError::Malformed {
                record: record.name.clone(),
                reason: "expected a value".to_string(),
            });
        }
        Ok(self.text[start..self.pos].to_string())
    }

    /// The contents of a balanced `{ ... }` group, braces stripped
    fn braced(&mut self, record: &RecordDescriptor) -> Result<&'a str, LiteralError> {
        self.expect('{', record)?;
        let start = self.pos;
        let mut depth = 1usize;
        while let Some(c) = self.bump() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(&self.text[start..self.pos - 1]);
                    }
                }
                _ => {}
            }
        }
        Err(LiteralError::Malformed {
            record: record.name.clone(),
            reason: "unterminated `{` group".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{EnumDescriptor, EnumValue};

    fn scalar_field(name: &str, kind: FieldKind) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            kind,
            required: false,
            repeated: false,
            targets: vec!["file".to_string()],
            defaults: vec![],
        }
    }

    fn limits_record() -> RecordDescriptor {
        RecordDescriptor {
            name: "test.Limits".to_string(),
            fields: vec![
                scalar_field("max_depth", FieldKind::Int),
                scalar_field("label", FieldKind::String),
                scalar_field("strict", FieldKind::Bool),
            ],
            unions: vec![],
            extension_ranges: 0,
        }
    }

    #[test]
    fn test_parse_bool() {
        let field = scalar_field("strict", FieldKind::Bool);
        assert_eq!(parse_literal(&field, "true").unwrap(), FieldValue::Bool(true));
        assert_eq!(parse_literal(&field, " false ").unwrap(), FieldValue::Bool(false));
        assert!(matches!(
            parse_literal(&field, "yes"),
            Err(LiteralError::InvalidBool { .. })
        ));
    }

    #[test]
    fn test_parse_int() {
        let field = scalar_field("max_depth", FieldKind::Int);
        assert_eq!(parse_literal(&field, "-42").unwrap(), FieldValue::Int(-42));
        assert!(matches!(
            parse_literal(&field, "4.2"),
            Err(LiteralError::InvalidInt { .. })
        ));
    }

    #[test]
    fn test_parse_string_unquotes() {
        let field = scalar_field("label", FieldKind::String);
        assert_eq!(
            parse_literal(&field, "\"hello world\"").unwrap(),
            FieldValue::String("hello world".to_string())
        );
        assert_eq!(
            parse_literal(&field, "bare").unwrap(),
            FieldValue::String("bare".to_string())
        );
    }

    #[test]
    fn test_parse_enum() {
        let desc = EnumDescriptor {
            name: "test.Presence".to_string(),
            values: vec![
                EnumValue { name: "PRESENCE_UNKNOWN".to_string(), number: 0 },
                EnumValue { name: "EXPLICIT".to_string(), number: 1 },
            ],
        };
        let field = scalar_field("presence", FieldKind::Enum(desc));

        assert_eq!(
            parse_literal(&field, "EXPLICIT").unwrap(),
            FieldValue::Enum { name: "EXPLICIT".to_string(), number: 1 }
        );
        let err = parse_literal(&field, "BOGUS").unwrap_err();
        assert!(err.to_string().contains("test.Presence"));
    }

    #[test]
    fn test_parse_fragment_flat() {
        let record = limits_record();
        let value = parse_record_fragment(&record, "max_depth: 8, strict: true").unwrap();
        assert_eq!(value.get("max_depth"), Some(&FieldValue::Int(8)));
        assert_eq!(value.get("strict"), Some(&FieldValue::Bool(true)));
        assert!(!value.is_set("label"));
    }

    #[test]
    fn test_parse_fragment_quoted_string_with_spaces() {
        let record = limits_record();
        let value = parse_record_fragment(&record, "label: \"two words\"").unwrap();
        assert_eq!(
            value.get("label"),
            Some(&FieldValue::String("two words".to_string()))
        );
    }

    #[test]
    fn test_parse_fragment_nested() {
        let record = RecordDescriptor {
            name: "test.Outer".to_string(),
            fields: vec![FieldDescriptor {
                name: "limits".to_string(),
                kind: FieldKind::Record(limits_record()),
                required: false,
                repeated: false,
                targets: vec!["file".to_string()],
                defaults: vec![],
            }],
            unions: vec![],
            extension_ranges: 0,
        };

        let value = parse_record_fragment(&record, "limits { max_depth: 4 strict: false }");
        // Missing colon before brace is rejected; the fragment grammar
        // always requires `name: value`.
        assert!(value.is_err());

        let value = parse_record_fragment(&record, "limits: { max_depth: 4 strict: false }").unwrap();
        let limits = value.get("limits").and_then(FieldValue::as_record).unwrap();
        assert_eq!(limits.get("max_depth"), Some(&FieldValue::Int(4)));
        assert_eq!(limits.get("strict"), Some(&FieldValue::Bool(false)));
    }

    #[test]
    fn test_parse_fragment_unknown_field() {
        let record = limits_record();
        let err = parse_record_fragment(&record, "bogus: 1").unwrap_err();
        assert_eq!(
            err,
            LiteralError::UnknownField {
                record: "test.Limits".to_string(),
                field: "bogus".to_string()
            }
        );
    }

    #[test]
    fn test_parse_fragment_unterminated_brace() {
        let record = RecordDescriptor {
            name: "test.Outer".to_string(),
            fields: vec![FieldDescriptor {
                name: "limits".to_string(),
                kind: FieldKind::Record(limits_record()),
                required: false,
                repeated: false,
                targets: vec!["file".to_string()],
                defaults: vec![],
            }],
            unions: vec![],
            extension_ranges: 0,
        };
        let err = parse_record_fragment(&record, "limits: { max_depth: 4").unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn test_empty_fragment_is_empty_record() {
        let record = limits_record();
        let value = parse_record_fragment(&record, "  ").unwrap();
        assert!(value.is_empty());
    }
}
