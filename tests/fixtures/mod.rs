//! Shared schema-table fixtures for the integration suites
//!
//! One realistic feature schema covering every field kind, a record
//! field with cumulative defaults, and an extension fragment with its
//! own enum.

use feature_resolver::{
    EditionDefault, EnumDescriptor, EnumValue, ExtensionField, FieldDescriptor, FieldKind,
    RecordDescriptor,
};

pub fn field(name: &str, kind: FieldKind, defaults: &[(&str, &str)]) -> FieldDescriptor {
    FieldDescriptor {
        name: name.to_string(),
        kind,
        required: false,
        repeated: false,
        targets: vec!["file".to_string(), "field".to_string()],
        defaults: defaults
            .iter()
            .map(|(edition, value)| EditionDefault {
                edition: edition.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}

pub fn presence_enum() -> EnumDescriptor {
    EnumDescriptor {
        name: "conf.Presence".to_string(),
        values: vec![
            EnumValue { name: "PRESENCE_UNKNOWN".to_string(), number: 0 },
            EnumValue { name: "EXPLICIT".to_string(), number: 1 },
            EnumValue { name: "IMPLICIT".to_string(), number: 2 },
        ],
    }
}

pub fn repr_enum() -> EnumDescriptor {
    EnumDescriptor {
        name: "conf.Repr".to_string(),
        values: vec![
            EnumValue { name: "REPR_UNKNOWN".to_string(), number: 0 },
            EnumValue { name: "PACKED".to_string(), number: 1 },
            EnumValue { name: "LOOSE".to_string(), number: 2 },
        ],
    }
}

pub fn limits_record() -> RecordDescriptor {
    RecordDescriptor {
        name: "conf.Limits".to_string(),
        fields: vec![
            field("stack", FieldKind::Int, &[]),
            field("heap", FieldKind::Int, &[]),
            field("label", FieldKind::String, &[]),
        ],
        unions: vec![],
        extension_ranges: 0,
    }
}

/// The root feature type: scalar, enum, and record fields with
/// defaults changing at editions 2023, 2024, and 2025.
pub fn root_features() -> RecordDescriptor {
    RecordDescriptor {
        name: "conf.Features".to_string(),
        fields: vec![
            field(
                "presence",
                FieldKind::Enum(presence_enum()),
                &[("2023", "EXPLICIT"), ("2024", "IMPLICIT")],
            ),
            field("max_depth", FieldKind::Int, &[("2023", "8"), ("2024", "16")]),
            field("strict", FieldKind::Bool, &[("2023", "false"), ("2025", "true")]),
            field(
                "limits",
                FieldKind::Record(limits_record()),
                &[
                    ("2023", "stack: 64"),
                    ("2024", "heap: 1024"),
                    ("2025", "stack: 128, label: \"big\""),
                ],
            ),
        ],
        unions: vec![],
        extension_ranges: 0,
    }
}

/// A language-scoped extension fragment with a default change at the
/// point edition 2023.1.
pub fn lang_extension() -> ExtensionField {
    let payload = RecordDescriptor {
        name: "conf.LangFeatures".to_string(),
        fields: vec![
            field("boxed", FieldKind::Bool, &[("2023", "false"), ("2023.1", "true")]),
            field("repr", FieldKind::Enum(repr_enum()), &[("2023", "PACKED")]),
        ],
        unions: vec![],
        extension_ranges: 0,
    };
    ExtensionField {
        extendee: "conf.Features".to_string(),
        field: field("lang", FieldKind::Record(payload), &[]),
    }
}

/// An independent second extension fragment.
pub fn tooling_extension() -> ExtensionField {
    let payload = RecordDescriptor {
        name: "conf.ToolingFeatures".to_string(),
        fields: vec![field("emit_hints", FieldKind::Bool, &[("2023", "true")])],
        unions: vec![],
        extension_ranges: 0,
    };
    ExtensionField {
        extendee: "conf.Features".to_string(),
        field: field("tooling", FieldKind::Record(payload), &[]),
    }
}
