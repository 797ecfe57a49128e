//! Type inference: map one JSON value, in the context of the field name that
//! holds it, onto a Java type name.
//!
//! The mapping is an exhaustive match over the `serde_json::Value` variants,
//! so every JSON kind has a defined answer and no runtime-type fallback is
//! needed.
use serde_json::Value;

/// Infer the Java type name for `value` appearing under `field_name`.
///
/// Lists are typed from their contents: all-object lists become
/// `List<{Element class}>` (see [`element_class_name`]), anything else is
/// typed from the first element under the same field-name context. An empty
/// list has no evidence either way and falls back to `List<Object>`.
pub fn java_type(value: &Value, field_name: &str) -> String {
    match value {
        // JSON null carries no type evidence; Object is Java's top type.
        Value::Null => "Object".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int".to_string()
            } else {
                "double".to_string()
            }
        }
        Value::String(_) => "String".to_string(),
        Value::Array(elems) => {
            if elems.is_empty() {
                "List<Object>".to_string()
            } else if elems.iter().all(Value::is_object) {
                format!("List<{}>", element_class_name(field_name))
            } else {
                format!("List<{}>", java_type(&elems[0], field_name))
            }
        }
        Value::Object(_) => upper_first(field_name),
    }
}

/// Class name for the elements of a list-of-objects field.
///
/// One rule for both the inferencer and the schema builder: the field name
/// with its first character upper-cased, suffixed with `Element`. The literal
/// field name `segments` additionally drops its trailing character
/// (`SegmentElement`), a naming quirk kept because previously generated
/// output uses it.
pub fn element_class_name(field_name: &str) -> String {
    if field_name == "segments" {
        let singular = &field_name[..field_name.len() - 1];
        format!("{}Element", upper_first(singular))
    } else {
        format!("{}Element", upper_first(field_name))
    }
}

/// Upper-case the first character only; the rest of the name is untouched.
pub fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
