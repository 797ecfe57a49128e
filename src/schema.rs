//! Schema building: one recursive pass over the input JSON, producing an
//! immutable tree of class descriptors for the emitter.
use indexmap::IndexSet;
use serde_json::Value;

use crate::infer::{element_class_name, java_type, upper_first};

/// One inferred class: its fields in first-occurrence order and the nested
/// classes its fields refer to, each owned by exactly one parent.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    pub name: String,
    pub fields: Vec<FieldDecl>,
    pub nested: Vec<ClassDescriptor>,
    /// Fixed at build time and inherited by every descendant.
    pub accessors: bool,
}

#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub name: String,
    pub ty: String,
}

/// Build the descriptor tree for `value`.
///
/// Only an object root yields fields; a list or scalar root produces an empty
/// class body. Nested objects and lists-of-objects recurse; the element class
/// of a list-of-objects is sampled from the first element only, so extra or
/// differing fields in later elements are ignored.
pub fn build(value: &Value, class_name: &str, accessors: bool) -> ClassDescriptor {
    let mut fields: Vec<FieldDecl> = Vec::new();
    let mut nested: Vec<ClassDescriptor> = Vec::new();
    // Keys are already unique after parsing; the set keeps the first-wins
    // invariant independent of the parser.
    let mut seen: IndexSet<&str> = IndexSet::new();

    if let Value::Object(map) = value {
        for (key, field_value) in map {
            if seen.insert(key.as_str()) {
                fields.push(FieldDecl {
                    name: key.clone(),
                    ty: java_type(field_value, key),
                });
            }
            match field_value {
                Value::Object(_) => {
                    nested.push(build(field_value, &upper_first(key), accessors));
                }
                Value::Array(elems) if !elems.is_empty() && elems.iter().all(Value::is_object) => {
                    nested.push(build(&elems[0], &element_class_name(key), accessors));
                }
                _ => {}
            }
        }
    }

    ClassDescriptor {
        name: class_name.to_string(),
        fields,
        nested,
        accessors,
    }
}
