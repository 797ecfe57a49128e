//! Text emission: serialize a descriptor tree to Java source.
//!
//! Output layout is byte-stable: fields and methods are indented one tab
//! inside a class body, method bodies two tabs. Nested classes are appended
//! after the enclosing class at the same left margin, each followed by a
//! blank line; the text of a recursive call is spliced in unchanged.
use crate::infer::upper_first;
use crate::schema::{ClassDescriptor, FieldDecl};

/// Render `class` and, after its body, each of its nested classes.
pub fn render(class: &ClassDescriptor) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("public class {} {{", class.name));
    let visibility = if class.accessors { "private" } else { "public" };
    for field in &class.fields {
        lines.push(format!("\t{visibility} {} {};", field.ty, field.name));
    }
    lines.push(String::new());

    if class.accessors {
        for field in &class.fields {
            push_accessor_lines(&mut lines, field);
        }
    }
    lines.push("}\n".to_string());

    for nested in &class.nested {
        lines.push(render(nested));
        lines.push(String::new());
    }

    lines.join("\n")
}

fn push_accessor_lines(lines: &mut Vec<String>, field: &FieldDecl) {
    let FieldDecl { name, ty } = field;
    let method = upper_first(name);

    lines.push(format!("\tpublic {ty} get{method}() {{"));
    lines.push(format!("\t\treturn {name};"));
    lines.push("\t}".to_string());
    lines.push(String::new());

    lines.push(format!("\tpublic void set{method}({ty} {name}) {{"));
    lines.push(format!("\t\tthis.{name} = {name};"));
    lines.push("\t}".to_string());
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::build;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn flat_object_without_accessors() {
        let root = build(&json!({"age": 30, "name": "Ann"}), "MainClass", false);
        let out = render(&root);
        assert_eq!(
            out,
            "public class MainClass {\n\
             \tpublic int age;\n\
             \tpublic String name;\n\
             \n\
             }\n"
        );
    }

    #[test]
    fn accessors_flip_visibility_and_add_methods() {
        let root = build(&json!({"age": 30}), "MainClass", true);
        let out = render(&root);
        assert_eq!(
            out,
            "public class MainClass {\n\
             \tprivate int age;\n\
             \n\
             \tpublic int getAge() {\n\
             \t\treturn age;\n\
             \t}\n\
             \n\
             \tpublic void setAge(int age) {\n\
             \t\tthis.age = age;\n\
             \t}\n\
             \n\
             }\n"
        );
    }

    #[test]
    fn accessor_toggle_keeps_fields_identical() {
        let doc = json!({"age": 30, "name": "Ann", "tags": ["a"]});
        let plain = build(&doc, "MainClass", false);
        let with = build(&doc, "MainClass", true);
        let field_sig = |c: &ClassDescriptor| {
            c.fields
                .iter()
                .map(|f| (f.name.clone(), f.ty.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(field_sig(&plain), field_sig(&with));

        let plain_out = render(&plain);
        let with_out = render(&with);
        assert!(plain_out.contains("public int age;"));
        assert!(with_out.contains("private int age;"));
        assert!(!plain_out.contains("getAge"));
        assert!(with_out.contains("public int getAge() {"));
        assert!(with_out.contains("public void setName(String name) {"));
    }

    #[test]
    fn nested_class_renders_after_the_enclosing_body() {
        let root = build(&json!({"address": {"city": "X"}}), "MainClass", false);
        let out = render(&root);
        assert_eq!(
            out,
            "public class MainClass {\n\
             \tpublic Address address;\n\
             \n\
             }\n\
             \n\
             public class Address {\n\
             \tpublic String city;\n\
             \n\
             }\n\
             \n"
        );
    }

    #[test]
    fn object_list_emits_element_class() {
        let root = build(&json!({"items": [{"id": 1}]}), "MainClass", false);
        let out = render(&root);
        assert!(out.contains("\tpublic List<ItemsElement> items;"));
        assert!(out.contains("public class ItemsElement {"));
        assert!(out.contains("\tpublic int id;"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let doc = json!({"a": 1, "b": {"c": [{"d": true}]}});
        let first = render(&build(&doc, "MainClass", true));
        let second = render(&build(&doc, "MainClass", true));
        assert_eq!(first, second);
    }

    #[test]
    fn deeply_nested_classes_all_reach_the_output() {
        let doc = json!({"a": {"b": {"c": 1}}});
        let out = render(&build(&doc, "MainClass", false));
        assert!(out.contains("public class MainClass {"));
        assert!(out.contains("public class A {"));
        assert!(out.contains("public class B {"));
        assert!(out.contains("\tpublic int c;"));
    }
}
