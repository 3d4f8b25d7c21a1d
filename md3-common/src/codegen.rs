//! Code panel text: example snippets, placeholders and snippet generation
//! from the current props

use crate::catalog::{ComponentMetadata, ComponentRegistry};
use crate::schema::{PropValue, PropsFieldSchema};
use crate::snapshot::PropsSnapshot;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Code shown while nothing is selected
pub const NO_SELECTION_CODE: &str = "// Component code will appear here";

/// Code for an id without an example snippet
pub fn placeholder_code(component_id: &str) -> String {
    format!("// Component: {component_id}\n// Code will be generated...")
}

/// The component's example snippet, or the placeholder for `component_id`
pub fn example_or_placeholder(registry: &ComponentRegistry, component_id: &str) -> String {
    registry
        .example_code(component_id)
        .map(str::to_string)
        .unwrap_or_else(|| placeholder_code(component_id))
}

/// Generate an rsx snippet for `metadata` configured with `props`.
///
/// Props equal to their schema default are left out. Select values print
/// as enum variants when the field names its type.
pub fn render_snippet(
    metadata: &ComponentMetadata,
    schema: &[PropsFieldSchema],
    props: &PropsSnapshot,
) -> String {
    let mut imports = BTreeSet::from([metadata.name.as_str()]);
    let mut attrs = Vec::new();
    for field in schema {
        let Some(value) = props.get(&field.name) else {
            continue;
        };
        if *value == field.default_value() {
            continue;
        }
        let literal = match (&field.type_name, value) {
            (Some(type_name), PropValue::Text(variant)) => {
                imports.insert(type_name.as_str());
                format!("{type_name}::{}", pascal_case(variant))
            }
            _ => literal(value),
        };
        attrs.push(format!("{}: {literal}", field.name));
    }

    let mut out = String::new();
    let imports: Vec<_> = imports.into_iter().collect();
    if imports.len() == 1 {
        let _ = writeln!(out, "use md3_ui::{};", imports[0]);
    } else {
        let _ = writeln!(out, "use md3_ui::{{{}}};", imports.join(", "));
    }
    out.push('\n');
    out.push_str("rsx! {\n");
    if attrs.is_empty() {
        let _ = writeln!(out, "    {} {{}}", metadata.name);
    } else {
        let _ = writeln!(out, "    {} {{", metadata.name);
        for attr in attrs {
            let _ = writeln!(out, "        {attr},");
        }
        out.push_str("    }\n");
    }
    out.push('}');
    out
}

fn literal(value: &PropValue) -> String {
    match value {
        PropValue::Bool(b) => b.to_string(),
        // Debug formatting yields an escaped Rust string literal
        PropValue::Text(s) => format!("{s:?}"),
    }
}

/// `body1` -> `Body1`, `full-width` -> `FullWidth`
fn pascal_case(value: &str) -> String {
    value
        .split(['-', '_', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn button() -> (ComponentMetadata, Vec<PropsFieldSchema>) {
        let metadata = ComponentMetadata {
            id: "button".into(),
            name: "Button".into(),
            category: Category::Atomic,
            description: String::new(),
            tags: vec![],
        };
        let schema = vec![
            PropsFieldSchema::select(
                "variant",
                "Variant",
                &[("contained", "Contained"), ("text", "Text")],
            )
            .with_type("ButtonVariant"),
            PropsFieldSchema::boolean("disabled", "Disabled"),
            PropsFieldSchema::string("label", "Label"),
        ];
        (metadata, schema)
    }

    #[test]
    fn test_placeholder_mentions_id() {
        assert_eq!(
            placeholder_code("slider"),
            "// Component: slider\n// Code will be generated..."
        );
    }

    #[test]
    fn test_snippet_with_defaults_only() {
        let (metadata, schema) = button();
        let snippet = render_snippet(&metadata, &schema, &PropsSnapshot::defaults_for(&schema));
        assert_eq!(snippet, "use md3_ui::Button;\n\nrsx! {\n    Button {}\n}");
    }

    #[test]
    fn test_snippet_reflects_non_default_props() {
        let (metadata, schema) = button();
        let props = PropsSnapshot::defaults_for(&schema)
            .with("disabled", true)
            .with("label", "Say \"hi\"");
        let snippet = render_snippet(&metadata, &schema, &props);
        assert!(snippet.contains("        disabled: true,\n"));
        assert!(snippet.contains(r#"label: "Say \"hi\"","#));
        assert!(!snippet.contains("variant"));
    }

    #[test]
    fn test_select_values_print_as_enum_variants() {
        let (metadata, schema) = button();
        let props = PropsSnapshot::defaults_for(&schema).with("variant", "text");
        let snippet = render_snippet(&metadata, &schema, &props);
        assert!(snippet.starts_with("use md3_ui::{Button, ButtonVariant};\n"));
        assert!(snippet.contains("        variant: ButtonVariant::Text,\n"));
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("body1"), "Body1");
        assert_eq!(pascal_case("default"), "Default");
        assert_eq!(pascal_case("full-width"), "FullWidth");
    }

    #[test]
    fn test_example_or_placeholder() {
        let registry = ComponentRegistry::builtin().unwrap();
        assert!(example_or_placeholder(&registry, "button").contains("Button {"));
        assert_eq!(
            example_or_placeholder(&registry, "card"),
            placeholder_code("card")
        );
    }
}
