#![deny(missing_docs)]

//! # Schema Walker
//!
//! Renders the properties of an object schema as `name[?]: Type` lines.
//! Nested objects (directly or as array elements) follow their parent line,
//! indented two spaces per level.
//!
//! Local `$ref`s are followed through `components.schemas`. A reference that is
//! already being expanded higher up, or that cannot be resolved, is labelled by
//! its name and not expanded.

use crate::oas::ref_utils::reference_name;
use crate::oas::shims::{ShimComponents, ShimSchema};
use indexmap::IndexMap;

/// Label used when a schema declares no usable `type`.
pub const FALLBACK_LABEL: &str = "Any";

const INDENT: &str = "  ";

/// Renders an object schema without `$ref` resolution.
///
/// Non-object schemas and objects without properties yield no lines.
pub fn render_schema(schema: &ShimSchema) -> Vec<String> {
    SchemaWalker::new(None).render(schema)
}

/// Walks schemas, resolving references against optional components.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaWalker<'a> {
    components: Option<&'a ShimComponents>,
}

/// Merged view of an object schema (including `allOf` members).
#[derive(Default)]
struct ObjectShape<'a> {
    properties: IndexMap<&'a str, &'a ShimSchema>,
    required: Vec<&'a str>,
}

impl<'a> SchemaWalker<'a> {
    /// Creates a walker; `components` enables `$ref` resolution.
    pub fn new(components: Option<&'a ShimComponents>) -> Self {
        Self { components }
    }

    /// Renders the property listing of `schema`.
    pub fn render(&self, schema: &'a ShimSchema) -> Vec<String> {
        self.lines(schema, 0, &[])
    }

    /// Returns the capitalized type label of `schema` (e.g. `String`, `String,Null`, `Any`).
    pub fn label(&self, schema: &'a ShimSchema) -> String {
        self.label_at(schema, &[])
    }

    fn lines(&self, schema: &'a ShimSchema, depth: usize, trail: &[&'a str]) -> Vec<String> {
        let Some((schema, trail)) = self.follow(schema, trail) else {
            return Vec::new();
        };
        let Some(shape) = self.object_shape(schema, &trail) else {
            return Vec::new();
        };

        let mut lines = Vec::new();
        for (&name, &property) in &shape.properties {
            let marker = if shape.required.contains(&name) { "" } else { "?" };
            lines.push(format!(
                "{}{}{}: {}",
                INDENT.repeat(depth),
                name,
                marker,
                self.label_at(property, &trail)
            ));

            if let Some((element, element_trail)) = self.element(property, &trail) {
                lines.extend(self.lines(element, depth + 1, &element_trail));
            }
        }
        lines
    }

    /// Follows a `$ref` chain to a concrete schema, extending the trail of expanded references.
    ///
    /// Returns `None` for cyclic or unresolvable references.
    fn follow(
        &self,
        schema: &'a ShimSchema,
        trail: &[&'a str],
    ) -> Option<(&'a ShimSchema, Vec<&'a str>)> {
        let mut current = schema;
        let mut trail = trail.to_vec();

        while let Some(reference) = current.reference.as_deref() {
            if trail.contains(&reference) {
                tracing::debug!(reference, "not expanding recursive schema reference");
                return None;
            }
            let Some(target) = self.components.and_then(|c| c.schema(reference)) else {
                tracing::debug!(reference, "unresolved schema reference");
                return None;
            };
            trail.push(reference);
            current = target;
        }

        Some((current, trail))
    }

    /// The schema whose properties nest under a property line: the property
    /// itself, or the innermost element type for (nested) arrays.
    fn element(
        &self,
        property: &'a ShimSchema,
        trail: &[&'a str],
    ) -> Option<(&'a ShimSchema, Vec<&'a str>)> {
        let (mut current, mut trail) = self.follow(property, trail)?;
        while current.has_type("array") {
            let items = current.items.as_deref()?;
            (current, trail) = self.follow(items, &trail)?;
        }
        Some((current, trail))
    }

    fn object_shape(&self, schema: &'a ShimSchema, trail: &[&'a str]) -> Option<ObjectShape<'a>> {
        let mut shape = ObjectShape::default();
        self.collect_shape(schema, trail, false, &mut shape)
            .then_some(shape)
    }

    /// Merges properties of `schema` and its `allOf` members into `shape`.
    ///
    /// An untyped schema declaring `properties` counts as an object. Inside
    /// `allOf`, untyped members without properties (e.g. `{required: [id]}`)
    /// still contribute their `required` names.
    fn collect_shape(
        &self,
        schema: &'a ShimSchema,
        trail: &[&'a str],
        in_all_of: bool,
        shape: &mut ObjectShape<'a>,
    ) -> bool {
        let typed_object = schema.has_type("object");
        let untyped = schema.schema_type.is_none();
        let implicit_object = untyped && !schema.properties.is_empty();

        if typed_object || implicit_object || (in_all_of && untyped) {
            for (name, property) in &schema.properties {
                shape.properties.insert(name.as_str(), property);
            }
            shape
                .required
                .extend(schema.required.iter().map(String::as_str));
        }

        let mut is_object = typed_object || implicit_object;
        if typed_object || untyped {
            for member in &schema.all_of {
                if let Some((member, member_trail)) = self.follow(member, trail) {
                    is_object |= self.collect_shape(member, &member_trail, true, shape);
                }
            }
        }
        is_object
    }

    fn label_at(&self, schema: &'a ShimSchema, trail: &[&'a str]) -> String {
        let mut distinct: Vec<String> = Vec::new();
        for label in self.labels(schema, trail) {
            if !distinct.contains(&label) {
                distinct.push(label);
            }
        }

        if distinct.is_empty() {
            FALLBACK_LABEL.to_string()
        } else {
            distinct.join(",")
        }
    }

    fn labels(&self, schema: &'a ShimSchema, trail: &[&'a str]) -> Vec<String> {
        if let Some(reference) = schema.reference.as_deref() {
            return match self.follow(schema, trail) {
                Some((target, target_trail)) => self.labels(target, &target_trail),
                None => vec![reference_name(reference)],
            };
        }

        match &schema.schema_type {
            Some(ty) => ty.names().into_iter().map(type_label).collect(),
            None => {
                let composite: Vec<String> = schema
                    .one_of
                    .iter()
                    .chain(&schema.any_of)
                    .chain(&schema.all_of)
                    .flat_map(|member| self.labels(member, trail))
                    .collect();
                if composite.is_empty() && !schema.properties.is_empty() {
                    vec![type_label("object")]
                } else {
                    composite
                }
            }
        }
    }
}

/// Capitalizes a JSON Schema type name.
fn type_label(name: &str) -> String {
    let label = match name {
        "string" => "String",
        "integer" => "Integer",
        "number" => "Number",
        "boolean" => "Boolean",
        "array" => "Array",
        "object" => "Object",
        "null" => "Null",
        other => {
            tracing::debug!(schema_type = other, "unrecognized schema type");
            FALLBACK_LABEL
        }
    };
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(yaml: &str) -> ShimSchema {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn components(yaml: &str) -> ShimComponents {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_optional_and_required_markers() {
        let s = schema(
            r#"
type: object
required: [name]
properties:
  name: { type: string }
  age: { type: integer }
  active: { type: boolean }
"#,
        );
        assert_eq!(
            render_schema(&s),
            vec!["name: String", "age?: Integer", "active?: Boolean"]
        );
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let s = schema(
            r#"
type: object
properties:
  zeta: { type: string }
  alpha: { type: number }
  mid: { type: array, items: { type: string } }
"#,
        );
        assert_eq!(
            render_schema(&s),
            vec!["zeta?: String", "alpha?: Number", "mid?: Array"]
        );
    }

    #[test]
    fn test_non_object_schemas_render_nothing() {
        assert!(render_schema(&schema("type: string")).is_empty());
        assert!(render_schema(&schema("type: array\nitems: { type: object, properties: { a: { type: string } } }")).is_empty());
        assert!(render_schema(&schema("type: object")).is_empty());
        assert!(render_schema(&schema("{}")).is_empty());
    }

    #[test]
    fn test_missing_or_unknown_type_falls_back() {
        let s = schema(
            r#"
type: object
properties:
  blob: { description: free-form }
  odd: { type: decimal }
"#,
        );
        assert_eq!(render_schema(&s), vec!["blob?: Any", "odd?: Any"]);
    }

    #[test]
    fn test_nested_objects_are_indented() {
        let s = schema(
            r#"
type: object
required: [address]
properties:
  address:
    type: object
    required: [city]
    properties:
      city: { type: string }
      geo:
        type: object
        properties:
          lat: { type: number }
  tags: { type: array, items: { type: string } }
"#,
        );
        assert_eq!(
            render_schema(&s),
            vec![
                "address: Object",
                "  city: String",
                "  geo?: Object",
                "    lat?: Number",
                "tags?: Array",
            ]
        );
    }

    #[test]
    fn test_array_of_objects_recurses_into_items() {
        let s = schema(
            r#"
type: object
properties:
  lines:
    type: array
    items:
      type: object
      required: [sku]
      properties:
        sku: { type: string }
        qty: { type: integer }
"#,
        );
        assert_eq!(
            render_schema(&s),
            vec!["lines?: Array", "  sku: String", "  qty?: Integer"]
        );
    }

    #[test]
    fn test_type_lists_and_composites() {
        let s = schema(
            r#"
type: object
properties:
  nickname: { type: [string, 'null'] }
  id:
    oneOf:
      - { type: string }
      - { type: integer }
      - { type: string }
  empty: { anyOf: [] }
"#,
        );
        assert_eq!(
            render_schema(&s),
            vec!["nickname?: String,Null", "id?: String,Integer", "empty?: Any"]
        );
    }

    #[test]
    fn test_refs_resolve_through_components() {
        let comps = components(
            r#"
schemas:
  Address:
    type: object
    required: [street]
    properties:
      street: { type: string }
  Customer:
    type: object
    properties:
      billing: { $ref: '#/components/schemas/Address' }
      shipping: { $ref: '#/components/schemas/Address' }
"#,
        );
        let body = schema("$ref: '#/components/schemas/Customer'");
        let walker = SchemaWalker::new(Some(&comps));
        assert_eq!(
            walker.render(&body),
            vec![
                "billing?: Object",
                "  street: String",
                "shipping?: Object",
                "  street: String",
            ]
        );
    }

    #[test]
    fn test_recursive_refs_stop_expanding() {
        let comps = components(
            r#"
schemas:
  Node:
    type: object
    properties:
      value: { type: string }
      children:
        type: array
        items: { $ref: '#/components/schemas/Node' }
"#,
        );
        let body = schema("$ref: '#/components/schemas/Node'");
        let walker = SchemaWalker::new(Some(&comps));
        assert_eq!(walker.render(&body), vec!["value?: String", "children?: Array"]);

        let parent = schema(
            r#"
type: object
properties:
  node: { $ref: '#/components/schemas/Node' }
"#,
        );
        assert_eq!(
            walker.render(&parent),
            vec!["node?: Object", "  value?: String", "  children?: Array"]
        );
    }

    #[test]
    fn test_unresolved_ref_uses_reference_name() {
        let s = schema(
            r#"
type: object
properties:
  owner: { $ref: '#/components/schemas/User' }
"#,
        );
        assert_eq!(render_schema(&s), vec!["owner?: User"]);
    }

    #[test]
    fn test_all_of_members_are_merged() {
        let comps = components(
            r#"
schemas:
  Base:
    type: object
    required: [id]
    properties:
      id: { type: integer }
"#,
        );
        let body = schema(
            r#"
allOf:
  - $ref: '#/components/schemas/Base'
  - type: object
    properties:
      name: { type: string }
  - required: [name]
"#,
        );
        let walker = SchemaWalker::new(Some(&comps));
        assert_eq!(walker.render(&body), vec!["id: Integer", "name: String"]);
        assert_eq!(walker.label(&body), "Object");
    }

    #[test]
    fn test_untyped_schema_with_properties_is_an_object() {
        let s = schema(
            r#"
required: [name]
properties:
  name: { type: string }
  meta:
    properties:
      source: { type: string }
"#,
        );
        assert_eq!(
            render_schema(&s),
            vec!["name: String", "meta?: Object", "  source?: String"]
        );
        assert_eq!(SchemaWalker::new(None).label(&s), "Object");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let s = schema(
            r#"
type: object
properties:
  b: { type: string }
  a: { type: object, properties: { c: { type: boolean } } }
"#,
        );
        assert_eq!(render_schema(&s), render_schema(&s));
    }
}
