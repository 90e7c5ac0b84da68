use crate::error::ExpandError;
use crate::ir::{ExpandedSchema, Property, SchemaKind};
use crate::parse::schema::{Schema, SchemaOrRef};

use super::text::normalize_description;

/// Expand a resolved schema node into its classified form.
///
/// Composite markers win over an explicit type tag: a node carrying both
/// `oneOf` and `type: object` is a union. Expansion is deterministic, so
/// expanding the same node twice yields identical structures.
pub fn expand_schema(schema: &Schema) -> Result<ExpandedSchema, ExpandError> {
    let kind = classify(schema)?;
    Ok(ExpandedSchema {
        kind,
        description: schema.description.clone(),
        example: schema.example.clone(),
    })
}

fn classify(schema: &Schema) -> Result<SchemaKind, ExpandError> {
    if !schema.one_of.is_empty() {
        let variants = expand_all(&schema.one_of)?;
        return Ok(SchemaKind::OneOf(variants));
    }
    if !schema.all_of.is_empty() {
        let parts = expand_all(&schema.all_of)?;
        return Ok(SchemaKind::AllOf(parts));
    }

    match schema.schema_type.as_deref() {
        Some("string") => Ok(SchemaKind::String),
        Some("number") => Ok(SchemaKind::Number),
        Some("integer") => Ok(SchemaKind::Integer),
        Some("boolean") => Ok(SchemaKind::Boolean),
        Some("object") => {
            let mut properties = Vec::with_capacity(schema.properties.len());
            for (id, prop) in &schema.properties {
                let mut expanded = expand_schema_or_ref(prop)?;
                expanded.description = expanded
                    .description
                    .as_deref()
                    .map(normalize_description);
                properties.push(Property {
                    id: id.clone(),
                    required: schema.required.contains(id),
                    schema: expanded,
                });
            }
            Ok(SchemaKind::Object(properties))
        }
        Some("array") => {
            let items = schema.items.as_deref().ok_or(ExpandError::MissingItems)?;
            let item_schema = expand_schema_or_ref(items)?;
            Ok(SchemaKind::Array(Box::new(item_schema)))
        }
        other => Err(ExpandError::Unclassifiable(other.map(str::to_string))),
    }
}

fn expand_all(nodes: &[SchemaOrRef]) -> Result<Vec<ExpandedSchema>, ExpandError> {
    nodes.iter().map(expand_schema_or_ref).collect()
}

fn expand_schema_or_ref(node: &SchemaOrRef) -> Result<ExpandedSchema, ExpandError> {
    match node {
        SchemaOrRef::Ref { ref_path } => Err(ExpandError::UnresolvedRef(ref_path.clone())),
        SchemaOrRef::Schema(schema) => expand_schema(schema),
    }
}
