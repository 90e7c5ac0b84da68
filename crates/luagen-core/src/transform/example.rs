use crate::error::ExampleError;
use crate::ir::{ExampleValue, ExpandedSchema, SchemaKind};

/// Default whole-number example for integer schemas.
const INTEGER_DEFAULT: i64 = 123;

/// Default non-zero decimal example for number schemas.
const NUMBER_DEFAULT: f64 = 123.45;

/// Synthesize one representative example value for an expanded schema.
///
/// Pure and deterministic: an author-supplied example wins verbatim,
/// otherwise each kind has a fixed default. Unions take the first-declared
/// variant. Intersections merge their constituents' examples; a constituent
/// that does not produce a mapping cannot be merged and is an error.
pub fn synthesize_example(schema: &ExpandedSchema) -> Result<ExampleValue, ExampleError> {
    if let Some(ref authored) = schema.example {
        return Ok(ExampleValue::from_json(authored));
    }

    match &schema.kind {
        SchemaKind::String => Ok(ExampleValue::String(
            schema.description.clone().unwrap_or_default(),
        )),
        SchemaKind::Boolean => Ok(ExampleValue::Bool(true)),
        SchemaKind::Integer => Ok(ExampleValue::Integer(INTEGER_DEFAULT)),
        SchemaKind::Number => Ok(ExampleValue::Number(NUMBER_DEFAULT)),
        SchemaKind::OneOf(variants) => match variants.first() {
            Some(first) => synthesize_example(first),
            None => Err(ExampleError::Unsynthesizable(
                "union with no variants".to_string(),
            )),
        },
        SchemaKind::Array(items) => Ok(ExampleValue::Array(vec![synthesize_example(items)?])),
        SchemaKind::Object(properties) => {
            let mut entries = Vec::with_capacity(properties.len());
            for property in properties {
                entries.push((property.id.clone(), synthesize_example(&property.schema)?));
            }
            Ok(ExampleValue::Object(entries))
        }
        SchemaKind::AllOf(parts) => merge_intersection(parts),
    }
}

/// Merge the examples of an intersection's constituents into one mapping.
/// Later constituents overwrite duplicate keys; first occurrence fixes the
/// key's position.
fn merge_intersection(parts: &[ExpandedSchema]) -> Result<ExampleValue, ExampleError> {
    let mut merged: Vec<(String, ExampleValue)> = Vec::new();
    for part in parts {
        let example = synthesize_example(part)?;
        let entries = match example {
            ExampleValue::Object(entries) => entries,
            other => {
                return Err(ExampleError::Unsynthesizable(format!(
                    "allOf constituent of kind {} yields a non-mapping example ({other:?})",
                    part.kind.name()
                )));
            }
        };
        for (key, value) in entries {
            if let Some(existing) = merged.iter_mut().find(|(k, _)| *k == key) {
                existing.1 = value;
            } else {
                merged.push((key, value));
            }
        }
    }
    Ok(ExampleValue::Object(merged))
}
