use serde::Serialize;

/// A fully expanded schema. Every node reachable from the render-context has
/// a classified kind and no residual references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedSchema {
    pub kind: SchemaKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Author-supplied example literal, used verbatim by the synthesizer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

/// Classified schema shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "of", rename_all = "snake_case")]
pub enum SchemaKind {
    String,
    Number,
    Integer,
    Boolean,
    Object(Vec<Property>),
    Array(Box<ExpandedSchema>),
    OneOf(Vec<ExpandedSchema>),
    AllOf(Vec<ExpandedSchema>),
}

impl SchemaKind {
    /// Stable name of the kind, for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            SchemaKind::String => "string",
            SchemaKind::Number => "number",
            SchemaKind::Integer => "integer",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Object(_) => "object",
            SchemaKind::Array(_) => "array",
            SchemaKind::OneOf(_) => "one_of",
            SchemaKind::AllOf(_) => "all_of",
        }
    }
}

/// A named object property, ordered as declared in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub id: String,
    pub required: bool,
    pub schema: ExpandedSchema,
}
