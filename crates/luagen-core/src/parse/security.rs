use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A raw security scheme definition from `components.securitySchemes`.
/// Only the description is carried into the render-context; the scheme kind
/// itself is matched by component key against the closed `AuthScheme` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

/// A security requirement: map of scheme name → required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;
