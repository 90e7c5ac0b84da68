use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid reference format: {0}")]
    InvalidRefFormat(String),

    #[error("reference target not found: {0}")]
    RefTargetNotFound(String),

    #[error("circular reference detected: {0}")]
    CircularRef(String),
}

#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("unresolved reference reached the expander: {0}")]
    UnresolvedRef(String),

    #[error("unclassifiable schema: type tag {0:?} is not recognized")]
    Unclassifiable(Option<String>),

    #[error("array schema is missing its items schema")]
    MissingItems,
}

#[derive(Debug, Error)]
pub enum ExampleError {
    #[error("cannot synthesize example: {0}")]
    Unsynthesizable(String),
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("expand error: {0}")]
    Expand(#[from] ExpandError),

    #[error("example error: {0}")]
    Example(#[from] ExampleError),

    #[error("operation {method} {path} has no operationId")]
    MissingOperationId { method: String, path: String },

    #[error("unrecognized security scheme: {0}")]
    UnrecognizedScheme(String),

    #[error("unsupported request body content for {operation}: expected application/json, got [{found}]")]
    UnsupportedContent { operation: String, found: String },

    #[error("request body for {0} declares application/json but no schema")]
    MissingRequestSchema(String),
}
