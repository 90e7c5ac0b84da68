use serde::Serialize;

use super::example::ExampleValue;
use super::schemas::ExpandedSchema;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }
}

/// A normalized operation record, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct IrOperation {
    /// Code-safe operation identifier (hyphens replaced by underscores).
    pub id: String,
    pub method: HttpMethod,
    pub path: String,
    /// Trimmed, HTML-stripped description with doc-comment continuations.
    pub description: String,
    pub parameters: Vec<IrParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<IrRequestBody>,
    pub responses: Vec<IrResponse>,
    pub security: Vec<IrSecurity>,
}

/// Parameter location in the render-context. Path and query are mutually
/// exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    Query,
}

/// A normalized path or query parameter.
#[derive(Debug, Clone, Serialize)]
pub struct IrParameter {
    /// Normalized name: `[]` suffix stripped, hyphens replaced.
    pub name: String,
    /// Name as authored, used for path template substitution.
    pub original_name: String,
    pub location: ParamLocation,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<ExpandedSchema>,
}

impl IrParameter {
    pub fn in_path(&self) -> bool {
        self.location == ParamLocation::Path
    }

    pub fn in_query(&self) -> bool {
        self.location == ParamLocation::Query
    }
}

/// A response carried in declaration order, keyed by status code.
#[derive(Debug, Clone, Serialize)]
pub struct IrResponse {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<ExpandedSchema>,
}

/// A normalized JSON request body with its example payload.
#[derive(Debug, Clone, Serialize)]
pub struct IrRequestBody {
    /// Canonical component identifier for named bodies, absent for inline ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    pub schema: ExpandedSchema,
    pub example: ExampleValue,
}

/// The closed set of recognized security schemes. A requirement entry naming
/// anything else is a fatal configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    Basic,
    Bearer,
    ApiKey,
    #[serde(rename = "oauth2")]
    OAuth2,
}

impl AuthScheme {
    /// Match a requirement entry key against the closed set.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "basicAuth" => Some(AuthScheme::Basic),
            "bearerAuth" => Some(AuthScheme::Bearer),
            "apiKey" => Some(AuthScheme::ApiKey),
            "oauth2" => Some(AuthScheme::OAuth2),
            _ => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            AuthScheme::Basic => "HTTP basic authentication with the merchant credentials",
            AuthScheme::Bearer => "Bearer token issued for the authenticated user",
            AuthScheme::ApiKey => "Project API key sent with each request",
            AuthScheme::OAuth2 => "OAuth2 client-credentials access token",
        }
    }
}

/// A canonicalized security requirement on an operation.
#[derive(Debug, Clone, Serialize)]
pub struct IrSecurity {
    pub scheme: AuthScheme,
    pub description: String,
    pub scopes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_scheme_closed_set() {
        assert_eq!(AuthScheme::from_key("basicAuth"), Some(AuthScheme::Basic));
        assert_eq!(AuthScheme::from_key("bearerAuth"), Some(AuthScheme::Bearer));
        assert_eq!(AuthScheme::from_key("apiKey"), Some(AuthScheme::ApiKey));
        assert_eq!(AuthScheme::from_key("oauth2"), Some(AuthScheme::OAuth2));
        assert_eq!(AuthScheme::from_key("petstoreAuth"), None);
    }
}
