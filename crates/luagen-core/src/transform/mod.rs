pub mod example;
pub mod expand;
pub mod text;

use crate::error::TransformError;
use crate::ir::{
    AuthScheme, HttpMethod, IrInfo, IrOperation, IrParameter, IrRequestBody, IrResponse,
    IrSecurity, ParamLocation, SdkContext,
};
use crate::parse::media_type::APPLICATION_JSON;
use crate::parse::operation::Operation;
use crate::parse::parameter::{ParameterLocation, ParameterOrRef};
use crate::parse::ref_resolve::RefResolver;
use crate::parse::request_body::{RequestBody, RequestBodyOrRef};
use crate::parse::response::ResponseOrRef;
use crate::parse::schema::SchemaOrRef;
use crate::parse::security::SecurityScheme;
use crate::parse::spec::ApiSpec;

use indexmap::IndexMap;

use example::synthesize_example;
use expand::expand_schema;
use text::{canonical_ident, canonical_op_id, normalize_description, normalize_param_name};

/// Transform a parsed API document into the render-context.
///
/// Resolves every reference, then flattens the path/method nesting into an
/// ordered sequence of operation records and normalizes the reusable request
/// bodies. The input document is not mutated.
pub fn transform(spec: &ApiSpec) -> Result<SdkContext, TransformError> {
    let mut resolver = RefResolver::new(spec);
    let resolved = resolver.resolve_spec(spec)?;

    log::info!("processing {} paths", resolved.paths.len());
    let operations = normalize_operations(&resolved)?;

    log::info!("processing request bodies");
    let request_bodies = normalize_request_bodies(&resolved)?;

    Ok(SdkContext {
        info: IrInfo {
            title: resolved.info.title.clone(),
            version: resolved.info.version.clone(),
            description: resolved.info.description.clone(),
        },
        operations,
        request_bodies,
    })
}

fn normalize_operations(spec: &ApiSpec) -> Result<Vec<IrOperation>, TransformError> {
    let mut operations = Vec::new();
    let schemes = spec.components.as_ref().map(|c| &c.security_schemes);

    for (path, item) in &spec.paths {
        macro_rules! add_op {
            ($method:expr, $op:expr) => {
                if let Some(ref op) = $op {
                    if op.is_excluded() {
                        log::debug!("  {} {} (internal, skipped)", $method.as_str(), path);
                    } else {
                        log::debug!("  {} {}", $method.as_str(), path);
                        operations.push(build_operation($method, path, op, schemes)?);
                    }
                }
            };
        }

        add_op!(HttpMethod::Get, item.get);
        add_op!(HttpMethod::Post, item.post);
        add_op!(HttpMethod::Put, item.put);
        add_op!(HttpMethod::Delete, item.delete);
        add_op!(HttpMethod::Patch, item.patch);
        add_op!(HttpMethod::Options, item.options);
        add_op!(HttpMethod::Head, item.head);
        add_op!(HttpMethod::Trace, item.trace);
    }

    Ok(operations)
}

fn build_operation(
    method: HttpMethod,
    path: &str,
    op: &Operation,
    schemes: Option<&IndexMap<String, SecurityScheme>>,
) -> Result<IrOperation, TransformError> {
    let id = op
        .operation_id
        .as_deref()
        .map(canonical_op_id)
        .ok_or_else(|| TransformError::MissingOperationId {
            method: method.as_str().to_string(),
            path: path.to_string(),
        })?;

    let description = op
        .description
        .as_deref()
        .map(normalize_description)
        .unwrap_or_default();

    let parameters = normalize_parameters(&op.parameters)?;
    let responses = normalize_responses(op)?;
    let security = normalize_security(op, schemes)?;

    let request_body = match op.request_body {
        Some(RequestBodyOrRef::RequestBody(ref rb)) => Some(normalize_request_body(rb, None, &id)?),
        Some(RequestBodyOrRef::Ref { ref ref_path }) => {
            // The resolver inlines every body reference before this point.
            return Err(crate::error::ExpandError::UnresolvedRef(ref_path.clone()).into());
        }
        None => None,
    };

    Ok(IrOperation {
        id,
        method,
        path: path.to_string(),
        description,
        parameters,
        request_body,
        responses,
        security,
    })
}

fn normalize_parameters(params: &[ParameterOrRef]) -> Result<Vec<IrParameter>, TransformError> {
    let mut normalized = Vec::with_capacity(params.len());
    for param in params {
        let param = match param {
            ParameterOrRef::Parameter(p) => p,
            ParameterOrRef::Ref { ref_path } => {
                return Err(crate::error::ExpandError::UnresolvedRef(ref_path.clone()).into());
            }
        };
        let location = match param.location {
            ParameterLocation::Path => ParamLocation::Path,
            ParameterLocation::Query => ParamLocation::Query,
        };
        let schema = match param.schema {
            Some(SchemaOrRef::Schema(ref s)) => Some(expand_schema(s)?),
            Some(SchemaOrRef::Ref { ref ref_path }) => {
                return Err(crate::error::ExpandError::UnresolvedRef(ref_path.clone()).into());
            }
            None => None,
        };
        normalized.push(IrParameter {
            name: normalize_param_name(&param.name),
            original_name: param.name.clone(),
            location,
            required: param.required,
            description: param.description.as_deref().map(normalize_description),
            schema,
        });
    }
    Ok(normalized)
}

fn normalize_responses(op: &Operation) -> Result<Vec<IrResponse>, TransformError> {
    let mut responses = Vec::with_capacity(op.responses.len());
    for (code, resp) in &op.responses {
        let resp = match resp {
            ResponseOrRef::Response(r) => r,
            ResponseOrRef::Ref { ref_path } => {
                return Err(crate::error::ExpandError::UnresolvedRef(ref_path.clone()).into());
            }
        };
        let schema = match resp.content.get(APPLICATION_JSON).and_then(|mt| mt.schema.as_ref()) {
            Some(SchemaOrRef::Schema(s)) => Some(expand_schema(s)?),
            Some(SchemaOrRef::Ref { ref_path }) => {
                return Err(crate::error::ExpandError::UnresolvedRef(ref_path.clone()).into());
            }
            None => None,
        };
        responses.push(IrResponse {
            code: code.clone(),
            description: resp.description.as_deref().map(normalize_description),
            schema,
        });
    }
    Ok(responses)
}

/// Flatten an operation's requirement entries into canonical scheme records.
/// The description comes from the document's `securitySchemes` entry when
/// the author wrote one, otherwise from the scheme's fixed text.
fn normalize_security(
    op: &Operation,
    schemes: Option<&IndexMap<String, SecurityScheme>>,
) -> Result<Vec<IrSecurity>, TransformError> {
    let mut security = Vec::new();
    for requirement in op.security.iter().flatten() {
        for (key, scopes) in requirement {
            let scheme = AuthScheme::from_key(key)
                .ok_or_else(|| TransformError::UnrecognizedScheme(key.clone()))?;
            let description = schemes
                .and_then(|s| s.get(key))
                .and_then(|s| s.description.as_deref())
                .map(normalize_description)
                .unwrap_or_else(|| scheme.describe().to_string());
            security.push(IrSecurity {
                scheme,
                description,
                scopes: scopes.clone(),
            });
        }
    }
    Ok(security)
}

/// Normalize one JSON request body: the schema is expanded and the example is
/// taken from the author or synthesized from the schema.
fn normalize_request_body(
    body: &RequestBody,
    component_name: Option<&str>,
    owner: &str,
) -> Result<IrRequestBody, TransformError> {
    let media = body.content.get(APPLICATION_JSON).ok_or_else(|| {
        TransformError::UnsupportedContent {
            operation: owner.to_string(),
            found: body.content.keys().cloned().collect::<Vec<_>>().join(", "),
        }
    })?;

    let schema = match media.schema {
        Some(SchemaOrRef::Schema(ref s)) => expand_schema(s)?,
        Some(SchemaOrRef::Ref { ref ref_path }) => {
            return Err(crate::error::ExpandError::UnresolvedRef(ref_path.clone()).into());
        }
        None => return Err(TransformError::MissingRequestSchema(owner.to_string())),
    };

    let example = match media.example {
        Some(ref authored) => crate::ir::ExampleValue::from_json(authored),
        None => synthesize_example(&schema)?,
    };

    Ok(IrRequestBody {
        id: component_name.map(canonical_ident),
        description: body.description.as_deref().map(normalize_description),
        required: body.required,
        schema,
        example,
    })
}

fn normalize_request_bodies(spec: &ApiSpec) -> Result<Vec<IrRequestBody>, TransformError> {
    let Some(ref components) = spec.components else {
        return Ok(Vec::new());
    };

    let mut bodies = Vec::with_capacity(components.request_bodies.len());
    for (name, body) in &components.request_bodies {
        let body = match body {
            RequestBodyOrRef::RequestBody(rb) => rb,
            RequestBodyOrRef::Ref { ref_path } => {
                return Err(crate::error::ExpandError::UnresolvedRef(ref_path.clone()).into());
            }
        };
        log::debug!("  {}", name);
        bodies.push(normalize_request_body(body, Some(name), name)?);
    }
    Ok(bodies)
}
