use luagen_core::error::TransformError;
use luagen_core::ir::{
    AuthScheme, ExampleValue, HttpMethod, ParamLocation, SchemaKind,
};
use luagen_core::parse;
use luagen_core::transform;

const STORE: &str = include_str!("fixtures/store.yaml");

#[test]
fn transform_filters_internal_operations() {
    let spec = parse::from_yaml(STORE).unwrap();
    let ctx = transform::transform(&spec).unwrap();

    let ids: Vec<&str> = ctx.operations.iter().map(|op| op.id.as_str()).collect();
    assert_eq!(ids, vec!["list_items", "create_item", "get_item", "create_order"]);
    assert!(!ids.contains(&"delete_item"));
    assert!(!ids.contains(&"poll_cart_events"));
}

#[test]
fn transform_canonicalizes_method_and_path() {
    let spec = parse::from_yaml(STORE).unwrap();
    let ctx = transform::transform(&spec).unwrap();

    let get_item = ctx.operations.iter().find(|op| op.id == "get_item").unwrap();
    assert_eq!(get_item.method, HttpMethod::Get);
    assert_eq!(get_item.method.as_str(), "GET");
    assert_eq!(get_item.path, "/items/{item-id}");
}

#[test]
fn transform_normalizes_descriptions() {
    let spec = parse::from_yaml(STORE).unwrap();
    let ctx = transform::transform(&spec).unwrap();

    let list = ctx.operations.iter().find(|op| op.id == "list_items").unwrap();
    assert_eq!(
        list.description,
        "List items available in the store.\n-- Sorted by SKU."
    );

    let create = ctx.operations.iter().find(|op| op.id == "create_item").unwrap();
    assert_eq!(
        create.description,
        "Create an item.\n-- Requires merchant access."
    );
}

#[test]
fn transform_normalizes_parameters() {
    let spec = parse::from_yaml(STORE).unwrap();
    let ctx = transform::transform(&spec).unwrap();

    let list = ctx.operations.iter().find(|op| op.id == "list_items").unwrap();
    let sku = &list.parameters[1];
    assert_eq!(sku.name, "sku");
    assert!(sku.in_query());
    assert!(!sku.in_path());

    let get_item = ctx.operations.iter().find(|op| op.id == "get_item").unwrap();
    let item_id = &get_item.parameters[0];
    assert_eq!(item_id.name, "item_id");
    assert_eq!(item_id.location, ParamLocation::Path);
    assert!(item_id.required);
}

#[test]
fn transform_synthesizes_request_body_example() {
    let spec = parse::from_yaml(STORE).unwrap();
    let ctx = transform::transform(&spec).unwrap();

    // Order-Item: sku has a description, quantity has an authored example.
    let order = ctx.operations.iter().find(|op| op.id == "create_order").unwrap();
    let body = order.request_body.as_ref().unwrap();
    assert_eq!(
        body.example,
        ExampleValue::Object(vec![
            (
                "sku".to_string(),
                ExampleValue::String("Stock keeping unit".to_string())
            ),
            ("quantity".to_string(), ExampleValue::Integer(2)),
        ])
    );
}

#[test]
fn transform_component_request_bodies() {
    let spec = parse::from_yaml(STORE).unwrap();
    let ctx = transform::transform(&spec).unwrap();

    assert_eq!(ctx.request_bodies.len(), 1);
    let create = &ctx.request_bodies[0];
    assert_eq!(create.id.as_deref(), Some("create_item"));
    assert!(create.required);

    // Item example: integer default, description fallback, number default,
    // single-element array.
    assert_eq!(
        create.example,
        ExampleValue::Object(vec![
            ("id".to_string(), ExampleValue::Integer(123)),
            ("name".to_string(), ExampleValue::String("Item name".to_string())),
            ("price".to_string(), ExampleValue::Number(123.45)),
            (
                "tags".to_string(),
                ExampleValue::Array(vec![ExampleValue::String(String::new())])
            ),
        ])
    );
}

#[test]
fn transform_preserves_response_order() {
    let spec = parse::from_yaml(STORE).unwrap();
    let ctx = transform::transform(&spec).unwrap();

    let list = ctx.operations.iter().find(|op| op.id == "list_items").unwrap();
    assert_eq!(list.responses.len(), 1);
    assert_eq!(list.responses[0].code, "200");
    match &list.responses[0].schema.as_ref().unwrap().kind {
        SchemaKind::Array(items) => match &items.kind {
            SchemaKind::Object(props) => {
                let ids: Vec<&str> = props.iter().map(|p| p.id.as_str()).collect();
                assert_eq!(ids, vec!["id", "name", "price", "tags"]);
            }
            other => panic!("expected object items, got {other:?}"),
        },
        other => panic!("expected array schema, got {other:?}"),
    }

    // Referenced component response is inlined and expanded.
    let create = ctx.operations.iter().find(|op| op.id == "create_item").unwrap();
    assert_eq!(create.responses[0].code, "201");
    assert!(create.responses[0].schema.is_some());
}

#[test]
fn transform_canonicalizes_security() {
    let spec = parse::from_yaml(STORE).unwrap();
    let ctx = transform::transform(&spec).unwrap();

    let order = ctx.operations.iter().find(|op| op.id == "create_order").unwrap();
    let schemes: Vec<AuthScheme> = order.security.iter().map(|s| s.scheme).collect();
    assert_eq!(schemes, vec![AuthScheme::Bearer, AuthScheme::OAuth2]);
    assert_eq!(order.security[1].scopes, vec!["store.write"]);

    // basicAuth carries an authored description in the document; bearerAuth
    // does not and falls back to the scheme's fixed text.
    let create = ctx.operations.iter().find(|op| op.id == "create_item").unwrap();
    assert_eq!(create.security[0].scheme, AuthScheme::Basic);
    assert_eq!(create.security[0].description, "Merchant basic auth");
    assert_eq!(
        order.security[0].description,
        "Bearer token issued for the authenticated user"
    );
}

#[test]
fn transform_is_deterministic() {
    let spec = parse::from_yaml(STORE).unwrap();
    let once = transform::transform(&spec).unwrap();
    let twice = transform::transform(&spec).unwrap();
    assert_eq!(
        serde_json::to_value(&once).unwrap(),
        serde_json::to_value(&twice).unwrap()
    );
}

#[test]
fn transform_rejects_unknown_scheme() {
    let yaml = r#"
openapi: "3.1.0"
info: { title: Odd, version: "0.0.1" }
paths:
  /things:
    get:
      operationId: list-things
      security:
        - petstoreAuth: []
      responses:
        "200":
          description: ok
"#;
    let spec = parse::from_yaml(yaml).unwrap();
    let err = transform::transform(&spec).unwrap_err();
    match err {
        TransformError::UnrecognizedScheme(name) => assert_eq!(name, "petstoreAuth"),
        other => panic!("expected UnrecognizedScheme, got {other:?}"),
    }
}

#[test]
fn transform_rejects_non_json_body() {
    let yaml = r#"
openapi: "3.1.0"
info: { title: Odd, version: "0.0.1" }
paths:
  /upload:
    post:
      operationId: upload-file
      requestBody:
        content:
          text/plain:
            schema: { type: string }
      responses:
        "200":
          description: ok
"#;
    let spec = parse::from_yaml(yaml).unwrap();
    let err = transform::transform(&spec).unwrap_err();
    assert!(matches!(err, TransformError::UnsupportedContent { .. }));
}

#[test]
fn transform_rejects_missing_operation_id() {
    let yaml = r#"
openapi: "3.1.0"
info: { title: Odd, version: "0.0.1" }
paths:
  /things:
    get:
      responses:
        "200":
          description: ok
"#;
    let spec = parse::from_yaml(yaml).unwrap();
    let err = transform::transform(&spec).unwrap_err();
    assert!(matches!(err, TransformError::MissingOperationId { .. }));
}

#[test]
fn transform_rejects_unclassifiable_schema() {
    let yaml = r#"
openapi: "3.1.0"
info: { title: Odd, version: "0.0.1" }
paths:
  /things:
    post:
      operationId: make-thing
      requestBody:
        content:
          application/json:
            schema: { type: uuid }
      responses:
        "200":
          description: ok
"#;
    let spec = parse::from_yaml(yaml).unwrap();
    let err = transform::transform(&spec).unwrap_err();
    assert!(matches!(
        err,
        TransformError::Expand(luagen_core::error::ExpandError::Unclassifiable(_))
    ));
}
