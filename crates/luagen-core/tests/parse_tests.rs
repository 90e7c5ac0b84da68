use luagen_core::parse;

const STORE: &str = include_str!("fixtures/store.yaml");

#[test]
fn parse_store_yaml() {
    let spec = parse::from_yaml(STORE).expect("should parse store.yaml");
    assert_eq!(spec.openapi, "3.1.0");
    assert_eq!(spec.info.title, "In-Game Store");
    assert_eq!(spec.paths.len(), 4);

    let components = spec.components.as_ref().expect("should have components");
    assert_eq!(components.schemas.len(), 4);
    assert_eq!(components.request_bodies.len(), 1);
    assert_eq!(components.security_schemes.len(), 4);
}

#[test]
fn parse_preserves_path_order() {
    let spec = parse::from_yaml(STORE).unwrap();
    let paths: Vec<&str> = spec.paths.keys().map(String::as_str).collect();
    assert_eq!(paths, vec!["/items", "/items/{item-id}", "/cart/events", "/orders"]);
}

#[test]
fn parse_internal_markers() {
    let spec = parse::from_yaml(STORE).unwrap();

    let delete = spec.paths["/items/{item-id}"].delete.as_ref().unwrap();
    assert!(delete.internal);
    assert!(!delete.hidden);
    assert!(delete.is_excluded());

    let poll = spec.paths["/cart/events"].get.as_ref().unwrap();
    assert!(poll.hidden);
    assert!(poll.is_excluded());

    let list = spec.paths["/items"].get.as_ref().unwrap();
    assert!(!list.is_excluded());
}

#[test]
fn parse_property_order() {
    let spec = parse::from_yaml(STORE).unwrap();
    let components = spec.components.as_ref().unwrap();
    match &components.schemas["Item"] {
        luagen_core::parse::schema::SchemaOrRef::Schema(item) => {
            let props: Vec<&str> = item.properties.keys().map(String::as_str).collect();
            assert_eq!(props, vec!["id", "name", "price", "tags"]);
            assert_eq!(item.required, vec!["id", "name"]);
        }
        other => panic!("expected inline schema, got {other:?}"),
    }
}

#[test]
fn parse_invalid_version() {
    let yaml = r#"
openapi: "2.0.0"
info:
  title: Legacy
  version: "1.0"
paths: {}
"#;
    let result = parse::from_yaml(yaml);
    assert!(matches!(
        result,
        Err(luagen_core::error::ParseError::UnsupportedVersion(_))
    ));
}

#[test]
fn parse_json_document() {
    let json = r#"{
  "openapi": "3.0.3",
  "info": { "title": "Mini", "version": "0.1.0" },
  "paths": {}
}"#;
    let spec = parse::from_json(json).expect("should parse JSON");
    assert_eq!(spec.info.title, "Mini");
    assert!(spec.paths.is_empty());
}
