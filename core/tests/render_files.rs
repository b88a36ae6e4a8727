use oas2http_core::{
    parse_openapi_document, render_document, render_paths, AppError, FileLayout, RenderOptions,
};
use pretty_assertions::assert_eq;

#[test]
fn test_customers_post_from_json() {
    let json = r#"{"paths":{"/customers":{"post":{"responses":{"201":{"description":"Created"}},"requestBody":{"content":{"application/json":{"schema":{"type":"object","properties":{"name":{"type":"string"}}}}}}}}}}"#;

    let doc = parse_openapi_document(json).unwrap();
    let files = render_document(&doc).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(
        files["customers.http"],
        r#"# Body
#  - name?: String
#
POST /customers
host: {{HTTP_HOST}}
Content-Type: application/json"#
    );
}

#[test]
fn test_required_property_has_no_marker() {
    let yaml = r#"
openapi: 3.0.3
info: { title: Shop, version: 1.0.0 }
paths:
  /customers:
    put:
      requestBody:
        content:
          application/json:
            schema:
              type: object
              required: [name]
              properties:
                name: { type: string }
                email: { type: string }
      responses:
        '200': { description: OK }
"#;
    let doc = parse_openapi_document(yaml).unwrap();
    let files = render_document(&doc).unwrap();

    assert_eq!(
        files["customers.http"],
        r#"# Body
#  - name: String
#  - email?: String
#
PUT /customers
host: {{HTTP_HOST}}
Content-Type: application/json"#
    );
}

#[test]
fn test_full_document() {
    let yaml = r#"
openapi: 3.1.0
info: { title: Shop, version: 1.0.0 }
paths:
  /:
    get:
      responses: { '200': { description: Index } }
  /customers/{id}:
    parameters:
      - { name: id, in: path, required: true, schema: { type: string } }
    get:
      responses: { '200': { description: OK } }
    patch:
      requestBody:
        $ref: '#/components/requestBodies/CustomerPatch'
      responses: { '200': { description: OK } }
  /v2/customers:
    post:
      requestBody:
        content:
          application/json:
            schema: { $ref: '#/components/schemas/Customer' }
      responses: { '201': { description: Created } }
components:
  schemas:
    Address:
      type: object
      required: [city]
      properties:
        city: { type: string }
        zip: { type: [string, 'null'] }
    Customer:
      type: object
      required: [name]
      properties:
        name: { type: string }
        addresses:
          type: array
          items: { $ref: '#/components/schemas/Address' }
        referrer: { $ref: '#/components/schemas/Customer' }
  requestBodies:
    CustomerPatch:
      content:
        application/json:
          schema:
            type: object
            properties:
              email: { type: string }
"#;
    let doc = parse_openapi_document(yaml).unwrap();
    let files = render_document(&doc).unwrap();

    let names: Vec<&str> = files.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["index.http", "customers.http", "customers_2.http"]);

    assert_eq!(files["index.http"], "GET /\nhost: {{HTTP_HOST}}");

    assert_eq!(
        files["customers.http"],
        r#"GET /customers/{id}
host: {{HTTP_HOST}}

# Body
#  - email?: String
#
PATCH /customers/{id}
host: {{HTTP_HOST}}
Content-Type: application/json"#
    );

    assert_eq!(
        files["customers_2.http"],
        r#"# Body
#  - name: String
#  - addresses?: Array
#    - city: String
#    - zip?: String,Null
#  - referrer?: Customer
#
POST /v2/customers
host: {{HTTP_HOST}}
Content-Type: application/json"#
    );
}

#[test]
fn test_parameter_comments_and_nested_layout() {
    let yaml = r#"
paths:
  /v1/orders/{orderId}:
    get:
      parameters:
        - { name: orderId, in: path, required: true, schema: { type: integer } }
        - { name: fields, in: query, schema: { type: array, items: { type: string } } }
      responses: { '200': { description: OK } }
"#;
    let doc = parse_openapi_document(yaml).unwrap();
    let options = RenderOptions {
        host_variable: "ORDERS_HOST".to_string(),
        parameter_comments: true,
        layout: FileLayout::Nested,
    };
    let rendered = render_paths(&doc, &options).unwrap();

    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].file_name, "v1/orders.http");
    assert_eq!(
        rendered[0].content,
        r#"# Query
#  - fields?: Array
#
# Parameters
#  - orderId: Integer
#
GET /v1/orders/{orderId}
host: {{ORDERS_HOST}}"#
    );
}

#[test]
fn test_translation_is_idempotent() {
    let yaml = r#"
paths:
  /b:
    post:
      requestBody:
        content:
          application/json:
            schema:
              type: object
              properties:
                z: { type: string }
                a: { type: object, properties: { m: { type: number } } }
      responses: {}
  /a:
    get: { responses: {} }
"#;
    let first = render_document(&parse_openapi_document(yaml).unwrap()).unwrap();
    let second = render_document(&parse_openapi_document(yaml).unwrap()).unwrap();

    assert_eq!(first, second);
    let names: Vec<&String> = first.keys().collect();
    assert_eq!(names, vec!["b.http", "a.http"]);
}

#[test]
fn test_document_without_paths_fails() {
    let doc = parse_openapi_document(r#"{"openapi":"3.0.0"}"#).unwrap();
    let err = render_document(&doc).unwrap_err();
    assert!(matches!(err, AppError::MissingPaths));
}

#[test]
fn test_unquoted_numeric_property_name() {
    let yaml = r#"
paths:
  /codes:
    post:
      requestBody:
        content:
          application/json:
            schema:
              type: object
              properties:
                200: { type: string }
                ok: { type: boolean }
      responses:
        201: { description: Created }
"#;
    let files = render_document(&parse_openapi_document(yaml).unwrap()).unwrap();

    assert_eq!(
        files["codes.http"],
        r#"# Body
#  - 200?: String
#  - ok?: Boolean
#
POST /codes
host: {{HTTP_HOST}}
Content-Type: application/json"#
    );
}

#[test]
fn test_body_schema_without_type() {
    let yaml = r#"
paths:
  /u:
    post:
      requestBody:
        content:
          application/json:
            schema:
              properties:
                name: { type: string }
      responses: {}
"#;
    let files = render_document(&parse_openapi_document(yaml).unwrap()).unwrap();

    assert_eq!(
        files["u.http"],
        r#"# Body
#  - name?: String
#
POST /u
host: {{HTTP_HOST}}
Content-Type: application/json"#
    );
}

#[test]
fn test_flow_style_yaml_document() {
    let doc = parse_openapi_document("{paths: {/ping: {get: {responses: {}}}}}").unwrap();
    let files = render_document(&doc).unwrap();

    assert_eq!(files["ping.http"], "GET /ping\nhost: {{HTTP_HOST}}");
}
