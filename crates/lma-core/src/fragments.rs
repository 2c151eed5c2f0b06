//! Builders for the reusable descriptors (schemas, parameters, request bodies,
//! responses) that make up `components`.

use indexmap::IndexMap;

use crate::descriptor::media_type::{APPLICATION_JSON, MediaType};
use crate::descriptor::parameter::{Parameter, ParameterLocation};
use crate::descriptor::request_body::RequestBody;
use crate::descriptor::response::Response;
use crate::descriptor::schema::{Schema, SchemaOrRef, SchemaType};
use crate::naming::{collection_name, plural_form};
use crate::refs::schema_ref;

/// One property of a model schema.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    pub name: &'static str,
    pub kind: SchemaType,
    pub description: String,
    pub nullable: bool,
    /// Accepted in request bodies but never returned (passwords).
    pub write_only: bool,
}

impl PropertySpec {
    pub fn new(name: &'static str, kind: SchemaType, description: impl Into<String>) -> Self {
        Self {
            name,
            kind,
            description: description.into(),
            nullable: false,
            write_only: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn write_only(mut self) -> Self {
        self.write_only = true;
        self
    }

    fn to_schema(&self) -> Schema {
        Schema {
            description: Some(self.description.clone()),
            nullable: self.nullable.then_some(true),
            write_only: self.write_only.then_some(true),
            ..Schema::of_type(self.kind)
        }
    }
}

// Property specs shared by several models

pub const ID: &str = "id";

/// `id`: integer primary key. Not required because inserts omit it.
pub fn id_property(model: &str) -> PropertySpec {
    PropertySpec::new(ID, SchemaType::Integer, format!("Primary key of this {model}"))
}

pub fn active_property(model: &str) -> PropertySpec {
    PropertySpec::new("active", SchemaType::Boolean, format!("Is this {model} active?"))
}

pub fn copyright_property(model: &str) -> PropertySpec {
    PropertySpec::new(
        "copyright",
        SchemaType::String,
        format!("Copyright notice for this {model}"),
    )
    .nullable()
}

pub fn library_id_property(model: &str) -> PropertySpec {
    PropertySpec::new(
        "libraryId",
        SchemaType::Integer,
        format!("Primary key of the Library that owns this {model}"),
    )
}

pub fn name_property(model: &str) -> PropertySpec {
    PropertySpec::new("name", SchemaType::String, format!("Canonical name of this {model}"))
}

pub fn notes_property(model: &str) -> PropertySpec {
    PropertySpec::new(
        "notes",
        SchemaType::String,
        format!("General notes about this {model}"),
    )
    .nullable()
}

/// Object schema for one instance of `model`.
///
/// The `id` property always comes first; an `id` entry in `properties` is
/// ignored so the primary key keeps its canonical shape.
pub fn model_schema(
    model: &str,
    description: &str,
    properties: &[PropertySpec],
    required: &[&str],
) -> Schema {
    let mut props: IndexMap<String, SchemaOrRef> = IndexMap::new();
    props.insert(ID.to_string(), id_property(model).to_schema().into());
    for property in properties.iter().filter(|p| p.name != ID) {
        props.insert(property.name.to_string(), property.to_schema().into());
    }
    Schema {
        description: Some(description.to_string()),
        properties: props,
        required: required.iter().map(|r| r.to_string()).collect(),
        ..Schema::of_type(SchemaType::Object)
    }
}

/// Array schema whose items reference the schema of `model`.
pub fn model_list_schema(model: &str) -> Schema {
    Schema {
        description: Some(format!("A list of {}", plural_form(model))),
        items: Some(Box::new(schema_ref(model))),
        ..Schema::of_type(SchemaType::Array)
    }
}

/// Schema of the body of every error response.
pub fn error_schema() -> Schema {
    let field = |kind, description: &str| -> SchemaOrRef {
        Schema {
            description: Some(description.to_string()),
            ..Schema::of_type(kind)
        }
        .into()
    };
    let mut properties = IndexMap::new();
    properties.insert(
        "context".to_string(),
        field(SchemaType::String, "Error source location"),
    );
    properties.insert(
        "message".to_string(),
        field(SchemaType::String, "Error message summary"),
    );
    properties.insert(
        "status".to_string(),
        field(SchemaType::Integer, "HTTP status code"),
    );
    Schema {
        description: Some("Error report returned by a failed request".to_string()),
        properties,
        ..Schema::of_type(SchemaType::Object)
    }
}

fn json_content(schema: SchemaOrRef) -> IndexMap<String, MediaType> {
    let mut content = IndexMap::new();
    content.insert(APPLICATION_JSON.to_string(), MediaType::with_schema(schema));
    content
}

/// Required JSON request body carrying one `model`.
pub fn model_request_body(model: &str, description: &str) -> RequestBody {
    RequestBody {
        description: Some(description.to_string()),
        content: json_content(schema_ref(model)),
        required: true,
    }
}

/// Response carrying one `model`.
pub fn model_response(model: &str) -> Response {
    Response {
        description: format!("The requested {model}"),
        content: json_content(schema_ref(model)),
    }
}

/// Response carrying a list of `model`.
pub fn model_list_response(model: &str) -> Response {
    Response {
        description: format!("The requested {}", plural_form(model)),
        content: json_content(schema_ref(&collection_name(model))),
    }
}

/// Error response described by `description`, whose body is the shared
/// error schema registered as `error_schema`.
pub fn error_response(description: &str, error_schema: &str) -> Response {
    Response {
        description: description.to_string(),
        content: json_content(schema_ref(error_schema)),
    }
}

/// Required integer path parameter.
pub fn path_parameter(name: &str, description: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        location: ParameterLocation::Path,
        description: Some(description.to_string()),
        required: true,
        allow_empty_value: None,
        schema: Some(Schema::of_type(SchemaType::Integer).into()),
    }
}

/// Optional query parameter. `allow_empty_value` marks flags such as
/// `?withAuthors` that are meaningful without a value.
pub fn query_parameter(
    name: &str,
    description: &str,
    kind: SchemaType,
    allow_empty_value: bool,
) -> Parameter {
    Parameter {
        name: name.to_string(),
        location: ParameterLocation::Query,
        description: Some(description.to_string()),
        required: false,
        allow_empty_value: allow_empty_value.then_some(true),
        schema: Some(Schema::of_type(kind).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::schema::TypeSet;

    fn schema_ref_of(media: &MediaType) -> &str {
        match media.schema.as_ref() {
            Some(SchemaOrRef::Ref { ref_path }) => ref_path,
            other => panic!("expected schema reference, got {other:?}"),
        }
    }

    #[test]
    fn test_model_schema_id_first() {
        let schema = model_schema(
            "Library",
            "Library of things",
            &[name_property("Library"), notes_property("Library")],
            &["name"],
        );
        let keys: Vec<&String> = schema.properties.keys().collect();
        assert_eq!(keys, ["id", "name", "notes"]);
        assert_eq!(schema.required, vec!["name".to_string()]);

        match &schema.properties["id"] {
            SchemaOrRef::Schema(id) => {
                assert_eq!(id.schema_type, Some(TypeSet::Single(SchemaType::Integer)));
                assert_eq!(id.description.as_deref(), Some("Primary key of this Library"));
            }
            _ => panic!("expected inline id schema"),
        }
    }

    #[test]
    fn test_model_schema_ignores_duplicate_id() {
        let shadow = PropertySpec::new(ID, SchemaType::String, "not a key");
        let schema = model_schema("User", "User", &[shadow], &[]);
        assert_eq!(schema.properties.len(), 1);
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["properties"]["id"]["type"], "integer");
    }

    #[test]
    fn test_nullable_property() {
        let schema = model_schema("Library", "Library", &[notes_property("Library")], &[]);
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["properties"]["notes"]["nullable"], true);
        assert!(json["properties"]["id"].get("nullable").is_none());
    }

    #[test]
    fn test_model_list_schema() {
        let schema = model_list_schema("Author");
        assert_eq!(schema.schema_type, Some(TypeSet::Single(SchemaType::Array)));
        assert_eq!(schema.items.as_deref(), Some(&schema_ref("Author")));
    }

    #[test]
    fn test_error_schema_fields() {
        let schema = error_schema();
        let keys: Vec<&String> = schema.properties.keys().collect();
        assert_eq!(keys, ["context", "message", "status"]);
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["properties"]["status"]["type"], "integer");
        assert_eq!(json["properties"]["context"]["type"], "string");
    }

    #[test]
    fn test_request_body() {
        let body = model_request_body("Author", "Author of things");
        assert!(body.required);
        assert_eq!(
            schema_ref_of(&body.content[APPLICATION_JSON]),
            "#/components/schemas/Author"
        );
    }

    #[test]
    fn test_model_responses() {
        let one = model_response("Library");
        assert_eq!(one.description, "The requested Library");
        assert_eq!(
            schema_ref_of(&one.content[APPLICATION_JSON]),
            "#/components/schemas/Library"
        );

        let many = model_list_response("Author");
        assert_eq!(many.description, "The requested Authors");
        assert_eq!(
            schema_ref_of(&many.content[APPLICATION_JSON]),
            "#/components/schemas/Authors"
        );
    }

    #[test]
    fn test_uncountable_list_response() {
        let many = model_list_response("Series");
        assert_eq!(many.description, "The requested Series");
        assert_eq!(
            schema_ref_of(&many.content[APPLICATION_JSON]),
            "#/components/schemas/SeriesList"
        );
    }

    #[test]
    fn test_error_response() {
        let response = error_response("Error in request properties", "Error");
        assert_eq!(response.description, "Error in request properties");
        assert_eq!(
            schema_ref_of(&response.content[APPLICATION_JSON]),
            "#/components/schemas/Error"
        );

        let generic = error_response("Requested item is not found", "GenericError");
        assert_eq!(
            schema_ref_of(&generic.content[APPLICATION_JSON]),
            "#/components/schemas/GenericError"
        );
    }

    #[test]
    fn test_parameters() {
        let path = path_parameter("libraryId", "ID of the specified Library");
        assert_eq!(path.location, ParameterLocation::Path);
        assert!(path.required);

        let flag = query_parameter("withAuthors", "Include associated Authors", SchemaType::Boolean, true);
        let json = serde_json::to_string(&flag).unwrap();
        insta::assert_snapshot!(json, @r#"{"name":"withAuthors","in":"query","description":"Include associated Authors","required":false,"allowEmptyValue":true,"schema":{"type":"boolean"}}"#);

        let limit = query_parameter("limit", "Maximum number of rows to return [25]", SchemaType::Integer, false);
        assert_eq!(limit.allow_empty_value, None);
    }
}
