use lma_core::{Generator, SpecVersion};
use lma_core::descriptor::document::OpenApiDocument;
use lma_core::descriptor::parameter::ParameterOrRef;
use lma_core::descriptor::schema::SchemaOrRef;
use lma_core::fragments::model_list_response;
use lma_core::models::registry;
use lma_core::naming::{
    ComponentSection, collection_id_param, collection_name, plural_form, reference_path,
};
use lma_core::paths::PathAssembler;

fn document() -> OpenApiDocument {
    Generator::default().document(SpecVersion::V3_1).unwrap()
}

#[test]
fn every_model_has_singular_and_list_schemas() {
    let document = document();
    let schemas = &document.components.schemas;
    for model in registry() {
        let name = model.name();
        assert!(schemas.contains_key(name), "missing schema {name}");

        let list = collection_name(name);
        let SchemaOrRef::Schema(list_schema) = &schemas[&list] else {
            panic!("{list} should be an inline schema");
        };
        let items = list_schema.items.as_deref().expect("list schema has items");
        assert_eq!(
            items,
            &SchemaOrRef::Ref {
                ref_path: reference_path(ComponentSection::Schemas, name)
            }
        );
    }
}

#[test]
fn countable_models_use_plural_collection_names() {
    for model in registry() {
        let name = model.name();
        if plural_form(name) != name {
            assert_eq!(collection_name(name), plural_form(name));
        }
    }
    assert_eq!(collection_name("Series"), "SeriesList");
}

#[test]
fn parent_detail_path_shape() {
    let paths = PathAssembler::default();
    for model in registry().iter().filter(|m| m.parent().is_none()) {
        let name = model.name();
        let id = collection_id_param(name);
        let detail = model
            .paths(&paths)
            .into_iter()
            .find(|e| e.template.ends_with('}'))
            .expect("detail path");
        assert_eq!(
            detail.template,
            format!("/api/{}/{{{id}}}", plural_form(name).to_lowercase())
        );
        assert_eq!(
            detail.item.parameters,
            vec![ParameterOrRef::Ref {
                ref_path: reference_path(ComponentSection::Parameters, &id)
            }]
        );
    }
}

#[test]
fn library_scenario() {
    assert_eq!(plural_form("Library"), "Libraries");
    let document = document();

    let collection = &document.paths["/api/libraries"];
    assert!(collection.get.is_some() && collection.post.is_some());
    assert!(collection.put.is_none() && collection.delete.is_none());

    let detail = &document.paths["/api/libraries/{libraryId}"];
    let methods: Vec<&str> = detail.operations().map(|(m, _)| m).collect();
    assert_eq!(methods, ["get", "put", "delete"]);
}

#[test]
fn child_models_nest_under_library() {
    let document = document();
    for template in [
        "/api/libraries/{libraryId}/authors",
        "/api/libraries/{libraryId}/authors/{authorId}",
        "/api/libraries/{libraryId}/series",
        "/api/libraries/{libraryId}/series/{seriesId}",
        "/api/libraries/{libraryId}/stories/{storyId}",
        "/api/libraries/{libraryId}/volumes/{volumeId}",
        "/api/users/{userId}",
    ] {
        assert!(document.paths.contains_key(template), "missing {template}");
    }
    assert_eq!(document.paths.len(), 12);
}

#[test]
fn every_operation_is_tagged() {
    let document = document();
    let tags: Vec<&str> = document.tags.iter().map(|t| t.name.as_str()).collect();
    for (template, item) in &document.paths {
        for (method, op) in item.operations() {
            assert_eq!(op.tags.len(), 1, "{method} {template}");
            assert!(tags.contains(&op.tags[0].as_str()));
        }
    }
}

#[test]
fn list_response_description() {
    assert_eq!(model_list_response("Author").description, "The requested Authors");
}
