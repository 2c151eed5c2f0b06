use crate::descriptor::operation::Operation;
use crate::descriptor::parameter::ParameterSet;
use crate::descriptor::schema::{Schema, SchemaType};
use crate::fragments::{
    PropertySpec, active_property, library_id_property, model_schema, notes_property,
};
use crate::operations::{
    CollectionOperation, DetailOperation, OperationOptions, child_collection_operation,
    child_detail_operation, parameter_refs,
};

use super::{
    AUTHOR, LIBRARY, MATCH_ACTIVE, MATCH_NAME, Model, REQUIRE_ADMIN, REQUIRE_REGULAR,
    WITH_LIBRARY, WITH_SERIES, WITH_STORIES, WITH_VOLUMES,
};

/// Author of one or more series, stories or volumes within a library.
pub struct Author;

impl Model for Author {
    fn name(&self) -> &'static str {
        AUTHOR
    }

    fn description(&self) -> &'static str {
        "Author of one or more Series, Stories, or Volumes"
    }

    fn parent(&self) -> Option<&'static str> {
        Some(LIBRARY)
    }

    fn all(&self) -> Option<Operation> {
        let includes = || self.includes();
        let matches = || self.matches();
        Some(child_collection_operation(
            LIBRARY,
            AUTHOR,
            CollectionOperation::List,
            OperationOptions {
                tag: Some(REQUIRE_REGULAR),
                includes: Some(&includes),
                matches: Some(&matches),
                ..Default::default()
            },
        ))
    }

    fn find(&self) -> Option<Operation> {
        let includes = || self.includes();
        Some(child_detail_operation(
            LIBRARY,
            AUTHOR,
            DetailOperation::Find,
            OperationOptions {
                tag: Some(REQUIRE_REGULAR),
                includes: Some(&includes),
                ..Default::default()
            },
        ))
    }

    fn insert(&self) -> Option<Operation> {
        Some(child_collection_operation(
            LIBRARY,
            AUTHOR,
            CollectionOperation::Insert,
            OperationOptions::tagged(REQUIRE_ADMIN),
        ))
    }

    fn update(&self) -> Option<Operation> {
        Some(child_detail_operation(
            LIBRARY,
            AUTHOR,
            DetailOperation::Update,
            OperationOptions::tagged(REQUIRE_ADMIN),
        ))
    }

    fn remove(&self) -> Option<Operation> {
        Some(child_detail_operation(
            LIBRARY,
            AUTHOR,
            DetailOperation::Remove,
            OperationOptions::tagged(REQUIRE_ADMIN),
        ))
    }

    fn includes(&self) -> ParameterSet {
        parameter_refs(&[WITH_LIBRARY, WITH_SERIES, WITH_STORIES, WITH_VOLUMES])
    }

    fn matches(&self) -> ParameterSet {
        parameter_refs(&[MATCH_ACTIVE, MATCH_NAME])
    }

    fn schema(&self) -> Schema {
        model_schema(
            AUTHOR,
            self.description(),
            &[
                active_property(AUTHOR),
                PropertySpec::new("firstName", SchemaType::String, "First name of this Author"),
                PropertySpec::new("lastName", SchemaType::String, "Last name of this Author"),
                library_id_property(AUTHOR),
                notes_property(AUTHOR),
                PropertySpec::new(
                    "principal",
                    SchemaType::Boolean,
                    "Is this a principal Author of the related object?",
                )
                .nullable(),
            ],
            &["firstName", "lastName", "libraryId"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::PathAssembler;

    #[test]
    fn test_author_paths_nested_under_library() {
        let entries = Author.paths(&PathAssembler::default());
        let templates: Vec<&str> = entries.iter().map(|e| e.template.as_str()).collect();
        assert_eq!(
            templates,
            [
                "/api/libraries/{libraryId}/authors",
                "/api/libraries/{libraryId}/authors/{authorId}"
            ]
        );
        assert_eq!(entries[1].item.parameters.len(), 2);
    }

    #[test]
    fn test_author_list_description() {
        let all = Author.all().unwrap();
        assert_eq!(
            all.description.as_deref(),
            Some("Return matching Authors of this Library")
        );
    }
}
