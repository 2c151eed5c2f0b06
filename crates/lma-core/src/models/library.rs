use crate::descriptor::operation::Operation;
use crate::descriptor::parameter::ParameterSet;
use crate::descriptor::response::Responses;
use crate::descriptor::schema::{Schema, SchemaType};
use crate::fragments::{PropertySpec, active_property, model_schema, name_property, notes_property};
use crate::operations::{
    BAD_REQUEST, CREATED, FORBIDDEN, NOT_UNIQUE, OperationOptions, find_operation,
    insert_operation, list_operation, parameter_refs, remove_operation, update_operation,
};
use crate::refs::response_ref;

use super::{
    LIBRARY, MATCH_ACTIVE, MATCH_NAME, MATCH_SCOPE, Model, REQUIRE_ADMIN, REQUIRE_ANY,
    REQUIRE_REGULAR, REQUIRE_SUPERUSER, WITH_AUTHORS, WITH_SERIES, WITH_STORIES, WITH_VOLUMES,
};

/// A library owning authors, series, stories and volumes. Top of the
/// ownership tree.
pub struct Library;

impl Library {
    /// Insert can additionally fail validation or collide with an existing name.
    fn insert_responses() -> Responses {
        let mut responses = Responses::new();
        responses.insert(CREATED.to_string(), response_ref(LIBRARY));
        responses.insert(BAD_REQUEST.to_string(), response_ref(BAD_REQUEST));
        responses.insert(FORBIDDEN.to_string(), response_ref(FORBIDDEN));
        responses.insert(NOT_UNIQUE.to_string(), response_ref(NOT_UNIQUE));
        responses
    }
}

impl Model for Library {
    fn name(&self) -> &'static str {
        LIBRARY
    }

    fn description(&self) -> &'static str {
        "Library containing Authors, Series, Stories, and Volumes"
    }

    fn all(&self) -> Option<Operation> {
        let includes = || self.includes();
        let matches = || self.matches();
        Some(list_operation(
            LIBRARY,
            OperationOptions {
                tag: Some(REQUIRE_ANY),
                includes: Some(&includes),
                matches: Some(&matches),
                ..Default::default()
            },
        ))
    }

    fn find(&self) -> Option<Operation> {
        let includes = || self.includes();
        Some(find_operation(
            LIBRARY,
            OperationOptions {
                tag: Some(REQUIRE_REGULAR),
                includes: Some(&includes),
                ..Default::default()
            },
        ))
    }

    fn insert(&self) -> Option<Operation> {
        Some(insert_operation(
            LIBRARY,
            OperationOptions {
                tag: Some(REQUIRE_SUPERUSER),
                responses: Some(&Self::insert_responses),
                ..Default::default()
            },
        ))
    }

    fn update(&self) -> Option<Operation> {
        Some(update_operation(LIBRARY, OperationOptions::tagged(REQUIRE_ADMIN)))
    }

    fn remove(&self) -> Option<Operation> {
        Some(remove_operation(LIBRARY, OperationOptions::tagged(REQUIRE_SUPERUSER)))
    }

    fn includes(&self) -> ParameterSet {
        parameter_refs(&[WITH_AUTHORS, WITH_SERIES, WITH_STORIES, WITH_VOLUMES])
    }

    fn matches(&self) -> ParameterSet {
        parameter_refs(&[MATCH_ACTIVE, MATCH_NAME, MATCH_SCOPE])
    }

    fn schema(&self) -> Schema {
        model_schema(
            LIBRARY,
            self.description(),
            &[
                active_property(LIBRARY),
                name_property(LIBRARY),
                notes_property(LIBRARY),
                PropertySpec::new(
                    "scope",
                    SchemaType::String,
                    "Scope prefix for 'require' permissions",
                ),
            ],
            &["name", "scope"],
        )
    }
}
