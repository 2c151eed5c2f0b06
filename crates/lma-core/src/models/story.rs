use crate::descriptor::operation::Operation;
use crate::descriptor::parameter::ParameterSet;
use crate::descriptor::schema::{Schema, SchemaType};
use crate::fragments::{
    PropertySpec, active_property, copyright_property, library_id_property, model_schema,
    name_property, notes_property,
};
use crate::operations::{
    CollectionOperation, DetailOperation, OperationOptions, child_collection_operation,
    child_detail_operation, parameter_refs,
};

use super::{
    LIBRARY, MATCH_ACTIVE, MATCH_NAME, Model, REQUIRE_ADMIN, REQUIRE_REGULAR, STORY,
    WITH_AUTHORS, WITH_LIBRARY, WITH_SERIES, WITH_VOLUMES,
};

/// Individual story, possibly part of a series and published in volumes.
pub struct Story;

impl Model for Story {
    fn name(&self) -> &'static str {
        STORY
    }

    fn description(&self) -> &'static str {
        "Individual Story that may be part of a Series, and published in one or more Volumes"
    }

    fn parent(&self) -> Option<&'static str> {
        Some(LIBRARY)
    }

    fn all(&self) -> Option<Operation> {
        let includes = || self.includes();
        let matches = || self.matches();
        Some(child_collection_operation(
            LIBRARY,
            STORY,
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
            STORY,
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
            STORY,
            CollectionOperation::Insert,
            OperationOptions::tagged(REQUIRE_ADMIN),
        ))
    }

    fn update(&self) -> Option<Operation> {
        Some(child_detail_operation(
            LIBRARY,
            STORY,
            DetailOperation::Update,
            OperationOptions::tagged(REQUIRE_ADMIN),
        ))
    }

    fn remove(&self) -> Option<Operation> {
        Some(child_detail_operation(
            LIBRARY,
            STORY,
            DetailOperation::Remove,
            OperationOptions::tagged(REQUIRE_ADMIN),
        ))
    }

    fn includes(&self) -> ParameterSet {
        parameter_refs(&[WITH_AUTHORS, WITH_LIBRARY, WITH_SERIES, WITH_VOLUMES])
    }

    fn matches(&self) -> ParameterSet {
        parameter_refs(&[MATCH_ACTIVE, MATCH_NAME])
    }

    fn schema(&self) -> Schema {
        model_schema(
            STORY,
            self.description(),
            &[
                active_property(STORY),
                copyright_property(STORY),
                library_id_property(STORY),
                name_property(STORY),
                notes_property(STORY),
                PropertySpec::new(
                    "ordinal",
                    SchemaType::Integer,
                    "Sort position of this Story within its Series",
                )
                .nullable(),
            ],
            &["libraryId", "name"],
        )
    }
}
