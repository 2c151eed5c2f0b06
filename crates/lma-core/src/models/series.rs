use crate::descriptor::operation::Operation;
use crate::descriptor::parameter::ParameterSet;
use crate::descriptor::schema::Schema;
use crate::fragments::{
    active_property, copyright_property, library_id_property, model_schema, name_property,
    notes_property,
};
use crate::operations::{
    CollectionOperation, DetailOperation, OperationOptions, child_collection_operation,
    child_detail_operation, parameter_refs,
};

use super::{
    LIBRARY, MATCH_ACTIVE, MATCH_NAME, Model, REQUIRE_ADMIN, REQUIRE_REGULAR, SERIES,
    WITH_AUTHORS, WITH_LIBRARY, WITH_STORIES,
};

/// Collection of related stories, normally by the same authors.
pub struct Series;

impl Model for Series {
    fn name(&self) -> &'static str {
        SERIES
    }

    fn description(&self) -> &'static str {
        "Collection of related Stories, normally by the same Authors"
    }

    fn parent(&self) -> Option<&'static str> {
        Some(LIBRARY)
    }

    fn all(&self) -> Option<Operation> {
        let includes = || self.includes();
        let matches = || self.matches();
        Some(child_collection_operation(
            LIBRARY,
            SERIES,
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
            SERIES,
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
            SERIES,
            CollectionOperation::Insert,
            OperationOptions::tagged(REQUIRE_ADMIN),
        ))
    }

    fn update(&self) -> Option<Operation> {
        Some(child_detail_operation(
            LIBRARY,
            SERIES,
            DetailOperation::Update,
            OperationOptions::tagged(REQUIRE_ADMIN),
        ))
    }

    fn remove(&self) -> Option<Operation> {
        Some(child_detail_operation(
            LIBRARY,
            SERIES,
            DetailOperation::Remove,
            OperationOptions::tagged(REQUIRE_ADMIN),
        ))
    }

    fn includes(&self) -> ParameterSet {
        parameter_refs(&[WITH_AUTHORS, WITH_LIBRARY, WITH_STORIES])
    }

    fn matches(&self) -> ParameterSet {
        parameter_refs(&[MATCH_ACTIVE, MATCH_NAME])
    }

    fn schema(&self) -> Schema {
        model_schema(
            SERIES,
            self.description(),
            &[
                active_property(SERIES),
                copyright_property(SERIES),
                library_id_property(SERIES),
                name_property(SERIES),
                notes_property(SERIES),
            ],
            &["libraryId", "name"],
        )
    }
}
