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
    LIBRARY, MATCH_ACTIVE, MATCH_NAME, Model, REQUIRE_ADMIN, REQUIRE_REGULAR, VOLUME,
    WITH_AUTHORS, WITH_LIBRARY, WITH_STORIES,
};

/// A physical or electronic volume (normally a book) containing stories.
pub struct Volume;

impl Model for Volume {
    fn name(&self) -> &'static str {
        VOLUME
    }

    fn description(&self) -> &'static str {
        "Individual Volume (normally a book) containing one or more Stories"
    }

    fn parent(&self) -> Option<&'static str> {
        Some(LIBRARY)
    }

    fn all(&self) -> Option<Operation> {
        let includes = || self.includes();
        let matches = || self.matches();
        Some(child_collection_operation(
            LIBRARY,
            VOLUME,
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
            VOLUME,
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
            VOLUME,
            CollectionOperation::Insert,
            OperationOptions::tagged(REQUIRE_ADMIN),
        ))
    }

    fn update(&self) -> Option<Operation> {
        Some(child_detail_operation(
            LIBRARY,
            VOLUME,
            DetailOperation::Update,
            OperationOptions::tagged(REQUIRE_ADMIN),
        ))
    }

    fn remove(&self) -> Option<Operation> {
        Some(child_detail_operation(
            LIBRARY,
            VOLUME,
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
            VOLUME,
            self.description(),
            &[
                active_property(VOLUME),
                copyright_property(VOLUME),
                library_id_property(VOLUME),
                PropertySpec::new(
                    "location",
                    SchemaType::String,
                    "Physical or electronic location of this Volume",
                )
                .nullable(),
                name_property(VOLUME),
                notes_property(VOLUME),
            ],
            &["libraryId", "name"],
        )
    }
}
