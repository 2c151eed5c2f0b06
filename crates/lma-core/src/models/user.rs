use crate::descriptor::operation::Operation;
use crate::descriptor::parameter::ParameterSet;
use crate::descriptor::schema::{Schema, SchemaType};
use crate::fragments::{PropertySpec, active_property, model_schema, name_property};
use crate::operations::{
    OperationOptions, find_operation, insert_operation, list_operation, parameter_refs,
    remove_operation, update_operation,
};

use super::{MATCH_ACTIVE, MATCH_USERNAME, Model, REQUIRE_SUPERUSER, USER};

/// A user allowed to log in. Users live outside any library, and every
/// operation on them needs superuser permission.
pub struct User;

impl Model for User {
    fn name(&self) -> &'static str {
        USER
    }

    fn description(&self) -> &'static str {
        "Authorized User of this application"
    }

    fn all(&self) -> Option<Operation> {
        let matches = || self.matches();
        Some(list_operation(
            USER,
            OperationOptions {
                tag: Some(REQUIRE_SUPERUSER),
                matches: Some(&matches),
                ..Default::default()
            },
        ))
    }

    fn find(&self) -> Option<Operation> {
        Some(find_operation(USER, OperationOptions::tagged(REQUIRE_SUPERUSER)))
    }

    fn insert(&self) -> Option<Operation> {
        Some(insert_operation(USER, OperationOptions::tagged(REQUIRE_SUPERUSER)))
    }

    fn update(&self) -> Option<Operation> {
        Some(update_operation(USER, OperationOptions::tagged(REQUIRE_SUPERUSER)))
    }

    fn remove(&self) -> Option<Operation> {
        Some(remove_operation(USER, OperationOptions::tagged(REQUIRE_SUPERUSER)))
    }

    fn matches(&self) -> ParameterSet {
        parameter_refs(&[MATCH_ACTIVE, MATCH_USERNAME])
    }

    fn schema(&self) -> Schema {
        model_schema(
            USER,
            self.description(),
            &[
                active_property(USER),
                name_property(USER),
                PropertySpec::new(
                    "password",
                    SchemaType::String,
                    "Login password for this User (never returned)",
                )
                .write_only(),
                PropertySpec::new(
                    "scope",
                    SchemaType::String,
                    "Space-separated permission scopes granted to this User",
                ),
                PropertySpec::new("username", SchemaType::String, "Login username for this User"),
            ],
            &["username", "scope"],
        )
    }
}
