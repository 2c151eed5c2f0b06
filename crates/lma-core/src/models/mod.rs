//! Domain models of the library management API and the registry the
//! document assembler iterates over.

mod author;
mod library;
mod series;
mod story;
mod user;
mod volume;

pub use author::Author;
pub use library::Library;
pub use series::Series;
pub use story::Story;
pub use user::User;
pub use volume::Volume;

use crate::descriptor::operation::Operation;
use crate::descriptor::parameter::{Parameter, ParameterSet};
use crate::descriptor::schema::{Schema, SchemaType};
use crate::fragments::{model_list_schema, query_parameter};
use crate::naming::collection_id_param;
use crate::paths::{PathAssembler, PathEntry};

// Model names

pub const AUTHOR: &str = "Author";
pub const LIBRARY: &str = "Library";
pub const SERIES: &str = "Series";
pub const STORY: &str = "Story";
pub const USER: &str = "User";
pub const VOLUME: &str = "Volume";

// Include parameters

pub const WITH_AUTHORS: &str = "withAuthors";
pub const WITH_LIBRARY: &str = "withLibrary";
pub const WITH_SERIES: &str = "withSeries";
pub const WITH_STORIES: &str = "withStories";
pub const WITH_VOLUMES: &str = "withVolumes";

// Match parameters

pub const MATCH_ACTIVE: &str = "active";
pub const MATCH_NAME: &str = "name";
pub const MATCH_SCOPE: &str = "scope";
pub const MATCH_USERNAME: &str = "username";

// Access-control tags

pub const REQUIRE_ADMIN: &str = "requireAdmin";
pub const REQUIRE_ANY: &str = "requireAny";
pub const REQUIRE_REGULAR: &str = "requireRegular";
pub const REQUIRE_SUPERUSER: &str = "requireSuperuser";

/// Everything the document needs to know about one domain model.
///
/// Operations a model doesn't support return `None` and are left out of its
/// path items.
pub trait Model: Send + Sync {
    /// Singular, capitalized name, e.g. `Library`.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Model whose instances own instances of this one. Child models are
    /// addressed under their parent's detail path.
    fn parent(&self) -> Option<&'static str> {
        None
    }

    fn all(&self) -> Option<Operation>;
    fn find(&self) -> Option<Operation>;
    fn insert(&self) -> Option<Operation>;
    fn update(&self) -> Option<Operation>;
    fn remove(&self) -> Option<Operation>;

    /// Query parameters selecting related objects to include in responses.
    fn includes(&self) -> ParameterSet {
        ParameterSet::new()
    }

    /// Query parameters restricting which instances are returned.
    fn matches(&self) -> ParameterSet {
        ParameterSet::new()
    }

    /// Collection and detail path items of this model.
    fn paths(&self, paths: &PathAssembler) -> Vec<PathEntry> {
        let name = self.name();
        let id = collection_id_param(name);
        match self.parent() {
            None => vec![
                paths.parent_collection(name, self.all(), self.insert()),
                paths.parent_detail(name, &id, self.find(), self.update(), self.remove()),
            ],
            Some(parent) => {
                let parent_id = collection_id_param(parent);
                vec![
                    paths.child_collection(parent, &parent_id, name, self.all(), self.insert()),
                    paths.child_detail(
                        parent,
                        &parent_id,
                        name,
                        &id,
                        self.find(),
                        self.update(),
                        self.remove(),
                    ),
                ]
            }
        }
    }

    /// Schema of one instance.
    fn schema(&self) -> Schema;

    /// Schema of a list of instances.
    fn schemas(&self) -> Schema {
        model_list_schema(self.name())
    }
}

static REGISTRY: [&dyn Model; 6] = [&Author, &Library, &Series, &Story, &User, &Volume];

/// Every model in the document, in document order.
pub fn registry() -> &'static [&'static dyn Model] {
    &REGISTRY
}

/// Definitions of every include and match query parameter the models use.
pub fn query_parameters() -> Vec<Parameter> {
    vec![
        query_parameter(WITH_AUTHORS, "Include associated Authors", SchemaType::Boolean, true),
        query_parameter(WITH_LIBRARY, "Include parent Library", SchemaType::Boolean, true),
        query_parameter(WITH_SERIES, "Include associated Series", SchemaType::Boolean, true),
        query_parameter(WITH_STORIES, "Include associated Stories", SchemaType::Boolean, true),
        query_parameter(WITH_VOLUMES, "Include associated Volumes", SchemaType::Boolean, true),
        query_parameter(MATCH_ACTIVE, "Select only active objects", SchemaType::Boolean, true),
        query_parameter(
            MATCH_NAME,
            "Select objects with name matching wildcard",
            SchemaType::String,
            false,
        ),
        query_parameter(
            MATCH_SCOPE,
            "Select objects with matching scope",
            SchemaType::String,
            false,
        ),
        query_parameter(
            MATCH_USERNAME,
            "Select objects with matching username",
            SchemaType::String,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let names: Vec<&str> = registry().iter().map(|m| m.name()).collect();
        assert_eq!(names, [AUTHOR, LIBRARY, SERIES, STORY, USER, VOLUME]);
    }

    #[test]
    fn test_children_belong_to_library() {
        for model in registry() {
            match model.name() {
                LIBRARY | USER => assert_eq!(model.parent(), None),
                _ => assert_eq!(model.parent(), Some(LIBRARY)),
            }
        }
    }

    #[test]
    fn test_query_parameter_names_unique() {
        let params = query_parameters();
        let mut names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), params.len());
    }
}
