//! Path items keyed by URL template.
//!
//! Templates follow one rule for every model:
//! `{prefix}/{collection_segment(model)}[/{id token}[/{collection_segment(child)}[/{child id token}]]]`

use crate::descriptor::operation::{Operation, PathItem};
use crate::descriptor::parameter::ParameterOrRef;
use crate::naming::{collection_segment, path_parameter_token};
use crate::operations::OperationKind;
use crate::refs::parameter_ref;

/// A path item together with the URL template it is mounted at.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry {
    pub template: String,
    pub item: PathItem,
}

/// Builds path entries under a common API prefix.
#[derive(Debug, Clone)]
pub struct PathAssembler {
    api_prefix: String,
}

impl PathAssembler {
    /// `api_prefix` is normalized to one leading slash and no trailing
    /// slash; an empty prefix mounts everything at the root.
    pub fn new(api_prefix: &str) -> Self {
        let trimmed = api_prefix.trim_matches('/');
        let api_prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        Self { api_prefix }
    }

    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }

    /// `{prefix}/{models}`
    pub fn collection_template(&self, model: &str) -> String {
        format!("{}/{}", self.api_prefix, collection_segment(model))
    }

    /// `{prefix}/{models}/{modelId}`
    pub fn detail_template(&self, model: &str, id_param: &str) -> String {
        format!(
            "{}/{}",
            self.collection_template(model),
            path_parameter_token(id_param)
        )
    }

    /// `{prefix}/{parents}/{parentId}/{children}`
    pub fn child_collection_template(&self, parent: &str, parent_id: &str, child: &str) -> String {
        format!(
            "{}/{}",
            self.detail_template(parent, parent_id),
            collection_segment(child)
        )
    }

    /// Collection of top-level `model` instances: list (GET) and insert (POST).
    pub fn parent_collection(
        &self,
        model: &str,
        list: Option<Operation>,
        insert: Option<Operation>,
    ) -> PathEntry {
        PathEntry {
            template: self.collection_template(model),
            item: path_item(
                Vec::new(),
                [(OperationKind::List, list), (OperationKind::Insert, insert)],
            ),
        }
    }

    /// One top-level `model` instance: find (GET), update (PUT) and remove
    /// (DELETE), addressed by the `id_param` path parameter.
    pub fn parent_detail(
        &self,
        model: &str,
        id_param: &str,
        find: Option<Operation>,
        update: Option<Operation>,
        remove: Option<Operation>,
    ) -> PathEntry {
        PathEntry {
            template: self.detail_template(model, id_param),
            item: path_item(
                vec![parameter_ref(id_param)],
                [
                    (OperationKind::Find, find),
                    (OperationKind::Update, update),
                    (OperationKind::Remove, remove),
                ],
            ),
        }
    }

    /// Children of type `child` belonging to one `parent` instance.
    pub fn child_collection(
        &self,
        parent: &str,
        parent_id: &str,
        child: &str,
        list: Option<Operation>,
        insert: Option<Operation>,
    ) -> PathEntry {
        PathEntry {
            template: self.child_collection_template(parent, parent_id, child),
            item: path_item(
                vec![parameter_ref(parent_id)],
                [(OperationKind::List, list), (OperationKind::Insert, insert)],
            ),
        }
    }

    /// One `child` of a `parent` instance.
    #[allow(clippy::too_many_arguments)]
    pub fn child_detail(
        &self,
        parent: &str,
        parent_id: &str,
        child: &str,
        child_id: &str,
        find: Option<Operation>,
        update: Option<Operation>,
        remove: Option<Operation>,
    ) -> PathEntry {
        PathEntry {
            template: format!(
                "{}/{}",
                self.child_collection_template(parent, parent_id, child),
                path_parameter_token(child_id)
            ),
            item: path_item(
                vec![parameter_ref(parent_id), parameter_ref(child_id)],
                [
                    (OperationKind::Find, find),
                    (OperationKind::Update, update),
                    (OperationKind::Remove, remove),
                ],
            ),
        }
    }
}

/// Path item with path-scoped `parameters`, each present operation mounted
/// under its kind's HTTP method.
fn path_item<const N: usize>(
    parameters: Vec<ParameterOrRef>,
    operations: [(OperationKind, Option<Operation>); N],
) -> PathItem {
    let mut item = PathItem {
        parameters,
        ..Default::default()
    };
    for (kind, operation) in operations {
        if let Some(slot) = item.operation_mut(kind.method()) {
            *slot = operation;
        }
    }
    item
}

impl Default for PathAssembler {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_API_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{
        OperationOptions, find_operation, insert_operation, list_operation, remove_operation,
        update_operation,
    };

    fn param_refs(item: &PathItem) -> Vec<&str> {
        item.parameters
            .iter()
            .map(|p| match p {
                ParameterOrRef::Ref { ref_path } => ref_path.as_str(),
                ParameterOrRef::Parameter(p) => p.name.as_str(),
            })
            .collect()
    }

    fn methods(item: &PathItem) -> Vec<&'static str> {
        item.operations().map(|(method, _)| method).collect()
    }

    #[test]
    fn test_parent_collection() {
        let paths = PathAssembler::default();
        let entry = paths.parent_collection(
            "Library",
            Some(list_operation("Library", OperationOptions::default())),
            Some(insert_operation("Library", OperationOptions::default())),
        );
        assert_eq!(entry.template, "/api/libraries");
        assert_eq!(methods(&entry.item), ["get", "post"]);
        assert!(entry.item.parameters.is_empty());
    }

    #[test]
    fn test_parent_detail() {
        let paths = PathAssembler::default();
        let opts = OperationOptions::default();
        let entry = paths.parent_detail(
            "Library",
            "libraryId",
            Some(find_operation("Library", opts)),
            Some(update_operation("Library", opts)),
            Some(remove_operation("Library", opts)),
        );
        assert_eq!(entry.template, "/api/libraries/{libraryId}");
        assert_eq!(methods(&entry.item), ["get", "put", "delete"]);
        assert_eq!(param_refs(&entry.item), ["#/components/parameters/libraryId"]);
    }

    #[test]
    fn test_missing_operations_omitted() {
        let paths = PathAssembler::default();
        let entry = paths.parent_detail("User", "userId", None, None, None);
        assert_eq!(entry.template, "/api/users/{userId}");
        assert!(methods(&entry.item).is_empty());
        let json = serde_json::to_value(&entry.item).unwrap();
        assert!(json.get("get").is_none());
    }

    #[test]
    fn test_child_paths() {
        let paths = PathAssembler::new("/api/");
        let collection = paths.child_collection("Library", "libraryId", "Story", None, None);
        assert_eq!(collection.template, "/api/libraries/{libraryId}/stories");
        assert_eq!(param_refs(&collection.item), ["#/components/parameters/libraryId"]);

        let detail = paths.child_detail(
            "Library", "libraryId", "Story", "storyId", None, None, None,
        );
        assert_eq!(detail.template, "/api/libraries/{libraryId}/stories/{storyId}");
        assert_eq!(
            param_refs(&detail.item),
            [
                "#/components/parameters/libraryId",
                "#/components/parameters/storyId"
            ]
        );
    }

    #[test]
    fn test_prefix_normalized() {
        assert_eq!(PathAssembler::new("api").api_prefix(), "/api");
        assert_eq!(PathAssembler::new("/api/v2/").api_prefix(), "/api/v2");
        assert_eq!(PathAssembler::new("/").api_prefix(), "");
        assert_eq!(
            PathAssembler::new("api").detail_template("Library", "libraryId"),
            "/api/libraries/{libraryId}"
        );
        assert_eq!(PathAssembler::new("").collection_template("User"), "/users");
    }

    #[test]
    fn test_operations_mounted_by_method() {
        let paths = PathAssembler::default();
        let remove = remove_operation("Library", OperationOptions::default());
        let entry = paths.parent_detail("Library", "libraryId", None, None, Some(remove.clone()));
        assert_eq!(entry.item.delete, Some(remove));
        assert!(entry.item.get.is_none() && entry.item.put.is_none());
    }

    #[test]
    fn test_custom_prefix() {
        let paths = PathAssembler::new("/v2");
        assert_eq!(paths.collection_template("Series"), "/v2/series");
        assert_eq!(paths.detail_template("Series", "seriesId"), "/v2/series/{seriesId}");
    }
}
