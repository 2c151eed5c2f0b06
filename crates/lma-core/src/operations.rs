//! The five canonical CRUD operations of a model, at the top level or scoped
//! under a parent model.
//!
//! # Default responses
//!
//! When [`OperationOptions::responses`] is `None` an operation gets
//! [`default_responses`]: the success code (`201` for insert, `200`
//! otherwise) referencing the model response (the list response for
//! list operations), plus `403` and `404` error responses for every
//! operation except list.

use crate::descriptor::operation::Operation;
use crate::descriptor::parameter::{ParameterOrRef, ParameterSet};
use crate::descriptor::response::Responses;
use crate::naming::{collection_name, plural_form};
use crate::refs::{parameter_ref, request_body_ref, response_ref};

pub const LIMIT: &str = "limit";
pub const OFFSET: &str = "offset";

pub const OK: &str = "200";
pub const CREATED: &str = "201";
pub const BAD_REQUEST: &str = "400";
pub const UNAUTHORIZED: &str = "401";
pub const FORBIDDEN: &str = "403";
pub const NOT_FOUND: &str = "404";
pub const NOT_UNIQUE: &str = "409";
pub const SERVER_ERROR: &str = "500";

/// Closure producing the responses of an operation.
pub type ResponsesFn<'a> = &'a dyn Fn() -> Responses;
/// Closure producing a set of named parameters.
pub type ParametersFn<'a> = &'a dyn Fn() -> ParameterSet;

/// Optional pieces of an operation. Everything left `None` falls back to the
/// defaults described at the module level.
#[derive(Clone, Copy, Default)]
pub struct OperationOptions<'a> {
    /// Access-control tag, emitted as the operation's only tag.
    pub tag: Option<&'a str>,
    pub responses: Option<ResponsesFn<'a>>,
    /// Query parameters selecting related objects to include.
    pub includes: Option<ParametersFn<'a>>,
    /// Query parameters restricting which instances match.
    pub matches: Option<ParametersFn<'a>>,
}

impl<'a> OperationOptions<'a> {
    pub fn tagged(tag: &'a str) -> Self {
        Self {
            tag: Some(tag),
            ..Default::default()
        }
    }
}

/// The five operation shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    List,
    Find,
    Insert,
    Update,
    Remove,
}

impl OperationKind {
    /// HTTP method (lowercase) the operation is mounted under.
    pub fn method(self) -> &'static str {
        match self {
            OperationKind::List | OperationKind::Find => "get",
            OperationKind::Insert => "post",
            OperationKind::Update => "put",
            OperationKind::Remove => "delete",
        }
    }
}

/// Operations on the collection of children of a parent instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionOperation {
    List,
    Insert,
}

/// Operations on one child of a parent instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOperation {
    Find,
    Update,
    Remove,
}

impl From<CollectionOperation> for OperationKind {
    fn from(value: CollectionOperation) -> Self {
        match value {
            CollectionOperation::List => OperationKind::List,
            CollectionOperation::Insert => OperationKind::Insert,
        }
    }
}

impl From<DetailOperation> for OperationKind {
    fn from(value: DetailOperation) -> Self {
        match value {
            DetailOperation::Find => OperationKind::Find,
            DetailOperation::Update => OperationKind::Update,
            DetailOperation::Remove => OperationKind::Remove,
        }
    }
}

/// `limit` and `offset`. Their defaults (25 and 0) are documented in the
/// parameter descriptions only.
pub fn pagination_parameters() -> ParameterSet {
    let mut params = ParameterSet::new();
    params.insert(LIMIT.to_string(), parameter_ref(LIMIT));
    params.insert(OFFSET.to_string(), parameter_ref(OFFSET));
    params
}

/// A parameter set referencing each of `names` in `components.parameters`.
pub fn parameter_refs(names: &[&str]) -> ParameterSet {
    names
        .iter()
        .map(|name| (name.to_string(), parameter_ref(name)))
        .collect()
}

/// Responses used when an operation is built without a responses override.
pub fn default_responses(kind: OperationKind, model: &str) -> Responses {
    let mut responses = Responses::new();
    match kind {
        OperationKind::List => {
            responses.insert(OK.to_string(), response_ref(&collection_name(model)));
            return responses;
        }
        OperationKind::Insert => {
            responses.insert(CREATED.to_string(), response_ref(model));
        }
        OperationKind::Find | OperationKind::Update | OperationKind::Remove => {
            responses.insert(OK.to_string(), response_ref(model));
        }
    }
    responses.insert(FORBIDDEN.to_string(), response_ref(FORBIDDEN));
    responses.insert(NOT_FOUND.to_string(), response_ref(NOT_FOUND));
    responses
}

/// GET returning all matching instances of `model`.
pub fn list_operation(model: &str, opts: OperationOptions<'_>) -> Operation {
    build(OperationKind::List, model, None, opts)
}

/// GET returning the instance of `model` addressed by the path id.
pub fn find_operation(model: &str, opts: OperationOptions<'_>) -> Operation {
    build(OperationKind::Find, model, None, opts)
}

/// POST creating an instance of `model`.
pub fn insert_operation(model: &str, opts: OperationOptions<'_>) -> Operation {
    build(OperationKind::Insert, model, None, opts)
}

/// PUT updating the instance of `model` addressed by the path id.
pub fn update_operation(model: &str, opts: OperationOptions<'_>) -> Operation {
    build(OperationKind::Update, model, None, opts)
}

/// DELETE removing the instance of `model` addressed by the path id.
pub fn remove_operation(model: &str, opts: OperationOptions<'_>) -> Operation {
    build(OperationKind::Remove, model, None, opts)
}

/// List or insert children of type `child` under one `parent` instance.
pub fn child_collection_operation(
    parent: &str,
    child: &str,
    op: CollectionOperation,
    opts: OperationOptions<'_>,
) -> Operation {
    build(op.into(), child, Some(parent), opts)
}

/// Find, update or remove one `child` of a `parent` instance.
pub fn child_detail_operation(
    parent: &str,
    child: &str,
    op: DetailOperation,
    opts: OperationOptions<'_>,
) -> Operation {
    build(op.into(), child, Some(parent), opts)
}

fn build(
    kind: OperationKind,
    model: &str,
    parent: Option<&str>,
    opts: OperationOptions<'_>,
) -> Operation {
    let (description, summary) = texts(kind, model, parent);

    let mut params = ParameterSet::new();
    if matches!(kind, OperationKind::List | OperationKind::Find) {
        if let Some(includes) = opts.includes {
            params.extend(includes());
        }
    }
    if kind == OperationKind::List {
        if let Some(matches) = opts.matches {
            params.extend(matches());
        }
        params.extend(pagination_parameters());
    }

    let request_body = matches!(kind, OperationKind::Insert | OperationKind::Update)
        .then(|| request_body_ref(model));

    let responses = match opts.responses {
        Some(responses) => responses(),
        None => default_responses(kind, model),
    };

    Operation {
        summary: Some(summary),
        description: Some(description),
        tags: opts.tag.map(|t| vec![t.to_string()]).unwrap_or_default(),
        parameters: params.into_values().collect::<Vec<ParameterOrRef>>(),
        request_body,
        responses,
    }
}

fn texts(kind: OperationKind, model: &str, parent: Option<&str>) -> (String, String) {
    let plural = plural_form(model);
    let scope = parent
        .map(|p| format!(" of this {p}"))
        .unwrap_or_default();
    match kind {
        OperationKind::List => match parent {
            Some(_) => (
                format!("Return matching {plural}{scope}"),
                format!("The requested {plural}"),
            ),
            None => (
                format!("Return all matching {plural}"),
                format!("The requested {plural}"),
            ),
        },
        OperationKind::Find => (
            format!("Return the specified {model}{scope}"),
            format!("The specified {model}"),
        ),
        OperationKind::Insert => (
            format!("Create and return the specified {model}{scope}"),
            format!("The created {model}"),
        ),
        OperationKind::Update => (
            format!("Update and return the specified {model}{scope}"),
            format!("The updated {model}"),
        ),
        OperationKind::Remove => (
            format!("Remove and return the specified {model}{scope}"),
            format!("The removed {model}"),
        ),
    }
}
