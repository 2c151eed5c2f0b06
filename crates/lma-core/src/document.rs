//! Assembles the complete document from the model registry and renders it
//! once per OpenAPI version.

use std::sync::{LazyLock, OnceLock};

use log::{debug, info};

use crate::config::DocumentConfig;
use crate::descriptor::components::Components;
use crate::descriptor::document::{Contact, Info, License, OpenApiDocument, Tag};
use crate::descriptor::schema::SchemaType;
use crate::dialect::{self, SpecVersion};
use crate::error::DocumentError;
use crate::fragments::{
    error_response, error_schema, model_list_response, model_request_body, model_response,
    path_parameter, query_parameter,
};
use crate::models::{
    REQUIRE_ADMIN, REQUIRE_ANY, REQUIRE_REGULAR, REQUIRE_SUPERUSER, query_parameters, registry,
};
use crate::naming::{collection_id_param, collection_name};
use crate::operations::{
    BAD_REQUEST, FORBIDDEN, LIMIT, NOT_FOUND, NOT_UNIQUE, OFFSET, SERVER_ERROR, UNAUTHORIZED,
};
use crate::paths::PathAssembler;
use crate::validate;

pub const TITLE: &str = "Library Management Application";
pub const API_VERSION: &str = "1.0";

const ERROR_RESPONSES: [(&str, &str); 6] = [
    (BAD_REQUEST, "Error in request properties"),
    (UNAUTHORIZED, "Authentication is required"),
    (FORBIDDEN, "Requested operation is not allowed"),
    (NOT_FOUND, "Requested item is not found"),
    (NOT_UNIQUE, "Request object would violate uniqueness constraints"),
    (SERVER_ERROR, "General server error occurred"),
];

const TAGS: [(&str, &str); 4] = [
    (REQUIRE_ADMIN, "Requires 'admin' permission on the associated Library"),
    (REQUIRE_ANY, "Requires logged in user"),
    (REQUIRE_REGULAR, "Requires 'regular' permission on the associated Library"),
    (REQUIRE_SUPERUSER, "Requires 'superuser' permission on the overall application"),
];

/// Builds [`OpenApiDocument`]s from every registered model.
pub struct DocumentAssembler<'a> {
    config: &'a DocumentConfig,
    paths: PathAssembler,
}

impl<'a> DocumentAssembler<'a> {
    /// Fails if `config.error_schema` is empty or would overwrite a model's
    /// singular or list schema.
    pub fn new(config: &'a DocumentConfig) -> Result<Self, DocumentError> {
        check_error_schema(&config.error_schema)?;
        Ok(Self {
            config,
            paths: PathAssembler::new(&config.api_prefix),
        })
    }

    /// Build the document in the dialect of `version`.
    pub fn build(&self, version: SpecVersion) -> OpenApiDocument {
        let mut document = OpenApiDocument {
            openapi: version.openapi().to_string(),
            info: info(version),
            servers: self.config.servers.clone(),
            paths: Default::default(),
            components: self.components(),
            tags: TAGS
                .iter()
                .map(|(name, description)| Tag {
                    name: name.to_string(),
                    description: Some(description.to_string()),
                })
                .collect(),
        };

        for model in registry() {
            let entries = model.paths(&self.paths);
            debug!(
                "{}: {} path items under {}",
                model.name(),
                entries.len(),
                self.paths.api_prefix()
            );
            for entry in entries {
                document.paths.insert(entry.template, entry.item);
            }
        }

        dialect::apply(&mut document, version);
        document
    }

    fn components(&self) -> Components {
        let mut components = Components::default();
        let error_schema_name = &self.config.error_schema;

        for model in registry() {
            let id = collection_id_param(model.name());
            let description = format!("ID of the specified {}", model.name());
            components
                .parameters
                .insert(id.clone(), path_parameter(&id, &description).into());
        }
        for param in query_parameters() {
            components.parameters.insert(param.name.clone(), param.into());
        }
        components.parameters.insert(
            LIMIT.to_string(),
            query_parameter(
                LIMIT,
                "Maximum number of rows to return [25]",
                SchemaType::Integer,
                false,
            )
            .into(),
        );
        components.parameters.insert(
            OFFSET.to_string(),
            query_parameter(
                OFFSET,
                "Zero-relative offset to first returned row [0]",
                SchemaType::Integer,
                false,
            )
            .into(),
        );

        for model in registry() {
            components.request_bodies.insert(
                model.name().to_string(),
                model_request_body(model.name(), model.description()).into(),
            );
        }

        for model in registry() {
            let name = model.name();
            components
                .responses
                .insert(name.to_string(), model_response(name).into());
            components
                .responses
                .insert(collection_name(name), model_list_response(name).into());
        }
        for (status, description) in ERROR_RESPONSES {
            components.responses.insert(
                status.to_string(),
                error_response(description, error_schema_name).into(),
            );
        }

        components
            .schemas
            .insert(error_schema_name.clone(), error_schema().into());
        for model in registry() {
            let name = model.name();
            components
                .schemas
                .insert(name.to_string(), model.schema().into());
            components
                .schemas
                .insert(collection_name(name), model.schemas().into());
            debug!("{name}: components registered");
        }

        components
    }
}

fn check_error_schema(name: &str) -> Result<(), DocumentError> {
    let collides = registry()
        .iter()
        .any(|model| model.name() == name || collection_name(model.name()) == name);
    if name.trim().is_empty() || collides {
        return Err(DocumentError::InvalidErrorSchema(name.to_string()));
    }
    Ok(())
}

fn info(version: SpecVersion) -> Info {
    let license = match version {
        SpecVersion::V3_0 => License {
            name: "Apache 2.0".to_string(),
            identifier: None,
            url: Some("https://www.apache.org/licenses/LICENSE-2.0.html".to_string()),
        },
        SpecVersion::V3_1 => License {
            name: "Apache 2.0".to_string(),
            identifier: Some("Apache-2.0".to_string()),
            url: None,
        },
    };
    Info {
        title: TITLE.to_string(),
        description: Some("Manage contents and authors of one or more libraries".to_string()),
        version: API_VERSION.to_string(),
        contact: Some(Contact {
            name: Some("Library Management Team".to_string()),
            url: None,
            email: Some("fred@example.com".to_string()),
        }),
        license: Some(license),
    }
}

/// Renders documents on first request and hands out the cached JSON after.
pub struct Generator {
    config: DocumentConfig,
    v3_0: OnceLock<String>,
    v3_1: OnceLock<String>,
}

impl Generator {
    pub fn new(config: DocumentConfig) -> Self {
        Self {
            config,
            v3_0: OnceLock::new(),
            v3_1: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// A freshly built, unrendered document.
    pub fn document(&self, version: SpecVersion) -> Result<OpenApiDocument, DocumentError> {
        Ok(DocumentAssembler::new(&self.config)?.build(version))
    }

    /// Pretty-printed JSON of the `version` document.
    ///
    /// The first successful call renders and caches; every later call returns
    /// the same string. A document with dangling references is never cached.
    pub fn generate(&self, version: SpecVersion) -> Result<&str, DocumentError> {
        let cell = match version {
            SpecVersion::V3_0 => &self.v3_0,
            SpecVersion::V3_1 => &self.v3_1,
        };
        if let Some(json) = cell.get() {
            return Ok(json);
        }

        let document = self.document(version)?;
        let references = validate::check_document(&document)?.into_result()?;
        let json = serde_json::to_string_pretty(&document)?;
        info!(
            "rendered OpenAPI {} document ({} paths, {references} references, {} bytes)",
            version.openapi(),
            document.paths.len(),
            json.len()
        );
        Ok(cell.get_or_init(|| json))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DocumentConfig::default())
    }
}

static DEFAULT_GENERATOR: LazyLock<Generator> = LazyLock::new(Generator::default);

/// JSON of the `version` document built with the default configuration.
pub fn generate(version: SpecVersion) -> Result<&'static str, DocumentError> {
    DEFAULT_GENERATOR.generate(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::parameter::ParameterOrRef;

    #[test]
    fn test_component_order() {
        let document = Generator::default().document(SpecVersion::V3_1).unwrap();
        let schemas: Vec<&String> = document.components.schemas.keys().collect();
        assert_eq!(
            schemas,
            [
                "Error", "Author", "Authors", "Library", "Libraries", "Series", "SeriesList",
                "Story", "Stories", "User", "Users", "Volume", "Volumes",
            ]
        );
        let errors: Vec<&String> = document.components.responses.keys().skip(12).collect();
        assert_eq!(errors, ["400", "401", "403", "404", "409", "500"]);
    }

    #[test]
    fn test_id_parameters() {
        let document = Generator::default().document(SpecVersion::V3_0).unwrap();
        match &document.components.parameters["seriesId"] {
            ParameterOrRef::Parameter(p) => {
                assert_eq!(p.description.as_deref(), Some("ID of the specified Series"));
                assert!(p.required);
            }
            _ => panic!("expected inline parameter"),
        }
        assert!(document.components.parameters.contains_key("limit"));
        assert!(document.components.parameters.contains_key("offset"));
    }

    #[test]
    fn test_license_per_version() {
        let v30 = info(SpecVersion::V3_0).license.unwrap();
        assert!(v30.identifier.is_none() && v30.url.is_some());
        let v31 = info(SpecVersion::V3_1).license.unwrap();
        assert_eq!(v31.identifier.as_deref(), Some("Apache-2.0"));
        assert!(v31.url.is_none());
    }

    #[test]
    fn test_generate_caches() {
        let generator = Generator::default();
        let first = generator.generate(SpecVersion::V3_1).unwrap();
        let second = generator.generate(SpecVersion::V3_1).unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_custom_error_schema() {
        let config = DocumentConfig {
            error_schema: "GenericError".to_string(),
            ..DocumentConfig::default()
        };
        let document = Generator::new(config).document(SpecVersion::V3_1).unwrap();
        assert!(document.components.schemas.contains_key("GenericError"));
        assert!(!document.components.schemas.contains_key("Error"));
        assert!(validate::check_document(&document).unwrap().is_ok());
    }

    #[test]
    fn test_error_schema_collisions_rejected() {
        for name in ["Library", "Libraries", "SeriesList", "Series", "", " "] {
            let config = DocumentConfig {
                error_schema: name.to_string(),
                ..DocumentConfig::default()
            };
            assert!(
                matches!(
                    DocumentAssembler::new(&config),
                    Err(DocumentError::InvalidErrorSchema(ref n)) if n == name
                ),
                "{name:?} should be rejected"
            );
            let generator = Generator::new(config);
            assert!(generator.generate(SpecVersion::V3_0).is_err());
        }
    }
}
