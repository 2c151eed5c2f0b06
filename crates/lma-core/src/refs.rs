//! `$ref` descriptors pointing into `components`.

use crate::descriptor::parameter::ParameterOrRef;
use crate::descriptor::request_body::RequestBodyOrRef;
use crate::descriptor::response::ResponseOrRef;
use crate::descriptor::schema::SchemaOrRef;
use crate::naming::{ComponentSection, reference_path};

pub fn parameter_ref(name: &str) -> ParameterOrRef {
    ParameterOrRef::Ref {
        ref_path: reference_path(ComponentSection::Parameters, name),
    }
}

pub fn request_body_ref(name: &str) -> RequestBodyOrRef {
    RequestBodyOrRef::Ref {
        ref_path: reference_path(ComponentSection::RequestBodies, name),
    }
}

pub fn response_ref(name: &str) -> ResponseOrRef {
    ResponseOrRef::Ref {
        ref_path: reference_path(ComponentSection::Responses, name),
    }
}

pub fn schema_ref(name: &str) -> SchemaOrRef {
    SchemaOrRef::Ref {
        ref_path: reference_path(ComponentSection::Schemas, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_ref_json() {
        let json = serde_json::to_string(&schema_ref("Library")).unwrap();
        insta::assert_snapshot!(json, @r##"{"$ref":"#/components/schemas/Library"}"##);
    }

    #[test]
    fn test_ref_sections() {
        match parameter_ref("limit") {
            ParameterOrRef::Ref { ref_path } => {
                assert_eq!(ref_path, "#/components/parameters/limit")
            }
            _ => panic!("expected reference"),
        }
        match response_ref("403") {
            ResponseOrRef::Ref { ref_path } => assert_eq!(ref_path, "#/components/responses/403"),
            _ => panic!("expected reference"),
        }
        match request_body_ref("Library") {
            RequestBodyOrRef::Ref { ref_path } => {
                assert_eq!(ref_path, "#/components/requestBodies/Library")
            }
            _ => panic!("expected reference"),
        }
    }
}
