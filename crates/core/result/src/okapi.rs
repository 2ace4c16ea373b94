use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3;
use rocket_okapi::response::OpenApiResponderInner;
use rocket_okapi::OpenApiError;

use crate::Error;

impl OpenApiResponderInner for Error {
    fn responses(gen: &mut OpenApiGenerator) -> std::result::Result<openapi3::Responses, OpenApiError> {
        let mut content = rocket_okapi::okapi::Map::new();

        // Registers the definition and hands back a reference to it
        let schema = gen.json_schema::<Error>();

        content.insert(
            "application/json".to_string(),
            openapi3::MediaType {
                schema: Some(schema),
                ..Default::default()
            },
        );

        Ok(openapi3::Responses {
            default: Some(openapi3::RefOr::Object(openapi3::Response {
                content,
                description: "An error occurred.".to_string(),
                ..Default::default()
            })),
            ..Default::default()
        })
    }
}
