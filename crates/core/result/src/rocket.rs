use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};

use crate::{Error, ErrorType};

/// HTTP response builder for Error enum
impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = match self.error_type {
            ErrorType::LabelMe => Status::InternalServerError,

            ErrorType::UnknownUser => Status::NotFound,

            ErrorType::UnknownNews => Status::NotFound,
            ErrorType::UnknownEvent => Status::NotFound,
            ErrorType::UnknownCompany => Status::NotFound,

            ErrorType::DatabaseError { .. } => Status::InternalServerError,
            ErrorType::InternalError => Status::InternalServerError,
            ErrorType::InvalidArgument { .. } => Status::BadRequest,
            ErrorType::NotFound => Status::NotFound,
            ErrorType::FailedValidation { .. } => Status::BadRequest,
        };

        if self.is_server_error() {
            log::error!("{} {} failed: {}", request.method(), request.uri(), self);
        }

        // Serialize the error data structure into JSON.
        let string = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;

        // Build and send the request.
        Response::build()
            .sized_body(string.len(), Cursor::new(string))
            .header(ContentType::new("application", "json"))
            .status(status)
            .ok()
    }
}
