use newsdesk_result::{create_error, Result};
use rocket::{catch, Catcher, Request};

#[catch(400)]
pub fn bad_request() -> Result<()> {
    Err(create_error!(InvalidArgument {
        field: "body".to_string()
    }))
}

#[catch(404)]
pub fn not_found() -> Result<()> {
    Err(create_error!(NotFound))
}

#[catch(422)]
pub fn unprocessable_entity(req: &Request) -> Result<()> {
    Err(create_error!(FailedValidation {
        error: format!("Could not parse request body for {}.", req.uri().path())
    }))
}

pub fn all_catchers() -> Vec<Catcher> {
    catchers![bad_request, not_found, unprocessable_entity]
}
