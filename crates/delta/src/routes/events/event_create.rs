use newsdesk_database::{Database, Event};
use newsdesk_models::v0::{CreateEventResponse, DataCreateEvent};
use newsdesk_result::{create_error, Result};
use rocket::{response::status::Created, serde::json::Json, State};
use validator::Validate;

/// # Create Event
///
/// Schedule a new event.
#[openapi(tag = "Events")]
#[post("/", data = "<data>")]
pub async fn create_event(
    db: &State<Database>,
    data: Json<DataCreateEvent>,
) -> Result<Created<Json<CreateEventResponse>>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let event = Event::create(db, data).await?;

    Ok(
        Created::new(format!("/events/{}", event.id)).body(Json(CreateEventResponse {
            success: true,
            message: "Event created successfully".to_string(),
            event: event.into(),
        })),
    )
}
