use newsdesk_database::{util::reference::Reference, Database};
use newsdesk_models::v0::EventResponse;
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # Fetch Event
///
/// Fetch a single event by its id.
#[openapi(tag = "Events")]
#[get("/<id>")]
pub async fn fetch_event(db: &State<Database>, id: String) -> Result<Json<EventResponse>> {
    let event = Reference::parse(&id, "id")?.as_event(db).await?;

    Ok(Json(EventResponse {
        success: true,
        event: event.into(),
    }))
}
