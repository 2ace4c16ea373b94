use newsdesk_database::{util::reference::Reference, Database, SavedList, User};
use newsdesk_models::v0::{DataToggleSavedEvent, ToggleSavedResponse};
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # Toggle Saved Event
///
/// Save an event, or remove it if it is already saved.
#[openapi(tag = "Saved Items")]
#[post("/saved-events", data = "<data>")]
pub async fn toggle_saved_event(
    db: &State<Database>,
    data: Json<DataToggleSavedEvent>,
) -> Result<Json<ToggleSavedResponse>> {
    let data = data.into_inner();
    let user = Reference::required(data.user_id.as_deref(), "userId")?;
    let event = Reference::required(data.event_id.as_deref(), "eventId")?;

    let saved = User::toggle_saved(db, &user.id, &event.id, SavedList::Events).await?;
    Ok(Json(ToggleSavedResponse {
        success: true,
        saved,
    }))
}
