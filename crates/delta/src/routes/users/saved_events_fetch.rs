use newsdesk_database::{Database, User};
use newsdesk_models::v0::{self, ListResponse};
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # Fetch Saved Events
///
/// Fetch the events a user has saved, in the order they were saved.
#[openapi(tag = "Saved Items")]
#[get("/<user_id>/saved-events")]
pub async fn fetch_saved_events(
    db: &State<Database>,
    user_id: String,
) -> Result<Json<ListResponse<v0::Event>>> {
    let events = User::fetch_saved_events(db, &user_id).await?;

    Ok(Json(
        events
            .into_iter()
            .map(Into::into)
            .collect::<Vec<v0::Event>>()
            .into(),
    ))
}
