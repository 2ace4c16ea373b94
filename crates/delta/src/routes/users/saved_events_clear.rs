use newsdesk_database::{Database, SavedList, User};
use newsdesk_models::v0::SuccessResponse;
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # Clear Saved Events
///
/// Remove every saved event for a user.
#[openapi(tag = "Saved Items")]
#[delete("/<user_id>/saved-events")]
pub async fn clear_saved_events(
    db: &State<Database>,
    user_id: String,
) -> Result<Json<SuccessResponse>> {
    User::clear_saved(db, &user_id, SavedList::Events).await?;
    Ok(Json(SuccessResponse::ok()))
}
