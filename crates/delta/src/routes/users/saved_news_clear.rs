use newsdesk_database::{Database, SavedList, User};
use newsdesk_models::v0::SuccessResponse;
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # Clear Saved News
///
/// Remove every saved news article for a user.
#[openapi(tag = "Saved Items")]
#[delete("/<user_id>/saved-news")]
pub async fn clear_saved_news(
    db: &State<Database>,
    user_id: String,
) -> Result<Json<SuccessResponse>> {
    User::clear_saved(db, &user_id, SavedList::News).await?;
    Ok(Json(SuccessResponse::ok()))
}
