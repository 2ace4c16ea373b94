use newsdesk_database::Database;
use newsdesk_models::v0;
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # List Companies
///
/// Fetch every listed company, ordered by name.
#[openapi(tag = "Companies")]
#[get("/")]
pub async fn list_companies(db: &State<Database>) -> Result<Json<Vec<v0::Company>>> {
    let companies = db.fetch_companies().await?;
    Ok(Json(companies.into_iter().map(Into::into).collect()))
}
