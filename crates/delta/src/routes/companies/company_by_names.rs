use newsdesk_database::{Company, Database};
use newsdesk_models::v0::{Listing, ListingsResponse};
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # Companies by Name
///
/// Fetch ticker symbols for a comma separated list of registered company names.
///
/// Companies without an exchange are reported on the NSE.
#[openapi(tag = "Companies")]
#[get("/by-names?<names>")]
pub async fn companies_by_names(
    db: &State<Database>,
    names: Option<String>,
) -> Result<Json<ListingsResponse>> {
    let companies = Company::fetch_by_names(db, names.as_deref()).await?;

    Ok(Json(ListingsResponse {
        success: true,
        data: companies.into_iter().map(Listing::from).collect(),
    }))
}
