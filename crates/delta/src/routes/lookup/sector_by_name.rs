use newsdesk_database::{Database, MarketSymbol, SymbolKind};
use newsdesk_models::v0::LookupResponse;
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # Sector by Name
///
/// Find the index symbol of a sector by its exact name.
#[openapi(tag = "Lookup")]
#[get("/sector/by-name?<name>")]
pub async fn sector_by_name(
    db: &State<Database>,
    name: Option<String>,
) -> Result<Json<LookupResponse>> {
    let symbol = MarketSymbol::lookup(db, SymbolKind::Sector, name.as_deref()).await?;

    Ok(Json(LookupResponse {
        success: symbol.is_some(),
        data: symbol.map(|symbol| symbol.into_listing(SymbolKind::Sector)),
    }))
}
