use newsdesk_database::{Database, MarketSymbol, SymbolKind};
use newsdesk_models::v0::LookupResponse;
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # Commodity by Name
///
/// Find the symbol of a commodity by name, ignoring case.
#[openapi(tag = "Lookup")]
#[get("/commodity/by-name?<name>")]
pub async fn commodity_by_name(
    db: &State<Database>,
    name: Option<String>,
) -> Result<Json<LookupResponse>> {
    let symbol = MarketSymbol::lookup(db, SymbolKind::Commodity, name.as_deref()).await?;

    Ok(Json(LookupResponse {
        success: symbol.is_some(),
        data: symbol.map(|symbol| symbol.into_listing(SymbolKind::Commodity)),
    }))
}
