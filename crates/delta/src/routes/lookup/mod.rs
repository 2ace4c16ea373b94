use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod commodity_by_name;
mod sector_by_name;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        sector_by_name::sector_by_name,
        commodity_by_name::commodity_by_name,
    ]
}
