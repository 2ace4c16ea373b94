use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod company_by_names;
mod company_fetch;
mod company_list;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        company_list::list_companies,
        company_by_names::companies_by_names,
        company_fetch::fetch_company,
    ]
}
