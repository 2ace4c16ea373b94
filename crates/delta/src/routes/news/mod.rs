use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod news_company;
mod news_feed;
mod news_fetch;
mod news_list;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        news_list::list_news,
        news_company::company_news,
        news_feed::news_feed,
        news_fetch::fetch_news,
    ]
}
