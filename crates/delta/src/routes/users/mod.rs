use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod saved_events_clear;
mod saved_events_fetch;
mod saved_events_toggle;
mod saved_news_clear;
mod saved_news_fetch;
mod saved_news_toggle;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        // Saved News
        saved_news_toggle::toggle_saved_news,
        saved_news_fetch::fetch_saved_news,
        saved_news_clear::clear_saved_news,
        // Saved Events
        saved_events_toggle::toggle_saved_event,
        saved_events_fetch::fetch_saved_events,
        saved_events_clear::clear_saved_events,
    ]
}
