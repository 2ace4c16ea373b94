use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod event_create;
mod event_fetch;
mod event_list;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        event_list::list_events,
        event_fetch::fetch_event,
        event_create::create_event,
    ]
}
