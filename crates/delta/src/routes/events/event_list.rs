use newsdesk_database::Database;
use newsdesk_models::v0::EventsResponse;
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # List Events
///
/// Fetch every event, soonest first.
#[openapi(tag = "Events")]
#[get("/")]
pub async fn list_events(db: &State<Database>) -> Result<Json<EventsResponse>> {
    let events = db.fetch_events().await?;

    Ok(Json(EventsResponse {
        success: true,
        events: events.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use newsdesk_models::v0;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn list_events() {
        let harness = TestHarness::new().await;
        harness.new_event("Later", 20).await;
        harness.new_event("Sooner", 2).await;

        let response = harness.client.get("/events").dispatch().await;
        assert_eq!(response.status(), Status::Ok);

        let body: v0::EventsResponse = response.into_json().await.expect("events");
        let titles: Vec<&str> = body.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Sooner", "Later"]);
    }
}
