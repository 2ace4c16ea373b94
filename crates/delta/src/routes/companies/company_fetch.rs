use newsdesk_database::{util::reference::Reference, Database};
use newsdesk_models::v0;
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # Fetch Company
///
/// Fetch a single company by its id.
#[openapi(tag = "Companies")]
#[get("/<id>")]
pub async fn fetch_company(db: &State<Database>, id: String) -> Result<Json<v0::Company>> {
    let company = db.fetch_company(&Reference::parse(&id, "id")?.id).await?;
    Ok(Json(company.into()))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use newsdesk_database::util::new_id;
    use newsdesk_models::v0;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn fetch_company() {
        let harness = TestHarness::new().await;
        let company = harness.new_company("Infosys Limited", "INFY", None).await;

        let response = harness
            .client
            .get(format!("/companies/{}", company.id.to_uppercase()))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let body: v0::Company = response.into_json().await.expect("company");
        assert_eq!(body.id, company.id);
        assert_eq!(body.symbol, "INFY");

        let response = harness
            .client
            .get(format!("/companies/{}", new_id()))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::NotFound);

        let body: serde_json::Value = response.into_json().await.expect("error");
        assert_eq!(body["type"], "UnknownCompany");

        let response = harness.client.get("/companies/nope").dispatch().await;
        assert_eq!(response.status(), Status::BadRequest);
    }
}
