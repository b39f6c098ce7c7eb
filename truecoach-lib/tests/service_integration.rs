//! Integration tests for the API service against a wiremock server

use core::time::Duration;
use serde_json::json;
use std::sync::Mutex;
use truecoach_lib::api::{HttpTransport, Service};
use truecoach_lib::metrics::{Diagnostics, SilentDiagnostics, Unit};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "secret-token";

fn service(server: &MockServer) -> Service<HttpTransport> {
    let transport = HttpTransport::new(TOKEN, server.uri(), Duration::from_secs(5), "Trainer").expect("valid transport settings");
    Service::with_transport(transport)
}

async fn mount_json(server: &MockServer, route: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[derive(Debug, Default)]
struct RecordingDiagnostics {
    units: Mutex<Vec<(u64, String)>>,
}

impl Diagnostics for RecordingDiagnostics {
    fn unsupported_unit(&self, assessment_id: u64, unit: &str) {
        self.units.lock().unwrap().push((assessment_id, unit.to_string()));
    }
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_requests_carry_credentials_and_role() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/clients"))
        .and(header("authorization", "Bearer secret-token"))
        .and(header("role", "Trainer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "clients": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let clients = service(&server).clients().await.unwrap();
    assert!(clients.is_empty());
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_clients_are_hydrated() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/clients",
        200,
        json!({
            "page": 1,
            "total_pages": 3,
            "per_page": 2,
            "total_count": 6,
            "images": [
                { "id": 5, "url": "https://cdn.example.com/5.png", "mime_type": "image/png" },
                { "id": 5, "url": "https://cdn.example.com/duplicate.png" }
            ],
            "users": [
                { "id": 1, "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com", "image_id": 5 },
                { "id": 4, "first_name": "Grace", "image_id": 77 }
            ],
            "clients": [
                { "id": 2, "user_id": 1, "due": "2021-05-03", "is_delinquent": null },
                { "id": 3, "user_id": 99 },
                { "id": 6, "user_id": 4 }
            ]
        }),
    )
    .await;

    let clients = service(&server).clients().await.unwrap();
    assert_eq!(clients.len(), 3);

    let ada = clients[0].user.as_ref().expect("client 2 has a user");
    assert_eq!(ada.full_name(), "Ada Lovelace");
    let image = ada.image.as_ref().expect("user 1 has an image");
    assert_eq!(image.id, 5);
    assert_eq!(image.url.as_deref(), Some("https://cdn.example.com/5.png"));
    assert!(!clients[0].delinquent);

    assert!(clients[1].user.is_none());

    let grace = clients[2].user.as_ref().expect("client 6 has a user");
    assert!(grace.image.is_none());
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_metrics_are_resolved() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/clients/2/assessment_groups",
        200,
        json!({
            "assessment_groups": [
                { "id": 1, "name": "Body Composition" },
                { "id": 2, "name": "Habits" }
            ],
            "assessments": [
                { "id": 10, "assessment_group_id": 1, "name": "Weight (lbs)", "units": "pounds" },
                { "id": 11, "assessment_group_id": 1, "name": "Grip", "units": "newtons" },
                { "id": 20, "assessment_group_id": 2, "name": "Slept well", "units": "yes/no" }
            ],
            "assessment_items": [
                { "id": 100, "assessment_id": 10, "value": "\"182.5\"", "date": "2021-05-01" },
                { "id": 101, "assessment_id": 10, "value": " 181 ", "date": "2021-05-08T07:30:00Z" },
                { "id": 110, "assessment_id": 11, "value": "40", "date": "2021-05-01" },
                { "id": 200, "assessment_id": 20, "value": "yes", "date": "2021-05-01" },
                { "id": 201, "assessment_id": 20, "value": "Yes", "date": "2021-05-02" }
            ]
        }),
    )
    .await;

    let diagnostics = RecordingDiagnostics::default();
    let metrics = service(&server).metrics(2, &diagnostics).await.unwrap();

    assert_eq!(metrics.len(), 2);
    assert_eq!(metrics.sample_count(), 5);

    let (body, found) = metrics.group("body composition");
    assert!(found);

    let weight = body.find_assessment("weight").expect("weight resolves by fuzzy name");
    assert_eq!(weight.unit(), &Unit::Pounds);
    let values: Vec<f64> = weight.samples().iter().map(|s| s.value).collect();
    assert_eq!(values, vec![182.5, 181.0]);
    assert_eq!(weight.latest_sample().unwrap().id, 101);

    let grip = body.find_assessment("Grip").unwrap();
    assert!(grip.samples()[0].value.abs() < f64::EPSILON);

    let (habits, _) = metrics.group("habits");
    let slept: Vec<f64> = habits.find_assessment("slept well").unwrap().samples().iter().map(|s| s.value).collect();
    assert_eq!(slept, vec![1.0, 0.0]);

    assert_eq!(*diagnostics.units.lock().unwrap(), vec![(11, "newtons".to_string())]);
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_metrics_missing_group_returns_partial_result() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/clients/2/assessment_groups",
        200,
        json!({
            "assessment_groups": [{ "id": 1, "name": "Body" }],
            "assessments": [{ "id": 10, "assessment_group_id": 999, "name": "Weight", "units": "kilograms" }],
            "assessment_items": []
        }),
    )
    .await;

    let partial = service(&server).metrics(2, &SilentDiagnostics).await.unwrap_err();

    assert!(partial.to_string().contains("999"));
    assert_eq!(partial.metrics().len(), 1);
    assert!(partial.metrics().get(1).unwrap().assessments().is_empty());
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_metrics_unparsable_value() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/clients/2/assessment_groups",
        200,
        json!({
            "assessment_groups": [{ "id": 1, "name": "Body" }],
            "assessments": [{ "id": 10, "assessment_group_id": 1, "name": "Weight", "units": "kilograms" }],
            "assessment_items": [{ "id": 100, "assessment_id": 10, "value": "eighty", "date": "2021-05-01" }]
        }),
    )
    .await;

    let partial = service(&server).metrics(2, &SilentDiagnostics).await.unwrap_err();
    assert!(partial.to_string().contains("eighty"));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_error_envelope() {
    let server = MockServer::start().await;
    mount_json(&server, "/clients", 401, json!({ "error": "unauthorized" })).await;

    let err = service(&server).clients().await.unwrap_err();
    assert!(format!("{err:#}").contains("unauthorized"));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_server_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/clients/2/nutrition_plan"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
        .mount(&server)
        .await;

    let err = format!("{:#}", service(&server).client_nutrition_plan(2).await.unwrap_err());
    assert!(err.contains("response 500"));
    assert!(err.contains("internal failure"));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_unknown_route_is_an_error() {
    let server = MockServer::start().await;

    let err = format!("{:#}", service(&server).client_daily_nutrition_logs(2).await.unwrap_err());
    assert!(err.contains("response 404"));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_nutrition_endpoints() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/clients/8/nutrition_plan",
        200,
        json!({
            "nutrition_plan": {
                "threshold": 10,
                "description": "Maintenance",
                "wed_carbs": 220,
                "wed_fat": 65,
                "wed_protein": 170,
                "wed_fiber": 30,
                "wed_calories": 2150
            }
        }),
    )
    .await;
    mount_json(
        &server,
        "/clients/8/daily_nutrition_logs",
        200,
        json!({
            "daily_nutrition_logs": [
                {
                    "id": 31,
                    "client_id": 8,
                    "due": "2021-05-05",
                    "goal_calories": 2150,
                    "actual_calories": 2000,
                    "is_editable": false,
                    "notes": null,
                    "attachments": []
                }
            ]
        }),
    )
    .await;

    let service = service(&server);

    let plan = service.client_nutrition_plan(8).await.unwrap();
    assert_eq!(plan.description, "Maintenance");
    let wednesday = plan.targets(chrono::Weekday::Wed);
    assert_eq!(wednesday.calories, 2150);
    assert_eq!(wednesday.protein, 170);

    let logs = service.client_daily_nutrition_logs(8).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].client_id, 8);
    assert_eq!(logs[0].due, chrono::NaiveDate::from_ymd_opt(2021, 5, 5));
    assert!(logs[0].notes.is_empty());
}
