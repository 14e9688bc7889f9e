use std::sync::Arc;

use identity_screen::config::ProviderConfig;
use identity_screen::intake::{
    FormField, FormState, ProxyClient, ResultRow, ResultView, SubmissionOutcome,
};
use identity_screen::screening::{
    screening_router, FieldBreakdown, OfacApiClient, ScreeningProvider, ScreeningService,
};
use serde_json::json;

async fn spawn_proxy<P>(provider: P) -> String
where
    P: ScreeningProvider + 'static,
{
    let service = Arc::new(ScreeningService::new(Arc::new(provider)));
    let app = screening_router(service);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("proxy serves");
    });
    format!("http://{addr}")
}

fn john_smith_form() -> FormState {
    let mut form = FormState::new();
    form.set(FormField::FullName, "John Smith");
    form.set(FormField::BirthYear, "1980");
    form.set(FormField::BirthMonth, "1");
    form.set(FormField::BirthDay, "5");
    form.set(FormField::Country, "USA");
    form
}

async fn submit(form: &mut FormState, client: &ProxyClient) {
    let payload = form.begin_submit().expect("form is complete");
    let response = client.submit(&payload).await;
    form.record_response(response);
}

#[tokio::test]
async fn form_renders_hit_breakdown_from_live_proxy() {
    let mut provider_server = mockito::Server::new_async().await;
    let provider_mock = provider_server
        .mock("POST", "/v4/screen")
        .match_header("apiKey", "test-key")
        .match_body(mockito::Matcher::Regex(
            r#""dob":"1980-01-05""#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "results": [{
                    "matchCount": 2,
                    "matches": [
                        { "matchSummary": { "matchFields": [{ "fieldName": "DOB" }] } },
                        { "matchSummary": { "matchFields": [{ "fieldName": "Name" }] } }
                    ]
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider = OfacApiClient::new(&ProviderConfig {
        api_key: Some("test-key".to_string()),
        endpoint: format!("{}/v4/screen", provider_server.url()),
    });
    let base_url = spawn_proxy(provider).await;
    let client = ProxyClient::with_base_url(base_url);

    let mut form = john_smith_form();
    submit(&mut form, &client).await;

    provider_mock.assert_async().await;
    assert_eq!(
        form.outcome(),
        Some(&SubmissionOutcome::Hit(FieldBreakdown {
            name: true,
            dob: true,
            country: false,
        }))
    );
    assert_eq!(
        ResultView::from_outcome(form.outcome()),
        ResultView::Hit(vec![
            ResultRow {
                field: "name",
                glyph: "✅"
            },
            ResultRow {
                field: "dob",
                glyph: "✅"
            },
            ResultRow {
                field: "country",
                glyph: "❌"
            },
        ])
    );
}

#[tokio::test]
async fn form_shows_clear_when_provider_reports_no_matches() {
    let mut provider_server = mockito::Server::new_async().await;
    let _provider_mock = provider_server
        .mock("POST", "/v4/screen")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "results": [{ "matchCount": 0 }] }).to_string())
        .create_async()
        .await;

    let provider = OfacApiClient::new(&ProviderConfig {
        api_key: Some("test-key".to_string()),
        endpoint: format!("{}/v4/screen", provider_server.url()),
    });
    let client = ProxyClient::with_base_url(spawn_proxy(provider).await);

    let mut form = john_smith_form();
    submit(&mut form, &client).await;

    assert_eq!(form.outcome(), Some(&SubmissionOutcome::Clear));
    assert_eq!(
        ResultView::from_outcome(form.outcome()).lines(),
        vec!["Clear".to_string()]
    );
}

#[tokio::test]
async fn form_shows_failure_when_proxy_returns_500() {
    let mut proxy_server = mockito::Server::new_async().await;
    let proxy_mock = proxy_server
        .mock("POST", "/api/check")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(json!({ "message": "Internal server error" }).to_string())
        .create_async()
        .await;

    let client = ProxyClient::with_base_url(proxy_server.url());
    let mut form = john_smith_form();
    submit(&mut form, &client).await;

    proxy_mock.assert_async().await;
    assert_eq!(form.outcome(), Some(&SubmissionOutcome::Failed));
    let view = ResultView::from_outcome(form.outcome());
    assert_eq!(view, ResultView::Failure);
    assert!(!matches!(view, ResultView::Clear | ResultView::Hit(_)));
}

#[tokio::test]
async fn form_shows_failure_when_proxy_is_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);

    let client = ProxyClient::with_base_url(format!("http://{addr}"));
    let mut form = john_smith_form();
    submit(&mut form, &client).await;

    assert_eq!(form.outcome(), Some(&SubmissionOutcome::Failed));
}

#[tokio::test]
async fn proxy_without_api_key_answers_500_and_form_fails() {
    let provider = OfacApiClient::new(&ProviderConfig {
        api_key: None,
        endpoint: "http://127.0.0.1:9/v4/screen".to_string(),
    });
    let base_url = spawn_proxy(provider).await;

    let response = reqwest::Client::new()
        .post(format!("{base_url}/api/check"))
        .json(&json!({
            "fullName": "John Smith",
            "birthYear": "1980",
            "birthMonth": "1",
            "birthDay": "5",
            "country": "USA"
        }))
        .send()
        .await
        .expect("proxy reachable");
    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body, json!({ "message": "Internal server error" }));

    let client = ProxyClient::with_base_url(base_url);
    let mut form = john_smith_form();
    submit(&mut form, &client).await;
    assert_eq!(form.outcome(), Some(&SubmissionOutcome::Failed));
}
