use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::screening::domain::{CheckRequest, ScreeningRequest};
use crate::screening::provider::{
    MatchField, MatchSummary, ProviderCaseResult, ProviderError, ProviderMatch, ProviderResponse,
    ScreeningProvider,
};
use crate::screening::{screening_router, ScreeningService};

/// Provider double recording every outbound request.
#[derive(Debug, Default)]
pub(super) struct StubProvider {
    response: Option<ProviderResponse>,
    calls: AtomicUsize,
    requests: Mutex<Vec<ScreeningRequest>>,
}

impl StubProvider {
    pub(super) fn responding(response: ProviderResponse) -> Self {
        Self {
            response: Some(response),
            ..Self::default()
        }
    }

    pub(super) fn unavailable() -> Self {
        Self::default()
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) fn requests(&self) -> Vec<ScreeningRequest> {
        self.requests.lock().expect("request mutex").clone()
    }
}

impl ScreeningProvider for StubProvider {
    async fn screen(&self, request: &ScreeningRequest) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("request mutex")
            .push(request.clone());
        self.response.clone().ok_or(ProviderError::MissingApiKey)
    }
}

pub(super) fn john_smith() -> CheckRequest {
    CheckRequest {
        full_name: Some("John Smith".to_string()),
        birth_day: Some("5".to_string()),
        birth_month: Some("1".to_string()),
        birth_year: Some("1980".to_string()),
        country: Some("USA".to_string()),
    }
}

/// One case result whose matches carry the given field names.
pub(super) fn response_with_matches(matches: &[&[&str]]) -> ProviderResponse {
    ProviderResponse {
        results: vec![ProviderCaseResult {
            match_count: matches.len() as u64,
            matches: Some(
                matches
                    .iter()
                    .map(|fields| ProviderMatch {
                        match_summary: Some(MatchSummary {
                            match_fields: Some(
                                fields
                                    .iter()
                                    .map(|name| MatchField {
                                        field_name: Some(name.to_string()),
                                    })
                                    .collect(),
                            ),
                        }),
                    })
                    .collect(),
            ),
        }],
    }
}

pub(super) fn clear_response() -> ProviderResponse {
    ProviderResponse {
        results: vec![ProviderCaseResult {
            match_count: 0,
            matches: Some(Vec::new()),
        }],
    }
}

pub(super) fn build_service(
    provider: StubProvider,
) -> (Arc<ScreeningService<StubProvider>>, Arc<StubProvider>) {
    let provider = Arc::new(provider);
    let service = Arc::new(ScreeningService::new(provider.clone()));
    (service, provider)
}

pub(super) fn router_with_provider(provider: StubProvider) -> (axum::Router, Arc<StubProvider>) {
    let (service, provider) = build_service(provider);
    (screening_router(service), provider)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
