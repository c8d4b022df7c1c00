use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use match_odds_api::api::server::build_router;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

fn match_body() -> Value {
    json!({
        "description": "OSFP-PAO",
        "matchDate": "2024-03-31",
        "matchTime": "12:00",
        "teamA": "OSFP",
        "teamB": "PAO",
        "sport": "FOOTBALL"
    })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

#[sqlx::test]
async fn health_check(pool: PgPool) {
    let app = build_router(pool);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[sqlx::test]
async fn create_match_then_odds_then_read_back(pool: PgPool) {
    let app = build_router(pool);

    let (status, created) = send(&app, "POST", "/api/matches", Some(match_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["description"], "OSFP-PAO");
    assert_eq!(created["matchOdds"], json!([]));

    let (status, odds) = send(
        &app,
        "POST",
        "/api/match-odds",
        Some(json!({"matchId": 1, "specifier": "1", "odd": 1.5})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(odds["id"], 1);
    assert_eq!(odds["matchId"], 1);

    let (status, fetched) = send(&app, "GET", "/api/matches/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["matchDate"], "2024-03-31");
    assert_eq!(fetched["matchTime"], "12:00");
    assert_eq!(fetched["sport"], "FOOTBALL");
    assert_eq!(fetched["matchOdds"], json!([{"id": 1, "matchId": 1, "specifier": "1", "odd": 1.5}]));
}

#[sqlx::test]
async fn create_odds_for_missing_match_is_404(pool: PgPool) {
    let app = build_router(pool);

    let (status, body) = send(
        &app,
        "POST",
        "/api/match-odds",
        Some(json!({"matchId": 999, "specifier": "X", "odd": 2.0})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "Match not found with id: 999");
}

#[sqlx::test]
async fn delete_match_cascades_to_odds(pool: PgPool) {
    let app = build_router(pool);

    send(&app, "POST", "/api/matches", Some(match_body())).await;
    send(
        &app,
        "POST",
        "/api/match-odds",
        Some(json!({"matchId": 1, "specifier": "1", "odd": 1.5})),
    )
    .await;

    let (status, body) = send(&app, "DELETE", "/api/matches/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "GET", "/api/matches/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, odds) = send(&app, "GET", "/api/match-odds/match/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(odds, json!([]));
}

#[sqlx::test]
async fn create_match_with_blank_description_is_400(pool: PgPool) {
    let app = build_router(pool);

    let mut body = match_body();
    body["description"] = json!("");

    let (status, response) = send(&app, "POST", "/api/matches", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "validation_error");
    assert!(response["message"]
        .as_str()
        .unwrap()
        .contains("Description is required"));
}

#[sqlx::test]
async fn create_match_with_unknown_sport_is_400(pool: PgPool) {
    let app = build_router(pool);

    let mut body = match_body();
    body["sport"] = json!("CRICKET");

    let (status, response) = send(&app, "POST", "/api/matches", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["message"]
        .as_str()
        .unwrap()
        .contains("Sport must be one of FOOTBALL, BASKETBALL"));
}

#[sqlx::test]
async fn create_odds_with_non_positive_odd_is_400(pool: PgPool) {
    let app = build_router(pool);

    send(&app, "POST", "/api/matches", Some(match_body())).await;

    let (status, response) = send(
        &app,
        "POST",
        "/api/match-odds",
        Some(json!({"matchId": 1, "specifier": "X", "odd": 0.0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "validation_error");
}

#[sqlx::test]
async fn update_match_fully_replaces_fields(pool: PgPool) {
    let app = build_router(pool);

    send(&app, "POST", "/api/matches", Some(match_body())).await;

    let replacement = json!({
        "description": "AEK-PAOK",
        "matchDate": "2024-04-07",
        "matchTime": "18:30",
        "teamA": "AEK",
        "teamB": "PAOK",
        "sport": "BASKETBALL"
    });

    let (status, updated) = send(&app, "PUT", "/api/matches/1", Some(replacement.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["description"], "AEK-PAOK");
    assert_eq!(updated["sport"], "BASKETBALL");

    let (_, fetched) = send(&app, "GET", "/api/matches/1", None).await;
    for field in ["description", "matchDate", "matchTime", "teamA", "teamB", "sport"] {
        assert_eq!(fetched[field], replacement[field], "field {}", field);
    }
}

#[sqlx::test]
async fn update_missing_match_is_404(pool: PgPool) {
    let app = build_router(pool);

    let (status, _) = send(&app, "PUT", "/api/matches/999", Some(match_body())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn odds_lifecycle_over_http(pool: PgPool) {
    let app = build_router(pool);

    send(&app, "POST", "/api/matches", Some(match_body())).await;
    send(
        &app,
        "POST",
        "/api/match-odds",
        Some(json!({"matchId": 1, "specifier": "1", "odd": 1.5})),
    )
    .await;

    let (status, fetched) = send(&app, "GET", "/api/match-odds/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["specifier"], "1");

    // matchId in the update body is ignored; the linkage is immutable
    let (status, updated) = send(
        &app,
        "PUT",
        "/api/match-odds/1",
        Some(json!({"matchId": 555, "specifier": "X", "odd": 3.25})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["matchId"], 1);
    assert_eq!(updated["specifier"], "X");
    assert_eq!(updated["odd"], 3.25);

    let (status, body) = send(&app, "DELETE", "/api/match-odds/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "GET", "/api/match-odds/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "MatchOdds not found with id: 1");
}

#[sqlx::test]
async fn list_matches_returns_all_with_odds(pool: PgPool) {
    let app = build_router(pool);

    send(&app, "POST", "/api/matches", Some(match_body())).await;
    let mut second = match_body();
    second["description"] = json!("AEK-PAOK");
    send(&app, "POST", "/api/matches", Some(second)).await;
    send(
        &app,
        "POST",
        "/api/match-odds",
        Some(json!({"matchId": 2, "specifier": "2", "odd": 2.8})),
    )
    .await;

    let (status, listed) = send(&app, "GET", "/api/matches", None).await;

    assert_eq!(status, StatusCode::OK);
    let matches = listed.as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["matchOdds"], json!([]));
    assert_eq!(matches[1]["matchOdds"][0]["specifier"], "2");
}
