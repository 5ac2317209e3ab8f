//! HTTP surface: status codes, error bodies, pagination and links.

use actix_web::{http::StatusCode, test, web, App};
use interclass_games::api::{self, AppContext};
use interclass_games::config::PagingConfig;
use interclass_games::{seed_teams, SportRegistry, Store};
use serde_json::{json, Value};

fn context(paging: PagingConfig) -> web::Data<AppContext> {
    let mut store = Store::new();
    seed_teams(&mut store);
    web::Data::new(AppContext::new(store, SportRegistry::standard(), paging))
}

macro_rules! app {
    ($paging:expr) => {
        test::init_service(
            App::new()
                .app_data(context($paging))
                .app_data(api::json_config())
                .configure(api::configure),
        )
        .await
    };
}

macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let bytes = test::read_body(resp).await;
        let body: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }};
}

fn link<'a>(body: &'a Value, rel: &str) -> Option<&'a str> {
    body["links"]
        .as_array()?
        .iter()
        .find(|l| l["rel"] == rel)
        .and_then(|l| l["href"].as_str())
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = app!(PagingConfig::default());
    let (status, body) = send!(app, test::TestRequest::get().uri("/api/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[actix_web::test]
async fn edition_crud_with_links() {
    let app = app!(PagingConfig::default());
    let (status, created) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/editions")
            .set_json(json!({"opening_date": "2026-03-01", "closing_date": "2026-06-30"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "SCHEDULED");
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(link(&created, "self"), Some(format!("/api/editions/{id}").as_str()));

    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/editions/{id}"))
            .set_json(json!({"status": "ENDED"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");

    let (status, _) = send!(app, test::TestRequest::delete().uri(&format!("/api/editions/{id}")));
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = send!(app, test::TestRequest::get().uri(&format!("/api/editions/{id}")));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let app = app!(PagingConfig::default());
    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/editions")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"opening_date\": 3")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn listings_are_paged_with_neighbour_links() {
    let app = app!(PagingConfig {
        default_size: 2,
        max_size: 3,
    });
    let (status, first) = send!(app, test::TestRequest::get().uri("/api/teams"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["total_elements"], 5);
    assert_eq!(first["total_pages"], 3);
    assert_eq!(first["content"].as_array().unwrap().len(), 2);
    assert_eq!(link(&first, "next"), Some("/api/teams?page=1&size=2"));
    assert_eq!(link(&first, "prev"), None);

    let (_, last) = send!(app, test::TestRequest::get().uri("/api/teams?page=2"));
    assert_eq!(last["content"].as_array().unwrap().len(), 1);
    assert_eq!(link(&last, "next"), None);
    assert_eq!(link(&last, "prev"), Some("/api/teams?page=1&size=2"));

    let (_, capped) = send!(app, test::TestRequest::get().uri("/api/teams?size=50"));
    assert_eq!(capped["size"], 3);

    let (status, _) = send!(app, test::TestRequest::get().uri("/api/teams?size=0"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn page_number_past_the_end_is_an_empty_page() {
    let app = app!(PagingConfig::default());
    let uri = format!("/api/teams?page={}", usize::MAX);
    let (status, body) = send!(app, test::TestRequest::get().uri(&uri));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"].as_array().unwrap().len(), 0);
    assert_eq!(body["total_elements"], 5);
    assert_eq!(link(&body, "next"), None);
    assert_eq!(link(&body, "prev"), Some("/api/teams?page=0&size=20"));
}

#[actix_web::test]
async fn roster_import_over_http() {
    let app = app!(PagingConfig::default());
    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/participants/import")
            .set_payload("name,class_number,team\nAna,1-03,blue\nBruno,2-11,green\n")
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/participants/import")
            .set_payload("name,class_number,team\nCarla,1-04,red\n")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");

    let (_, listing) = send!(app, test::TestRequest::get().uri("/api/participants"));
    assert_eq!(listing["total_elements"], 2);
}

#[actix_web::test]
async fn tournament_flow_maps_rule_violations_to_status_codes() {
    let app = app!(PagingConfig::default());

    let (_, teams) = send!(app, test::TestRequest::get().uri("/api/teams"));
    let team_id = |name: &str| {
        teams["content"]
            .as_array()
            .unwrap()
            .iter()
            .find(|t| t["name"] == name)
            .unwrap()["id"]
            .clone()
    };
    let (blue, green) = (team_id("BLUE"), team_id("GREEN"));

    let (_, edition) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/editions")
            .set_json(json!({"opening_date": "2026-03-01", "closing_date": "2026-06-30"}))
    );
    let edition_id = edition["id"].clone();
    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/editions/{}", edition_id.as_str().unwrap()))
            .set_json(json!({"status": "IN_PROGRESS"}))
    );
    assert_eq!(status, StatusCode::OK);

    let new_event = json!({
        "edition_id": edition_id,
        "sport": "FUTSAL",
        "modality": "MIXED",
        "total_matches": 4
    });
    let (status, event) = send!(app, test::TestRequest::post().uri("/api/sport-events").set_json(&new_event));
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = send!(app, test::TestRequest::post().uri("/api/sport-events").set_json(&new_event));
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
    let event_id = event["id"].as_str().unwrap().to_string();

    let (_, ana) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/participants")
            .set_json(json!({"name": "Ana", "class_number": "1-01", "team_id": blue}))
    );
    let (_, bia) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/participants")
            .set_json(json!({"name": "Bia", "class_number": "2-01", "team_id": green}))
    );

    let new_match = |importance: &str| {
        json!({
            "sport_event_id": event_id,
            "sport": "FUTSAL",
            "modality": "MIXED",
            "team_a": blue,
            "team_b": green,
            "players": [ana["id"], bia["id"]],
            "importance": importance
        })
    };
    let (status, _) = send!(app, test::TestRequest::post().uri("/api/matches").set_json(new_match("NORMAL")));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, semi) = send!(app, test::TestRequest::post().uri("/api/matches").set_json(new_match("SEMIFINAL")));
    assert_eq!(status, StatusCode::CREATED);
    let match_id = semi["id"].as_str().unwrap().to_string();

    let (_, listing) = send!(app, test::TestRequest::get().uri(&format!("/api/sport-events/{event_id}/matches")));
    assert_eq!(listing["total_elements"], 1);

    let goal = json!({"match_id": match_id, "player_id": ana["id"]});
    let (status, body) = send!(app, test::TestRequest::post().uri("/api/goals").set_json(&goal));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "UNPROCESSABLE_ENTITY");

    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/sport-events/{event_id}"))
            .set_json(json!({"status": "IN_PROGRESS"}))
    );
    assert_eq!(status, StatusCode::OK);
    let (status, started) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/matches/{match_id}"))
            .set_json(json!({"status": "IN_PROGRESS"}))
    );
    assert_eq!(status, StatusCode::OK);
    assert!(started["started_at"].is_string());

    let (status, _) = send!(app, test::TestRequest::post().uri("/api/goals").set_json(&goal));
    assert_eq!(status, StatusCode::CREATED);
    let (_, game) = send!(app, test::TestRequest::get().uri(&format!("/api/matches/{match_id}")));
    assert_eq!(game["team_score_a"], 1);
    assert_eq!(game["team_score_b"], 0);

    let (_, goals) = send!(app, test::TestRequest::get().uri(&format!("/api/matches/{match_id}/goals")));
    assert_eq!(goals["total_elements"], 1);
}
