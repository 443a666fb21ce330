//! Single binary web server: pairs the next Swiss round from a replayed history.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    get,
    http::StatusCode,
    web::{self, Form},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use swiss_pairing_web::pair_request;

/// Largest accepted `POST /round` body. Full histories of large events run well past
/// actix's 16 KiB form default.
const ROUND_BODY_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Serialize)]
struct PingResponse {
    swisser: &'static str,
}

/// Form body of `POST /round`: `data` carries the request JSON.
#[derive(Serialize, Deserialize)]
struct RoundForm {
    #[serde(default)]
    data: String,
}

fn error_response(mut builder: actix_web::HttpResponseBuilder, message: &str) -> HttpResponse {
    builder.json(serde_json::json!({ "error": message }))
}

#[get("/")]
async fn root() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body("Swisser is running")
}

#[get("/ping")]
async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(PingResponse { swisser: "running" })
}

/// Replay the posted history and return the next round's pairings.
async fn round(form: Result<Form<RoundForm>, actix_web::Error>) -> HttpResponse {
    let data = match form {
        Ok(f) => f.into_inner().data,
        Err(e) => {
            log::warn!("Rejected round request body: {}", e);
            let status = match e.as_response_error().status_code() {
                StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::BAD_REQUEST,
            };
            return error_response(HttpResponse::build(status), &e.to_string());
        }
    };
    match pair_request(&data) {
        Ok(pairings) => {
            if pairings.iter().any(|p| p.unresolved) {
                log::warn!("Returning pairings with unresolved rematches");
            }
            HttpResponse::Ok().json(pairings)
        }
        Err(e) => {
            log::warn!("Rejected round request: {}", e);
            error_response(HttpResponse::BadRequest(), &e.to_string())
        }
    }
}

async fn method_not_allowed() -> HttpResponse {
    error_response(HttpResponse::MethodNotAllowed(), "Method not allowed")
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root).service(ping).service(
        web::resource("/round")
            .app_data(web::FormConfig::default().limit(ROUND_BODY_LIMIT))
            .route(web::post().to(round))
            .default_service(web::to(method_not_allowed)),
    );
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Running swisser on {}:{}", bind.0, bind.1);

    HttpServer::new(|| App::new().configure(configure))
        .bind(bind)?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use swiss_pairing_web::{GameRecord, PairingEntry, PairingRequest, RosterEntry};

    const EXAMPLE: &str = r#"{"rounds": 5,
        "players": [{"name": "player1", "elo": 2000},{"name": "player2",  "elo": 700},
            {"name": "player3", "elo": 1000}],
        "games": [[{"white": "player1", "black": "player2", "result": 1.0},
            {"white": "player3", "bye": true}]]}"#;

    #[actix_web::test]
    async fn root_and_ping_report_running() {
        let app = test::init_service(App::new().configure(configure)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "Swisser is running");

        let req = test::TestRequest::get().uri("/ping").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["swisser"], "running");
    }

    #[actix_web::test]
    async fn round_pairs_example_history() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/round")
            .set_form(RoundForm { data: EXAMPLE.to_string() })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let pairings: Vec<PairingEntry> = test::read_body_json(resp).await;
        assert_eq!(pairings.len(), 2);
        // player1 already had white, so the two 1-point players swap colors.
        assert_eq!(pairings[0].white, "player3");
        assert_eq!(pairings[0].black.as_deref(), Some("player1"));
        assert!(pairings[1].bye);
        assert_eq!(pairings[1].white, "player2");
        assert!(pairings[1].black.is_none());
    }

    #[actix_web::test]
    async fn round_rejects_missing_and_invalid_data() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::post().uri("/round").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/round")
            .set_form(RoundForm { data: "invalid json".to_string() })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    /// 40 players, 8 drawn rounds: a history far beyond 16 KiB once form-encoded.
    fn large_history() -> String {
        let names: Vec<String> = (0..40)
            .map(|i| format!("competitor-with-a-rather-long-name-{:02}", i))
            .collect();
        let games = (0..8)
            .map(|round| {
                (0..20)
                    .map(|k| {
                        let white = &names[2 * k];
                        let black = &names[(2 * k + 1 + 2 * round) % 40];
                        GameRecord::game(white.as_str(), black.as_str(), Some(0.5))
                    })
                    .collect()
            })
            .collect();
        let request = PairingRequest {
            rounds: 9,
            players: names
                .iter()
                .enumerate()
                .map(|(i, name)| RosterEntry {
                    name: name.clone(),
                    elo: 2400 - 10 * i as i32,
                })
                .collect(),
            games,
            ..PairingRequest::default()
        };
        serde_json::to_string(&request).unwrap()
    }

    #[actix_web::test]
    async fn round_accepts_large_history() {
        let data = large_history();
        assert!(data.len() > 16 * 1024);

        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/round")
            .set_form(RoundForm { data })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let pairings: Vec<PairingEntry> = test::read_body_json(resp).await;
        let seated: usize = pairings.iter().map(|p| if p.bye { 1 } else { 2 }).sum();
        assert_eq!(seated, 40);
    }

    #[actix_web::test]
    async fn round_reports_body_errors_instead_of_missing_data() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/round")
            .set_json(serde_json::json!({ "data": EXAMPLE }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let message = body["error"].as_str().unwrap_or_default();
        assert!(!message.is_empty());
        assert_ne!(message, "Missing 'data' parameter");
    }

    #[actix_web::test]
    async fn round_rejects_unknown_player() {
        let app = test::init_service(App::new().configure(configure)).await;
        let data = r#"{"players": [{"name": "a", "elo": 1500}],
            "games": [[{"white": "ghost", "bye": true}]]}"#;
        let req = test::TestRequest::post()
            .uri("/round")
            .set_form(RoundForm { data: data.to_string() })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unknown player: ghost");
    }

    #[actix_web::test]
    async fn round_only_accepts_post() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/round").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
