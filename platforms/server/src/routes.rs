//! HTTP route handlers: the machine endpoint plus an index of demo machines.

use axum::Router;
use axum::extract::Path;
use axum::http::header::{HOST, LOCATION};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use serde::Serialize;
use tracing::debug;
use turl::{parse_tape, parse_transitions, Machine, TransitionTable, PROGRAMS};

/// Build the router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/{transitions}/{state}/{*tape}", get(step_machine))
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Serialize)]
struct ProgramEntry {
    name: &'static str,
    description: &'static str,
    path: String,
}

/// GET / - list the predefined demo machines and their start paths.
async fn index() -> Json<Vec<ProgramEntry>> {
    let programs = PROGRAMS
        .iter()
        .map(|p| ProgramEntry {
            name: p.name,
            description: p.description,
            path: p.path(),
        })
        .collect();

    Json(programs)
}

/// GET /{transitions}/{state}/{*tape} - advance the machine one step.
///
/// A running machine answers 302 with the successor configuration in the
/// `Location` header (and in the body, for clients that don't follow
/// redirects); a halted machine answers 200 with the final configuration.
async fn step_machine(
    Path((transitions, state, tape)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Response {
    let table: TransitionTable = parse_transitions(&transitions).into_iter().collect();
    let mut machine = Machine::new(table, state, parse_tape(&tape));

    machine.step();

    let body = machine.to_string();
    debug!(state = machine.state(), halted = machine.is_halted(), "stepped");

    if machine.is_halted() {
        return body.into_response();
    }

    let host = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    redirect(&next_location(host, &body), body)
}

/// Absolute URL of the successor configuration. The server only speaks plain
/// HTTP, so the scheme is fixed.
fn next_location(host: &str, serialized: &str) -> String {
    format!("http://{host}/{serialized}")
}

fn redirect(location: &str, body: String) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => {
            let mut response = (StatusCode::FOUND, body).into_response();
            response.headers_mut().insert(LOCATION, value);
            response
        }
        // Machine text that cannot ride in a header (non-ASCII states or
        // symbols) degrades to a terminal body.
        Err(_) => body.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn host_headers(host: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_str(host).unwrap());
        headers
    }

    #[tokio::test]
    async fn test_running_machine_redirects() {
        let path = Path((
            "a(aa)>a".to_string(),
            "a".to_string(),
            "a|a|a".to_string(),
        ));
        let response = step_machine(path, host_headers("example.com:8080")).await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "http://example.com:8080/a(aa)>a/a/aa|a|"
        );
        assert_eq!(body_string(response).await, "a(aa)>a/a/aa|a|");
    }

    #[tokio::test]
    async fn test_halted_machine_answers_terminal_body() {
        let path = Path((
            "a(bc)>c".to_string(),
            "a".to_string(),
            "|a|".to_string(),
        ));
        let response = step_machine(path, HeaderMap::new()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(LOCATION).is_none());
        assert_eq!(body_string(response).await, "a(bc)>c/a/|a|");
    }

    #[tokio::test]
    async fn test_missing_host_falls_back_to_localhost() {
        let path = Path((
            "a(aa)>a".to_string(),
            "a".to_string(),
            "|a|aa".to_string(),
        ));
        let response = step_machine(path, HeaderMap::new()).await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "http://localhost/a(aa)>a/a/a|a|a"
        );
    }

    #[tokio::test]
    async fn test_unparseable_table_halts() {
        let path = Path((
            "not-a-table".to_string(),
            "a".to_string(),
            "|a|".to_string(),
        ));
        let response = step_machine(path, HeaderMap::new()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "/a/|a|");
    }

    #[test]
    fn test_next_location() {
        assert_eq!(
            next_location("localhost:8080", "t/s/|a|"),
            "http://localhost:8080/t/s/|a|"
        );
    }
}
