//! Integration tests for API endpoints.
//!
//! Every test builds the real router over a fresh in-memory SQLite database
//! and a throwaway upload directory.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use scoutme::domain::calculate_age;
use scoutme::services::{AuthService, ServiceContainer, Services};
use scoutme::{create_router, AppState, Config, Database};

const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";
const BOUNDARY: &str = "scoutmeboundary";

// =============================================================================
// Harness
// =============================================================================

struct TestApp {
    router: Router,
    db: DatabaseConnection,
    services: Services,
    upload_folder: PathBuf,
}

impl TestApp {
    async fn new() -> Self {
        let database = Database::connect("sqlite::memory:")
            .await
            .expect("in-memory database");
        let upload_folder = std::env::temp_dir().join(format!("scoutme-test-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&upload_folder).expect("upload folder");

        let config = Config::new("sqlite::memory:", TEST_SECRET, upload_folder.clone())
            .expect("test config");
        let db = database.get_connection();
        let services = Services::from_connection(db.clone(), config.clone());
        let state = AppState::from_config(Arc::new(database), config);

        Self {
            router: create_router(state),
            db,
            services,
            upload_folder,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request("GET", uri, token, Body::empty(), None))
            .await
    }

    async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(request(
            "POST",
            uri,
            token,
            Body::from(body.to_string()),
            Some("application/json"),
        ))
        .await
    }

    async fn post_multipart(
        &self,
        uri: &str,
        token: &str,
        parts: &[Part<'_>],
    ) -> (StatusCode, Value) {
        let content_type = format!("multipart/form-data; boundary={}", BOUNDARY);
        self.send(request(
            "POST",
            uri,
            Some(token),
            Body::from(multipart_body(parts)),
            Some(&content_type),
        ))
        .await
    }

    async fn register_player(&self, email: &str, profile: Value) -> Uuid {
        let mut body = json!({
            "email": email,
            "password": "jugador123",
            "confirm_password": "jugador123",
        });
        merge(&mut body, profile);

        let (status, response) = self.post_json("/register/jugador", None, body).await;
        assert_eq!(status, StatusCode::CREATED, "{}", response);
        user_id(&response["data"])
    }

    async fn register_scout(&self, email: &str) -> Uuid {
        let body = json!({
            "email": email,
            "password": "ojeador123",
            "confirm_password": "ojeador123",
            "nombre": "Carlos",
            "apellido": "Rodríguez",
            "empresa": "Club Atlético Talentos",
        });

        let (status, response) = self.post_json("/register/ojeador", None, body).await;
        assert_eq!(status, StatusCode::CREATED, "{}", response);
        user_id(&response["data"])
    }

    async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .post_json(
                "/login",
                None,
                json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        body["access_token"]
            .as_str()
            .expect("access token")
            .to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.upload_folder);
    }
}

fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Body,
    content_type: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(body).expect("request")
}

fn merge(target: &mut Value, extra: Value) {
    if let (Some(target), Value::Object(extra)) = (target.as_object_mut(), extra) {
        target.extend(extra);
    }
}

fn user_id(user: &Value) -> Uuid {
    user["id"].as_str().expect("user id").parse().expect("uuid")
}

fn striker() -> Value {
    json!({
        "nombre": "Lucas",
        "apellido": "Martínez",
        "fecha_nacimiento": "2000-05-15",
        "pais": "AR",
        "ciudad": "Buenos Aires",
        "deporte": "fútbol",
        "posicion": "delantero",
        "nivel": "amateur",
    })
}

fn point_guard() -> Value {
    json!({
        "nombre": "Sofía",
        "apellido": "Gómez",
        "fecha_nacimiento": "2008-01-10",
        "pais": "CL",
        "ciudad": "Santiago",
        "deporte": "baloncesto",
        "posicion": "base",
        "nivel": "profesional",
    })
}

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a [u8]),
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(filename, contents) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"archivo\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        filename
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(contents);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn apellidos(results: &Value) -> Vec<String> {
    results["jugadores"]
        .as_array()
        .expect("jugadores")
        .iter()
        .map(|p| p["apellido"].as_str().unwrap_or_default().to_string())
        .collect()
}

// =============================================================================
// Public endpoints
// =============================================================================

#[tokio::test]
async fn test_root_welcomes_visitors() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Bienvenido a ScoutMe");
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/perfil/jugador", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_root_redirects_signed_in_user() {
    let app = TestApp::new().await;
    app.register_scout("ojeador@scoutme.com").await;
    let token = app.login("ojeador@scoutme.com", "ojeador123").await;

    let response = app
        .router
        .clone()
        .oneshot(request("GET", "/", Some(&token), Body::empty(), None))
        .await
        .expect("response");

    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers()[header::LOCATION],
        "/perfil/ojeador"
    );
}

// =============================================================================
// Registration and login
// =============================================================================

#[tokio::test]
async fn test_register_player_derives_age() {
    let app = TestApp::new().await;
    app.register_player("jugador@scoutme.com", striker()).await;
    let token = app.login("jugador@scoutme.com", "jugador123").await;

    let (status, body) = app.get("/perfil/jugador", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let birth = NaiveDate::from_ymd_opt(2000, 5, 15).expect("date");
    let expected = calculate_age(birth, Utc::now().date_naive());
    assert_eq!(body["player"]["edad"], expected);
    assert_eq!(body["player"]["posicion"], "delantero");
    assert_eq!(body["videos"], json!([]));
}

#[tokio::test]
async fn test_register_duplicate_email_is_field_error() {
    let app = TestApp::new().await;
    app.register_player("jugador@scoutme.com", striker()).await;

    let mut body = json!({
        "email": "jugador@scoutme.com",
        "password": "otra123",
        "confirm_password": "otra123",
    });
    merge(&mut body, point_guard());
    let (status, response) = app.post_json("/register/jugador", None, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"]["fields"]["email"].is_array());
}

#[tokio::test]
async fn test_register_rejects_position_of_other_sport() {
    let app = TestApp::new().await;
    let mut profile = striker();
    profile["posicion"] = json!("base");

    let mut body = json!({
        "email": "jugador@scoutme.com",
        "password": "jugador123",
        "confirm_password": "jugador123",
    });
    merge(&mut body, profile);
    let (status, response) = app.post_json("/register/jugador", None, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"]["fields"]["posicion"].is_array());
}

#[tokio::test]
async fn test_failed_profile_insert_rolls_back_user() {
    let app = TestApp::new().await;
    app.db
        .execute_unprepared("DROP TABLE players")
        .await
        .expect("drop players");

    let mut body = json!({
        "email": "jugador@scoutme.com",
        "password": "jugador123",
        "confirm_password": "jugador123",
    });
    merge(&mut body, striker());
    let (status, response) = app.post_json("/register/jugador", None, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"]["code"], "REGISTRATION_FAILED");
    let row = app
        .db
        .query_one(Statement::from_string(
            app.db.get_database_backend(),
            "SELECT COUNT(*) AS n FROM users",
        ))
        .await
        .expect("count users")
        .expect("row");
    let users: i64 = row.try_get("", "n").expect("n");
    assert_eq!(users, 0);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.register_scout("ojeador@scoutme.com").await;

    let (status, body) = app
        .post_json(
            "/login",
            None,
            json!({ "email": "ojeador@scoutme.com", "password": "incorrecta" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_session_cookie_authenticates() {
    let app = TestApp::new().await;
    app.register_scout("ojeador@scoutme.com").await;

    let response = app
        .router
        .clone()
        .oneshot(request(
            "POST",
            "/login?next=/eventos",
            None,
            Body::from(
                json!({ "email": "ojeador@scoutme.com", "password": "ojeador123" }).to_string(),
            ),
            Some("application/json"),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .expect("cookie header")
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(body["redirect_to"], "/eventos");

    let (status, _) = app
        .send(
            Request::builder()
                .uri("/perfil/ojeador")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .expect("request"),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Roles
// =============================================================================

#[tokio::test]
async fn test_profiles_are_role_specific() {
    let app = TestApp::new().await;
    app.register_player("jugador@scoutme.com", striker()).await;
    app.register_scout("ojeador@scoutme.com").await;
    let player = app.login("jugador@scoutme.com", "jugador123").await;
    let scout = app.login("ojeador@scoutme.com", "ojeador123").await;

    let (status, _) = app.get("/perfil/ojeador", Some(&player)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.get("/perfil/jugador", Some(&scout)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.get("/video/subir", Some(&scout)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.get("/evento/crear", Some(&player)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_player_profile_update_recomputes_age() {
    let app = TestApp::new().await;
    app.register_player("jugador@scoutme.com", striker()).await;
    let token = app.login("jugador@scoutme.com", "jugador123").await;

    let mut form = striker();
    form["fecha_nacimiento"] = json!("2006-03-01");
    form["ciudad"] = json!("Rosario");
    let (status, body) = app.post_json("/perfil/jugador", Some(&token), form).await;

    assert_eq!(status, StatusCode::OK, "{}", body);
    let birth = NaiveDate::from_ymd_opt(2006, 3, 1).expect("date");
    let expected = calculate_age(birth, Utc::now().date_naive());
    assert_eq!(body["data"]["edad"], expected);
    assert_eq!(body["data"]["ciudad"], "Rosario");

    let mut form = striker();
    form["fecha_nacimiento"] = Value::Null;
    let (status, body) = app.post_json("/perfil/jugador", Some(&token), form).await;

    assert_eq!(status, StatusCode::OK, "{}", body);
    assert!(body["data"]["fecha_nacimiento"].is_null());
    assert_eq!(body["data"]["edad"], expected);
}

#[tokio::test]
async fn test_scout_profile_update() {
    let app = TestApp::new().await;
    app.register_scout("ojeador@scoutme.com").await;
    let token = app.login("ojeador@scoutme.com", "ojeador123").await;

    let (status, body) = app
        .post_json(
            "/perfil/ojeador",
            Some(&token),
            json!({
                "nombre": "Carlos",
                "apellido": "Rodríguez",
                "empresa": "Academia del Sur",
                "especialidad": "Juveniles",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["empresa"], "Academia del Sur");

    let (_, profile) = app.get("/perfil/ojeador", Some(&token)).await;
    assert_eq!(profile["scout"]["especialidad"], "Juveniles");
}

#[tokio::test]
async fn test_profile_update_requires_fields() {
    let app = TestApp::new().await;
    app.register_scout("ojeador@scoutme.com").await;
    let token = app.login("ojeador@scoutme.com", "ojeador123").await;

    let (status, body) = app
        .post_json(
            "/perfil/ojeador",
            Some(&token),
            json!({ "nombre": "  ", "apellido": "Rodríguez" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["fields"]["nombre"].is_array());
}

#[tokio::test]
async fn test_admin_page_is_admin_only() {
    let app = TestApp::new().await;
    app.services
        .auth()
        .create_admin("admin@scoutme.com".to_string(), "admin123".to_string())
        .await
        .expect("admin");
    app.register_player("jugador@scoutme.com", striker()).await;
    let admin = app.login("admin@scoutme.com", "admin123").await;
    let player = app.login("jugador@scoutme.com", "jugador123").await;

    let (status, body) = app.get("/admin", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    let (status, _) = app.get("/admin", Some(&player)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_filters_narrow_results() {
    let app = TestApp::new().await;
    app.register_player("delantero@scoutme.com", striker()).await;
    app.register_player("base@scoutme.com", point_guard()).await;
    app.register_scout("ojeador@scoutme.com").await;
    let token = app.login("ojeador@scoutme.com", "ojeador123").await;

    let (status, all) = app.get("/buscar", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all["total"], 2);

    let (_, by_sport) = app.get("/buscar?deporte=baloncesto", Some(&token)).await;
    assert_eq!(apellidos(&by_sport), vec!["Gómez"]);

    let (_, narrower) = app
        .get("/buscar?deporte=baloncesto&pais=AR", Some(&token))
        .await;
    assert_eq!(narrower["total"], 0);

    let (_, by_age) = app.get("/buscar?edad_min=20", Some(&token)).await;
    assert_eq!(apellidos(&by_age), vec!["Martínez"]);
}

#[tokio::test]
async fn test_search_ignores_malformed_age() {
    let app = TestApp::new().await;
    app.register_player("delantero@scoutme.com", striker()).await;
    app.register_player("base@scoutme.com", point_guard()).await;
    let token = app.login("base@scoutme.com", "jugador123").await;

    let (status, body) = app
        .post_json("/buscar", Some(&token), json!({ "edad_min": "veinte" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_search_form_accepts_numeric_age() {
    let app = TestApp::new().await;
    app.register_player("delantero@scoutme.com", striker()).await;
    app.register_player("base@scoutme.com", point_guard()).await;
    let token = app.login("base@scoutme.com", "jugador123").await;

    let (status, body) = app
        .post_json("/buscar", Some(&token), json!({ "edad_min": 20 }))
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(apellidos(&body), vec!["Martínez"]);

    let (status, body) = app
        .post_json("/buscar", Some(&token), json!({ "edad_min": [20] }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_public_search_api() {
    let app = TestApp::new().await;
    app.register_player("delantero@scoutme.com", striker()).await;
    app.register_player("base@scoutme.com", point_guard()).await;

    let (status, body) = app.get("/api/buscar?posicion=delan", None).await;

    assert_eq!(status, StatusCode::OK);
    let jugadores = body["jugadores"].as_array().expect("jugadores");
    assert_eq!(body["total"], jugadores.len());
    assert_eq!(jugadores.len(), 1);
    assert_eq!(jugadores[0]["nombre"], "Lucas Martínez");
    assert_eq!(body["pagina"], 1);
    assert!(jugadores[0].get("telefono").is_none());
}

// =============================================================================
// Events
// =============================================================================

#[tokio::test]
async fn test_scout_creates_event() {
    let app = TestApp::new().await;
    app.register_scout("ojeador@scoutme.com").await;
    let token = app.login("ojeador@scoutme.com", "ojeador123").await;

    let (status, body) = app
        .post_json(
            "/evento/crear",
            Some(&token),
            json!({
                "titulo": "Prueba de talentos",
                "fecha": "2030-06-01",
                "ubicacion": "Estadio Municipal",
                "deporte": "fútbol",
                "capacidad_maxima": 40,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let event_id = body["data"]["id"].as_str().expect("event id").to_string();

    let (status, events) = app.get("/eventos", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(events.as_array().map(Vec::len), Some(1));

    let (status, event) = app
        .get(&format!("/evento/{}", event_id), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(event["titulo"], "Prueba de talentos");

    let (status, _) = app
        .get(&format!("/evento/{}", Uuid::new_v4()), Some(&token))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_event_requires_title_and_valid_id() {
    let app = TestApp::new().await;
    app.register_scout("ojeador@scoutme.com").await;
    let token = app.login("ojeador@scoutme.com", "ojeador123").await;

    let (status, body) = app
        .post_json(
            "/evento/crear",
            Some(&token),
            json!({ "titulo": "   ", "fecha": "2030-06-01" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["fields"]["titulo"].is_array());

    let (status, body) = app.get("/evento/no-es-un-id", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// =============================================================================
// Messaging
// =============================================================================

#[tokio::test]
async fn test_conversation_flow() {
    let app = TestApp::new().await;
    let player_id = app.register_player("jugador@scoutme.com", striker()).await;
    app.register_scout("ojeador@scoutme.com").await;
    app.register_player("otro@scoutme.com", point_guard()).await;
    let player = app.login("jugador@scoutme.com", "jugador123").await;
    let scout = app.login("ojeador@scoutme.com", "ojeador123").await;
    let outsider = app.login("otro@scoutme.com", "jugador123").await;

    let (status, sent) = app
        .post_json(
            "/mensaje/enviar",
            Some(&scout),
            json!({
                "receiver_id": player_id,
                "subject": "Prueba",
                "content": "Te esperamos el sábado.",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", sent);
    let conversation_id = sent["data"]["conversation_id"]
        .as_str()
        .expect("conversation id")
        .to_string();
    let uri = format!("/conversacion/{}", conversation_id);

    let (status, inbox) = app.get("/mensajes", Some(&player)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(inbox[0]["unread_count"], 1);

    let (status, _) = app.get(&uri, Some(&outsider)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, thread) = app.get(&uri, Some(&player)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(thread["messages"].as_array().map(Vec::len), Some(1));

    let (_, inbox) = app.get("/mensajes", Some(&player)).await;
    assert_eq!(inbox[0]["unread_count"], 0);

    let (status, reply) = app
        .post_json(&uri, Some(&player), json!({ "content": "Allí estaré." }))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", reply);
    assert_eq!(reply["data"]["conversation_id"], conversation_id.as_str());

    let (_, thread) = app.get(&uri, Some(&scout)).await;
    assert_eq!(thread["messages"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_blank_message_is_rejected() {
    let app = TestApp::new().await;
    let player_id = app.register_player("jugador@scoutme.com", striker()).await;
    app.register_scout("ojeador@scoutme.com").await;
    let scout = app.login("ojeador@scoutme.com", "ojeador123").await;

    let (status, body) = app
        .post_json(
            "/mensaje/enviar",
            Some(&scout),
            json!({ "receiver_id": player_id, "subject": "  ", "content": "\n\t " }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["fields"]["subject"].is_array());
    assert!(body["error"]["fields"]["content"].is_array());

    let (status, sent) = app
        .post_json(
            "/mensaje/enviar",
            Some(&scout),
            json!({ "receiver_id": player_id, "subject": "Prueba", "content": "Hola" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", sent);
    let uri = format!(
        "/conversacion/{}",
        sent["data"]["conversation_id"].as_str().expect("conversation id")
    );

    let (status, body) = app
        .post_json(&uri, Some(&scout), json!({ "content": "   " }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["fields"]["content"].is_array());
}

#[tokio::test]
async fn test_recipients_preselect_receiver() {
    let app = TestApp::new().await;
    let player_id = app.register_player("jugador@scoutme.com", striker()).await;
    app.register_scout("ojeador@scoutme.com").await;
    let scout = app.login("ojeador@scoutme.com", "ojeador123").await;

    let (status, body) = app
        .get(&format!("/mensaje/enviar?receiver={}", player_id), Some(&scout))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["destinatarios"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["seleccionado"]["email"], "jugador@scoutme.com");

    let (_, body) = app
        .get("/mensaje/enviar?receiver=no-es-un-id", Some(&scout))
        .await;
    assert!(body["seleccionado"].is_null());
}

// =============================================================================
// Videos
// =============================================================================

#[tokio::test]
async fn test_upload_rejects_disallowed_extension() {
    let app = TestApp::new().await;
    app.register_player("jugador@scoutme.com", striker()).await;
    let token = app.login("jugador@scoutme.com", "jugador123").await;

    let (status, body) = app
        .post_multipart(
            "/video/subir",
            &token,
            &[
                Part::Text("titulo", "Mis goles"),
                Part::Text("tipo", "local"),
                Part::File("virus.exe", b"MZ"),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["fields"]["archivo"].is_array());
}

#[tokio::test]
async fn test_upload_requires_title() {
    let app = TestApp::new().await;
    app.register_player("jugador@scoutme.com", striker()).await;
    let token = app.login("jugador@scoutme.com", "jugador123").await;

    let (status, body) = app
        .post_multipart(
            "/video/subir",
            &token,
            &[
                Part::Text("titulo", "   "),
                Part::Text("tipo", "youtube"),
                Part::Text("url", "https://www.youtube.com/watch?v=abc123"),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["fields"]["titulo"].is_array());
}

#[tokio::test]
async fn test_upload_youtube_link() {
    let app = TestApp::new().await;
    app.register_player("jugador@scoutme.com", striker()).await;
    let token = app.login("jugador@scoutme.com", "jugador123").await;

    let (status, body) = app
        .post_multipart(
            "/video/subir",
            &token,
            &[
                Part::Text("titulo", "Resumen de temporada"),
                Part::Text("tipo", "youtube"),
                Part::Text("url", "https://www.youtube.com/watch?v=abc123"),
            ],
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["data"]["tipo"], "youtube");

    let (_, profile) = app.get("/perfil/jugador", Some(&token)).await;
    assert_eq!(profile["videos"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_upload_local_file_is_served() {
    let app = TestApp::new().await;
    app.register_player("jugador@scoutme.com", striker()).await;
    let token = app.login("jugador@scoutme.com", "jugador123").await;

    let (status, body) = app
        .post_multipart(
            "/video/subir",
            &token,
            &[
                Part::Text("titulo", "Entrenamiento"),
                Part::Text("tipo", "local"),
                Part::File("entrenamiento.mp4", b"fake video bytes"),
            ],
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["data"]["filename"], "entrenamiento.mp4");
    assert!(app.upload_folder.join("entrenamiento.mp4").exists());

    let response = app
        .router
        .clone()
        .oneshot(request(
            "GET",
            "/uploads/entrenamiento.mp4",
            None,
            Body::empty(),
            None,
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(&bytes[..], b"fake video bytes");
}

// =============================================================================
// Seed data
// =============================================================================

#[tokio::test]
async fn test_seed_populates_demo_data() {
    let app = TestApp::new().await;
    scoutme::commands::seed::seed(&app.services)
        .await
        .expect("seed");

    let (status, body) = app.get("/api/buscar", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6);

    let token = app.login("jugador1@scoutme.com", "jugador123").await;
    let (_, inbox) = app.get("/mensajes", Some(&token)).await;
    assert_eq!(inbox.as_array().map(Vec::len), Some(1));

    let (_, events) = app.get("/eventos", Some(&token)).await;
    assert_eq!(events.as_array().map(Vec::len), Some(3));
}
