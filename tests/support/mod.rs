//! In-process stub of the PiarAPP backend for integration tests.
//!
//! Implements just enough of the REST contract to drive the real client:
//! login and token refresh, the current-user endpoint, one club with one
//! event and its attendance logic (capacity overflow goes to the waitlist),
//! the facility code, and the documentation upload/download pair. Call
//! counters let tests assert the exactly-one-retry behavior.

// Each test binary compiles its own copy; not all of them use every helper.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use piarapp::common::Config;
use piarapp::session::{MemorySessionStore, SessionManager};

pub const PASSWORD: &str = "correcta123";
pub const FIRST_ACCESS: &str = "access-1";
pub const REFRESH_TOKEN: &str = "refresh-1";

pub struct Stub {
    /// The access token the backend currently accepts.
    pub access_token: String,
    pub refresh_ok: bool,
    /// Protected endpoints reject every token, even fresh ones.
    pub always_unauthorized: bool,

    pub refresh_calls: u32,
    pub me_calls: u32,
    pub attendance_calls: u32,

    pub capacity: Option<u32>,
    pub others_registered: u32,
    pub my_status: Option<String>,

    pub facility_code: Option<String>,
    pub insurance_file: Option<(String, Vec<u8>)>,
}

impl Stub {
    pub fn new() -> Shared {
        Arc::new(Mutex::new(Stub {
            access_token: FIRST_ACCESS.to_string(),
            refresh_ok: true,
            always_unauthorized: false,
            refresh_calls: 0,
            me_calls: 0,
            attendance_calls: 0,
            capacity: None,
            others_registered: 0,
            my_status: None,
            facility_code: None,
            insurance_file: None,
        }))
    }

    pub fn registered_count(&self) -> u32 {
        let mine = if self.my_status.as_deref() == Some("inscrito") {
            1
        } else {
            0
        };
        self.others_registered + mine
    }
}

pub type Shared = Arc<Mutex<Stub>>;

fn lock(state: &Shared) -> MutexGuard<'_, Stub> {
    state.lock().expect("stub state lock")
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn authorized(stub: &Stub, headers: &HeaderMap) -> bool {
    !stub.always_unauthorized && bearer(headers).as_deref() == Some(stub.access_token.as_str())
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Token inválido"})),
    )
}

fn user_json() -> Value {
    json!({
        "id": 9,
        "email": "ana@club.org",
        "nombre_completo": "Ana Socia",
        "email_verificado": true,
        "activo": true,
        "es_superadmin": false,
        "fecha_creacion": "2024-01-01T00:00:00"
    })
}

fn tokens_json(access: &str) -> Value {
    json!({
        "access_token": access,
        "refresh_token": REFRESH_TOKEN,
        "token_type": "bearer",
        "expires_in": 1800
    })
}

fn attendance_json(status: &str) -> Value {
    json!({
        "id": 88,
        "evento_id": 5,
        "usuario_id": 9,
        "estado": status,
        "fecha_registro": "2024-05-20T18:00:00"
    })
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let stub = lock(&state);
    if body["password"] == PASSWORD {
        (
            StatusCode::OK,
            Json(json!({
                "usuario": user_json(),
                "tokens": tokens_json(&stub.access_token)
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Email o contraseña inválidos"})),
        )
    }
}

async fn refresh(
    State(state): State<Shared>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut stub = lock(&state);
    stub.refresh_calls += 1;
    if stub.refresh_ok && body["refresh_token"] == REFRESH_TOKEN {
        stub.access_token = format!("access-r{}", stub.refresh_calls);
        let tokens = tokens_json(&stub.access_token);
        (StatusCode::OK, Json(tokens))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Refresh token inválido o expirado"})),
        )
    }
}

async fn me(State(state): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let mut stub = lock(&state);
    stub.me_calls += 1;
    if authorized(&stub, &headers) {
        (StatusCode::OK, Json(user_json()))
    } else {
        unauthorized()
    }
}

async fn create_club(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let stub = lock(&state);
    if !authorized(&stub, &headers) {
        return unauthorized();
    }
    if body["slug"] == "taken" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "El slug del club ya está en uso"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": 12,
            "nombre": body["nombre"],
            "slug": body["slug"],
            "creador_id": 9
        })),
    )
}

async fn forbidden_club(State(state): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let stub = lock(&state);
    if !authorized(&stub, &headers) {
        return unauthorized();
    }
    (
        StatusCode::FORBIDDEN,
        Json(json!({"detail": "No tienes acceso a este club"})),
    )
}

async fn event(State(state): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let stub = lock(&state);
    if !authorized(&stub, &headers) {
        return unauthorized();
    }
    let mut payload = json!({
        "id": 5,
        "club_id": 1,
        "nombre": "Vuelo de ladera",
        "descripcion": "Salida matinal",
        "fecha_inicio": "2030-06-01T09:00:00",
        "inscritos_count": stub.registered_count()
    });
    if let Some(capacity) = stub.capacity {
        payload["aforo_maximo"] = json!(capacity);
    }
    (StatusCode::OK, Json(payload))
}

async fn my_attendance(State(state): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let stub = lock(&state);
    if !authorized(&stub, &headers) {
        return unauthorized();
    }
    match &stub.my_status {
        Some(status) => (StatusCode::OK, Json(attendance_json(status))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "No inscrito"})),
        ),
    }
}

/// Mirrors the backend's RSVP rule: a registration request on a full event
/// is accepted into the waitlist instead.
async fn set_attendance(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut stub = lock(&state);
    if !authorized(&stub, &headers) {
        return unauthorized();
    }
    stub.attendance_calls += 1;

    let desired = body["estado"].as_str().unwrap_or("cancelado").to_string();
    let mut new_status = desired.clone();
    let already_registered = stub.my_status.as_deref() == Some("inscrito");

    if desired == "inscrito" && !already_registered {
        if let Some(capacity) = stub.capacity {
            if stub.registered_count() >= capacity {
                new_status = "lista_espera".to_string();
            }
        }
    }

    stub.my_status = Some(new_status.clone());
    (StatusCode::OK, Json(attendance_json(&new_status)))
}

async fn facility_password(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let stub = lock(&state);
    if !authorized(&stub, &headers) {
        return unauthorized();
    }
    match &stub.facility_code {
        Some(code) => (
            StatusCode::OK,
            Json(json!({
                "id": 2,
                "club_id": 1,
                "codigo": code,
                "activa": true,
                "creado_por_id": 9,
                "fecha_creacion": "2024-02-02T10:00:00"
            })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "No se ha configurado contraseña para este club"})),
        ),
    }
}

async fn upsert_documentation(
    State(state): State<Shared>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    {
        let stub = lock(&state);
        if !authorized(&stub, &headers) {
            return unauthorized();
        }
    }

    let mut insurance_number = Value::Null;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name() {
            Some("rc_numero") => {
                if let Ok(text) = field.text().await {
                    insurance_number = json!(text);
                }
            }
            Some("rc_archivo") => {
                let name = field.file_name().unwrap_or("rc").to_string();
                if let Ok(bytes) = field.bytes().await {
                    file = Some((name, bytes.to_vec()));
                }
            }
            _ => {}
        }
    }

    let mut stub = lock(&state);
    let has_file = file.is_some();
    let file_name = file.as_ref().map(|(name, _)| name.clone());
    stub.insurance_file = file;

    (
        StatusCode::OK,
        Json(json!({
            "id": 1,
            "usuario_id": 9,
            "rc_numero": insurance_number,
            "rc_archivo_nombre": file_name,
            "rc_tiene_archivo": has_file,
            "carnet_tiene_archivo": false
        })),
    )
}

async fn download_insurance(State(state): State<Shared>, headers: HeaderMap) -> axum::response::Response {
    let stub = lock(&state);
    if !authorized(&stub, &headers) {
        return unauthorized().into_response();
    }
    match &stub.insurance_file {
        Some((name, bytes)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", name),
                ),
            ],
            bytes.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "No hay archivo de seguro RC"})),
        )
            .into_response(),
    }
}

/// Binds the stub to an ephemeral port and returns the base URL (with the
/// `/api` prefix the real backend uses).
pub async fn spawn(state: Shared) -> String {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh-token", post(refresh))
        .route("/api/auth/usuarios/me", get(me))
        .route("/api/clubes", post(create_club))
        .route("/api/clubes/2", get(forbidden_club))
        .route("/api/clubes/1/eventos/5", get(event))
        .route("/api/clubes/1/eventos/5/mi-asistencia", get(my_attendance))
        .route("/api/clubes/1/eventos/5/asistencia", post(set_attendance))
        .route("/api/clubes/1/instalacion/password", get(facility_password))
        .route("/api/documentacion/me", post(upsert_documentation))
        .route("/api/documentacion/me/rc", get(download_insurance))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr: SocketAddr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });

    format!("http://{}/api", addr)
}

pub struct Harness {
    pub api: Arc<SessionManager>,
    pub store: Arc<MemorySessionStore>,
    pub stub: Shared,
}

/// Stub + session manager wired to it through an in-memory store.
pub async fn harness(stub: Shared) -> Harness {
    let base_url = spawn(stub.clone()).await;
    let config = Config {
        api_url: base_url,
        google_client_id: None,
        google_redirect_uri: None,
        session_file: PathBuf::from("unused"),
    };
    let store = Arc::new(MemorySessionStore::new());
    let api = Arc::new(SessionManager::new(&config, store.clone()));
    Harness { api, store, stub }
}
