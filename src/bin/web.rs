//! Single binary web server: JSON API over the tournament engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080),
//! OPPONENTS_CSV (path to a catalog file; falls back to the embedded one).

use actix_web::{
    get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use cup_tournament_web::{
    apply_match_result, eligible_opponents, generate_tournament, Catalog, Entrant, Tournament,
    TournamentId, TournamentSettings,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Entries are removed after inactivity.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(serde::Serialize)]
struct EligibleResponse {
    count: usize,
}

#[derive(Deserialize)]
struct MatchResultBody {
    round_index: usize,
    match_index: usize,
    winner: Entrant,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "cup-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Full opponent catalog in catalog order (read-only).
#[get("/api/opponents")]
async fn api_opponents(catalog: Data<Catalog>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.opponents())
}

/// How many catalog opponents the given settings would allow.
#[post("/api/opponents/eligible")]
async fn api_eligible(catalog: Data<Catalog>, body: Json<TournamentSettings>) -> HttpResponse {
    match eligible_opponents(&catalog, &body) {
        Ok(eligible) => HttpResponse::Ok().json(EligibleResponse {
            count: eligible.count(),
        }),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Build a tournament from the posted settings (returns it with id;
/// client stores id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(
    state: AppState,
    catalog: Data<Catalog>,
    body: Json<TournamentSettings>,
) -> HttpResponse {
    let tournament = match generate_tournament(&catalog, &body, &mut rand::thread_rng()) {
        Ok(t) => t,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    match g.get(&id) {
        Some(entry) => HttpResponse::Ok().json(&entry.tournament),
        None => HttpResponse::InternalServerError().body("lock error"),
    }
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Apply one match result; CPU-vs-CPU matches cascade automatically
/// before the updated tournament is returned.
#[post("/api/tournaments/{id}/result")]
async fn api_apply_result(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<MatchResultBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match apply_match_result(
        t,
        body.round_index,
        body.match_index,
        &body.winner,
        &mut rand::thread_rng(),
    ) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Load the opponent catalog: OPPONENTS_CSV path if set, else the
/// catalog shipped in the binary.
fn load_catalog() -> std::io::Result<Catalog> {
    let catalog = match std::env::var("OPPONENTS_CSV") {
        Ok(path) => {
            log::info!("Loading opponent catalog from {}", path);
            let file = std::fs::File::open(&path)?;
            Catalog::from_csv(file)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?
        }
        Err(_) => Catalog::from_csv(include_str!("../../data/opponents.csv").as_bytes())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?,
    };
    log::info!("Opponent catalog loaded: {} record(s)", catalog.len());
    Ok(catalog)
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
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let catalog = Data::new(load_catalog()?);
    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(catalog.clone())
            .service(api_health)
            .service(favicon)
            .service(api_opponents)
            .service(api_eligible)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_apply_result)
    })
    .bind(bind)?
    .run()
    .await
}
