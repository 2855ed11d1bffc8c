use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use chrono::Utc;
use scoutx_core::{Error, Player, SimilarityModel, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Neighbours returned when the client doesn't ask for a count.
const DEFAULT_TOP_N: usize = 5;
/// Accepted bounds for `top_n`; out-of-range requests clamp instead of failing.
const MIN_TOP_N: usize = 1;
const MAX_TOP_N: usize = 20;

#[derive(Deserialize)]
struct SimilarQuery {
    top_n: Option<usize>,
}

#[derive(Deserialize)]
struct SimilarRequest {
    player_name: Option<String>,
    top_n: Option<usize>,
}

#[derive(Serialize)]
struct PlayerSummary {
    player_id: u32,
    player_name: String,
    team: String,
    position: String,
    age: u32,
    goals: u32,
    assists: u32,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            player_id: player.player_id,
            player_name: player.name.clone(),
            team: player.team.clone(),
            position: player.position.clone(),
            age: player.age,
            goals: player.goals,
            assists: player.assists,
        }
    }
}

#[derive(Serialize)]
struct BasicStats {
    goals: u32,
    assists: u32,
    minutes_played: u32,
    goals_per_90: f32,
    assists_per_90: f32,
}

#[derive(Serialize)]
struct AdvancedStats {
    npxg_plus_xag_per_90: f32,
    progressive_carries_per_90: f32,
    progressive_passes_per_90: f32,
    progressive_receives_per_90: f32,
    total_contributions: u32,
}

#[derive(Serialize)]
struct PlayerDetails {
    player_id: u32,
    player_name: String,
    team: String,
    position: String,
    age: u32,
    basic_stats: BasicStats,
    advanced_stats: AdvancedStats,
}

impl From<&Player> for PlayerDetails {
    fn from(player: &Player) -> Self {
        Self {
            player_id: player.player_id,
            player_name: player.name.clone(),
            team: player.team.clone(),
            position: player.position.clone(),
            age: player.age,
            basic_stats: BasicStats {
                goals: player.goals,
                assists: player.assists,
                minutes_played: player.minutes_played,
                goals_per_90: round2(player.goals_per_90),
                assists_per_90: round2(player.assists_per_90),
            },
            advanced_stats: AdvancedStats {
                npxg_plus_xag_per_90: round2(player.npxg_plus_xag_per_90),
                progressive_carries_per_90: round2(player.progressive_carries_per_90),
                progressive_passes_per_90: round2(player.progressive_passes_per_90),
                progressive_receives_per_90: round2(player.progressive_receives_per_90),
                total_contributions: player.total_contributions,
            },
        }
    }
}

#[derive(Serialize)]
struct KeyStats {
    goals: u32,
    assists: u32,
    progressive_passes_per_90: f32,
    npxg_plus_xag_per_90: f32,
}

#[derive(Serialize)]
struct SimilarPlayer {
    player_id: u32,
    player_name: String,
    team: String,
    position: String,
    similarity_score: f32,
    key_stats: KeyStats,
}

impl SimilarPlayer {
    fn new(player: &Player, score: f32) -> Self {
        Self {
            player_id: player.player_id,
            player_name: player.name.clone(),
            team: player.team.clone(),
            position: player.position.clone(),
            similarity_score: round3(score),
            key_stats: KeyStats {
                goals: player.goals,
                assists: player.assists,
                progressive_passes_per_90: player.progressive_passes_per_90,
                npxg_plus_xag_per_90: player.npxg_plus_xag_per_90,
            },
        }
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

pub struct RestApi;

impl RestApi {
    pub async fn start(model: Arc<SimilarityModel>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(model.clone()))
                .route("/", web::get().to(health))
                .route("/players", web::get().to(list_players))
                .route("/players/{id}", web::get().to(player_details))
                .route("/similar/{name}", web::get().to(similar_by_path))
                .route("/similar", web::post().to(similar_by_body))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn health(model: web::Data<Arc<SimilarityModel>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "online",
        "service": "Premier League Midfielder Similarity Finder",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
        "model": model.info(),
        "endpoints": {
            "health": "/",
            "players": "/players",
            "player_details": "/players/{id}",
            "similarity": "/similar/{name}",
            "similarity_post": "/similar"
        }
    })))
}

async fn list_players(model: web::Data<Arc<SimilarityModel>>) -> ActixResult<HttpResponse> {
    let roster = match model.roster() {
        Ok(roster) => roster,
        Err(e) => return Ok(error_response(&e)),
    };

    let players: Vec<PlayerSummary> = roster.players().iter().map(PlayerSummary::from).collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "count": players.len(),
        "players": players
    })))
}

async fn player_details(
    model: web::Data<Arc<SimilarityModel>>,
    path: web::Path<u32>,
) -> ActixResult<HttpResponse> {
    let player_id = path.into_inner();

    let roster = match model.roster() {
        Ok(roster) => roster,
        Err(e) => return Ok(error_response(&e)),
    };

    match roster.by_id(player_id) {
        Some(player) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "player": PlayerDetails::from(player)
        }))),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "success": false,
            "error": format!("Player with ID {player_id} not found")
        }))),
    }
}

async fn similar_by_path(
    model: web::Data<Arc<SimilarityModel>>,
    path: web::Path<String>,
    query: web::Query<SimilarQuery>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();
    Ok(respond_similar(
        &model,
        &name,
        query.top_n.unwrap_or(DEFAULT_TOP_N),
    ))
}

async fn similar_by_body(
    model: web::Data<Arc<SimilarityModel>>,
    req: web::Json<SimilarRequest>,
) -> ActixResult<HttpResponse> {
    let Some(name) = req.player_name.as_deref() else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "Missing 'player_name' in request body"
        })));
    };
    Ok(respond_similar(
        &model,
        name,
        req.top_n.unwrap_or(DEFAULT_TOP_N),
    ))
}

fn respond_similar(model: &SimilarityModel, name: &str, top_n: usize) -> HttpResponse {
    let top_n = top_n.clamp(MIN_TOP_N, MAX_TOP_N);

    let roster = match model.roster() {
        Ok(roster) => roster,
        Err(e) => return error_response(&e),
    };

    let Some(query_index) = roster.find(name) else {
        return HttpResponse::NotFound().json(serde_json::json!({
            "success": false,
            "error": format!("Player '{name}' not found. Please check the spelling.")
        }));
    };

    let ranked = match model.similar(query_index, top_n) {
        Ok(ranked) => ranked,
        Err(e) => return error_response(&e),
    };

    // find() returned an in-range index, so these lookups cannot miss.
    let target = &roster.players()[query_index];
    let similar: Vec<SimilarPlayer> = ranked
        .iter()
        .map(|&(row, score)| SimilarPlayer::new(&roster.players()[row], score))
        .collect();

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "target_player": {
            "name": target.name,
            "team": target.team,
            "position": target.position
        },
        "similar_players": similar,
        "algorithm_info": {
            "method": "Cosine Similarity",
            "features_used": FEATURE_COUNT,
            "normalization": "StandardScaler"
        }
    }))
}

fn error_response(err: &Error) -> HttpResponse {
    let body = serde_json::json!({
        "success": false,
        "error": err.to_string()
    });
    match err {
        Error::IndexOutOfRange { .. } | Error::InvalidLimit => {
            HttpResponse::BadRequest().json(body)
        }
        _ => HttpResponse::InternalServerError().json(body),
    }
}
