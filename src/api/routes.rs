use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    games::{games_by_date, games_by_sport, games_by_sport_and_date, games_by_team},
    leaderboard::{get_leaderboard, get_stat_leaderboard, health, list_metrics},
    players::{
        players_by_grade, players_by_position, players_by_sport, players_by_sport_and_position,
        search_players,
    },
    records::{
        create_record, get_record, hard_delete_record, list_active_records, list_records,
        soft_delete_record, update_record,
    },
    schools::{schools_by_sport, search_schools},
    stats::{
        create_stats, delete_stats, delete_stats_permanently, get_player_season_stats, get_stats,
        list_divisions, list_seasons, list_sports, list_stats, update_stats,
    },
    AppState,
};
use crate::domain::{Game, Player, School, Team};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/leaderboard", get(get_leaderboard))
        .route("/api/metrics", get(list_metrics))
        .merge(stats_routes())
        .merge(game_routes())
        .merge(player_routes())
        .merge(school_routes())
        .merge(team_routes())
        .with_state(state)
}

fn stats_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/stats", get(list_stats).post(create_stats))
        .route("/api/stats/sports", get(list_sports))
        .route("/api/stats/seasons", get(list_seasons))
        .route("/api/stats/divisions/sport/:sport", get(list_divisions))
        .route(
            "/api/stats/player/:player/sport/:sport/season/:season",
            get(get_player_season_stats),
        )
        .route(
            "/api/stats/leaderboard/sport/:sport/division/:division/stat/:stat",
            get(get_stat_leaderboard),
        )
        .route(
            "/api/stats/:id",
            get(get_stats).put(update_stats).delete(delete_stats),
        )
        .route("/api/stats/:id/permanent", delete(delete_stats_permanently))
}

fn game_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/games", get(list_records::<Game>).post(create_record::<Game>))
        .route("/api/games/active", get(list_active_records::<Game>))
        .route("/api/games/sport/:sport", get(games_by_sport))
        .route("/api/games/date/:date", get(games_by_date))
        .route("/api/games/sport/:sport/date/:date", get(games_by_sport_and_date))
        .route("/api/games/team/:team", get(games_by_team))
        .route(
            "/api/games/:id",
            get(get_record::<Game>)
                .put(update_record::<Game>)
                .delete(soft_delete_record::<Game>),
        )
}

fn player_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/players", get(list_records::<Player>).post(create_record::<Player>))
        .route("/api/players/active", get(list_active_records::<Player>))
        .route("/api/players/search", get(search_players))
        .route("/api/players/sport/:sport", get(players_by_sport))
        .route("/api/players/position/:position", get(players_by_position))
        .route(
            "/api/players/sport/:sport/position/:position",
            get(players_by_sport_and_position),
        )
        .route("/api/players/grade/:grade", get(players_by_grade))
        .route(
            "/api/players/:id",
            get(get_record::<Player>)
                .put(update_record::<Player>)
                .delete(soft_delete_record::<Player>),
        )
}

fn school_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/schools", get(list_records::<School>).post(create_record::<School>))
        .route("/api/schools/active", get(list_active_records::<School>))
        .route("/api/schools/search", get(search_schools))
        .route("/api/schools/sport/:sport", get(schools_by_sport))
        .route(
            "/api/schools/:id",
            get(get_record::<School>)
                .put(update_record::<School>)
                .delete(soft_delete_record::<School>),
        )
}

// Team deletes remove the row outright.
fn team_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/teams", get(list_records::<Team>).post(create_record::<Team>))
        .route(
            "/api/teams/:id",
            get(get_record::<Team>)
                .put(update_record::<Team>)
                .delete(hard_delete_record::<Team>),
        )
}
