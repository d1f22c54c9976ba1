use crate::api::api_url;
use crate::api::utils::{ensure_success, json_get, json_post};
use log::{debug, error};
use shared::{Result, SharedError, Tournament, TournamentDraft};
use web_sys::AbortSignal;

pub const TOURNAMENTS_PATH: &str = "/api/tournaments";

pub fn tournament_path(id: i64) -> String {
    format!("{}/{}", TOURNAMENTS_PATH, id)
}

pub async fn get_all_tournaments(signal: Option<&AbortSignal>) -> Result<Vec<Tournament>> {
    debug!("Fetching all tournaments");
    let url = api_url(TOURNAMENTS_PATH);

    let response = json_get(&url, signal)
        .send()
        .await
        .map_err(|e| SharedError::Transport(format!("Failed to fetch tournaments: {}", e)))?;
    let response = ensure_success(&url, response)?;

    let tournaments = response
        .json::<Vec<Tournament>>()
        .await
        .map_err(|e| SharedError::Transport(format!("Failed to parse tournaments response: {}", e)))?;

    debug!("Successfully fetched {} tournaments", tournaments.len());
    Ok(tournaments)
}

pub async fn get_tournament_by_id(id: i64, signal: Option<&AbortSignal>) -> Result<Tournament> {
    debug!("Fetching tournament with ID: {}", id);
    let url = api_url(&tournament_path(id));

    let response = json_get(&url, signal)
        .send()
        .await
        .map_err(|e| SharedError::Transport(format!("Failed to fetch tournament: {}", e)))?;
    let response = ensure_success(&url, response)?;

    let tournament = response
        .json::<Tournament>()
        .await
        .map_err(|e| SharedError::Transport(format!("Failed to parse tournament response: {}", e)))?;

    debug!("Successfully fetched tournament: {}", tournament.title);
    Ok(tournament)
}

pub async fn create_tournament(draft: &TournamentDraft) -> Result<Tournament> {
    debug!("Creating tournament: {}", draft.title);
    let url = api_url(TOURNAMENTS_PATH);

    let request = json_post(&url)
        .json(draft)
        .map_err(|e| SharedError::Conversion(format!("Failed to serialize tournament: {}", e)))?;

    let response = request.send().await.map_err(|e| {
        error!("Create request did not complete: {}", e);
        SharedError::Transport(format!("Failed to create tournament: {}", e))
    })?;
    let response = ensure_success(&url, response)?;

    let created = response
        .json::<Tournament>()
        .await
        .map_err(|e| SharedError::Transport(format!("Failed to parse tournament response: {}", e)))?;

    debug!("Successfully created tournament {}: {}", created.id, created.title);
    Ok(created)
}
