// ============================================================================
// IBGE SERVICE - Brazilian geography reference data
// ============================================================================

use gloo_net::http::Request;

use crate::models::{City, Uf};
use crate::utils::constants::IBGE_URL;

/// List Brazilian states, ordered by name.
pub async fn fetch_ufs() -> Result<Vec<Uf>, String> {
    let url = format!("{}/estados?orderBy=nome", IBGE_URL);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }
    response
        .json::<Vec<Uf>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// List the municipalities of one state, ordered by name.
pub async fn fetch_cities(uf: &str) -> Result<Vec<City>, String> {
    let url = format!("{}/estados/{}/municipios?orderBy=nome", IBGE_URL, uf);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }
    response
        .json::<Vec<City>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
