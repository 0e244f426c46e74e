// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================

use gloo_net::http::Request;

use crate::models::{Item, NewItem, NewPoint};
use crate::utils::constants::BACKEND_URL;

/// Stateless HTTP client for the Ecoleta backend.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// List the item catalog
    pub async fn get_items(&self) -> Result<Vec<Item>, String> {
        let url = format!("{}/items", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response
            .json::<Vec<Item>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Register a new collectible item type
    pub async fn create_item(&self, item: &NewItem) -> Result<(), String> {
        let url = format!("{}/items", self.base_url);

        log::info!("📦 Creating item: {}", item.name);

        let response = Request::post(&url)
            .json(item)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Register a new collection point
    pub async fn create_point(&self, point: &NewPoint) -> Result<(), String> {
        let url = format!("{}/points", self.base_url);

        log::info!("📍 Creating collection point: {} ({})", point.name, point.city);

        let response = Request::post(&url)
            .json(point)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }
}
