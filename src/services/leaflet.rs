// ============================================================================
// LEAFLET FFI - wrappers for the window-level JS glue (see index.html)
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initLeaflet)]
    pub fn init_leaflet(container_id: &str, lat: f64, lng: f64, zoom: f64);

    #[wasm_bindgen(js_name = setLeafletMarker)]
    pub fn set_leaflet_marker(lat: f64, lng: f64);

    #[wasm_bindgen(js_name = centerLeaflet)]
    pub fn center_leaflet(lat: f64, lng: f64);

    #[wasm_bindgen(js_name = onLeafletClick)]
    pub fn on_leaflet_click(callback: &js_sys::Function);
}
