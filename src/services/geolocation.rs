use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{GeolocationPosition, GeolocationPositionError};
use yew::Callback;

/// Requests the device position once, best-effort. Denied or unavailable
/// geolocation only logs; the caller keeps its default coordinate.
pub fn request_position(on_position: Callback<(f64, f64)>) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };

    let geolocation = match window.navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(_) => {
            log::warn!("⚠️ Geolocation API not available");
            return;
        }
    };

    let success = Closure::wrap(Box::new(move |position: GeolocationPosition| {
        let coords = position.coords();
        log::info!("📍 Device position: {}, {}", coords.latitude(), coords.longitude());
        on_position.emit((coords.latitude(), coords.longitude()));
    }) as Box<dyn FnMut(GeolocationPosition)>);

    let error = Closure::wrap(Box::new(move |err: GeolocationPositionError| {
        log::warn!("⚠️ Geolocation denied or failed: {}", err.message());
    }) as Box<dyn FnMut(GeolocationPositionError)>);

    if geolocation
        .get_current_position_with_error_callback(
            success.as_ref().unchecked_ref(),
            Some(error.as_ref().unchecked_ref()),
        )
        .is_err()
    {
        log::warn!("⚠️ getCurrentPosition rejected");
    }

    // The browser calls back after this function returns; forget() keeps
    // both closures alive. Requested once per page mount.
    success.forget();
    error.forget();
}
