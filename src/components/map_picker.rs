use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::services::leaflet::{center_leaflet, init_leaflet, on_leaflet_click, set_leaflet_marker};

#[derive(Properties, PartialEq)]
pub struct MapPickerProps {
    /// View center while the user has not picked a point yet.
    pub center: (f64, f64),
    /// Current marker position.
    pub marker: (f64, f64),
    pub on_select: Callback<(f64, f64)>,
}

#[function_component(MapPicker)]
pub fn map_picker(props: &MapPickerProps) -> Html {
    // Initialize map on mount
    {
        let (lat, lng) = props.center;
        let on_select = props.on_select.clone();

        use_effect_with((), move |_| {
            // Initialize after a short delay to ensure the container is in the DOM
            Timeout::new(100, move || {
                log::info!("🗺️ Initializing Leaflet map");
                init_leaflet("map", lat, lng, 15.0);

                let on_click = Closure::wrap(Box::new(move |lat: f64, lng: f64| {
                    on_select.emit((lat, lng));
                }) as Box<dyn FnMut(f64, f64)>);
                on_leaflet_click(on_click.as_ref().unchecked_ref());
                // Registered once per map instance; forget() keeps the
                // closure alive for the lifetime of the page.
                on_click.forget();
            })
            .forget();

            || ()
        });
    }

    // Re-center when the device position arrives
    {
        let center = props.center;
        use_effect_with(center, move |(lat, lng)| {
            center_leaflet(*lat, *lng);
            || ()
        });
    }

    // Move the marker on every pick
    {
        let marker = props.marker;
        use_effect_with(marker, move |(lat, lng)| {
            set_leaflet_marker(*lat, *lng);
            || ()
        });
    }

    html! {
        <div id="map" class="map-picker"></div>
    }
}
