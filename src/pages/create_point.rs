use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ErrorMessage, ItemsGrid, MapPicker, PageHeader};
use crate::models::point::{join_ids, toggle_item};
use crate::models::{Item, NewPoint};
use crate::routes::Route;
use crate::services::{geolocation, ibge, ApiClient};

/// Leaflet view center until the device position arrives.
const FALLBACK_CENTER: (f64, f64) = (-27.2092052, -49.6401092);

#[function_component(CreatePoint)]
pub fn create_point() -> Html {
    let items = use_state(Vec::<Item>::new);
    let selected_items = use_state(Vec::<i64>::new);

    let ufs = use_state(Vec::<String>::new);
    let selected_uf = use_state(String::new);
    let cities = use_state(Vec::<String>::new);
    let selected_city = use_state(String::new);
    // Most recently requested UF; city responses for anything else are stale
    let requested_uf = use_mut_ref(String::new);

    let device_position = use_state(|| None::<(f64, f64)>);
    let selected_position = use_state(|| (0.0, 0.0));

    let error = use_state(|| None::<String>);

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let whatsapp_ref = use_node_ref();

    let navigator = use_navigator().unwrap();

    // Load the item catalog on mount
    {
        let items = items.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::new().get_items().await {
                    Ok(catalog) => {
                        log::info!("✅ Items loaded: {}", catalog.len());
                        items.set(catalog);
                    }
                    Err(e) => {
                        log::error!("❌ Failed to load items: {}", e);
                        error.set(Some(e));
                    }
                }
            });
            || ()
        });
    }

    // Load the UF list on mount
    {
        let ufs = ufs.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match ibge::fetch_ufs().await {
                    Ok(states) => {
                        log::info!("✅ UFs loaded: {}", states.len());
                        ufs.set(states.into_iter().map(|uf| uf.sigla).collect());
                    }
                    Err(e) => {
                        log::error!("❌ Failed to load UFs: {}", e);
                        error.set(Some(e));
                    }
                }
            });
            || ()
        });
    }

    // Ask for the device position on mount (best-effort)
    {
        let device_position = device_position.clone();

        use_effect_with((), move |_| {
            geolocation::request_position(Callback::from(move |position| {
                device_position.set(Some(position));
            }));
            || ()
        });
    }

    let on_uf_change = {
        let selected_uf = selected_uf.clone();
        let cities = cities.clone();
        let selected_city = selected_city.clone();
        let requested_uf = requested_uf.clone();
        let error = error.clone();

        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let uf = select.value();

            selected_uf.set(uf.clone());
            // The old city list no longer applies; drop the selection with it
            selected_city.set(String::new());
            cities.set(Vec::new());
            *requested_uf.borrow_mut() = uf.clone();

            if uf.is_empty() {
                return;
            }

            let cities = cities.clone();
            let requested_uf = requested_uf.clone();
            let error = error.clone();
            spawn_local(async move {
                match ibge::fetch_cities(&uf).await {
                    Ok(list) => {
                        // A faster re-selection may have outdated this response
                        if *requested_uf.borrow() == uf {
                            cities.set(list.into_iter().map(|city| city.nome).collect());
                        } else {
                            log::info!("🔍 Dropping stale city list for {}", uf);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Failed to load cities for {}: {}", uf, e);
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    let on_city_change = {
        let selected_city = selected_city.clone();

        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected_city.set(select.value());
        })
    };

    let on_map_select = {
        let selected_position = selected_position.clone();

        Callback::from(move |position: (f64, f64)| {
            selected_position.set(position);
        })
    };

    let on_toggle_item = {
        let selected_items = selected_items.clone();

        Callback::from(move |id: i64| {
            selected_items.set(toggle_item(&selected_items, id));
        })
    };

    let on_submit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let whatsapp_ref = whatsapp_ref.clone();
        let selected_uf = selected_uf.clone();
        let selected_city = selected_city.clone();
        let selected_items = selected_items.clone();
        let selected_position = selected_position.clone();
        let error = error.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(name_input), Some(email_input), Some(whatsapp_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                whatsapp_ref.cast::<HtmlInputElement>(),
            ) {
                let (lat, lon) = *selected_position;
                let point = NewPoint {
                    name: name_input.value(),
                    email: email_input.value(),
                    whatsapp: whatsapp_input.value(),
                    uf: (*selected_uf).clone(),
                    city: (*selected_city).clone(),
                    lat,
                    lon,
                    items_ids: join_ids(&selected_items),
                };

                let error = error.clone();
                let navigator = navigator.clone();
                spawn_local(async move {
                    match ApiClient::new().create_point(&point).await {
                        Ok(()) => {
                            if let Some(window) = web_sys::window() {
                                window.alert_with_message("Ponto de coleta criado!").ok();
                            }
                            navigator.push(&Route::Home);
                        }
                        Err(e) => {
                            log::error!("❌ Failed to create point: {}", e);
                            error.set(Some(e));
                        }
                    }
                });
            }
        })
    };

    let map_center = (*device_position).unwrap_or(FALLBACK_CENTER);

    html! {
        <div id="page-create-point">
            <PageHeader />

            <form onsubmit={on_submit}>
                <h1>{"Cadastro do ponto de coleta"}</h1>

                if let Some(message) = &*error {
                    <ErrorMessage message={message.clone()} />
                }

                <fieldset>
                    <legend>
                        <h2>{"Dados"}</h2>
                    </legend>

                    <div class="field">
                        <label for="name">{"Nome da entidade"}</label>
                        <input id="name" type="text" name="name" ref={name_ref.clone()} />
                    </div>

                    <div class="field-group">
                        <div class="field">
                            <label for="email">{"E-mail"}</label>
                            <input id="email" type="text" name="email" ref={email_ref.clone()} />
                        </div>

                        <div class="field">
                            <label for="whatsapp">{"Whatsapp"}</label>
                            <input id="whatsapp" type="text" name="whatsapp" ref={whatsapp_ref.clone()} />
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>{"Endereço"}</h2>
                        <span>{"Selecione o endereço no mapa"}</span>
                    </legend>

                    <MapPicker
                        center={map_center}
                        marker={*selected_position}
                        on_select={on_map_select}
                    />

                    <div class="field-group">
                        <div class="field">
                            <label for="uf">{"Estado (UF)"}</label>
                            <select name="uf" id="uf" onchange={on_uf_change}>
                                <option value="" selected={selected_uf.is_empty()}>
                                    {"Selecione uma UF"}
                                </option>
                                { for ufs.iter().map(|uf| html! {
                                    <option
                                        key={uf.clone()}
                                        value={uf.clone()}
                                        selected={*uf == *selected_uf}
                                    >
                                        { uf }
                                    </option>
                                })}
                            </select>
                        </div>

                        <div class="field">
                            <label for="city">{"Cidade"}</label>
                            <select name="city" id="city" onchange={on_city_change}>
                                <option value="" selected={selected_city.is_empty()}>
                                    {"Selecione uma cidade"}
                                </option>
                                { for cities.iter().map(|city| html! {
                                    <option
                                        key={city.clone()}
                                        value={city.clone()}
                                        selected={*city == *selected_city}
                                    >
                                        { city }
                                    </option>
                                })}
                            </select>
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>{"Itens de coleta"}</h2>
                        <span>{"Selecione um ou mais itens abaixo"}</span>
                    </legend>

                    <ItemsGrid
                        items={(*items).clone()}
                        selected={(*selected_items).clone()}
                        on_toggle={on_toggle_item}
                    />
                </fieldset>

                <button type="submit">{"Cadastrar ponto de coleta"}</button>
            </form>
        </div>
    }
}
