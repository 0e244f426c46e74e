use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ErrorMessage, PageHeader};
use crate::models::{Item, NewItem};
use crate::routes::Route;
use crate::services::ApiClient;

#[function_component(CreateItem)]
pub fn create_item() -> Html {
    let items = use_state(Vec::<Item>::new);
    let error = use_state(|| None::<String>);

    let name_ref = use_node_ref();
    let image_url_ref = use_node_ref();

    let navigator = use_navigator().unwrap();

    // Load the catalog on mount
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

    let on_submit = {
        let name_ref = name_ref.clone();
        let image_url_ref = image_url_ref.clone();
        let error = error.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(name_input), Some(image_url_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                image_url_ref.cast::<HtmlInputElement>(),
            ) {
                let item = NewItem {
                    name: name_input.value(),
                    image_url: image_url_input.value(),
                };

                let error = error.clone();
                let navigator = navigator.clone();
                spawn_local(async move {
                    match ApiClient::new().create_item(&item).await {
                        Ok(()) => {
                            if let Some(window) = web_sys::window() {
                                window.alert_with_message("Sucesso! Item criado.").ok();
                            }
                            navigator.push(&Route::Home);
                        }
                        Err(e) => {
                            log::error!("❌ Failed to create item: {}", e);
                            error.set(Some(e));
                        }
                    }
                });
            }
        })
    };

    html! {
        <div id="page-create-item">
            <PageHeader />

            <form onsubmit={on_submit}>
                <h1>{"Cadastro de itens"}</h1>

                if let Some(message) = &*error {
                    <ErrorMessage message={message.clone()} />
                }

                <fieldset>
                    <legend>
                        <h2>{"Dados"}</h2>
                    </legend>

                    <div class="field">
                        <label for="name">{"Nome do item"}</label>
                        <input id="name" type="text" name="name" ref={name_ref.clone()} />
                    </div>

                    <div class="field">
                        <label for="image_url">{"Imagem"}</label>
                        <input id="image_url" type="text" name="image_url" ref={image_url_ref.clone()} />
                    </div>
                </fieldset>

                <button type="submit">{"Cadastrar item"}</button>

                <fieldset>
                    <legend>
                        <h2>{"Itens de coleta"}</h2>
                        <span>{"Itens cadastrados"}</span>
                    </legend>

                    <ul class="items-grid">
                        { for items.iter().map(|item| html! {
                            <li key={item.id.to_string()}>
                                <img src={item.image_url.clone()} alt={item.name.clone()} width="100" />
                                <span>{ &item.name }</span>
                            </li>
                        })}
                    </ul>
                </fieldset>
            </form>
        </div>
    }
}
