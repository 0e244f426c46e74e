use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{CreateItem, CreatePoint, Home};
use crate::routes::Route;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::CreatePoint => html! { <CreatePoint /> },
        Route::CreateItem => html! { <CreateItem /> },
        Route::NotFound => html! {
            <div class="container"><h2>{"404 - Página não encontrada"}</h2></div>
        },
    }
}
