use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// Registration-page header: logo plus a link back to the home route.
#[function_component(PageHeader)]
pub fn page_header() -> Html {
    html! {
        <header>
            <span class="logo">{"Ecoleta"}</span>

            <Link<Route> to={Route::Home}>
                {"← Voltar para home"}
            </Link<Route>>
        </header>
    }
}
