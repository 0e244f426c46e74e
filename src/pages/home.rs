use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div id="page-home">
            <header>
                <span class="logo">{"Ecoleta"}</span>
            </header>

            <main>
                <h1>{"Seu marketplace de coleta de resíduos."}</h1>
                <p>{"Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente."}</p>

                <Link<Route> to={Route::CreatePoint} classes="button">
                    {"Cadastre um ponto de coleta"}
                </Link<Route>>

                <Link<Route> to={Route::CreateItem} classes="button">
                    {"Cadastre um item de coleta"}
                </Link<Route>>
            </main>
        </div>
    }
}
