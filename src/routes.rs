use yew_router::Routable;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/register")]
    CreatePoint,
    #[at("/items")]
    CreateItem,

    #[not_found]
    #[at("/404")]
    NotFound,
}
