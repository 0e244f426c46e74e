use yew::prelude::*;

use crate::models::Item;

#[derive(Properties, PartialEq)]
pub struct ItemsGridProps {
    pub items: Vec<Item>,
    /// Currently selected item ids, in selection order.
    pub selected: Vec<i64>,
    pub on_toggle: Callback<i64>,
}

/// Grid of collectible item types. Clicking an entry toggles it in the
/// caller's selection.
#[function_component(ItemsGrid)]
pub fn items_grid(props: &ItemsGridProps) -> Html {
    html! {
        <ul class="items-grid">
            { for props.items.iter().map(|item| {
                let on_toggle = props.on_toggle.clone();
                let id = item.id;
                let selected = props.selected.contains(&id);

                html! {
                    <li
                        key={item.id.to_string()}
                        class={if selected { "selected" } else { "" }}
                        onclick={Callback::from(move |_| on_toggle.emit(id))}
                    >
                        <img src={item.image_url.clone()} alt={item.name.clone()} />
                        <span>{ &item.name }</span>
                    </li>
                }
            })}
        </ul>
    }
}
