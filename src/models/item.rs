use serde::{Deserialize, Serialize};

/// Collectible item type as returned by GET /items. Immutable from the
/// client's perspective.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub image_url: String,
}

/// Creation payload for POST /items.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewItem {
    pub name: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_entries() {
        let json = r#"[
            {"id":1,"name":"Lâmpadas","image_url":"http://localhost:3000/uploads/lampadas.svg"},
            {"id":2,"name":"Pilhas e Baterias","image_url":"http://localhost:3000/uploads/baterias.svg"}
        ]"#;

        let items: Vec<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].name, "Lâmpadas");
        assert_eq!(items[1].image_url, "http://localhost:3000/uploads/baterias.svg");
    }

    #[test]
    fn new_item_serializes_both_fields() {
        let item = NewItem {
            name: "Papéis e Papelão".to_string(),
            image_url: "http://localhost:3000/uploads/papeis.svg".to_string(),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["name"], "Papéis e Papelão");
        assert_eq!(value["image_url"], "http://localhost:3000/uploads/papeis.svg");
    }
}
