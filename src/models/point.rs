use serde::Serialize;

/// Collection point payload for POST /points. Built at submit time and
/// discarded after the request; the client never reads points back.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewPoint {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    /// Selected item ids, comma-joined in selection order.
    pub items_ids: String,
}

/// Toggles `id` in the selection. Membership removes it, keeping the order
/// of the remaining ids; absence appends it at the end.
pub fn toggle_item(selected: &[i64], id: i64) -> Vec<i64> {
    if selected.contains(&id) {
        selected.iter().copied().filter(|other| *other != id).collect()
    } else {
        let mut next = selected.to_vec();
        next.push(id);
        next
    }
}

/// Joins item ids into the comma-separated wire format.
pub fn join_ids(selected: &[i64]) -> String {
    selected
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_appends_unknown_ids_at_the_end() {
        assert_eq!(toggle_item(&[1, 2], 5), vec![1, 2, 5]);
        assert_eq!(toggle_item(&[], 9), vec![9]);
    }

    #[test]
    fn toggle_removes_without_reordering_the_rest() {
        assert_eq!(toggle_item(&[4, 9, 2], 9), vec![4, 2]);
    }

    #[test]
    fn toggle_twice_restores_the_original_selection() {
        let original = vec![3, 1, 2];
        let once = toggle_item(&original, 7);
        let twice = toggle_item(&once, 7);
        assert_eq!(twice, original);
    }

    #[test]
    fn toggle_twice_keeps_the_same_members() {
        let once = toggle_item(&[3, 1, 2], 1);
        let twice = toggle_item(&once, 1);

        let mut members = twice;
        members.sort_unstable();
        assert_eq!(members, vec![1, 2, 3]);
    }

    #[test]
    fn join_keeps_selection_order() {
        assert_eq!(join_ids(&[6, 1, 2]), "6,1,2");
        assert_eq!(join_ids(&[42]), "42");
        assert_eq!(join_ids(&[]), "");
    }

    #[test]
    fn point_payload_uses_the_wire_field_names() {
        let point = NewPoint {
            name: "Mercado Central".to_string(),
            email: "contato@mercadocentral.com.br".to_string(),
            whatsapp: "47999990000".to_string(),
            uf: "SC".to_string(),
            city: "Blumenau".to_string(),
            lat: -26.915,
            lon: -49.0717,
            items_ids: join_ids(&[1, 3]),
        };

        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["uf"], "SC");
        assert_eq!(value["city"], "Blumenau");
        assert_eq!(value["lat"], -26.915);
        assert_eq!(value["lon"], -49.0717);
        assert_eq!(value["items_ids"], "1,3");
        assert!(value.get("latitude").is_none());
    }
}
