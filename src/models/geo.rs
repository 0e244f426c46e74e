use serde::Deserialize;

/// IBGE state record (GET /estados?orderBy=nome).
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct Uf {
    pub id: i64,
    pub sigla: String,
    pub nome: String,
}

/// IBGE municipality record (GET /estados/{uf}/municipios?orderBy=nome).
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct City {
    pub id: i64,
    pub nome: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_ibge_states() {
        // The real API nests a "regiao" object we never read
        let json = r#"[
            {"id":42,"sigla":"SC","nome":"Santa Catarina","regiao":{"id":4,"sigla":"S","nome":"Sul"}},
            {"id":35,"sigla":"SP","nome":"São Paulo","regiao":{"id":3,"sigla":"SE","nome":"Sudeste"}}
        ]"#;

        let states: Vec<Uf> = serde_json::from_str(json).unwrap();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].sigla, "SC");
        assert_eq!(states[1].nome, "São Paulo");
    }

    #[test]
    fn deserializes_ibge_municipalities() {
        let json = r#"[
            {"id":4202404,"nome":"Blumenau"},
            {"id":4205407,"nome":"Florianópolis"}
        ]"#;

        let cities: Vec<City> = serde_json::from_str(json).unwrap();
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[1].nome, "Florianópolis");
    }
}
