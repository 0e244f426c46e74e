/// Backend base URL, resolved at compile time:
/// - development: http://localhost:3000 (default)
/// - production: via BACKEND_URL env var (see build.rs / .env.example)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// IBGE localidades API (states and municipalities).
pub const IBGE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";
