pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_url: String,
}

impl Config {
    /// First command-line argument wins over `CATALOG_URL`.
    pub fn from_env_and_args(args: &[String]) -> Self {
        let catalog_url = args
            .get(1)
            .cloned()
            .or_else(|| std::env::var("CATALOG_URL").ok())
            .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());

        Self {
            catalog_url: catalog_url.trim_end_matches('/').to_string(),
        }
    }
}
