pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // The panel is served by the same origin as the REST API, so relative
        // URLs work in development and production alike.
        "".to_string()
    }

    /// Server-rendered sign-in page the browser is sent to on a 401
    pub fn sign_in_path() -> &'static str {
        "/admin"
    }

    /// Whether to call `POST /api/init-dummy` before the first load.
    /// Enabled at build time with `TORNEOS_SEED_DUMMY=1`.
    pub fn seed_dummy_on_start() -> bool {
        matches!(option_env!("TORNEOS_SEED_DUMMY"), Some("1") | Some("true"))
    }
}
