//! Browser-only checks. Run with `wasm-pack test --headless --firefox frontend`.

#![cfg(target_arch = "wasm32")]

use frontend::api::api_url;
use frontend::api::utils::request;
use frontend::components::torneo_card::format_fecha;
use frontend::config::Config;
use gloo_net::http::Method;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn api_urls_are_relative_to_the_page() {
    assert_eq!(api_url("/api/torneos"), "/api/torneos");
}

#[wasm_bindgen_test]
fn sign_in_surface_is_admin() {
    assert_eq!(Config::sign_in_path(), "/admin");
}

#[wasm_bindgen_test]
fn card_dates_format_in_the_browser() {
    assert!(format_fecha("2024-06-01").contains("2024"));
}

#[wasm_bindgen_test]
fn requests_keep_the_method_they_were_built_with() {
    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
        let built = request(method.clone(), "/api/torneos/1").build().unwrap();
        assert_eq!(built.method(), method);
        assert_eq!(built.headers().get("Accept").as_deref(), Some("application/json"));
    }
}
