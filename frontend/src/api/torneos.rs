use crate::api::api_url;
use crate::api::utils::{mutation_outcome, request, status_error};
use async_trait::async_trait;
use gloo_net::http::Method;
use log::debug;
use shared::{MessageResponse, MutationOutcome, Result, SharedError, Torneo, TorneoFilter, TorneoPayload};

/// REST endpoints of the torneo backend.
///
/// Nothing here retries; every failure is handed straight back to the caller.
#[async_trait(?Send)]
pub trait TorneoApi {
    /// `GET /api/torneos`
    async fn list_all(&self) -> Result<Vec<Torneo>>;

    /// `GET /api/filtrar`: server-rendered grid markup for `filter`
    async fn render_filtered(&self, filter: &TorneoFilter) -> Result<String>;

    async fn create(&self, payload: &TorneoPayload) -> MutationOutcome;

    async fn update(&self, id: i64, payload: &TorneoPayload) -> MutationOutcome;

    async fn delete(&self, id: i64) -> MutationOutcome;

    /// `POST /api/init-dummy`. `true` when the backend created sample torneos,
    /// `false` when it already had some.
    async fn seed_dummy(&self) -> Result<bool>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpTorneoApi;

fn torneo_url(id: i64) -> String {
    format!("{}/{}", api_url("/api/torneos"), id)
}

#[async_trait(?Send)]
impl TorneoApi for HttpTorneoApi {
    async fn list_all(&self) -> Result<Vec<Torneo>> {
        debug!("Fetching all torneos");

        let response = request(Method::GET, &api_url("/api/torneos"))
            .send()
            .await
            .map_err(|e| SharedError::Transport(format!("Failed to fetch torneos: {}", e)))?;

        if !response.ok() {
            return Err(status_error(response).await);
        }

        let torneos = response
            .json::<Vec<Torneo>>()
            .await
            .map_err(|e| SharedError::Decode(format!("Failed to parse torneos response: {}", e)))?;

        debug!("Successfully fetched {} torneos", torneos.len());
        Ok(torneos)
    }

    async fn render_filtered(&self, filter: &TorneoFilter) -> Result<String> {
        let url = format!("{}?{}", api_url("/api/filtrar"), filter.to_query());
        debug!("Rendering torneos on the server: {}", url);

        let response = request(Method::GET, &url)
            .header("Accept", "text/html")
            .send()
            .await
            .map_err(|e| SharedError::Transport(format!("Failed to render torneos: {}", e)))?;

        if !response.ok() {
            return Err(status_error(response).await);
        }

        response
            .text()
            .await
            .map_err(|e| SharedError::Decode(format!("Failed to read rendered torneos: {}", e)))
    }

    async fn create(&self, payload: &TorneoPayload) -> MutationOutcome {
        debug!("Creating torneo: {}", payload.nombre_tienda);

        let sent = match request(Method::POST, &api_url("/api/torneos")).json(payload) {
            Ok(req) => req.send().await,
            Err(e) => return MutationOutcome::OtherError(SharedError::Decode(e.to_string())),
        };
        mutation_outcome(sent, "create torneo").await
    }

    async fn update(&self, id: i64, payload: &TorneoPayload) -> MutationOutcome {
        debug!("Updating torneo with ID: {}", id);

        let sent = match request(Method::PUT, &torneo_url(id)).json(payload) {
            Ok(req) => req.send().await,
            Err(e) => return MutationOutcome::OtherError(SharedError::Decode(e.to_string())),
        };
        mutation_outcome(sent, "update torneo").await
    }

    async fn delete(&self, id: i64) -> MutationOutcome {
        debug!("Deleting torneo with ID: {}", id);

        let sent = request(Method::DELETE, &torneo_url(id)).send().await;
        mutation_outcome(sent, "delete torneo").await
    }

    async fn seed_dummy(&self) -> Result<bool> {
        let response = request(Method::POST, &api_url("/api/init-dummy"))
            .send()
            .await
            .map_err(|e| SharedError::Transport(format!("Failed to seed torneos: {}", e)))?;

        if !response.ok() {
            return Err(status_error(response).await);
        }

        let created = response.status() == 201;
        if let Ok(body) = response.json::<MessageResponse>().await {
            debug!("Seeding answered: {}", body.mensaje);
        }
        Ok(created)
    }
}
