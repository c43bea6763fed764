//! In-memory stand-ins for the backend and the browser, used by unit tests.

use crate::api::torneos::TorneoApi;
use crate::notifications::{Notification, NotificationKind, Notifier, Prompt};
use async_trait::async_trait;
use shared::{MutationOutcome, Result, SharedError, Torneo, TorneoFilter, TorneoPayload};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

pub fn torneo(id: i64, fecha: &str, ubicacion: &str) -> Torneo {
    Torneo {
        id,
        nombre_tienda: format!("Tienda {}", id),
        ubicacion: ubicacion.to_string(),
        hora: "18:00".to_string(),
        fecha: fecha.to_string(),
        premio: String::new(),
        tipo_juego: "Pokemon".to_string(),
        categoria: "Junior".to_string(),
        tipo_torneo: "League Cup".to_string(),
        imagen: None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApiCall {
    ListAll,
    RenderFiltered(TorneoFilter),
    Create(TorneoPayload),
    Update(i64, TorneoPayload),
    Delete(i64),
    SeedDummy,
}

/// Backend double: keeps a collection, applies successful mutations to it
/// and records every call.
#[derive(Default)]
pub struct FakeTorneoApi {
    torneos: RefCell<Vec<Torneo>>,
    calls: RefCell<Vec<ApiCall>>,
    outcomes: RefCell<VecDeque<MutationOutcome>>,
    list_error: RefCell<Option<SharedError>>,
    render_error: RefCell<Option<SharedError>>,
    next_id: Cell<i64>,
}

impl FakeTorneoApi {
    pub fn with_torneos(torneos: Vec<Torneo>) -> Self {
        let next_id = torneos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let api = Self::default();
        api.torneos.replace(torneos);
        api.next_id.set(next_id);
        api
    }

    pub fn set_torneos(&self, torneos: Vec<Torneo>) {
        self.torneos.replace(torneos);
    }

    pub fn fail_list(&self, error: SharedError) {
        self.list_error.replace(Some(error));
    }

    pub fn fail_render(&self, error: SharedError) {
        self.render_error.replace(Some(error));
    }

    /// Outcome for the next mutating call instead of `Success`
    pub fn next_outcome(&self, outcome: MutationOutcome) {
        self.outcomes.borrow_mut().push_back(outcome);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }

    fn outcome(&self) -> MutationOutcome {
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or(MutationOutcome::Success)
    }

    fn build(id: i64, payload: &TorneoPayload) -> Torneo {
        Torneo {
            id,
            nombre_tienda: payload.nombre_tienda.clone(),
            ubicacion: payload.ubicacion.clone(),
            hora: payload.hora.clone(),
            fecha: payload.fecha.clone(),
            premio: payload.premio.clone(),
            tipo_juego: payload.tipo_juego.clone(),
            categoria: payload.categoria.clone(),
            tipo_torneo: payload.tipo_torneo.clone(),
            imagen: Some(payload.imagen.clone()).filter(|url| !url.is_empty()),
        }
    }
}

#[async_trait(?Send)]
impl TorneoApi for FakeTorneoApi {
    async fn list_all(&self) -> Result<Vec<Torneo>> {
        self.record(ApiCall::ListAll);
        match self.list_error.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(self.torneos.borrow().clone()),
        }
    }

    async fn render_filtered(&self, filter: &TorneoFilter) -> Result<String> {
        self.record(ApiCall::RenderFiltered(filter.clone()));
        if let Some(error) = self.render_error.borrow().clone() {
            return Err(error);
        }
        let torneos = self.torneos.borrow();
        Ok(filter
            .apply(&torneos)
            .records()
            .iter()
            .map(|t| format!(r#"<button onclick="abrirFormulario({})">Ver Detalles</button>"#, t.id))
            .collect())
    }

    async fn create(&self, payload: &TorneoPayload) -> MutationOutcome {
        self.record(ApiCall::Create(payload.clone()));
        let outcome = self.outcome();
        if outcome.is_success() {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.torneos.borrow_mut().push(Self::build(id, payload));
        }
        outcome
    }

    async fn update(&self, id: i64, payload: &TorneoPayload) -> MutationOutcome {
        self.record(ApiCall::Update(id, payload.clone()));
        let outcome = self.outcome();
        if outcome.is_success() {
            for torneo in self.torneos.borrow_mut().iter_mut().filter(|t| t.id == id) {
                *torneo = Self::build(id, payload);
            }
        }
        outcome
    }

    async fn delete(&self, id: i64) -> MutationOutcome {
        self.record(ApiCall::Delete(id));
        let outcome = self.outcome();
        if outcome.is_success() {
            self.torneos.borrow_mut().retain(|t| t.id != id);
        }
        outcome
    }

    async fn seed_dummy(&self) -> Result<bool> {
        self.record(ApiCall::SeedDummy);
        Ok(self.torneos.borrow().is_empty())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(NotificationKind, String)> {
        self.notifications
            .borrow()
            .iter()
            .map(|n| (n.kind, n.message.clone()))
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

#[derive(Default)]
pub struct RecordingPrompt {
    alerts: RefCell<Vec<String>>,
    sign_in_redirects: Cell<usize>,
}

impl RecordingPrompt {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn sign_in_redirects(&self) -> usize {
        self.sign_in_redirects.get()
    }
}

impl Prompt for RecordingPrompt {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn go_to_sign_in(&self) {
        self.sign_in_redirects.set(self.sign_in_redirects.get() + 1);
    }
}
