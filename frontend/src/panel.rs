use crate::api::torneos::TorneoApi;
use crate::form::{FormController, SubmitRequest, TorneoField};
use crate::notifications::{Notification, Notifier, Prompt};
use crate::store::{Snapshot, TorneoStore};
use log::{debug, error, warn};
use shared::{MutationOutcome, Result, SharedError, TorneoFilter};
use std::cell::RefCell;
use std::rc::Rc;

const NOT_FOUND_MESSAGE: &str = "Torneo no encontrado";
const NOTHING_SELECTED_MESSAGE: &str = "No hay torneo seleccionado";

/// What feeds the grid
#[derive(Clone, Debug, PartialEq)]
pub enum GridView {
    Loading,
    /// Markup pre-rendered by `/api/filtrar`
    Server(String),
    /// Cards computed from the cached collection
    Local(TorneoFilter),
    Failed(String),
}

/// Messages used to report one kind of mutation
struct MutationMessages {
    success: &'static str,
    sign_in: &'static str,
    failure: &'static str,
}

const SAVE_CREATE: MutationMessages = MutationMessages {
    success: "Torneo creado",
    sign_in: "Debes iniciar sesión para realizar esta acción",
    failure: "Error al guardar el torneo",
};

const SAVE_UPDATE: MutationMessages = MutationMessages {
    success: "Torneo actualizado",
    ..SAVE_CREATE
};

const DELETE: MutationMessages = MutationMessages {
    success: "Torneo eliminado",
    sign_in: "Debes iniciar sesión para eliminar torneos",
    failure: "Error al eliminar el torneo",
};

/// Coordinates the cache, the grid, the modal form and the backend.
///
/// All state sits behind `RefCell`s that are never borrowed across an
/// `.await`, so handlers can run interleaved on the UI thread. Repeated
/// submits are not coalesced; each one issues its own request.
pub struct TorneoPanel<A: TorneoApi> {
    api: A,
    store: TorneoStore,
    form: RefCell<FormController>,
    filter: RefCell<TorneoFilter>,
    grid: RefCell<GridView>,
    notifier: Rc<dyn Notifier>,
    prompt: Rc<dyn Prompt>,
}

impl<A: TorneoApi> TorneoPanel<A> {
    pub fn new(api: A, notifier: Rc<dyn Notifier>, prompt: Rc<dyn Prompt>) -> Self {
        Self {
            api,
            store: TorneoStore::new(),
            form: RefCell::new(FormController::new()),
            filter: RefCell::new(TorneoFilter::default()),
            grid: RefCell::new(GridView::Loading),
            notifier,
            prompt,
        }
    }

    pub fn snapshot(&self) -> Rc<Snapshot> {
        self.store.snapshot()
    }

    pub fn grid(&self) -> GridView {
        self.grid.borrow().clone()
    }

    pub fn filter(&self) -> TorneoFilter {
        self.filter.borrow().clone()
    }

    pub fn form(&self) -> FormController {
        self.form.borrow().clone()
    }

    /// Page start-up: optional seeding, first fetch, then the server's
    /// default listing as first paint.
    pub async fn load(&self, seed_dummy: bool) {
        if seed_dummy {
            match self.api.seed_dummy().await {
                Ok(true) => debug!("Dummy torneos created"),
                Ok(false) => debug!("Torneos already present, nothing seeded"),
                Err(e) => error!("Failed to seed dummy torneos: {}", e),
            }
        }

        if let Err(e) = self.store.refresh(&self.api).await {
            error!("Failed to load torneos: {}", e);
            self.grid.replace(GridView::Failed(e.to_string()));
            return;
        }
        self.show_server(TorneoFilter::default()).await;
    }

    /// Grid from the server-rendered fragment. Falls back to local cards
    /// for the same filter if the fragment cannot be fetched.
    async fn show_server(&self, filter: TorneoFilter) {
        match self.api.render_filtered(&filter).await {
            Ok(markup) => {
                self.grid.replace(GridView::Server(markup));
            }
            Err(e) => {
                error!("Failed to render torneos on the server: {}", e);
                self.grid.replace(GridView::Local(filter));
            }
        }
    }

    /// Interactive filtering, computed locally against the cache
    pub fn apply_filter(&self, filter: TorneoFilter) {
        debug!("Applying filter {:?}", filter);
        self.filter.replace(filter.clone());
        self.grid.replace(GridView::Local(filter));
    }

    pub async fn clear_date_filter(&self) {
        let filter = self.filter.borrow().without_fecha();
        self.filter.replace(filter.clone());
        self.show_server(filter).await;
    }

    pub async fn clear_filters(&self) {
        self.filter.replace(TorneoFilter::default());
        self.show_server(TorneoFilter::default()).await;
    }

    pub fn open_for_create(&self) {
        self.form.borrow_mut().open_for_create();
    }

    /// Opens the form on a cached torneo. Unknown ids leave the form as it was.
    pub fn open_for_edit(&self, id: i64) -> Result<()> {
        match self.store.lookup(id) {
            Ok(torneo) => {
                self.form.borrow_mut().open_for_edit(&torneo);
                Ok(())
            }
            Err(e) => {
                warn!("Cannot edit torneo {}: {}", id, e);
                self.notifier.notify(Notification::error(NOT_FOUND_MESSAGE));
                Err(e)
            }
        }
    }

    pub fn close(&self) {
        self.form.borrow_mut().close();
    }

    pub fn dismiss(&self, target_is_backdrop: bool) -> bool {
        self.form.borrow_mut().dismiss(target_is_backdrop)
    }

    pub fn set_field(&self, field: TorneoField, value: String) {
        self.form.borrow_mut().set_value(field, value);
    }

    /// Creates or updates depending on whether the form carries an id
    pub async fn submit(&self) -> Result<MutationOutcome> {
        let request = self.form.borrow().submit_request();
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                warn!("Torneo form rejected: {}", e);
                self.notifier
                    .notify(Notification::error(format!("Revisa los campos del formulario: {}", e)));
                return Err(e);
            }
        };

        let (outcome, messages) = match &request {
            SubmitRequest::Create(payload) => (self.api.create(payload).await, &SAVE_CREATE),
            SubmitRequest::Update(id, payload) => (self.api.update(*id, payload).await, &SAVE_UPDATE),
        };
        self.settle(&outcome, messages).await;
        Ok(outcome)
    }

    /// Deletes `id`, or the torneo being edited when no id is given
    pub async fn delete(&self, id: Option<i64>) -> Result<MutationOutcome> {
        let Some(id) = id.or_else(|| self.form.borrow().current_id()) else {
            self.prompt.alert(NOTHING_SELECTED_MESSAGE);
            return Err(SharedError::NothingSelected);
        };

        let outcome = self.api.delete(id).await;
        self.settle(&outcome, &DELETE).await;
        Ok(outcome)
    }

    async fn settle(&self, outcome: &MutationOutcome, messages: &MutationMessages) {
        match outcome {
            MutationOutcome::Success => {
                self.close();
                self.reload().await;
                self.notifier.notify(Notification::success(messages.success));
            }
            MutationOutcome::Unauthorized => {
                self.notifier.notify(Notification::error(messages.sign_in));
                self.prompt.alert(messages.sign_in);
                self.prompt.go_to_sign_in();
            }
            MutationOutcome::OtherError(e) => {
                match e.status() {
                    Some(status) => error!("{} (HTTP {}): {}", messages.failure, status, e),
                    None => error!("{}: {}", messages.failure, e),
                }
                self.notifier.notify(Notification::error(messages.failure));
            }
        }
    }

    /// Refreshes the cache after a mutation and repaints the grid in its current mode
    async fn reload(&self) {
        if let Err(e) = self.store.refresh(&self.api).await {
            error!("Failed to reload torneos: {}", e);
            return;
        }
        self.drop_stale_location();
        let grid = self.grid();
        match grid {
            GridView::Local(_) => {
                self.grid.replace(GridView::Local(self.filter()));
            }
            _ => self.show_server(self.filter()).await,
        }
    }

    /// Clears the location filter once no cached torneo has that location
    fn drop_stale_location(&self) {
        let locations = self.store.locations();
        let mut filter = self.filter.borrow_mut();
        if !filter.ubicacion.is_empty() && !locations.contains(&filter.ubicacion) {
            debug!("Location {} no longer listed, clearing its filter", filter.ubicacion);
            filter.ubicacion.clear();
        }
    }
}
