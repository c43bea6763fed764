use crate::api::torneos::TorneoApi;
use log::debug;
use shared::{LocationSet, Result, SharedError, Torneo};
use std::cell::RefCell;
use std::rc::Rc;

/// One full fetch of the collection together with the locations derived from it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub torneos: Vec<Torneo>,
    pub locations: LocationSet,
}

impl Snapshot {
    pub fn new(torneos: Vec<Torneo>) -> Self {
        let locations = LocationSet::from_torneos(&torneos);
        Self { torneos, locations }
    }
}

/// In-memory copy of the backend collection for the lifetime of the page.
///
/// The snapshot is only ever replaced whole, so a reader holding an
/// `Rc<Snapshot>` keeps a consistent view across later refreshes.
#[derive(Debug, Default)]
pub struct TorneoStore {
    snapshot: RefCell<Rc<Snapshot>>,
}

impl TorneoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetches the collection. On failure the previous snapshot stays.
    pub async fn refresh<A: TorneoApi + ?Sized>(&self, api: &A) -> Result<()> {
        let torneos = api.list_all().await?;
        let snapshot = Snapshot::new(torneos);
        debug!(
            "Torneo cache refreshed: {} torneos, {} locations",
            snapshot.torneos.len(),
            snapshot.locations.len()
        );
        self.snapshot.replace(Rc::new(snapshot));
        Ok(())
    }

    pub fn snapshot(&self) -> Rc<Snapshot> {
        Rc::clone(&self.snapshot.borrow())
    }

    pub fn lookup(&self, id: i64) -> Result<Torneo> {
        self.snapshot
            .borrow()
            .torneos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| SharedError::NotFound(format!("torneo {}", id)))
    }

    pub fn locations(&self) -> LocationSet {
        self.snapshot.borrow().locations.clone()
    }
}
