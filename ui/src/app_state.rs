use std::ops::Deref;
use std::rc::Rc;

use api::slot::KeyValueSlot;
use api::MockApi;

pub struct AppStateData {
    pub api: MockApi,
    pub slot: Rc<dyn KeyValueSlot>,
}

/// Everything the screens need that never changes after startup.
#[derive(Clone)]
pub struct AppState(Rc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl AppState {
    pub fn new(api: MockApi, slot: Rc<dyn KeyValueSlot>) -> Self {
        Self(Rc::new(AppStateData { api, slot }))
    }

    /// Rows per table page.
    pub fn page_size(&self) -> usize {
        self.api.config().page_size
    }
}
