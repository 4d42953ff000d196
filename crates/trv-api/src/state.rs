use trv_db::{PgStore, QuestionStore};

use crate::config::Environment;

/// Shared application state.
///
/// The question store is injected rather than held as a global so any
/// backend satisfying [`QuestionStore`] can serve the same routes: `PgStore`
/// in production, `MemoryStore` in the integration tests.
#[derive(Clone, Debug)]
pub struct ApiState<S = PgStore> {
    pub store: S,
    pub environment: Environment,
}

impl<S: QuestionStore> ApiState<S> {
    pub const fn new(store: S, environment: Environment) -> Self {
        Self { store, environment }
    }
}
