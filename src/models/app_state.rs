use std::sync::Arc;

use crate::{domain::Relayer, services::EvmProvider};

#[derive(Clone)]
pub struct AppState {
    pub relayer: Arc<Relayer<EvmProvider>>,
}

impl AppState {
    pub fn relayer(&self) -> Arc<Relayer<EvmProvider>> {
        self.relayer.clone()
    }
}
