use api::ScannerClient;
use api::ScannerConfig;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug)]
pub struct AppStateData {
    pub scanner: ScannerClient,
}

/// Immutable application state shared through the Dioxus context.
///
/// Holds the configured scanner client; everything reactive lives in
/// per-component signals instead.
#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: ScannerConfig) -> Self {
        Self(Arc::new(AppStateData {
            scanner: ScannerClient::new(config),
        }))
    }
}
