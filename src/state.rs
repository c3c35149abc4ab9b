use crate::config::AppConfig;
use crate::store::Store;

pub struct AppState {
    pub store: Store,
    pub config: AppConfig,
}
