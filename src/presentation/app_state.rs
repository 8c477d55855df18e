// Application state for HTTP handlers
use crate::application::settings_service::SettingsService;
use crate::application::view::SharedView;
use crate::application::wifi_service::WifiService;

#[derive(Clone)]
pub struct AppState {
    pub view: SharedView,
    pub settings_service: SettingsService,
    pub wifi_service: WifiService,
}
