// Settings service - Form submission and LED test actions
use crate::application::device_api::DeviceApi;
use crate::application::view::SharedView;
use crate::domain::acknowledgment::Acknowledgment;
use crate::domain::settings::{FormControl, FormField, controls_from_post, serialize_form};
use crate::infrastructure::error::ApiError;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct SettingsService {
    api: Arc<dyn DeviceApi>,
    view: SharedView,
    form: Vec<FormField>,
}

impl SettingsService {
    pub fn new(api: Arc<dyn DeviceApi>, view: SharedView, form: Vec<FormField>) -> Self {
        Self { api, view, form }
    }

    pub async fn submit(&self, controls: &[FormControl]) -> Result<Acknowledgment, ApiError> {
        let values = serialize_form(controls);
        tracing::info!("Saving {} settings", values.len());
        self.api.save_settings(&values).await?;
        Ok(self.acknowledge(Acknowledgment::Saved).await)
    }

    /// Submit an urlencoded post against the configured form.
    pub async fn submit_post(&self, posted: &HashMap<String, String>) -> Result<Acknowledgment, ApiError> {
        let controls = controls_from_post(&self.form, posted);
        self.submit(&controls).await
    }

    pub async fn test_led(&self) -> Result<Acknowledgment, ApiError> {
        self.api.test_led().await?;
        Ok(self.acknowledge(Acknowledgment::LedTestSent).await)
    }

    async fn acknowledge(&self, ack: Acknowledgment) -> Acknowledgment {
        self.view.write().await.last_ack = Some(ack);
        ack
    }
}
