use super::transport::{HttpTransport, Transport};
use super::wire::error_message;
use crate::Result;
use crate::clients::{Client, ClientsResponse};
use crate::metrics::{Diagnostics, Metrics, MetricsResponse, PartialMetrics};
use crate::nutrition::{DailyNutritionLog, DailyNutritionLogsResponse, NutritionPlan, NutritionPlanResponse};
use core::time::Duration;
use ohno::{IntoAppError, bail};
use serde::de::DeserializeOwned;

const LOG_TARGET: &str = "   service";

/// Origin used when none is configured.
pub const DEFAULT_ORIGIN: &str = "https://app.truecoach.co/proxy/api";

/// Request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Role sent with every request when none is configured.
pub const DEFAULT_ROLE: &str = "Trainer";

/// Typed access to the TrueCoach endpoints.
///
/// Every call issues exactly one GET and reads only the first page of any collection.
#[derive(Debug, Clone)]
pub struct Service<T = HttpTransport> {
    transport: T,
}

impl Service<HttpTransport> {
    /// Create a service talking to the public API with default settings.
    pub fn new(token: &str) -> Result<Self> {
        let transport = HttpTransport::new(token, DEFAULT_ORIGIN, DEFAULT_REQUEST_TIMEOUT, DEFAULT_ROLE)?;
        Ok(Self::with_transport(transport))
    }
}

impl<T: Transport> Service<T> {
    #[must_use]
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// All clients of the authenticated trainer with their users and images attached.
    pub async fn clients(&self) -> Result<Vec<Client>> {
        let response: ClientsResponse = self.fetch("/clients", "clients").await?;

        log::debug!(
            target: LOG_TARGET,
            "Decoded page {}/{}: {} client(s), {} user(s), {} image(s)",
            response.page.page,
            response.page.total_pages,
            response.clients.len(),
            response.users.len(),
            response.images.len()
        );

        Ok(response.hydrate())
    }

    /// The assessment groups of a client with every sample resolved.
    ///
    /// # Errors
    ///
    /// Transport and decoding failures come back with empty metrics. Resolution failures come
    /// back with whatever was resolved before the failing record.
    pub async fn metrics(&self, client_id: u64, diagnostics: &dyn Diagnostics) -> Result<Metrics, PartialMetrics> {
        let response: MetricsResponse = self
            .fetch(&format!("/clients/{client_id}/assessment_groups"), "assessment groups")
            .await?;

        log::debug!(
            target: LOG_TARGET,
            "Decoded {} group(s), {} assessment(s), {} item(s) for client {client_id}",
            response.assessment_groups.len(),
            response.assessments.len(),
            response.assessment_items.len()
        );

        response
            .resolve(diagnostics)
            .map_err(|partial| partial.enrich(format!("unable to resolve metrics of client {client_id}")))
    }

    pub async fn client_nutrition_plan(&self, client_id: u64) -> Result<NutritionPlan> {
        let response: NutritionPlanResponse = self
            .fetch(&format!("/clients/{client_id}/nutrition_plan"), "nutrition plan")
            .await?;

        Ok(response.nutrition_plan)
    }

    pub async fn client_daily_nutrition_logs(&self, client_id: u64) -> Result<Vec<DailyNutritionLog>> {
        let response: DailyNutritionLogsResponse = self
            .fetch(&format!("/clients/{client_id}/daily_nutrition_logs"), "daily nutrition logs")
            .await?;

        log::debug!(
            target: LOG_TARGET,
            "Decoded {} daily nutrition log(s) for client {client_id}",
            response.daily_nutrition_logs.len()
        );

        Ok(response.daily_nutrition_logs)
    }

    async fn fetch<R: DeserializeOwned>(&self, path: &str, what: &str) -> Result<R> {
        let payload = self.transport.get(path).await?;

        if let Some(message) = error_message(&payload.body) {
            bail!("API error: {message}");
        }

        if !payload.is_success() {
            bail!("response {}: {}", payload.status, String::from_utf8_lossy(&payload.body));
        }

        serde_json::from_slice(&payload.body).into_app_err_with(|| format!("could not decode {what}"))
    }
}
