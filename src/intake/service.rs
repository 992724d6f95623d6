//! Ticket intake: classification and SLA defaults ahead of creation.

use super::IntakeConfig;
use crate::department::{domain::Department, services::DepartmentClassifier};
use crate::ticket::{
    domain::Ticket,
    ports::TicketMirror,
    services::{CreateTicketRequest, TicketStore},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Opens tickets, pre-filling what the requester left unset.
pub struct TicketIntakeService<M, C>
where
    M: TicketMirror,
    C: Clock + Send + Sync,
{
    store: Arc<TicketStore<M, C>>,
    classifier: Arc<DepartmentClassifier>,
    config: IntakeConfig,
}

impl<M, C> TicketIntakeService<M, C>
where
    M: TicketMirror,
    C: Clock + Send + Sync,
{
    /// Creates an intake service with the built-in classifier and default
    /// configuration.
    #[must_use]
    pub fn new(store: Arc<TicketStore<M, C>>) -> Self {
        Self {
            store,
            classifier: Arc::new(DepartmentClassifier::default()),
            config: IntakeConfig::default(),
        }
    }

    /// Replaces the classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Arc<DepartmentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: IntakeConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &Arc<TicketStore<M, C>> {
        &self.store
    }

    /// Suggests a department for manual-selection flows.
    #[must_use]
    pub fn suggest_department<'a>(
        &self,
        title: &str,
        description: &str,
        departments: &'a [Department],
    ) -> Option<&'a Department> {
        self.classifier.classify(title, description, departments)
    }

    /// Opens a ticket after applying the configured defaults.
    ///
    /// A blank department is filled from the classifier when it finds a
    /// match among `departments`; otherwise it stays blank for manual
    /// selection. A missing deadline becomes now plus the priority's
    /// resolution window when priority SLA is enabled.
    pub fn open_ticket(
        &self,
        request: CreateTicketRequest,
        departments: &[Department],
    ) -> Ticket {
        let mut prepared = request;

        if self.config.classify_blank_department && prepared.department().trim().is_empty() {
            if let Some(department) =
                self.suggest_department(prepared.title(), prepared.description(), departments)
            {
                debug!(department = department.name(), "department suggested from ticket text");
                prepared = prepared.with_department(department.name());
            }
        }

        if self.config.apply_priority_sla && prepared.sla_deadline().is_none() {
            let deadline = self.store.now() + prepared.priority().resolution_window();
            prepared = prepared.with_sla_deadline(deadline);
        }

        self.store.create(prepared)
    }
}
