//! Tests for ticket intake defaults.

use std::sync::Arc;

use super::{IntakeConfig, TicketIntakeService};
use crate::department::domain::{Department, DepartmentId};
use crate::test_support::{ManualClock, new_year_2024};
use crate::ticket::{
    adapters::memory::InMemoryTicketMirror,
    domain::TicketPriority,
    services::{CreateTicketRequest, TicketStore},
};
use chrono::TimeDelta;
use rstest::{fixture, rstest};

type TestIntake = TicketIntakeService<InMemoryTicketMirror, ManualClock>;

#[fixture]
fn departments() -> Vec<Department> {
    vec![
        Department::new(DepartmentId::new(1), "T.I"),
        Department::new(DepartmentId::new(2), "Financeiro"),
        Department::new(DepartmentId::new(3), "RH"),
        Department::new(DepartmentId::new(4), "Producao"),
    ]
}

#[fixture]
fn intake() -> TestIntake {
    let store = TicketStore::open(
        Arc::new(InMemoryTicketMirror::new()),
        Arc::new(ManualClock::at(new_year_2024())),
    );
    TicketIntakeService::new(Arc::new(store))
}

#[rstest]
fn blank_department_is_filled_from_ticket_text(intake: TestIntake, departments: Vec<Department>) {
    let request = CreateTicketRequest::new("Boleto vencido", TicketPriority::Medium, "bob")
        .with_description("Pagamento da nota fiscal em atraso");

    let ticket = intake.open_ticket(request, &departments);

    assert_eq!(ticket.department(), "Financeiro");
    assert_eq!(ticket.sla_deadline(), None);
}

#[rstest]
fn explicit_department_is_kept(intake: TestIntake, departments: Vec<Department>) {
    let request = CreateTicketRequest::new("Boleto vencido", TicketPriority::Medium, "bob")
        .with_department("RH");

    let ticket = intake.open_ticket(request, &departments);

    assert_eq!(ticket.department(), "RH");
}

#[rstest]
fn unmatched_text_leaves_department_blank(intake: TestIntake, departments: Vec<Department>) {
    let request = CreateTicketRequest::new("Solicitacao generica", TicketPriority::Low, "carol");

    let ticket = intake.open_ticket(request, &departments);

    assert_eq!(ticket.department(), "");
    assert_eq!(intake.store().len(), 1);
}

#[rstest]
fn passthrough_config_skips_classification(intake: TestIntake, departments: Vec<Department>) {
    let passthrough = intake.with_config(IntakeConfig::passthrough());
    let request = CreateTicketRequest::new("Erro no servidor", TicketPriority::High, "dave");

    let ticket = passthrough.open_ticket(request, &departments);

    assert_eq!(ticket.department(), "");
}

#[rstest]
#[case(TicketPriority::Critical, 2)]
#[case(TicketPriority::Low, 72)]
fn priority_sla_sets_missing_deadline(
    intake: TestIntake,
    #[case] priority: TicketPriority,
    #[case] hours: i64,
) {
    let configured = intake.with_config(IntakeConfig::with_priority_sla());
    let request = CreateTicketRequest::new("Servidor fora do ar", priority, "erin");

    let ticket = configured.open_ticket(request, &[]);

    assert_eq!(
        ticket.sla_deadline(),
        Some(new_year_2024() + TimeDelta::hours(hours))
    );
}

#[rstest]
fn priority_sla_keeps_explicit_deadline(intake: TestIntake) {
    let configured = intake.with_config(IntakeConfig::with_priority_sla());
    let deadline = new_year_2024() + TimeDelta::days(10);
    let request = CreateTicketRequest::new("Servidor fora do ar", TicketPriority::Critical, "erin")
        .with_sla_deadline(deadline);

    let ticket = configured.open_ticket(request, &[]);

    assert_eq!(ticket.sla_deadline(), Some(deadline));
}

#[rstest]
fn suggestion_is_available_without_creating(intake: TestIntake, departments: Vec<Department>) {
    let suggestion = intake.suggest_department("Impressora sem rede", "", &departments);

    assert_eq!(suggestion.map(Department::name), Some("T.I"));
    assert!(intake.store().is_empty());
}
