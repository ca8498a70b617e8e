use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;

use crate::booking::draft::{AppointmentDraft, Confirmation};
use crate::booking::fields::FormState;
use crate::config::SiteConfig;
use crate::error::BookingError;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Success(Confirmation),
}

impl SubmitPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitPhase::Submitting)
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        match self {
            SubmitPhase::Success(confirmation) => Some(confirmation),
            _ => None,
        }
    }
}

/// Hard lock against a second submit while one is pending. The disabled
/// button alone does not stop clicks queued before the re-render.
#[derive(Clone, Debug, Default)]
pub struct SubmissionGuard(Rc<Cell<bool>>);

/// Held for the lifetime of one submission; releases the guard on drop.
#[derive(Debug)]
pub struct InFlight(Rc<Cell<bool>>);

impl SubmissionGuard {
    pub fn begin(&self) -> Result<InFlight, BookingError> {
        if self.0.replace(true) {
            return Err(BookingError::AlreadySubmitting);
        }
        Ok(InFlight(self.0.clone()))
    }

    pub fn is_busy(&self) -> bool {
        self.0.get()
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Everything a submit does before waiting on the dispatch: takes the guard,
/// re-validates the form and moves the phase to `Submitting`. On rejection
/// the phase is untouched and the guard is released again.
pub fn begin_submission(
    guard: &SubmissionGuard,
    form: &mut FormState,
    phase: &mut SubmitPhase,
) -> Result<(InFlight, AppointmentDraft), BookingError> {
    let in_flight = guard.begin()?;
    let draft = form.check_all()?;
    *phase = SubmitPhase::Submitting;
    Ok((in_flight, draft))
}

/// Shows the confirmation and clears the form for a repeat booking.
pub fn complete_submission(
    phase: &mut SubmitPhase,
    form: &mut FormState,
    confirmation: Confirmation,
) {
    *phase = SubmitPhase::Success(confirmation);
    form.reset();
}

/// Stand-in for the booking backend: waits out a fixed latency and hands
/// back the confirmation. A networked sender only has to keep this
/// signature.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedDispatch {
    latency_ms: u32,
    host: &'static str,
    recipient: &'static str,
}

impl SimulatedDispatch {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            latency_ms: config.submit_latency_ms,
            host: config.messaging_host,
            recipient: config.recipient_id,
        }
    }

    pub async fn send(&self, draft: AppointmentDraft) -> Result<Confirmation, BookingError> {
        TimeoutFuture::new(self.latency_ms).await;
        Ok(draft.confirm(self.host, self.recipient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::fields::{FieldId, Validity};

    fn filled() -> FormState {
        let mut form = FormState::new("+92 ");
        form.input(FieldId::Name, "Ali".to_string());
        form.input(FieldId::Phone, "+92 300 1234567".to_string());
        form.input(FieldId::Service, "Consult".to_string());
        form.input(FieldId::Date, "2025-01-01".to_string());
        form.input(FieldId::Time, "10:00".to_string());
        form
    }

    #[test]
    fn test_rejected_submit_keeps_form_usable() {
        let guard = SubmissionGuard::default();
        let mut form = filled();
        form.input(FieldId::Time, String::new());
        let mut phase = SubmitPhase::Idle;

        let err = begin_submission(&guard, &mut form, &mut phase).unwrap_err();
        assert_eq!(err, BookingError::Incomplete { fields: vec![FieldId::Time] });
        assert_eq!(phase, SubmitPhase::Idle);
        assert!(phase.confirmation().is_none());
        assert!(!guard.is_busy());

        form.input(FieldId::Time, "10:00".to_string());
        assert!(begin_submission(&guard, &mut form, &mut phase).is_ok());
    }

    #[test]
    fn test_accepted_submit_holds_guard_until_done() {
        let guard = SubmissionGuard::default();
        let mut form = filled();
        let mut phase = SubmitPhase::Idle;

        let (in_flight, draft) = begin_submission(&guard, &mut form, &mut phase).unwrap();
        assert_eq!(phase, SubmitPhase::Submitting);
        assert!(guard.is_busy());
        assert_eq!(
            begin_submission(&guard, &mut form, &mut phase).unwrap_err(),
            BookingError::AlreadySubmitting
        );

        complete_submission(&mut phase, &mut form, draft.confirm("wa.me", "923367251204"));
        drop(in_flight);
        assert_eq!(phase.confirmation().map(|c| c.name.as_str()), Some("Ali"));
        assert!(!guard.is_busy());
        for id in FieldId::ALL {
            assert_eq!(form.value(id), "");
            assert_eq!(form.validity(id), Validity::Unvalidated);
        }
    }

    #[test]
    fn test_guard_rejects_second_submit() {
        let guard = SubmissionGuard::default();
        let first = guard.begin().unwrap();
        assert!(guard.is_busy());
        assert_eq!(guard.clone().begin().unwrap_err(), BookingError::AlreadySubmitting);
        drop(first);
        assert!(!guard.is_busy());
        assert!(guard.begin().is_ok());
    }

    #[test]
    fn test_guard_shared_between_clones() {
        let guard = SubmissionGuard::default();
        let handle = guard.clone();
        let _flight = handle.begin().unwrap();
        assert!(guard.begin().is_err());
    }

    #[test]
    fn test_phase_accessors() {
        assert!(!SubmitPhase::Idle.is_submitting());
        assert!(SubmitPhase::Submitting.is_submitting());
        let confirmation = Confirmation {
            name: "Ali".to_string(),
            service: "Consult".to_string(),
            date: "2025-01-01".to_string(),
            time: "10:00".to_string(),
            link: "https://wa.me/1?text=x".to_string(),
        };
        let done = SubmitPhase::Success(confirmation.clone());
        assert_eq!(done.confirmation(), Some(&confirmation));
        assert_eq!(SubmitPhase::Idle.confirmation(), None);
    }

    #[test]
    fn test_dispatch_reads_config() {
        let dispatch = SimulatedDispatch::from_config(&SiteConfig::default());
        assert_eq!(dispatch.latency_ms, 1_000);
        assert_eq!(dispatch.host, "wa.me");
    }
}
