//! Optimistic submission flow for the waitlist form.
//!
//! The form shows success immediately, clears itself, and fires the network
//! request in the background. If the request fails the original field values
//! are restored and a warning alert tells the user their data is kept. The
//! flow is a plain two-state machine emitting [`Effect`] values, so the whole
//! sequence is testable without a document or a wall clock; the landing page
//! interprets the effects against its Yew state handles.

use crate::components::alert::AlertKind;
use crate::config::Config;

/// One form submission, captured at submit time and held only until the
/// request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub email_updates: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Delivered,
    Failed,
}

/// UI mutations requested by the flow, applied by the view layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ClearFields,
    RestoreFields(Submission),
    SetButton { label: String, enabled: bool },
    ResetButtonAfter { delay_ms: u32 },
    Notify { kind: AlertKind, message: String },
}

#[derive(Debug, PartialEq, Eq)]
enum Phase {
    Pending,
    Settled,
}

#[derive(Debug)]
pub struct SubmitFlow {
    phase: Phase,
    snapshot: Option<Submission>,
}

impl SubmitFlow {
    /// Enter the pending state for an already-validated submission. The
    /// returned effects apply the optimistic UI before anything is sent:
    /// success alert, cleared fields, and a disabled button showing the
    /// success label (disabling also blocks re-entrant submits).
    pub fn begin(snapshot: Submission, config: &Config) -> (Self, Vec<Effect>) {
        let effects = vec![
            Effect::Notify {
                kind: AlertKind::Success,
                message: config.success_message.to_string(),
            },
            Effect::ClearFields,
            Effect::SetButton {
                label: config.button.success.to_string(),
                enabled: false,
            },
        ];
        let flow = Self {
            phase: Phase::Pending,
            snapshot: Some(snapshot),
        };
        (flow, effects)
    }

    /// Settle the flow once the request outcome is known. Delivered keeps the
    /// optimistic state and only schedules the cosmetic button reset; Failed
    /// rolls the form back to the captured snapshot and warns the user.
    /// Settling twice is a no-op, so a timeout abort and a late response can
    /// never both roll back.
    pub fn settle(&mut self, outcome: Outcome, config: &Config) -> Vec<Effect> {
        if self.phase == Phase::Settled {
            return Vec::new();
        }
        self.phase = Phase::Settled;
        match outcome {
            Outcome::Delivered => vec![Effect::ResetButtonAfter {
                delay_ms: config.button_reset_delay_ms,
            }],
            Outcome::Failed => {
                let mut effects = Vec::new();
                if let Some(snapshot) = self.snapshot.take() {
                    effects.push(Effect::RestoreFields(snapshot));
                }
                effects.push(Effect::SetButton {
                    label: config.button.default.to_string(),
                    enabled: true,
                });
                effects.push(Effect::Notify {
                    kind: AlertKind::Warning,
                    message: config.error_message.to_string(),
                });
                effects
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    fn config() -> Config {
        Config::for_environment(Environment::Production)
    }

    fn submission() -> Submission {
        Submission {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            message: "hi".to_string(),
            email_updates: true,
        }
    }

    #[test]
    fn begin_applies_optimistic_ui_before_the_request() {
        let config = config();
        let (_, effects) = SubmitFlow::begin(submission(), &config);
        assert!(effects.contains(&Effect::ClearFields));
        assert!(effects.contains(&Effect::Notify {
            kind: AlertKind::Success,
            message: config.success_message.to_string(),
        }));
        assert!(effects.contains(&Effect::SetButton {
            label: "SENT".to_string(),
            enabled: false,
        }));
        assert!(!effects
            .iter()
            .any(|e| matches!(e, Effect::RestoreFields(_))));
    }

    #[test]
    fn delivered_outcome_only_schedules_the_button_reset() {
        let config = config();
        let (mut flow, _) = SubmitFlow::begin(submission(), &config);
        let effects = flow.settle(Outcome::Delivered, &config);
        assert_eq!(
            effects,
            vec![Effect::ResetButtonAfter { delay_ms: 2_000 }]
        );
    }

    #[test]
    fn failed_outcome_restores_the_exact_snapshot_and_warns() {
        let config = config();
        let (mut flow, _) = SubmitFlow::begin(submission(), &config);
        let effects = flow.settle(Outcome::Failed, &config);
        assert_eq!(effects[0], Effect::RestoreFields(submission()));
        assert_eq!(
            effects[1],
            Effect::SetButton {
                label: "SEND".to_string(),
                enabled: true,
            }
        );
        assert_eq!(
            effects[2],
            Effect::Notify {
                kind: AlertKind::Warning,
                message: config.error_message.to_string(),
            }
        );
    }

    #[test]
    fn settling_twice_is_a_no_op() {
        // A timed-out request can still produce a late response; only the
        // first settlement may mutate the UI.
        let config = config();
        let (mut flow, _) = SubmitFlow::begin(submission(), &config);
        let first = flow.settle(Outcome::Failed, &config);
        assert!(!first.is_empty());
        assert!(flow.settle(Outcome::Failed, &config).is_empty());
        assert!(flow.settle(Outcome::Delivered, &config).is_empty());
    }
}
