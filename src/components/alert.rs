//! Single-slot toast alerts. Presenting a new alert replaces whatever is
//! showing; there is never more than one alert node in the document.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const ALERT_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Error,
    Warning,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Warning => "alert-warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

/// Holds at most one alert. Every `present` hands out a fresh id, and
/// `dismiss` ignores stale ids, so an auto-dismiss timer armed for a replaced
/// alert cannot take down its successor.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AlertSlot {
    current: Option<(u32, Alert)>,
    next_id: u32,
}

impl AlertSlot {
    pub fn present(&mut self, message: impl Into<String>, kind: AlertKind) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.current = Some((
            id,
            Alert {
                message: message.into(),
                kind,
            },
        ));
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        if matches!(self.current, Some((current, _)) if current == id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<(u32, &Alert)> {
        self.current.as_ref().map(|(id, alert)| (*id, alert))
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertHostProps {
    pub slot: AlertSlot,
    pub on_dismiss: Callback<u32>,
}

#[function_component(AlertHost)]
pub fn alert_host(props: &AlertHostProps) -> Html {
    let current = props.slot.current();

    // Re-arm the auto-dismiss timer whenever the visible alert changes; the
    // old handle drops with the effect destructor, which cancels it.
    {
        let on_dismiss = props.on_dismiss.clone();
        let active_id = current.map(|(id, _)| id);
        use_effect_with_deps(
            move |id: &Option<u32>| {
                let timer =
                    id.map(|id| Timeout::new(ALERT_DISMISS_MS, move || on_dismiss.emit(id)));
                move || drop(timer)
            },
            active_id,
        );
    }

    match current {
        Some((id, alert)) => {
            let onclick = {
                let on_dismiss = props.on_dismiss.clone();
                Callback::from(move |_| on_dismiss.emit(id))
            };
            html! {
                <div class={classes!("custom-alert", alert.kind.class())}>
                    <div class="alert-content">
                        <span class="alert-message">{ &alert.message }</span>
                        <button class="alert-close" onclick={onclick}>{ "\u{d7}" }</button>
                    </div>
                </div>
            }
        }
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presenting_replaces_the_current_alert() {
        let mut slot = AlertSlot::default();
        slot.present("first", AlertKind::Success);
        slot.present("second", AlertKind::Error);
        let (_, alert) = slot.current().unwrap();
        assert_eq!(alert.message, "second");
        assert_eq!(alert.kind, AlertKind::Error);
    }

    #[test]
    fn stale_dismiss_leaves_the_replacement_alone() {
        let mut slot = AlertSlot::default();
        let first = slot.present("first", AlertKind::Info);
        let second = slot.present("second", AlertKind::Warning);
        slot.dismiss(first);
        assert!(slot.current().is_some());
        slot.dismiss(second);
        assert!(slot.current().is_none());
    }

    #[test]
    fn dismiss_on_empty_slot_is_harmless() {
        let mut slot = AlertSlot::default();
        slot.dismiss(0);
        assert!(slot.current().is_none());
    }
}
