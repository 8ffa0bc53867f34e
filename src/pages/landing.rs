use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::alert::{AlertHost, AlertKind, AlertSlot};
use crate::components::cookie_notice::CookieNotice;
use crate::components::scroll_reveal::use_scroll_reveal;
use crate::config::Config;
use crate::submit::{Effect, Outcome, Submission, SubmitFlow};
use crate::utils::api::{self, WaitlistRequest};
use crate::validator;

#[derive(Clone, PartialEq)]
struct ButtonUi {
    label: String,
    enabled: bool,
}

/// The state handles the submission flow mutates. Effects from [`SubmitFlow`]
/// are interpreted here instead of reaching into the DOM directly.
#[derive(Clone)]
struct LandingView {
    name: UseStateHandle<String>,
    email: UseStateHandle<String>,
    message: UseStateHandle<String>,
    email_updates: UseStateHandle<bool>,
    button: UseStateHandle<ButtonUi>,
    alerts: UseStateHandle<AlertSlot>,
    reset_timer: Rc<RefCell<Option<Timeout>>>,
    config: Rc<Config>,
}

impl LandingView {
    fn notify(&self, kind: AlertKind, message: impl Into<String>) {
        let mut slot = (*self.alerts).clone();
        slot.present(message, kind);
        self.alerts.set(slot);
    }

    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ClearFields => {
                    self.name.set(String::new());
                    self.email.set(String::new());
                    self.message.set(String::new());
                    self.email_updates.set(false);
                }
                Effect::RestoreFields(submission) => {
                    self.name.set(submission.name);
                    self.email.set(submission.email);
                    self.message.set(submission.message);
                    self.email_updates.set(submission.email_updates);
                }
                Effect::SetButton { label, enabled } => {
                    self.button.set(ButtonUi { label, enabled });
                }
                Effect::ResetButtonAfter { delay_ms } => {
                    let button = self.button.clone();
                    let label = self.config.button.default.to_string();
                    let timer = Timeout::new(delay_ms, move || {
                        button.set(ButtonUi {
                            label,
                            enabled: true,
                        });
                    });
                    // Replacing the handle cancels any timer still pending
                    *self.reset_timer.borrow_mut() = Some(timer);
                }
                Effect::Notify { kind, message } => self.notify(kind, message),
            }
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_context::<Rc<Config>>().expect("config context not provided");

    let view = LandingView {
        name: use_state(String::new),
        email: use_state(String::new),
        message: use_state(String::new),
        email_updates: use_state(|| false),
        button: use_state({
            let config = config.clone();
            move || ButtonUi {
                label: config.button.default.to_string(),
                enabled: true,
            }
        }),
        alerts: use_state(AlertSlot::default),
        reset_timer: use_mut_ref(|| None),
        config,
    };
    let flow = use_mut_ref(|| None::<SubmitFlow>);

    let subtitle_ref = use_node_ref();
    let coming_soon_ref = use_node_ref();
    let waitlist_ref = use_node_ref();
    use_scroll_reveal(vec![
        subtitle_ref.clone(),
        coming_soon_ref.clone(),
        waitlist_ref.clone(),
    ]);

    let on_dismiss = {
        let alerts = view.alerts.clone();
        Callback::from(move |id: u32| {
            let mut slot = (*alerts).clone();
            slot.dismiss(id);
            alerts.set(slot);
        })
    };

    let onsubmit = {
        let view = view.clone();
        let flow = flow.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let view = view.clone();
            let flow = flow.clone();
            let config = view.config.clone();

            let snapshot = Submission {
                name: (*view.name).clone(),
                email: (*view.email).clone(),
                message: (*view.message).clone(),
                email_updates: *view.email_updates,
            };
            if !validator::has_required_fields(&snapshot.name, &snapshot.email) {
                view.notify(AlertKind::Error, "Please fill in all required fields.");
                return;
            }
            if !validator::is_valid_email(&snapshot.email) {
                view.notify(AlertKind::Error, "Please enter a valid email address.");
                return;
            }

            // Optimistic path: the UI flips to success before the request
            // leaves, and the snapshot comes back only on failure.
            let request = WaitlistRequest::from(&snapshot);
            let (started, effects) = SubmitFlow::begin(snapshot, &config);
            *flow.borrow_mut() = Some(started);
            view.apply(effects);

            spawn_local(async move {
                let outcome = match api::join_waitlist(&config, &request).await {
                    Ok(_) => {
                        if config.debug_mode {
                            log!("waitlist submission delivered");
                        }
                        Outcome::Delivered
                    }
                    Err(err) => {
                        if config.debug_mode {
                            log!("waitlist submission failed:", err.to_string());
                        }
                        Outcome::Failed
                    }
                };
                let effects = flow
                    .borrow_mut()
                    .as_mut()
                    .map(|flow| flow.settle(outcome, &config))
                    .unwrap_or_default();
                view.apply(effects);
            });
        })
    };

    let oninput_name = {
        let name = view.name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let oninput_email = {
        let email = view.email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let oninput_message = {
        let message = view.message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };
    let onchange_updates = {
        let email_updates = view.email_updates.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email_updates.set(input.checked());
        })
    };

    let button = (*view.button).clone();
    html! {
        <div class="landing-page">
            <AlertHost slot={(*view.alerts).clone()} on_dismiss={on_dismiss} />
            <header class="hero">
                <h1 class="hero-title">{"Meridian"}</h1>
                <p class="hero-tagline">
                    {"Investment intelligence that works while you sleep."}
                </p>
            </header>
            <section class="subtitle-section reveal" ref={subtitle_ref}>
                <h2>{"Clarity over noise"}</h2>
                <p>
                    {"Meridian distills market movements, filings, and sentiment \
                      into a daily briefing you can read with your morning coffee."}
                </p>
            </section>
            <section class="coming-soon reveal" ref={coming_soon_ref}>
                <h2>{"Coming soon"}</h2>
                <p>
                    {"We are onboarding early users in small batches. Join the \
                      waitlist and we will reach out when your spot opens up."}
                </p>
            </section>
            <section class="waitlist-section reveal" ref={waitlist_ref}>
                <h2>{"Join the waitlist"}</h2>
                <form class="waitlist-form" onsubmit={onsubmit}>
                    <input
                        type="text"
                        name="name"
                        placeholder="Name *"
                        required={true}
                        value={(*view.name).clone()}
                        oninput={oninput_name}
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Email *"
                        required={true}
                        value={(*view.email).clone()}
                        oninput={oninput_email}
                    />
                    <textarea
                        name="message"
                        placeholder="Anything you want us to know? (optional)"
                        value={(*view.message).clone()}
                        oninput={oninput_message}
                    />
                    <label class="checkbox-row">
                        <input
                            type="checkbox"
                            checked={*view.email_updates}
                            onchange={onchange_updates}
                        />
                        {"Send me occasional email updates"}
                    </label>
                    <button type="submit" class="send-btn" disabled={!button.enabled}>
                        { button.label }
                    </button>
                </form>
            </section>
            <footer class="site-footer">
                <p>{"\u{a9} 2026 Meridian Labs"}</p>
            </footer>
            <CookieNotice />
        </div>
    }
}
