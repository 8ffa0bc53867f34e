//! Cookie consent banner, hidden permanently once accepted. The flag lives in
//! `localStorage`; a storage failure just means the banner shows again.

use yew::prelude::*;

const COOKIE_ACCEPTED_KEY: &str = "cookieAccepted";

pub fn should_show(stored_flag: Option<&str>) -> bool {
    stored_flag != Some("true")
}

fn read_flag() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(COOKIE_ACCEPTED_KEY)
        .ok()?
}

fn persist_flag() {
    if let Some(storage) = web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten()
    {
        let _ = storage.set_item(COOKIE_ACCEPTED_KEY, "true");
    }
}

#[function_component(CookieNotice)]
pub fn cookie_notice() -> Html {
    let visible = use_state(|| should_show(read_flag().as_deref()));

    let on_accept = {
        let visible = visible.clone();
        Callback::from(move |_| {
            persist_flag();
            visible.set(false);
        })
    };

    if !*visible {
        return html! {};
    }
    html! {
        <div class="cookie-notice">
            <p>{"We use local storage to remember your preferences. By continuing you accept this."}</p>
            <button class="cookie-accept" onclick={on_accept}>{"Accept"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_until_the_flag_is_set() {
        assert!(should_show(None));
        assert!(should_show(Some("false")));
        assert!(should_show(Some("")));
        assert!(!should_show(Some("true")));
    }
}
