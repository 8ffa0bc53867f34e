mod components;
mod config;
mod pages;
mod submit;
mod utils;
mod validator;

use std::rc::Rc;

use gloo_console::log;
use yew::prelude::*;

use crate::config::Config;
use crate::pages::landing::Landing;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<Config>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<Config>> context={props.config.clone()}>
            <Landing />
        </ContextProvider<Rc<Config>>>
    }
}

fn main() {
    let config = Rc::new(Config::load());
    if config.debug_mode {
        log!("config:", format!("{config:?}"));
    }
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
