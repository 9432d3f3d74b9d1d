use log::info;
use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod hero;
pub mod i18n;
pub mod leads;
pub mod pages;

use i18n::{I18n, Language};
use leads::{HttpLeadStore, LeadStoreHandle};
use pages::{home::Home, not_found::NotFound};

/// Local storage key holding the visitor's language choice.
pub const LANGUAGE_KEY: &str = "language";

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, i18n: &I18n, store: &LeadStoreHandle) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home i18n={i18n.clone()} store={store.clone()} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound i18n={i18n.clone()} /> }
        }
    }
}

/// First visit: follow the browser, falling back to English.
pub fn detect_browser_language() -> Language {
    window()
        .and_then(|w| w.navigator().language())
        .and_then(|tag| Language::from_code(&tag))
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub i18n: I18n,
    pub on_switch_language: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { i18n, on_switch_language } = props;

    let switch_language = {
        let on_switch_language = on_switch_language.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_switch_language.emit(());
        })
    };

    html! {
        <nav class="top-nav" dir={i18n.direction().as_str()}
            style="position: fixed; top: 0; left: 0; right: 0; z-index: 20; display: flex; justify-content: space-between; align-items: center; padding: 1rem 1.5rem; background: rgba(255, 255, 255, 0.8); backdrop-filter: blur(8px);">
            <Link<Route> to={Route::Home} classes="nav-logo">
                { i18n.t("nav.brand") }
            </Link<Route>>
            <button class="nav-language" lang={i18n.language().other().code()} onclick={switch_language}
                style="border: 1px solid #e2e8f0; border-radius: 9999px; background: #fff; padding: 0.25rem 0.75rem; cursor: pointer;">
                { i18n.t("nav.switchLanguage") }
            </button>
        </nav>
    }
}

#[function_component]
pub fn App() -> Html {
    let stored_language = use_local_storage::<Language>(LANGUAGE_KEY.to_string());
    let language = (*stored_language).unwrap_or_else(detect_browser_language);
    let i18n = use_memo(|language| I18n::bundled(*language), language);
    let store = use_memo(|_| LeadStoreHandle::new(HttpLeadStore::default()), ());

    // Keep the document's own lang/dir in step with the page.
    use_effect_with_deps(
        |language: &Language| {
            let root = window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element());
            if let Some(root) = root {
                for (name, value) in [("lang", language.code()), ("dir", language.direction().as_str())] {
                    if let Err(err) = root.set_attribute(name, value) {
                        log::warn!("Failed to set {} on <html>: {:?}", name, err);
                    }
                }
            }
            info!("Language set to {}", language.code());
            || ()
        },
        language,
    );

    let on_switch_language = {
        let stored_language = stored_language.clone();
        Callback::from(move |_: ()| stored_language.set(language.other()))
    };

    let render = {
        let i18n = (*i18n).clone();
        let store = (*store).clone();
        Callback::from(move |route: Route| switch(route, &i18n, &store))
    };

    html! {
        <BrowserRouter>
            <Nav i18n={(*i18n).clone()} {on_switch_language} />
            <Switch<Route> {render} />
        </BrowserRouter>
    }
}
