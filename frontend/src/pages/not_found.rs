use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::I18n;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub i18n: I18n,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    let i18n = &props.i18n;
    html! {
        <main class="not-found" dir={i18n.direction().as_str()}
            style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
            <h1>{ i18n.t("notFound.title") }</h1>
            <Link<Route> to={Route::Home}>{ i18n.t("notFound.back") }</Link<Route>>
        </main>
    }
}
