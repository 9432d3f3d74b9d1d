use yew::prelude::*;

use crate::hero::Hero;
use crate::i18n::I18n;
use crate::leads::LeadStoreHandle;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub i18n: I18n,
    pub store: LeadStoreHandle,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <main class="home">
            <Hero i18n={props.i18n.clone()} store={props.store.clone()} />
        </main>
    }
}
