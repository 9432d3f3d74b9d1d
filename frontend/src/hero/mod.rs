//! Landing hero with the lead capture form.

pub mod form;
pub mod view;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::ui::{Button, Label, TextInput};
use crate::i18n::I18n;
use crate::leads::{LeadSource, LeadStoreHandle};
use form::{settle_submission, Field, FormAction, LeadForm, Phase};
use view::{Reveal, HERO_CSS};

/// Time between mounting a branch and starting its entry transitions.
const REVEAL_DELAY_MS: u32 = 30;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub i18n: I18n,
    pub store: LeadStoreHandle,
}

struct FieldMeta {
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
    required: bool,
}

fn field_meta(field: Field) -> FieldMeta {
    match field {
        Field::FullName => FieldMeta {
            label: "hero.form.nameLabel",
            placeholder: "hero.form.namePlaceholder",
            input_type: "text",
            required: true,
        },
        Field::Email => FieldMeta {
            label: "hero.form.emailLabel",
            placeholder: "hero.form.emailPlaceholder",
            input_type: "email",
            required: true,
        },
        Field::Phone => FieldMeta {
            label: "hero.form.phoneLabel",
            placeholder: "hero.form.phonePlaceholder",
            input_type: "tel",
            required: false,
        },
    }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroProps { i18n, store } = props;
    let form = use_reducer(LeadForm::default);
    // Which branch (editing or confirmation) has started its entry transition.
    let revealed_branch = use_state(|| None::<bool>);

    {
        let revealed_branch = revealed_branch.clone();
        use_effect_with_deps(
            move |submitted: &bool| {
                let submitted = *submitted;
                let timeout = Timeout::new(REVEAL_DELAY_MS, move || {
                    revealed_branch.set(Some(submitted));
                });
                move || drop(timeout)
            },
            form.is_submitted(),
        );
    }
    let revealed = *revealed_branch == Some(form.is_submitted());

    if form.is_submitted() {
        return view::confirmation(i18n, revealed);
    }

    let onsubmit = {
        let form = form.clone();
        let store = store.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.phase != Phase::Editing {
                return;
            }
            let lead = form.fields.to_lead(LeadSource::HeroSection);
            let dispatcher = form.dispatcher();
            dispatcher.dispatch(FormAction::Submit);

            let store = store.clone();
            spawn_local(async move {
                let settled = settle_submission(&store, lead).await;
                dispatcher.dispatch(settled);
            });
        })
    };

    let field_row = |field: Field| {
        let meta = field_meta(field);
        let oninput = {
            let dispatcher = form.dispatcher();
            Callback::from(move |value: String| {
                dispatcher.dispatch(FormAction::Update(field, value));
            })
        };
        html! {
            <div class="hero-field">
                <Label html_for={field.id()}>{ i18n.t(meta.label) }</Label>
                <TextInput
                    id={field.id()}
                    value={form.fields.get(field).to_string()}
                    input_type={meta.input_type}
                    placeholder={i18n.t(meta.placeholder)}
                    required={meta.required}
                    {oninput}
                />
            </div>
        }
    };

    let button_content = if form.is_busy() {
        html! {
            <>
                <span class="hero-spinner"></span>
                <span>{ i18n.t("hero.form.submitting") }</span>
            </>
        }
    } else {
        html! {
            <>
                <span>{ i18n.t("hero.form.button") }</span>
                { view::arrow_icon() }
            </>
        }
    };

    let direction = i18n.direction();

    html! {
        <section class="hero-section" dir={direction.as_str()}>
            <style>{HERO_CSS}</style>
            <div class="hero-blob top"></div>
            <div class="hero-blob bottom"></div>

            <div class="hero-container">
                <div class="hero-grid">
                    { view::marketing_copy(i18n, revealed) }

                    <div class="hero-form-column" style={Reveal::form_column(direction).style(revealed)}>
                        <div class="hero-card">
                            <div class="hero-card-header">
                                { view::calendar_icon() }
                                <h3>{ i18n.t("hero.form.title") }</h3>
                                <p>{ i18n.t("hero.form.subtitle") }</p>
                            </div>

                            <form class="hero-form" {onsubmit}>
                                { for Field::ALL.into_iter().map(field_row) }
                                <Button button_type="submit" disabled={!form.can_submit()}>
                                    { button_content }
                                </Button>
                            </form>

                            <p class="hero-privacy">{ i18n.t("hero.form.privacy") }</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_phone_is_optional() {
        for field in Field::ALL {
            assert_eq!(field_meta(field).required, field != Field::Phone);
        }
    }

    #[test]
    fn inputs_hint_their_content_type() {
        assert_eq!(field_meta(Field::FullName).input_type, "text");
        assert_eq!(field_meta(Field::Email).input_type, "email");
        assert_eq!(field_meta(Field::Phone).input_type, "tel");
    }

    #[test]
    fn field_ids_match_lead_wire_names() {
        let lead = form::FormState::default().to_lead(LeadSource::HeroSection);
        let value = serde_json::to_value(&lead).unwrap();
        for field in Field::ALL {
            assert!(value.get(field.id()).is_some());
        }
    }
}
