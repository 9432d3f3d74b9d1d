use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_else(|| "button".to_string())]
    pub button_type: String,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type={props.button_type.clone()}
            class="ui-button"
            disabled={props.disabled}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub id: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or_else(|| AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

/// Controlled text input: reports every keystroke as the full new value.
#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let on_value = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_value.emit(input.value());
        })
    };

    html! {
        <input
            id={props.id.clone()}
            name={props.id.clone()}
            class="ui-input"
            type={props.input_type.clone()}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            required={props.required}
            disabled={props.disabled}
            {oninput}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct LabelProps {
    pub html_for: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Label)]
pub fn label(props: &LabelProps) -> Html {
    html! {
        <label class="ui-label" for={props.html_for.clone()}>
            { for props.children.iter() }
        </label>
    }
}
