//! Reusable UI components

use patternfly_yew::prelude::*;
use uuid::Uuid;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconRowFieldProps {
    pub id: Uuid,
    pub value: String,
    pub on_input: Callback<(Uuid, String)>,
    pub on_remove: Callback<Uuid>,
}

/// One icon URL input plus the control that removes it
#[function_component(IconRowField)]
pub fn icon_row_field(props: &IconRowFieldProps) -> Html {
    let oninput = {
        let id = props.id;
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_input.emit((id, input.value()));
            }
        })
    };

    let onclick = {
        let id = props.id;
        let on_remove = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(id))
    };

    html! {
        <div class="icon-field">
            <input
                type="text"
                class="iconInput"
                placeholder="Enter icon URL"
                value={props.value.clone()}
                {oninput}
            />
            <Button class={classes!("removeIcon")} {onclick} variant={ButtonVariant::Secondary}>
                {"×"}
            </Button>
        </div>
    }
}
