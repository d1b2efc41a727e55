use super::{field_error, field_label, group_class};
use leptos::prelude::*;

/// Numeric input. Text that does not parse keeps the last valid value.
#[component]
pub fn NumberInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<f64>,
    on_input: Callback<f64>,
    #[prop(optional)]
    min: Option<f64>,
    #[prop(optional)]
    max: Option<f64>,
    #[prop(optional)]
    step: Option<f64>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let input_id = id.get_untracked().unwrap_or_default();

    view! {
        <div class=group_class(error)>
            {field_label(label, required, input_id.clone())}
            <input
                id=input_id
                type="number"
                class="form__input"
                class:form__input--invalid=move || error.get().is_some()
                min=min.map(|v| v.to_string())
                max=max.map(|v| v.to_string())
                step=step.unwrap_or(1.0).to_string()
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(parsed) = event_target_value(&ev).trim().parse::<f64>() {
                        on_input.run(parsed);
                    }
                }
            />
            {field_error(error)}
        </div>
    }
}
