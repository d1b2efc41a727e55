use leptos::prelude::*;

/// Labelled on/off switch with an optional hint line
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: Signal<String>,
    #[prop(optional, into)]
    description: MaybeProp<String>,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional)]
    disabled: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = id.get_untracked().unwrap_or_default();
    let wrapper_class = if disabled {
        "form__checkbox-wrapper form__checkbox-wrapper--disabled"
    } else {
        "form__checkbox-wrapper"
    };

    view! {
        <div class=wrapper_class>
            <label class="form__checkbox-label" for=checkbox_id.clone()>
                <span class="form__checkbox-title">{label}</span>
                {move || description.get().map(|d| view! {
                    <span class="form__checkbox-description">{d}</span>
                })}
            </label>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox form__checkbox--switch"
                prop:checked=move || checked.get()
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
        </div>
    }
}
