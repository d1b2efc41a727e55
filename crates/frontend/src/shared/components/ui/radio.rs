use leptos::prelude::*;

/// Vertical radio group; options are `(value, label)` pairs
#[component]
pub fn RadioGroup(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Name attribute shared by the inputs
    name: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <div class="form__radio-group form__radio-group--vertical">
                {options.into_iter().map(|(val, lbl)| {
                    let radio_id = format!("{}-{}", name, val);
                    view! {
                        <div class="form__radio-wrapper">
                            <input
                                id=radio_id.clone()
                                type="radio"
                                class="form__radio"
                                name=name
                                value=val
                                prop:checked=move || value.get() == val
                                on:change=move |_| on_change.run(val.to_string())
                            />
                            <label class="form__radio-label" for=radio_id>{lbl}</label>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
