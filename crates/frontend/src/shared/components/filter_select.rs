use leptos::prelude::*;

/// Value of the "all" option
pub const ALL: &str = "all";

/// Compact select used in the filter bar above a table. The first option
/// clears the filter and reports `None`.
#[component]
pub fn FilterSelect(
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Label of the "all" option
    #[prop(into)]
    all_label: String,
    on_change: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            prop:value=move || value.get().unwrap_or_else(|| ALL.to_string())
            on:change=move |ev| {
                let raw = event_target_value(&ev);
                on_change.run(if raw == ALL { None } else { Some(raw) });
            }
        >
            <option value=ALL>{all_label}</option>
            <For
                each=move || options.get()
                key=|(val, _)| val.clone()
                children=move |(val, label)| {
                    let current = val.clone();
                    view! {
                        <option value=val selected=move || value.get().as_deref() == Some(current.as_str())>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}
