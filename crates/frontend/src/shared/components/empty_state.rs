use crate::shared::icons::icon;
use leptos::prelude::*;

/// Placeholder shown instead of an empty table
#[component]
pub fn EmptyState(
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    description: Signal<String>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon("inbox")}</div>
            <h3 class="empty-state__title">{move || title.get()}</h3>
            <p class="empty-state__description">{move || description.get()}</p>
            {children.map(|c| view! { <div class="empty-state__actions">{c()}</div> })}
        </div>
    }
}
