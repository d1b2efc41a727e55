use leptos::prelude::*;

/// Title row of a page with actions on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: Signal<String>,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Action buttons
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header page-header">
            <div class="page-header__text">
                <h1 class="page__title page-header__title">{move || title.get()}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
