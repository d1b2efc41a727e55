use crate::shared::components::ui::Button;
use crate::shared::modal::Modal;
use leptos::prelude::*;

/// Confirmation dialog for a destructive action on one named record
#[component]
pub fn ConfirmDelete(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    title: Signal<String>,
    /// Name of the record about to be removed
    #[prop(into)]
    record_name: Signal<String>,
    #[prop(optional, into)]
    message: MaybeProp<String>,
    #[prop(optional, into)]
    confirm_label: MaybeProp<String>,
    #[prop(optional, into)]
    cancel_label: MaybeProp<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let footer = move || {
        view! {
            <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                {move || cancel_label.get().unwrap_or_else(|| "Cancel".to_string())}
            </Button>
            <Button variant="danger" icon_name="trash" on_click=Callback::new(move |_| on_confirm.run(()))>
                {move || confirm_label.get().unwrap_or_else(|| "Delete".to_string())}
            </Button>
        }
    };

    view! {
        <Modal open=open title=title on_close=on_cancel footer=footer>
            <p class="confirm-delete__message">
                {move || message.get().unwrap_or_else(|| "Are you sure you want to delete".to_string())}
                " "
                <strong>{move || record_name.get()}</strong>
                "?"
            </p>
        </Modal>
    }
}
