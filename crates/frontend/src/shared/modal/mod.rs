use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Dialog bound to an open flag, usually `ModalControl::signal()` or
/// `CrudStore::open_signal()`.
#[component]
pub fn Modal(
    #[prop(into)]
    open: Signal<bool>,
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close (Escape, overlay, close button)
    on_close: Callback<()>,
    /// Optional footer buttons (Save, Cancel, etc.)
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    #[prop(optional)]
    wide: bool,
    /// Modal content
    children: ChildrenFn,
) -> impl IntoView {
    // Handle Escape key
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && open.get_untracked() {
                    on_close.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let children = StoredValue::new(children);
    let modal_class = if wide { "modal modal--wide" } else { "modal" };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class=modal_class on:click=stop_propagation role="dialog">
                    <div class="modal-header">
                        <h2 class="modal-title">{move || title.get()}</h2>
                        <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                    <div class="modal-body">
                        {children.with_value(|c| c())}
                    </div>
                    {footer.clone().map(|f| view! {
                        <div class="modal-footer">{f.run()}</div>
                    })}
                </div>
            </div>
        </Show>
    }
}
