pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod number_input;
pub mod radio;
pub mod select;
pub mod textarea;

pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use number_input::NumberInput;
pub use radio::RadioGroup;
pub use select::Select;
pub use textarea::Textarea;

use leptos::prelude::*;

/// Label with a required marker
pub(crate) fn field_label(label: MaybeProp<String>, required: bool, for_id: String) -> impl IntoView {
    move || {
        let for_id = for_id.clone();
        label.get().map(|l| view! {
            <label class="form__label" for=for_id>
                {l}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
        })
    }
}

/// Inline validation message under a field
pub(crate) fn field_error(error: MaybeProp<String>) -> impl IntoView {
    move || error.get().map(|e| view! { <div class="form__error">{e}</div> })
}

pub(crate) fn group_class(error: MaybeProp<String>) -> impl Fn() -> &'static str {
    move || {
        if error.get().is_some() {
            "form__group form__group--error"
        } else {
            "form__group"
        }
    }
}
