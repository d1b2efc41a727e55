use super::view_model::CategoryDetailsViewModel;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::crud::CrudModal;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_category::CategoryStatus;
use leptos::prelude::*;

#[component]
pub fn CategoryDetails(vm: CategoryDetailsViewModel) -> impl IntoView {
    let notifications = use_notifications();
    let store = vm.store;
    let form = vm.form;

    let open = Signal::derive(move || {
        store.is_open(CrudModal::Create) || store.is_open(CrudModal::Update)
    });
    Effect::new(move |_| {
        if open.get() {
            vm.load(untrack(move || store.selected()));
        }
    });

    let title = Signal::derive(move || {
        if vm.is_edit_mode() {
            "Update Category".to_string()
        } else {
            "Create Category".to_string()
        }
    });

    let (name, set_name) = form.bind("name", |d| d.name.clone(), |d, v| d.name = v);
    let (code, set_code) = form.bind("code", |d| d.code.clone(), |d, v| d.code = v);
    let (description, set_description) = form.bind(
        "description",
        |d| d.description.clone(),
        |d, v| d.description = v,
    );
    let (status, set_status) = form.bind(
        "status",
        |d| d.status.as_str().to_string(),
        |d, v: String| d.status = CategoryStatus::from_str(&v),
    );
    let status_options = Signal::derive(|| {
        CategoryStatus::all()
            .iter()
            .map(|s| (s.as_str().to_string(), s.label().to_string()))
            .collect::<Vec<_>>()
    });

    let on_submit = Callback::new(move |_| {
        let editing = vm.is_edit_mode();
        if let Some(saved) = vm.save_command() {
            let verb = if editing { "updated" } else { "created" };
            notifications.success(format!("Category \"{}\" {}", saved.name, verb));
        }
    });
    let on_cancel = store.on_cancel();

    let footer = move || {
        view! {
            <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                "Cancel"
            </Button>
            <Button variant="primary" on_click=on_submit>
                "Submit"
            </Button>
        }
    };

    view! {
        <Modal open=open title=title on_close=on_cancel footer=footer>
            <div class="details-form">
                <Input
                    label="Name"
                    id="category-name"
                    value=name
                    on_input=set_name
                    placeholder="Enter category name"
                    required=true
                    error=form.error("name")
                />
                <Input
                    label="Code"
                    id="category-code"
                    value=code
                    on_input=set_code
                    placeholder="e.g. VLXD"
                    error=form.error("code")
                />
                <Select
                    label="Status"
                    id="category-status"
                    value=status
                    on_change=set_status
                    options=status_options
                />
                <Textarea
                    label="Description"
                    id="category-description"
                    value=description
                    on_input=set_description
                    placeholder="Enter category description"
                    rows=4
                    error=form.error("description")
                />
            </div>
        </Modal>
    }
}
