use crate::shared::components::ui::{Input, NumberInput, Select, Textarea};
use crate::shared::form::FormState;
use crate::shared::format::{input_date, parse_input_date};
use chrono::NaiveDate;
use contracts::domain::a004_project::{ProjectDto, ProjectItemDto, ProjectStatus};
use leptos::prelude::*;

/// Draft with name, description, status, date range and progress
pub trait DatedWorkDraft: Clone + Default + Send + Sync + 'static {
    fn name(&self) -> &String;
    fn name_mut(&mut self) -> &mut String;
    fn description(&self) -> &String;
    fn description_mut(&mut self) -> &mut String;
    fn status(&self) -> ProjectStatus;
    fn status_mut(&mut self) -> &mut ProjectStatus;
    fn start_date(&self) -> Option<NaiveDate>;
    fn start_date_mut(&mut self) -> &mut Option<NaiveDate>;
    fn end_date(&self) -> Option<NaiveDate>;
    fn end_date_mut(&mut self) -> &mut Option<NaiveDate>;
    fn progress(&self) -> u8;
    fn progress_mut(&mut self) -> &mut u8;
}

macro_rules! impl_dated_work_draft {
    ($($ty:ty),*) => {$(
        impl DatedWorkDraft for $ty {
            fn name(&self) -> &String { &self.name }
            fn name_mut(&mut self) -> &mut String { &mut self.name }
            fn description(&self) -> &String { &self.description }
            fn description_mut(&mut self) -> &mut String { &mut self.description }
            fn status(&self) -> ProjectStatus { self.status }
            fn status_mut(&mut self) -> &mut ProjectStatus { &mut self.status }
            fn start_date(&self) -> Option<NaiveDate> { self.start_date }
            fn start_date_mut(&mut self) -> &mut Option<NaiveDate> { &mut self.start_date }
            fn end_date(&self) -> Option<NaiveDate> { self.end_date }
            fn end_date_mut(&mut self) -> &mut Option<NaiveDate> { &mut self.end_date }
            fn progress(&self) -> u8 { self.progress }
            fn progress_mut(&mut self) -> &mut u8 { &mut self.progress }
        }
    )*};
}

impl_dated_work_draft!(ProjectDto, ProjectItemDto);

pub fn status_options() -> Vec<(String, String)> {
    ProjectStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

#[component]
pub fn DatedWorkFields<D: DatedWorkDraft>(
    form: FormState<D>,
    id_prefix: &'static str,
    name_label: &'static str,
    name_placeholder: &'static str,
) -> impl IntoView {
    let (name, set_name) = form.bind("name", |d: &D| d.name().clone(), |d: &mut D, v| *d.name_mut() = v);
    let (description, set_description) = form.bind(
        "description",
        |d: &D| d.description().clone(),
        |d: &mut D, v| *d.description_mut() = v,
    );
    let (start, set_start) = form.bind(
        "start_date",
        |d: &D| input_date(d.start_date()),
        |d: &mut D, v: String| *d.start_date_mut() = parse_input_date(&v),
    );
    let (end, set_end) = form.bind(
        "end_date",
        |d: &D| input_date(d.end_date()),
        |d: &mut D, v: String| *d.end_date_mut() = parse_input_date(&v),
    );
    let (status, set_status) = form.bind(
        "status",
        |d: &D| d.status().as_str().to_string(),
        |d: &mut D, v: String| {
            if let Some(s) = ProjectStatus::from_str(&v) {
                *d.status_mut() = s;
            }
        },
    );
    let (progress, set_progress) = form.bind(
        "progress",
        |d: &D| d.progress() as f64,
        |d: &mut D, v: f64| *d.progress_mut() = v.clamp(0.0, 255.0).round() as u8,
    );

    view! {
        <Input label=name_label id=format!("{id_prefix}-name") value=name on_input=set_name
            placeholder=name_placeholder required=true error=form.error("name") />
        <Textarea label="Mô tả" id=format!("{id_prefix}-description") value=description
            on_input=set_description placeholder="Nhập mô tả" rows=3 />
        <div class="form__row">
            <Input label="Ngày bắt đầu" id=format!("{id_prefix}-start") input_type="date"
                value=start on_input=set_start required=true error=form.error("start_date") />
            <Input label="Ngày kết thúc" id=format!("{id_prefix}-end") input_type="date"
                value=end on_input=set_end required=true error=form.error("end_date") />
        </div>
        <div class="form__row">
            <Select label="Trạng thái" id=format!("{id_prefix}-status") value=status
                on_change=set_status options=Signal::derive(status_options) required=true />
            <NumberInput label="Tiến độ (%)" id=format!("{id_prefix}-progress") value=progress
                on_input=set_progress min=0.0 max=100.0 step=1.0 error=form.error("progress") />
        </div>
    }
}
