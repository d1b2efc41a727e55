use crate::shared::format::{format_thousands, format_vnd};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Integer,
    Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardTone {
    #[default]
    Neutral,
    Good,
    Warning,
    Bad,
}

fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Integer => format_thousands(val as i64),
        ValueFormat::Money => format_vnd(val),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<f64>,
    format: ValueFormat,
    #[prop(optional, into)]
    tone: Signal<CardTone>,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    let tone_class = move || match tone.get() {
        CardTone::Good => "stat-card stat-card--success",
        CardTone::Bad => "stat-card stat-card--error",
        CardTone::Warning => "stat-card stat-card--warning",
        CardTone::Neutral => "stat-card",
    };

    view! {
        <div class=tone_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || format_value(value.get(), format)}</div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
