//! Draft plus inline errors of one modal form.

use contracts::shared::metadata::FormErrors;
use leptos::prelude::*;

/// Reactive form: the draft being edited and the messages of the last
/// failed submit. Editing a field clears its message.
pub struct FormState<D: Send + Sync + 'static> {
    pub draft: RwSignal<D>,
    pub errors: RwSignal<FormErrors>,
}

impl<D: Send + Sync + 'static> Clone for FormState<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Send + Sync + 'static> Copy for FormState<D> {}

impl<D> FormState<D>
where
    D: Clone + Default + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(D::default()),
            errors: RwSignal::new(FormErrors::new()),
        }
    }

    /// Start over from `draft`, dropping old messages
    pub fn reset(&self, draft: D) {
        self.draft.set(draft);
        self.errors.set(FormErrors::new());
    }

    /// Value signal and input callback of one field
    pub fn bind<V>(
        &self,
        field: &'static str,
        get: impl Fn(&D) -> V + Send + Sync + 'static,
        set: impl Fn(&mut D, V) + Send + Sync + 'static,
    ) -> (Signal<V>, Callback<V>)
    where
        V: Clone + Send + Sync + 'static,
    {
        let draft = self.draft;
        let errors = self.errors;
        let value = Signal::derive(move || draft.with(|d| get(d)));
        let on_input = Callback::new(move |v: V| {
            draft.update(|d| set(d, v));
            if errors.with_untracked(|e| e.get(field).is_some()) {
                errors.update(|e| e.clear(field));
            }
        });
        (value, on_input)
    }

    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// Validated copy of the draft, or `None` with the messages stored
    pub fn submit(&self, validate: impl Fn(&D) -> Result<(), FormErrors>) -> Option<D> {
        let draft = self.draft.get_untracked();
        match validate(&draft) {
            Ok(()) => {
                self.errors.set(FormErrors::new());
                Some(draft)
            }
            Err(errors) => {
                log::debug!("form rejected: {}", errors);
                self.errors.set(errors);
                None
            }
        }
    }
}

impl<D> Default for FormState<D>
where
    D: Clone + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_warehouse::WarehouseDto;

    #[test]
    fn test_submit_stores_errors_and_edit_clears_them() {
        let owner = Owner::new();
        owner.with(|| {
            let form = FormState::<WarehouseDto>::new();
            assert!(form.submit(WarehouseDto::validate).is_none());
            assert!(form.error("phone").get_untracked().is_some());

            let (_, set_phone) = form.bind("phone", |d| d.phone.clone(), |d, v| d.phone = v);
            set_phone.run("0281234567".to_string());
            assert!(form.error("phone").get_untracked().is_none());
            assert!(form.error("name").get_untracked().is_some());

            form.reset(WarehouseDto {
                sku: "WH-9".into(),
                name: "Kho Thủ Đức".into(),
                address: "12 Võ Văn Ngân".into(),
                phone: "0281234567".into(),
            });
            let draft = form.submit(WarehouseDto::validate);
            assert_eq!(draft.map(|d| d.name), Some("Kho Thủ Đức".to_string()));
            assert!(form.errors.get_untracked().is_empty());
        });
    }
}
