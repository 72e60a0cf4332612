use super::state::{CategoryFormState, Settlement};
use crate::domain::a001_category::api::CategoryApi;
use crate::domain::a001_category::store::CategoryStore;
use contracts::domain::a001_category::aggregate::{Category, CategoryField};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// ViewModel for the category dialog
#[derive(Clone, Copy)]
pub struct CategoryFormViewModel {
    pub state: RwSignal<CategoryFormState>,
    api: StoredValue<Rc<dyn CategoryApi>, LocalStorage>,
    store: StoredValue<Rc<dyn CategoryStore>, LocalStorage>,
}

impl CategoryFormViewModel {
    pub fn new(
        edit: Option<Category>,
        api: Rc<dyn CategoryApi>,
        store: Rc<dyn CategoryStore>,
    ) -> Self {
        Self {
            state: RwSignal::new(CategoryFormState::new(edit.as_ref())),
            api: StoredValue::new_local(api),
            store: StoredValue::new_local(store),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn is_edit_mode(&self) -> bool {
        self.state.with(|s| s.is_edit_mode())
    }

    pub fn field_value(&self, field: CategoryField) -> String {
        self.state.with(|s| s.form.field(field).to_string())
    }

    pub fn field_error(&self, field: CategoryField) -> Option<String> {
        self.state.with(|s| s.errors.field(field).map(str::to_string))
    }

    pub fn global_error(&self) -> Option<String> {
        self.state.with(|s| s.errors.global().map(str::to_string))
    }

    pub fn change_field(&self, field: CategoryField, value: String) {
        self.state.update(|s| s.change_field(field, value));
    }

    /// Validate and send the form; ignored while a request is in flight
    pub fn submit_command(&self) {
        let Some(request) = self.state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        let state = self.state;
        let api = self.api.get_value();
        let store = self.store.get_value();
        spawn_local(async move {
            let result = request.send(api.as_ref()).await;
            // The dialog may have been unmounted while the request was running;
            // the record still belongs in the shared list.
            let settlement = match state.try_update(|s| s.settle(result.clone())) {
                Some(settlement) => settlement,
                None => Settlement::detached(result),
            };
            settlement.apply(store.as_ref());
        });
    }

    /// Close without saving
    pub fn dismiss_command(&self) {
        // Escape and overlay clicks arrive deferred and may outlive the dialog.
        if let Some(settlement) = self.state.try_update(|s| s.dismiss()) {
            settlement.apply(self.store.get_value().as_ref());
        }
    }
}
