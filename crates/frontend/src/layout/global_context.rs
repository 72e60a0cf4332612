use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;

/// Shared dashboard state: the categories slice and the dialog host flags
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub categories: RwSignal<Vec<Category>>,
    /// Record opened for editing; `None` means the dialog creates a new one
    pub category_edit: RwSignal<Option<Category>>,
    pub category_form_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            categories: RwSignal::new(vec![]),
            category_edit: RwSignal::new(None),
            category_form_open: RwSignal::new(false),
        }
    }

    pub fn add_category(&self, record: Category) {
        self.categories.update(|items| items.push(record));
    }

    pub fn replace_category(&self, record: Category) {
        self.categories.update(|items| {
            if !replace_by_id(items, record.clone()) {
                log::warn!(
                    "Category {} was not in the list, appending the updated record",
                    record.id
                );
                items.push(record);
            }
        });
    }

    /// Open the category dialog, optionally for an existing record
    pub fn open_category_form(&self, edit: Option<Category>) {
        self.category_edit.set(edit);
        self.category_form_open.set(true);
    }

    pub fn close_category_form(&self) {
        self.category_form_open.set(false);
        self.category_edit.set(None);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace the item with the same id in place; `false` if there is none
pub fn replace_by_id(items: &mut [Category], record: Category) -> bool {
    match items.iter_mut().find(|item| item.id == record.id) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}
