use super::view_model::CategoryFormViewModel;
use crate::domain::a001_category::api::CategoryApi;
use crate::domain::a001_category::store::CategoryStore;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_category::aggregate::{Category, CategoryField};
use leptos::prelude::*;
use std::rc::Rc;

/// Create-or-edit dialog for a single category
///
/// A closed dialog stays closed; the host mounts a new instance to open it again.
#[component]
pub fn CategoryForm(
    /// Record being edited; `None` creates a new category
    edit: Option<Category>,
    api: Rc<dyn CategoryApi>,
    store: Rc<dyn CategoryStore>,
    /// Called once the dialog has closed, after a save or a dismissal
    on_closed: Callback<()>,
) -> impl IntoView {
    let vm = CategoryFormViewModel::new(edit, api, store);

    Effect::new(move |_| {
        if !vm.is_open() {
            on_closed.run(());
        }
    });

    let on_dismiss = Callback::new(move |_| vm.dismiss_command());

    view! {
        <ModalFrame on_close=on_dismiss modal_class="category-form-modal".to_string()>
            <div class="details-container category-details">
                <div class="details-header">
                    <h3>
                        {move || if vm.is_edit_mode() { "Edit category" } else { "New category" }}
                    </h3>
                    <button
                        type="button"
                        class="button button--icon modal__close"
                        aria-label="Close"
                        on:click=move |_| vm.dismiss_command()
                    >
                        {icon("x")}
                    </button>
                </div>

                <form
                    class="details-form"
                    novalidate=true
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.submit_command();
                    }
                >
                    <FieldInput vm=vm field=CategoryField::Type placeholder="Tour type" />
                    <FieldInput vm=vm field=CategoryField::Image placeholder="http://url.jpg" />

                    <p class="form-error form-error--global">{move || vm.global_error()}</p>

                    <div class="details-actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || vm.is_submitting()
                        >
                            {icon("save")}
                            {move || if vm.is_submitting() { "Saving..." } else { "Submit" }}
                        </button>
                    </div>
                </form>
            </div>
        </ModalFrame>
    }
}

#[component]
fn FieldInput(
    vm: CategoryFormViewModel,
    field: CategoryField,
    placeholder: &'static str,
) -> impl IntoView {
    let name = field.as_str();

    view! {
        <div class="form-group">
            <label for=name>{field.label()}</label>
            <input
                type="text"
                id=name
                name=name
                placeholder=placeholder
                prop:value=move || vm.field_value(field)
                on:input=move |ev| vm.change_field(field, event_target_value(&ev))
            />
            <p class="form-error">{move || vm.field_error(field)}</p>
        </div>
    }
}
