use crate::domain::a001_category::api::{CategoryApi, HttpCategoryApi};
use crate::domain::a001_category::store::{CategoryStore, GlobalCategoryStore};
use crate::domain::a001_category::ui::form::CategoryForm;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

/// Category list with the create/edit dialog host
#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let store = GlobalCategoryStore::from_context();

    let dialog = move || {
        ctx.category_form_open.get().then(|| {
            let edit = ctx.category_edit.get_untracked();
            let api: Rc<dyn CategoryApi> = Rc::new(HttpCategoryApi::from_location());
            let store: Rc<dyn CategoryStore> = Rc::new(store);
            view! {
                <CategoryForm
                    edit=edit
                    api=api
                    store=store
                    on_closed=Callback::new(move |_| ctx.close_category_form())
                />
            }
        })
    };

    view! {
        <div class="page category-list">
            <div class="page-header">
                <h2>"Categories"</h2>
                <button class="btn btn-primary" on:click=move |_| ctx.open_category_form(None)>
                    {icon("plus")}
                    " New category"
                </button>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Category"</th>
                        <th>"Image"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || ctx.categories.get()
                        key=|category| (category.id.clone(), category.name.clone(), category.image.clone())
                        children=move |category| {
                            let for_edit = category.clone();
                            view! {
                                <tr>
                                    <td>{category.name.clone()}</td>
                                    <td>
                                        <img
                                            class="category-thumb"
                                            src=category.image.clone()
                                            alt=category.name.clone()
                                        />
                                    </td>
                                    <td>
                                        <button
                                            class="button button--ghost"
                                            aria-label="Edit"
                                            on:click=move |_| ctx.open_category_form(Some(for_edit.clone()))
                                        >
                                            {icon("edit")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            {move || ctx.categories.with(|items| items.is_empty()).then(|| view! {
                <div class="empty-state">{icon("image")}" No categories yet"</div>
            })}

            {dialog}
        </div>
    }
}
