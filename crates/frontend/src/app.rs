use crate::domain::a001_category::ui::list::CategoryList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::prompt::AuthPromptContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Shared state slices consumed by the category dialog.
    provide_context(AppGlobalContext::new());
    provide_context(AuthPromptContext::new());

    view! {
        <div class="app-layout">
            <header data-zone="header" class="header">
                <div class="header__content">
                    <span class="header__title">"Admin dashboard"</span>
                </div>
            </header>
            <main class="app-main">
                <CategoryList />
            </main>
        </div>
    }
}
