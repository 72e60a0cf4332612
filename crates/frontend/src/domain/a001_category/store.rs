//! Shared-state seam of the category dialog

use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::prompt::{use_auth_prompt, AuthPromptContext};

/// What the dialog is allowed to change outside itself
pub trait CategoryStore {
    /// Append a freshly created record
    fn add_record(&self, record: Category);

    /// Replace the record with the same id
    fn replace_record(&self, record: Category);

    /// Put the sign-in prompt back into login mode and hide it
    fn reset_auth_prompt(&self);
}

/// `CategoryStore` backed by the application contexts
#[derive(Clone, Copy)]
pub struct GlobalCategoryStore {
    ctx: AppGlobalContext,
    auth: AuthPromptContext,
}

impl GlobalCategoryStore {
    pub fn new(ctx: AppGlobalContext, auth: AuthPromptContext) -> Self {
        Self { ctx, auth }
    }

    pub fn from_context() -> Self {
        let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
        Self::new(ctx, use_auth_prompt())
    }
}

impl CategoryStore for GlobalCategoryStore {
    fn add_record(&self, record: Category) {
        log::debug!("category {} created", record.id);
        self.ctx.add_category(record);
    }

    fn replace_record(&self, record: Category) {
        log::debug!("category {} updated", record.id);
        self.ctx.replace_category(record);
    }

    fn reset_auth_prompt(&self) {
        self.auth.reset();
    }
}
