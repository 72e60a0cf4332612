use contracts::system::auth::AuthMode;
use leptos::prelude::*;

/// Состояние окна входа/регистрации
///
/// Owned by the dashboard shell; other dialogs only reset it when they close.
#[derive(Clone, Copy)]
pub struct AuthPromptContext {
    pub mode: RwSignal<AuthMode>,
    pub open: RwSignal<bool>,
}

impl AuthPromptContext {
    pub fn new() -> Self {
        Self {
            mode: RwSignal::new(AuthMode::default()),
            open: RwSignal::new(false),
        }
    }

    /// Back to the login mode with the prompt hidden
    pub fn reset(&self) {
        self.mode.set(AuthMode::Login);
        self.open.set(false);
    }
}

impl Default for AuthPromptContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the auth prompt state
pub fn use_auth_prompt() -> AuthPromptContext {
    use_context::<AuthPromptContext>().expect("AuthPromptContext not found in component tree")
}
