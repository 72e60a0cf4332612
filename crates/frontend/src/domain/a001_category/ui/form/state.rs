//! Category form controller
//!
//! Plain state machine behind the dialog. It owns the two form fields, the
//! error map and the dialog/in-flight flags; the view model drives it from
//! signals and the tests drive it directly with fake transports.

use contracts::domain::a001_category::aggregate::{
    Category, CategoryDto, CategoryField, CategoryId,
};
use contracts::domain::a001_category::validation::{self, FormErrors};

use crate::domain::a001_category::api::{ApiError, CategoryApi};
use crate::domain::a001_category::store::CategoryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Open,
    /// Terminal: a closed dialog is never reopened
    Closed,
}

/// Request produced by an accepted submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(CategoryDto),
    Update { id: CategoryId, dto: CategoryDto },
}

impl SubmitRequest {
    pub async fn send(self, api: &dyn CategoryApi) -> Result<Persisted, ApiError> {
        match self {
            SubmitRequest::Create(dto) => api.create_category(&dto).await.map(Persisted::Created),
            SubmitRequest::Update { id, dto } => api
                .update_category(&id, &dto)
                .await
                .map(Persisted::Updated),
        }
    }
}

/// Record returned by the API, tagged with the path that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persisted {
    Created(Category),
    Updated(Category),
}

/// Effects of a finished request or a dismissal on shared state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Settlement {
    pub persisted: Option<Persisted>,
    /// The dialog went from open to closed
    pub closed: bool,
}

impl Settlement {
    /// Outcome of a request whose dialog no longer exists
    pub fn detached(result: Result<Persisted, ApiError>) -> Self {
        match result {
            Ok(persisted) => Self {
                persisted: Some(persisted),
                closed: false,
            },
            Err(err) => {
                log::error!("Category request finished after the dialog was gone: {err}");
                Self::default()
            }
        }
    }

    pub fn apply(self, store: &dyn CategoryStore) {
        match self.persisted {
            Some(Persisted::Created(record)) => store.add_record(record),
            Some(Persisted::Updated(record)) => store.replace_record(record),
            None => {}
        }
        if self.closed {
            store.reset_auth_prompt();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFormState {
    pub form: CategoryDto,
    pub errors: FormErrors,
    editing: Option<CategoryId>,
    dialog: DialogState,
    submitting: bool,
}

impl CategoryFormState {
    pub fn new(edit: Option<&Category>) -> Self {
        Self {
            form: edit.map(CategoryDto::from_category).unwrap_or_default(),
            errors: FormErrors::default(),
            editing: edit.map(|category| category.id.clone()),
            dialog: DialogState::Open,
            submitting: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.dialog == DialogState::Open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<&CategoryId> {
        self.editing.as_ref()
    }

    /// Overwrite one field; every displayed error goes away
    pub fn change_field(&mut self, field: CategoryField, value: String) {
        self.form.set_field(field, value);
        self.errors.clear();
    }

    pub fn validate(&self) -> FormErrors {
        validation::validate(&self.form)
    }

    /// Validate and, if the form is valid and nothing is in flight, lock the
    /// form and return the request to send.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if !self.is_open() || self.submitting {
            return None;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        self.errors.clear();
        self.submitting = true;
        let dto = self.form.clone();
        Some(match &self.editing {
            Some(id) => SubmitRequest::Update {
                id: id.clone(),
                dto,
            },
            None => SubmitRequest::Create(dto),
        })
    }

    /// Record the outcome of the request started by `begin_submit`
    pub fn settle(&mut self, result: Result<Persisted, ApiError>) -> Settlement {
        self.submitting = false;
        match result {
            Ok(persisted) => {
                self.errors.clear();
                Settlement {
                    persisted: Some(persisted),
                    closed: self.close(),
                }
            }
            Err(err) => {
                log::error!("Category request failed: {err}");
                self.errors = FormErrors::global_only(err.user_message());
                Settlement::default()
            }
        }
    }

    /// Close without saving
    pub fn dismiss(&mut self) -> Settlement {
        Settlement {
            persisted: None,
            closed: self.close(),
        }
    }

    /// Validate, send and apply in one go
    pub async fn submit(&mut self, api: &dyn CategoryApi, store: &dyn CategoryStore) {
        let Some(request) = self.begin_submit() else {
            return;
        };
        let result = request.send(api).await;
        self.settle(result).apply(store);
    }

    fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.dialog = DialogState::Closed;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::api::{CONNECTIVITY_MESSAGE, REJECTION_MESSAGE};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Create(CategoryDto),
        Update(CategoryId, CategoryDto),
    }

    /// Transport that records calls and replays queued responses
    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<Call>>,
        responses: RefCell<VecDeque<Result<Category, ApiError>>>,
    }

    impl FakeApi {
        fn replying(response: Result<Category, ApiError>) -> Self {
            let api = Self::default();
            api.responses.borrow_mut().push_back(response);
            api
        }

        fn next(&self) -> Result<Category, ApiError> {
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Connectivity("no scripted response".into())))
        }
    }

    #[async_trait(?Send)]
    impl CategoryApi for FakeApi {
        async fn create_category(&self, dto: &CategoryDto) -> Result<Category, ApiError> {
            self.calls.borrow_mut().push(Call::Create(dto.clone()));
            self.next()
        }

        async fn update_category(
            &self,
            id: &CategoryId,
            dto: &CategoryDto,
        ) -> Result<Category, ApiError> {
            self.calls
                .borrow_mut()
                .push(Call::Update(id.clone(), dto.clone()));
            self.next()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Add(Category),
        Edit(Category),
        ResetAuthPrompt,
    }

    #[derive(Default)]
    struct FakeStore {
        events: RefCell<Vec<Event>>,
    }

    impl CategoryStore for FakeStore {
        fn add_record(&self, record: Category) {
            self.events.borrow_mut().push(Event::Add(record));
        }

        fn replace_record(&self, record: Category) {
            self.events.borrow_mut().push(Event::Edit(record));
        }

        fn reset_auth_prompt(&self) {
            self.events.borrow_mut().push(Event::ResetAuthPrompt);
        }
    }

    fn category(id: &str, name: &str, image: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.into(),
            image: image.into(),
        }
    }

    fn filled(edit: Option<&Category>) -> CategoryFormState {
        let mut state = CategoryFormState::new(edit);
        state.change_field(CategoryField::Type, "Beach".into());
        state.change_field(CategoryField::Image, "https://x.com/a.jpg".into());
        state
    }

    #[test]
    fn test_new_prefills_from_edited_record() {
        let record = category("42", "Safari", "/img/s.png");
        let state = CategoryFormState::new(Some(&record));
        assert_eq!(state.form, CategoryDto::new("Safari", "/img/s.png"));
        assert!(state.is_edit_mode());
        assert!(state.is_open());

        let blank = CategoryFormState::new(None);
        assert_eq!(blank.form, CategoryDto::default());
        assert!(!blank.is_edit_mode());
        assert!(blank.errors.is_empty());
    }

    #[test]
    fn test_invalid_type_blocks_submission() {
        let api = FakeApi::default();
        let store = FakeStore::default();
        let mut state = filled(None);
        state.change_field(CategoryField::Type, "1abc".into());

        block_on(state.submit(&api, &store));

        assert!(state.errors.field(CategoryField::Type).is_some());
        assert!(api.calls.borrow().is_empty());
        assert!(store.events.borrow().is_empty());
        assert!(state.is_open());
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_invalid_image_reports_image_error() {
        let api = FakeApi::default();
        let store = FakeStore::default();
        let mut state = filled(None);
        state.change_field(CategoryField::Image, "notanimage".into());

        block_on(state.submit(&api, &store));

        assert!(state.errors.field(CategoryField::Image).is_some());
        assert_eq!(state.errors.field(CategoryField::Type), None);
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn test_create_success_adds_record_and_closes() {
        let created = category("7", "Beach", "https://x.com/a.jpg");
        let api = FakeApi::replying(Ok(created.clone()));
        let store = FakeStore::default();
        let mut state = filled(None);

        block_on(state.submit(&api, &store));

        assert_eq!(
            *api.calls.borrow(),
            vec![Call::Create(CategoryDto::new("Beach", "https://x.com/a.jpg"))]
        );
        assert_eq!(
            *store.events.borrow(),
            vec![Event::Add(created), Event::ResetAuthPrompt]
        );
        assert!(!state.is_open());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_edit_success_replaces_record() {
        let original = category("42", "Old", "/img/old.png");
        let updated = category("42", "Beach", "https://x.com/a.jpg");
        let api = FakeApi::replying(Ok(updated.clone()));
        let store = FakeStore::default();
        let mut state = filled(Some(&original));

        block_on(state.submit(&api, &store));

        assert_eq!(
            *api.calls.borrow(),
            vec![Call::Update(
                CategoryId::new("42"),
                CategoryDto::new("Beach", "https://x.com/a.jpg")
            )]
        );
        assert_eq!(
            *store.events.borrow(),
            vec![Event::Edit(updated), Event::ResetAuthPrompt]
        );
        assert!(!state.is_open());
    }

    #[test]
    fn test_connectivity_failure_keeps_dialog_open() {
        let api = FakeApi::replying(Err(ApiError::Connectivity("TypeError: Failed to fetch".into())));
        let store = FakeStore::default();
        let mut state = filled(None);

        block_on(state.submit(&api, &store));

        assert!(state.is_open());
        assert_eq!(state.errors.global(), Some(CONNECTIVITY_MESSAGE));
        assert_eq!(state.errors.iter_fields().count(), 0);
        assert!(store.events.borrow().is_empty());
    }

    #[test]
    fn test_rejection_keeps_dialog_open() {
        let api = FakeApi::replying(Err(ApiError::Rejected {
            status: 400,
            body: "{\"message\":\"bad payload\"}".into(),
        }));
        let store = FakeStore::default();
        let mut state = filled(Some(&category("42", "Old", "/img/old.png")));

        block_on(state.submit(&api, &store));

        assert!(state.is_open());
        assert_eq!(state.errors.global(), Some(REJECTION_MESSAGE));
        assert!(store.events.borrow().is_empty());
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_editing_clears_all_errors() {
        let mut state = CategoryFormState::new(None);
        assert!(state.begin_submit().is_none());
        assert!(!state.errors.is_empty());

        state.change_field(CategoryField::Image, "a".into());
        assert!(state.errors.is_empty());

        state.errors = FormErrors::global_only(REJECTION_MESSAGE);
        state.change_field(CategoryField::Type, "B".into());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let mut state = filled(None);
        let first = state.begin_submit();
        assert!(matches!(first, Some(SubmitRequest::Create(_))));
        assert!(state.is_submitting());

        assert_eq!(state.begin_submit(), None);

        let settlement = state.settle(Err(ApiError::Decode("eof".into())));
        assert_eq!(settlement, Settlement::default());
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn test_dismiss_resets_auth_prompt_once() {
        let store = FakeStore::default();
        let mut state = CategoryFormState::new(None);

        state.dismiss().apply(&store);
        state.dismiss().apply(&store);

        assert!(!state.is_open());
        assert_eq!(*store.events.borrow(), vec![Event::ResetAuthPrompt]);
        assert_eq!(state.begin_submit(), None);
    }

    #[test]
    fn test_late_success_after_dismiss_still_reaches_store() {
        let store = FakeStore::default();
        let created = category("8", "Beach", "https://x.com/a.jpg");
        let mut state = filled(None);

        let request = state.begin_submit();
        assert!(request.is_some());
        state.dismiss().apply(&store);
        state
            .settle(Ok(Persisted::Created(created.clone())))
            .apply(&store);

        assert_eq!(
            *store.events.borrow(),
            vec![Event::ResetAuthPrompt, Event::Add(created.clone())]
        );

        let detached = Settlement::detached(Ok(Persisted::Created(created.clone())));
        assert_eq!(detached.persisted, Some(Persisted::Created(created)));
        assert!(!detached.closed);
        assert_eq!(
            Settlement::detached(Err(ApiError::Connectivity("offline".into()))),
            Settlement::default()
        );
    }
}
