use std::future::Future;
use std::sync::Arc;

use contracts::domain::common::Record;
use futures::future::{FutureExt, LocalBoxFuture};
use leptos::prelude::*;
use serde_json::Value;

use super::state::{FormMode, MasterState};

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this item?";

pub type Pending<T> = LocalBoxFuture<'static, Result<T, String>>;

type FetchFn = Arc<dyn Fn() -> Pending<Vec<Record>> + Send + Sync>;
type CreateFn = Arc<dyn Fn(Record) -> Pending<Record> + Send + Sync>;
type UpdateFn = Arc<dyn Fn(String, Record) -> Pending<Record> + Send + Sync>;
type DeleteFn = Arc<dyn Fn(String) -> Pending<()> + Send + Sync>;
type AddHook = Arc<dyn Fn() + Send + Sync>;
type EditHook = Arc<dyn Fn(Record) + Send + Sync>;
type DraftSeed = Arc<dyn Fn() -> Record + Send + Sync>;
type FieldHook = Arc<dyn Fn(&mut Record, &str) + Send + Sync>;

/// Caller-supplied behaviour of a master-data screen.
///
/// Missing create/update callbacks turn saves into local-only mutations;
/// a missing delete callback makes removal local-only.
#[derive(Clone, Default)]
pub struct MasterCallbacks {
    fetch: Option<FetchFn>,
    create: Option<CreateFn>,
    update: Option<UpdateFn>,
    delete: Option<DeleteFn>,
    on_add: Option<AddHook>,
    on_edit: Option<EditHook>,
    new_draft: Option<DraftSeed>,
    on_field: Option<FieldHook>,
}

impl MasterCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<Record>, String>> + 'static,
    {
        self.fetch = Some(Arc::new(move || f().boxed_local()));
        self
    }

    pub fn create<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Record) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Record, String>> + 'static,
    {
        self.create = Some(Arc::new(move |draft| f(draft).boxed_local()));
        self
    }

    pub fn update<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(String, Record) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Record, String>> + 'static,
    {
        self.update = Some(Arc::new(move |id, draft| f(id, draft).boxed_local()));
        self
    }

    pub fn delete<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        self.delete = Some(Arc::new(move |id| f(id).boxed_local()));
        self
    }

    /// Runs before the add form opens, e.g. to reload dropdown data.
    pub fn on_add(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_add = Some(Arc::new(hook));
        self
    }

    /// Replaces the built-in edit form.
    pub fn on_edit(mut self, hook: impl Fn(Record) + Send + Sync + 'static) -> Self {
        self.on_edit = Some(Arc::new(hook));
        self
    }

    /// Draft the add form opens with. Defaults to an empty record.
    pub fn new_draft(mut self, seed: impl Fn() -> Record + Send + Sync + 'static) -> Self {
        self.new_draft = Some(Arc::new(seed));
        self
    }

    /// Runs after every field edit with the name of the changed field,
    /// e.g. to fill dependent fields.
    pub fn on_field(mut self, hook: impl Fn(&mut Record, &str) + Send + Sync + 'static) -> Self {
        self.on_field = Some(Arc::new(hook));
        self
    }
}

fn or_fallback(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

fn local_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// ViewModel behind `MasterContainer`.
#[derive(Clone)]
pub struct MasterViewModel {
    pub state: RwSignal<MasterState>,
    callbacks: Arc<MasterCallbacks>,
}

impl MasterViewModel {
    pub fn new(callbacks: MasterCallbacks) -> Self {
        Self {
            state: RwSignal::new(MasterState::default()),
            callbacks: Arc::new(callbacks),
        }
    }

    pub fn has_fetch(&self) -> bool {
        self.callbacks.fetch.is_some()
    }

    pub async fn load(&self) {
        let Some(fetch) = self.callbacks.fetch.clone() else {
            return;
        };
        self.state.update(|s| s.begin_load());
        let result = fetch()
            .await
            .map_err(|e| or_fallback(e, "Failed to load data"));
        if let Err(e) = &result {
            log::error!("load failed: {}", e);
        }
        // The screen may have been unmounted while the request was in flight.
        self.state.try_update(|s| s.finish_load(result));
    }

    pub fn load_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load().await });
    }

    pub fn add(&self) {
        if let Some(hook) = &self.callbacks.on_add {
            hook();
        }
        let seed = self.callbacks.new_draft.as_ref().map(|seed| seed());
        self.state.update(|s| {
            s.open_create();
            if let Some(draft) = seed {
                s.draft = draft;
            }
        });
    }

    pub fn edit(&self, record: Record) {
        match &self.callbacks.on_edit {
            Some(hook) => hook(record),
            None => self.state.update(|s| s.open_edit(&record)),
        }
    }

    pub fn view(&self, record: Record) {
        self.state.update(|s| s.open_view(&record));
    }

    pub fn set_field(&self, name: &str, value: Value) {
        let hook = self.callbacks.on_field.clone();
        self.state.update(|s| {
            s.set_field(name, value);
            if let Some(hook) = hook {
                hook(&mut s.draft, name);
            }
        });
    }

    pub fn cancel(&self) {
        self.state.update(|s| s.close_form());
    }

    pub fn set_search(&self, query: String) {
        self.state.update(|s| s.search = query);
    }

    pub fn dismiss_error(&self) {
        self.state.update(|s| s.dismiss_error());
    }

    pub async fn save(&self) {
        let Some((mode, draft)) = self
            .state
            .with_untracked(|s| s.form.clone().map(|mode| (mode, s.draft.clone())))
        else {
            return;
        };
        if !matches!(mode, FormMode::View(_)) {
            self.state.update(|s| s.begin_save());
        }

        let result = match mode {
            FormMode::Create => match self.callbacks.create.clone() {
                Some(create) => Some(create(draft).await),
                None => None,
            },
            FormMode::Edit(id) => match self.callbacks.update.clone() {
                Some(update) => Some(update(id, draft).await),
                None => None,
            },
            FormMode::View(_) => return,
        };

        self.state.try_update(|s| match result {
            Some(Ok(saved)) => s.apply_saved(saved),
            Some(Err(e)) => {
                log::error!("save failed: {}", e);
                s.save_failed(or_fallback(e, "Failed to save item"));
            }
            None => s.apply_local_save(local_id()),
        });
    }

    pub fn save_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.save().await });
    }

    /// Remove `id`, calling the delete callback first when there is one.
    /// A failed callback keeps the record and raises the banner.
    pub async fn delete(&self, id: String) {
        let result = match self.callbacks.delete.clone() {
            Some(delete) => delete(id.clone()).await,
            None => Ok(()),
        };
        self.state.try_update(|s| match result {
            Ok(()) => s.remove(&id),
            Err(e) => {
                log::error!("delete of {} failed: {}", id, e);
                s.fail(or_fallback(e, "Failed to delete item"));
            }
        });
    }

    /// Confirm with the user, then delete.
    pub fn delete_command(&self, record: &Record) {
        let Some(id) = record.id() else {
            return;
        };
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(DELETE_CONFIRMATION).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.delete(id).await });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn rec(id: &str, name: &str) -> Record {
        Record::new().with("id", id).with("name", name)
    }

    fn backed() -> MasterCallbacks {
        MasterCallbacks::new()
            .fetch(|| async { Ok(vec![rec("1", "A")]) })
            .create(|draft: Record| async move { Ok(rec("2", &draft.text("name"))) })
            .update(|id: String, draft: Record| async move { Ok(rec(&id, &draft.text("name"))) })
    }

    #[test]
    fn mount_fetch_shows_list_without_form() {
        let vm = MasterViewModel::new(backed());
        block_on(vm.load());
        let state = vm.state.get_untracked();
        assert_eq!(state.records, vec![rec("1", "A")]);
        assert!(!state.is_form_open());
    }

    #[test]
    fn add_then_save_appends_created_record() {
        let vm = MasterViewModel::new(backed());
        block_on(vm.load());
        vm.add();
        vm.set_field("name", "B".into());
        block_on(vm.save());
        let state = vm.state.get_untracked();
        assert_eq!(state.records, vec![rec("1", "A"), rec("2", "B")]);
        assert!(!state.is_form_open());
    }

    #[test]
    fn edit_then_save_replaces_in_place() {
        let vm = MasterViewModel::new(backed());
        block_on(vm.load());
        vm.edit(rec("1", "A"));
        vm.set_field("name", "A2".into());
        block_on(vm.save());
        assert_eq!(vm.state.get_untracked().records, vec![rec("1", "A2")]);
    }

    #[test]
    fn rejected_create_keeps_form_and_list() {
        let vm = MasterViewModel::new(
            MasterCallbacks::new()
                .fetch(|| async { Ok(vec![rec("1", "A")]) })
                .create(|_draft: Record| async { Err::<Record, _>("boom".to_string()) }),
        );
        block_on(vm.load());
        vm.add();
        vm.set_field("name", "B".into());
        block_on(vm.save());
        let state = vm.state.get_untracked();
        assert!(state.is_form_open());
        assert_eq!(state.records, vec![rec("1", "A")]);
        assert!(state.error.unwrap().contains("boom"));
    }

    #[test]
    fn successful_retry_clears_save_banner() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();
        let vm = MasterViewModel::new(
            MasterCallbacks::new()
                .fetch(|| async { Ok(vec![rec("1", "A")]) })
                .create(move |draft: Record| {
                    let first = counter.fetch_add(1, Ordering::SeqCst) == 0;
                    async move {
                        if first {
                            Err("boom".to_string())
                        } else {
                            Ok(rec("2", &draft.text("name")))
                        }
                    }
                }),
        );
        block_on(vm.load());
        vm.add();
        vm.set_field("name", "B".into());
        block_on(vm.save());
        assert_eq!(vm.state.get_untracked().error.as_deref(), Some("boom"));

        block_on(vm.save());
        let state = vm.state.get_untracked();
        assert_eq!(state.error, None);
        assert!(!state.is_form_open());
        assert_eq!(state.records, vec![rec("1", "A"), rec("2", "B")]);

        vm.add();
        assert_eq!(vm.state.get_untracked().error, None);
    }

    #[test]
    fn failed_fetch_uses_fallback_message() {
        let vm = MasterViewModel::new(
            MasterCallbacks::new().fetch(|| async { Err::<Vec<Record>, _>(String::new()) }),
        );
        block_on(vm.load());
        assert_eq!(vm.state.get_untracked().error.as_deref(), Some("Failed to load data"));
    }

    #[test]
    fn add_hook_runs_before_form_opens() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let vm = MasterViewModel::new(MasterCallbacks::new().on_add(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        vm.add();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(vm.state.get_untracked().is_form_open());
    }

    #[test]
    fn add_form_opens_with_seeded_draft() {
        let vm = MasterViewModel::new(
            MasterCallbacks::new().new_draft(|| Record::new().with("kind", "design")),
        );
        vm.add();
        assert_eq!(vm.state.get_untracked().draft.text("kind"), "design");
    }

    #[test]
    fn field_hook_fills_dependent_fields() {
        let vm = MasterViewModel::new(MasterCallbacks::new().on_field(|draft, name| {
            if name == "gross" {
                let net = draft.number("gross") - 1.0;
                draft.set("net", net);
            }
        }));
        vm.add();
        vm.set_field("gross", "5".into());
        vm.set_field("other", "x".into());
        let draft = vm.state.get_untracked().draft;
        assert_eq!(draft.number("net"), 4.0);
        assert_eq!(draft.text("other"), "x");
    }

    #[test]
    fn custom_edit_bypasses_form() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let vm = MasterViewModel::new(MasterCallbacks::new().on_edit(move |_record| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        vm.edit(rec("1", "A"));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert!(!vm.state.get_untracked().is_form_open());
    }

    #[test]
    fn delete_removes_only_after_success() {
        let vm = MasterViewModel::new(
            MasterCallbacks::new()
                .fetch(|| async { Ok(vec![rec("1", "A"), rec("2", "B")]) })
                .delete(|id: String| async move {
                    if id == "2" {
                        Err("Failed to delete item".to_string())
                    } else {
                        Ok(())
                    }
                }),
        );
        block_on(vm.load());
        block_on(vm.delete("1".into()));
        block_on(vm.delete("2".into()));
        let state = vm.state.get_untracked();
        assert_eq!(state.records, vec![rec("2", "B")]);
        assert_eq!(state.error.as_deref(), Some("Failed to delete item"));
    }

    #[test]
    fn local_only_screen_synthesizes_ids() {
        let vm = MasterViewModel::new(MasterCallbacks::new());
        vm.add();
        vm.set_field("metal", "Gold".into());
        block_on(vm.save());
        let records = vm.state.get_untracked().records;
        assert_eq!(records.len(), 1);
        assert!(records[0].id().is_some());

        block_on(vm.delete(records[0].id().unwrap()));
        assert!(vm.state.get_untracked().records.is_empty());
    }
}
