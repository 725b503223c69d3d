//! State of one master-data screen.
//!
//! `Idle -> Loading -> Idle` while fetching, `Idle -> FormOpen -> Idle`
//! around add/edit. The record list is a cache owned by the mounted
//! screen; it is rebuilt on every mount and never shared.

use contracts::domain::common::Record;
use serde_json::Value;

use crate::shared::list_utils::filter_list;

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(String),
    /// Read-only display of a record.
    View(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MasterState {
    pub records: Vec<Record>,
    pub loading: bool,
    pub form: Option<FormMode>,
    pub draft: Record,
    /// Dismissable banner text.
    pub error: Option<String>,
    pub search: String,
}

impl MasterState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// A failed load keeps the records already shown.
    pub fn finish_load(&mut self, result: Result<Vec<Record>, String>) {
        self.loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    pub fn open_create(&mut self) {
        self.error = None;
        self.draft = Record::new();
        self.form = Some(FormMode::Create);
    }

    pub fn open_edit(&mut self, record: &Record) {
        self.error = None;
        self.draft = record.clone();
        self.form = record.id().map(FormMode::Edit).or(Some(FormMode::Create));
    }

    pub fn open_view(&mut self, record: &Record) {
        if let Some(id) = record.id() {
            self.draft = record.clone();
            self.form = Some(FormMode::View(id));
        }
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.draft = Record::new();
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    /// Id of the record being edited, if any.
    pub fn editing_id(&self) -> Option<&str> {
        match &self.form {
            Some(FormMode::Edit(id)) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn set_field(&mut self, name: &str, value: Value) {
        self.draft.set(name, value);
    }

    /// Apply a successful save: replace in place when editing, else append.
    pub fn apply_saved(&mut self, saved: Record) {
        match self.editing_id().map(str::to_string) {
            Some(id) => match self.records.iter().position(|r| r.id().as_deref() == Some(&id)) {
                Some(index) => self.records[index] = saved,
                None => self.records.push(saved),
            },
            None => self.records.push(saved),
        }
        self.close_form();
    }

    /// Save without a backend. Creates receive `new_id`; edits keep their id.
    pub fn apply_local_save(&mut self, new_id: String) {
        let mut saved = self.draft.clone();
        let id = self.editing_id().map(str::to_string).unwrap_or(new_id);
        saved.set("id", id);
        self.apply_saved(saved);
    }

    /// A new save attempt clears the banner of the previous one.
    pub fn begin_save(&mut self) {
        self.error = None;
    }

    /// A failed save keeps the form open and the list untouched.
    pub fn save_failed(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn remove(&mut self, id: &str) {
        self.records.retain(|r| r.id().as_deref() != Some(id));
    }

    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Records matching the current search text.
    pub fn visible_records(&self) -> Vec<Record> {
        filter_list(&self.records, &self.search)
    }
}
