//! Edit session — selection and per-bullet draft fields as one caller-owned value.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resume::analysis::BulletRecord;
use crate::resume::fields::{seed_fields, BulletFields};
use crate::vocab::Vocabulary;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeSession {
    records: Vec<BulletRecord>,
    selected: Option<Uuid>,
    drafts: HashMap<Uuid, BulletFields>,
}

impl ResumeSession {
    /// Starts a session with the first record selected and every draft seeded
    /// from its record's fields.
    pub fn new(records: Vec<BulletRecord>) -> Self {
        let selected = records.first().map(|r| r.id());
        let drafts = records
            .iter()
            .map(|r| (r.id(), r.fields().clone()))
            .collect();
        Self {
            records,
            selected,
            drafts,
        }
    }

    pub fn records(&self) -> &[BulletRecord] {
        &self.records
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&BulletRecord> {
        self.selected.and_then(|id| self.record(id))
    }

    pub fn record(&self, id: Uuid) -> Option<&BulletRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn draft(&self, id: Uuid) -> Option<&BulletFields> {
        self.drafts.get(&id)
    }

    /// Selects `id`. Unknown ids leave the selection unchanged and return false.
    pub fn select(&mut self, id: Uuid) -> bool {
        if self.record(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Stores the draft and recomputes the matching record from it.
    pub fn update_draft(
        &mut self,
        id: Uuid,
        fields: BulletFields,
        vocab: &Vocabulary,
    ) -> Option<&BulletRecord> {
        let position = self.records.iter().position(|r| r.id() == id)?;
        let updated = self.records[position].with_fields(fields.clone(), vocab);
        self.records[position] = updated;
        self.drafts.insert(id, fields);
        Some(&self.records[position])
    }

    /// Discards edits: reseeds the draft from the record's original text.
    pub fn reset_draft(&mut self, id: Uuid, vocab: &Vocabulary) -> Option<&BulletRecord> {
        let original = self.record(id)?.original().to_string();
        self.update_draft(id, seed_fields(&original, vocab), vocab)
    }
}
