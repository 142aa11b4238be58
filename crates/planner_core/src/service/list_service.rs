//! Shopping list use-case service.
//!
//! # Responsibility
//! - Own the in-memory list model and the override-table mirror.
//! - Reconcile every mutation with the remote store per the sync rules.
//!
//! # Invariants
//! - The model mutates only through these entry points; there is no ambient
//!   global state.
//! - `load_all` leaves the model untouched when the remote fetch fails.
//! - Fire-and-forget writes (single-field patches, creates, deletes, clears)
//!   log transport failures and never roll back the optimistic local state.

use crate::classify::{classify, KeywordTable};
use crate::model::item::Item;
use crate::model::list::{InsertOutcome, MoveOutcome, ShoppingList};
use crate::normalize::normalize;
use crate::repo::override_repo::{LearnOutcome, OverrideRepository, RepoError};
use crate::sync::{ItemPatch, RemoteItem, RemoteStore, SyncError, SyncResult};
use log::{error, info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
    Repo(RepoError),
    Sync(SyncError),
    /// Caller named a category outside the configured enumeration.
    UnknownCategory { category: String },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Sync(err) => write!(f, "{err}"),
            Self::UnknownCategory { category } => {
                write!(f, "unknown category `{category}`")
            }
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Sync(err) => Some(err),
            Self::UnknownCategory { .. } => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<SyncError> for ServiceError {
    fn from(value: SyncError) -> Self {
        Self::Sync(value)
    }
}

/// Result of an [`ListService::add_item`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Item entered the model. `synced` is `false` when the remote create
    /// failed and the item stayed local-only (`id: None`).
    Added { item: Item, synced: bool },
    /// The resolved category already holds an item with this name.
    Duplicate { name: String, category: String },
    /// Input normalized to nothing usable; silently dropped.
    Discarded,
}

/// Counters returned by a bulk recipe import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub skipped: usize,
}

/// Constructor-injected owner of the list model.
///
/// `R` is the remote store transport, `O` the learning store. The override
/// table is mirrored in memory for pure classification; the repository stays
/// the source of truth and the mirror is updated on every learn/forget.
pub struct ListService<R: RemoteStore, O: OverrideRepository> {
    remote: R,
    override_repo: O,
    overrides: BTreeMap<String, String>,
    table: KeywordTable,
    list: ShoppingList,
}

impl<R: RemoteStore, O: OverrideRepository> ListService<R, O> {
    /// Builds an empty service over the configured keyword table, loading the
    /// learned overrides from the repository.
    pub fn new(remote: R, override_repo: O, table: KeywordTable) -> ServiceResult<Self> {
        let overrides = override_repo.load_all()?;
        let list = ShoppingList::new(table.category_names(), table.fallback());
        Ok(Self {
            remote,
            override_repo,
            overrides,
            table,
            list,
        })
    }

    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    pub fn overrides(&self) -> &BTreeMap<String, String> {
        &self.overrides
    }

    /// View-state for the projector, emitted after every mutation.
    pub fn snapshot(&self) -> Vec<(String, Vec<Item>)> {
        self.list.snapshot()
    }

    /// Rebuilds the local model from the remote item collection.
    ///
    /// Soft-cleared rows (`active = false`) are skipped. Records carrying a
    /// category outside the enumeration land in the fallback. Duplicate
    /// names within one category are dropped so the model invariant holds.
    /// On transport failure the existing model is left untouched and the
    /// error is returned for the caller to surface.
    pub fn load_all(&mut self) -> SyncResult<()> {
        let records = self.remote.fetch_items()?;

        let mut rebuilt = ShoppingList::new(
            self.list.categories().to_vec(),
            self.list.fallback().to_string(),
        );
        for record in records {
            if !record.active {
                continue;
            }
            let item = Item {
                id: record.id,
                name: record.name,
                category: record.category,
                checked: record.checked,
                crossed: record.crossed,
                amount: record.amount,
            };
            match rebuilt.insert(item) {
                InsertOutcome::Inserted { category, coerced } if coerced => {
                    warn!(
                        "event=list_load module=service status=coerced_category category={category}"
                    );
                }
                InsertOutcome::Inserted { .. } => {}
                InsertOutcome::Duplicate { category } => {
                    warn!(
                        "event=list_load module=service status=duplicate_dropped category={category}"
                    );
                }
            }
        }

        self.list = rebuilt;
        info!(
            "event=list_load module=service status=ok items={}",
            self.list.len()
        );
        Ok(())
    }

    /// Adds one free-text entry to the list.
    ///
    /// The name is normalized first; empty results are discarded. The target
    /// category is the hint when it names a known category, otherwise the
    /// classifier's verdict. The remote create runs before the local insert
    /// so a returned id becomes the item's durable identity; a create failure
    /// degrades to a local-only item. New names are recorded in the learning
    /// store.
    pub fn add_item(&mut self, raw: &str, category_hint: Option<&str>) -> AddOutcome {
        let name = normalize(raw);
        if name.is_empty() {
            return AddOutcome::Discarded;
        }

        let category = match category_hint {
            Some(hint) if self.table.contains(hint) => hint.to_string(),
            _ => {
                // Overrides loaded from an older config may name a category
                // outside the current table; resolve before any remote write
                // so the reported category matches where the item lands.
                let verdict = classify(&name, &self.overrides, &self.table);
                self.list.resolve_category(&verdict).to_string()
            }
        };

        if self.list.contains(&category, &name) {
            return AddOutcome::Duplicate { name, category };
        }

        let mut item = Item::new(name.clone(), category.clone());
        let synced = match self.remote.create_item(&name, &category) {
            Ok(id) => {
                item.id = Some(id);
                true
            }
            Err(err) => {
                error!("event=item_create module=service status=error name={name} error={err}");
                false
            }
        };

        self.list.insert(item.clone());
        self.record_override(&name, &category);
        AddOutcome::Added { item, synced }
    }

    /// Sets the checked flag; persists exactly that field.
    pub fn toggle_checked(&mut self, category: &str, name: &str, value: bool) -> bool {
        self.update_field(category, name, |item| item.checked = value, ItemPatch::checked(value))
    }

    /// Sets the strike-through flag; persists exactly that field.
    pub fn set_crossed(&mut self, category: &str, name: &str, value: bool) -> bool {
        self.update_field(category, name, |item| item.crossed = value, ItemPatch::crossed(value))
    }

    /// Sets the free-text amount; persists exactly that field.
    pub fn set_amount(&mut self, category: &str, name: &str, amount: &str) -> bool {
        let patch = ItemPatch::amount(amount);
        self.update_field(category, name, |item| item.amount = amount.to_string(), patch)
    }

    /// Moves an item between categories and persists the full list.
    ///
    /// Category reassignment is not expressible as a single-field patch in
    /// the remote model, so a successful move is followed by a full-list
    /// overwrite.
    pub fn move_item(&mut self, name: &str, from: &str, to: &str) -> MoveOutcome {
        let outcome = self.list.move_item(name, from, to);
        if outcome == MoveOutcome::Moved {
            if let Err(err) = self.remote.replace_items(&self.remote_view()) {
                error!("event=list_persist module=service status=error name={name} error={err}");
            }
        }
        outcome
    }

    /// Deletes an item, forgets its learned override, and issues the remote
    /// delete. Returns `false` when no such item exists.
    pub fn delete_item(&mut self, category: &str, name: &str) -> bool {
        let Some(item) = self.list.remove(category, name) else {
            return false;
        };

        match self.override_repo.forget(&item.name) {
            Ok(true) => {
                self.overrides.remove(&item.name);
            }
            Ok(false) => {}
            Err(err) => {
                error!(
                    "event=override_forget module=service status=error name={} error={err}",
                    item.name
                );
            }
        }

        if let Some(id) = item.id {
            if let Err(err) = self.remote.delete_item(id) {
                error!("event=item_delete module=service status=error id={id} error={err}");
            }
        }
        true
    }

    /// Empties every category while keeping the category keys, then issues
    /// the remote soft clear (a visibility reset, not a destructive purge).
    pub fn clear_all(&mut self) {
        self.list.clear_all();
        if let Err(err) = self.remote.clear_items() {
            error!("event=list_clear module=service status=error error={err}");
        }
    }

    /// Bulk-imports ingredients from externally-selected recipes.
    ///
    /// Each ingredient line is normalized, classified and added unless an
    /// item with the same name already exists in its target category
    /// (existence-check de-duplication; no quantity accumulation). The meal
    /// fetch itself is a hard dependency; its failure leaves the model
    /// untouched.
    pub fn import_selected(&mut self, ids: &[i64]) -> SyncResult<ImportSummary> {
        let meals = self.remote.fetch_selected_meals(ids)?;

        let mut summary = ImportSummary::default();
        for meal in &meals {
            for line in meal.ingredients.lines() {
                let name = normalize(&line);
                if name.is_empty() {
                    continue;
                }
                let verdict = classify(&name, &self.overrides, &self.table);
                let category = self.list.resolve_category(&verdict).to_string();
                if self.list.contains(&category, &name) {
                    summary.skipped += 1;
                    continue;
                }

                let mut item = Item::new(name.clone(), category.clone());
                match self.remote.create_item(&name, &category) {
                    Ok(id) => item.id = Some(id),
                    Err(err) => {
                        error!(
                            "event=item_create module=service status=error name={name} error={err}"
                        );
                    }
                }
                self.list.insert(item);
                summary.added += 1;
            }
        }

        info!(
            "event=import module=service status=ok meals={} added={} skipped={}",
            meals.len(),
            summary.added,
            summary.skipped
        );
        Ok(summary)
    }

    /// Records a user-confirmed category override (drag-confirm gesture).
    ///
    /// The name is normalized first; empty names are an idempotent no-op.
    /// Categories outside the configured table are rejected so the override
    /// store never teaches the classifier a category the list cannot hold.
    /// This only teaches the classifier, it does not move existing items.
    pub fn learn_category(&mut self, name: &str, category: &str) -> ServiceResult<LearnOutcome> {
        let name = normalize(name);
        if name.is_empty() {
            return Ok(LearnOutcome::Unchanged);
        }
        let category = category.trim();
        if !self.table.contains(category) {
            return Err(ServiceError::UnknownCategory {
                category: category.to_string(),
            });
        }
        let outcome = self.override_repo.learn(&name, category)?;
        if outcome == LearnOutcome::Learned {
            self.overrides.insert(name, category.to_string());
        }
        Ok(outcome)
    }

    /// Removes a learned override; returns `false` when none existed.
    pub fn forget(&mut self, name: &str) -> ServiceResult<bool> {
        let name = normalize(name);
        if name.is_empty() {
            return Ok(false);
        }
        let removed = self.override_repo.forget(&name)?;
        if removed {
            self.overrides.remove(&name);
        }
        Ok(removed)
    }

    /// Printable export: checked items grouped under upper-cased category
    /// headers, in display order.
    pub fn render_checklist(&self) -> String {
        let mut out = String::new();
        for (category, items) in self.list.iter() {
            let checked: Vec<&Item> = items.iter().filter(|item| item.checked).collect();
            if checked.is_empty() {
                continue;
            }
            out.push_str(&category.to_uppercase());
            out.push_str(":\n");
            for item in checked {
                if item.amount.is_empty() {
                    out.push_str(&format!("• {}\n", item.name));
                } else {
                    out.push_str(&format!("• {} ({})\n", item.name, item.amount));
                }
            }
            out.push('\n');
        }
        out
    }

    fn update_field(
        &mut self,
        category: &str,
        name: &str,
        apply: impl FnOnce(&mut Item),
        patch: ItemPatch,
    ) -> bool {
        let Some(item) = self.list.get_mut(category, name) else {
            return false;
        };
        apply(item);

        // Local-only items have nothing to patch yet.
        if let Some(id) = item.id {
            if let Err(err) = self.remote.patch_item(id, &patch) {
                error!("event=item_patch module=service status=error id={id} error={err}");
            }
        }
        true
    }

    /// Best-effort learn on add; repo failures degrade to a log line so the
    /// already-applied local insert is never surfaced as an error.
    fn record_override(&mut self, name: &str, category: &str) {
        match self.override_repo.learn(name, category) {
            Ok(LearnOutcome::Learned) => {
                self.overrides.insert(name.to_string(), category.to_string());
            }
            Ok(LearnOutcome::Unchanged) => {}
            Err(err) => {
                error!("event=override_learn module=service status=error name={name} error={err}");
            }
        }
    }

    fn remote_view(&self) -> Vec<RemoteItem> {
        self.list
            .all_items()
            .map(|item| RemoteItem {
                id: item.id,
                name: item.name.clone(),
                category: item.category.clone(),
                checked: item.checked,
                crossed: item.crossed,
                amount: item.amount.clone(),
                active: true,
            })
            .collect()
    }
}
