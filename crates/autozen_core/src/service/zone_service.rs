//! Zone editing use-case service.
//!
//! # Responsibility
//! - Provide the editor-facing save/remove/fetch/list entry points.
//! - Own the name-keyed upsert rule, keeping it out of the evaluator.
//!
//! # Invariants
//! - Drafts are validated before any repository write.
//! - Upsert matches names exactly (case-sensitive); a rename is therefore
//!   indistinguishable from creating a new zone.

use crate::model::zone::{Zone, ZoneDraft, ZoneId};
use crate::repo::zone_repo::{RepoResult, ZoneRepository};
use log::info;

/// Use-case service wrapper for zone editing operations.
pub struct ZoneService<R: ZoneRepository> {
    repo: R,
}

impl<R: ZoneRepository> ZoneService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves an editor-submitted draft.
    ///
    /// # Contract
    /// - An existing zone with the same name (exact match) is replaced in
    ///   place, keeping its id; otherwise a new zone is inserted.
    /// - Returns the id of the affected zone.
    ///
    /// # Errors
    /// - `RepoError::Validation` when the draft is invalid; nothing is
    ///   persisted in that case.
    pub fn upsert_zone(&self, draft: &ZoneDraft) -> RepoResult<ZoneId> {
        draft.validate()?;

        let existing = self
            .repo
            .list_zones()?
            .into_iter()
            .find(|zone| zone.name == draft.name);

        match existing {
            Some(zone) => {
                let replacement = draft.clone().into_zone(zone.id);
                self.repo.update_zone(&replacement)?;
                info!(
                    "event=zone_upsert module=service status=ok op=update id={} name={}",
                    zone.id, replacement.name
                );
                Ok(zone.id)
            }
            None => {
                let id = self.repo.insert_zone(draft)?;
                info!(
                    "event=zone_upsert module=service status=ok op=insert id={id} name={}",
                    draft.name
                );
                Ok(id)
            }
        }
    }

    /// Deletes a zone by id. Absent ids are a no-op.
    pub fn remove_zone(&self, id: ZoneId) -> RepoResult<()> {
        self.repo.delete_zone(id)?;
        info!("event=zone_remove module=service status=ok id={id}");
        Ok(())
    }

    /// Gets one zone by id.
    pub fn fetch_zone(&self, id: ZoneId) -> RepoResult<Option<Zone>> {
        self.repo.get_zone(id)
    }

    /// Lists all zones in insertion order.
    pub fn list_zones(&self) -> RepoResult<Vec<Zone>> {
        self.repo.list_zones()
    }
}
