//! In-process link table shared by the memory and file backends.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{InsertOutcome, NewShortLink, ShortLink};

/// One persisted record of the file backend.
///
/// `short_url` holds the short id. `uuid` is a sequence number reassigned
/// on every save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub uuid: String,
    pub short_url: String,
    pub original_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// All links keyed by short id.
///
/// Duplicate-URL detection is a linear scan over every entry. That is fine
/// for the small data sets these backends are meant for.
#[derive(Debug, Clone, Default)]
pub struct LinkTable {
    links: HashMap<String, ShortLink>,
}

impl LinkTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn get(&self, id: &str, owner_id: Option<&str>) -> Option<ShortLink> {
        self.links
            .get(id)
            .filter(|link| link.is_visible_to(owner_id))
            .cloned()
    }

    pub fn find_by_url(&self, url: &str, owner_id: Option<&str>) -> Option<&ShortLink> {
        self.links
            .values()
            .find(|link| link.is_same_target(url, owner_id))
    }

    /// Stores `new_link` unless its owner already has the same URL.
    ///
    /// An existing entry under the same id is overwritten.
    pub fn insert(&mut self, new_link: NewShortLink) -> InsertOutcome {
        if let Some(existing) = self.find_by_url(&new_link.original_url, new_link.owner_id.as_deref())
        {
            return InsertOutcome::Conflict {
                existing_id: existing.id.clone(),
            };
        }

        if let Some(previous) = self.links.get(&new_link.id) {
            tracing::warn!(
                id = %new_link.id,
                previous_url = %previous.original_url,
                "overwriting link with a duplicate short id"
            );
        }

        self.links
            .insert(new_link.id.clone(), new_link.into_link());

        InsertOutcome::Inserted
    }

    pub fn insert_batch(&mut self, links: Vec<NewShortLink>) -> Vec<InsertOutcome> {
        links.into_iter().map(|link| self.insert(link)).collect()
    }

    /// Flattens the table into records ordered by short id.
    pub fn to_records(&self) -> Vec<LinkRecord> {
        let mut links: Vec<&ShortLink> = self.links.values().collect();
        links.sort_by(|a, b| a.id.cmp(&b.id));

        links
            .into_iter()
            .enumerate()
            .map(|(i, link)| LinkRecord {
                uuid: (i + 1).to_string(),
                short_url: link.id.clone(),
                original_url: link.original_url.clone(),
                user_id: link.owner_id.clone(),
            })
            .collect()
    }

    /// Rebuilds a table from persisted records. An empty `user_id` means no owner.
    pub fn from_records(records: Vec<LinkRecord>) -> Self {
        let links = records
            .into_iter()
            .map(|record| {
                let owner_id = record.user_id.filter(|user| !user.is_empty());
                (
                    record.short_url.clone(),
                    ShortLink::new(record.short_url, record.original_url, owner_id),
                )
            })
            .collect();

        Self { links }
    }
}
