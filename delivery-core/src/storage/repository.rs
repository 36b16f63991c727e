#[cfg(test)]
#[path = "../../tests/unit/storage/repository_test.rs"]
mod repository_test;

use crate::models::OptimizationResult;
use crate::utils::GenericResult;
use std::sync::Arc;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// An identity of a stored run.
pub type RunId = String;

/// An optimization result kept by a repository.
#[derive(Clone, Debug)]
pub struct StoredRun {
    /// A run id.
    pub id: RunId,
    /// A creation timestamp in RFC 3339 format.
    pub created_at: String,
    /// An optimization result.
    pub result: Arc<OptimizationResult>,
}

/// Keeps optimization results so that they can be retrieved later by run id.
pub trait ResultRepository {
    /// Saves the result and returns its run id.
    fn save(&mut self, result: OptimizationResult) -> GenericResult<RunId>;

    /// Finds a run by its id.
    fn find(&self, run_id: &str) -> Option<&StoredRun>;

    /// Returns the most recently saved run.
    fn last(&self) -> Option<&StoredRun>;
}

/// A repository which keeps results in memory, in insertion order.
#[derive(Default)]
pub struct InMemoryRepository {
    runs: Vec<StoredRun>,
}

impl InMemoryRepository {
    /// Returns amount of stored runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Checks whether repository is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl ResultRepository for InMemoryRepository {
    fn save(&mut self, result: OptimizationResult) -> GenericResult<RunId> {
        let created_at = OffsetDateTime::now_utc().format(&Rfc3339).map_err(|err| err.to_string())?;

        // ids are short, so regenerate on collision
        let id = std::iter::repeat_with(generate_run_id)
            .find(|id| self.find(id).is_none())
            .ok_or_else(|| "cannot generate run id".to_string())?;

        self.runs.push(StoredRun { id: id.clone(), created_at, result: Arc::new(result) });

        Ok(id)
    }

    fn find(&self, run_id: &str) -> Option<&StoredRun> {
        self.runs.iter().find(|run| run.id == run_id)
    }

    fn last(&self) -> Option<&StoredRun> {
        self.runs.last()
    }
}

fn generate_run_id() -> RunId {
    uuid::Uuid::new_v4().simple().to_string().chars().take(8).collect()
}
