//! Resource use case implementation.

use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::{debug, info, warn};

use crate::application::dto::{
    Completed, LoadPart, LoadedData, Operation, OperationOutcome, ReferenceOptions,
};
use crate::domain::entities::NamedRef;
use crate::domain::errors::ApiError;
use crate::domain::ports::{ReferencePort, ResourcePort};
use crate::domain::resource::{ReferenceLoad, Resource, ResourceKind};

/// Loads and writes the records of one collection.
pub struct ResourceUseCase<R: Resource> {
    port: Arc<dyn ResourcePort<R>>,
    references: Arc<dyn ReferencePort>,
}

impl<R: Resource> Clone for ResourceUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            port: Arc::clone(&self.port),
            references: Arc::clone(&self.references),
        }
    }
}

impl<R: Resource> ResourceUseCase<R> {
    /// Creates new resource use case.
    #[must_use]
    pub fn new(port: Arc<dyn ResourcePort<R>>, references: Arc<dyn ReferencePort>) -> Self {
        Self { port, references }
    }

    /// Fetches the collection together with every reference list its form
    /// needs. All requests run concurrently.
    ///
    /// A joint load fails on the first failure. An independent load keeps
    /// whichever side succeeded and reports the other through
    /// [`LoadedData::failed`].
    ///
    /// # Errors
    /// Returns error if a joint load has any failing request, or if both
    /// sides of an independent load fail.
    pub async fn load(&self) -> Result<LoadedData<R>, ApiError> {
        let kinds = R::references();
        debug!(resource = %R::KIND, references = kinds.len(), load = ?R::REFERENCE_LOAD, "Loading screen data");

        let references = try_join_all(kinds.into_iter().map(|kind| async move {
            self.references
                .options(kind)
                .await
                .map(|options| (kind, options))
        }));

        let loaded = match R::REFERENCE_LOAD {
            ReferenceLoad::Joint => {
                let (records, references) = tokio::try_join!(self.port.list(), references)
                    .map_err(|e| {
                        warn!(resource = %R::KIND, error = %e, "Failed to load screen data");
                        e
                    })?;
                LoadedData::new(records, references.into_iter().collect())
            }
            ReferenceLoad::Independent => {
                let (records, references) = tokio::join!(self.port.list(), references);
                Self::merge_independent(records, references)?
            }
        };

        info!(resource = %R::KIND, count = loaded.records.len(), failed = ?loaded.failed, "Screen data loaded");
        Ok(loaded)
    }

    fn merge_independent(
        records: Result<Vec<R::Entity>, ApiError>,
        references: Result<Vec<(ResourceKind, Vec<NamedRef>)>, ApiError>,
    ) -> Result<LoadedData<R>, ApiError> {
        match (records, references) {
            (Ok(records), Ok(references)) => {
                Ok(LoadedData::new(records, references.into_iter().collect()))
            }
            (Ok(records), Err(e)) => {
                warn!(resource = %R::KIND, error = %e, "Failed to load reference lists");
                Ok(LoadedData {
                    records,
                    references: ReferenceOptions::new(),
                    failed: Some(LoadPart::References),
                })
            }
            (Err(e), Ok(references)) => {
                warn!(resource = %R::KIND, error = %e, "Failed to load records");
                Ok(LoadedData {
                    records: Vec::new(),
                    references: references.into_iter().collect(),
                    failed: Some(LoadPart::Records),
                })
            }
            (Err(e), Err(other)) => {
                warn!(resource = %R::KIND, error = %e, references = %other, "Failed to load screen data");
                Err(e)
            }
        }
    }

    /// Sends a create, update or delete request.
    pub async fn execute(&self, operation: Operation<R>) -> OperationOutcome<R> {
        let target = operation.target();
        let action = operation.action();
        debug!(resource = %R::KIND, target = %target, action = ?action, "Executing operation");

        let result = match operation {
            Operation::Create(payload) => self.port.create(&payload).await.map(Completed::Created),
            Operation::Update(id, payload) => {
                self.port.update(id, &payload).await.map(Completed::Updated)
            }
            Operation::Delete(id) => self.port.delete(id).await.map(|()| Completed::Deleted(id)),
        };

        match &result {
            Ok(_) => info!(resource = %R::KIND, target = %target, action = ?action, "Operation succeeded"),
            Err(e) => warn!(resource = %R::KIND, target = %target, action = ?action, error = %e, "Operation failed"),
        }

        OperationOutcome {
            target,
            action,
            result,
        }
    }
}
