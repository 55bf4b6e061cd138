//! Catalog backend port definitions.

use async_trait::async_trait;

use crate::domain::entities::{
    Authors, Books, Borrowings, Categories, EntityId, NamedRef, Publishers,
};
use crate::domain::errors::ApiError;
use crate::domain::resource::{Resource, ResourceKind};

/// Port for reading and writing one catalog collection.
#[async_trait]
pub trait ResourcePort<R: Resource>: Send + Sync {
    /// Fetches every record of the collection.
    async fn list(&self) -> Result<Vec<R::Entity>, ApiError>;

    /// Creates a record and returns it with its server-assigned identifier.
    async fn create(&self, payload: &R::Payload) -> Result<R::Entity, ApiError>;

    /// Replaces a record and returns the updated representation.
    async fn update(&self, id: EntityId, payload: &R::Payload) -> Result<R::Entity, ApiError>;

    /// Deletes a record.
    async fn delete(&self, id: EntityId) -> Result<(), ApiError>;
}

/// Port for the `{id, name}` options that populate reference fields.
#[async_trait]
pub trait ReferencePort: Send + Sync {
    /// Fetches selectable records of a collection.
    async fn options(&self, kind: ResourceKind) -> Result<Vec<NamedRef>, ApiError>;
}

/// Backend serving every catalog collection.
pub trait CatalogPort:
    ResourcePort<Authors>
    + ResourcePort<Books>
    + ResourcePort<Publishers>
    + ResourcePort<Categories>
    + ResourcePort<Borrowings>
    + ReferencePort
    + 'static
{
}

impl<T> CatalogPort for T where
    T: ResourcePort<Authors>
        + ResourcePort<Books>
        + ResourcePort<Publishers>
        + ResourcePort<Categories>
        + ResourcePort<Borrowings>
        + ReferencePort
        + 'static
{
}

#[cfg(test)]
#[allow(missing_docs)]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    /// Request observed by a mock port.
    #[derive(Debug, Clone)]
    pub enum Call<P> {
        List,
        Create(P),
        Update(EntityId, P),
        Delete(EntityId),
    }

    /// Scripted resource port for testing.
    ///
    /// Responses to create and update are popped from a queue; an empty
    /// queue answers with a status error.
    pub struct MockResourcePort<R: Resource> {
        list_result: Mutex<Result<Vec<R::Entity>, ApiError>>,
        write_results: Mutex<VecDeque<Result<R::Entity, ApiError>>>,
        delete_results: Mutex<VecDeque<Result<(), ApiError>>>,
        calls: Mutex<Vec<Call<R::Payload>>>,
    }

    impl<R: Resource> MockResourcePort<R> {
        pub fn new(records: Vec<R::Entity>) -> Self {
            Self {
                list_result: Mutex::new(Ok(records)),
                write_results: Mutex::new(VecDeque::new()),
                delete_results: Mutex::new(VecDeque::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing_list(error: ApiError) -> Self {
            let port = Self::new(Vec::new());
            *port.list_result.lock().unwrap() = Err(error);
            port
        }

        pub fn respond_with(&self, result: Result<R::Entity, ApiError>) {
            self.write_results.lock().unwrap().push_back(result);
        }

        pub fn respond_to_delete(&self, result: Result<(), ApiError>) {
            self.delete_results.lock().unwrap().push_back(result);
        }

        pub fn calls(&self) -> Vec<Call<R::Payload>> {
            self.calls.lock().unwrap().clone()
        }

        fn next_write(&self) -> Result<R::Entity, ApiError> {
            self.write_results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::status(500, "no scripted response")))
        }
    }

    #[async_trait]
    impl<R: Resource> ResourcePort<R> for MockResourcePort<R> {
        async fn list(&self) -> Result<Vec<R::Entity>, ApiError> {
            self.calls.lock().unwrap().push(Call::List);
            self.list_result.lock().unwrap().clone()
        }

        async fn create(&self, payload: &R::Payload) -> Result<R::Entity, ApiError> {
            self.calls.lock().unwrap().push(Call::Create(payload.clone()));
            self.next_write()
        }

        async fn update(&self, id: EntityId, payload: &R::Payload) -> Result<R::Entity, ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Update(id, payload.clone()));
            self.next_write()
        }

        async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(Call::Delete(id));
            self.delete_results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(()))
        }
    }

    /// Reference port serving fixed option lists.
    #[derive(Default)]
    pub struct MockReferencePort {
        options: Mutex<HashMap<ResourceKind, Result<Vec<NamedRef>, ApiError>>>,
        requested: Mutex<Vec<ResourceKind>>,
    }

    impl MockReferencePort {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_options(self, kind: ResourceKind, options: Vec<NamedRef>) -> Self {
            self.options.lock().unwrap().insert(kind, Ok(options));
            self
        }

        pub fn with_failure(self, kind: ResourceKind, error: ApiError) -> Self {
            self.options.lock().unwrap().insert(kind, Err(error));
            self
        }

        pub fn requested(&self) -> Vec<ResourceKind> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ReferencePort for MockReferencePort {
        async fn options(&self, kind: ResourceKind) -> Result<Vec<NamedRef>, ApiError> {
            self.requested.lock().unwrap().push(kind);
            self.options
                .lock()
                .unwrap()
                .get(&kind)
                .cloned()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }
}
