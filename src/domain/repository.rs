use async_trait::async_trait;

// ============================================================================
// Repository Interface
// ============================================================================
//
// The persistence boundary of the domain. Storage engines implement this
// trait; the domain and application layers only ever see the trait.
//
// ============================================================================

/// An entity that can be stored under a string id
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable kind, used in repository errors
    const KIND: &'static str;

    fn entity_id(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("{kind} already exists: {id}")]
    AlreadyExists { kind: &'static str, id: String },
}

#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn create(&self, entity: &T) -> Result<(), RepositoryError>;

    async fn update(&self, entity: &T) -> Result<(), RepositoryError>;

    async fn find(&self, id: &str) -> Result<T, RepositoryError>;

    /// All entities, in creation order
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;
}
