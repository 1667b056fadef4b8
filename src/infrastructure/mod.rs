// ============================================================================
// Infrastructure - Storage adapters for the repository interface
// ============================================================================

mod memory_repository;

pub use memory_repository::InMemoryRepository;
