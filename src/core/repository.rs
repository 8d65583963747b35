use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // appends an entity, keeping insertion order
    async fn create(&self, entity: Entity) -> LibraryResult<usize>;

    // returns all entities in insertion order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;

    // removes the first entity with the given id
    async fn delete(&self, id: &str) -> LibraryResult<Entity>;

    // number of stored entities
    async fn count(&self) -> LibraryResult<usize>;
}
