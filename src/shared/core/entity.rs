use uuid::Uuid;

/// Anything the repositories can store: a record carrying a unique identifier.
///
/// The store owns identity. It reads the id to find entities and writes it
/// when minting a fresh one on insert.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;

    fn set_id(&mut self, id: Uuid);
}
