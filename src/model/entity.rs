use std::fmt::Debug;

/// A record stored in a [`Table`](crate::storage::Table), identified by an
/// integer id.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// Fields supplied by the caller when creating a record.
    type Draft;

    /// Human-readable name used in log output.
    const KIND: &'static str;

    fn id(&self) -> i32;

    fn from_draft(id: i32, draft: Self::Draft) -> Self;
}
