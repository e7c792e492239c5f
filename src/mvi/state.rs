/// A complete snapshot of what one view renders.
///
/// `PartialEq` lets publishers drop updates that leave the snapshot
/// unchanged; `Default` supplies the state a fresh container starts from.
/// `Sync` is needed because observers read the snapshot from other tasks.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
