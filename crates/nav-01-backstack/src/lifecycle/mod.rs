//! Record lifecycle protocol
//!
//! Explicit attach/detach tracking keyed by `RecordKey`:
//!
//! - `RecordLifecycle` diffs consecutive stack states and emits
//!   `Activated` / `Deactivated` / `Released` events to its observers.
//! - `RecordStore` is an arena of per-record values that drops an entry when
//!   its record is released.
//!
//! A record parked in a saved snapshot is still retained; it is released only
//! once no live entry and no snapshot refers to it.

pub mod store;
pub mod tracker;

pub use store::RecordStore;
pub use tracker::RecordLifecycle;
