//! Grid pages: bounded, deduplicating, positioned orders of items.
//!
//! ## Key Components
//!
//! | Type           | Role                                                    |
//! |----------------|---------------------------------------------------------|
//! | [`GridCore`]   | Single-threaded order, layout and snapshot cache        |
//! | [`GridPage`]   | `RwLock`-guarded core plus the recents persistence hook |
//! | [`GridSnapshot`] | Immutable copy of the positioned items handed to readers |
//!
//! ## Thread Safety
//!
//! - [`GridCore`]: requires `&mut self` for inserts and snapshot rebuilds.
//! - [`GridPage`]: `Send + Sync`; the order and the cache change together
//!   under one write lock, and cached reads take only the read lock.

pub mod core;
pub mod page;
pub mod snapshot;

pub use self::core::{GridCore, InsertSummary};
pub use page::GridPage;
pub use snapshot::GridSnapshot;
