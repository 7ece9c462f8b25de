pub use crate::builder::GridPageBuilder;
pub use crate::ds::{BoundedDeque, End};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::grid::{GridCore, GridPage, GridSnapshot, InsertSummary};
pub use crate::item::{Item, ItemKey, PositionedItem, Rect};
pub use crate::layout::{GridLayout, LayoutMetrics, TEMPLATE_CODE_0, TEMPLATE_CODE_1};
#[cfg(feature = "metrics")]
pub use crate::metrics::GridMetricsSnapshot;
pub use crate::persist::{
    MalformedTokenPolicy, RECENT_KEY_SEPARATOR, RECENT_KEYS_SETTING, RestoreReport,
};
pub use crate::store::{MemorySettingsStore, SettingsStore};
pub use crate::traits::{KeyboardGrid, LookupSource};
