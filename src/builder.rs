//! Grid page builder.
//!
//! Collects the template, layout metrics and recents wiring for a
//! [`GridPage`] and validates them in one place.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use gridkit::builder::GridPageBuilder;
//! use gridkit::item::Item;
//! use gridkit::layout::{LayoutMetrics, TEMPLATE_CODE_0, TEMPLATE_CODE_1};
//! use gridkit::store::MemorySettingsStore;
//!
//! let store = Arc::new(MemorySettingsStore::new());
//! let page = GridPageBuilder::new(28)
//!     .template(vec![
//!         Item::new(TEMPLATE_CODE_0, 40, 30).at(0, 0),
//!         Item::new(TEMPLATE_CODE_1, 40, 30).at(40, 0),
//!     ])
//!     .metrics(LayoutMetrics::new(280, 4, 0))
//!     .recents(true)
//!     .settings_store(store)
//!     .build();
//! assert!(page.is_recents());
//! assert_eq!(page.layout().columns(), 7);
//! ```

use std::sync::Arc;

use crate::error::ConfigError;
use crate::grid::{GridCore, GridPage};
use crate::item::Item;
use crate::layout::{GridLayout, LayoutMetrics};
use crate::persist::MalformedTokenPolicy;
use crate::store::traits::SettingsStore;

/// Builder for [`GridPage`] instances.
pub struct GridPageBuilder {
    max_count: usize,
    template: Vec<Item>,
    metrics: LayoutMetrics,
    is_recents: bool,
    settings: Option<Arc<dyn SettingsStore>>,
    malformed_policy: MalformedTokenPolicy,
}

impl GridPageBuilder {
    /// Creates a builder for a page holding at most `max_count` items.
    pub fn new(max_count: usize) -> Self {
        Self {
            max_count,
            template: Vec::new(),
            metrics: LayoutMetrics::default(),
            is_recents: false,
            settings: None,
            malformed_policy: MalformedTokenPolicy::default(),
        }
    }

    /// Template items carrying the anchor keys.
    pub fn template(mut self, template: impl Into<Vec<Item>>) -> Self {
        self.template = template.into();
        self
    }

    /// Ambient layout metrics of the enclosing view.
    pub fn metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Marks the page as the recents page, whose order is persisted.
    pub fn recents(mut self, is_recents: bool) -> Self {
        self.is_recents = is_recents;
        self
    }

    /// Settings store used to persist and restore the recents order.
    pub fn settings_store(mut self, store: Arc<dyn SettingsStore>) -> Self {
        self.settings = Some(store);
        self
    }

    /// How restore treats tokens that are not decimal integers.
    pub fn malformed_token_policy(mut self, policy: MalformedTokenPolicy) -> Self {
        self.malformed_policy = policy;
        self
    }

    /// Builds the page.
    ///
    /// # Panics
    ///
    /// Panics on invalid configuration; a missing anchor key is a caller
    /// bug. For a non-panicking alternative, use [`try_build`](Self::try_build).
    pub fn build(self) -> GridPage {
        match self.try_build() {
            Ok(page) => page,
            Err(e) => panic!("{}", e),
        }
    }

    /// Builds the page, returning an error on invalid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the layout cannot be derived from the
    /// template or cannot place `max_count` items, or if a recents page has
    /// no settings store.
    pub fn try_build(self) -> Result<GridPage, ConfigError> {
        let layout = GridLayout::from_template(&self.template, self.metrics)?;
        if self.is_recents && self.settings.is_none() {
            return Err(ConfigError::new("recents page requires a settings store"));
        }
        let core = GridCore::try_new(layout, self.max_count)?;
        Ok(GridPage::from_parts(
            core,
            self.is_recents,
            self.settings,
            self.malformed_policy,
        ))
    }
}
