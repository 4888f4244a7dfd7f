//! Article display parameters: option model, draft store and a dismissible
//! drawer state machine.
//!
//! The crate is UI-agnostic and split into three layers:
//! - data ([`OptionValue`], [`ArticleOptionSet`], [`OptionCatalog`]);
//! - state machines ([`ParameterDraftStore`], [`PanelVisibilityController`]);
//! - host plumbing ([`InteractionBus`], [`Boundary`], catalog storage).
//!
//! A host renders the drawer, emits pointer presses and focus changes into an
//! [`InteractionBus`] and calls [`ArticleParamsPanel::process_interactions`]
//! after each one. While the drawer is closed the bus has no listeners, so a
//! host can skip installing its global hooks entirely.
//!
//! # Quick Example
//!
//! ```
//! use article_params::{
//!     ArticleOptionSet, ArticleParamsPanel, Boundary, Interaction,
//!     InteractionBus, OptionCatalog, OptionCategory,
//! };
//!
//! struct Drawer;
//!
//! impl Boundary<u32> for Drawer {
//!     fn contains(&self, x: &u32) -> bool {
//!         *x < 300
//!     }
//! }
//!
//! let bus = InteractionBus::<u32>::new();
//! let mut applied = Vec::new();
//! let mut panel = ArticleParamsPanel::new(
//!     OptionCatalog::default(),
//!     Drawer,
//!     bus.clone(),
//!     |options: ArticleOptionSet| applied.push(options),
//! );
//!
//! panel.toggle();
//! let large = panel.catalog().options(OptionCategory::FontSize)[2].clone();
//! panel.set_draft(OptionCategory::FontSize, large);
//! panel.apply();
//!
//! bus.emit(Interaction::PointerDown(900));
//! assert!(panel.process_interactions());
//! assert!(!panel.is_open());
//!
//! drop(panel);
//! assert_eq!(applied.len(), 1);
//! ```

mod bus;
mod catalog;
mod draft;
mod errors;
mod model;
mod panel;
mod storage;
mod visibility;

pub use bus::{BusListener, InteractionBus};
pub use catalog::OptionCatalog;
pub use draft::{OptionSetConsumer, ParameterDraftStore};
pub use errors::{CatalogError, ParseCategoryError};
pub use model::{ArticleOptionSet, OptionCategory, OptionValue};
pub use panel::ArticleParamsPanel;
pub use storage::{
    CATALOG_PATH_ENV, CatalogLoad, CatalogLoadStatus, catalog_path,
    load_catalog, load_catalog_from_path, load_catalog_or_default,
};
pub use visibility::{
    Boundary, Interaction, InteractionListener, InteractionSource,
    PanelVisibilityController, Visibility,
};
