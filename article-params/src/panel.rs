use crate::catalog::OptionCatalog;
use crate::draft::{OptionSetConsumer, ParameterDraftStore};
use crate::model::{ArticleOptionSet, OptionCategory, OptionValue};
use crate::visibility::{
    Boundary, InteractionSource, PanelVisibilityController, Visibility,
};

/// Article parameters drawer: one visibility controller plus one draft
/// store sharing a catalog.
///
/// Visibility and drafts are independent. Closing the drawer, by toggle or
/// by outside interaction, keeps unsaved drafts for the next opening and
/// never notifies the consumer.
pub struct ArticleParamsPanel<T, B, S, C>
where
    S: InteractionSource<T>,
{
    catalog: OptionCatalog,
    visibility: PanelVisibilityController<T, B, S>,
    store: ParameterDraftStore<C>,
}

impl<T, B, S, C> ArticleParamsPanel<T, B, S, C>
where
    B: Boundary<T>,
    S: InteractionSource<T>,
    C: OptionSetConsumer,
{
    /// Create a closed panel whose drafts start at the catalog defaults.
    pub fn new(
        catalog: OptionCatalog,
        boundary: B,
        source: S,
        consumer: C,
    ) -> Self {
        let store =
            ParameterDraftStore::new(catalog.defaults().clone(), consumer);
        Self {
            catalog,
            visibility: PanelVisibilityController::new(boundary, source),
            store,
        }
    }

    /// Return the catalog the selectors offer.
    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    /// Region treated as inside the panel.
    pub fn boundary(&self) -> &B {
        self.visibility.boundary()
    }

    /// Return whether the panel is open.
    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// Return the current open/closed state.
    pub fn visibility(&self) -> Visibility {
        self.visibility.visibility()
    }

    /// Open a closed panel or close an open one.
    pub fn toggle(&mut self) {
        self.visibility.toggle();
    }

    /// Open the panel and start listening for outside interactions.
    pub fn open(&mut self) {
        self.visibility.open();
    }

    /// Close the panel, keeping unsaved drafts.
    pub fn close(&mut self) {
        self.visibility.close();
    }

    /// Apply the outside-dismiss rule to interactions delivered so far.
    pub fn process_interactions(&mut self) -> bool {
        self.visibility.process_interactions()
    }

    /// Replace one category's draft without notifying the consumer.
    pub fn set_draft(&mut self, category: OptionCategory, value: OptionValue) {
        debug_assert!(
            self.catalog.contains(category, &value),
            "draft {category} value is not part of the catalog",
        );
        self.store.set_draft(category, value);
    }

    /// Return the current draft of `category`.
    pub fn draft(&self, category: OptionCategory) -> &OptionValue {
        self.store.draft(category)
    }

    /// Return a copy of all five drafts.
    pub fn draft_snapshot(&self) -> ArticleOptionSet {
        self.store.draft_snapshot()
    }

    /// Return the last option set handed to the consumer.
    pub fn applied(&self) -> &ArticleOptionSet {
        self.store.applied()
    }

    /// Return whether the drafts differ from the applied set.
    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    /// Publish the current drafts once.
    pub fn apply(&mut self) {
        self.store.apply();
    }

    /// Return drafts to the catalog defaults and publish them once.
    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// Mutable access to the consumer receiving published sets.
    pub fn consumer_mut(&mut self) -> &mut C {
        self.store.consumer_mut()
    }
}
