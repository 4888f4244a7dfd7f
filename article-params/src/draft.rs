use crate::model::{ArticleOptionSet, OptionCategory, OptionValue};

/// Receiver of option sets published by [`ParameterDraftStore::apply`] and
/// [`ParameterDraftStore::reset`].
///
/// Implemented for every `FnMut(ArticleOptionSet)`, so plain closures can be
/// passed directly.
pub trait OptionSetConsumer {
    fn on_change(&mut self, options: ArticleOptionSet);
}

impl<F> OptionSetConsumer for F
where
    F: FnMut(ArticleOptionSet),
{
    fn on_change(&mut self, options: ArticleOptionSet) {
        self(options)
    }
}

/// Five in-progress selections, one per category.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DraftState {
    font_family: OptionValue,
    font_size: OptionValue,
    font_color: OptionValue,
    background_color: OptionValue,
    content_width: OptionValue,
}

impl DraftState {
    fn from_options(options: &ArticleOptionSet) -> Self {
        Self {
            font_family: options.font_family().clone(),
            font_size: options.font_size().clone(),
            font_color: options.font_color().clone(),
            background_color: options.background_color().clone(),
            content_width: options.content_width().clone(),
        }
    }

    fn get(&self, category: OptionCategory) -> &OptionValue {
        match category {
            OptionCategory::FontFamily => &self.font_family,
            OptionCategory::FontSize => &self.font_size,
            OptionCategory::FontColor => &self.font_color,
            OptionCategory::BackgroundColor => &self.background_color,
            OptionCategory::ContentWidth => &self.content_width,
        }
    }

    fn set(&mut self, category: OptionCategory, value: OptionValue) {
        let slot = match category {
            OptionCategory::FontFamily => &mut self.font_family,
            OptionCategory::FontSize => &mut self.font_size,
            OptionCategory::FontColor => &mut self.font_color,
            OptionCategory::BackgroundColor => &mut self.background_color,
            OptionCategory::ContentWidth => &mut self.content_width,
        };
        *slot = value;
    }

    fn snapshot(&self) -> ArticleOptionSet {
        ArticleOptionSet::new(
            self.font_family.clone(),
            self.font_size.clone(),
            self.font_color.clone(),
            self.background_color.clone(),
            self.content_width.clone(),
        )
    }
}

/// Draft selections with explicit apply/reset publication.
///
/// Editing a draft never notifies the consumer; only [`apply`] and
/// [`reset`] do, exactly once per call and synchronously.
///
/// [`apply`]: ParameterDraftStore::apply
/// [`reset`]: ParameterDraftStore::reset
#[derive(Debug)]
pub struct ParameterDraftStore<C> {
    defaults: ArticleOptionSet,
    draft: DraftState,
    applied: ArticleOptionSet,
    consumer: C,
}

impl<C: OptionSetConsumer> ParameterDraftStore<C> {
    /// Create a store whose drafts and applied set start at `defaults`.
    pub fn new(defaults: ArticleOptionSet, consumer: C) -> Self {
        Self {
            draft: DraftState::from_options(&defaults),
            applied: defaults.clone(),
            defaults,
            consumer,
        }
    }

    /// Replace the draft of one category without notifying the consumer.
    ///
    /// The value is trusted to come from the category's catalog.
    pub fn set_draft(&mut self, category: OptionCategory, value: OptionValue) {
        log::trace!("draft {category} set to {}", value.value());
        self.draft.set(category, value);
    }

    /// Return the current draft of `category`.
    pub fn draft(&self, category: OptionCategory) -> &OptionValue {
        self.draft.get(category)
    }

    /// Return a copy of all five drafts.
    pub fn draft_snapshot(&self) -> ArticleOptionSet {
        self.draft.snapshot()
    }

    /// Return the last option set handed to the consumer.
    pub fn applied(&self) -> &ArticleOptionSet {
        &self.applied
    }

    /// Return the set [`reset`](Self::reset) restores.
    pub fn defaults(&self) -> &ArticleOptionSet {
        &self.defaults
    }

    /// Return whether the drafts differ from the last published set.
    pub fn is_dirty(&self) -> bool {
        self.draft != DraftState::from_options(&self.applied)
    }

    /// Publish the current drafts. Drafts are left as they are.
    pub fn apply(&mut self) {
        let options = self.draft.snapshot();
        log::debug!("applying article options");
        self.publish(options);
    }

    /// Return every draft to its default, then publish the defaults.
    pub fn reset(&mut self) {
        self.draft = DraftState::from_options(&self.defaults);
        log::debug!("resetting article options to defaults");
        self.publish(self.defaults.clone());
    }

    /// Return the consumer receiving published sets.
    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    /// Mutable access to the consumer, e.g. to drain what it collected.
    pub fn consumer_mut(&mut self) -> &mut C {
        &mut self.consumer
    }

    fn publish(&mut self, options: ArticleOptionSet) {
        self.applied = options.clone();
        self.consumer.on_change(options);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::ParameterDraftStore;
    use crate::model::{ArticleOptionSet, OptionCategory, OptionValue};

    fn option(value: &str) -> OptionValue {
        OptionValue::new(value, value)
    }

    fn defaults() -> ArticleOptionSet {
        ArticleOptionSet::new(
            option("sans"),
            option("M"),
            option("black"),
            option("white"),
            option("800px"),
        )
    }

    type Published = Rc<RefCell<Vec<ArticleOptionSet>>>;

    fn recording_store()
    -> (ParameterDraftStore<impl FnMut(ArticleOptionSet)>, Published) {
        let published: Published = Rc::default();
        let sink = Rc::clone(&published);
        let store = ParameterDraftStore::new(
            defaults(),
            move |options: ArticleOptionSet| sink.borrow_mut().push(options),
        );
        (store, published)
    }

    #[test]
    fn given_draft_edits_when_set_draft_then_consumer_is_not_notified() {
        let (mut store, published) = recording_store();

        for category in OptionCategory::ALL {
            store.set_draft(category, option("changed"));
        }

        assert!(published.borrow().is_empty());
        assert!(store.is_dirty());
    }

    #[test]
    fn given_all_categories_set_when_apply_then_consumer_receives_them_once() {
        let (mut store, published) = recording_store();
        store.set_draft(OptionCategory::FontFamily, option("serif"));
        store.set_draft(OptionCategory::FontSize, option("L"));
        store.set_draft(OptionCategory::FontColor, option("red"));
        store.set_draft(OptionCategory::BackgroundColor, option("black"));
        store.set_draft(OptionCategory::ContentWidth, option("948px"));

        store.apply();

        let expected = ArticleOptionSet::new(
            option("serif"),
            option("L"),
            option("red"),
            option("black"),
            option("948px"),
        );
        assert_eq!(*published.borrow(), vec![expected.clone()]);
        assert_eq!(store.applied(), &expected);
        assert!(!store.is_dirty());
    }

    #[test]
    fn given_font_size_draft_when_apply_then_draft_is_kept_after_publish() {
        let (mut store, published) = recording_store();
        store.set_draft(OptionCategory::FontSize, option("L"));

        store.apply();

        let expected = ArticleOptionSet::new(
            option("sans"),
            option("L"),
            option("black"),
            option("white"),
            option("800px"),
        );
        assert_eq!(*published.borrow(), vec![expected]);
        assert_eq!(store.draft(OptionCategory::FontSize), &option("L"));
    }

    #[test]
    fn given_applied_changes_when_reset_then_consumer_receives_defaults() {
        let (mut store, published) = recording_store();
        store.set_draft(OptionCategory::FontSize, option("L"));
        store.apply();

        store.reset();

        assert_eq!(published.borrow().len(), 2);
        assert_eq!(published.borrow()[1], defaults());
        assert_eq!(store.draft_snapshot(), defaults());
        assert_eq!(store.applied(), &defaults());
    }

    #[test]
    fn given_reset_when_apply_without_edits_then_defaults_are_published_again()
    {
        let (mut store, published) = recording_store();
        store.set_draft(OptionCategory::FontColor, option("red"));
        store.set_draft(OptionCategory::ContentWidth, option("948px"));

        store.reset();
        store.apply();

        assert_eq!(*published.borrow(), vec![defaults(), defaults()]);
    }

    #[test]
    fn given_repeated_apply_when_called_then_each_call_notifies_once() {
        let (mut store, published) = recording_store();

        store.apply();
        store.apply();
        store.apply();

        assert_eq!(published.borrow().len(), 3);
    }

    #[test]
    fn given_struct_consumer_when_apply_then_consumer_mut_exposes_received_set()
    {
        #[derive(Default)]
        struct LastSeen(Option<ArticleOptionSet>);

        impl super::OptionSetConsumer for LastSeen {
            fn on_change(&mut self, options: ArticleOptionSet) {
                self.0 = Some(options);
            }
        }

        let mut store =
            ParameterDraftStore::new(defaults(), LastSeen::default());
        store.set_draft(OptionCategory::FontFamily, option("mono"));

        store.apply();

        let received = store.consumer_mut().0.take();
        assert_eq!(
            received.map(|options| options.font_family().clone()),
            Some(option("mono"))
        );
        assert!(store.consumer().0.is_none());
    }
}
