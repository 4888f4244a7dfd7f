pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

use article_params::OptionCatalog;
pub(crate) use event::{
    ArticleParamsEffect, ArticleParamsEvent, ArticleParamsIntent,
};
use iced::{Size, Task};
use model::ArticleParamsViewModel;
use state::ArticleParamsState;

/// Article parameters drawer: a toggleable side form whose drafts are
/// published to the article only on apply or reset.
pub(crate) struct ArticleParamsWidget {
    state: ArticleParamsState,
}

impl ArticleParamsWidget {
    pub(crate) fn new(catalog: OptionCatalog, viewport: Size) -> Self {
        Self {
            state: ArticleParamsState::new(catalog, viewport),
        }
    }

    /// Reduce an intent into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        intent: ArticleParamsIntent,
    ) -> Task<ArticleParamsEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Return a read-only view model for the drawer form.
    pub(crate) fn vm(&self) -> ArticleParamsViewModel<'_> {
        let panel = self.state.panel();
        ArticleParamsViewModel {
            catalog: panel.catalog(),
            draft: panel.draft_snapshot(),
            is_open: panel.is_open(),
            is_dirty: panel.is_dirty(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_open(&self) -> bool {
        self.state.panel().is_open()
    }

    /// Return whether window-wide pointer presses must be forwarded.
    pub(crate) fn is_listening(&self) -> bool {
        self.state.is_listening()
    }
}
