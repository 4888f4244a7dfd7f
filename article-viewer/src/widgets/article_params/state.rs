use std::collections::VecDeque;

use article_params::{
    ArticleOptionSet, ArticleParamsPanel, InteractionBus, OptionCatalog,
    OptionSetConsumer,
};
use iced::Size;

use crate::geometry::{DrawerRegion, HostTarget};

/// Drawer panel wired to the window's interaction bus.
pub(crate) type DrawerPanel = ArticleParamsPanel<
    HostTarget,
    DrawerRegion,
    InteractionBus<HostTarget>,
    AppliedOutbox,
>;

/// Queue of published option sets waiting to be turned into effects.
#[derive(Debug, Default)]
pub(crate) struct AppliedOutbox {
    pending: VecDeque<ArticleOptionSet>,
}

impl AppliedOutbox {
    /// Take every queued set, oldest first.
    pub(crate) fn drain(&mut self) -> Vec<ArticleOptionSet> {
        self.pending.drain(..).collect()
    }
}

impl OptionSetConsumer for AppliedOutbox {
    fn on_change(&mut self, options: ArticleOptionSet) {
        self.pending.push_back(options);
    }
}

/// Drawer state: the core panel plus the bus the host emits into.
pub(crate) struct ArticleParamsState {
    bus: InteractionBus<HostTarget>,
    panel: DrawerPanel,
}

impl ArticleParamsState {
    pub(crate) fn new(catalog: OptionCatalog, viewport: Size) -> Self {
        let bus = InteractionBus::new();
        let panel = ArticleParamsPanel::new(
            catalog,
            DrawerRegion::new(viewport),
            bus.clone(),
            AppliedOutbox::default(),
        );
        Self { bus, panel }
    }

    pub(crate) fn panel(&self) -> &DrawerPanel {
        &self.panel
    }

    pub(crate) fn panel_mut(&mut self) -> &mut DrawerPanel {
        &mut self.panel
    }

    pub(crate) fn bus(&self) -> &InteractionBus<HostTarget> {
        &self.bus
    }

    /// Return whether an open drawer is waiting for outside interactions.
    pub(crate) fn is_listening(&self) -> bool {
        self.bus.has_listeners()
    }

    /// Take option sets published since the last call.
    pub(crate) fn take_published(&mut self) -> Vec<ArticleOptionSet> {
        self.panel.consumer_mut().drain()
    }
}
