use article_params::{
    ArticleOptionSet, Interaction, OptionCategory, OptionValue,
};
use iced::Size;

use crate::geometry::HostTarget;

/// Intent events handled by the article parameters drawer.
#[derive(Debug, Clone)]
pub(crate) enum ArticleParamsIntent {
    /// The arrow button was clicked.
    ToggleRequested,
    /// A selector inside the form picked a new draft value.
    OptionSelected {
        category: OptionCategory,
        value: OptionValue,
    },
    Apply,
    Reset,
    /// A pointer press or focus change observed anywhere in the window.
    HostInteraction(Interaction<HostTarget>),
    ViewportResized(Size),
}

/// Effect events produced by the drawer reducer.
#[derive(Debug, Clone)]
pub(crate) enum ArticleParamsEffect {
    /// A new option set was published by apply or reset.
    Applied(ArticleOptionSet),
}

/// Drawer event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ArticleParamsEvent {
    /// Intent event reduced by the drawer widget.
    Intent(ArticleParamsIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ArticleParamsEffect),
}
