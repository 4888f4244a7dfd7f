use iced::Task;

use crate::app::{App, AppEvent};
use crate::style::ArticleStyle;
use crate::widgets::article_params::{
    ArticleParamsEffect, ArticleParamsEvent, ArticleParamsIntent,
};

/// Route a drawer event through widget reduction or app orchestration.
pub(crate) fn route(
    app: &mut App,
    event: ArticleParamsEvent,
) -> Task<AppEvent> {
    match event {
        ArticleParamsEvent::Intent(intent) => route_intent(app, intent),
        ArticleParamsEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Route a drawer intent directly (used for host input).
pub(crate) fn route_intent(
    app: &mut App,
    intent: ArticleParamsIntent,
) -> Task<AppEvent> {
    app.widgets
        .article_params
        .reduce(intent)
        .map(AppEvent::ArticleParams)
}

fn route_effect(app: &mut App, effect: ArticleParamsEffect) -> Task<AppEvent> {
    match effect {
        ArticleParamsEffect::Applied(options) => {
            log::info!(
                "article options applied: {} {} on {}",
                options.font_family().value(),
                options.font_size().value(),
                options.background_color().value(),
            );
            if app.article_options != options {
                app.article_style = ArticleStyle::from_options(&options);
            }
            app.article_options = options;
            Task::none()
        },
    }
}
