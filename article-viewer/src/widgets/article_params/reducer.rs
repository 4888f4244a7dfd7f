use iced::Task;

use super::event::{
    ArticleParamsEffect, ArticleParamsEvent, ArticleParamsIntent,
};
use super::state::ArticleParamsState;

/// Reduce a drawer intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut ArticleParamsState,
    intent: ArticleParamsIntent,
) -> Task<ArticleParamsEvent> {
    match intent {
        ArticleParamsIntent::ToggleRequested => {
            state.panel_mut().toggle();
            Task::none()
        },
        ArticleParamsIntent::OptionSelected { category, value } => {
            state.panel_mut().set_draft(category, value);
            Task::none()
        },
        ArticleParamsIntent::Apply => {
            state.panel_mut().apply();
            publish(state)
        },
        ArticleParamsIntent::Reset => {
            state.panel_mut().reset();
            publish(state)
        },
        ArticleParamsIntent::HostInteraction(interaction) => {
            state.bus().emit(interaction);
            state.panel_mut().process_interactions();
            Task::none()
        },
        ArticleParamsIntent::ViewportResized(size) => {
            state.panel().boundary().set_viewport(size);
            Task::none()
        },
    }
}

fn publish(state: &mut ArticleParamsState) -> Task<ArticleParamsEvent> {
    Task::batch(
        published_effects(state)
            .into_iter()
            .map(|effect| Task::done(ArticleParamsEvent::Effect(effect))),
    )
}

fn published_effects(
    state: &mut ArticleParamsState,
) -> Vec<ArticleParamsEffect> {
    state
        .take_published()
        .into_iter()
        .map(ArticleParamsEffect::Applied)
        .collect()
}
