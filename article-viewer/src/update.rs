use article_params::Interaction;
use iced::{Task, window};

use super::{App, AppEvent};
use crate::geometry::HostTarget;
use crate::routers;
use crate::widgets::article_params::ArticleParamsIntent;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::ArticleParams(event) => {
            routers::article_params::route(app, event)
        },
        AppEvent::CursorMoved(position) => {
            app.cursor = Some(position);
            Task::none()
        },
        AppEvent::PointerPressed(position) => {
            let target = position
                .or(app.cursor)
                .map_or(HostTarget::Detached, HostTarget::Point);
            routers::article_params::route_intent(
                app,
                ArticleParamsIntent::HostInteraction(Interaction::PointerDown(
                    target,
                )),
            )
        },
        AppEvent::Window(window::Event::Opened { size, .. })
        | AppEvent::Window(window::Event::Resized(size)) => {
            routers::article_params::route_intent(
                app,
                ArticleParamsIntent::ViewportResized(size),
            )
        },
        AppEvent::Window(window::Event::Unfocused) => {
            routers::article_params::route_intent(
                app,
                ArticleParamsIntent::HostInteraction(Interaction::FocusIn(
                    HostTarget::Detached,
                )),
            )
        },
        AppEvent::Window(_) => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use article_params::{OptionCatalog, OptionCategory};
    use iced::{Point, Size, window};

    use super::update;
    use crate::app::{App, AppEvent};
    use crate::widgets::article_params::{
        ArticleParamsEffect, ArticleParamsEvent, ArticleParamsIntent,
    };

    fn app() -> App {
        App::with_catalog(OptionCatalog::default())
    }

    fn toggle(app: &mut App) {
        let _task = update(
            app,
            AppEvent::ArticleParams(ArticleParamsEvent::Intent(
                ArticleParamsIntent::ToggleRequested,
            )),
        );
    }

    #[test]
    fn given_open_drawer_when_clicking_the_article_then_drawer_closes() {
        let mut app = app();
        toggle(&mut app);

        let _task =
            update(&mut app, AppEvent::CursorMoved(Point::new(1200.0, 300.0)));
        let _task = update(&mut app, AppEvent::PointerPressed(None));

        assert!(!app.widgets.article_params.is_open());
        assert!(!app.widgets.article_params.is_listening());
    }

    #[test]
    fn given_open_drawer_when_clicking_inside_then_drawer_stays_open() {
        let mut app = app();
        toggle(&mut app);

        let _task =
            update(&mut app, AppEvent::CursorMoved(Point::new(100.0, 300.0)));
        let _task = update(&mut app, AppEvent::PointerPressed(None));

        assert!(app.widgets.article_params.is_open());
    }

    #[test]
    fn given_open_drawer_when_touching_outside_then_drawer_closes() {
        let mut app = app();
        toggle(&mut app);

        let _task = update(
            &mut app,
            AppEvent::PointerPressed(Some(Point::new(1300.0, 100.0))),
        );

        assert!(!app.widgets.article_params.is_open());
    }

    #[test]
    fn given_open_drawer_when_window_unfocused_then_drawer_closes() {
        let mut app = app();
        toggle(&mut app);

        let _task =
            update(&mut app, AppEvent::Window(window::Event::Unfocused));

        assert!(!app.widgets.article_params.is_open());
    }

    #[test]
    fn given_applied_effect_when_routed_then_article_options_are_replaced() {
        let mut app = app();
        let catalog = OptionCatalog::default();
        let large = catalog.options(OptionCategory::FontSize)[2].clone();
        let options = catalog.defaults().with(OptionCategory::FontSize, large);

        let _task = update(
            &mut app,
            AppEvent::ArticleParams(ArticleParamsEvent::Effect(
                ArticleParamsEffect::Applied(options.clone()),
            )),
        );

        assert_eq!(app.article_options, options);
        assert_eq!(app.article_style.font_size, 38.0);
    }

    #[test]
    fn given_option_selected_when_routed_then_article_is_unchanged() {
        let mut app = app();
        let catalog = OptionCatalog::default();
        let purple = catalog.options(OptionCategory::FontColor)[8].clone();

        let _task = update(
            &mut app,
            AppEvent::ArticleParams(ArticleParamsEvent::Intent(
                ArticleParamsIntent::OptionSelected {
                    category: OptionCategory::FontColor,
                    value: purple,
                },
            )),
        );

        assert_eq!(&app.article_options, catalog.defaults());
    }

    #[test]
    fn given_resized_window_when_pressed_below_new_height_then_closes() {
        let mut app = app();
        let _task = update(
            &mut app,
            AppEvent::Window(window::Event::Resized(Size::new(
                500.0, 700.0,
            ))),
        );
        toggle(&mut app);

        let _task = update(
            &mut app,
            AppEvent::PointerPressed(Some(Point::new(300.0, 650.0))),
        );

        assert!(app.widgets.article_params.is_open());

        let _task = update(
            &mut app,
            AppEvent::PointerPressed(Some(Point::new(100.0, 720.0))),
        );

        assert!(!app.widgets.article_params.is_open());
    }
}
