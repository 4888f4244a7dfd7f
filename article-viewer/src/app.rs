#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use article_params::{ArticleOptionSet, OptionCatalog};
use iced::{Element, Point, Size, Subscription, Task, Theme, window};

use crate::style::ArticleStyle;
use crate::widgets::Widgets;
use crate::widgets::article_params::{ArticleParamsEvent, ArticleParamsWidget};

pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Article parameters drawer
    ArticleParams(ArticleParamsEvent),
    // Host input feeding the drawer's outside-dismiss rule
    CursorMoved(Point),
    /// Primary press; touch presses carry their own position.
    PointerPressed(Option<Point>),
    Window(window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) cursor: Option<Point>,
    pub(crate) article_options: ArticleOptionSet,
    pub(crate) article_style: ArticleStyle,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let catalog = article_params::load_catalog_or_default();
        (Self::with_catalog(catalog), Task::none())
    }

    /// Build the root state around an already loaded catalog.
    pub(crate) fn with_catalog(catalog: OptionCatalog) -> Self {
        let window_size = Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        };
        let article_options = catalog.defaults().clone();
        let article_style = ArticleStyle::from_options(&article_options);

        Self {
            cursor: None,
            article_options,
            article_style,
            widgets: Widgets {
                article_params: ArticleParamsWidget::new(catalog, window_size),
            },
        }
    }

    pub(crate) fn title(&self) -> String {
        String::from("Article Viewer")
    }

    pub(crate) fn theme(&self) -> Theme {
        Theme::Light
    }

    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }

    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }
}
