use iced::widget::stack;
use iced::{Element, Theme};

use super::{App, AppEvent};
use crate::widgets::article::view::{self as article_view, ArticleProps};
use crate::widgets::article_params::view::drawer_form::DrawerFormProps;
use crate::widgets::article_params::view::{drawer_form, toggle_arrow};

/// Render the root application view: article, drawer, toggle arrow.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let drawer_vm = app.widgets.article_params.vm();
    let is_open = drawer_vm.is_open;

    let article = article_view::view(ArticleProps {
        style: app.article_style,
    });

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![article];

    if is_open {
        layers.push(
            drawer_form::view(DrawerFormProps { vm: drawer_vm })
                .map(AppEvent::ArticleParams),
        );
    }

    layers.push(toggle_arrow::view(is_open).map(AppEvent::ArticleParams));

    stack(layers).into()
}
