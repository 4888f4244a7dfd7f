use iced::widget::{button, container, text};
use iced::{Element, Length, Padding, Theme, alignment};

use crate::geometry::{ARROW_SIZE, arrow_origin};
use crate::widgets::article_params::event::{
    ArticleParamsEvent, ArticleParamsIntent,
};

const ARROW_GLYPH_SIZE: f32 = 20.0;

/// Render the round arrow that opens and closes the drawer, positioned
/// where the drawer region expects it.
pub(crate) fn view<'a>(
    is_open: bool,
) -> Element<'a, ArticleParamsEvent, Theme, iced::Renderer> {
    let glyph = if is_open { "\u{2190}" } else { "\u{2192}" };
    let origin = arrow_origin(is_open);

    let arrow = button(
        text(glyph)
            .size(ARROW_GLYPH_SIZE)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(ARROW_SIZE))
    .height(Length::Fixed(ARROW_SIZE))
    .style(|theme, status| {
        let mut style = button::primary(theme, status);
        style.border.radius = (ARROW_SIZE / 2.0).into();
        style
    })
    .on_press(ArticleParamsEvent::Intent(
        ArticleParamsIntent::ToggleRequested,
    ));

    container(arrow)
        .padding(Padding {
            top: origin.y,
            left: origin.x,
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
