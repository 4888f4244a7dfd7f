use iced::widget::text::Wrapping;
use iced::widget::{Column, container, scrollable, text};
use iced::{Element, Length, Theme, alignment};

use crate::style::ArticleStyle;

const ARTICLE_PADDING_Y: f32 = 96.0;
const ARTICLE_PADDING_X: f32 = 48.0;
const PARAGRAPH_SPACING: f32 = 24.0;
const TITLE_SCALE: f32 = 2.0;

const TITLE: &str = "Portrait of a Northern Town";
const PARAGRAPHS: [&str; 3] = [
    "The town wakes late in winter. Streetlamps stay on well past nine, and \
     the bakery on the corner is the first window to fill with warm light. \
     People walk slowly here, as if the cold asked them to save their \
     strength for something that has not happened yet.",
    "By noon the harbour is busy. Fishing boats come in low in the water, \
     gulls circle the cranes, and the market stalls open their shutters one \
     by one. Everyone seems to know everyone, and every purchase comes with \
     a short conversation about the weather.",
    "Evenings belong to the library. It stays open until eleven, and its \
     reading room, with long oak tables and green lamps, is the warmest \
     public space in town. Students, retired sailors and tired parents share \
     it in comfortable silence.",
];

/// Props for the article view.
pub(crate) struct ArticleProps {
    pub(crate) style: ArticleStyle,
}

/// Render the sample article inside a full-window background.
pub(crate) fn view<'a, Message: 'a>(
    props: ArticleProps,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let style = props.style;

    let title = text(TITLE)
        .font(style.font)
        .size(style.font_size * TITLE_SCALE)
        .color(style.text_color)
        .wrapping(Wrapping::Word);

    let body = PARAGRAPHS.iter().fold(
        Column::new().push(title).spacing(PARAGRAPH_SPACING),
        |column, paragraph| {
            column.push(
                text(*paragraph)
                    .font(style.font)
                    .size(style.font_size)
                    .color(style.text_color),
            )
        },
    );

    let content = container(body)
        .max_width(style.content_width)
        .width(Length::Fill)
        .padding([ARTICLE_PADDING_Y, ARTICLE_PADDING_X]);
    let centered = container(content)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    container(scrollable(centered).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(style.background.into()),
            ..Default::default()
        })
        .into()
}
