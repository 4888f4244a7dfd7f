use article_params::{OptionCategory, OptionValue};
use iced::widget::text::Wrapping;
use iced::widget::{
    Column, Space, button, column, container, pick_list, radio, row,
    scrollable, text,
};
use iced::{Color, Element, Length, Shadow, Theme, Vector, alignment};

use crate::geometry::DRAWER_WIDTH;
use crate::widgets::article_params::event::{
    ArticleParamsEvent, ArticleParamsIntent,
};
use crate::widgets::article_params::model::ArticleParamsViewModel;

const FORM_PADDING: f32 = 48.0;
const FORM_TITLE_SIZE: f32 = 31.0;
const FORM_SECTION_SPACING: f32 = 50.0;
const FORM_FIELD_SPACING: f32 = 12.0;
const FORM_LABEL_SIZE: f32 = 12.0;
const RADIO_SPACING: f32 = 24.0;
const SEPARATOR_HEIGHT: f32 = 1.0;
const FOOTER_BUTTON_SPACING: f32 = 12.0;
const FOOTER_BUTTON_PADDING: [f32; 2] = [14.0, 32.0];

/// Props for the drawer form view.
pub(crate) struct DrawerFormProps<'a> {
    pub(crate) vm: ArticleParamsViewModel<'a>,
}

/// Render the drawer: title, the five selectors and the apply/reset footer.
pub(crate) fn view(
    props: DrawerFormProps<'_>,
) -> Element<'_, ArticleParamsEvent, Theme, iced::Renderer> {
    let DrawerFormProps { vm } = props;

    let title = text("Set parameters")
        .size(FORM_TITLE_SIZE)
        .font(iced::Font {
            weight: iced::font::Weight::ExtraBold,
            ..iced::Font::DEFAULT
        })
        .wrapping(Wrapping::None);

    let font_options = column![
        select_field(&vm, OptionCategory::FontFamily),
        radio_field(&vm, OptionCategory::FontSize),
        select_field(&vm, OptionCategory::FontColor),
    ]
    .spacing(FORM_SECTION_SPACING);

    let layout_options = column![
        select_field(&vm, OptionCategory::BackgroundColor),
        select_field(&vm, OptionCategory::ContentWidth),
    ]
    .spacing(FORM_SECTION_SPACING);

    let form = column![
        title,
        font_options,
        separator(),
        layout_options,
        footer(vm.is_dirty),
    ]
    .spacing(FORM_SECTION_SPACING)
    .padding(FORM_PADDING)
    .width(Length::Fill);

    container(scrollable(form).height(Length::Fill))
        .width(Length::Fixed(DRAWER_WIDTH))
        .height(Length::Fill)
        .style(|_| container::Style {
            background: Some(Color::WHITE.into()),
            text_color: Some(Color::BLACK),
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: Vector::new(4.0, 0.0),
                blur_radius: 16.0,
            },
            ..Default::default()
        })
        .into()
}

fn field_label<'a>(
    category: OptionCategory,
) -> Element<'a, ArticleParamsEvent, Theme, iced::Renderer> {
    text(category.title().to_uppercase())
        .size(FORM_LABEL_SIZE)
        .wrapping(Wrapping::None)
        .into()
}

fn select_field<'a>(
    vm: &ArticleParamsViewModel<'a>,
    category: OptionCategory,
) -> Element<'a, ArticleParamsEvent, Theme, iced::Renderer> {
    let selected = vm.draft.get(category).clone();
    let select = pick_list(
        vm.catalog.options(category),
        Some(selected),
        move |value| select_event(category, value),
    )
    .width(Length::Fill);

    column![field_label(category), select]
        .spacing(FORM_FIELD_SPACING)
        .into()
}

fn radio_field<'a>(
    vm: &ArticleParamsViewModel<'a>,
    category: OptionCategory,
) -> Element<'a, ArticleParamsEvent, Theme, iced::Renderer> {
    let options = vm.catalog.options(category);
    let selected = vm.catalog.position(category, vm.draft.get(category));

    let buttons = options.iter().enumerate().fold(
        row![].spacing(RADIO_SPACING),
        |buttons, (index, option)| {
            let value = option.clone();
            buttons.push(radio(option.title(), index, selected, move |_| {
                select_event(category, value)
            }))
        },
    );

    Column::new()
        .push(field_label(category))
        .push(buttons)
        .spacing(FORM_FIELD_SPACING)
        .into()
}

fn select_event(
    category: OptionCategory,
    value: OptionValue,
) -> ArticleParamsEvent {
    ArticleParamsEvent::Intent(ArticleParamsIntent::OptionSelected {
        category,
        value,
    })
}

fn separator<'a>() -> Element<'a, ArticleParamsEvent, Theme, iced::Renderer> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(|_| container::Style {
            background: Some(Color::from_rgb8(0xC4, 0xC4, 0xC4).into()),
            ..Default::default()
        })
        .into()
}

fn footer<'a>(
    is_dirty: bool,
) -> Element<'a, ArticleParamsEvent, Theme, iced::Renderer> {
    let status = if is_dirty { "Unsaved changes" } else { "" };

    let reset = button(text("Reset"))
        .padding(FOOTER_BUTTON_PADDING)
        .style(button::secondary)
        .on_press(ArticleParamsEvent::Intent(ArticleParamsIntent::Reset));
    let apply = button(text("Apply"))
        .padding(FOOTER_BUTTON_PADDING)
        .style(button::primary)
        .on_press(ArticleParamsEvent::Intent(ArticleParamsIntent::Apply));

    row![
        text(status).size(FORM_LABEL_SIZE),
        Space::new().width(Length::Fill),
        reset,
        apply,
    ]
    .spacing(FOOTER_BUTTON_SPACING)
    .align_y(alignment::Vertical::Center)
    .into()
}
