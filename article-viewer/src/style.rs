use article_params::{ArticleOptionSet, OptionValue};
use iced::font::Family;
use iced::{Color, Font};

const FALLBACK_FONT_SIZE: f32 = 18.0;
const FALLBACK_CONTENT_WIDTH: f32 = 1394.0;

/// Concrete rendering values derived from an applied option set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ArticleStyle {
    pub(crate) font: Font,
    pub(crate) font_size: f32,
    pub(crate) text_color: Color,
    pub(crate) background: Color,
    pub(crate) content_width: f32,
}

impl ArticleStyle {
    /// Resolve every option, logging and substituting values the renderer
    /// cannot interpret.
    pub(crate) fn from_options(options: &ArticleOptionSet) -> Self {
        Self {
            font: font(options.font_family()),
            font_size: resolve(
                "font size",
                options.font_size(),
                pixels,
                FALLBACK_FONT_SIZE,
            ),
            text_color: resolve(
                "font color",
                options.font_color(),
                color,
                Color::BLACK,
            ),
            background: resolve(
                "background color",
                options.background_color(),
                color,
                Color::WHITE,
            ),
            content_width: resolve(
                "content width",
                options.content_width(),
                pixels,
                FALLBACK_CONTENT_WIDTH,
            ),
        }
    }
}

fn resolve<T>(
    what: &str,
    option: &OptionValue,
    parse: fn(&str) -> Option<T>,
    fallback: T,
) -> T {
    parse(option.value()).unwrap_or_else(|| {
        log::warn!("unsupported {what} `{}`, using fallback", option.value());
        fallback
    })
}

/// Map a font family option to an `iced` font. The class name wins over the
/// value when present.
pub(crate) fn font(option: &OptionValue) -> Font {
    let key = option.class_name().unwrap_or(option.value());
    let family = match key {
        "open-sans" => Family::Name("Open Sans"),
        "ubuntu" => Family::Name("Ubuntu"),
        "cormorant-garamond" => Family::Name("Cormorant Garamond"),
        "days-one" => Family::Name("Days One"),
        "merriweather" => Family::Name("Merriweather"),
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        _ => Family::SansSerif,
    };

    Font {
        family,
        ..Font::DEFAULT
    }
}

/// Parse a `"<number>px"` length.
pub(crate) fn pixels(value: &str) -> Option<f32> {
    let number = value.trim().strip_suffix("px")?;
    number
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|px| px.is_finite() && *px > 0.0)
}

/// Parse a `#RRGGBB` (or any form `iced` accepts) color.
pub(crate) fn color(value: &str) -> Option<Color> {
    value.trim().parse::<Color>().ok()
}
