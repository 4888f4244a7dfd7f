use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseCategoryError;

/// One selectable entry of an option catalog.
///
/// The panel core compares values but never looks inside them; `title` is
/// what selectors display and `value` is what consumers interpret (a font
/// family slug, a CSS-like size, a hex color).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionValue {
    title: String,
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    class_name: Option<String>,
}

impl OptionValue {
    /// Create an option without a class name.
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            class_name: None,
        }
    }

    /// Attach a styling hint consumed by renderers.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Label shown in selectors.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Value consumers interpret.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Styling hint, if any.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// The five option categories exposed by the panel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum OptionCategory {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl OptionCategory {
    /// All categories in form order.
    pub const ALL: [OptionCategory; 5] = [
        OptionCategory::FontFamily,
        OptionCategory::FontSize,
        OptionCategory::FontColor,
        OptionCategory::BackgroundColor,
        OptionCategory::ContentWidth,
    ];

    /// Stable key used in configuration files.
    pub fn key(&self) -> &'static str {
        match self {
            OptionCategory::FontFamily => "fontFamily",
            OptionCategory::FontSize => "fontSize",
            OptionCategory::FontColor => "fontColor",
            OptionCategory::BackgroundColor => "backgroundColor",
            OptionCategory::ContentWidth => "contentWidth",
        }
    }

    /// Human-readable label shown next to the selector.
    pub fn title(&self) -> &'static str {
        match self {
            OptionCategory::FontFamily => "Font",
            OptionCategory::FontSize => "Font size",
            OptionCategory::FontColor => "Font color",
            OptionCategory::BackgroundColor => "Background color",
            OptionCategory::ContentWidth => "Content width",
        }
    }
}

impl fmt::Display for OptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OptionCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptionCategory::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// A complete, immutable set of article display options.
///
/// A fresh instance is produced for every apply or reset; there is no way to
/// mutate one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleOptionSet {
    font_family: OptionValue,
    font_size: OptionValue,
    font_color: OptionValue,
    background_color: OptionValue,
    content_width: OptionValue,
}

impl ArticleOptionSet {
    /// Build a set from one value per category.
    pub fn new(
        font_family: OptionValue,
        font_size: OptionValue,
        font_color: OptionValue,
        background_color: OptionValue,
        content_width: OptionValue,
    ) -> Self {
        Self {
            font_family,
            font_size,
            font_color,
            background_color,
            content_width,
        }
    }

    /// Selected font family.
    pub fn font_family(&self) -> &OptionValue {
        &self.font_family
    }

    /// Selected font size.
    pub fn font_size(&self) -> &OptionValue {
        &self.font_size
    }

    /// Selected text color.
    pub fn font_color(&self) -> &OptionValue {
        &self.font_color
    }

    /// Selected background color.
    pub fn background_color(&self) -> &OptionValue {
        &self.background_color
    }

    /// Selected content width.
    pub fn content_width(&self) -> &OptionValue {
        &self.content_width
    }

    /// Return the value stored for `category`.
    pub fn get(&self, category: OptionCategory) -> &OptionValue {
        match category {
            OptionCategory::FontFamily => &self.font_family,
            OptionCategory::FontSize => &self.font_size,
            OptionCategory::FontColor => &self.font_color,
            OptionCategory::BackgroundColor => &self.background_color,
            OptionCategory::ContentWidth => &self.content_width,
        }
    }

    /// Return a new set that differs from `self` only in `category`.
    pub fn with(&self, category: OptionCategory, value: OptionValue) -> Self {
        let mut next = self.clone();
        match category {
            OptionCategory::FontFamily => next.font_family = value,
            OptionCategory::FontSize => next.font_size = value,
            OptionCategory::FontColor => next.font_color = value,
            OptionCategory::BackgroundColor => next.background_color = value,
            OptionCategory::ContentWidth => next.content_width = value,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::{ArticleOptionSet, OptionCategory, OptionValue};
    use crate::errors::ParseCategoryError;

    fn sample() -> ArticleOptionSet {
        ArticleOptionSet::new(
            OptionValue::new("Sans", "sans"),
            OptionValue::new("M", "M"),
            OptionValue::new("Black", "black"),
            OptionValue::new("White", "white"),
            OptionValue::new("800px", "800px"),
        )
    }

    #[test]
    fn given_category_keys_when_parsed_then_every_category_round_trips() {
        for category in OptionCategory::ALL {
            assert_eq!(category.key().parse::<OptionCategory>(), Ok(category));
        }
    }

    #[test]
    fn given_unknown_key_when_parsed_then_returns_error() {
        let parsed = "lineHeight".parse::<OptionCategory>();

        assert_eq!(parsed, Err(ParseCategoryError(String::from("lineHeight"))));
    }

    #[test]
    fn given_option_set_when_with_called_then_original_is_untouched() {
        let original = sample();

        let next =
            original.with(OptionCategory::FontSize, OptionValue::new("L", "L"));

        assert_eq!(original.font_size().value(), "M");
        assert_eq!(next.font_size().value(), "L");
        assert_eq!(next.font_family(), original.font_family());
        assert_eq!(next.content_width(), original.content_width());
    }

    #[test]
    fn given_option_set_when_get_by_category_then_matches_named_getter() {
        let set = sample();

        assert_eq!(set.get(OptionCategory::FontColor), set.font_color());
        assert_eq!(
            set.get(OptionCategory::BackgroundColor),
            set.background_color()
        );
    }

    #[test]
    fn given_option_set_when_serialized_then_uses_camel_case_keys() {
        let value = serde_json::to_value(sample())
            .expect("option set should serialize");

        assert_eq!(value["fontFamily"]["value"], "sans");
        assert_eq!(value["contentWidth"]["title"], "800px");
        assert!(value["fontSize"].get("className").is_none());
    }
}
