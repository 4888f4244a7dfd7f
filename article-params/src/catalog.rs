use std::collections::HashMap;

use serde::Deserialize;

use crate::errors::CatalogError;
use crate::model::{ArticleOptionSet, OptionCategory, OptionValue};

/// Fixed lists of selectable values plus the default option set.
///
/// Supplied once when the panel is built and never mutated afterwards.
/// Construction guarantees every list is non-empty and every default is a
/// member of its list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCatalog {
    font_families: Vec<OptionValue>,
    font_sizes: Vec<OptionValue>,
    font_colors: Vec<OptionValue>,
    background_colors: Vec<OptionValue>,
    content_widths: Vec<OptionValue>,
    defaults: ArticleOptionSet,
}

/// On-disk shape of a catalog override file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CatalogFile {
    font_family: Vec<OptionValue>,
    font_size: Vec<OptionValue>,
    font_color: Vec<OptionValue>,
    background_color: Vec<OptionValue>,
    content_width: Vec<OptionValue>,
    #[serde(default)]
    defaults: HashMap<OptionCategory, String>,
}

impl OptionCatalog {
    /// Build a catalog whose defaults are the first entry of every list.
    pub fn new(
        font_families: Vec<OptionValue>,
        font_sizes: Vec<OptionValue>,
        font_colors: Vec<OptionValue>,
        background_colors: Vec<OptionValue>,
        content_widths: Vec<OptionValue>,
    ) -> Result<Self, CatalogError> {
        let lists = [
            (OptionCategory::FontFamily, &font_families),
            (OptionCategory::FontSize, &font_sizes),
            (OptionCategory::FontColor, &font_colors),
            (OptionCategory::BackgroundColor, &background_colors),
            (OptionCategory::ContentWidth, &content_widths),
        ];
        for (category, list) in lists {
            if list.is_empty() {
                return Err(CatalogError::EmptyCategory(category));
            }
        }

        Ok(Self::assemble(
            font_families,
            font_sizes,
            font_colors,
            background_colors,
            content_widths,
        ))
    }

    fn assemble(
        font_families: Vec<OptionValue>,
        font_sizes: Vec<OptionValue>,
        font_colors: Vec<OptionValue>,
        background_colors: Vec<OptionValue>,
        content_widths: Vec<OptionValue>,
    ) -> Self {
        let defaults = ArticleOptionSet::new(
            font_families[0].clone(),
            font_sizes[0].clone(),
            font_colors[0].clone(),
            background_colors[0].clone(),
            content_widths[0].clone(),
        );

        Self {
            font_families,
            font_sizes,
            font_colors,
            background_colors,
            content_widths,
            defaults,
        }
    }

    /// Replace the default for `category` with the option whose `value`
    /// equals `raw_value`.
    pub fn with_default(
        mut self,
        category: OptionCategory,
        raw_value: &str,
    ) -> Result<Self, CatalogError> {
        let Some(option) = self.find(category, raw_value).cloned() else {
            return Err(CatalogError::UnknownDefault {
                category,
                value: raw_value.to_string(),
            });
        };
        self.defaults = self.defaults.with(category, option);
        Ok(self)
    }

    /// Parse a catalog from its JSON configuration representation.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, CatalogError> {
        let file = CatalogFile::deserialize(value)?;
        let mut catalog = Self::new(
            file.font_family,
            file.font_size,
            file.font_color,
            file.background_color,
            file.content_width,
        )?;

        for category in OptionCategory::ALL {
            if let Some(raw_value) = file.defaults.get(&category) {
                catalog = catalog.with_default(category, raw_value)?;
            }
        }

        Ok(catalog)
    }

    /// Return the selectable options of `category` in display order.
    pub fn options(&self, category: OptionCategory) -> &[OptionValue] {
        match category {
            OptionCategory::FontFamily => &self.font_families,
            OptionCategory::FontSize => &self.font_sizes,
            OptionCategory::FontColor => &self.font_colors,
            OptionCategory::BackgroundColor => &self.background_colors,
            OptionCategory::ContentWidth => &self.content_widths,
        }
    }

    /// Return the option set used before the first apply and after reset.
    pub fn defaults(&self) -> &ArticleOptionSet {
        &self.defaults
    }

    /// Return whether `value` is one of the options of `category`.
    pub fn contains(
        &self,
        category: OptionCategory,
        value: &OptionValue,
    ) -> bool {
        self.options(category).contains(value)
    }

    /// Return the display index of `value` inside its category.
    pub fn position(
        &self,
        category: OptionCategory,
        value: &OptionValue,
    ) -> Option<usize> {
        self.options(category).iter().position(|option| option == value)
    }

    /// Look up an option by its raw `value` string.
    pub fn find(
        &self,
        category: OptionCategory,
        raw_value: &str,
    ) -> Option<&OptionValue> {
        self.options(category)
            .iter()
            .find(|option| option.value() == raw_value)
    }
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::assemble(
            font_family_options(),
            font_size_options(),
            font_color_options(),
            background_color_options(),
            content_width_options(),
        )
    }
}

fn font_family_options() -> Vec<OptionValue> {
    [
        ("Open Sans", "open-sans"),
        ("Ubuntu", "ubuntu"),
        ("Cormorant Garamond", "cormorant-garamond"),
        ("Days One", "days-one"),
        ("Merriweather", "merriweather"),
    ]
    .into_iter()
    .map(|(title, value)| OptionValue::new(title, value).with_class_name(value))
    .collect()
}

fn font_size_options() -> Vec<OptionValue> {
    [
        ("18px", "font-size-18"),
        ("25px", "font-size-25"),
        ("38px", "font-size-38"),
    ]
    .into_iter()
    .map(|(size, class)| OptionValue::new(size, size).with_class_name(class))
    .collect()
}

fn font_color_options() -> Vec<OptionValue> {
    [
        ("Black", "#000000", "font-black"),
        ("White", "#FFFFFF", "font-white"),
        ("Gray", "#C4C4C4", "font-gray"),
        ("Pink", "#FEAFE8", "font-pink"),
        ("Fuchsia", "#FD24AF", "font-fuchsia"),
        ("Yellow", "#FFC802", "font-yellow"),
        ("Green", "#80D994", "font-green"),
        ("Blue", "#6FC1FD", "font-blue"),
        ("Purple", "#5F25FF", "font-purple"),
    ]
    .into_iter()
    .map(|(title, value, class)| {
        OptionValue::new(title, value).with_class_name(class)
    })
    .collect()
}

fn background_color_options() -> Vec<OptionValue> {
    [
        ("White", "#FFFFFF", "bg-white"),
        ("Black", "#000000", "bg-black"),
        ("Gray", "#C4C4C4", "bg-gray"),
        ("Pink", "#FFC8F7", "bg-pink"),
        ("Fuchsia", "#FE4DDF", "bg-fuchsia"),
        ("Yellow", "#FFCF75", "bg-yellow"),
        ("Green", "#BDF4CC", "bg-green"),
        ("Blue", "#B5E0FF", "bg-blue"),
        ("Purple", "#D5C6FF", "bg-purple"),
    ]
    .into_iter()
    .map(|(title, value, class)| {
        OptionValue::new(title, value).with_class_name(class)
    })
    .collect()
}

fn content_width_options() -> Vec<OptionValue> {
    vec![
        OptionValue::new("Wide", "1394px").with_class_name("width-wide"),
        OptionValue::new("Narrow", "948px").with_class_name("width-narrow"),
    ]
}
