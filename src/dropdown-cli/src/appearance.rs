//! Look of the dropdown, picked on the command line.

use clap::ValueEnum;
use dropdown_tui::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    #[default]
    Default,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SizeArg {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    #[default]
    Dark,
    Light,
}

impl From<VariantArg> for DropdownVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Default => DropdownVariant::Default,
            VariantArg::Outline => DropdownVariant::Outline,
            VariantArg::Ghost => DropdownVariant::Ghost,
        }
    }
}

impl From<SizeArg> for DropdownSize {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::Small => DropdownSize::Small,
            SizeArg::Medium => DropdownSize::Medium,
            SizeArg::Large => DropdownSize::Large,
        }
    }
}

impl From<ThemeArg> for ColorScheme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ColorScheme::default(),
            ThemeArg::Light => ColorScheme::light(),
        }
    }
}

/// Variant, size and colors applied to every draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Appearance {
    pub variant: DropdownVariant,
    pub size: DropdownSize,
    pub colors: ColorScheme,
}

impl Appearance {
    pub fn new(variant: VariantArg, size: SizeArg, theme: ThemeArg) -> Self {
        Self {
            variant: variant.into(),
            size: size.into(),
            colors: theme.into(),
        }
    }

    /// Rows taken by the trigger.
    pub fn trigger_height(&self) -> u16 {
        VariantStyle::resolve(self.variant, self.size, &self.colors).trigger_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_widget_defaults() {
        let appearance = Appearance::new(VariantArg::default(), SizeArg::default(), ThemeArg::default());
        assert_eq!(appearance, Appearance::default());
        assert_eq!(appearance.trigger_height(), 3);
    }

    #[test]
    fn test_borderless_trigger_is_one_row() {
        let ghost = Appearance::new(VariantArg::Ghost, SizeArg::Large, ThemeArg::Dark);
        assert_eq!(ghost.trigger_height(), 1);

        let small = Appearance::new(VariantArg::Outline, SizeArg::Small, ThemeArg::Light);
        assert_eq!(small.trigger_height(), 1);
        assert_eq!(small.colors, ColorScheme::light());
    }
}
