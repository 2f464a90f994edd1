//! Colors, color schemes and the variant/size style table.
//!
//! Variant and size are plain enums resolved through a `match` table into a
//! [`VariantStyle`] record once per render.

use ratatui::style::Color;
use ratatui::symbols::border::Set as BorderSet;

// ============================================================
// PALETTE
// ============================================================

/// Primary accent
pub const ACCENT: Color = Color::Rgb(0, 255, 163); // #00FFA3

/// Surface level 1 - mid surface
pub const SURFACE_1: Color = Color::Rgb(27, 40, 56); // #1B2838

/// Surface level 2 - light surface
pub const SURFACE_2: Color = Color::Rgb(36, 59, 83); // #243B53

/// Primary text
pub const TEXT: Color = Color::Rgb(255, 255, 255); // #FFFFFF

/// Dimmed text - secondary text color
pub const TEXT_DIM: Color = Color::Rgb(130, 154, 177); // #829AB1

/// Muted text - placeholders and disabled options
pub const TEXT_MUTED: Color = Color::Rgb(72, 101, 129); // #486581

/// Border color
pub const BORDER: Color = Color::Rgb(51, 78, 104); // #334E68

/// Warning - loading indicator
pub const WARNING: Color = Color::Rgb(255, 200, 87); // #FFC857

/// Rounded border character set.
pub const ROUNDED_BORDER: BorderSet = BorderSet {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Single-line border character set.
pub const SINGLE_BORDER: BorderSet = BorderSet {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

// ============================================================
// COLOR SCHEME
// ============================================================

/// Colors used to render a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Cursor, focus and check marks
    pub accent: Color,
    /// Option labels
    pub text: Color,
    /// Descriptions
    pub text_dim: Color,
    /// Placeholder and disabled options
    pub text_muted: Color,
    /// Overlay background
    pub surface: Color,
    /// Cursor row background
    pub surface_alt: Color,
    /// Borders
    pub border: Color,
    /// Loading indicator
    pub warning: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            accent: ACCENT,
            text: TEXT,
            text_dim: TEXT_DIM,
            text_muted: TEXT_MUTED,
            surface: SURFACE_1,
            surface_alt: SURFACE_2,
            border: BORDER,
            warning: WARNING,
        }
    }
}

impl ColorScheme {
    /// Creates a color scheme with a custom accent color.
    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Creates a light theme color scheme.
    pub fn light() -> Self {
        Self {
            accent: Color::Rgb(0, 150, 100),
            text: Color::Rgb(30, 30, 30),
            text_dim: Color::Rgb(100, 100, 100),
            text_muted: Color::Rgb(150, 150, 150),
            surface: Color::Rgb(255, 255, 255),
            surface_alt: Color::Rgb(230, 240, 235),
            border: Color::Rgb(180, 180, 180),
            warning: Color::Rgb(200, 150, 0),
        }
    }
}

// ============================================================
// VARIANTS
// ============================================================

/// Visual variant of the trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownVariant {
    /// Bordered trigger on a filled surface
    #[default]
    Default,
    /// Bordered trigger, transparent background
    Outline,
    /// No border
    Ghost,
}

/// Size of the trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Border drawn around the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    Rounded,
    Single,
}

/// Resolved layout and style for one variant/size pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    /// Border around the trigger, if any
    pub border: Option<BorderKind>,
    /// Trigger background, `None` keeps the terminal background
    pub background: Option<Color>,
    /// Horizontal padding inside the trigger
    pub padding_x: u16,
    /// Total trigger height in rows, including borders
    pub trigger_height: u16,
}

impl VariantStyle {
    /// Look up the record for a variant and size.
    pub fn resolve(variant: DropdownVariant, size: DropdownSize, colors: &ColorScheme) -> Self {
        let (border, background) = match variant {
            DropdownVariant::Default => (Some(BorderKind::Rounded), Some(colors.surface)),
            DropdownVariant::Outline => (Some(BorderKind::Single), None),
            DropdownVariant::Ghost => (None, None),
        };
        let padding_x = match size {
            DropdownSize::Small => 0,
            DropdownSize::Medium => 1,
            DropdownSize::Large => 2,
        };
        // Small triggers drop the border to fit a single row
        let border = if size == DropdownSize::Small { None } else { border };
        let trigger_height = if border.is_some() { 3 } else { 1 };

        Self {
            border,
            background,
            padding_x,
            trigger_height,
        }
    }
}
