//! Rich-text toolbar layout: buttons, colour swatches and font-size options.

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod toolbar_test;

use richtext::{Color, Command, FontSize};

/// A plain toolbar button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarButton {
    Bold,
    Italic,
    Underline,
    BulletList,
    NumberedList,
    Link,
    ClearFormatting,
}

impl ToolbarButton {
    pub const FORMATTING: [Self; 3] = [Self::Bold, Self::Italic, Self::Underline];
    pub const LISTS: [Self; 2] = [Self::BulletList, Self::NumberedList];

    /// Visible caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Underline => "U",
            Self::BulletList => "• Lista",
            Self::NumberedList => "1. Lista",
            Self::Link => "🔗 Link",
            Self::ClearFormatting => "🧹 Limpar",
        }
    }

    /// Tooltip.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Bold => "Negrito",
            Self::Italic => "Itálico",
            Self::Underline => "Sublinhado",
            Self::BulletList => "Lista com marcadores",
            Self::NumberedList => "Lista numerada",
            Self::Link => "Inserir link",
            Self::ClearFormatting => "Limpar formatação",
        }
    }

    /// Command applied directly. `Link` has none: it opens the URL prompt.
    #[must_use]
    pub fn command(self) -> Option<Command> {
        match self {
            Self::Bold => Some(Command::Bold),
            Self::Italic => Some(Command::Italic),
            Self::Underline => Some(Command::Underline),
            Self::BulletList => Some(Command::BulletList),
            Self::NumberedList => Some(Command::NumberedList),
            Self::ClearFormatting => Some(Command::ClearFormatting),
            Self::Link => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSwatch {
    pub hex: &'static str,
    pub title: &'static str,
}

impl ColorSwatch {
    #[must_use]
    pub fn command(self) -> Option<Command> {
        Color::parse(self.hex).ok().map(Command::Color)
    }
}

pub const COLOR_SWATCHES: [ColorSwatch; 4] = [
    ColorSwatch { hex: "#dc2626", title: "Vermelho" },
    ColorSwatch { hex: "#059669", title: "Verde" },
    ColorSwatch { hex: "#2563eb", title: "Azul" },
    ColorSwatch { hex: "#000000", title: "Preto" },
];

/// Placeholder entry of the size dropdown; selecting it does nothing.
pub const FONT_SIZE_PLACEHOLDER: &str = "Tamanho";

pub const FONT_SIZE_OPTIONS: [(u8, &str); 4] = [(1, "Pequeno"), (3, "Normal"), (5, "Grande"), (7, "Muito Grande")];

/// Map a `<select>` value to a size command. The placeholder (`""`) and
/// anything out of range yield `None`.
#[must_use]
pub fn font_size_command(value: &str) -> Option<Command> {
    let step = value.trim().parse::<u8>().ok()?;
    FontSize::new(step).ok().map(Command::FontSize)
}
