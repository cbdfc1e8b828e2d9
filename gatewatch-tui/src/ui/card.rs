//! Presentation card: a labeled, variant-colored box around content.
//!
//! Cards are pure presentation. Every panel wraps its content in one;
//! the variant only selects the accent color.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders};

use super::Theme;

/// Visual variant selecting the card's accent color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Success,
    Error,
    Warning,
}

/// A titled box with an optional subtitle and a color variant.
#[derive(Debug, Clone, Default)]
pub struct Card {
    title: String,
    subtitle: Option<String>,
    variant: CardVariant,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            variant: CardVariant::Default,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    /// The accent color this card's variant maps to.
    pub fn accent(&self, theme: &Theme) -> Color {
        match self.variant {
            CardVariant::Default => theme.highlight,
            CardVariant::Success => theme.healthy,
            CardVariant::Error => theme.critical,
            CardVariant::Warning => theme.warning,
        }
    }

    /// Build the bordered block; render content into its `inner` area.
    pub fn block(&self, theme: &Theme) -> Block<'static> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(self.accent(theme)))
            .title(format!(" {} ", self.title));

        if let Some(subtitle) = &self.subtitle {
            block = block.title_top(
                Line::from(format!(" {} ", subtitle))
                    .right_aligned()
                    .style(Style::default().add_modifier(Modifier::DIM)),
            );
        }

        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_theme_accents() {
        let theme = Theme::dark();
        assert_eq!(Card::new("t").accent(&theme), theme.highlight);
        assert_eq!(
            Card::new("t").variant(CardVariant::Success).accent(&theme),
            theme.healthy
        );
        assert_eq!(
            Card::new("t").variant(CardVariant::Error).accent(&theme),
            theme.critical
        );
        assert_eq!(
            Card::new("t").variant(CardVariant::Warning).accent(&theme),
            theme.warning
        );
    }
}
