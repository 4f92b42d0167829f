/// A selectable flash color. The set is fixed at startup and the declaration
/// order here is the order options appear in the palette pane and in
/// `Palette::selected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorId {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
}

impl ColorId {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ColorId::Red => "red",
            ColorId::Orange => "orange",
            ColorId::Yellow => "yellow",
            ColorId::Green => "green",
            ColorId::Cyan => "cyan",
            ColorId::Blue => "blue",
            ColorId::Purple => "purple",
            ColorId::Pink => "pink",
        }
    }

    #[must_use]
    pub const fn all() -> [ColorId; 8] {
        [
            ColorId::Red,
            ColorId::Orange,
            ColorId::Yellow,
            ColorId::Green,
            ColorId::Cyan,
            ColorId::Blue,
            ColorId::Purple,
            ColorId::Pink,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub id: ColorId,
    pub selected: bool,
}

/// The set of color options and their toggle state. Options are created once
/// and never removed; only the `selected` flags change.
#[derive(Debug, Clone)]
pub struct Palette {
    options: Vec<ColorOption>,
}

impl Default for Palette {
    fn default() -> Self {
        let options = ColorId::all()
            .into_iter()
            .map(|id| ColorOption {
                id,
                selected: false,
            })
            .collect();
        Self { options }
    }
}

impl Palette {
    pub fn toggle(&mut self, index: usize) {
        if let Some(option) = self.options.get_mut(index) {
            option.selected = !option.selected;
        }
    }

    #[must_use]
    pub fn options(&self) -> &[ColorOption] {
        &self.options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Selected ids in declaration order, independent of toggle order.
    #[must_use]
    pub fn selected(&self) -> Vec<ColorId> {
        self.options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_one_flag() {
        let mut palette = Palette::default();
        palette.toggle(2);
        assert_eq!(palette.selected(), vec![ColorId::Yellow]);
    }

    #[test]
    fn test_double_toggle_restores_flag() {
        let mut palette = Palette::default();
        palette.toggle(0);
        palette.toggle(0);
        assert!(palette.selected().is_empty());
    }

    #[test]
    fn test_selected_order_is_declaration_order() {
        let mut palette = Palette::default();
        // toggled blue before red, order must not follow click order
        palette.toggle(5);
        palette.toggle(0);
        assert_eq!(palette.selected(), vec![ColorId::Red, ColorId::Blue]);
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut palette = Palette::default();
        palette.toggle(palette.len());
        assert!(palette.selected().is_empty());
    }
}
