//! Base16 palette model
//!
//! A palette is the single input of every generator. It holds the sixteen
//! base16 slots; every other color (background, cursor, ANSI slots, CSS
//! variables) is a view computed from those slots on demand.

use serde::Serialize;

use super::color::Color;

/// Number of base16 slots
pub const BASE16_COUNT: usize = 16;

/// Number of ANSI terminal colors (8 normal + 8 bright)
pub const ANSI_COUNT: usize = 16;

/// Terminal color slot -> base16 slot, for the 16 ANSI colors
pub const ANSI_TO_BASE16: [usize; ANSI_COUNT] = [
    0x0, 0x8, 0xB, 0xA, 0xD, 0xE, 0xC, 0x5, // normal
    0x3, 0x8, 0xB, 0xA, 0xD, 0xE, 0xC, 0x7, // bright
];

/// `ANSI_TO_BASE16` followed by the 256-color slots 16..=21, which carry the
/// base16 slots the ANSI colors leave out
pub const EXTENDED_ANSI_TO_BASE16: [usize; 22] = [
    0x0, 0x8, 0xB, 0xA, 0xD, 0xE, 0xC, 0x5, // 0x00
    0x3, 0x8, 0xB, 0xA, 0xD, 0xE, 0xC, 0x7, // 0x08
    0x9, 0xF, 0x1, 0x2, 0x4, 0x6, //           0x10
];

/// Base16 slot -> first terminal slot sourcing from it
pub const BASE16_TO_ANSI: [usize; BASE16_COUNT] = invert_mapping(&EXTENDED_ANSI_TO_BASE16);

/// Base16 slot of the background color
pub const BASE16_BG_COLOR_IDX: usize = 0x0;
/// Base16 slot of the foreground color
pub const BASE16_FG_COLOR_IDX: usize = 0x5;
/// Base16 slot of the selection background
pub const BASE16_SELECTION_BG_COLOR_IDX: usize = 0x2;
/// ANSI slot of the link color
pub const ANSI_LINK_COLOR_IDX: usize = 0xC;

/// Color names of the eight ANSI roles, in slot order
pub const ANSI_COLOR_NAMES: [&str; 8] = [
    "Black", "Red", "Green", "Yellow", "Blue", "Magenta", "Cyan", "White",
];

/// First-match inverse of a terminal -> base16 table.
///
/// Evaluated at compile time; a base16 slot without any terminal slot is a
/// compile error rather than a silently wrong entry.
const fn invert_mapping(mapping: &[usize]) -> [usize; BASE16_COUNT] {
    let mut inverse = [0; BASE16_COUNT];
    let mut base = 0;
    while base < BASE16_COUNT {
        let mut slot = 0;
        let mut found = false;
        while slot < mapping.len() {
            if mapping[slot] == base {
                inverse[base] = slot;
                found = true;
                break;
            }
            slot += 1;
        }
        assert!(found, "base16 slot has no terminal color slot");
        base += 1;
    }
    inverse
}

/// A named base16 palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Scheme identifier without the `base16-` prefix, e.g. `eighties`
    pub base16_name: String,
    /// Whether this is a dark theme
    pub is_dark: bool,
    /// The sixteen base16 slots `0x0..=0xF`
    pub base16_colors: [Color; BASE16_COUNT],
}

impl Palette {
    /// Create a palette
    pub fn new(
        base16_name: impl Into<String>,
        is_dark: bool,
        base16_colors: [Color; BASE16_COUNT],
    ) -> Self {
        Self {
            base16_name: base16_name.into(),
            is_dark,
            base16_colors,
        }
    }

    /// base16-eighties by Chris Kempson (http://chriskempson.com)
    pub fn eighties() -> Self {
        Self::new(
            "eighties",
            true,
            [
                Color::new(0x2d, 0x2d, 0x2d),
                Color::new(0x39, 0x39, 0x39),
                Color::new(0x51, 0x51, 0x51),
                Color::new(0x74, 0x73, 0x69),
                Color::new(0xa0, 0x9f, 0x93),
                Color::new(0xd3, 0xd0, 0xc8),
                Color::new(0xe8, 0xe6, 0xdf),
                Color::new(0xf2, 0xf0, 0xec),
                Color::new(0xf2, 0x77, 0x7a),
                Color::new(0xf9, 0x91, 0x57),
                Color::new(0xff, 0xcc, 0x66),
                Color::new(0x99, 0xcc, 0x99),
                Color::new(0x66, 0xcc, 0xcc),
                Color::new(0x66, 0x99, 0xcc),
                Color::new(0xcc, 0x99, 0xcc),
                Color::new(0xd2, 0x7b, 0x53),
            ],
        )
    }

    /// Full scheme name, `base16-<name>`
    pub fn name(&self) -> String {
        format!("base16-{}", self.base16_name)
    }

    /// Base16 slot by index, `0x0..=0xF`
    pub(crate) fn base(&self, index: usize) -> Color {
        self.base16_colors[index]
    }

    /// Background color
    pub fn bg(&self) -> Color {
        self.base(BASE16_BG_COLOR_IDX)
    }

    /// Foreground color
    pub fn fg(&self) -> Color {
        self.base(BASE16_FG_COLOR_IDX)
    }

    /// Cursor block color
    pub fn cursor_bg(&self) -> Color {
        self.fg()
    }

    /// Text color under the cursor
    pub fn cursor_fg(&self) -> Color {
        self.bg()
    }

    /// Selection background
    pub fn selection_bg(&self) -> Color {
        self.base(BASE16_SELECTION_BG_COLOR_IDX)
    }

    /// Selection foreground
    pub fn selection_fg(&self) -> Color {
        self.fg()
    }

    /// The 16 ANSI colors, permuted from the base16 slots
    pub fn ansi_colors(&self) -> [Color; ANSI_COUNT] {
        ANSI_TO_BASE16.map(|index| self.base16_colors[index])
    }

    /// Hyperlink color
    pub fn link_color(&self) -> Color {
        self.ansi_colors()[ANSI_LINK_COLOR_IDX]
    }

    /// Terminal slot for every base16 slot
    pub fn base_to_ansi(&self) -> [usize; BASE16_COUNT] {
        BASE16_TO_ANSI
    }

    /// CSS variable names and their colors, in output order
    pub fn css_variables(&self) -> Vec<(String, Color)> {
        let mut vars = vec![
            ("bg".to_string(), self.bg()),
            ("fg".to_string(), self.fg()),
            ("selection-bg".to_string(), self.selection_bg()),
            ("selection-fg".to_string(), self.selection_fg()),
            ("cursor-bg".to_string(), self.cursor_bg()),
            ("cursor-fg".to_string(), self.cursor_fg()),
        ];
        vars.extend(
            self.base16_colors
                .iter()
                .enumerate()
                .map(|(index, &color)| (format!("base-{:02X}", index), color)),
        );
        vars
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::eighties()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn distinct_palette() -> Palette {
        let mut colors = [Color::new(0, 0, 0); BASE16_COUNT];
        for (i, color) in colors.iter_mut().enumerate() {
            *color = Color::new(i as u8, (i * 2) as u8, (i * 3) as u8);
        }
        Palette::new("test", false, colors)
    }

    #[test]
    fn test_ansi_permutation() {
        for palette in [Palette::eighties(), distinct_palette()] {
            let ansi = palette.ansi_colors();
            for i in 0..ANSI_COUNT {
                assert_eq!(ansi[i], palette.base16_colors[ANSI_TO_BASE16[i]]);
            }
        }
    }

    #[test]
    fn test_extended_prefix_matches_ansi() {
        assert_eq!(&EXTENDED_ANSI_TO_BASE16[..ANSI_COUNT], &ANSI_TO_BASE16[..]);
    }

    #[test]
    fn test_inverse_is_first_match() {
        assert_eq!(
            BASE16_TO_ANSI,
            [0, 18, 19, 8, 20, 7, 21, 15, 1, 16, 3, 2, 6, 4, 5, 17]
        );
        for (base, &slot) in BASE16_TO_ANSI.iter().enumerate() {
            assert_eq!(EXTENDED_ANSI_TO_BASE16[slot], base);
            // no earlier slot maps to the same base color
            assert!(!EXTENDED_ANSI_TO_BASE16[..slot].contains(&base));
        }
    }

    #[test]
    fn test_semantic_roles() {
        let palette = Palette::eighties();
        assert_eq!(palette.bg().css_hex(), "#2d2d2d");
        assert_eq!(palette.fg().css_hex(), "#d3d0c8");
        assert_eq!(palette.selection_bg().css_hex(), "#515151");
        assert_eq!(palette.cursor_bg(), palette.fg());
        assert_eq!(palette.cursor_fg(), palette.bg());
        assert_eq!(palette.selection_fg(), palette.fg());
        assert_eq!(palette.link_color(), palette.base(0xD));
        assert_eq!(palette.name(), "base16-eighties");
    }

    #[test]
    fn test_css_variables_order() {
        let vars = Palette::eighties().css_variables();
        let names: Vec<&str> = vars.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names.len(), 22);
        assert_eq!(
            &names[..7],
            &["bg", "fg", "selection-bg", "selection-fg", "cursor-bg", "cursor-fg", "base-00"]
        );
        assert_eq!(names[16], "base-0A");
        assert_eq!(names[21], "base-0F");
    }

    fn any_palette() -> impl Strategy<Value = Palette> {
        (
            any::<bool>(),
            prop::array::uniform16(any::<(u8, u8, u8)>()),
        )
            .prop_map(|(is_dark, slots)| {
                Palette::new("generated", is_dark, slots.map(|(r, g, b)| Color::new(r, g, b)))
            })
    }

    proptest! {
        #[test]
        fn test_ansi_permutation_any_palette(palette in any_palette()) {
            let ansi = palette.ansi_colors();
            for i in 0..ANSI_COUNT {
                prop_assert_eq!(ansi[i], palette.base16_colors[ANSI_TO_BASE16[i]]);
            }
            prop_assert_eq!(palette.link_color(), ansi[ANSI_LINK_COLOR_IDX]);
            prop_assert_eq!(palette.cursor_bg(), palette.fg());
            prop_assert_eq!(palette.cursor_fg(), palette.bg());
        }
    }
}
