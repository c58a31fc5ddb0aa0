//! macOS Terminal.app profile (`.terminal`)
//!
//! The profile itself is an XML plist. Every color in it is an
//! `NSKeyedArchiver` graph of a single `NSColor`, stored as an embedded
//! binary plist.

use super::{GenerateContext, GenerationError};
use crate::core::color::Color;
use crate::core::palette::{Palette, ANSI_COLOR_NAMES};
use crate::core::plist::{self, Dictionary, Value};

/// Profile format version written by Terminal.app
const PROFILE_VERSION: f64 = 2.07;

/// Name shown in the Terminal.app profile list
const PROFILE_NAME: &str = "dotfiles";

/// `NSColorSpace` value for device RGB
const DEVICE_RGB_COLOR_SPACE: i64 = 2;

/// `$version` of keyed archives
const ARCHIVER_VERSION: i64 = 100_000;

/// Component as `%.10f` with trailing zeros and dot removed
fn format_component(value: f64) -> String {
    let fixed = format!("{:.10}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `NSRGB` payload: space separated float components plus a NUL terminator
fn nsrgb_bytes(color: Color) -> Vec<u8> {
    let (r, g, b) = color.float_rgb();
    let text = [r, g, b].map(format_component).join(" ");
    let mut bytes = text.into_bytes();
    bytes.push(0);
    bytes
}

/// Binary keyed archive of one `NSColor`
fn archive_color(color: Color) -> Vec<u8> {
    let ns_color = Dictionary::new()
        .with("$class", Value::Uid(2))
        .with("NSColorSpace", DEVICE_RGB_COLOR_SPACE)
        .with("NSRGB", nsrgb_bytes(color));
    let class = Dictionary::new()
        .with("$classes", vec![Value::from("NSColor"), Value::from("NSObject")])
        .with("$classname", "NSColor");
    let archive = Dictionary::new()
        .with("$archiver", "NSKeyedArchiver")
        .with("$version", ARCHIVER_VERSION)
        .with("$top", Dictionary::new().with("root", Value::Uid(1)))
        .with(
            "$objects",
            vec![Value::from("$null"), Value::from(ns_color), Value::from(class)],
        );
    plist::binary::to_vec(&Value::from(archive), true)
}

pub(super) fn generate(
    palette: &Palette,
    _ctx: &GenerateContext,
) -> Result<Vec<u8>, GenerationError> {
    let mut profile = Dictionary::new()
        .with("ProfileCurrentVersion", PROFILE_VERSION)
        .with("name", PROFILE_NAME)
        .with("type", "Window Settings")
        .with("UseBrightBold", false);

    let mut put = |key: &str, color: Color| profile.insert(key, archive_color(color));
    put("TextColor", palette.fg());
    put("TextBoldColor", palette.fg());
    put("BackgroundColor", palette.bg());
    put("CursorColor", palette.cursor_bg());
    put("SelectionColor", palette.selection_bg());

    let ansi = palette.ansi_colors();
    for (bright, prefix) in [(false, "ANSI"), (true, "ANSIBright")] {
        for (index, name) in ANSI_COLOR_NAMES.iter().enumerate() {
            let color = ansi[index + usize::from(bright) * ANSI_COLOR_NAMES.len()];
            put(&format!("{}{}Color", prefix, name), color);
        }
    }

    let xml = plist::xml::to_string(&Value::from(profile), true)?;
    Ok(xml.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trailer_object_count(bytes: &[u8]) -> u64 {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&bytes[bytes.len() - 24..bytes.len() - 16]);
        u64::from_be_bytes(buf)
    }

    #[test]
    fn test_component_formatting() {
        assert_eq!(format_component(0.0), "0");
        assert_eq!(format_component(1.0), "1");
        assert_eq!(format_component(0.5), "0.5");
        assert_eq!(format_component(128.0 / 255.0), "0.5019607843");
        assert_eq!(nsrgb_bytes(Color::new(255, 0, 128)), b"1 0 0.5019607843\0".to_vec());
    }

    #[test]
    fn test_color_archive_layout() {
        let bytes = archive_color(Color::new(0, 0, 0));
        assert!(bytes.starts_with(b"bplist00"));
        // "NSColor" appears twice in the graph but is stored once
        assert_eq!(trailer_object_count(&bytes), 25);
        // sorted top-level keys: $archiver, $objects, $top, $version
        assert_eq!(&bytes[8..13], &[0xD4, 1, 2, 3, 4]);
        assert_eq!(&bytes[17..27], b"\x59$archiver");
    }

    /// `archive_color(#2d2d2d)` as written by Python's `plistlib` with sorted keys
    const BG_ARCHIVE_HEX: &str = concat!(
        "62706c6973743030d401020304050615185924617263686976657258246f626a",
        "656374735424746f70582476657273696f6e5f100f4e534b6579656441726368",
        "69766572a307080f55246e756c6cd3090a0b0c0d0e5624636c6173735c4e5343",
        "6f6c6f725370616365554e53524742800210024f1027302e3137363437303538",
        "383220302e3137363437303538383220302e3137363437303538383200d21011",
        "12135824636c61737365735a24636c6173736e616d65a21314574e53436f6c6f",
        "72584e534f626a656374d1161754726f6f74800112000186a008111b24293244",
        "484e555c696f71739da2abb6b9c1cacdd2d40000000000000101000000000000",
        "0019000000000000000000000000000000d9",
    );

    #[test]
    fn test_color_archive_golden_bytes() {
        let expected = hex::decode(BG_ARCHIVE_HEX).unwrap();
        assert_eq!(expected.len(), 274);
        assert_eq!(archive_color(Color::new(0x2d, 0x2d, 0x2d)), expected);
    }

    #[test]
    fn test_profile_keys() {
        let bytes = generate(&Palette::eighties(), &GenerateContext::default()).unwrap();
        let xml = String::from_utf8(bytes).unwrap();
        let keys: Vec<&str> = xml
            .lines()
            .filter(|l| l.starts_with("\t<key>"))
            .map(|l| l.trim_start_matches("\t<key>").trim_end_matches("</key>"))
            .collect();
        assert_eq!(keys.len(), 4 + 5 + 16);
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert_eq!(keys[0], "ANSIBlackColor");
        assert!(keys.contains(&"ANSIBrightWhiteColor"));
        assert!(xml.contains("\t<key>ProfileCurrentVersion</key>\n\t<real>2.07</real>\n"));
        assert!(xml.contains("\t<key>UseBrightBold</key>\n\t<false/>\n"));
        assert!(xml.contains("\t<key>name</key>\n\t<string>dotfiles</string>\n"));
    }

    #[test]
    fn test_embedded_archive_matches_color() {
        let palette = Palette::eighties();
        let bytes = generate(&palette, &GenerateContext::default()).unwrap();
        let xml = String::from_utf8(bytes).unwrap();
        let expected = archive_color(palette.bg());
        let start = xml.find("<key>BackgroundColor</key>").unwrap();
        let block = &xml[start..];
        let data_start = block.find("<data>").unwrap() + "<data>".len();
        let data_end = block.find("</data>").unwrap();
        let encoded: String = block[data_start..data_end]
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        use base64::Engine;
        let decoded = base64::engine::general_purpose::STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, expected);
    }
}
