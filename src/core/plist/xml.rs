//! XML property list writer

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use quick_xml::escape::partial_escape;

use super::{Dictionary, PlistError, Value};

const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n";

/// Width budget for base64 lines, indentation included
const DATA_LINE_WIDTH: usize = 76;

/// Columns a tab counts for when fitting base64 lines
const TAB_WIDTH: usize = 8;

/// Encode a value as an XML plist document
pub fn to_string(value: &Value, sort_keys: bool) -> Result<String, PlistError> {
    let mut writer = XmlWriter {
        out: String::from(HEADER),
        indent: 0,
        sort_keys,
    };
    writer.line("<plist version=\"1.0\">");
    writer.value(value)?;
    writer.line("</plist>");
    Ok(writer.out)
}

struct XmlWriter {
    out: String,
    indent: usize,
    sort_keys: bool,
}

impl XmlWriter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.out.push('\t');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn simple(&mut self, element: &str, text: &str) -> Result<(), PlistError> {
        let text = escape(text)?;
        self.line(&format!("<{}>{}</{}>", element, text, element));
        Ok(())
    }

    fn begin(&mut self, element: &str) {
        self.line(&format!("<{}>", element));
        self.indent += 1;
    }

    fn end(&mut self, element: &str) {
        self.indent -= 1;
        self.line(&format!("</{}>", element));
    }

    fn value(&mut self, value: &Value) -> Result<(), PlistError> {
        match value {
            Value::String(s) => self.simple("string", s)?,
            Value::Boolean(true) => self.line("<true/>"),
            Value::Boolean(false) => self.line("<false/>"),
            Value::Integer(i) => self.simple("integer", &i.to_string())?,
            Value::Real(r) => self.simple("real", &format_real(*r))?,
            Value::Data(bytes) => self.data(bytes),
            Value::Array(items) => {
                if items.is_empty() {
                    self.line("<array/>");
                } else {
                    self.begin("array");
                    for item in items {
                        self.value(item)?;
                    }
                    self.end("array");
                }
            }
            Value::Dictionary(dict) => self.dict(dict)?,
            Value::Uid(_) => return Err(PlistError::UidInXml),
        }
        Ok(())
    }

    fn dict(&mut self, dict: &Dictionary) -> Result<(), PlistError> {
        if dict.is_empty() {
            self.line("<dict/>");
            return Ok(());
        }
        self.begin("dict");
        for (key, value) in dict.entries(self.sort_keys) {
            self.simple("key", key)?;
            self.value(value)?;
        }
        self.end("dict");
        Ok(())
    }

    fn data(&mut self, bytes: &[u8]) {
        self.begin("data");
        // base64 lines sit at the same depth as the <data> tags
        self.indent -= 1;
        let width = DATA_LINE_WIDTH
            .saturating_sub(TAB_WIDTH * self.indent)
            .max(16);
        let chunk = (width / 4) * 3;
        for piece in bytes.chunks(chunk) {
            let encoded = STANDARD.encode(piece);
            self.line(&encoded);
        }
        self.indent += 1;
        self.end("data");
    }
}

/// Shortest round-trip decimal, always with a fractional part
pub(crate) fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn escape(text: &str) -> Result<String, PlistError> {
    if text
        .chars()
        .any(|c| matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}'))
    {
        return Err(PlistError::ControlCharacter(text.to_string()));
    }
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    Ok(partial_escape(text.as_str()).into_owned())
}
