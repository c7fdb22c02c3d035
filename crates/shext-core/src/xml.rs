//! Serde shapes to and from XML text and files.
//!
//! Element and attribute names come from the shape's serde schema: fields
//! become child elements, fields renamed with a leading `@` become attributes
//! and the root tag is the type name unless [`XmlCodec::root`] overrides it.
//! Other markup formats plug in through [`MarkupFormat`].

use quick_xml::se::Serializer;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::config::XmlConfig;
use crate::error::{Result, ShextError};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// A text format serde shapes can be written to and read from.
///
/// The file and string helpers are provided on top of the two required
/// methods, so every format gets the same missing-file and empty-input rules.
pub trait MarkupFormat {
    fn to_markup<T: Serialize + ?Sized>(&self, value: &T) -> Result<String>;

    fn from_markup<T: DeserializeOwned>(&self, text: &str) -> Result<T>;

    /// Parses `text`; an empty string gives `T::default()`.
    fn load_from_str<T: DeserializeOwned + Default>(&self, text: &str) -> Result<T> {
        if text.is_empty() {
            return Ok(T::default());
        }
        self.from_markup(text)
    }

    /// Reads and parses `path`; a missing file gives `T::default()`.
    fn load_from_file<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("{} not found, using default value", path.display());
                return Ok(T::default());
            }
            Err(e) => return Err(ShextError::io(path, e)),
        };
        self.from_markup(&text).map_err(|e| match e {
            ShextError::Serialization { message, .. } => ShextError::Serialization {
                context: format!("parse {}", path.display()),
                message,
            },
            other => other,
        })
    }

    /// Writes `value` to `path`, replacing any previous content. An empty
    /// path is a no-op.
    fn save_to_file<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        let text = self.to_markup(value)?;
        std::fs::write(path, text).map_err(|e| ShextError::io(path, e))?;
        tracing::debug!("saved {}", path.display());
        Ok(())
    }
}

/// XML via `quick-xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlCodec {
    indent: usize,
    declaration: bool,
    root: Option<String>,
}

impl Default for XmlCodec {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: true,
            root: None,
        }
    }
}

impl XmlCodec {
    /// Indented by two spaces, with an XML declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single line, no declaration.
    pub fn compact() -> Self {
        Self {
            indent: 0,
            declaration: false,
            root: None,
        }
    }

    pub fn from_config(cfg: &XmlConfig) -> Self {
        Self {
            indent: cfg.indent,
            declaration: cfg.declaration,
            root: None,
        }
    }

    /// Spaces per nesting level; 0 writes everything on one line.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    pub fn declaration(mut self, on: bool) -> Self {
        self.declaration = on;
        self
    }

    /// Root element name to use instead of the type name.
    pub fn root(mut self, tag: impl Into<String>) -> Self {
        self.root = Some(tag.into());
        self
    }
}

impl MarkupFormat for XmlCodec {
    fn to_markup<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let mut body = String::new();
        let mut ser = match &self.root {
            Some(tag) => Serializer::with_root(&mut body, Some(tag.as_str()))
                .map_err(|e| ShextError::serialization(format!("root tag {:?}", tag), e))?,
            None => Serializer::new(&mut body),
        };
        if self.indent > 0 {
            ser.indent(' ', self.indent);
        }
        value
            .serialize(ser)
            .map_err(|e| ShextError::serialization("serialize xml", e))?;

        if !self.declaration {
            return Ok(body);
        }
        let sep = if self.indent > 0 { "\n" } else { "" };
        Ok(format!("{}{}{}", XML_DECLARATION, sep, body))
    }

    fn from_markup<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        quick_xml::de::from_str(text).map_err(|e| ShextError::serialization("parse xml", e))
    }
}

/// Reads `path` as XML; a missing file gives `T::default()`.
pub fn load_from_file<T: DeserializeOwned + Default>(path: impl AsRef<Path>) -> Result<T> {
    XmlCodec::default().load_from_file(path.as_ref())
}

/// Writes `value` to `path` as XML; an empty path does nothing.
pub fn save_to_file<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    XmlCodec::default().save_to_file(path.as_ref(), value)
}

/// Parses XML text; an empty string gives `T::default()`.
pub fn load_from_xml<T: DeserializeOwned + Default>(text: &str) -> Result<T> {
    XmlCodec::default().load_from_str(text)
}

/// Serializes `value` to indented XML with a declaration.
pub fn to_xml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    XmlCodec::default().to_markup(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Profile {
        #[serde(rename = "@id")]
        id: u32,
        name: String,
        #[serde(default)]
        tags: Vec<String>,
    }

    #[test]
    fn compact_output_uses_type_name() {
        let xml = XmlCodec::compact().to_markup(&Point { x: 1, y: 2 }).unwrap();
        assert_eq!(xml, "<Point><x>1</x><y>2</y></Point>");
    }

    #[test]
    fn builder_options_shape_output() {
        assert_eq!(XmlCodec::new(), XmlCodec::default());

        let no_decl = XmlCodec::new()
            .declaration(false)
            .to_markup(&Point { x: 1, y: 2 })
            .unwrap();
        assert!(no_decl.starts_with("<Point>"), "{}", no_decl);
        assert!(no_decl.contains("\n  <x>1</x>"), "{}", no_decl);

        let wide = XmlCodec::compact()
            .indent(4)
            .to_markup(&Point { x: 1, y: 2 })
            .unwrap();
        assert!(wide.contains("\n    <x>1</x>"), "{}", wide);

        let flat = XmlCodec::new()
            .indent(0)
            .declaration(false)
            .to_markup(&Point { x: 1, y: 2 })
            .unwrap();
        assert_eq!(flat, "<Point><x>1</x><y>2</y></Point>");
    }

    #[test]
    fn root_override() {
        let xml = XmlCodec::compact()
            .root("point")
            .to_markup(&Point { x: 1, y: 2 })
            .unwrap();
        assert_eq!(xml, "<point><x>1</x><y>2</y></point>");
    }

    #[test]
    fn default_output_has_declaration_and_indent() {
        let xml = to_xml(&Point { x: 3, y: 4 }).unwrap();
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains("\n  <x>3</x>"), "{}", xml);
    }

    #[test]
    fn string_round_trip_with_attribute() {
        let profile = Profile {
            id: 7,
            name: "Ada".to_string(),
            tags: vec!["math".to_string(), "engines".to_string()],
        };
        let xml = to_xml(&profile).unwrap();
        assert!(xml.contains(r#"<Profile id="7">"#), "{}", xml);
        let back: Profile = load_from_xml(&xml).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn empty_text_gives_default() {
        let p: Point = load_from_xml("").unwrap();
        assert_eq!(p, Point::default());
    }

    #[test]
    fn malformed_markup_is_serialization_error() {
        let err = load_from_xml::<Point>("<Point><x>1</Point>").unwrap_err();
        assert!(matches!(err, ShextError::Serialization { .. }));
    }

    #[test]
    fn incompatible_shape_is_serialization_error() {
        let err = load_from_xml::<Point>("<Point><x>abc</x><y>2</y></Point>").unwrap_err();
        assert!(matches!(err, ShextError::Serialization { .. }));
    }

    #[test]
    fn missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let p: Point = load_from_file(dir.path().join("absent.xml")).unwrap();
        assert_eq!(p, Point::default());
    }

    #[test]
    fn empty_path_save_is_noop() {
        save_to_file("", &Point { x: 1, y: 1 }).unwrap();
    }

    #[test]
    fn save_overwrites_and_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("point.xml");
        std::fs::write(&path, "old content that is much longer than the new document").unwrap();
        save_to_file(&path, &Point { x: 9, y: -9 }).unwrap();
        let back: Point = load_from_file(&path).unwrap();
        assert_eq!(back, Point { x: 9, y: -9 });
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("p.xml");
        let err = save_to_file(&path, &Point::default()).unwrap_err();
        assert!(matches!(err, ShextError::Io { .. }));
    }
}
