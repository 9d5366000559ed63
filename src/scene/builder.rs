//! Typed element writer for scene documents.
//!
//! Wraps [`quick_xml::Writer`] so tags always balance and attribute values
//! are escaped. Only lyric text can opt out of escaping.

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};

/// Value type of an effect or shape property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    /// `#aarrggbb` color.
    Color,
    /// `true` / `false`.
    Bool,
    /// Six-decimal float.
    Float,
    /// Integer.
    Int,
    /// `x,y` pair of six-decimal floats.
    Vec2,
}

impl PropertyType {
    /// Attribute spelling of the type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Int => "int",
            Self::Vec2 => "vec2",
        }
    }
}

/// A static property: name, type and literal value.
pub type StaticProperty = (&'static str, PropertyType, &'static str);

/// Indented scene document writer.
pub struct SceneWriter {
    writer: Writer<Vec<u8>>,
}

impl Default for SceneWriter {
    /// An empty document with two-space indentation.
    fn default() -> Self {
        Self { writer: Writer::new_with_indent(Vec::new(), b' ', 2) }
    }
}

impl SceneWriter {
    /// Write the `<?xml version="1.0" encoding="UTF-8"?>` declaration.
    pub fn declaration(&mut self) -> Result<&mut Self> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(self)
    }

    /// Write a comment; `text` must not contain `--`.
    pub fn comment(&mut self, text: &str) -> Result<&mut Self> {
        self.writer.write_event(Event::Comment(BytesText::from_escaped(text)))?;
        Ok(self)
    }

    /// Open `<name attrs...>`.
    pub fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<&mut Self> {
        self.writer.write_event(Event::Start(start(name, attrs)))?;
        Ok(self)
    }

    /// Close `</name>`.
    pub fn close(&mut self, name: &str) -> Result<&mut Self> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(self)
    }

    /// Write `<name attrs.../>`.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<&mut Self> {
        self.writer.write_event(Event::Empty(start(name, attrs)))?;
        Ok(self)
    }

    /// Write `<name attrs...>` ... `</name>` around whatever `body` writes.
    pub fn element(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
        body: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<&mut Self> {
        self.open(name, attrs)?;
        body(self)?;
        self.close(name)
    }

    /// Write `<name value="..."/>`, the form used by transform channels.
    pub fn value(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        self.empty(name, &[("value", value)])
    }

    /// Write a static `<property name type value/>`.
    pub fn property(&mut self, name: &str, kind: PropertyType, value: &str) -> Result<&mut Self> {
        self.empty("property", &[("name", name), ("type", kind.as_str()), ("value", value)])
    }

    /// Write a keyframed property; each keyframe is `(t, v)` with `t` the
    /// normalized position within the element's lifetime.
    pub fn animated(
        &mut self,
        name: &str,
        kind: PropertyType,
        keyframes: &[(&str, &str)],
    ) -> Result<&mut Self> {
        self.element("property", &[("name", name), ("type", kind.as_str())], |w| {
            for &(t, v) in keyframes {
                w.empty("kf", &[("t", t), ("v", v)])?;
            }
            Ok(())
        })
    }

    /// Write a locally applied effect holding only static properties.
    pub fn effect(&mut self, id: &str, properties: &[StaticProperty]) -> Result<&mut Self> {
        self.element("effect", &[("id", id), ("locallyApplied", "true")], |w| {
            for &(name, kind, value) in properties {
                w.property(name, kind, value)?;
            }
            Ok(())
        })
    }

    /// Write `<name>text</name>`. With `escape`, only `<`, `>` and `&` are
    /// escaped; quotes stay as typed.
    pub fn text_element(&mut self, name: &str, text: &str, escape: bool) -> Result<&mut Self> {
        let content = if escape {
            BytesText::from_escaped(partial_escape(text))
        } else {
            BytesText::from_escaped(text)
        };
        self.open(name, &[])?;
        self.writer.write_event(Event::Text(content))?;
        self.close(name)
    }

    /// Finish the document.
    pub fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner())
            .map_err(|e| Error::Msg(format!("scene document is not UTF-8: {e}")))
    }
}

fn start<'a>(name: &'a str, attrs: &[(&'a str, &'a str)]) -> BytesStart<'a> {
    let mut elem = BytesStart::new(name);
    for &attr in attrs {
        elem.push_attribute(attr);
    }
    elem
}

/// Format a float with six decimals, the scene's number format.
pub fn fixed(value: f64) -> String {
    format!("{value:.6}")
}
