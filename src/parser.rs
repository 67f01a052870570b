//! Streaming metalink document parser
//!
//! Drives a SAX-style XML event stream and accumulates typed state into a
//! [`MetalinkDocument`], validating structure as events arrive:
//!
//! - `<file name=..>`  establishes and checks the target filename
//! - `<size>`          declared payload size, base-10
//! - `<hash type=..>`  one digest declaration
//! - `<url ..>`        one mirror declaration
//!
//! Everything else, including elements in extension namespaces, is
//! ignored. Character data is buffered per element and handled at the
//! closing tag, so fragmented text deliveries and pretty-printed
//! documents behave the same as single-shot minified ones.

use std::collections::HashMap;

use xml::attribute::OwnedAttribute;
use xml::name::OwnedName;
use xml::reader::XmlEvent;
use xml::ParserConfig;

use crate::document::{HashDeclaration, MetalinkDocument, UrlDeclaration};
use crate::error::{DocumentErrorKind, MetalinkError, Result};

/// URL bodies must be strictly longer than this to be stored; placeholder
/// bodies like "-" or "N/A" are dropped without error.
const MIN_URL_LENGTH: usize = 4;

/// Parse a metalink document from raw bytes
pub(crate) fn parse_document(bytes: &[u8], expected_file_name: &str) -> Result<MetalinkDocument> {
    if expected_file_name.is_empty() {
        return Err(MetalinkError::invalid_parameter(
            "expected_file_name",
            "must not be empty",
        ));
    }

    let mut reader = ParserConfig::new()
        .cdata_to_characters(true)
        .whitespace_to_characters(true)
        .create_reader(bytes);
    let mut context = ParseContext::new(expected_file_name);

    loop {
        match reader.next()? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => context.handle_start_element(&name, &attributes)?,
            XmlEvent::Characters(text) => context.handle_character_data(&text),
            XmlEvent::EndElement { name } => context.handle_end_element(&name)?,
            XmlEvent::EndDocument => break,
            _ => {}
        }
    }

    context.finish()
}

/// Elements in extension namespaces carry a prefix and never take part in
/// dispatch; only plain metalink element names do.
fn dispatch_name(name: &OwnedName) -> Option<&str> {
    if name.prefix.is_some() {
        None
    } else {
        Some(name.local_name.as_str())
    }
}

/// Transient state threaded through the event handlers of one parse call
struct ParseContext<'a> {
    document: MetalinkDocument,
    expected_file_name: &'a str,
    /// Attributes of the most recent start tag, last-wins on duplicates
    attributes: HashMap<String, String>,
    /// Character data accumulated since the most recent start tag
    text: String,
}

impl<'a> ParseContext<'a> {
    fn new(expected_file_name: &'a str) -> Self {
        Self {
            document: MetalinkDocument::new(),
            expected_file_name,
            attributes: HashMap::new(),
            text: String::new(),
        }
    }

    fn handle_start_element(
        &mut self,
        name: &OwnedName,
        attributes: &[OwnedAttribute],
    ) -> Result<()> {
        self.attributes.clear();
        for attribute in attributes {
            self.attributes
                .insert(attribute.name.local_name.clone(), attribute.value.clone());
        }
        self.text.clear();

        if dispatch_name(name) == Some("file") {
            self.establish_file_name()?;
        }
        Ok(())
    }

    fn handle_character_data(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn handle_end_element(&mut self, name: &OwnedName) -> Result<()> {
        let text = std::mem::take(&mut self.text);
        // An element without character data never dispatched an event in
        // the first place, so there is nothing to validate.
        if text.is_empty() {
            return Ok(());
        }
        match dispatch_name(name) {
            Some("size") => self.handle_size(text.trim()),
            Some("hash") => self.handle_hash(text.trim()),
            Some("url") => self.handle_url(text.trim()),
            _ => Ok(()),
        }
    }

    /// Validate and record the filename from the `file` start tag
    ///
    /// This runs at the opening tag so that every later content element
    /// sees an established filename, whether or not the document carries
    /// whitespace between tags.
    fn establish_file_name(&mut self) -> Result<()> {
        let name = self.attributes.get("name").ok_or_else(|| {
            MetalinkError::document(
                DocumentErrorKind::MissingAttribute,
                "file element has no \"name\" attribute",
            )
        })?;
        if name != self.expected_file_name {
            return Err(MetalinkError::document(
                DocumentErrorKind::FilenameMismatch,
                format!(
                    "document describes '{}', expected '{}'",
                    name, self.expected_file_name
                ),
            ));
        }
        if !self.document.has_file_name() {
            self.document.set_file_name(name.clone());
        }
        Ok(())
    }

    fn ensure_file_name(&self, element: &str) -> Result<()> {
        if self.document.has_file_name() {
            Ok(())
        } else {
            Err(MetalinkError::invalid_parameter(
                "document",
                format!("{} content before a matching file tag", element),
            ))
        }
    }

    fn handle_size(&mut self, text: &str) -> Result<()> {
        self.ensure_file_name("size")?;
        let size = text.parse::<u64>().map_err(|_| {
            MetalinkError::invalid_parameter("size", format!("'{}' is not a byte count", text))
        })?;
        self.document.set_size(size);
        Ok(())
    }

    fn handle_hash(&mut self, text: &str) -> Result<()> {
        self.ensure_file_name("hash")?;
        let type_name = self.attributes.get("type").ok_or_else(|| {
            MetalinkError::document(
                DocumentErrorKind::MissingAttribute,
                "hash element has no \"type\" attribute",
            )
        })?;
        if text.is_empty() {
            return Err(MetalinkError::document(
                DocumentErrorKind::MissingContent,
                format!("hash element of type '{}' has no digest value", type_name),
            ));
        }
        self.document
            .push_hash(HashDeclaration::new(type_name.clone(), text));
        Ok(())
    }

    fn handle_url(&mut self, text: &str) -> Result<()> {
        if text.len() <= MIN_URL_LENGTH {
            tracing::debug!("Ignoring url element with short body: {:?}", text);
            return Ok(());
        }
        self.ensure_file_name("url")?;

        let preference = match self.attributes.get("preference") {
            Some(raw) => parse_preference(raw)?,
            None => 0,
        };
        self.document.push_url(UrlDeclaration::new(
            self.attributes.get("protocol").cloned(),
            self.attributes.get("type").cloned(),
            self.attributes.get("location").cloned(),
            preference,
            text,
        ));
        Ok(())
    }

    fn finish(self) -> Result<MetalinkDocument> {
        if !self.document.has_file_name() {
            return Err(MetalinkError::document(
                DocumentErrorKind::MissingContent,
                format!(
                    "document has no file element for '{}'",
                    self.expected_file_name
                ),
            ));
        }
        Ok(self.document)
    }
}

fn parse_preference(raw: &str) -> Result<u32> {
    let value = raw.trim().parse::<i64>().map_err(|_| {
        MetalinkError::invalid_parameter(
            "preference",
            format!("'{}' is not an integer", raw),
        )
    })?;
    if !(0..=100).contains(&value) {
        return Err(MetalinkError::document(
            DocumentErrorKind::MissingAttribute,
            format!("preference {} is outside the range 0-100", value),
        ));
    }
    Ok(value as u32)
}
