// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flattening of the constrained `<message>` XML dialect into a [`Message`].
//!
//! The dialect is a `message` element carrying optional `id`/`name`/`date`
//! attributes, direct `scalar` children, and `list` elements whose `complex`
//! children become row mappings. Anything that fails to parse, or contains no
//! `message` element at all, degrades to the single-field `_error` message
//! rather than failing the record.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::model::{FieldMap, Message, Value};

/// Attributes lifted from the `message` element, in fixed output order.
const MESSAGE_ATTR_KEYS: [&str; 3] = ["id", "name", "date"];

/// Flattens one record's XML payload. Total: every failure mode yields the
/// degenerate `_error` message, never an error value.
pub fn flatten(xml: &str) -> Message {
    let Ok(root) = parse_tree(xml) else {
        return Message::no_message();
    };
    let Some(message) = locate_message(&root) else {
        return Message::no_message();
    };

    let mut fields = FieldMap::new();

    for key in MESSAGE_ATTR_KEYS {
        if let Some(value) = message.attr(key) {
            fields.insert(format!("@{key}").into(), Value::text(value));
        }
    }

    for child in message.children.iter().filter(|child| child.tag == "scalar") {
        insert_scalar_field(child, &mut fields);
    }

    let mut lists = Vec::new();
    collect_descendants(message, "list", &mut lists);
    for list in lists {
        let name = list.attr("name").unwrap_or("list");
        let mut rows = Vec::new();
        for complex in list.children.iter().filter(|child| child.tag == "complex") {
            let mut row = FieldMap::new();
            for scalar in complex.children.iter().filter(|child| child.tag == "scalar") {
                insert_scalar_field(scalar, &mut row);
            }
            if !row.is_empty() {
                rows.push(Value::Map(row));
            }
        }
        if !rows.is_empty() {
            fields.insert(name.into(), Value::List(rows));
        }
    }

    Message::new(fields)
}

/// A `scalar` element contributes its `name` attribute as key and either `Null`
/// (when `nil="true"`) or its trimmed text. Unnamed scalars contribute nothing.
fn insert_scalar_field(scalar: &XmlElement, fields: &mut FieldMap) {
    let Some(name) = scalar.attr("name") else {
        return;
    };
    let value = if scalar.attr("nil") == Some("true") {
        Value::null()
    } else {
        Value::text(scalar.text.trim())
    };
    fields.insert(name.into(), value);
}

/// The root itself when it is named `message`, otherwise the first descendant
/// named `message` in document order.
fn locate_message(root: &XmlElement) -> Option<&XmlElement> {
    if root.tag == "message" {
        return Some(root);
    }
    first_descendant(root, "message")
}

fn first_descendant<'a>(element: &'a XmlElement, tag: &str) -> Option<&'a XmlElement> {
    for child in &element.children {
        if child.tag == tag {
            return Some(child);
        }
        if let Some(found) = first_descendant(child, tag) {
            return Some(found);
        }
    }
    None
}

/// Pre-order collection, so a nested element sharing a name with an ancestor is
/// visited after it (last write wins downstream).
fn collect_descendants<'a>(element: &'a XmlElement, tag: &str, out: &mut Vec<&'a XmlElement>) {
    for child in &element.children {
        if child.tag == tag {
            out.push(child);
        }
        collect_descendants(child, tag, out);
    }
}

#[derive(Debug, Default)]
struct XmlElement {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<XmlElement>,
    text: String,
}

impl XmlElement {
    fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Internal parse failure; the caller only cares that flattening degrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct XmlTreeError;

/// Builds a small element tree from quick-xml events. Returns an error on any
/// reader failure, unbalanced tags, or a document without a root element.
fn parse_tree(xml: &str) -> Result<XmlElement, XmlTreeError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                stack.push(element_from_start(&start)?);
            }
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start)?;
                attach(element, &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or(XmlTreeError)?;
                attach(element, &mut stack, &mut root)?;
            }
            Ok(Event::Text(text)) => {
                if let Some(open) = stack.last_mut() {
                    let unescaped = text.unescape().map_err(|_| XmlTreeError)?;
                    open.text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(open) = stack.last_mut() {
                    let raw =
                        String::from_utf8(data.into_inner().into_owned()).map_err(|_| XmlTreeError)?;
                    open.text.push_str(&raw);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(_) => return Err(XmlTreeError),
        }
    }

    if !stack.is_empty() {
        return Err(XmlTreeError);
    }
    root.ok_or(XmlTreeError)
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement, XmlTreeError> {
    let tag = String::from_utf8(start.name().as_ref().to_vec()).map_err(|_| XmlTreeError)?;

    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|_| XmlTreeError)?;
        let key = String::from_utf8(attr.key.as_ref().to_vec()).map_err(|_| XmlTreeError)?;
        let value = attr.unescape_value().map_err(|_| XmlTreeError)?.into_owned();
        attrs.push((key, value));
    }

    Ok(XmlElement { tag, attrs, children: Vec::new(), text: String::new() })
}

fn attach(
    element: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<(), XmlTreeError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        // A second root element makes the document ill-formed.
        return Err(XmlTreeError);
    }
    *root = Some(element);
    Ok(())
}
