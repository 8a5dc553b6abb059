// SPDX-License-Identifier: MPL-2.0
//! Rich dialog content.
//!
//! A [`Markup`] is inserted into a dialog as-is: nothing in it is escaped or
//! sanitised, so callers building it from untrusted input are responsible for
//! cleaning that input first. Forms inside markup are live: the presenter
//! writes user input into the shared [`FormHandle`] and callers read it back
//! at confirm time.

pub mod date_range;
pub mod form;

pub use date_range::{DateRangePicker, PickerError, PickerOptions, DATE_FORMAT};
pub use form::{DateConstraint, Field, Form, FormHandle};

use std::fmt::Write as _;

/// One piece of dialog content.
#[derive(Debug, Clone)]
pub enum Block {
    Paragraph(String),
    /// A navigation link. `primary` links render as buttons.
    Link {
        href: String,
        label: String,
        primary: bool,
    },
    Form(FormHandle),
}

/// Ordered dialog content.
#[derive(Debug, Clone, Default)]
pub struct Markup {
    blocks: Vec<Block>,
}

impl Markup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Paragraph(text.into()));
        self
    }

    #[must_use]
    pub fn link(mut self, href: impl Into<String>, label: impl Into<String>) -> Self {
        self.blocks.push(Block::Link {
            href: href.into(),
            label: label.into(),
            primary: false,
        });
        self
    }

    #[must_use]
    pub fn button_link(mut self, href: impl Into<String>, label: impl Into<String>) -> Self {
        self.blocks.push(Block::Link {
            href: href.into(),
            label: label.into(),
            primary: true,
        });
        self
    }

    #[must_use]
    pub fn form(mut self, form: FormHandle) -> Self {
        self.blocks.push(Block::Form(form));
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Hrefs of every link in the content, in order.
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Link { href, .. } => Some(href.as_str()),
            _ => None,
        })
    }

    /// The first embedded form, if any.
    pub fn first_form(&self) -> Option<&FormHandle> {
        self.blocks.iter().find_map(|block| match block {
            Block::Form(form) => Some(form),
            _ => None,
        })
    }

    /// Renders the content as HTML, verbatim. Used for logs and for
    /// clients that embed the dialog in a web view.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph(text) => {
                    let _ = write!(out, "<p>{text}</p>");
                }
                Block::Link {
                    href,
                    label,
                    primary,
                } => {
                    let class = if *primary { " class=\"btn btn-primary\"" } else { "" };
                    let _ = write!(out, "<p><a href=\"{href}\"{class}>{label}</a></p>");
                }
                Block::Form(form) => out.push_str(&form.to_html()),
            }
        }
        out
    }
}

impl From<&str> for Markup {
    fn from(text: &str) -> Self {
        Markup::new().paragraph(text)
    }
}

impl From<String> for Markup {
    fn from(text: String) -> Self {
        Markup::new().paragraph(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_is_not_escaped() {
        let markup = Markup::new().paragraph("<b>bold</b> & co");
        assert_eq!(markup.to_html(), "<p><b>bold</b> & co</p>");
    }

    #[test]
    fn links_are_listed_in_order() {
        let markup = Markup::new()
            .link("/a", "A")
            .paragraph("between")
            .button_link("/b", "B");
        let links: Vec<&str> = markup.links().collect();
        assert_eq!(links, vec!["/a", "/b"]);
    }

    #[test]
    fn button_link_renders_primary_class() {
        let html = Markup::new().button_link("/book-room?id=1", "Book now !").to_html();
        assert_eq!(
            html,
            "<p><a href=\"/book-room?id=1\" class=\"btn btn-primary\">Book now !</a></p>"
        );
    }

    #[test]
    fn first_form_finds_embedded_form() {
        let form = FormHandle::new(Form::new("f"));
        let markup = Markup::new().paragraph("intro").form(form);
        assert_eq!(markup.first_form().map(|f| f.id()), Some("f".to_string()));
        assert!(Markup::new().first_form().is_none());
    }
}
