//! Element implementations built on top of `genpdf` primitives.
//!
//! Text nodes are stacked paragraphs, one per visual line.  On top of that this module adds two
//! small elements the upstream crate does not ship with: a fixed vertical gap measured in points,
//! and a wrapper that remembers the page its content was first drawn on.

use std::cell::Cell;
use std::rc::Rc;

use genpdf::elements::{Break, LinearLayout, Paragraph};
use genpdf::error::Error;
use genpdf::style::{Style, StyledString};
use genpdf::{render, Element, Mm, RenderResult, Size};

use crate::builder::{mm_from_points, PageCounter, BODY_FONT_SIZE, HEADING_FONT_SIZE};
use crate::classify::Role;

/// Text style used for a role.
pub fn role_style(role: Role) -> Style {
    let mut style = Style::new();
    match role {
        Role::Heading => {
            style.set_bold();
            style.set_font_size(HEADING_FONT_SIZE);
        }
        Role::Body => style.set_font_size(BODY_FONT_SIZE),
    }
    style
}

/// Stacks decoded lines vertically, wrapping each line as its own paragraph.
///
/// Empty lines keep their height as a one-line break.
pub fn text_block(lines: &[String], style: Style) -> LinearLayout {
    let mut layout = LinearLayout::vertical();
    for line in lines {
        if line.trim().is_empty() {
            layout.push(Break::new(1));
        } else {
            layout.push(Paragraph::new(StyledString::new(line.clone(), style)));
        }
    }
    layout
}

/// A fixed amount of empty vertical space.
///
/// The gap is clamped to whatever is left on the page, so it never pushes content onto the next
/// page by itself.
#[derive(Clone, Copy, Debug)]
pub struct VerticalSpace {
    height: Mm,
}

impl VerticalSpace {
    /// Creates a gap of `height`.
    pub fn new(height: Mm) -> Self {
        Self { height }
    }

    /// Creates a gap measured in points.
    pub fn from_points(points: f64) -> Self {
        Self::new(mm_from_points(points))
    }
}

impl Element for VerticalSpace {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };

        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}

/// Wraps an element and records the page on which it first produced visible output.
pub struct PageAnchor<E> {
    inner: E,
    pages: PageCounter,
    page: Rc<Cell<Option<usize>>>,
}

impl<E: Element> PageAnchor<E> {
    /// Wraps `inner`, reading page numbers from `pages`.
    pub fn new(inner: E, pages: PageCounter) -> Self {
        Self {
            inner,
            pages,
            page: Rc::new(Cell::new(None)),
        }
    }

    /// Handle that yields the recorded page once rendering reached the element.
    pub fn page_slot(&self) -> Rc<Cell<Option<usize>>> {
        Rc::clone(&self.page)
    }
}

impl<E: Element> Element for PageAnchor<E> {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let result = self.inner.render(context, area, style)?;
        if self.page.get().is_none() && result.size.height > Mm::default() {
            self.page.set(Some(self.pages.current()));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_style_is_bold_and_larger() {
        let heading = role_style(Role::Heading);
        let body = role_style(Role::Body);
        assert!(heading.is_bold());
        assert!(!body.is_bold());
        assert!(heading.font_size() > body.font_size());
    }

    #[test]
    fn anchor_starts_without_page() {
        let anchor = PageAnchor::new(VerticalSpace::from_points(6.0), PageCounter::default());
        assert_eq!(anchor.page_slot().get(), None);
    }
}
