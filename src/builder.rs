//! Document construction helpers for the `genpdf` layout engine.

use std::cell::Cell;
use std::rc::Rc;

use genpdf::error::Error as GenpdfError;
use genpdf::style;
use genpdf::{Margins, Mm, PageDecorator, Size};

use crate::error::{Error, Result};
use crate::fonts;
use crate::geometry::PageGeometry;

/// Base font size of body text, in points.
pub const BODY_FONT_SIZE: u8 = 10;

/// Font size of heading text, in points.
pub const HEADING_FONT_SIZE: u8 = 14;

/// Line spacing factor applied to all text.
pub const LINE_SPACING: f64 = 1.2;

const MM_PER_POINT: f64 = 25.4 / 72.0;

pub(crate) fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

pub(crate) fn mm_from_points(points: f64) -> Mm {
    mm_from_f64(points * MM_PER_POINT)
}

/// Number of the page currently being laid out, shared between the decorator and elements.
///
/// The counter starts at zero and is advanced by the page decorator each time `genpdf` opens a
/// new page, so the first page is page 1.
#[derive(Clone, Debug, Default)]
pub struct PageCounter(Rc<Cell<usize>>);

impl PageCounter {
    /// Returns the 1-based number of the current page, or 0 before the first page exists.
    pub fn current(&self) -> usize {
        self.0.get()
    }

    fn advance(&self) -> usize {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }
}

/// Builder for `genpdf::Document` instances configured from a [`PageGeometry`].
pub struct DocumentBuilder {
    geometry: PageGeometry,
    title: Option<String>,
    pages: PageCounter,
}

impl DocumentBuilder {
    /// Creates a builder for the given page geometry.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            title: None,
            pages: PageCounter::default(),
        }
    }

    /// Sets the title stored in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Shares `pages` with the page decorator so callers can observe pagination.
    pub fn with_page_counter(mut self, pages: PageCounter) -> Self {
        self.pages = pages;
        self
    }

    /// Loads the fonts and builds a fully configured `genpdf::Document`.
    pub fn build(self) -> Result<genpdf::Document> {
        let font_family = fonts::default_font_family().map_err(Error::FontLoad)?;
        let mut document = genpdf::Document::new(font_family);

        let (width, height) = self.geometry.paper.dimensions_mm();
        document.set_paper_size(Size::new(mm_from_f64(width), mm_from_f64(height)));
        document.set_font_size(BODY_FONT_SIZE);
        document.set_line_spacing(LINE_SPACING);
        if let Some(title) = self.title {
            document.set_title(title);
        }

        let margins = self.geometry.margins;
        let decorator = CountingPageDecorator {
            margins: Margins::trbl(
                mm_from_f64(margins.top),
                mm_from_f64(margins.right),
                mm_from_f64(margins.bottom),
                mm_from_f64(margins.left),
            ),
            pages: self.pages,
        };
        document.set_page_decorator(decorator);

        Ok(document)
    }
}

struct CountingPageDecorator {
    margins: Margins,
    pages: PageCounter,
}

impl PageDecorator for CountingPageDecorator {
    fn decorate_page<'a>(
        &mut self,
        _context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        _style: style::Style,
    ) -> std::result::Result<genpdf::render::Area<'a>, GenpdfError> {
        let page = self.pages.advance();
        log::trace!("Starting page {}", page);
        area.add_margins(self.margins);
        Ok(area)
    }
}
