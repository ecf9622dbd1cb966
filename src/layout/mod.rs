//! Backend-independent printable layout.
//!
//! A [`Layout`] is a list of A4 pages, each holding positioned text runs,
//! rules and rectangles. Coordinates are millimetres from the top-left corner
//! of the page; text `y` is the baseline. The `pdf` module turns a layout
//! into PDF bytes, but the layout itself can be inspected or rendered by any
//! other backend.

mod invoice;
pub mod metrics;

pub use invoice::{InvoiceDocument, layout_invoice};

/// A4 portrait width in millimetres.
pub const PAGE_WIDTH_MM: f32 = 210.0;
/// A4 portrait height in millimetres.
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// The three Helvetica faces the layout uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Regular,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Self = Self(255, 255, 255);
    /// Dark slate used for the header band and headings.
    pub const INK: Self = Self(44, 62, 80);
    /// Body text grey.
    pub const BODY: Self = Self(80, 80, 80);
    pub const MUTED: Self = Self(100, 100, 100);
    pub const FAINT: Self = Self(120, 120, 120);
    pub const GRID: Self = Self(200, 200, 200);
    pub const PANEL: Self = Self(249, 250, 251);
    /// Emphasis colour for the grand total.
    pub const ACCENT: Self = Self(52, 152, 219);
}

/// Horizontal anchor of a text run relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font: Font,
    /// Size in points.
    pub size: f32,
    pub color: Rgb,
    pub align: Align,
}

impl TextRun {
    /// Left edge after alignment.
    pub fn left(&self) -> f32 {
        let width = metrics::text_width_mm(&self.text, self.font, self.size);
        match self.align {
            Align::Left => self.x,
            Align::Center => self.x - width / 2.0,
            Align::Right => self.x - width,
        }
    }

    /// Right edge after alignment.
    pub fn right(&self) -> f32 {
        self.left() + metrics::text_width_mm(&self.text, self.font, self.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    /// Line width in millimetres.
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Option<Rgb>,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub stroke: Stroke,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextRun),
    Rect(Rect),
    Rule(Rule),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<Element>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(t) => Some(t),
            _ => None,
        })
    }

    /// First text run whose content equals `text`.
    pub fn find_text(&self, text: &str) -> Option<&TextRun> {
        self.texts().find(|t| t.text == text)
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.elements.iter().filter_map(|e| match e {
            Element::Rect(r) => Some(r),
            _ => None,
        })
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.elements.iter().filter_map(|e| match e {
            Element::Rule(r) => Some(r),
            _ => None,
        })
    }
}

/// Document-level properties written into the output's metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub subject: String,
    pub author: String,
    pub keywords: String,
    pub creator: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub info: DocumentInfo,
    pub pages: Vec<Page>,
}

impl Layout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text runs across pages, with their zero-based page index.
    pub fn texts(&self) -> impl Iterator<Item = (usize, &TextRun)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(i, page)| page.texts().map(move |t| (i, t)))
    }

    /// First text run on any page whose content equals `text`.
    pub fn find_text(&self, text: &str) -> Option<(usize, &TextRun)> {
        self.texts().find(|(_, t)| t.text == text)
    }
}
