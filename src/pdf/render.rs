use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};

use crate::core::BillingError;
use crate::layout::metrics::PT_TO_MM;
use crate::layout::{
    Element, Font, Layout, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, Page, Rect, Rgb, Rule, Stroke, TextRun,
};

/// Resource names for the three base fonts.
const FONTS: [(Font, &str, &str); 3] = [
    (Font::Regular, "F1", "Helvetica"),
    (Font::Bold, "F2", "Helvetica-Bold"),
    (Font::Italic, "F3", "Helvetica-Oblique"),
];

/// Serialize a layout to PDF bytes.
///
/// Text uses the standard Helvetica faces with WinAnsi encoding, so no font
/// files are embedded. Characters outside Latin-1 are written as `?`.
pub fn render_pdf(layout: &Layout) -> Result<Vec<u8>, BillingError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut font_dict = Dictionary::new();
    for (_, resource, base_font) in FONTS {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base_font,
            "Encoding" => "WinAnsiEncoding",
        });
        font_dict.set(resource, Object::Reference(font_id));
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => Object::Dictionary(font_dict),
    });

    let mut kids: Vec<Object> = Vec::with_capacity(layout.pages.len());
    for page in &layout.pages {
        let page_id = add_page(&mut doc, pages_id, page)?;
        kids.push(Object::Reference(page_id));
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Count" => Object::Integer(kids.len() as i64),
        "Kids" => Object::Array(kids),
        "Resources" => Object::Reference(resources_id),
        "MediaBox" => Object::Array(vec![
            Object::Real(0.0),
            Object::Real(0.0),
            Object::Real(mm_to_pt(PAGE_WIDTH_MM)),
            Object::Real(mm_to_pt(PAGE_HEIGHT_MM)),
        ]),
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let info = &layout.info;
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(info.title.as_str()),
        "Subject" => Object::string_literal(info.subject.as_str()),
        "Author" => Object::string_literal(info.author.as_str()),
        "Keywords" => Object::string_literal(info.keywords.as_str()),
        "Creator" => Object::string_literal(info.creator.as_str()),
    });
    doc.trailer.set("Info", Object::Reference(info_id));

    doc.compress();

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| BillingError::Render(format!("failed to save PDF: {e}")))?;
    Ok(output)
}

fn add_page(doc: &mut Document, pages_id: ObjectId, page: &Page) -> Result<ObjectId, BillingError> {
    let mut operations = Vec::new();
    for element in &page.elements {
        match element {
            Element::Rect(rect) => push_rect(&mut operations, rect),
            Element::Rule(rule) => push_rule(&mut operations, rule),
            Element::Text(run) => push_text(&mut operations, run),
        }
    }

    let content = Content { operations }
        .encode()
        .map_err(|e| BillingError::Render(format!("failed to encode page content: {e}")))?;
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "Contents" => Object::Reference(content_id),
    }))
}

fn mm_to_pt(mm: f32) -> f32 {
    mm / PT_TO_MM
}

/// Layout y (top-down, millimetres) to PDF y (bottom-up, points).
fn flip_y(mm: f32) -> f32 {
    mm_to_pt(PAGE_HEIGHT_MM - mm)
}

fn color_operands(color: Rgb) -> Vec<Object> {
    [color.0, color.1, color.2]
        .into_iter()
        .map(|c| Object::Real(f32::from(c) / 255.0))
        .collect()
}

fn push_stroke(ops: &mut Vec<Operation>, stroke: Stroke) {
    ops.push(Operation::new("RG", color_operands(stroke.color)));
    ops.push(Operation::new("w", vec![Object::Real(mm_to_pt(stroke.width))]));
}

fn push_rect(ops: &mut Vec<Operation>, rect: &Rect) {
    if let Some(fill) = rect.fill {
        ops.push(Operation::new("rg", color_operands(fill)));
    }
    if let Some(stroke) = rect.stroke {
        push_stroke(ops, stroke);
    }
    let paint = match (rect.fill.is_some(), rect.stroke.is_some()) {
        (true, true) => "B",
        (true, false) => "f",
        (false, true) => "S",
        (false, false) => return,
    };
    ops.push(Operation::new(
        "re",
        vec![
            Object::Real(mm_to_pt(rect.x)),
            Object::Real(flip_y(rect.y + rect.height)),
            Object::Real(mm_to_pt(rect.width)),
            Object::Real(mm_to_pt(rect.height)),
        ],
    ));
    ops.push(Operation::new(paint, vec![]));
}

fn push_rule(ops: &mut Vec<Operation>, rule: &Rule) {
    push_stroke(ops, rule.stroke);
    ops.push(Operation::new(
        "m",
        vec![Object::Real(mm_to_pt(rule.x1)), Object::Real(flip_y(rule.y1))],
    ));
    ops.push(Operation::new(
        "l",
        vec![Object::Real(mm_to_pt(rule.x2)), Object::Real(flip_y(rule.y2))],
    ));
    ops.push(Operation::new("S", vec![]));
}

fn push_text(ops: &mut Vec<Operation>, run: &TextRun) {
    if run.text.is_empty() {
        return;
    }
    // Keep the left edge on the page even when a right-aligned run is too wide.
    let x = run.left().max(0.0);

    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![Object::Name(font_resource(run.font).as_bytes().to_vec()), Object::Real(run.size)],
    ));
    ops.push(Operation::new("rg", color_operands(run.color)));
    ops.push(Operation::new(
        "Td",
        vec![Object::Real(mm_to_pt(x)), Object::Real(flip_y(run.y))],
    ));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(win_ansi_bytes(&run.text), StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

fn font_resource(font: Font) -> &'static str {
    FONTS
        .iter()
        .find(|(f, _, _)| *f == font)
        .map(|(_, resource, _)| *resource)
        .unwrap_or("F1")
}

/// Latin-1 maps directly onto WinAnsi outside 0x80..=0x9F.
fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            _ => b'?',
        })
        .collect()
}
