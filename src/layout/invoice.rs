use tracing::debug;

use super::metrics::{PT_TO_MM, wrap_text};
use super::*;
use crate::core::{
    Bill, BillingConfig, Customer, InvoiceIdentity, InvoiceTotals, LineItem, Seller, TaxRate,
    amount_to_words, format_currency, format_issue_date, format_rate,
};

/// Everything printed on one invoice.
#[derive(Debug, Clone)]
pub struct InvoiceDocument<'a> {
    pub identity: &'a InvoiceIdentity,
    pub customer: &'a Customer,
    pub seller: &'a Seller,
    pub items: &'a [LineItem],
    pub totals: InvoiceTotals,
    /// Shown in the tax label of the summary.
    pub tax_rate: TaxRate,
}

impl<'a> InvoiceDocument<'a> {
    /// Snapshot a bill, with its current totals, and the configured seller.
    pub fn from_bill(bill: &'a Bill, config: &'a BillingConfig) -> Self {
        Self {
            identity: bill.identity(),
            customer: bill.customer(),
            seller: &config.seller,
            items: bill.items(),
            totals: bill.totals(),
            tax_rate: bill.tax_rate(),
        }
    }
}

// Page furniture
const MARGIN_X: f32 = 15.0;
const CONTENT_RIGHT: f32 = PAGE_WIDTH_MM - MARGIN_X;
const CENTER_X: f32 = PAGE_WIDTH_MM / 2.0;
const HEADER_BAND_HEIGHT: f32 = 40.0;
/// Nothing but the footer goes below this line.
const BOTTOM_LIMIT: f32 = 277.0;
const CONTINUATION_TOP: f32 = 20.0;

// Party blocks
const BLOCK_TOP: f32 = 50.0;
const ROW_STEP: f32 = 7.0;
const WRAP_STEP: f32 = 5.0;
const LABEL_X: f32 = 20.0;
const VALUE_X: f32 = 60.0;
const SELLER_X: f32 = 130.0;
const VALUE_WIDTH: f32 = SELLER_X - VALUE_X - 5.0;
const SELLER_WIDTH: f32 = CONTENT_RIGHT - SELLER_X;

// Items table
const COLUMN_WIDTHS: [f32; 7] = [15.0, 20.0, 50.0, 20.0, 15.0, 25.0, 30.0];
const COLUMN_ALIGN: [Align; 7] = [
    Align::Center,
    Align::Left,
    Align::Left,
    Align::Center,
    Align::Center,
    Align::Right,
    Align::Right,
];
const TABLE_FONT_SIZE: f32 = 9.0;
const LINE_HEIGHT_FACTOR: f32 = 1.15;
const BODY_PADDING: f32 = 3.0;
const HEAD_PADDING_X: f32 = 1.5;
const HEAD_PADDING_Y: f32 = 4.0;
const BASELINE_RATIO: f32 = 0.78;
const GRID_WIDTH: f32 = 0.1;

// Summary panel and the sections anchored to it
const SUMMARY_X: f32 = 130.0;
const SUMMARY_VALUE_X: f32 = SUMMARY_X + 55.0;
const SUMMARY_BOX_WIDTH: f32 = 70.0;
const SUMMARY_BOX_HEIGHT: f32 = 60.0;
const SUMMARY_GAP: f32 = 10.0;
const WORDS_OFFSET: f32 = 30.0;
const WORDS_WIDTH: f32 = SUMMARY_X - 5.0 - MARGIN_X - 5.0;
const TERMS_OFFSET: f32 = 55.0;
const TERMS_STEP: f32 = 7.0;
const TERMS_WRAP_STEP: f32 = 4.0;
const TERMS_FONT_SIZE: f32 = 8.0;
const TERMS_WIDTH: f32 = CONTENT_RIGHT - MARGIN_X;

// Footer
const FOOTER_RULE_Y: f32 = PAGE_HEIGHT_MM - 15.0;
const FOOTER_THANKS_Y: f32 = PAGE_HEIGHT_MM - 8.0;
const FOOTER_CONTACT_Y: f32 = PAGE_HEIGHT_MM - 3.0;

#[derive(Debug, Clone, Copy)]
struct TextStyle {
    font: Font,
    size: f32,
    color: Rgb,
    align: Align,
}

impl TextStyle {
    const fn new(font: Font, size: f32, color: Rgb) -> Self {
        Self {
            font,
            size,
            color,
            align: Align::Left,
        }
    }

    const fn aligned(self, align: Align) -> Self {
        Self { align, ..self }
    }
}

const LABEL: TextStyle = TextStyle::new(Font::Bold, 10.0, Rgb::INK);
const VALUE: TextStyle = TextStyle::new(Font::Regular, 10.0, Rgb::BODY);
const CELL: TextStyle = TextStyle::new(Font::Regular, TABLE_FONT_SIZE, Rgb::INK);
const HEAD_CELL: TextStyle = TextStyle::new(Font::Bold, TABLE_FONT_SIZE, Rgb::WHITE);

/// Accumulates elements page by page.
struct Canvas {
    done: Vec<Page>,
    current: Page,
}

impl Canvas {
    fn new() -> Self {
        Self {
            done: Vec::new(),
            current: Page::default(),
        }
    }

    fn new_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.done.push(page);
    }

    fn text(&mut self, x: f32, y: f32, text: impl Into<String>, style: TextStyle) {
        self.current.elements.push(Element::Text(TextRun {
            x,
            y,
            text: text.into(),
            font: style.font,
            size: style.size,
            color: style.color,
            align: style.align,
        }));
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Option<Rgb>, stroke: Option<Stroke>) {
        self.current.elements.push(Element::Rect(Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        }));
    }

    fn rule(&mut self, x1: f32, x2: f32, y: f32, color: Rgb, width: f32) {
        self.current.elements.push(Element::Rule(Rule {
            x1,
            y1: y,
            x2,
            y2: y,
            stroke: Stroke { color, width },
        }));
    }

    fn finish(mut self) -> Vec<Page> {
        self.new_page();
        self.done
    }
}

/// Lay out a complete invoice.
///
/// The generator performs no validation: callers check for a customer name
/// and at least one line item first (see [`Bill::checkout`]).
pub fn layout_invoice(doc: &InvoiceDocument<'_>, config: &BillingConfig) -> Layout {
    let mut canvas = Canvas::new();

    draw_header_band(&mut canvas, doc.seller, config);
    let left_end = draw_invoice_details(&mut canvas, doc);
    let right_end = draw_seller_block(&mut canvas, doc.seller, config);

    let optional_fields = [doc.customer.email_opt(), doc.customer.address_opt()]
        .iter()
        .filter(|f| f.is_some())
        .count() as f32;
    let table_top = (right_end + 13.0 + 5.0 * optional_fields).max(left_end + 20.0);

    let table_end = draw_items_table(&mut canvas, doc.items, table_top, config);

    let mut summary_y = table_end + SUMMARY_GAP;
    if summary_y + trailing_block_height(config) > BOTTOM_LIMIT {
        canvas.new_page();
        summary_y = CONTINUATION_TOP + 2.0;
    }
    draw_summary(&mut canvas, doc, summary_y, config);
    draw_amount_in_words(&mut canvas, doc, summary_y, config);
    draw_terms(&mut canvas, summary_y + TERMS_OFFSET, config);

    let mut pages = canvas.finish();
    for page in &mut pages {
        draw_footer(page, config);
    }

    debug!(
        number = %doc.identity.number,
        items = doc.items.len(),
        pages = pages.len(),
        "laid out invoice"
    );

    Layout {
        info: DocumentInfo {
            title: format!("Invoice {}", doc.identity.number),
            subject: "Invoice".into(),
            author: doc.seller.name.clone(),
            keywords: "invoice, billing".into(),
            creator: "billdesk".into(),
        },
        pages,
    }
}

fn draw_header_band(canvas: &mut Canvas, seller: &Seller, config: &BillingConfig) {
    canvas.rect(0.0, 0.0, PAGE_WIDTH_MM, HEADER_BAND_HEIGHT, Some(Rgb::INK), None);
    canvas.text(
        CENTER_X,
        20.0,
        seller.brand.as_str(),
        TextStyle::new(Font::Bold, 24.0, Rgb::WHITE).aligned(Align::Center),
    );
    canvas.text(
        CENTER_X,
        30.0,
        config.document_title.as_str(),
        TextStyle::new(Font::Regular, 12.0, Rgb::WHITE).aligned(Align::Center),
    );
}

/// Left column. Returns the baseline of the last line drawn.
fn draw_invoice_details(canvas: &mut Canvas, doc: &InvoiceDocument<'_>) -> f32 {
    let customer = doc.customer;
    let mut rows: Vec<(&str, String)> = vec![
        ("Invoice Number:", doc.identity.number.clone()),
        ("Invoice Date:", format_issue_date(doc.identity.issue_date)),
        ("Customer Name:", customer.name.clone()),
        ("Phone:", customer.phone_opt().unwrap_or("-").to_string()),
    ];
    if let Some(email) = customer.email_opt() {
        rows.push(("Email:", email.to_string()));
    }
    if let Some(address) = customer.address_opt() {
        rows.push(("Address:", address.to_string()));
    }

    let mut y = BLOCK_TOP;
    let mut last = y;
    for (label, value) in rows {
        canvas.text(LABEL_X, y, label, LABEL);
        for (i, line) in wrap_text(&value, VALUE.font, VALUE.size, VALUE_WIDTH)
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                y += WRAP_STEP;
            }
            canvas.text(VALUE_X, y, line, VALUE);
        }
        last = y;
        y += ROW_STEP;
    }
    last
}

/// Right column. Returns the baseline of the last line drawn.
fn draw_seller_block(canvas: &mut Canvas, seller: &Seller, config: &BillingConfig) -> f32 {
    canvas.text(SELLER_X, BLOCK_TOP, "From:", LABEL);

    let mut lines: Vec<String> = vec![seller.name.clone()];
    lines.extend(seller.address_lines.iter().cloned());
    if let Some(phone) = &seller.phone {
        lines.push(format!("Phone: {phone}"));
    }
    if let Some(email) = &seller.email {
        lines.push(format!("Email: {email}"));
    }
    if let Some(tax_id) = &seller.tax_id {
        lines.push(format!("{}: {tax_id}", config.tax_id_label));
    }

    let mut y = BLOCK_TOP;
    for line in lines {
        y += ROW_STEP;
        for (i, part) in wrap_text(&line, VALUE.font, VALUE.size, SELLER_WIDTH)
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                y += WRAP_STEP;
            }
            canvas.text(SELLER_X, y, part, VALUE);
        }
    }
    y
}

fn line_height() -> f32 {
    TABLE_FONT_SIZE * LINE_HEIGHT_FACTOR * PT_TO_MM
}

/// Cell contents wrapped to their columns.
fn wrap_row(cells: &[String; 7], style: TextStyle, pad_x: f32) -> Vec<Vec<String>> {
    cells
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(text, width)| wrap_text(text, style.font, style.size, width - 2.0 * pad_x))
        .collect()
}

fn row_height(wrapped: &[Vec<String>], pad_y: f32) -> f32 {
    let lines = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);
    lines as f32 * line_height() + 2.0 * pad_y
}

/// How one table row is painted.
#[derive(Debug, Clone, Copy)]
struct RowStyle {
    text: TextStyle,
    aligns: [Align; 7],
    fill: Option<Rgb>,
    pad_x: f32,
    pad_y: f32,
}

const HEAD_ROW: RowStyle = RowStyle {
    text: HEAD_CELL,
    aligns: [Align::Center; 7],
    fill: Some(Rgb::INK),
    pad_x: HEAD_PADDING_X,
    pad_y: HEAD_PADDING_Y,
};

const BODY_ROW: RowStyle = RowStyle {
    text: CELL,
    aligns: COLUMN_ALIGN,
    fill: None,
    pad_x: BODY_PADDING,
    pad_y: BODY_PADDING,
};

/// Wrap `cells`, draw them as one grid row at `top`, and return the row height.
fn draw_row(canvas: &mut Canvas, top: f32, cells: &[String; 7], row: RowStyle) -> f32 {
    let wrapped = wrap_row(cells, row.text, row.pad_x);
    let height = row_height(&wrapped, row.pad_y);
    paint_row(canvas, top, &wrapped, height, row);
    height
}

fn paint_row(canvas: &mut Canvas, top: f32, wrapped: &[Vec<String>], height: f32, row: RowStyle) {
    let grid = Stroke {
        color: Rgb::GRID,
        width: GRID_WIDTH,
    };
    let mut x = MARGIN_X;
    for ((lines, width), align) in wrapped.iter().zip(COLUMN_WIDTHS).zip(row.aligns) {
        canvas.rect(x, top, width, height, row.fill, Some(grid));
        let anchor = match align {
            Align::Left => x + row.pad_x,
            Align::Center => x + width / 2.0,
            Align::Right => x + width - row.pad_x,
        };
        let mut baseline = top + row.pad_y + line_height() * BASELINE_RATIO;
        for line in lines {
            canvas.text(anchor, baseline, line.as_str(), row.text.aligned(align));
            baseline += line_height();
        }
        x += width;
    }
}

fn head_cells(config: &BillingConfig) -> [String; 7] {
    let symbol = &config.currency_symbol;
    [
        "Sr. No.".into(),
        "Code".into(),
        "Item Name".into(),
        "HSN/SAC".into(),
        "Qty".into(),
        format!("Rate ({symbol})"),
        format!("Amount ({symbol})"),
    ]
}

fn body_cells(index: usize, item: &LineItem, config: &BillingConfig) -> [String; 7] {
    let money = |v| format_currency(&config.currency_symbol, v, 0, config.digit_grouping);
    [
        (index + 1).to_string(),
        item.code.clone(),
        item.name.clone(),
        item.tax_code_or(&config.default_tax_code).to_string(),
        item.quantity.to_string(),
        money(item.unit_price),
        money(item.amount()),
    ]
}

fn draw_table_head(canvas: &mut Canvas, top: f32, config: &BillingConfig) -> f32 {
    top + draw_row(canvas, top, &head_cells(config), HEAD_ROW)
}

/// Draw the items table from `top`, continuing onto new pages with the
/// header repeated. Returns the bottom edge of the last row.
fn draw_items_table(canvas: &mut Canvas, items: &[LineItem], top: f32, config: &BillingConfig) -> f32 {
    let mut y = draw_table_head(canvas, top, config);

    for (index, item) in items.iter().enumerate() {
        let cells = body_cells(index, item, config);
        let height = row_height(&wrap_row(&cells, CELL, BODY_PADDING), BODY_PADDING);
        if y + height > BOTTOM_LIMIT {
            canvas.new_page();
            y = draw_table_head(canvas, CONTINUATION_TOP, config);
        }
        y += draw_row(canvas, y, &cells, BODY_ROW);
    }
    y
}

/// Numbered clauses, each wrapped to the content width.
fn wrapped_terms(config: &BillingConfig) -> Vec<Vec<String>> {
    config
        .terms
        .iter()
        .enumerate()
        .map(|(i, term)| {
            wrap_text(
                &format!("{}. {term}", i + 1),
                Font::Regular,
                TERMS_FONT_SIZE,
                TERMS_WIDTH,
            )
        })
        .collect()
}

/// Space from the summary anchor to the last terms line.
fn trailing_block_height(config: &BillingConfig) -> f32 {
    let clauses = wrapped_terms(config);
    if clauses.is_empty() {
        return TERMS_OFFSET.max(SUMMARY_BOX_HEIGHT);
    }
    let continuation_lines: usize = clauses.iter().map(|c| c.len().saturating_sub(1)).sum();
    let height = TERMS_OFFSET
        + TERMS_STEP * (clauses.len() + 1) as f32
        + TERMS_WRAP_STEP * continuation_lines as f32;
    height.max(SUMMARY_BOX_HEIGHT)
}

fn draw_summary(canvas: &mut Canvas, doc: &InvoiceDocument<'_>, y: f32, config: &BillingConfig) {
    let money = |v| format_currency(&config.currency_symbol, v, 2, config.digit_grouping);
    let totals = doc.totals.rounded();

    canvas.rect(
        SUMMARY_X - 5.0,
        y - 2.0,
        SUMMARY_BOX_WIDTH,
        SUMMARY_BOX_HEIGHT,
        Some(Rgb::PANEL),
        Some(Stroke {
            color: Rgb::INK,
            width: 0.2,
        }),
    );
    canvas.text(
        SUMMARY_X + 25.0,
        y + 5.0,
        "Summary",
        TextStyle::new(Font::Bold, 12.0, Rgb::INK),
    );

    let label = TextStyle::new(Font::Regular, 10.0, Rgb::BODY);
    let value = TextStyle::new(Font::Bold, 10.0, Rgb::INK).aligned(Align::Right);
    let rows = [
        ("Subtotal:".to_string(), totals.subtotal),
        ("Discount:".to_string(), totals.discount_amount),
        ("Taxable Value:".to_string(), totals.taxable_value),
        (
            format!("{} ({}%):", config.tax_label, format_rate(doc.tax_rate.percent())),
            totals.tax_amount,
        ),
    ];
    for (i, (text, amount)) in rows.into_iter().enumerate() {
        let row_y = y + 12.0 + 8.0 * i as f32;
        canvas.text(SUMMARY_X, row_y, text, label);
        canvas.text(SUMMARY_VALUE_X, row_y, money(amount), value);
    }

    canvas.rule(SUMMARY_X, SUMMARY_X + 60.0, y + 42.0, Rgb::INK, 0.2);

    canvas.text(
        SUMMARY_X,
        y + 50.0,
        "Total:",
        TextStyle::new(Font::Bold, 11.0, Rgb::INK),
    );
    canvas.text(
        SUMMARY_VALUE_X,
        y + 50.0,
        money(totals.grand_total),
        TextStyle::new(Font::Bold, 12.0, Rgb::ACCENT).aligned(Align::Right),
    );
}

fn draw_amount_in_words(
    canvas: &mut Canvas,
    doc: &InvoiceDocument<'_>,
    summary_y: f32,
    config: &BillingConfig,
) {
    let style = TextStyle::new(Font::Italic, 9.0, Rgb::BODY);
    let words = amount_to_words(doc.totals.grand_total, &config.scale, &config.currency);
    let text = format!("Amount in words: {words}");

    let mut y = summary_y + WORDS_OFFSET;
    for line in wrap_text(&text, style.font, style.size, WORDS_WIDTH) {
        canvas.text(MARGIN_X, y, line, style);
        y += style.size * LINE_HEIGHT_FACTOR * PT_TO_MM;
    }
}

fn draw_terms(canvas: &mut Canvas, y: f32, config: &BillingConfig) {
    canvas.rule(MARGIN_X, CONTENT_RIGHT, y, Rgb::GRID, 0.2);
    if config.terms.is_empty() {
        return;
    }

    canvas.text(
        MARGIN_X,
        y + TERMS_STEP,
        "Terms & Conditions:",
        TextStyle::new(Font::Bold, TERMS_FONT_SIZE, Rgb::INK),
    );
    let style = TextStyle::new(Font::Regular, TERMS_FONT_SIZE, Rgb::MUTED);
    let mut line_y = y + TERMS_STEP;
    for clause in wrapped_terms(config) {
        line_y += TERMS_STEP;
        for (i, line) in clause.into_iter().enumerate() {
            if i > 0 {
                line_y += TERMS_WRAP_STEP;
            }
            canvas.text(MARGIN_X, line_y, line, style);
        }
    }
}

fn draw_footer(page: &mut Page, config: &BillingConfig) {
    let style = TextStyle::new(Font::Regular, 8.0, Rgb::FAINT).aligned(Align::Center);
    page.elements.push(Element::Rule(Rule {
        x1: MARGIN_X,
        y1: FOOTER_RULE_Y,
        x2: CONTENT_RIGHT,
        y2: FOOTER_RULE_Y,
        stroke: Stroke {
            color: Rgb::INK,
            width: 0.5,
        },
    }));
    for (y, text) in [
        (FOOTER_THANKS_Y, &config.footer.thank_you),
        (FOOTER_CONTACT_Y, &config.footer.contact),
    ] {
        page.elements.push(Element::Text(TextRun {
            x: CENTER_X,
            y,
            text: text.clone(),
            font: style.font,
            size: style.size,
            color: style.color,
            align: style.align,
        }));
    }
}
