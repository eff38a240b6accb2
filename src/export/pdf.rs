use crate::export::log_sheet::{Align, LogSheetFrame, Rgb, Shape};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Average Helvetica glyph width as a share of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    /// Height of the page being drawn, for flipping y
    page_h: f32,

    next_id: i32,
    font_id: Ref,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,
            page_h: 0.0,
            next_id,
            font_id,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Generate a fresh unique Ref
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Start a page of the given size and return its content stream
    fn new_page(&mut self, width: f32, height: f32) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, width, height))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);
        self.page_h = height;

        Content::new()
    }

    /// Write the stream of the current page
    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    /// Frames use a top-left origin; PDF uses bottom-left.
    fn flip(&self, y: f32) -> f32 {
        self.page_h - y
    }

    fn draw_text(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        color: Rgb,
        text: &str,
    ) {
        let bytes = pdf_text(text);
        content.begin_text();
        content.set_fill_rgb(color.0, color.1, color.2);
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, self.flip(y)]);
        content.show(Str(&bytes));
        content.end_text();
    }

    /// Text rotated 90° clockwise so it reads downwards.
    fn draw_vertical_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let bytes = pdf_text(text);
        content.begin_text();
        content.set_fill_rgb(0.22, 0.25, 0.32);
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([0.0, -1.0, 1.0, 0.0, x, self.flip(y)]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_shape(&self, content: &mut Content, shape: &Shape) {
        match shape {
            Shape::Text {
                x,
                y,
                size,
                align,
                color,
                text,
            } => {
                let width = text.chars().count() as f32 * size * AVG_GLYPH_WIDTH;
                let x = match align {
                    Align::Left => *x,
                    Align::Center => x - width / 2.0,
                    Align::Right => x - width,
                };
                self.draw_text(content, x, *y, *size, *color, text);
            }
            Shape::VerticalText { x, y, size, text } => {
                self.draw_vertical_text(content, *x, *y, *size, text);
            }
            Shape::Line {
                from,
                to,
                width,
                color,
            } => {
                content.save_state();
                content.set_stroke_rgb(color.0, color.1, color.2);
                content.set_line_width(*width);
                content.move_to(from.0, self.flip(from.1));
                content.line_to(to.0, self.flip(to.1));
                content.stroke();
                content.restore_state();
            }
            Shape::Path {
                points,
                width,
                color,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    return;
                };
                content.save_state();
                content.set_stroke_rgb(color.0, color.1, color.2);
                content.set_line_width(*width);
                content.move_to(first.0, self.flip(first.1));
                for p in rest {
                    content.line_to(p.0, self.flip(p.1));
                }
                content.stroke();
                content.restore_state();
            }
            Shape::Triangle { points, color } => {
                content.save_state();
                content.set_fill_rgb(color.0, color.1, color.2);
                content.move_to(points[0].0, self.flip(points[0].1));
                content.line_to(points[1].0, self.flip(points[1].1));
                content.line_to(points[2].0, self.flip(points[2].1));
                content.close_path();
                content.fill_nonzero();
                content.restore_state();
            }
        }
    }

    /// One page per frame
    pub fn draw_frame(&mut self, frame: &LogSheetFrame) {
        let mut content = self.new_page(frame.width, frame.height);

        for shape in &frame.shapes {
            self.draw_shape(&mut content, shape);
        }

        self.finalize_page(content);
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Helvetica without an explicit encoding only covers ASCII reliably.
fn pdf_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
        .collect()
}
