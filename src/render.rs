//! PDF layout and file output.
//!
//! Section blocks flow onto A4 pages through `genpdf`'s flow layout, which
//! inserts page breaks automatically once the fixed margin threshold is
//! reached.  Rendering produces an in-memory byte buffer; writing to disk is
//! a separate step so tests can inspect documents without touching the
//! filesystem.

use std::fs;
use std::path::Path;

use genpdf::elements::{Break, Image, Paragraph};
use genpdf::error::{Context as _, Error};
use genpdf::style::Style;
use genpdf::{Alignment, Element, PaperSize, Scale, SimplePageDecorator};
use image::GenericImageView;

use crate::fonts;
use crate::model::{Block, HorizontalAlignment, ImageBlock, Section, TextBlock};

/// Page margin applied on all four sides, in millimetres.
const PAGE_MARGIN_MM: i32 = 15;

/// Assumed resolution when estimating the natural print size of an image.
const DEFAULT_IMAGE_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;

fn map_alignment(alignment: HorizontalAlignment) -> Alignment {
    match alignment {
        HorizontalAlignment::Left => Alignment::Left,
        HorizontalAlignment::Center => Alignment::Center,
        HorizontalAlignment::Right => Alignment::Right,
    }
}

fn new_document() -> Result<genpdf::Document, Error> {
    let family = fonts::report_font_family()?;
    let mut document = genpdf::Document::new(family);
    document.set_title("Demo Report");
    document.set_paper_size(PaperSize::A4);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(PAGE_MARGIN_MM);
    document.set_page_decorator(decorator);
    Ok(document)
}

fn text_element(block: &TextBlock) -> Paragraph {
    let mut paragraph = Paragraph::new(block.text().to_owned());
    paragraph.set_alignment(map_alignment(block.alignment()));
    paragraph
}

fn text_style(block: &TextBlock) -> Style {
    let mut style = Style::new();
    if block.is_bold() {
        style.set_bold();
    }
    if let Some(font_size) = block.font_size() {
        style.set_font_size(font_size);
    }
    style
}

fn image_element(block: &ImageBlock) -> Result<Image, Error> {
    let dynamic = image::load_from_memory(block.png())
        .context("Failed to decode embedded image from PNG bytes")?;

    // Natural print width assuming the default DPI; the requested width is
    // applied as a uniform scale to preserve the aspect ratio.
    let (px_width, _) = dynamic.dimensions();
    let natural_width_mm = MM_PER_INCH * (px_width as f64) / DEFAULT_IMAGE_DPI;

    let mut image = Image::from_dynamic_image(dynamic)?;
    image.set_alignment(map_alignment(block.alignment()));
    if let Some(width_mm) = block.width_mm() {
        if natural_width_mm > f64::EPSILON {
            let scale = width_mm / natural_width_mm;
            image.set_scale(Scale::new(scale, scale));
        }
    }
    Ok(image)
}

fn push_section(document: &mut genpdf::Document, section: &Section) -> Result<(), Error> {
    if let Some(heading) = section.heading() {
        let heading_block = TextBlock::new(heading).bold();
        document.push(text_element(&heading_block).styled(text_style(&heading_block)));
    }

    for block in section.blocks() {
        match block {
            Block::Text(text) => {
                let style = text_style(text);
                document.push(text_element(text).styled(style));
            }
            Block::Image(image) => document.push(image_element(image)?),
            Block::Break(lines) => document.push(Break::new(*lines)),
        }
    }
    Ok(())
}

/// Renders the section list into PDF bytes.
pub fn render(sections: &[Section]) -> Result<Vec<u8>, Error> {
    let mut document = new_document()?;
    for section in sections {
        push_section(&mut document, section)?;
    }

    let mut bytes = Vec::new();
    document.render(&mut bytes)?;
    Ok(bytes)
}

/// Renders the section list and writes the document to `path`.
///
/// Parent directories are created if required.  On success one confirmation
/// line naming the produced file is printed.  There is no partial-write
/// recovery: any failure mid-render aborts the document.
pub fn write_report(sections: &[Section], path: &Path) -> Result<(), Error> {
    let bytes = render(sections)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }
    }

    fs::write(path, &bytes)
        .with_context(|| format!("Failed to write report file {}", path.display()))?;
    println!("Generated {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
