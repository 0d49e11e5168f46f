//! Resume → PDF.
//!
//! Section order is fixed: header, PROFESSIONAL SUMMARY, EDUCATION,
//! PROFESSIONAL EXPERIENCE, TECHNICAL SKILLS. Text is wrapped with the
//! Helvetica metric tables and flows onto new pages when the bottom margin is
//! reached, so over-long content grows the document instead of being clipped.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Rgb,
};

use crate::layout::font_metrics::{get_metrics, PT_TO_MM};
use crate::layout::sanitize::prepare_field;
use crate::layout::{wrap_text, FontFace, PageConfig};
use crate::models::resume::ResumeRecord;
use crate::render::RenderError;

const TITLE_PT: f32 = 24.0;
const HEADING_PT: f32 = 14.0;
const BODY_PT: f32 = 10.0;
/// Baseline-to-baseline distance as a multiple of the font size.
const LEADING: f32 = 1.2;
const BULLET_INDENT_MM: f32 = 4.0;

const SECTION_GAP_MM: f32 = 4.0;
const HEADING_GAP_BEFORE_MM: f32 = 3.0;
const HEADING_GAP_AFTER_MM: f32 = 1.5;
const ENTRY_GAP_MM: f32 = 2.5;

const DARK_BLUE: (f32, f32, f32) = (0.0, 0.0, 0.545);
const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);

/// Output of a successful render.
#[derive(Debug)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Renders one record to PDF bytes.
pub fn render_resume(record: &ResumeRecord, page: &PageConfig) -> Result<Vec<u8>, RenderError> {
    render_document(record, page).map(|rendered| rendered.bytes)
}

/// Renders one record and reports how many pages it took.
pub fn render_document(
    record: &ResumeRecord,
    page: &PageConfig,
) -> Result<RenderedPdf, RenderError> {
    validate(record)?;

    let name = prepare_field(&record.personal.name);
    let (doc, page1, layer1) = PdfDocument::new(
        format!("Resume - {name}"),
        Mm(page.page_width_mm),
        Mm(page.page_height_mm),
        "Page 1",
    );
    let layer = doc.get_page(page1).get_layer(layer1);
    let fonts = Fonts::load(&doc)?;

    let page_count = {
        let mut writer = PageWriter {
            doc: &doc,
            layer,
            fonts,
            page,
            y: page.top_mm(),
            page_count: 1,
        };

        write_header(&mut writer, record, &name);
        write_summary(&mut writer, record);
        write_education(&mut writer, record);
        write_experience(&mut writer, record);
        write_skills(&mut writer, record);
        writer.page_count
    };

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    Ok(RenderedPdf { bytes, page_count })
}

/// Rejects records with an empty mandatory field.
pub fn validate(record: &ResumeRecord) -> Result<(), RenderError> {
    let required = [
        ("name", record.personal.name.as_str()),
        ("email", record.personal.email.as_str()),
        ("phone", record.personal.phone.as_str()),
        ("address", record.personal.address.as_str()),
        ("summary", record.summary.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(RenderError::MissingField(field));
        }
    }
    if record.education.is_empty() {
        return Err(RenderError::MissingField("education"));
    }
    for edu in &record.education {
        let fields = [
            ("education.degree", edu.degree.as_str()),
            ("education.major", edu.major.as_str()),
            ("education.institution", edu.institution.as_str()),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(RenderError::MissingField(field));
            }
        }
    }
    if record.experience.is_empty() {
        return Err(RenderError::MissingField("experience"));
    }
    for job in &record.experience {
        if job.title.trim().is_empty() {
            return Err(RenderError::MissingField("experience.title"));
        }
        if job.company.trim().is_empty() {
            return Err(RenderError::MissingField("experience.company"));
        }
        if job.bullets.iter().all(|b| b.trim().is_empty()) {
            return Err(RenderError::MissingField("experience.bullets"));
        }
    }
    if record.skills.iter().all(|s| s.trim().is_empty()) {
        return Err(RenderError::MissingField("skills"));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn write_header(w: &mut PageWriter<'_>, record: &ResumeRecord, name: &str) {
    w.centered(name, FontFace::HelveticaBold, TITLE_PT, DARK_BLUE);
    w.gap(SECTION_GAP_MM);

    let contact = format!(
        "Email: {} | Phone: {}",
        record.personal.email, record.personal.phone
    );
    w.paragraph(&prepare_field(&contact), FontFace::Helvetica, BODY_PT, 0.0);
    w.paragraph(
        &prepare_field(&record.personal.address),
        FontFace::Helvetica,
        BODY_PT,
        0.0,
    );
    w.gap(SECTION_GAP_MM);
}

fn write_summary(w: &mut PageWriter<'_>, record: &ResumeRecord) {
    w.heading("PROFESSIONAL SUMMARY");
    w.paragraph(&prepare_field(&record.summary), FontFace::Helvetica, BODY_PT, 0.0);
    w.gap(SECTION_GAP_MM);
}

fn write_education(w: &mut PageWriter<'_>, record: &ResumeRecord) {
    w.heading("EDUCATION");
    for edu in &record.education {
        let degree = format!("{} in {}", edu.degree, edu.major);
        let details = format!("GPA: {:.2} | Graduated: {}", edu.gpa, edu.graduation_year);
        w.paragraph(&prepare_field(&degree), FontFace::Helvetica, BODY_PT, 0.0);
        w.paragraph(&prepare_field(&edu.institution), FontFace::Helvetica, BODY_PT, 0.0);
        w.paragraph(&details, FontFace::Helvetica, BODY_PT, 0.0);
        w.gap(ENTRY_GAP_MM);
    }
    w.gap(SECTION_GAP_MM - ENTRY_GAP_MM);
}

fn write_experience(w: &mut PageWriter<'_>, record: &ResumeRecord) {
    w.heading("PROFESSIONAL EXPERIENCE");
    for job in &record.experience {
        let title = format!("{} at {}", job.title, job.company);
        w.paragraph(&prepare_field(&title), FontFace::HelveticaBold, BODY_PT, 0.0);
        w.paragraph(&job.date_range(), FontFace::HelveticaOblique, BODY_PT, 0.0);
        for bullet in &job.bullets {
            let text = prepare_field(bullet);
            if !text.is_empty() {
                w.bullet(&text);
            }
        }
        w.gap(ENTRY_GAP_MM);
    }
    w.gap(SECTION_GAP_MM - ENTRY_GAP_MM);
}

fn write_skills(w: &mut PageWriter<'_>, record: &ResumeRecord) {
    w.heading("TECHNICAL SKILLS");
    let skills = record
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");
    w.paragraph(&prepare_field(&skills), FontFace::Helvetica, BODY_PT, 0.0);
}

// ────────────────────────────────────────────────────────────────────────────
// Page writer
// ────────────────────────────────────────────────────────────────────────────

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self, RenderError> {
        let load = |font: BuiltinFont| {
            doc.add_builtin_font(font)
                .map_err(|e| RenderError::Pdf(e.to_string()))
        };
        Ok(Self {
            regular: load(BuiltinFont::Helvetica)?,
            bold: load(BuiltinFont::HelveticaBold)?,
            oblique: load(BuiltinFont::HelveticaOblique)?,
        })
    }

    fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Helvetica => &self.regular,
            FontFace::HelveticaBold => &self.bold,
            FontFace::HelveticaOblique => &self.oblique,
        }
    }
}

/// Top-down text cursor. `y` is the baseline of the last drawn line, in mm
/// from the bottom edge.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: Fonts,
    page: &'a PageConfig,
    y: f32,
    page_count: usize,
}

impl PageWriter<'_> {
    fn line_height_mm(size_pt: f32) -> f32 {
        size_pt * LEADING * PT_TO_MM
    }

    fn new_page(&mut self) {
        self.page_count += 1;
        let (page, layer) = self.doc.add_page(
            Mm(self.page.page_width_mm),
            Mm(self.page.page_height_mm),
            format!("Page {}", self.page_count),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = self.page.top_mm();
    }

    /// Moves the cursor down one line, breaking the page first if needed.
    fn advance(&mut self, height_mm: f32) {
        if self.y - height_mm < self.page.bottom_mm() {
            self.new_page();
        }
        self.y -= height_mm;
    }

    fn gap(&mut self, mm: f32) {
        // Gaps never start a page; a following line will.
        self.y = (self.y - mm).max(self.page.bottom_mm());
    }

    fn draw(&self, text: &str, face: FontFace, size_pt: f32, x_mm: f32, color: (f32, f32, f32)) {
        let (r, g, b) = color;
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
        self.layer
            .use_text(text, size_pt, Mm(x_mm), Mm(self.y), self.fonts.get(face));
    }

    fn paragraph(&mut self, text: &str, face: FontFace, size_pt: f32, indent_mm: f32) {
        let x = self.page.margin_mm + indent_mm;
        let width = self.page.text_width_mm() - indent_mm;
        for line in wrap_text(text, face, size_pt, width) {
            self.advance(Self::line_height_mm(size_pt));
            self.draw(&line, face, size_pt, x, BLACK);
        }
    }

    /// Hanging-indent bullet: marker at the margin, text indented.
    fn bullet(&mut self, text: &str) {
        let x = self.page.margin_mm + BULLET_INDENT_MM;
        let width = self.page.text_width_mm() - BULLET_INDENT_MM;
        for (i, line) in wrap_text(text, FontFace::Helvetica, BODY_PT, width)
            .iter()
            .enumerate()
        {
            self.advance(Self::line_height_mm(BODY_PT));
            if i == 0 {
                self.draw("-", FontFace::Helvetica, BODY_PT, self.page.margin_mm + 1.0, BLACK);
            }
            self.draw(line, FontFace::Helvetica, BODY_PT, x, BLACK);
        }
    }

    fn heading(&mut self, text: &str) {
        self.gap(HEADING_GAP_BEFORE_MM);
        self.advance(Self::line_height_mm(HEADING_PT));
        self.draw(text, FontFace::HelveticaBold, HEADING_PT, self.page.margin_mm, DARK_BLUE);
        self.gap(HEADING_GAP_AFTER_MM);
    }

    fn centered(&mut self, text: &str, face: FontFace, size_pt: f32, color: (f32, f32, f32)) {
        let metrics = get_metrics(face);
        for line in wrap_text(text, face, size_pt, self.page.text_width_mm()) {
            self.advance(Self::line_height_mm(size_pt));
            let width = metrics.width_mm(&line, size_pt);
            let x = self.page.margin_mm + ((self.page.text_width_mm() - width) / 2.0).max(0.0);
            self.draw(&line, face, size_pt, x, color);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_page_config, PaperSize};
    use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo};

    fn sample_record() -> ResumeRecord {
        ResumeRecord {
            personal: PersonalInfo {
                name: "Jordan Smith".to_string(),
                email: "jordan.smith@gmail.com".to_string(),
                phone: "(555) 123-4567".to_string(),
                address: "123 Main St, Chicago, IL 60601".to_string(),
            },
            summary: "Results-driven developer with expertise in full-stack development."
                .to_string(),
            education: vec![EducationEntry {
                degree: "Bachelor's".to_string(),
                major: "Computer Science".to_string(),
                institution: "Georgia Tech".to_string(),
                gpa: 3.75,
                graduation_year: 2019,
            }],
            experience: vec![ExperienceEntry {
                title: "Software Engineer".to_string(),
                company: "TechCorp".to_string(),
                start_year: 2021,
                end_year: 2026,
                bullets: vec![
                    "Implemented automated testing and CI/CD pipelines, reducing deployment time by 50%."
                        .to_string(),
                    "Mentored junior developers and conducted code reviews.".to_string(),
                ],
            }],
            skills: vec!["Rust".to_string(), "Docker".to_string(), "PostgreSQL".to_string()],
        }
    }

    fn letter() -> PageConfig {
        default_page_config(PaperSize::Letter)
    }

    #[test]
    fn test_render_produces_pdf_signature() {
        let bytes = render_resume(&sample_record(), &letter()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_rendered_pdf_is_parseable_and_has_sections() {
        let bytes = render_resume(&sample_record(), &letter()).unwrap();
        let text = pdf_extract::extract_text_from_mem(&bytes).expect("PDF should parse");
        assert!(text.contains("EDUCATION"), "extracted text: {text}");
    }

    #[test]
    fn test_short_record_fits_one_page() {
        let rendered = render_document(&sample_record(), &letter()).unwrap();
        assert_eq!(rendered.page_count, 1);
    }

    #[test]
    fn test_long_content_flows_onto_more_pages() {
        let mut record = sample_record();
        let bullet = "Troubleshot and resolved complex technical issues, improving system \
                      reliability and user experience across every customer-facing service. "
            .repeat(3);
        record.experience = (0..4)
            .map(|i| ExperienceEntry {
                title: "Cloud Architect".to_string(),
                company: format!("Company {i}"),
                start_year: 2010 + i,
                end_year: 2011 + i,
                bullets: vec![bullet.clone(); 6],
            })
            .collect();

        let rendered = render_document(&record, &letter()).unwrap();
        assert!(rendered.page_count > 1);
        assert!(rendered.bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_non_ascii_and_oversized_text_still_renders() {
        let mut record = sample_record();
        record.summary = format!("\u{2022} Fluent in caf\u{00E9} culture \u{1F680} {}", "z".repeat(5000));
        record.experience[0].bullets = vec!["\u{201C}Quoted\u{201D} \u{2014} bullet".to_string()];
        let bytes = render_resume(&record, &default_page_config(PaperSize::A4)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_missing_name_is_render_error() {
        let mut record = sample_record();
        record.personal.name = "   ".to_string();
        let err = render_resume(&record, &letter()).unwrap_err();
        assert!(matches!(err, RenderError::MissingField("name")));
    }

    #[test]
    fn test_missing_experience_is_render_error() {
        let mut record = sample_record();
        record.experience.clear();
        assert!(matches!(
            validate(&record),
            Err(RenderError::MissingField("experience"))
        ));
    }

    #[test]
    fn test_blank_education_fields_are_render_errors() {
        let mut record = sample_record();
        record.education[0].institution = " ".to_string();
        assert!(matches!(
            validate(&record),
            Err(RenderError::MissingField("education.institution"))
        ));

        let mut record = sample_record();
        record.education[0].degree.clear();
        assert!(matches!(
            validate(&record),
            Err(RenderError::MissingField("education.degree"))
        ));

        let mut record = sample_record();
        record.education[0].major.clear();
        assert!(matches!(
            render_resume(&record, &letter()),
            Err(RenderError::MissingField("education.major"))
        ));
    }

    #[test]
    fn test_position_without_bullets_is_render_error() {
        let mut record = sample_record();
        record.experience[0].bullets.clear();
        assert!(matches!(
            validate(&record),
            Err(RenderError::MissingField("experience.bullets"))
        ));

        record.experience[0].bullets = vec!["  ".to_string()];
        assert!(matches!(
            validate(&record),
            Err(RenderError::MissingField("experience.bullets"))
        ));
    }

    #[test]
    fn test_missing_skills_is_render_error() {
        let mut record = sample_record();
        record.skills = vec![" ".to_string()];
        assert!(matches!(
            validate(&record),
            Err(RenderError::MissingField("skills"))
        ));
    }
}
