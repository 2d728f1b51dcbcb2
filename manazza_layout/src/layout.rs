use minijinja::Value;
use serde::Serialize;

use super::analytics::Analytics;
use super::fonts::{FontConfig, FontLinks, SYNE};
use super::head::render_metadata_block;
use super::metadata::{PageMetadata, SITE_METADATA};
use super::structured_data::{PersonSchema, SITE_PERSON};
use super::templates::{render_template, safe_markup, TemplateError};

pub const DOCUMENT_LANGUAGE: &str = "es";
pub const GOOGLE_SITE_VERIFICATION_TOKEN: &str = "Tviee0mVRz9tlPLOv5_waP-rNS3m0y4K2mbqDHSqPJE";
pub const GLOBAL_STYLESHEET_PATH: &str = "/static/globals.css";

const BODY_CLASSES: &str = "scroll-smooth scrollbar-thin scrollbar-track-[#0E1016] scrollbar-thumb-[#212531]";

#[derive(Serialize)]
struct DocumentShell<'a> {
    lang: &'static str,
    metadata_block: Value,
    stylesheets: &'a [&'static str],
    font: FontLinks,
    font_css: Value,
    structured_data: Value,
    verification_token: &'static str,
    body_class: String,
    children: Value,
    analytics: Option<&'a Analytics>,
}

/// Outermost wrapper applied to every page of the site
#[derive(Clone, Debug)]
pub struct RootLayout {
    metadata: PageMetadata,
    person: PersonSchema,
    font: FontConfig,
    stylesheets: Vec<&'static str>,
    analytics: Option<Analytics>,
}

impl RootLayout {
    pub fn new(
        metadata: PageMetadata,
        person: PersonSchema,
        font: FontConfig,
        analytics: Option<Analytics>,
    ) -> Self {
        Self {
            metadata,
            person,
            font,
            stylesheets: vec![GLOBAL_STYLESHEET_PATH],
            analytics,
        }
    }

    /// Layout of tomasmanazza.com
    pub fn site(analytics: Option<Analytics>) -> Self {
        Self::new(SITE_METADATA, SITE_PERSON, SYNE, analytics)
    }

    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    pub fn person(&self) -> &PersonSchema {
        &self.person
    }

    pub fn analytics(&self) -> Option<&Analytics> {
        self.analytics.as_ref()
    }

    /// Wraps page content into document shell.
    /// Children are inserted as is, without escaping.
    pub fn render(&self, children: &str) -> Result<String, TemplateError> {
        let metadata_block = render_metadata_block(&self.metadata)?;
        let structured_data = self.person.to_json_ld()
            .map_err(|_| TemplateError)?;
        let context = DocumentShell {
            lang: DOCUMENT_LANGUAGE,
            metadata_block: safe_markup(metadata_block),
            stylesheets: &self.stylesheets,
            font: FontLinks::from(&self.font),
            font_css: safe_markup(self.font.css_rule()),
            structured_data: safe_markup(structured_data),
            verification_token: GOOGLE_SITE_VERIFICATION_TOKEN,
            body_class: format!("{} {}", self.font.class_name, BODY_CLASSES),
            children: safe_markup(children),
            analytics: self.analytics.as_ref(),
        };
        render_template(
            include_str!("templates/root_layout.html"),
            context,
        )
    }
}
