use serde::Serialize;

const GOOGLE_FONTS_CSS_URL: &str = "https://fonts.googleapis.com/css2";
pub const GOOGLE_FONTS_ORIGIN: &str = "https://fonts.googleapis.com";
pub const GOOGLE_FONTS_STATIC_ORIGIN: &str = "https://fonts.gstatic.com";

#[derive(Clone, Copy, Debug)]
pub struct FontConfig {
    pub family: &'static str,
    pub subsets: &'static [&'static str],
    /// CSS font-display value
    pub display: &'static str,
    pub weights: &'static [u16],
    pub fallback: &'static str,
    pub class_name: &'static str,
}

impl FontConfig {
    pub fn stylesheet_url(&self) -> String {
        let weights = self.weights.iter()
            .map(|weight| weight.to_string())
            .collect::<Vec<_>>()
            .join(";");
        let mut url = format!(
            "{}?family={}:wght@{}&display={}",
            GOOGLE_FONTS_CSS_URL,
            self.family.replace(' ', "+"),
            weights,
            self.display,
        );
        if !self.subsets.is_empty() {
            url.push_str(&format!("&subset={}", self.subsets.join(",")));
        };
        url
    }

    pub fn css_rule(&self) -> String {
        format!(
            ".{} {{ font-family: '{}', {}; }}",
            self.class_name,
            self.family,
            self.fallback,
        )
    }
}

#[derive(Serialize)]
pub struct FontLinks {
    pub origin: &'static str,
    pub static_origin: &'static str,
    pub stylesheet_url: String,
}

impl From<&FontConfig> for FontLinks {
    fn from(font: &FontConfig) -> Self {
        Self {
            origin: GOOGLE_FONTS_ORIGIN,
            static_origin: GOOGLE_FONTS_STATIC_ORIGIN,
            stylesheet_url: font.stylesheet_url(),
        }
    }
}

pub const SYNE: FontConfig = FontConfig {
    family: "Syne",
    subsets: &["latin"],
    display: "block",
    weights: &[400, 500, 600, 700, 800],
    fallback: "sans-serif",
    class_name: "font-syne",
};
