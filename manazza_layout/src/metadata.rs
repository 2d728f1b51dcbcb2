//! Static page metadata of the site
use regex::Regex;
use thiserror::Error;
use url::Url;

pub const SITE_URL: &str = "https://www.tomasmanazza.com";
pub const SITE_NAME: &str = "Tomas Manazza - Portafolio Profesional";
pub const PROFILE_IMAGE_URL: &str = "https://i.postimg.cc/SKD5TpwV/Whats-App-Image-2025-09-24-at-7-54-20-PM.jpg";

// https://help.x.com/en/managing-your-account/x-username-rules
const TWITTER_HANDLE_RE: &str = r"^@[A-Za-z0-9_]{1,15}$";

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("invalid URL in {field}: {url}")]
    InvalidUrl { field: &'static str, url: String },

    #[error("invalid twitter handle: {0}")]
    InvalidTwitterHandle(String),
}

#[derive(Clone, Copy, Debug)]
pub struct OpenGraphImage {
    pub url: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

// https://ogp.me/
#[derive(Clone, Copy, Debug)]
pub struct OpenGraph {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub site_name: &'static str,
    pub images: &'static [OpenGraphImage],
    pub locale: &'static str,
    pub object_type: &'static str,
}

// https://developer.x.com/en/docs/x-for-websites/cards/overview/markup
#[derive(Clone, Copy, Debug)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub creator: Option<&'static str>,
    pub images: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImagePreview {
    None,
    Standard,
    Large,
}

impl ImagePreview {
    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Standard => "standard",
            Self::Large => "large",
        }
    }
}

fn index_directive(index: bool) -> &'static str {
    if index { "index" } else { "noindex" }
}

fn follow_directive(follow: bool) -> &'static str {
    if follow { "follow" } else { "nofollow" }
}

// https://developers.google.com/search/docs/crawling-indexing/robots-meta-tag
#[derive(Clone, Copy, Debug)]
pub struct GoogleBotDirectives {
    pub index: bool,
    pub follow: bool,
    pub noimageindex: bool,
    /// Maximum video preview length in seconds, -1 means no limit
    pub max_video_preview: i32,
    pub max_image_preview: ImagePreview,
    /// Maximum snippet length in characters, -1 means no limit
    pub max_snippet: i32,
}

impl GoogleBotDirectives {
    pub fn to_content(&self) -> String {
        let mut directives = vec![
            index_directive(self.index).to_owned(),
            follow_directive(self.follow).to_owned(),
        ];
        if self.noimageindex {
            directives.push("noimageindex".to_owned());
        };
        directives.push(format!("max-video-preview:{}", self.max_video_preview));
        directives.push(format!(
            "max-image-preview:{}",
            self.max_image_preview.as_str(),
        ));
        directives.push(format!("max-snippet:{}", self.max_snippet));
        directives.join(", ")
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RobotsDirectives {
    pub index: bool,
    pub follow: bool,
    pub nocache: bool,
    pub google_bot: Option<GoogleBotDirectives>,
}

impl RobotsDirectives {
    pub fn to_content(&self) -> String {
        let mut directives = vec![
            index_directive(self.index),
            follow_directive(self.follow),
        ];
        if self.nocache {
            directives.push("nocache");
        };
        directives.join(", ")
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub generator: &'static str,
    pub application_name: &'static str,
    pub keywords: &'static [&'static str],
    /// Base for resolving relative URLs
    pub metadata_base: &'static str,
    pub canonical: &'static str,
    pub icon: &'static str,
    pub color_scheme: &'static str,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: RobotsDirectives,
    pub category: &'static str,
}

impl PageMetadata {
    fn base_url(&self) -> Result<Url, MetadataError> {
        Url::parse(self.metadata_base).map_err(|_| MetadataError::InvalidUrl {
            field: "metadata_base",
            url: self.metadata_base.to_owned(),
        })
    }

    /// Resolves a possibly relative URL against `metadata_base`
    pub fn resolve_url(
        &self,
        field: &'static str,
        value: &str,
    ) -> Result<Url, MetadataError> {
        let base = self.base_url()?;
        let url = base.join(value).map_err(|_| MetadataError::InvalidUrl {
            field,
            url: value.to_owned(),
        })?;
        match url.scheme() {
            "http" | "https" | "data" => Ok(url),
            _ => Err(MetadataError::InvalidUrl { field, url: value.to_owned() }),
        }
    }

    pub fn validate(&self) -> Result<(), MetadataError> {
        if self.title.trim().is_empty() {
            return Err(MetadataError::EmptyTitle);
        };
        self.base_url()?;
        self.resolve_url("canonical", self.canonical)?;
        self.resolve_url("icon", self.icon)?;
        self.resolve_url("open_graph.url", self.open_graph.url)?;
        for image in self.open_graph.images {
            self.resolve_url("open_graph.images", image.url)?;
        };
        for image_url in self.twitter.images {
            self.resolve_url("twitter.images", image_url)?;
        };
        if let Some(creator) = self.twitter.creator {
            let handle_re = Regex::new(TWITTER_HANDLE_RE)
                .expect("regexp should be valid");
            if !handle_re.is_match(creator) {
                return Err(MetadataError::InvalidTwitterHandle(creator.to_owned()));
            };
        };
        Ok(())
    }
}

pub const SITE_METADATA: PageMetadata = PageMetadata {
    title: "Tomas Manazza | Programador Full Stack en Santa Fe | Next.js & React Expert",
    description: "Tomas Manazza: Programador Full Stack y CEO de Empty_Development. Ofrezco desarrollo web de alto rendimiento (Next.js, React) y soluciones Back-end. Tu experto local en Santa Fe, Argentina.",
    generator: "Next.js",
    application_name: SITE_NAME,
    keywords: &[
        "programador full stack santa fe",
        "full stack developer santa fe",
        "developer santa fe",
        "Next.js developer santa fe",
        "React developer santa fe",
        "tomas manazza",
        "Empty_Development",
        "programador argentina",
        "desarrollo web santa fe",
        "contratar full stack developer",
    ],
    metadata_base: SITE_URL,
    canonical: "https://www.tomasmanazza.com/",
    icon: r#"data:image/svg+xml,<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><path d="M40 70 L20 50 L40 30 M60 30 L80 50 L60 70" fill="none" stroke="black" stroke-width="8" stroke-linecap="round" stroke-linejoin="round"/></svg>"#,
    color_scheme: "dark",
    open_graph: OpenGraph {
        title: "Tomas Manazza | Full Stack Developer | Santa Fe, Argentina",
        description: "Desarrollador Full Stack experto en crear aplicaciones web de alto impacto con Next.js y React. ¡Contáctame para tu proyecto en Santa Fe!",
        url: SITE_URL,
        site_name: SITE_NAME,
        images: &[
            OpenGraphImage {
                url: PROFILE_IMAGE_URL,
                width: 1200,
                height: 630,
                alt: "Tomas Manazza - Programador Full Stack en Santa Fe",
            },
        ],
        locale: "es_AR",
        object_type: "website",
    },
    twitter: TwitterCard {
        card: "summary_large_image",
        title: "Programador Full Stack Next.js | Tomas Manazza | Santa Fe 🇦🇷",
        description: "Tomas Manazza, Programador Full Stack y CEO de Empty_Development. Soluciones web rápidas, escalables y orientadas a resultados. Next.js & React.",
        // Handle is not known yet
        creator: None,
        images: &[PROFILE_IMAGE_URL],
    },
    robots: RobotsDirectives {
        index: true,
        follow: true,
        nocache: false,
        google_bot: Some(GoogleBotDirectives {
            index: true,
            follow: true,
            noimageindex: false,
            max_video_preview: -1,
            max_image_preview: ImagePreview::Large,
            max_snippet: -1,
        }),
    },
    category: "technology",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_metadata_title() {
        assert!(!SITE_METADATA.title.is_empty());
        assert!(SITE_METADATA.title.contains("Tomas Manazza"));
    }

    #[test]
    fn test_site_metadata_canonical() {
        assert_eq!(SITE_METADATA.canonical, "https://www.tomasmanazza.com/");
    }

    #[test]
    fn test_site_metadata_is_valid() {
        SITE_METADATA.validate().unwrap();
    }

    #[test]
    fn test_validate_empty_title() {
        let metadata = PageMetadata { title: "  ", ..SITE_METADATA };
        let error = metadata.validate().err().unwrap();
        assert!(matches!(error, MetadataError::EmptyTitle));
    }

    #[test]
    fn test_validate_invalid_base() {
        let metadata = PageMetadata {
            metadata_base: "www.tomasmanazza.com",
            ..SITE_METADATA
        };
        let error = metadata.validate().err().unwrap();
        assert_eq!(
            error.to_string(),
            "invalid URL in metadata_base: www.tomasmanazza.com",
        );
    }

    #[test]
    fn test_validate_invalid_canonical() {
        let metadata = PageMetadata {
            canonical: "https://[broken/",
            ..SITE_METADATA
        };
        let error = metadata.validate().err().unwrap();
        assert!(matches!(
            error,
            MetadataError::InvalidUrl { field: "canonical", .. },
        ));
    }

    #[test]
    fn test_validate_unsupported_scheme() {
        let metadata = PageMetadata {
            canonical: "ftp://www.tomasmanazza.com/",
            ..SITE_METADATA
        };
        assert!(metadata.validate().is_err());
    }

    #[test]
    fn test_validate_placeholder_twitter_handle() {
        let metadata = PageMetadata {
            twitter: TwitterCard {
                creator: Some("@[TuUsuarioTwitter]"),
                ..SITE_METADATA.twitter
            },
            ..SITE_METADATA
        };
        let error = metadata.validate().err().unwrap();
        assert!(matches!(error, MetadataError::InvalidTwitterHandle(_)));

        let metadata = PageMetadata {
            twitter: TwitterCard {
                creator: Some("@tomasmanazza"),
                ..SITE_METADATA.twitter
            },
            ..SITE_METADATA
        };
        metadata.validate().unwrap();
    }

    #[test]
    fn test_resolve_relative_url() {
        let url = SITE_METADATA.resolve_url("canonical", "/about").unwrap();
        assert_eq!(url.as_str(), "https://www.tomasmanazza.com/about");
    }

    #[test]
    fn test_robots_content() {
        let robots = SITE_METADATA.robots;
        assert_eq!(robots.to_content(), "index, follow");
        let google_bot = robots.google_bot.unwrap();
        assert_eq!(
            google_bot.to_content(),
            "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1",
        );
    }

    #[test]
    fn test_robots_content_noindex() {
        let robots = RobotsDirectives {
            index: false,
            follow: false,
            nocache: true,
            google_bot: None,
        };
        assert_eq!(robots.to_content(), "noindex, nofollow, nocache");
        let google_bot = GoogleBotDirectives {
            index: false,
            follow: true,
            noimageindex: true,
            max_video_preview: 0,
            max_image_preview: ImagePreview::None,
            max_snippet: 50,
        };
        assert_eq!(
            google_bot.to_content(),
            "noindex, follow, noimageindex, max-video-preview:0, max-image-preview:none, max-snippet:50",
        );
    }
}
