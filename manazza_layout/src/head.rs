use serde::Serialize;

use super::metadata::PageMetadata;
use super::templates::{render_template, TemplateError};

#[derive(Serialize)]
struct OpenGraphImageBlock {
    url: &'static str,
    width: u32,
    height: u32,
    alt: &'static str,
}

#[derive(Serialize)]
struct MetadataBlock {
    title: &'static str,
    description: &'static str,
    application_name: &'static str,
    generator: &'static str,
    keywords: String,
    robots: String,
    googlebot: Option<String>,
    category: &'static str,
    color_scheme: &'static str,
    canonical: &'static str,
    og_title: &'static str,
    og_description: &'static str,
    og_url: &'static str,
    og_site_name: &'static str,
    og_locale: &'static str,
    og_images: Vec<OpenGraphImageBlock>,
    og_type: &'static str,
    twitter_card: &'static str,
    twitter_creator: Option<&'static str>,
    twitter_title: &'static str,
    twitter_description: &'static str,
    twitter_images: &'static [&'static str],
    icon: &'static str,
}

impl From<&PageMetadata> for MetadataBlock {
    fn from(metadata: &PageMetadata) -> Self {
        let og_images = metadata.open_graph.images.iter()
            .map(|image| OpenGraphImageBlock {
                url: image.url,
                width: image.width,
                height: image.height,
                alt: image.alt,
            })
            .collect();
        Self {
            title: metadata.title,
            description: metadata.description,
            application_name: metadata.application_name,
            generator: metadata.generator,
            keywords: metadata.keywords.join(","),
            robots: metadata.robots.to_content(),
            googlebot: metadata.robots.google_bot
                .map(|google_bot| google_bot.to_content()),
            category: metadata.category,
            color_scheme: metadata.color_scheme,
            canonical: metadata.canonical,
            og_title: metadata.open_graph.title,
            og_description: metadata.open_graph.description,
            og_url: metadata.open_graph.url,
            og_site_name: metadata.open_graph.site_name,
            og_locale: metadata.open_graph.locale,
            og_images: og_images,
            og_type: metadata.open_graph.object_type,
            twitter_card: metadata.twitter.card,
            twitter_creator: metadata.twitter.creator,
            twitter_title: metadata.twitter.title,
            twitter_description: metadata.twitter.description,
            twitter_images: metadata.twitter.images,
            icon: metadata.icon,
        }
    }
}

/// Renders <title>, <meta> and <link> elements for the document head
pub fn render_metadata_block(
    metadata: &PageMetadata,
) -> Result<String, TemplateError> {
    let context = MetadataBlock::from(metadata);
    render_template(
        include_str!("templates/metadata_block.html"),
        context,
    )
}

#[cfg(test)]
mod tests {
    use crate::metadata::{TwitterCard, SITE_METADATA};
    use super::*;

    #[test]
    fn test_render_metadata_block() {
        let output = render_metadata_block(&SITE_METADATA).unwrap();
        assert!(output.starts_with(
            "<title>Tomas Manazza | Programador Full Stack en Santa Fe | Next.js &amp; React Expert</title>",
        ));
        assert!(output.contains(r#"<meta name="robots" content="index, follow">"#));
        assert!(output.contains(r#"<meta name="category" content="technology">"#));
        assert!(output.contains(r#"<meta name="color-scheme" content="dark">"#));
        assert!(output.contains(r#"<meta property="og:locale" content="es_AR">"#));
        assert!(output.contains(r#"<meta property="og:image:width" content="1200">"#));
        assert!(output.contains(r#"<meta property="og:image:height" content="630">"#));
        assert!(output.contains(r#"<meta property="og:type" content="website">"#));
        assert!(output.contains(
            r#"<meta name="twitter:card" content="summary_large_image">"#,
        ));
        assert_eq!(output.matches("<link rel=\"canonical\"").count(), 1);
        assert_eq!(output.matches("<meta name=\"googlebot\"").count(), 1);
        assert_eq!(output.matches("<meta name=\"twitter:image\"").count(), 1);
        // Placeholder handle is not emitted
        assert!(!output.contains("twitter:creator"));
    }

    #[test]
    fn test_render_metadata_block_escapes_values() {
        let metadata = PageMetadata {
            description: r#"quote" <b>bold</b>"#,
            ..SITE_METADATA
        };
        let output = render_metadata_block(&metadata).unwrap();
        assert!(!output.contains("<b>"));
        assert!(output.contains("quote&quot; &lt;b&gt;bold"));
    }

    #[test]
    fn test_render_metadata_block_with_twitter_creator() {
        let metadata = PageMetadata {
            twitter: TwitterCard {
                creator: Some("@tomasmanazza"),
                ..SITE_METADATA.twitter
            },
            ..SITE_METADATA
        };
        let output = render_metadata_block(&metadata).unwrap();
        assert!(output.contains(
            r#"<meta name="twitter:creator" content="@tomasmanazza">"#,
        ));
    }

    #[test]
    fn test_render_metadata_block_without_googlebot() {
        let mut metadata = SITE_METADATA;
        metadata.robots.google_bot = None;
        let output = render_metadata_block(&metadata).unwrap();
        assert!(!output.contains("googlebot"));
    }
}
