pub mod analytics;
pub mod fonts;
pub mod head;
pub mod layout;
pub mod metadata;
pub mod structured_data;
pub mod templates;

pub use analytics::Analytics;
pub use fonts::FontConfig;
pub use layout::RootLayout;
pub use metadata::{MetadataError, PageMetadata};
pub use structured_data::PersonSchema;
pub use templates::TemplateError;
