use std::collections::BTreeMap;

use actix_web::{
    body::MessageBody,
    dev::ServiceResponse,
    http::header as http_header,
    middleware::DefaultHeaders,
};
use log::Level;

use manazza_layout::{
    fonts::{GOOGLE_FONTS_ORIGIN, GOOGLE_FONTS_STATIC_ORIGIN},
    Analytics,
};

pub struct ContentSecurityPolicy {
    directives: BTreeMap<String, String>,
}

impl ContentSecurityPolicy {
    pub fn insert(&mut self, directive: &str, value: &str) -> () {
        self.directives.insert(directive.to_string(), value.to_string());
    }

    /// Appends source to directive
    pub fn extend(&mut self, directive: &str, source: &str) -> () {
        self.directives.entry(directive.to_string())
            .and_modify(|value| {
                value.push(' ');
                value.push_str(source);
            })
            .or_insert(source.to_string());
    }

    pub fn into_string(self) -> String {
        self.directives.iter()
            .map(|(key, val)| format!("{key} {val}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn for_analytics(maybe_analytics: Option<&Analytics>) -> Self {
        let mut csp = Self::default();
        if let Some(origin) = maybe_analytics.and_then(|analytics| analytics.origin()) {
            csp.extend("script-src", origin);
            csp.extend("connect-src", origin);
        };
        csp
    }
}

impl Default for ContentSecurityPolicy {
    fn default() -> Self {
        let font_style_src = format!("'self' 'unsafe-inline' {GOOGLE_FONTS_ORIGIN}");
        let defaults = [
            ("default-src", "'none'"),
            ("connect-src", "'self'"),
            // Open Graph image is hosted externally
            ("img-src", "'self' data: https:"),
            ("font-src", GOOGLE_FONTS_STATIC_ORIGIN),
            ("script-src", "'self'"),
            // Font class rule is inline
            ("style-src", font_style_src.as_str()),
            ("manifest-src", "'self'"),
            ("frame-ancestors", "'none'"),
            ("base-uri", "'self'"),
        ];
        let directives = defaults.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { directives }
    }
}

pub fn create_default_headers_middleware(
    maybe_analytics: Option<&Analytics>,
) -> DefaultHeaders {
    DefaultHeaders::new()
        .add((
            http_header::CONTENT_SECURITY_POLICY,
            ContentSecurityPolicy::for_analytics(maybe_analytics).into_string(),
        ))
        .add((http_header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
}

pub fn log_response_error<B: MessageBody>(
    level: Level,
    response: &ServiceResponse<B>,
) -> () {
    let error_message = if let Some(error) = response.response().error() {
        // Actix error
        error.to_string()
    } else {
        response.response()
            .status().canonical_reason()
            .unwrap_or("unknown error")
            .to_owned()
    };
    log::log!(
        level,
        "{} {} : {}",
        response.request().method(),
        response.request().path(),
        error_message,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_security_policy() {
        let csp = ContentSecurityPolicy::default();
        assert_eq!(
            csp.into_string(),
            "base-uri 'self'; connect-src 'self'; default-src 'none'; font-src https://fonts.gstatic.com; frame-ancestors 'none'; img-src 'self' data: https:; manifest-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline' https://fonts.googleapis.com",
        );
    }

    #[test]
    fn test_content_security_policy_debug_analytics() {
        let analytics = Analytics::debug();
        let csp = ContentSecurityPolicy::for_analytics(Some(&analytics));
        let csp_string = csp.into_string();
        assert!(csp_string.contains(
            "script-src 'self' https://va.vercel-scripts.com",
        ));
        assert!(csp_string.contains(
            "connect-src 'self' https://va.vercel-scripts.com",
        ));
    }

    #[test]
    fn test_content_security_policy_insert() {
        let mut csp = ContentSecurityPolicy::default();
        csp.insert("frame-ancestors", "'self'");
        assert!(csp.into_string().contains("frame-ancestors 'self';"));
    }
}
