use serde::Serialize;

// Collector endpoint is provided by the hosting platform.
// Elsewhere this path must be proxied, or replaced with with_script_src()
pub const ANALYTICS_SCRIPT_PATH: &str = "/_vercel/insights/script.js";
pub const ANALYTICS_DEBUG_SCRIPT_URL: &str = "https://va.vercel-scripts.com/v1/script.debug.js";
// Collector groups page views by SDK name
pub const ANALYTICS_SDK_NAME: &str = "@vercel/analytics/react";

/// Page view collector, injected once per page
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analytics {
    pub script_src: String,
    pub sdk_name: &'static str,
}

impl Analytics {
    pub fn production() -> Self {
        Self::with_script_src(ANALYTICS_SCRIPT_PATH)
    }

    /// Debug collector logs page views to browser console
    pub fn debug() -> Self {
        Self::with_script_src(ANALYTICS_DEBUG_SCRIPT_URL)
    }

    pub fn with_script_src(script_src: &str) -> Self {
        Self {
            script_src: script_src.to_string(),
            sdk_name: ANALYTICS_SDK_NAME,
        }
    }

    pub fn origin(&self) -> Option<&str> {
        if self.script_src.starts_with('/') {
            return None;
        };
        let (scheme, rest) = self.script_src.split_once("://")?;
        let host_len = rest.find('/').unwrap_or(rest.len());
        let origin_len = scheme.len() + "://".len() + host_len;
        Some(&self.script_src[..origin_len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_origin() {
        assert_eq!(Analytics::production().origin(), None);
        assert_eq!(
            Analytics::debug().origin(),
            Some("https://va.vercel-scripts.com"),
        );
    }

    #[test]
    fn test_analytics_with_script_src() {
        let analytics = Analytics::with_script_src("https://cdn.example.org/insights.js");
        assert_eq!(analytics.script_src, "https://cdn.example.org/insights.js");
        assert_eq!(analytics.origin(), Some("https://cdn.example.org"));

        let analytics = Analytics::with_script_src("/insights/script.js");
        assert_eq!(analytics.origin(), None);
    }

    #[test]
    fn test_analytics_sdk_name() {
        assert_eq!(Analytics::production().sdk_name, "@vercel/analytics/react");
        assert_eq!(Analytics::debug().sdk_name, "@vercel/analytics/react");
    }
}
