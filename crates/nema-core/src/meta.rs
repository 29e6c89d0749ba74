//! Page Metadata
//!
//! Title, description, social cards and font delivery for the HTML shell.

/// Open Graph / Twitter card fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialCard {
    pub title: &'static str,
    pub description: &'static str,
}

/// Everything the document head needs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteMeta {
    pub site_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub lang: &'static str,
    /// `og:type`
    pub kind: &'static str,
    pub open_graph: SocialCard,
    pub twitter: SocialCard,
    /// `twitter:card`
    pub twitter_card: &'static str,
    pub copyright: &'static str,
}

impl SiteMeta {
    /// The shipped site
    pub const fn nema() -> Self {
        Self {
            site_name: "Nema",
            title: "Nema — Autonomous AI Agent Orchestration",
            description: "Nema is the operating system for autonomous AI agents. Deploy, orchestrate, and scale intelligent agents that collaborate to solve complex problems.",
            url: "https://nema.vercel.app",
            lang: "en",
            kind: "website",
            open_graph: SocialCard {
                title: "Nema — Autonomous AI Agent Orchestration",
                description: "The operating system for autonomous AI agents.",
            },
            twitter: SocialCard {
                title: "Nema — Autonomous AI Agent Orchestration",
                description: "The operating system for autonomous AI agents.",
            },
            twitter_card: "summary_large_image",
            copyright: "© 2026 Nema AI. All rights reserved.",
        }
    }

    /// `(property, content)` pairs for `<meta property=..>` tags
    pub fn open_graph_tags(&self) -> [(&'static str, &'static str); 5] {
        [
            ("og:title", self.open_graph.title),
            ("og:description", self.open_graph.description),
            ("og:url", self.url),
            ("og:site_name", self.site_name),
            ("og:type", self.kind),
        ]
    }

    /// `(name, content)` pairs for `<meta name=..>` tags
    pub fn twitter_tags(&self) -> [(&'static str, &'static str); 3] {
        [
            ("twitter:card", self.twitter_card),
            ("twitter:title", self.twitter.title),
            ("twitter:description", self.twitter.description),
        ]
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self::nema()
    }
}

/// Web font delivery
pub mod fonts {
    pub const PRECONNECT: &str = "https://fonts.googleapis.com";
    /// Needs `crossorigin="anonymous"`
    pub const PRECONNECT_STATIC: &str = "https://fonts.gstatic.com";
    pub const STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800;900&family=JetBrains+Mono:wght@400;500;600&display=swap";
    pub const BODY: &str = "'Inter', sans-serif";
    pub const MONO: &str = "'JetBrains Mono', monospace";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_graph() {
        let meta = SiteMeta::nema();
        let tags = meta.open_graph_tags();
        assert_eq!(tags[2], ("og:url", "https://nema.vercel.app"));
        assert_eq!(tags[4], ("og:type", "website"));
        assert!(tags.iter().all(|(k, _)| k.starts_with("og:")));
    }

    #[test]
    fn test_twitter() {
        let tags = SiteMeta::default().twitter_tags();
        assert_eq!(tags[0], ("twitter:card", "summary_large_image"));
    }

    #[test]
    fn test_fonts() {
        assert!(fonts::STYLESHEET.contains("family=Inter"));
        assert!(fonts::STYLESHEET.contains("family=JetBrains+Mono"));
    }
}
