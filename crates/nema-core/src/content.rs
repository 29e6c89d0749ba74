//! Page Content
//!
//! Every card, stat, and link on the landing page, in render order.

/// Feature card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Use-case card with a headline metric
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UseCase {
    pub title: &'static str,
    pub description: &'static str,
    pub metric: &'static str,
}

/// Pricing tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub call_to_action: &'static str,
    pub featured: bool,
}

/// Investor testimonial
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Investor {
    pub name: &'static str,
    pub title: &'static str,
    /// Path under the static root
    pub image: &'static str,
    pub quote: &'static str,
    pub featured: bool,
}

/// Hero counter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Section heading: plain lead-in, a gradient-highlighted word, and any
/// punctuation that sits after the highlight
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Heading {
    pub lead: &'static str,
    pub highlight: &'static str,
    pub trailing: &'static str,
}

impl Heading {
    const fn new(lead: &'static str, highlight: &'static str) -> Self {
        Self { lead, highlight, trailing: "" }
    }

    /// Heading as read aloud, e.g. `Ready to orchestrate?`
    pub fn text(&self) -> String {
        format!("{} {}{}", self.lead, self.highlight, self.trailing)
    }
}

pub const HOW_IT_WORKS_HEADING: Heading = Heading::new("Agents that think", "together");
pub const FEATURES_HEADING: Heading = Heading::new("Built for", "production");
pub const USE_CASES_HEADING: Heading = Heading::new("What teams build with", "Nema");
pub const PRICING_HEADING: Heading = Heading::new("Simple, transparent", "pricing");
pub const BACKERS_HEADING: Heading = Heading::new("Backed by", "visionaries");
pub const WAITLIST_HEADING: Heading = Heading {
    lead: "Ready to",
    highlight: "orchestrate",
    trailing: "?",
};

pub const DOCS_URL: &str = "https://docs.nema.ai";
pub const CONTACT_HREF: &str = "mailto:hello@nema.ai";
pub const WAITLIST_ANCHOR: &str = "#waitlist";

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "How It Works", href: "#how-it-works" },
    NavLink { label: "Use Cases", href: "#use-cases" },
    NavLink { label: "Docs", href: DOCS_URL },
];

pub const FOOTER_LINKS: [NavLink; 4] = [
    NavLink { label: "Twitter", href: "#" },
    NavLink { label: "GitHub", href: "#" },
    NavLink { label: "Discord", href: "#" },
    NavLink { label: "Contact", href: CONTACT_HREF },
];

pub const STATS: [Stat; 4] = [
    Stat { value: 47, suffix: "ms", label: "Avg Agent Spawn" },
    Stat { value: 200, suffix: "+", label: "Tool Integrations" },
    Stat { value: 99, suffix: ".9%", label: "Uptime SLA" },
    Stat { value: 10, suffix: "x", label: "Faster Than Manual" },
];

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🧠",
        title: "Multi-Model Orchestration",
        description: "Run Claude, GPT-4, Gemini, and open-source models in the same swarm. Each agent picks the best model for its role.",
    },
    Feature {
        icon: "🔄",
        title: "Autonomous Collaboration",
        description: "Agents communicate, delegate, and resolve conflicts without human intervention. Built-in consensus protocols.",
    },
    Feature {
        icon: "🛡️",
        title: "Guardrails by Default",
        description: "Every agent runs inside a sandboxed environment with configurable permissions, budget limits, and kill switches.",
    },
    Feature {
        icon: "📊",
        title: "Observable & Debuggable",
        description: "Full execution traces, token-level cost tracking, and real-time dashboards. Know exactly what your agents are doing.",
    },
    Feature {
        icon: "🔌",
        title: "Tool Ecosystem",
        description: "200+ pre-built tool integrations — from web search to code execution, database queries to API calls.",
    },
    Feature {
        icon: "⚡",
        title: "Scale to Zero",
        description: "Pay only for compute you use. Agents spin up on demand and hibernate when idle. No idle infrastructure costs.",
    },
];

pub const USE_CASES: [UseCase; 4] = [
    UseCase {
        title: "Research & Analysis",
        description: "Deploy agent teams that read papers, analyze data, and synthesize reports — 100x faster than manual research.",
        metric: "47 papers analyzed in 3 minutes",
    },
    UseCase {
        title: "Code Generation & Review",
        description: "Architect, implement, test, and review code with specialized agents that understand your entire codebase.",
        metric: "12x faster PR turnaround",
    },
    UseCase {
        title: "Customer Operations",
        description: "Intelligent agents that handle support tickets, route issues, and resolve problems autonomously.",
        metric: "89% resolution without human escalation",
    },
    UseCase {
        title: "Data Pipeline Automation",
        description: "Agents that ingest, clean, transform, and analyze data across your entire stack.",
        metric: "From raw data to insight in minutes",
    },
];

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: "Free",
        description: "5 agents, 10K executions/mo",
        call_to_action: "Get Started",
        featured: false,
    },
    Plan {
        name: "Pro",
        price: "$49/mo",
        description: "Unlimited agents, 500K executions/mo",
        call_to_action: "Start Trial",
        featured: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        description: "Dedicated infrastructure, SLA, SSO",
        call_to_action: "Contact Sales",
        featured: false,
    },
];

pub const INVESTORS: [Investor; 3] = [
    Investor {
        name: "Sarah Chen",
        title: "Partner, Sequoia Capital",
        image: "/sarah-chen.png",
        quote: "\"Nema is the infrastructure layer AI has been missing.\"",
        featured: false,
    },
    Investor {
        name: "joeVC",
        title: "Managing Partner, Disruption Ventures",
        image: "/joevc-generated.png",
        quote: "\"I wrote my first check after the demo crashed 3 times. That's conviction.\"",
        featured: true,
    },
    Investor {
        name: "Priya Patel",
        title: "GP, Andreessen Horowitz",
        image: "/priya-patel.png",
        quote: "\"The agent coordination protocol is genuinely novel.\"",
        featured: false,
    },
];

/// Shown under the featured investor's card
pub const LEAD_INVESTOR_NOTE: &str =
    "Investment size: undisclosed (but he won't stop talking about it)";

pub const CODE_SAMPLE_FILENAME: &str = "swarm.py";

pub const CODE_SAMPLE: &str = r#"import nema

# Define your agent swarm
swarm = nema.Swarm("research-team")

# Add specialized agents
swarm.add(nema.Agent(
    role="researcher",
    model="claude-opus-4",
    tools=["web_search", "arxiv", "pdf_parse"],
    instructions="Find cutting-edge papers on the topic"
))

swarm.add(nema.Agent(
    role="synthesizer",
    model="gpt-4o",
    instructions="Combine findings into actionable insights"
))

swarm.add(nema.Agent(
    role="critic",
    model="claude-sonnet-4",
    instructions="Challenge assumptions, find gaps"
))

# Launch — agents collaborate autonomously
result = await swarm.run(
    "Analyze the state of AI agent architectures in 2026"
)

print(result.summary)    # Synthesized report
print(result.citations)  # 47 papers analyzed
print(result.cost)       # $0.23 total"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_sizes() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(USE_CASES.len(), 4);
        assert_eq!(PLANS.len(), 3);
        assert_eq!(INVESTORS.len(), 3);
        assert_eq!(STATS.len(), 4);
    }

    #[test]
    fn test_declaration_order() {
        let plans: Vec<_> = PLANS.iter().map(|p| p.name).collect();
        assert_eq!(plans, ["Starter", "Pro", "Enterprise"]);

        let features: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(features[0], "Multi-Model Orchestration");
        assert_eq!(features[5], "Scale to Zero");
    }

    #[test]
    fn test_single_featured_entries() {
        let featured_plans: Vec<_> = PLANS.iter().filter(|p| p.featured).collect();
        assert_eq!(featured_plans.len(), 1);
        assert_eq!(featured_plans[0].name, "Pro");

        let lead: Vec<_> = INVESTORS.iter().filter(|i| i.featured).collect();
        assert_eq!(lead.len(), 1);
        assert_eq!(lead[0].name, "joeVC");
    }

    #[test]
    fn test_hero_stats() {
        assert_eq!(STATS[0], Stat { value: 47, suffix: "ms", label: "Avg Agent Spawn" });
        assert_eq!(STATS[2].value, 99);
        assert_eq!(STATS[2].suffix, ".9%");
    }

    #[test]
    fn test_links() {
        let nav: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(nav, ["#features", "#how-it-works", "#use-cases", DOCS_URL]);

        let footer: Vec<_> = FOOTER_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(footer, ["#", "#", "#", "mailto:hello@nema.ai"]);
        assert_eq!(FOOTER_LINKS[3].href, CONTACT_HREF);
    }

    #[test]
    fn test_headings() {
        assert_eq!(WAITLIST_HEADING.highlight, "orchestrate");
        assert_eq!(WAITLIST_HEADING.text(), "Ready to orchestrate?");
        assert_eq!(USE_CASES_HEADING.text(), "What teams build with Nema");

        for heading in [
            HOW_IT_WORKS_HEADING,
            FEATURES_HEADING,
            USE_CASES_HEADING,
            PRICING_HEADING,
            BACKERS_HEADING,
            WAITLIST_HEADING,
        ] {
            assert!(heading.highlight.chars().all(char::is_alphanumeric), "{heading:?}");
        }
    }

    #[test]
    fn test_code_sample() {
        assert!(CODE_SAMPLE.starts_with("import nema\n"));
        assert!(CODE_SAMPLE.ends_with("# $0.23 total"));
        assert_eq!(CODE_SAMPLE.lines().count(), 33);
    }
}
