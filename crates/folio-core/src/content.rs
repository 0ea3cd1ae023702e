//! Portfolio content records.
//!
//! Everything here is immutable input: the collections are fixed when the
//! process starts and the rest of the application only ever reads them.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Target value and display formatting for one animated statistic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterSpec {
    /// Final value the counter lands on
    pub value: f64,
    /// Suffix appended to the displayed value (e.g. "%", "x", "K")
    #[serde(default)]
    pub suffix: String,
    /// Display one decimal place instead of truncating to an integer
    #[serde(default)]
    pub fractional: bool,
}

/// One statistic card: a counter plus its caption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    #[serde(flatten)]
    pub spec: CounterSpec,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// The whole portfolio document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub name: String,
    pub tagline: String,
    #[serde(default = "default_about_heading")]
    pub about_heading: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

fn default_about_heading() -> String {
    "Proven Impact Through Data".to_string()
}

impl PortfolioContent {
    /// Load portfolio content from a TOML file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| crate::Error::Content(e.to_string()))
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            tagline: "A Product Manager crafting exceptional SaaS solutions that \
                      drive growth and delight users."
                .to_string(),
            about_heading: default_about_heading(),
            stats: vec![
                Stat {
                    spec: CounterSpec {
                        value: 420.0,
                        suffix: "%".to_string(),
                        fractional: false,
                    },
                    label: "Return on Investment".to_string(),
                },
                Stat {
                    spec: CounterSpec {
                        value: 6.5,
                        suffix: "x".to_string(),
                        fractional: true,
                    },
                    label: "Return on Ad Spend".to_string(),
                },
                Stat {
                    spec: CounterSpec {
                        value: 8.7,
                        suffix: "%".to_string(),
                        fractional: true,
                    },
                    label: "Conversion Rate Uplift".to_string(),
                },
                Stat {
                    spec: CounterSpec {
                        value: 250.0,
                        suffix: "K".to_string(),
                        fractional: false,
                    },
                    label: "Revenue Generated ($)".to_string(),
                },
            ],
            projects: vec![
                Project {
                    title: "Virtual Networking Feature".to_string(),
                    description: "An integrated feature to facilitate one-on-one and \
                                  group networking within virtual events."
                        .to_string(),
                },
                Project {
                    title: "Event Registration & Payment".to_string(),
                    description: "A seamless platform for event registration, \
                                  ticketing, and secure payment processing."
                        .to_string(),
                },
                Project {
                    title: "Energy Management Apps".to_string(),
                    description: "Mobile applications for monitoring and optimizing \
                                  energy consumption in commercial buildings."
                        .to_string(),
                },
            ],
            testimonials: vec![
                Testimonial {
                    text: "John's product vision and leadership were instrumental in \
                           our last launch's success. He has a unique ability to \
                           translate complex user needs into actionable product \
                           roadmaps."
                        .to_string(),
                    author: "Jane Smith".to_string(),
                    title: "CEO, TechSolutions".to_string(),
                },
                Testimonial {
                    text: "Working with John is a pleasure. His data-driven approach \
                           to product management consistently delivers outstanding \
                           results and keeps the team focused on what truly matters."
                        .to_string(),
                    author: "Mike Johnson".to_string(),
                    title: "Lead Engineer, Innovate Inc.".to_string(),
                },
                Testimonial {
                    text: "He's a master at stakeholder communication and has an \
                           incredible talent for aligning cross-functional teams \
                           towards a common goal. A true asset to any product \
                           organization."
                        .to_string(),
                    author: "Sarah Chen".to_string(),
                    title: "Marketing Director, SaaS Co.".to_string(),
                },
            ],
            socials: vec![
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/johndoe".to_string(),
                },
                SocialLink {
                    label: "Twitter".to_string(),
                    url: "https://twitter.com/johndoe".to_string(),
                },
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/johndoe".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_complete() {
        let content = PortfolioContent::default();
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.socials.len(), 3);
    }

    #[test]
    fn test_default_stat_specs() {
        let content = PortfolioContent::default();
        let roi = &content.stats[0];
        assert_eq!(roi.spec.value, 420.0);
        assert!(!roi.spec.fractional);
        let roas = &content.stats[1];
        assert_eq!(roas.spec.value, 6.5);
        assert!(roas.spec.fractional);
    }

    #[test]
    fn test_parse_portfolio_toml() {
        let raw = r#"
            name = "Ada"
            tagline = "Builds things."

            [[stats]]
            value = 12.0
            suffix = "%"
            label = "Growth"

            [[testimonials]]
            text = "Great."
            author = "B"
            title = "CTO"
        "#;
        let content: PortfolioContent = toml::from_str(raw).unwrap();
        assert_eq!(content.name, "Ada");
        assert_eq!(content.stats.len(), 1);
        assert_eq!(content.stats[0].label, "Growth");
        assert!(!content.stats[0].spec.fractional);
        assert!(content.projects.is_empty());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let content = PortfolioContent::default();
        let raw = toml::to_string_pretty(&content).unwrap();
        let back: PortfolioContent = toml::from_str(&raw).unwrap();
        assert_eq!(back.stats.len(), content.stats.len());
        assert_eq!(back.testimonials[2].author, "Sarah Chen");
    }
}
