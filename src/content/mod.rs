//! Landing page copy
//!
//! All sections render from [`LandingContent`]. The built-in copy is the
//! default; a JSON file can override any top-level part of it.

mod structured_data;

pub use structured_data::StructuredData;

use crate::state::Role;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A labelled link, either an in-page anchor (`#about`) or a page path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub href: String,
}

impl Link {
    fn new(name: &str, href: &str) -> Self {
        Self {
            name: name.to_string(),
            href: href.to_string(),
        }
    }

    /// True for links that point inside this page
    pub fn is_anchor(&self) -> bool {
        self.href.starts_with('#')
    }
}

/// Short value/label pair shown as a badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
    #[serde(rename = "type")]
    pub kind: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub number: u8,
    pub title: String,
    pub description: String,
}

/// One side of the value proposition (investors or farmers)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audience {
    pub badge: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub cta: String,
}

/// Call to action closing a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub body: String,
    pub button: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub banner: String,
    pub headline: Vec<String>,
    pub subheadline: String,
    pub highlights: Vec<Highlight>,
    pub primary_cta: Link,
    pub secondary_cta: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeader {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Impact {
    pub stats_header: SectionHeader,
    pub stats: Vec<Stat>,
    pub testimonials_header: SectionHeader,
    pub testimonials: Vec<Testimonial>,
    pub trust_title: String,
    pub trust_badges: Vec<String>,
}

/// Copy for the email capture section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureCopy {
    pub header: SectionHeader,
    pub role_prompt: String,
    pub privacy_notice: String,
    pub launch_badge: String,
    pub success_title: String,
    pub success_body: String,
    pub reset_button: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub blurb: String,
    pub contact: ContactInfo,
    pub columns: Vec<LinkColumn>,
    pub social: Vec<Link>,
    pub newsletter_cta: String,
    pub copyright: String,
    pub registration: String,
}

/// Everything the landing page displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingContent {
    pub brand: String,
    pub navigation: Vec<Link>,
    pub hero: Hero,
    pub about_header: SectionHeader,
    pub audiences: Vec<Audience>,
    pub about_cta: CallToAction,
    pub steps_header: SectionHeader,
    pub steps: Vec<Step>,
    pub steps_cta: CallToAction,
    pub impact: Impact,
    pub capture: CaptureCopy,
    pub footer: Footer,
}

impl LandingContent {
    /// Load content overrides from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading content file {}", path.display()))?;
        let content = serde_json::from_str(&raw)
            .with_context(|| format!("parsing content file {}", path.display()))?;
        Ok(content)
    }

    /// Load overrides if a path is configured, falling back to the built-in copy
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|err| {
                tracing::warn!("Using built-in content: {err:#}");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn header(title: &str, subtitle: &str) -> SectionHeader {
    SectionHeader {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
    }
}

fn stat(number: &str, label: &str, description: &str) -> Stat {
    Stat {
        number: number.to_string(),
        label: label.to_string(),
        description: description.to_string(),
    }
}

fn testimonial(name: &str, role: &str, quote: &str, kind: Role) -> Testimonial {
    Testimonial {
        name: name.to_string(),
        role: role.to_string(),
        quote: quote.to_string(),
        kind,
    }
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            brand: "AGRiNVEST".to_string(),
            navigation: vec![
                Link::new("About", "#about"),
                Link::new("How It Works", "#how-it-works"),
                Link::new("Impact", "#impact"),
                Link::new("Contact", "#contact"),
            ],
            hero: Hero {
                banner: "Connecting farmers and investors since 2025".to_string(),
                headline: strings(&["Turn Your Spare", "₱50", "Into", "HEROIC IMPACT"]),
                subheadline: "Support Filipino farmers with interest-free capital while building meaningful wealth".to_string(),
                highlights: vec![
                    Highlight {
                        value: "1,000+".to_string(),
                        label: "Farmers Supported".to_string(),
                    },
                    Highlight {
                        value: "₱5M+".to_string(),
                        label: "Capital Invested".to_string(),
                    },
                    Highlight {
                        value: "85%".to_string(),
                        label: "Success Rate".to_string(),
                    },
                ],
                primary_cta: Link::new("Get Early Access", "#get-started"),
                secondary_cta: Link::new("Learn More", "#about"),
            },
            about_header: header(
                "Two Sides, One Mission",
                "Whether you're an investor seeking impact or a farmer needing capital, AGRiNVEST bridges the gap for mutual prosperity.",
            ),
            audiences: vec![
                Audience {
                    badge: "FOR INVESTORS".to_string(),
                    title: "Start Your Impact Journey".to_string(),
                    description: "Join thousands of investors creating meaningful change while building wealth through sustainable agriculture.".to_string(),
                    features: strings(&[
                        "Minimum ₱50 investment",
                        "Gamified experience with badges",
                        "Real-time impact tracking",
                        "Community-driven approach",
                    ]),
                    cta: "Start Investing →".to_string(),
                },
                Audience {
                    badge: "FOR FARMERS".to_string(),
                    title: "Interest-Free Capital & Market Data".to_string(),
                    description: "Access the capital you need without the burden of interest, plus real-time market insights to maximize your harvest.".to_string(),
                    features: strings(&[
                        "No interest, no debt burden",
                        "Market price transparency",
                        "Community support network",
                        "Agricultural insights",
                    ]),
                    cta: "Apply for Funding →".to_string(),
                },
            ],
            about_cta: CallToAction {
                title: "Ready to Make a Difference?".to_string(),
                body: "Join the movement that's transforming Philippine agriculture, one investment at a time.".to_string(),
                button: "Join the Movement".to_string(),
            },
            steps_header: header(
                "How AGRiNVEST Works",
                "Get started in just three simple steps and begin making impact today",
            ),
            steps: vec![
                Step {
                    number: 1,
                    title: "Sign Up & Fund".to_string(),
                    description: "Create your account and add money to your wallet".to_string(),
                },
                Step {
                    number: 2,
                    title: "Choose Projects".to_string(),
                    description: "Browse farmer projects and invest from ₱50".to_string(),
                },
                Step {
                    number: 3,
                    title: "Track Impact".to_string(),
                    description: "Monitor progress and see your impact grow".to_string(),
                },
            ],
            steps_cta: CallToAction {
                title: "Ready to Start Your Journey?".to_string(),
                body: "Join thousands of investors and farmers making a difference".to_string(),
                button: "Get Started Today".to_string(),
            },
            impact: Impact {
                stats_header: header(
                    "Real Impact, Real Numbers",
                    "See the difference we're making in Philippine agriculture",
                ),
                stats: vec![
                    stat("1,000+", "Farmers Supported", "Active farmers receiving interest-free capital"),
                    stat("₱5M+", "Invested", "Total capital deployed to farming projects"),
                    stat("85%", "Success Rate", "Projects meeting or exceeding expectations"),
                    stat("2,500+", "Community Members", "Investors and farmers in our ecosystem"),
                ],
                testimonials_header: header(
                    "What Our Community Says",
                    "Real stories from real people making a difference",
                ),
                testimonials: vec![
                    testimonial(
                        "Maria Santos",
                        "Rice Farmer, Nueva Ecija",
                        "AGRiNVEST gave me the capital I needed without the crushing interest rates. Now I can focus on growing my harvest instead of worrying about debt.",
                        Role::Farmer,
                    ),
                    testimonial(
                        "Jose Cruz",
                        "Young Investor, Manila",
                        "Starting with just ₱50, I've been able to support local farmers while learning about sustainable agriculture. The impact tracking keeps me motivated.",
                        Role::Investor,
                    ),
                    testimonial(
                        "Elena Rodriguez",
                        "Vegetable Farmer, Benguet",
                        "The market data access helped me choose the right crops to plant. My income has increased by 40% since joining AGRiNVEST.",
                        Role::Farmer,
                    ),
                    testimonial(
                        "Miguel Tan",
                        "Student Investor, Quezon City",
                        "As a student, I never thought I could make a real difference. AGRiNVEST made impact investing accessible and educational.",
                        Role::Investor,
                    ),
                ],
                trust_title: "Trusted & Secure".to_string(),
                trust_badges: strings(&[
                    "Bank-Grade Security",
                    "SEC Registered",
                    "GDPR Compliant",
                    "ISO Certified",
                ]),
            },
            capture: CaptureCopy {
                header: header(
                    "Join the Movement",
                    "Be first to support Filipino farmers when we launch",
                ),
                role_prompt: "I am:".to_string(),
                privacy_notice: "By signing up, you agree to our Privacy Policy (/privacy) and Terms of Service (/terms)".to_string(),
                launch_badge: "🚀 Early access launching Q1 2025 ✨".to_string(),
                success_title: "Welcome to the Movement! 🌾".to_string(),
                success_body: "Thank you for joining AGRiNVEST! We'll be in touch soon with early access details.".to_string(),
                reset_button: "Join Another Email".to_string(),
            },
            footer: Footer {
                blurb: "Connecting Filipino farmers with investors to create sustainable agricultural growth. Interest-free capital, market transparency, and real community impact.".to_string(),
                contact: ContactInfo {
                    email: "hello@agrinvest.ph".to_string(),
                    phone: "+63 (2) 123-4567".to_string(),
                    location: "Manila, Philippines".to_string(),
                },
                columns: vec![
                    LinkColumn {
                        title: "Company".to_string(),
                        links: vec![
                            Link::new("About Us", "#about"),
                            Link::new("Our Mission", "#impact"),
                            Link::new("How It Works", "#how-it-works"),
                            Link::new("Contact", "#contact"),
                        ],
                    },
                    LinkColumn {
                        title: "Support".to_string(),
                        links: vec![
                            Link::new("Help Center", "/help"),
                            Link::new("FAQ", "/faq"),
                            Link::new("Community", "/community"),
                            Link::new("Blog", "/blog"),
                        ],
                    },
                    LinkColumn {
                        title: "Legal".to_string(),
                        links: vec![
                            Link::new("Privacy Policy", "/privacy"),
                            Link::new("Terms of Service", "/terms"),
                            Link::new("Cookie Policy", "/cookies"),
                            Link::new("Compliance", "/compliance"),
                        ],
                    },
                ],
                social: vec![
                    Link::new("Facebook", "https://facebook.com/agrinvestph"),
                    Link::new("Instagram", "https://instagram.com/agrinvestph"),
                    Link::new("LinkedIn", "https://linkedin.com/company/agrinvestph"),
                    Link::new("Twitter", "https://twitter.com/agrinvestph"),
                ],
                newsletter_cta: "Subscribe to Newsletter".to_string(),
                copyright: "© 2025 AGRiNVEST. All rights reserved. Connecting farmers and investors for a sustainable future.".to_string(),
                registration: "SEC Registration No. CS202500123 • Registered Investment Platform".to_string(),
            },
        }
    }
}
