use serde::Serialize;
use serde_json::{json, Value};

/// Site-wide defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub author: &'static str,
    pub site_name: &'static str,
    /// Origin without trailing slash.
    pub url: &'static str,
    pub image: &'static str,
    pub locale: &'static str,
}

/// Metadata for one routed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageConfig {
    #[serde(skip)]
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub path: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
}

/// The complete metadata table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeoConfig {
    pub base: SiteConfig,
    pub pages: &'static [PageConfig],
}

/// Page metadata with every fallback to the site defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPage {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub author: &'static str,
    pub image: &'static str,
    pub path: &'static str,
    /// Absolute URL of the page.
    pub url: String,
}

impl SeoConfig {
    /// Looks up a page by key.
    pub fn page(&self, key: &str) -> Option<&PageConfig> {
        self.pages.iter().find(|page| page.key == key)
    }

    pub fn page_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pages.iter().map(|page| page.key)
    }

    /// Resolves a page key, falling back to the site defaults at `/` for
    /// unknown keys.
    pub fn resolve(&self, key: &str) -> ResolvedPage {
        let base = &self.base;
        match self.page(key) {
            Some(page) => ResolvedPage {
                title: page.title,
                description: page.description,
                keywords: page.keywords,
                author: base.author,
                image: page.image.unwrap_or(base.image),
                path: page.path,
                url: format!("{}{}", base.url, page.path),
            },
            None => ResolvedPage {
                title: base.title,
                description: base.description,
                keywords: base.keywords,
                author: base.author,
                image: base.image,
                path: "/",
                url: format!("{}/", base.url),
            },
        }
    }

    /// The table as the front end consumes it: `{ base, pages: { key: page } }`.
    pub fn to_json(&self) -> Value {
        let pages: serde_json::Map<String, Value> = self
            .pages
            .iter()
            .map(|page| (page.key.to_string(), json!(page)))
            .collect();
        json!({ "base": self.base, "pages": pages })
    }
}

pub const SEO_CONFIG: SeoConfig = SeoConfig {
    base: SiteConfig {
        title: "Human Benchmark - Test Your Cognitive Limits & Reaction Time",
        description: "Challenge your mind with Human Benchmark's cognitive tests. Measure reaction time, memory, decision-making, and personality traits. Compare scores globally and track your progress.",
        keywords: "human benchmark, cognitive test, reaction time test, memory test, decision making, personality quiz, brain training, cognitive assessment, mental speed, attention test",
        author: "Human Benchmark",
        site_name: "Human Benchmark",
        url: "https://humanbenchmark.xyz",
        image: "https://humanbenchmark.xyz/icons/Icon-512.png",
        locale: "en_US",
    },
    pages: &[
        PageConfig {
            key: "home",
            title: "Human Benchmark - Test Your Cognitive Limits & Reaction Time",
            description: "Challenge your mind with Human Benchmark's comprehensive cognitive tests. Measure reaction time, memory, decision-making, and personality traits. Compare scores globally and track your progress.",
            keywords: "human benchmark, cognitive test, reaction time test, memory test, decision making, personality quiz, brain training, cognitive assessment, mental speed, attention test",
            path: "/",
            image: None,
        },
        PageConfig {
            key: "reactionTime",
            title: "Reaction Time Test - Human Benchmark",
            description: "Test your reaction time with our fast-paced cognitive test. Tap when the screen turns green and see how quick your brain really is. Compare your score with others worldwide.",
            keywords: "reaction time test, cognitive speed test, attention test, brain speed, human benchmark, reaction test",
            path: "/reaction-time",
            image: None,
        },
        PageConfig {
            key: "numberMemory",
            title: "Number Memory Test - Human Benchmark",
            description: "Challenge your memory with our number sequence test. Remember increasingly longer sequences and discover your memory capacity limits. Track your progress over time.",
            keywords: "number memory test, memory capacity test, sequence memory, cognitive memory, human benchmark, memory test",
            path: "/number-memory",
            image: None,
        },
        PageConfig {
            key: "decisionMaking",
            title: "Decision Making Test - Human Benchmark",
            description: "Test your decision-making skills under pressure. Make quick choices and see how your risk tolerance affects your performance. Compare your decision patterns with others.",
            keywords: "decision making test, risk tolerance test, cognitive decision, human benchmark, decision test, risk assessment",
            path: "/decision-making",
            image: None,
        },
        PageConfig {
            key: "personalityQuiz",
            title: "Personality Quiz - Human Benchmark",
            description: "Discover your personality traits with our comprehensive assessment. Understand your cognitive preferences and see how they relate to your test performance.",
            keywords: "personality quiz, personality test, cognitive assessment, trait analysis, human benchmark, personality assessment",
            path: "/personality-quiz",
            image: None,
        },
        PageConfig {
            key: "leaderboard",
            title: "Global Leaderboards - Human Benchmark",
            description: "Compare your cognitive test scores with players worldwide. See where you rank in reaction time, memory, decision-making, and personality traits.",
            keywords: "leaderboard, global rankings, cognitive scores, human benchmark, score comparison, world rankings",
            path: "/leaderboard",
            image: None,
        },
        PageConfig {
            key: "about",
            title: "About Human Benchmark - Cognitive Testing Platform",
            description: "Learn about Human Benchmark's mission to provide comprehensive cognitive testing tools. Understand our methodology and commitment to mental fitness.",
            keywords: "about human benchmark, cognitive testing platform, mental fitness, brain training, human benchmark mission",
            path: "/about",
            image: None,
        },
        PageConfig {
            key: "features",
            title: "Features - Human Benchmark Cognitive Testing Platform",
            description: "Explore the comprehensive features of Human Benchmark. From reaction time tests to personality assessments, discover all the ways to challenge your mind.",
            keywords: "human benchmark features, cognitive testing features, brain training tools, mental assessment features",
            path: "/features",
            image: None,
        },
    ],
};
