//! Company name matching for news queries.
//!
//! News items carry a free-text `companies` list written by the ingestion
//! pipeline, so names arrive with inconsistent casing, stray whitespace and
//! corporate suffixes ("Tata Motors Limited", "tata motors ltd."). The
//! [`CompanyMatcher`] reduces both sides to a comparable form and decides
//! whether a candidate plausibly refers to the queried company.
//!
//! Matching is loose by default: substring containment in either
//! direction counts as a hit, so short or common names will over-match.
//! [`MatchMode::Strict`] only accepts equality.

use regex::Regex;

/// Corporate suffixes stripped from the end of a name, in evaluation order
pub const COMPANY_SUFFIXES: &[&str] = &[
    "Limited",
    "Ltd",
    "Ltd.",
    "Incorporated",
    "Inc.",
    "Inc",
    "Corporation",
    "Corp.",
    "Corp",
    "Private",
    "Pvt.",
    "Pvt",
];

/// How candidates are compared against a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Equality or substring containment in either direction
    #[default]
    Loose,
    /// Equality of either the full or the suffix-stripped name
    Strict,
}

impl From<bool> for MatchMode {
    fn from(strict: bool) -> Self {
        if strict {
            MatchMode::Strict
        } else {
            MatchMode::Loose
        }
    }
}

/// Company name matcher
#[derive(Debug, Clone)]
pub struct CompanyMatcher {
    suffix: Regex,
    mode: MatchMode,
}

impl Default for CompanyMatcher {
    fn default() -> Self {
        CompanyMatcher::new(MatchMode::default())
    }
}

impl CompanyMatcher {
    /// Build a matcher for the given mode
    pub fn new(mode: MatchMode) -> CompanyMatcher {
        let alternatives = COMPANY_SUFFIXES
            .iter()
            .map(|suffix| regex::escape(suffix))
            .collect::<Vec<String>>()
            .join("|");

        CompanyMatcher {
            suffix: Regex::new(&format!(r"(?i)\s+(?:{alternatives})\s*$"))
                .expect("suffix pattern is valid"),
            mode,
        }
    }

    /// Current match mode
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Reduce a company name to its comparable main form
    ///
    /// Trims, strips trailing corporate suffixes and lower-cases. Suffixes are
    /// stripped repeatedly ("Foo Pvt Ltd" becomes "foo") so that normalising a
    /// normalised name is a no-op.
    pub fn normalize(&self, name: &str) -> String {
        let mut main = name.trim();
        while let Some(found) = self.suffix.find(main) {
            main = main[..found.start()].trim();
        }

        main.to_lowercase()
    }

    /// Prepare a query for repeated matching
    pub fn query<'a>(&'a self, query: &str) -> CompanyQuery<'a> {
        CompanyQuery {
            matcher: self,
            full: query.trim().to_lowercase(),
            main: self.normalize(query),
        }
    }

    /// Check whether `candidate` plausibly refers to the company in `query`
    pub fn matches(&self, query: &str, candidate: &str) -> bool {
        self.query(query).matches(candidate)
    }
}

/// Query with its normalised forms computed once
#[derive(Debug, Clone)]
pub struct CompanyQuery<'a> {
    matcher: &'a CompanyMatcher,
    full: String,
    main: String,
}

impl CompanyQuery<'_> {
    /// Whether the query is blank and therefore cannot be matched meaningfully
    pub fn is_blank(&self) -> bool {
        self.full.is_empty()
    }

    /// Check a single candidate name against this query
    pub fn matches(&self, candidate: &str) -> bool {
        let candidate_full = candidate.trim().to_lowercase();
        if candidate_full.is_empty() {
            return false;
        }

        let candidate_main = self.matcher.normalize(candidate);
        if candidate_full == self.full || candidate_main == self.main {
            return true;
        }

        match self.matcher.mode {
            MatchMode::Strict => false,
            MatchMode::Loose => {
                contains_either(&candidate_full, &self.main)
                    || contains_either(&candidate_main, &self.main)
            }
        }
    }

    /// Check whether any of the given names matches this query
    pub fn matches_any<'n, I>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = &'n String>,
    {
        names.into_iter().any(|name| self.matches(name))
    }
}

fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
