use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Category selection for the listing filter
///
/// A category is either a source platform or an attendance mode; both are
/// matched against the same filter axis. The known variants are the labels
/// offered in the filter bar. Anything else is kept verbatim as
/// `Unrecognized` and still compared against record labels, so a value such
/// as "Offline" or "HackerEarth" filters exactly like a known label would.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// No category filtering
    #[default]
    All,
    Devpost,
    Devfolio,
    Mlh,
    Unstop,
    Online,
    InPerson,
    /// A label outside the filter bar
    Unrecognized(String),
}

/// Filter bar entries in display order
pub const KNOWN_CATEGORIES: [Category; 7] = [
    Category::All,
    Category::Devpost,
    Category::Devfolio,
    Category::Mlh,
    Category::Unstop,
    Category::Online,
    Category::InPerson,
];

impl Category {
    /// The label this category compares against (and displays as)
    pub fn label(&self) -> &str {
        match self {
            Category::All => "all",
            Category::Devpost => "Devpost",
            Category::Devfolio => "Devfolio",
            Category::Mlh => "MLH",
            Category::Unstop => "Unstop",
            Category::Online => "Online",
            Category::InPerson => "In-Person",
            Category::Unrecognized(label) => label,
        }
    }

    /// Human-readable name for the filter bar
    pub fn display_name(&self) -> &str {
        match self {
            Category::All => "All Events",
            other => other.label(),
        }
    }

    /// Whether category filtering is off. An `Unrecognized("all")` built by
    /// hand carries the `All` label and counts as `All`.
    pub fn is_all(&self) -> bool {
        match self {
            Category::All => true,
            Category::Unrecognized(label) => label == Category::All.label(),
            _ => false,
        }
    }

    /// Whether this category is one of the filter bar entries
    pub fn is_recognized(&self) -> bool {
        self.is_all() || !matches!(self, Category::Unrecognized(_))
    }

    /// Case-insensitive exact comparison with a record label
    ///
    /// No trimming is applied. A missing label never matches.
    pub fn matches_label(&self, label: Option<&str>) -> bool {
        label.is_some_and(|label| label.to_lowercase() == self.label().to_lowercase())
    }
}

impl FromStr for Category {
    type Err = Infallible;

    /// Never fails: only the exact string "all" selects `All`, known labels are
    /// recognized case-insensitively, and everything else is `Unrecognized`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Category::All);
        }
        let lowered = s.to_lowercase();
        let known = KNOWN_CATEGORIES
            .iter()
            .skip(1)
            .find(|category| category.label().to_lowercase() == lowered)
            .cloned();
        Ok(known.unwrap_or_else(|| Category::Unrecognized(s.to_string())))
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
