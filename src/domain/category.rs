//! Provider categories and their constituents.
//!
//! A category is an immutable snapshot of the provider's thematic grouping
//! (market cap, volume, token count). Selection happens in two steps that
//! never touch category content: [`sort_by_market_cap`] reorders, and
//! [`CategoryFilter`] decides retention.

use super::allow_list::AllowList;

/// Opaque provider category identifier.
pub type CategoryId = String;

/// One provider category with its aggregate statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Provider identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Number of constituent tokens.
    pub num_tokens: u32,
    /// Average 24h price change of the constituents.
    pub avg_price_change: f64,
    /// Aggregate market capitalization (USD).
    pub market_cap: f64,
    /// Market cap 24h percentage change.
    pub market_cap_change: f64,
    /// Aggregate 24h trading volume (USD).
    pub volume: f64,
    /// Volume 24h percentage change.
    pub volume_change: f64,
}

impl Category {
    /// Market capitalization in billions, for display.
    pub fn market_cap_billions(&self) -> f64 {
        self.market_cap / 1_000_000_000.0
    }

    /// Trading volume in billions, for display.
    pub fn volume_billions(&self) -> f64 {
        self.volume / 1_000_000_000.0
    }
}

/// A constituent asset of a category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMember {
    /// Ticker symbol.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// 24h trading volume (quote currency).
    pub volume_24h: f64,
    /// Market capitalization (quote currency).
    pub market_cap: f64,
}

/// Sort categories by market capitalization, largest first.
///
/// Stable: categories with equal market cap keep their fetch order.
pub fn sort_by_market_cap(categories: &mut [Category]) {
    categories.sort_by(|a, b| b.market_cap.total_cmp(&a.market_cap));
}

/// Why a category was left out of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The category has no constituent tokens.
    NoTokens,
    /// The display name matched an excluded substring.
    ExcludedName,
    /// The identifier is absent from the allow-list.
    NotAllowed,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTokens => write!(f, "no tokens"),
            Self::ExcludedName => write!(f, "excluded name"),
            Self::NotAllowed => write!(f, "not allow-listed"),
        }
    }
}

/// Retention rules applied to sorted categories.
///
/// Rules are checked in order: token count, excluded name substrings
/// (case-insensitive), allow-list membership.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    /// Lowercased substrings that exclude a category by name.
    excluded_names: Vec<String>,
    /// Identifiers eligible for the report.
    allow_list: AllowList,
}

impl CategoryFilter {
    /// Build a filter from excluded name substrings and an allow-list.
    pub fn new<I, S>(excluded_names: I, allow_list: AllowList) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            excluded_names: excluded_names
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
            allow_list,
        }
    }

    /// The allow-list backing this filter.
    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    /// First rule the category fails, if any.
    pub fn rejection(&self, category: &Category) -> Option<Rejection> {
        if category.num_tokens == 0 {
            return Some(Rejection::NoTokens);
        }

        let name = category.name.to_lowercase();
        if self.excluded_names.iter().any(|ex| name.contains(ex.as_str())) {
            return Some(Rejection::ExcludedName);
        }

        if !self.allow_list.contains(&category.id) {
            return Some(Rejection::NotAllowed);
        }

        None
    }

    /// Whether the category belongs in the report.
    pub fn retains(&self, category: &Category) -> bool {
        self.rejection(category).is_none()
    }
}

#[cfg(test)]
pub(crate) fn category(id: &str, name: &str, num_tokens: u32, market_cap: f64) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        title: name.to_string(),
        description: String::new(),
        num_tokens,
        avg_price_change: 0.0,
        market_cap,
        market_cap_change: 0.0,
        volume: 0.0,
        volume_change: 0.0,
    }
}
