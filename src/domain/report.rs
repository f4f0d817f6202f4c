//! Report assembly and text rendering.
//!
//! A [`CategoryReport`] pairs a retained category with the constituent
//! symbols that are tradable on the venue. Rendering uses the default
//! float formatting; the precision is not a stable contract.

use std::fmt;

use super::category::{Category, CategoryId, CategoryMember};
use super::venue::VenueAssetSet;

/// One report block: a category and its venue-tradable constituents.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    /// The retained category.
    pub category: Category,
    /// Constituent symbols present on the venue, in provider order.
    pub coins: Vec<String>,
    /// Number of constituents returned by the provider.
    pub members_fetched: usize,
}

impl CategoryReport {
    /// Keep the members whose symbol is tradable on the venue.
    pub fn reconcile(
        category: Category,
        members: &[CategoryMember],
        venue: &VenueAssetSet,
    ) -> Self {
        let coins = members
            .iter()
            .filter(|m| venue.contains(&m.symbol))
            .map(|m| m.symbol.clone())
            .collect();

        Self {
            category,
            coins,
            members_fetched: members.len(),
        }
    }
}

impl fmt::Display for CategoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.category;
        writeln!(f)?;
        writeln!(f, "Category: {}[{}] ({})", c.name, c.num_tokens, c.title)?;
        writeln!(f, "ID: {}", c.id)?;
        writeln!(f, "Description: {}", c.description)?;
        writeln!(
            f,
            "MarketCap B: {} (24h change: {})",
            c.market_cap_billions(),
            c.market_cap_change
        )?;
        writeln!(
            f,
            "Vol B: {} (24h change: {})",
            c.volume_billions(),
            c.volume_change
        )?;
        writeln!(f, "Coins: [{}]", self.coins.join(", "))
    }
}

/// A retained category whose membership could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFailure {
    pub id: CategoryId,
    pub name: String,
    /// Rendered fetch error.
    pub error: String,
}

impl fmt::Display for CategoryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.id, self.error)
    }
}

/// Outcome of a full scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanReport {
    /// Report blocks in market cap order.
    pub categories: Vec<CategoryReport>,
    /// Retained categories that were skipped after a fetch failure.
    pub failures: Vec<CategoryFailure>,
    /// Size of the venue asset set used for reconciliation.
    pub venue_assets: usize,
}

impl ScanReport {
    /// True when every retained category made it into the report.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.categories {
            write!(f, "{block}")?;
        }
        Ok(())
    }
}
