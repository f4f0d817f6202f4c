//! Category Scanner - Reconciliation and Report Assembly
//!
//! The top-level use case:
//! 1. Collects the venue asset set (never fatal)
//! 2. Fetches all provider categories (fatal on failure)
//! 3. Sorts them by market cap, largest first
//! 4. Retains those passing the category filter
//! 5. Fetches each retained category's constituents and keeps the
//!    symbols tradable on the venue
//!
//! A constituent fetch failure either skips that category or aborts the
//! scan, depending on the configured policy. An aborted scan still hands
//! back the blocks completed before the failure.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::config::MemberErrorPolicy;
use crate::domain::category::{sort_by_market_cap, Category, CategoryFilter};
use crate::domain::report::{CategoryFailure, CategoryReport, ScanReport};
use crate::domain::venue::VenueAssetSet;
use crate::error::ScanError;
use crate::ports::category_source::CategorySource;
use crate::ports::instrument_source::InstrumentSource;

use super::venue_collector::VenueCollector;

/// Runs a full category scan against a provider and a venue.
pub struct CategoryScanner<C: CategorySource, S: InstrumentSource> {
  /// Provider categories port.
  categories: Arc<C>,
  /// Venue asset collector.
  collector: VenueCollector<S>,
  /// Retention rules.
  filter: CategoryFilter,
  /// Constituent fetch failure handling.
  policy: MemberErrorPolicy,
}

impl<C: CategorySource, S: InstrumentSource> CategoryScanner<C, S> {
  /// Create a new scanner.
  pub fn new(
    categories: Arc<C>,
    collector: VenueCollector<S>,
    filter: CategoryFilter,
    policy: MemberErrorPolicy,
  ) -> Self {
    Self {
      categories,
      collector,
      filter,
      policy,
    }
  }

  /// Run the scan end to end.
  ///
  /// # Errors
  /// `ScanError::Categories` if the category list cannot be fetched;
  /// `ScanError::Members` on the first constituent failure under
  /// `MemberErrorPolicy::Abort`, carrying the blocks reconciled before it.
  #[instrument(skip(self), fields(policy = ?self.policy))]
  pub async fn run(&self) -> Result<ScanReport, ScanError> {
    let venue = self.collector.collect().await;
    if venue.failed_markets() > 0 {
      warn!(
        failed = venue.failed_markets(),
        "Venue asset set is partial; some constituents may be missing from the report"
      );
    }

    let categories = self
      .categories
      .fetch_categories()
      .await
      .map_err(ScanError::Categories)?;

    let selected = self.select(categories);
    info!(retained = selected.len(), "Categories selected for report");

    self.reconcile(selected, &venue.assets).await
  }

  /// Sort by market cap and keep the categories passing the filter.
  pub fn select(&self, mut categories: Vec<Category>) -> Vec<Category> {
    sort_by_market_cap(&mut categories);
    categories
      .into_iter()
      .filter(|c| match self.filter.rejection(c) {
        Some(reason) => {
          debug!(id = %c.id, name = %c.name, %reason, "Category skipped");
          false
        }
        None => {
          let label = self.filter.allow_list().label(&c.id).unwrap_or_default();
          debug!(id = %c.id, name = %c.name, label, "Category retained");
          true
        }
      })
      .collect()
  }

  /// Fetch constituents of each selected category and intersect them
  /// with the venue asset set, preserving order.
  async fn reconcile(
    &self,
    selected: Vec<Category>,
    venue: &VenueAssetSet,
  ) -> Result<ScanReport, ScanError> {
    let mut report = ScanReport {
      venue_assets: venue.len(),
      ..ScanReport::default()
    };

    for category in selected {
      match self.categories.fetch_members(&category.id).await {
        Ok(members) => {
          let block = CategoryReport::reconcile(category, &members, venue);
          if block.category.num_tokens as usize > block.members_fetched {
            debug!(
              id = %block.category.id,
              num_tokens = block.category.num_tokens,
              fetched = block.members_fetched,
              "Category membership truncated at page size"
            );
          }
          debug!(
            id = %block.category.id,
            coins = block.coins.len(),
            "Category reconciled"
          );
          report.categories.push(block);
        }
        Err(source) => match self.policy {
          MemberErrorPolicy::Abort => {
            return Err(ScanError::Members {
              id: category.id,
              source,
              completed: Box::new(report),
            });
          }
          MemberErrorPolicy::Skip => {
            warn!(id = %category.id, error = %source, "Category members fetch failed, skipping");
            report.failures.push(CategoryFailure {
              id: category.id,
              name: category.name,
              error: source.to_string(),
            });
          }
        },
      }
    }

    info!(
      reported = report.categories.len(),
      failed = report.failures.len(),
      "Scan complete"
    );
    Ok(report)
  }
}
