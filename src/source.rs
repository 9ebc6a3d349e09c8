/// Synthetic catalog data source
///
/// Stand-in for a real network client: deterministic given `(cursor, size)`,
/// with a fixed sleep simulating latency. The page generator is a pure
/// function so the loader tests can drive the state machine without an
/// executor.
use crate::state::catalog::FetchError;
use crate::state::data::CatalogEntry;
use std::time::Duration;

/// Total number of entries in the bounded synthetic dataset.
pub const TOTAL_ENTRIES: usize = 60;

/// Simulated network latency per page fetch.
pub const FETCH_DELAY: Duration = Duration::from_millis(600);

/// Generate page `cursor` of a dataset with `total` entries.
///
/// Page `cursor` covers ids `cursor * size ..`, capped at `total`; past the
/// end the page is empty. The final page may be shorter than `size`.
pub fn synthetic_page(cursor: usize, size: usize, total: usize) -> Vec<CatalogEntry> {
    let start = cursor.saturating_mul(size).min(total);
    let end = start.saturating_add(size).min(total);
    (start..end).map(|id| make_entry(id as u64)).collect()
}

fn make_entry(id: u64) -> CatalogEntry {
    CatalogEntry {
        id,
        title: format!("Catalog item {:02}", id + 1),
        subtitle: format!("Collection {}, piece {}", id / 10 + 1, id % 10 + 1),
        image_ref: format!("asset://catalog/{id:03}.jpg"),
    }
}

/// Async wrapper around the generator, shaped like a real catalog client.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    total: usize,
    delay: Duration,
    fail_requests: bool,
}

impl SyntheticSource {
    pub fn new() -> Self {
        Self::with_dataset(TOTAL_ENTRIES, FETCH_DELAY)
    }

    pub fn with_dataset(total: usize, delay: Duration) -> Self {
        SyntheticSource {
            total,
            delay,
            fail_requests: false,
        }
    }

    /// A source whose every fetch fails, for exercising the error path.
    pub fn failing() -> Self {
        SyntheticSource {
            total: TOTAL_ENTRIES,
            delay: Duration::ZERO,
            fail_requests: true,
        }
    }

    /// Fetch one page after the simulated latency.
    pub async fn fetch_page(
        &self,
        cursor: usize,
        size: usize,
    ) -> Result<Vec<CatalogEntry>, FetchError> {
        tokio::time::sleep(self.delay).await;

        if self.fail_requests {
            return Err(FetchError {
                cursor,
                reason: "synthetic outage".to_string(),
            });
        }

        Ok(synthetic_page(cursor, size, self.total))
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_boundaries() {
        // 60 entries in pages of 8: seven full pages, a 4-entry tail, then
        // empty pages forever.
        for cursor in 0..7 {
            assert_eq!(synthetic_page(cursor, 8, 60).len(), 8);
        }
        assert_eq!(synthetic_page(7, 8, 60).len(), 4);
        assert!(synthetic_page(8, 8, 60).is_empty());
        assert!(synthetic_page(9, 8, 60).is_empty());
    }

    #[test]
    fn test_entries_are_deterministic_and_contiguous() {
        let first = synthetic_page(2, 8, 60);
        let second = synthetic_page(2, 8, 60);
        assert_eq!(first, second);

        let ids: Vec<u64> = first.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, (16..24).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn test_source_matches_generator() {
        let source = SyntheticSource::with_dataset(60, Duration::ZERO);
        let page = source.fetch_page(7, 8).await.unwrap();
        assert_eq!(page, synthetic_page(7, 8, 60));
    }

    #[tokio::test]
    async fn test_failing_source_reports_the_cursor() {
        let source = SyntheticSource::failing();
        let error = source.fetch_page(3, 8).await.unwrap_err();
        assert_eq!(error.cursor, 3);
    }
}
