// ── Batched parameter writes ──
//
// The device caps how many parameters one SET call may carry, so a
// params mapping is sliced into near-equal contiguous chunks and sent
// one call at a time, in order. A transport failure aborts the remaining
// chunks: a batch either completes fully or stops where it failed.

use scorpion_api::{ParamMap, Record, ScorpionClient};
use tracing::{debug, warn};

use crate::error::CoreError;

/// Device-imposed ceiling on keys per SET call.
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Aggregated outcome of a chunked write.
#[derive(Debug, Default, serde::Serialize)]
pub struct BatchResult {
    /// Every record the device returned, in call order.
    pub responses: Vec<Record>,
    /// The subset of `responses` with a per-parameter error set.
    pub failures: Vec<Record>,
}

impl BatchResult {
    /// Fold another result into this one, preserving order.
    pub fn merge(&mut self, other: BatchResult) {
        self.responses.extend(other.responses);
        self.failures.extend(other.failures);
    }

    /// `true` if every parameter was accepted.
    pub fn all_applied(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Slice `params` into contiguous chunks of near-equal size.
///
/// The chunk count is the minimum that respects `max_keys`; sizes then
/// rebalance so no two chunks differ by more than one key (15 keys with
/// a ceiling of 10 become 8 + 7, not 10 + 5; 25 become 9 + 8 + 8).
/// Concatenating the chunks yields the original keys in their original
/// order.
fn split_params(params: &ParamMap, max_keys: usize) -> Vec<ParamMap> {
    if params.is_empty() {
        return Vec::new();
    }

    let num_chunks = params.len().div_ceil(max_keys);
    let base = params.len() / num_chunks;
    let remainder = params.len() % num_chunks;

    let mut chunks = Vec::with_capacity(num_chunks);
    let mut entries = params.iter();
    for i in 0..num_chunks {
        let take = if i < remainder { base + 1 } else { base };
        chunks.push(
            entries
                .by_ref()
                .take(take)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        );
    }
    chunks
}

/// Send `params` to the device in bounded chunks.
///
/// Chunks go out strictly in slice order and every response is logged as
/// it arrives. Records carrying a device-side error are collected into
/// `failures` without aborting the batch; a transport failure aborts the
/// remaining chunks and surfaces as `Err`.
pub async fn dispatch(
    client: &ScorpionClient,
    params: &ParamMap,
    max_keys: usize,
) -> Result<BatchResult, CoreError> {
    let chunks = split_params(params, max_keys);
    let total = chunks.len();
    let mut result = BatchResult::default();

    for (i, chunk) in chunks.iter().enumerate() {
        let records = client.post(chunk).await?;
        debug!(
            chunk = i + 1,
            total,
            applied = records.len(),
            "parameter chunk applied"
        );
        for record in &records {
            if let Some(ref error) = record.error {
                warn!(id = %record.id, %error, "device rejected parameter");
            }
        }
        result
            .failures
            .extend(records.iter().filter(|r| r.error.is_some()).cloned());
        result.responses.extend(records);
    }

    Ok(result)
}
