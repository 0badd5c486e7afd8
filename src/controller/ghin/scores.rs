use std::collections::HashSet;

use ahash::RandomState;
use log::{debug, warn};

use super::client::GhinClient;
use crate::error::CoreError;
use crate::model::{Round, ScoresPage, Session};

pub const SCORES_PER_PAGE: usize = 50;

// A full history is a few pages; a service that keeps over-stating
// total_count while returning full batches gets cut off here.
const MAX_SCORE_PAGES: usize = 200;

/// Walks the score history page by page until the declared total is
/// reached or a short page comes back. Pages are requested sequentially
/// since each page's necessity depends on the previous response. Rounds
/// whose id was already seen are dropped; rounds without ids are kept.
///
/// # Errors
///
/// Will return `Err` if any page request fails or decodes badly
pub async fn fetch_all_scores(
    client: &GhinClient,
    session: &Session,
) -> Result<Vec<Round>, CoreError> {
    let mut rounds: Vec<Round> = Vec::new();
    let mut seen_ids: HashSet<i64, RandomState> = HashSet::default();
    let mut fetched = 0usize;
    let mut page = 1usize;

    loop {
        let query = [
            ("golfer_id", session.golfer_id.clone()),
            ("per_page", SCORES_PER_PAGE.to_string()),
            ("page", page.to_string()),
        ];
        let resp: ScoresPage = client
            .get("scores.json", &query, Some(&session.token))
            .await?;

        let batch_len = resp.scores.len();
        fetched += batch_len;
        debug!("scores page {page}: {batch_len} rounds");

        for round in resp.scores {
            match round.id {
                Some(id) if !seen_ids.insert(id) => {}
                _ => rounds.push(round),
            }
        }

        // Termination tracks the raw fetched count, so dropping duplicates
        // never changes which pages get requested.
        let total = usize::try_from(resp.total_count.unwrap_or(0)).unwrap_or(0);
        if fetched >= total || batch_len < SCORES_PER_PAGE {
            break;
        }
        if page >= MAX_SCORE_PAGES {
            warn!("score history still incomplete after {MAX_SCORE_PAGES} pages, stopping");
            break;
        }
        page += 1;
    }

    Ok(rounds)
}
