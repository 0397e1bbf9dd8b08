use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::classify::classify;
use crate::confirm::{Choice, Chooser};
use crate::model::{MemberRecord, Platform};
use crate::search::{build_query, SearchProvider};
use crate::store;

/// Courtesy pause before each search API call.
pub const SEARCH_DELAY: Duration = Duration::from_millis(1100);

/// Fill in `socials` for every member, platform by platform, saving the whole
/// collection after each member so a restart resumes where it left off.
///
/// A failed search or an operator skip moves on to the next platform; the one
/// fatal condition is a failed save, which aborts the batch rather than keep
/// collecting confirmations that would be lost.
pub async fn enrich_members<S: SearchProvider, C: Chooser>(
    members: &mut Vec<MemberRecord>,
    search: &S,
    chooser: &mut C,
    path: &Path,
    delay: Duration,
) -> Result<()> {
    let total = members.len();

    for index in 0..total {
        let name = members[index].name.clone();
        info!("Member {}/{}: {}", index + 1, total, name);

        for platform in Platform::ALL {
            if let Some(Some(existing)) = members[index].socials.get(&platform) {
                info!("  Skipping {platform} (already present: {existing})");
                continue;
            }

            let query = build_query(platform, &name);
            info!("  Searching: {query}");
            tokio::time::sleep(delay).await;

            let links = match search.search(&query).await {
                Ok(links) => links,
                Err(e) => {
                    warn!("  Search failed for {platform}: {e:#}. Skipping.");
                    continue;
                }
            };

            let mut seen = HashSet::new();
            let candidates: Vec<String> = links
                .iter()
                .filter_map(|link| classify(link, platform.domain()))
                .filter(|url| seen.insert(url.clone()))
                .collect();

            let selected = match chooser.choose(&name, platform, &candidates) {
                Choice::Pick(i) => candidates.get(i).cloned(),
                Choice::Manual(url) => Some(url),
                Choice::Skip => None,
            };
            members[index].socials.insert(platform, selected);
        }

        // Per-member durability: lose at most one member's confirmations.
        store::save(path, members)
            .with_context(|| format!("Failed to save progress after {name}"))?;
    }
    Ok(())
}
