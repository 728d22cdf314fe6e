use super::prelude::*;

/// Moderation-side listing search: case-insensitive free text over
/// title, area and city plus an optional status constraint. The `"all"`
/// status choice of the dashboard maps to `None` at the boundary.
pub fn moderation_queue(
    listings: &[Listing],
    text: Option<&str>,
    status: Option<ModerationStatus>,
) -> Vec<Listing> {
    let needle = text
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);
    listings
        .iter()
        .filter(|l| {
            if let Some(ref needle) = needle {
                let matched = l.title.to_lowercase().contains(needle)
                    || l.area.to_lowercase().contains(needle)
                    || l.city.to_lowercase().contains(needle);
                if !matched {
                    return false;
                }
            }
            if let Some(status) = status {
                if l.status != status {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}
