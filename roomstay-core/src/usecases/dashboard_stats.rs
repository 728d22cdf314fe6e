use super::prelude::*;

/// Aggregates shown on the moderation dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub hidden: usize,
    pub verified: usize,
    pub total_views: u64,
}

pub fn dashboard_stats(listings: &[Listing]) -> DashboardStats {
    let mut stats = DashboardStats {
        total: listings.len(),
        ..Default::default()
    };
    for listing in listings {
        match listing.status {
            ModerationStatus::Approved => stats.approved += 1,
            ModerationStatus::Pending => stats.pending += 1,
            ModerationStatus::Hidden => stats.hidden += 1,
        }
        if listing.is_verified {
            stats.verified += 1;
        }
        stats.total_views += listing.views;
    }
    stats
}
