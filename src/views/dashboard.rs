//! Fleet overview: summary tiles, search and clinic cards

use super::format::{percent_label, progress_bar, progress_width, usage_label};
use crate::core::stats::{ClinicStats, FleetSummary};
use crate::domain::ClinicRecord;
use std::fmt;

/// Clinics whose name or phone contains `term`, ignoring case
///
/// An empty (or whitespace-only) term keeps everything. Order is preserved.
pub fn filter_clinics<'a>(records: &'a [ClinicRecord], term: &str) -> Vec<&'a ClinicRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.phone_number.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Dashboard screen over a loaded collection
///
/// Summary tiles always describe the whole collection; the card list shows
/// only what matches the search term.
pub struct DashboardView<'a> {
    records: &'a [ClinicRecord],
    search_term: &'a str,
}

impl<'a> DashboardView<'a> {
    pub fn new(records: &'a [ClinicRecord], search_term: &'a str) -> Self {
        Self {
            records,
            search_term,
        }
    }

    /// Cards that pass the current filter
    pub fn visible(&self) -> Vec<&'a ClinicRecord> {
        filter_clinics(self.records, self.search_term)
    }

    fn searching(&self) -> bool {
        !self.search_term.trim().is_empty()
    }
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = FleetSummary::of(self.records);

        writeln!(f, "📊 FluxiMed Dashboard")?;
        writeln!(f, "   AI assistant management for clinics")?;
        writeln!(f)?;
        writeln!(
            f,
            "   Active clinics:  {:<6} {} clinics registered",
            summary.total_clinics, summary.total_clinics
        )?;
        writeln!(f, "   Active chats:    {}", summary.total_chats)?;
        writeln!(f, "   Total messages:  {}", summary.total_messages)?;
        writeln!(
            f,
            "   Average usage:   {}",
            percent_label(summary.average_usage)
        )?;
        writeln!(f)?;

        if self.searching() {
            writeln!(f, "🔍 Search: \"{}\"", self.search_term.trim())?;
            writeln!(f)?;
        }

        let visible = self.visible();
        if visible.is_empty() {
            writeln!(f, "   No clinics found")?;
            if self.searching() {
                writeln!(f, "   Try adjusting your search")?;
            } else {
                writeln!(f, "   Start by adding your first clinic")?;
            }
            return Ok(());
        }

        for (i, record) in visible.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", ClinicCard(record))?;
        }
        Ok(())
    }
}

/// One clinic summary as shown in the card grid
pub struct ClinicCard<'a>(pub &'a ClinicRecord);

impl fmt::Display for ClinicCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        let stats = ClinicStats::of(record);

        writeln!(f, "🏥 {}  [{}]", record.name, stats.status.label())?;
        writeln!(f, "   📞 {}  ({})", record.phone_number, record.id)?;
        writeln!(
            f,
            "   {} / {}  {} {} used",
            record.messages_used,
            record.monthly_limit,
            progress_bar(progress_width(stats.usage_ratio)),
            usage_label(stats.usage_ratio)
        )?;
        writeln!(
            f,
            "   💬 {} chats  ✉️  {} messages  📈 +{}%",
            stats.active_chats, stats.total_messages, stats.growth
        )
    }
}

/// Renders the dashboard to a string
pub fn render_dashboard(records: &[ClinicRecord], search_term: &str) -> String {
    DashboardView::new(records, search_term).to_string()
}
