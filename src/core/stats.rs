//! Usage statistics derived from clinic records
//!
//! Everything here is a pure function over [`ClinicRecord`] values. Aggregates
//! that would divide by zero return `None` instead of NaN or infinity, and
//! the views render that as "N/A".

use crate::domain::ClinicRecord;

/// Usage percentage at which a clinic is flagged as close to its quota
pub const HIGH_USAGE_PERCENT: f64 = 90.0;

/// Usage percentage at which a clinic is flagged as elevated
pub const ELEVATED_USAGE_PERCENT: f64 = 70.0;

/// Consumed messages divided by the monthly quota
///
/// The ratio is not clamped: a clinic that overran its quota yields a value
/// above 1.0. Returns `None` when the quota is zero.
///
/// # Examples
///
/// ```
/// use fluximed::core::stats::usage_ratio;
/// use fluximed::domain::ClinicRecord;
///
/// let clinic = ClinicRecord::builder()
///     .id("clinica-01").unwrap()
///     .name("Clínica São João")
///     .phone_number("(11) 99999-9999")
///     .messages_used(450)
///     .monthly_limit(1000)
///     .build()
///     .unwrap();
///
/// assert_eq!(usage_ratio(&clinic), Some(0.45));
/// ```
pub fn usage_ratio(record: &ClinicRecord) -> Option<f64> {
    if record.monthly_limit == 0 {
        return None;
    }
    Some(record.messages_used as f64 / record.monthly_limit as f64)
}

/// [`usage_ratio`] expressed as a percentage
pub fn usage_percent(record: &ClinicRecord) -> Option<f64> {
    usage_ratio(record).map(|ratio| ratio * 100.0)
}

/// Number of chat threads the clinic holds
pub fn active_chat_count(record: &ClinicRecord) -> usize {
    record.chats.len()
}

/// Number of messages across all of the clinic's chats
pub fn total_message_count(record: &ClinicRecord) -> usize {
    record.chats.iter().map(|chat| chat.messages.len()).sum()
}

/// Messages left in the quota; negative once the clinic overran it
pub fn remaining_messages(record: &ClinicRecord) -> i64 {
    record.monthly_limit as i64 - record.messages_used as i64
}

/// Mean usage percentage across clinics
///
/// Clinics whose usage is undefined (zero quota) are left out of the mean.
/// Returns `None` for an empty collection or when no clinic has a defined
/// usage.
pub fn fleet_average_usage(records: &[ClinicRecord]) -> Option<f64> {
    let percents: Vec<f64> = records.iter().filter_map(usage_percent).collect();
    if percents.is_empty() {
        return None;
    }
    Some(percents.iter().sum::<f64>() / percents.len() as f64)
}

/// Chat threads across all clinics
pub fn fleet_chat_count(records: &[ClinicRecord]) -> usize {
    records.iter().map(active_chat_count).sum()
}

/// Messages across all clinics
pub fn fleet_message_count(records: &[ClinicRecord]) -> usize {
    records.iter().map(total_message_count).sum()
}

/// Cosmetic "growth" figure shown on clinic cards
///
/// This is NOT an analytics signal. It is a stable placeholder derived only
/// from the clinic id so the card shows the same number on every render. The
/// id's UTF-16 code units are folded as `acc = acc * 31 + unit` with 32-bit
/// signed wraparound, and the absolute value is reduced modulo 25, giving a
/// value in `0..=24`.
///
/// # Examples
///
/// ```
/// use fluximed::core::stats::growth_indicator;
///
/// assert_eq!(growth_indicator("clinica-01"), 18);
/// assert_eq!(growth_indicator("clinica-01"), growth_indicator("clinica-01"));
/// ```
pub fn growth_indicator(id: &str) -> u8 {
    let hash = id
        .encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)));
    // i32::MIN has no i32 absolute value
    (i64::from(hash).abs() % 25) as u8
}

/// How close a clinic is to its quota
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    /// Below 70 %
    Normal,
    /// 70 % up to 90 %
    Elevated,
    /// 90 % and above
    High,
}

impl UsageLevel {
    /// Classifies a usage percentage
    pub fn from_percent(percent: f64) -> Self {
        if percent >= HIGH_USAGE_PERCENT {
            UsageLevel::High
        } else if percent >= ELEVATED_USAGE_PERCENT {
            UsageLevel::Elevated
        } else {
            UsageLevel::Normal
        }
    }

    /// Classifies a clinic; undefined usage counts as normal
    pub fn of(record: &ClinicRecord) -> Self {
        usage_percent(record)
            .map(Self::from_percent)
            .unwrap_or(UsageLevel::Normal)
    }
}

/// Badge shown on a clinic card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClinicStatus {
    /// Usage at or above 90 %
    HighUsage,
    /// At least one chat
    Online,
    /// No chats yet
    Standby,
}

impl ClinicStatus {
    /// Derives the badge for a clinic
    pub fn of(record: &ClinicRecord) -> Self {
        if UsageLevel::of(record) == UsageLevel::High {
            ClinicStatus::HighUsage
        } else if active_chat_count(record) > 0 {
            ClinicStatus::Online
        } else {
            ClinicStatus::Standby
        }
    }

    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            ClinicStatus::HighUsage => "High usage",
            ClinicStatus::Online => "Online",
            ClinicStatus::Standby => "Standby",
        }
    }
}

/// Per-clinic figures shown on cards and the detail header
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicStats {
    pub usage_ratio: Option<f64>,
    pub active_chats: usize,
    pub total_messages: usize,
    pub remaining: i64,
    pub growth: u8,
    pub level: UsageLevel,
    pub status: ClinicStatus,
}

impl ClinicStats {
    /// Computes every per-clinic figure in one pass
    pub fn of(record: &ClinicRecord) -> Self {
        Self {
            usage_ratio: usage_ratio(record),
            active_chats: active_chat_count(record),
            total_messages: total_message_count(record),
            remaining: remaining_messages(record),
            growth: growth_indicator(record.id.as_str()),
            level: UsageLevel::of(record),
            status: ClinicStatus::of(record),
        }
    }

    /// Usage percentage, if defined
    pub fn usage_percent(&self) -> Option<f64> {
        self.usage_ratio.map(|ratio| ratio * 100.0)
    }
}

/// Figures for the dashboard summary tiles
#[derive(Debug, Clone, PartialEq)]
pub struct FleetSummary {
    pub total_clinics: usize,
    pub total_chats: usize,
    pub total_messages: usize,
    pub average_usage: Option<f64>,
}

impl FleetSummary {
    /// Aggregates the whole collection
    pub fn of(records: &[ClinicRecord]) -> Self {
        Self {
            total_clinics: records.len(),
            total_chats: fleet_chat_count(records),
            total_messages: fleet_message_count(records),
            average_usage: fleet_average_usage(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatThread, Message};
    use test_case::test_case;

    fn clinic(id: &str, used: u64, limit: u64) -> ClinicRecord {
        ClinicRecord::builder()
            .id(id)
            .unwrap()
            .name(format!("Clinic {id}"))
            .phone_number("(11) 90000-0000")
            .messages_used(used)
            .monthly_limit(limit)
            .build()
            .unwrap()
    }

    #[test_case(450, 1000, Some(0.45) ; "under quota")]
    #[test_case(1050, 1500, Some(0.7) ; "seventy percent")]
    #[test_case(1200, 1000, Some(1.2) ; "overrun is not clamped")]
    #[test_case(0, 500, Some(0.0) ; "unused")]
    #[test_case(10, 0, None ; "zero quota is undefined")]
    fn test_usage_ratio(used: u64, limit: u64, expected: Option<f64>) {
        assert_eq!(usage_ratio(&clinic("c", used, limit)), expected);
    }

    #[test]
    fn test_counts() {
        let record = ClinicRecord::builder()
            .id("clinica-01")
            .unwrap()
            .name("x")
            .phone_number("y")
            .monthly_limit(100)
            .chat(ChatThread::new(
                "Maria",
                vec![Message::user("a"), Message::assistant("b"), Message::user("c")],
            ))
            .chat(ChatThread::new("João", vec![]))
            .build()
            .unwrap();

        assert_eq!(active_chat_count(&record), 2);
        assert_eq!(total_message_count(&record), 3);
    }

    #[test]
    fn test_remaining_can_go_negative() {
        assert_eq!(remaining_messages(&clinic("c", 120, 500)), 380);
        assert_eq!(remaining_messages(&clinic("c", 1100, 1000)), -100);
    }

    #[test]
    fn test_fleet_average_empty_is_undefined() {
        assert_eq!(fleet_average_usage(&[]), None);
    }

    #[test]
    fn test_fleet_average_skips_zero_quota() {
        let records = vec![clinic("a", 500, 1000), clinic("b", 10, 0), clinic("c", 100, 1000)];
        let average = fleet_average_usage(&records).unwrap();
        assert!((average - 30.0).abs() < 1e-9);

        assert_eq!(fleet_average_usage(&[clinic("z", 1, 0)]), None);
    }

    #[test_case("clinica-01", 18)]
    #[test_case("clinica-02", 19)]
    #[test_case("clinica-03", 20)]
    #[test_case("", 0 ; "empty id")]
    #[test_case("a", 22)]
    #[test_case("clínica-sul", 17 ; "negative accumulator")]
    #[test_case("polygenelubricants", 23 ; "accumulator lands on i32 min")]
    fn test_growth_indicator(id: &str, expected: u8) {
        assert_eq!(growth_indicator(id), expected);
    }

    #[test]
    fn test_growth_indicator_range() {
        for id in ["x", "clinica-99", "Ωmega", "😀 emoji", "a-very-long-clinic-identifier-123456"] {
            let value = growth_indicator(id);
            assert!(value <= 24, "{id} -> {value}");
            assert_eq!(value, growth_indicator(id));
        }
    }

    #[test_case(45.0, UsageLevel::Normal)]
    #[test_case(70.0, UsageLevel::Elevated)]
    #[test_case(89.9, UsageLevel::Elevated)]
    #[test_case(90.0, UsageLevel::High)]
    #[test_case(140.0, UsageLevel::High)]
    fn test_usage_level(percent: f64, expected: UsageLevel) {
        assert_eq!(UsageLevel::from_percent(percent), expected);
    }

    #[test]
    fn test_status_badge() {
        assert_eq!(ClinicStatus::of(&clinic("a", 950, 1000)), ClinicStatus::HighUsage);
        assert_eq!(ClinicStatus::of(&clinic("b", 10, 1000)), ClinicStatus::Standby);
        assert_eq!(ClinicStatus::of(&clinic("c", 10, 0)), ClinicStatus::Standby);

        let mut online = clinic("d", 10, 1000);
        online.chats.push(ChatThread::new("Ana", vec![]));
        assert_eq!(ClinicStatus::of(&online), ClinicStatus::Online);
    }

    #[test]
    fn test_fleet_summary() {
        let mut a = clinic("a", 450, 1000);
        a.chats.push(ChatThread::new("Ana", vec![Message::user("oi")]));
        let summary = FleetSummary::of(&[a, clinic("b", 120, 500)]);

        assert_eq!(summary.total_clinics, 2);
        assert_eq!(summary.total_chats, 1);
        assert_eq!(summary.total_messages, 1);
        assert!((summary.average_usage.unwrap() - 34.5).abs() < 1e-9);
    }

    #[test]
    fn test_clinic_stats() {
        let stats = ClinicStats::of(&clinic("clinica-01", 450, 1000));
        assert_eq!(stats.usage_percent(), Some(45.0));
        assert_eq!(stats.remaining, 550);
        assert_eq!(stats.growth, 18);
        assert_eq!(stats.status, ClinicStatus::Standby);
    }
}
