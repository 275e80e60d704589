//! Single clinic view: header, tiles, chat list and transcript

use super::format::{display_time, percent_label};
use crate::core::stats::{ClinicStats, UsageLevel};
use crate::domain::{ChatThread, ClinicRecord};
use chrono::{DateTime, TimeZone};
use std::fmt;

/// Detail screen for one clinic
///
/// `now` anchors the synthesized message times, so rendering is
/// deterministic for a fixed clock.
pub struct DetailView<'a, Tz: TimeZone> {
    record: &'a ClinicRecord,
    selected_chat: Option<&'a str>,
    now: DateTime<Tz>,
}

impl<'a, Tz: TimeZone> DetailView<'a, Tz> {
    pub fn new(record: &'a ClinicRecord, selected_chat: Option<&'a str>, now: DateTime<Tz>) -> Self {
        Self {
            record,
            selected_chat,
            now,
        }
    }

    /// The selected thread, if the selection names an existing patient
    fn selected(&self) -> Option<&'a ChatThread> {
        self.selected_chat.and_then(|p| self.record.chat(p))
    }
}

impl<Tz> fmt::Display for DetailView<'_, Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        let stats = ClinicStats::of(record);
        let badge = if stats.active_chats > 0 { "Active" } else { "Standby" };

        writeln!(f, "🏥 {}  [{}]", record.name, badge)?;
        writeln!(f, "   📞 {}  ({})", record.phone_number, record.id)?;
        writeln!(f)?;
        writeln!(f, "   Active chats:    {}", stats.active_chats)?;
        writeln!(f, "   Total messages:  {}", stats.total_messages)?;
        writeln!(f, "   Quota usage:     {}", percent_label(stats.usage_percent()))?;
        writeln!(f, "   Remaining:       {}", stats.remaining)?;
        writeln!(f)?;

        writeln!(f, "💬 Conversations ({})", stats.active_chats)?;
        if record.chats.is_empty() {
            writeln!(f, "   No active conversations")?;
        }
        let selected = self.selected();
        for chat in &record.chats {
            let marker = match selected {
                Some(s) if s.patient == chat.patient => "▸",
                _ => " ",
            };
            writeln!(
                f,
                "  {} {:<24} {} messages",
                marker,
                chat.patient,
                chat.messages.len()
            )?;
        }
        writeln!(f)?;

        match selected {
            Some(chat) => {
                writeln!(f, "🗨️  Conversation with {}", chat.patient)?;
                if chat.is_empty() {
                    writeln!(f, "   No messages")?;
                }
                for (index, message) in chat.messages.iter().enumerate() {
                    let who = if message.role.is_user() {
                        "👤 Patient"
                    } else {
                        "🤖 Assistant"
                    };
                    writeln!(
                        f,
                        "   [{}] {}: {}",
                        display_time(message, index, &self.now),
                        who,
                        message.content
                    )?;
                }
            }
            None => {
                writeln!(f, "🗨️  Select a conversation")?;
                writeln!(f, "   FluxiMed AI Assistant")?;
                writeln!(f, "   Select a conversation to view the details")?;
            }
        }

        if stats.level == UsageLevel::High {
            writeln!(f)?;
            if stats.remaining < 0 {
                writeln!(f, "⚠️  Limit exceeded")?;
                writeln!(
                    f,
                    "   Over quota by {} messages this month. Consider raising the monthly limit.",
                    stats.remaining.unsigned_abs()
                )?;
            } else {
                writeln!(f, "⚠️  Limit almost reached")?;
                writeln!(
                    f,
                    "   Only {} messages left this month. Consider raising the monthly limit.",
                    stats.remaining
                )?;
            }
        }
        Ok(())
    }
}

/// Renders the detail view to a string
pub fn render_detail<Tz>(
    record: &ClinicRecord,
    selected_chat: Option<&str>,
    now: DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    DetailView::new(record, selected_chat, now).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clinics::fallback_clinics;
    use crate::domain::Message;
    use chrono::Utc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_detail_without_selection() {
        let clinics = fallback_clinics();
        let out = render_detail(&clinics[0], None, now());

        assert!(out.contains("Clínica São João  [Active]"));
        assert!(out.contains("Active chats:    2"));
        assert!(out.contains("Total messages:  8"));
        assert!(out.contains("Quota usage:     45%"));
        assert!(out.contains("Remaining:       550"));
        assert!(out.contains("Select a conversation"));
        assert!(!out.contains("Limit almost reached"));

        let maria = out.find("Maria Silva").unwrap();
        let joao = out.find("João Santos").unwrap();
        assert!(maria < joao);
    }

    #[test]
    fn test_detail_with_transcript() {
        let clinics = fallback_clinics();
        let out = render_detail(&clinics[1], Some("Ana Costa"), now());

        assert!(out.contains("▸ Ana Costa"));
        assert!(out.contains("Conversation with Ana Costa"));
        assert!(out.contains("[14:30] 👤 Patient: Boa tarde, gostaria de agendar uma consulta"));
        assert!(out.contains("[14:25] 🤖 Assistant: Boa tarde Ana!"));
        assert!(!out.contains("Select a conversation to view"));
    }

    #[test]
    fn test_detail_standby_and_empty_chat() {
        let record = ClinicRecord::builder()
            .id("clinica-09")
            .unwrap()
            .name("Vazia")
            .phone_number("(11) 00000-0000")
            .monthly_limit(100)
            .build()
            .unwrap();
        let out = render_detail(&record, None, now());
        assert!(out.contains("[Standby]"));
        assert!(out.contains("No active conversations"));

        let record = ClinicRecord::builder()
            .id("clinica-10")
            .unwrap()
            .name("Quieta")
            .phone_number("(11) 00000-0001")
            .monthly_limit(100)
            .chat(ChatThread::new("Paulo", vec![]))
            .build()
            .unwrap();
        let out = render_detail(&record, Some("Paulo"), now());
        assert!(out.contains("0 messages"));
        assert!(out.contains("No messages"));
    }

    #[test]
    fn test_detail_usage_alert() {
        let record = ClinicRecord::builder()
            .id("clinica-11")
            .unwrap()
            .name("Cheia")
            .phone_number("(11) 00000-0002")
            .messages_used(950)
            .monthly_limit(1000)
            .chat(ChatThread::new("Rita", vec![Message::user("oi")]))
            .build()
            .unwrap();
        let out = render_detail(&record, None, now());
        assert!(out.contains("Limit almost reached"));
        assert!(out.contains("Only 50 messages left this month"));
    }

    #[test]
    fn test_detail_over_quota_alert() {
        let record = ClinicRecord::builder()
            .id("clinica-13")
            .unwrap()
            .name("Estourada")
            .phone_number("(11) 00000-0004")
            .messages_used(1100)
            .monthly_limit(1000)
            .build()
            .unwrap();
        let out = render_detail(&record, None, now());
        assert!(out.contains("Limit exceeded"));
        assert!(out.contains("Over quota by 100 messages this month"));
        assert!(!out.contains("-100"));
        assert!(!out.contains("Limit almost reached"));
    }

    #[test]
    fn test_detail_zero_quota() {
        let record = ClinicRecord::builder()
            .id("clinica-12")
            .unwrap()
            .name("Sem cota")
            .phone_number("(11) 00000-0003")
            .monthly_limit(0)
            .build()
            .unwrap();
        let out = render_detail(&record, None, now());
        assert!(out.contains("Quota usage:     N/A"));
        assert!(!out.contains("NaN"));
    }
}
