//! Demo dataset shown when the backend can't be reached
//!
//! The content is fixed: three clinics, three chats, ten messages. Operators
//! see a warning whenever this data is on screen.

use crate::domain::{ChatThread, ClinicId, ClinicRecord, Message};

fn clinic(
    id: &str,
    name: &str,
    phone: &str,
    used: u64,
    limit: u64,
    chats: Vec<ChatThread>,
) -> ClinicRecord {
    ClinicRecord {
        id: ClinicId::from_trusted(id),
        name: name.to_string(),
        phone_number: phone.to_string(),
        messages_used: used,
        monthly_limit: limit,
        chats,
        prompt: None,
        active: true,
    }
}

/// The fixed fallback collection
pub fn fallback_clinics() -> Vec<ClinicRecord> {
    vec![
        clinic(
            "clinica-01",
            "Clínica São João",
            "(11) 99999-9999",
            450,
            1000,
            vec![
                ChatThread::new(
                    "Maria Silva",
                    vec![
                        Message::user("Olá, estou com dor de cabeça há 3 dias"),
                        Message::assistant(
                            "Olá Maria! Sinto muito que esteja passando por isso. Pode me contar mais sobre sua dor? É constante ou vem e vai?",
                        ),
                        Message::user("É constante e piora à noite"),
                        Message::assistant(
                            "Entendo. Recomendo que agende uma consulta presencial para uma avaliação completa. Posso ajudar a agendar?",
                        ),
                    ],
                ),
                ChatThread::new(
                    "João Santos",
                    vec![
                        Message::user("Preciso de informações sobre exames"),
                        Message::assistant("Claro! Que tipo de exame você precisa fazer?"),
                        Message::user("Exame de sangue de rotina"),
                        Message::assistant(
                            "Perfeito! Para exames de sangue, é necessário jejum de 12 horas. Gostaria de agendar?",
                        ),
                    ],
                ),
            ],
        ),
        clinic(
            "clinica-02",
            "Medical Center",
            "(11) 88888-8888",
            890,
            1000,
            vec![ChatThread::new(
                "Ana Costa",
                vec![
                    Message::user("Boa tarde, gostaria de agendar uma consulta"),
                    Message::assistant(
                        "Boa tarde Ana! Será um prazer ajudar. Que especialidade você precisa?",
                    ),
                ],
            )],
        ),
        clinic(
            "clinica-03",
            "Clínica Vida",
            "(11) 77777-7777",
            120,
            500,
            vec![],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let clinics = fallback_clinics();
        let ids: Vec<&str> = clinics.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["clinica-01", "clinica-02", "clinica-03"]);

        assert_eq!(clinics[0].chats.len(), 2);
        assert_eq!(clinics[0].chats[0].patient, "Maria Silva");
        assert_eq!(clinics[1].chats[0].messages.len(), 2);
        assert!(clinics[2].chats.is_empty());
        assert!(clinics.iter().all(|c| c.monthly_limit > 0));
    }
}
