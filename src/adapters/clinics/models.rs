//! Wire models for the clinic backend
//!
//! The backend keeps its JSON keys in Portuguese (`nome`, `telefone`,
//! `limite_mensal`, ...) and ships clinics and chats as JSON objects keyed by
//! id. These types decode that shape and convert it into the domain model,
//! keeping the key order of each object.

use crate::core::form::ClinicDraft;
use crate::domain::{ChatThread, ClinicId, ClinicRecord, DataSourceError, Message};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;

/// JSON object decoded as a list of entries in document order
///
/// A repeated key replaces the earlier value but keeps the earlier position,
/// matching how the browser client treated the same payload.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn into_entries(self) -> Vec<(String, V)> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for OrderedMapVisitor<V>
where
    V: Deserialize<'de>,
{
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Vec<(String, V)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }
        }
        Ok(OrderedMap(entries))
    }
}

impl<'de, V> Deserialize<'de> for OrderedMap<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Body of `GET /clinicas`
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ClinicsResponse {
    pub clinicas: OrderedMap<ClinicAttributes>,
}

impl ClinicsResponse {
    /// Converts the map into records, re-attaching each key as the clinic id
    pub fn into_records(self) -> Result<Vec<ClinicRecord>, DataSourceError> {
        self.clinicas
            .into_entries()
            .into_iter()
            .map(|(id, attributes)| attributes.into_record(id))
            .collect()
    }
}

/// A clinic as stored by the backend, without its id
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ClinicAttributes {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "telefone")]
    pub phone_number: String,

    #[serde(default)]
    pub prompt: Option<String>,

    #[serde(rename = "limite_mensal")]
    pub monthly_limit: u64,

    #[serde(rename = "mensagens_usadas", default)]
    pub messages_used: u64,

    #[serde(rename = "ativo", default = "default_true")]
    pub active: bool,

    #[serde(default)]
    pub chats: Option<OrderedMap<ChatAttributes>>,
}

impl ClinicAttributes {
    /// Builds the domain record for the clinic stored under `id`
    pub fn into_record(self, id: String) -> Result<ClinicRecord, DataSourceError> {
        let id = ClinicId::new(id).map_err(DataSourceError::InvalidResponse)?;

        let chats = self
            .chats
            .unwrap_or_default()
            .into_entries()
            .into_iter()
            .map(|(patient, chat)| chat.into_thread(patient))
            .collect();

        Ok(ClinicRecord {
            id,
            name: self.name,
            phone_number: self.phone_number,
            messages_used: self.messages_used,
            monthly_limit: self.monthly_limit,
            chats,
            prompt: self.prompt.filter(|p| !p.is_empty()),
            active: self.active,
        })
    }
}

/// A chat as stored by the backend
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ChatAttributes {
    #[serde(rename = "contexto", default)]
    pub messages: Vec<Message>,

    #[serde(rename = "ultima_mensagem", default)]
    pub last_message: Option<String>,

    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ChatAttributes {
    fn into_thread(self, patient: String) -> ChatThread {
        // The webhook initialises both fields to "" before the first reply
        ChatThread {
            patient,
            messages: self.messages,
            last_message: self.last_message.filter(|s| !s.is_empty()),
            updated_at: self.timestamp.filter(|s| !s.is_empty()),
        }
    }
}

/// Body of `POST /clinicas`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateClinicRequest {
    pub id: String,
    pub nome: String,
    pub telefone: String,
    pub prompt: String,
    pub limite_mensal: u64,
    pub ativo: bool,
}

impl From<&ClinicDraft> for CreateClinicRequest {
    fn from(draft: &ClinicDraft) -> Self {
        Self {
            id: draft.id.as_str().to_string(),
            nome: draft.name.clone(),
            telefone: draft.phone_number.clone(),
            prompt: draft.prompt.clone(),
            limite_mensal: draft.monthly_limit,
            ativo: draft.active,
        }
    }
}

/// Error body returned by the backend (`{"detail": ...}`)
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorResponse {
    pub detail: serde_json::Value,
}

impl ErrorResponse {
    /// Human-readable detail, whatever shape it came in
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use serde_json::json;

    #[test]
    fn test_decode_reattaches_ids_in_order() {
        // Decoded from text: a serde_json::Value would have sorted the keys
        let body = r#"{
            "clinicas": {
                "clinica-b": {"nome": "B", "telefone": "2", "limite_mensal": 500, "mensagens_usadas": 5},
                "clinica-a": {"nome": "A", "telefone": "1", "limite_mensal": 1000, "mensagens_usadas": 0}
            }
        }"#;

        let response: ClinicsResponse = serde_json::from_str(body).unwrap();
        let records = response.into_records().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_str(), "clinica-b");
        assert_eq!(records[1].id.as_str(), "clinica-a");
        assert!(records[0].chats.is_empty());
        assert!(records[0].active);
    }

    #[test]
    fn test_decode_backend_shape() {
        let body = r#"{
            "clinicas": {
                "clinica-01": {
                    "nome": "Clínica São João",
                    "telefone": "5511999999999",
                    "prompt": "Você é um assistente de uma clínica.",
                    "limite_mensal": 1000,
                    "mensagens_usadas": 2,
                    "ativo": false,
                    "chats": {
                        "5511988887777": {
                            "contexto": [
                                {"role": "user", "content": "Oi"},
                                {"role": "assistant", "content": "Olá!", "timestamp": "2025-03-01T10:00:00Z"}
                            ],
                            "ultima_mensagem": "Oi",
                            "timestamp": "1740823200"
                        },
                        "5511977776666": {"contexto": [], "ultima_mensagem": "", "timestamp": ""}
                    }
                }
            }
        }"#;

        let response: ClinicsResponse = serde_json::from_str(body).unwrap();
        let records = response.into_records().unwrap();
        let clinic = &records[0];

        assert!(!clinic.active);
        assert_eq!(clinic.prompt.as_deref(), Some("Você é um assistente de uma clínica."));
        assert_eq!(clinic.chats.len(), 2);
        assert_eq!(clinic.chats[0].patient, "5511988887777");
        assert_eq!(clinic.chats[0].messages[0].role, Role::User);
        assert_eq!(
            clinic.chats[0].messages[1].timestamp.as_deref(),
            Some("2025-03-01T10:00:00Z")
        );
        assert_eq!(clinic.chats[0].updated_at.as_deref(), Some("1740823200"));
        assert!(clinic.chats[1].last_message.is_none());
        assert!(clinic.chats[1].updated_at.is_none());
    }

    #[test]
    fn test_null_chats_is_empty() {
        let body = json!({"nome": "X", "telefone": "1", "limite_mensal": 10, "chats": null});
        let attributes: ClinicAttributes = serde_json::from_value(body).unwrap();
        let record = attributes.into_record("x".to_string()).unwrap();
        assert!(record.chats.is_empty());
    }

    #[test]
    fn test_duplicate_keys_keep_first_position() {
        let body = r#"{"a": 1, "b": 2, "a": 3}"#;
        let map: OrderedMap<u32> = serde_json::from_str(body).unwrap();
        assert_eq!(map.into_entries(), vec![("a".to_string(), 3), ("b".to_string(), 2)]);
    }

    #[test]
    fn test_negative_usage_is_malformed() {
        let body = json!({"nome": "X", "telefone": "1", "limite_mensal": 10, "mensagens_usadas": -1});
        assert!(serde_json::from_value::<ClinicAttributes>(body).is_err());
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let body = json!({"clinicas": {"": {"nome": "X", "telefone": "1", "limite_mensal": 10}}});
        let response: ClinicsResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(
            response.into_records(),
            Err(DataSourceError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_create_request_shape() {
        let draft = ClinicDraft {
            id: ClinicId::new("clinica-04").unwrap(),
            name: "Clínica Norte".to_string(),
            phone_number: "(11) 66666-6666".to_string(),
            prompt: "Seja empático.".to_string(),
            monthly_limit: 2000,
            active: true,
        };

        let value = serde_json::to_value(CreateClinicRequest::from(&draft)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "clinica-04",
                "nome": "Clínica Norte",
                "telefone": "(11) 66666-6666",
                "prompt": "Seja empático.",
                "limite_mensal": 2000,
                "ativo": true
            })
        );
    }

    #[test]
    fn test_error_response_message() {
        let err: ErrorResponse =
            serde_json::from_str(r#"{"detail": "Clínica já existe."}"#).unwrap();
        assert_eq!(err.message(), "Clínica já existe.");
    }
}
