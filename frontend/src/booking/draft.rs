use serde::Serialize;

use crate::booking::fields::{FieldId, FormState};

/// Field values captured at submit time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppointmentDraft {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
}

/// What the success panel shows once a booking went through.
#[derive(Clone, Debug, PartialEq)]
pub struct Confirmation {
    pub name: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub link: String,
}

impl AppointmentDraft {
    pub fn from_form(form: &FormState) -> Self {
        let notes = form.value(FieldId::Notes).trim();
        Self {
            name: form.value(FieldId::Name).trim().to_string(),
            phone: form.value(FieldId::Phone).trim().to_string(),
            service: form.value(FieldId::Service).to_string(),
            date: form.value(FieldId::Date).to_string(),
            time: form.value(FieldId::Time).to_string(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }

    pub fn message(&self) -> String {
        format!(
            "*New Appointment Request*\n\n*Name:* {}\n*Phone:* {}\n*Service:* {}\n*Date:* {}\n*Time:* {}\n*Notes:* {}",
            self.name,
            self.phone,
            self.service,
            self.date,
            self.time,
            self.notes.as_deref().unwrap_or("None"),
        )
    }

    /// Messaging-app link that opens a chat with `recipient` prefilled with
    /// the request text.
    pub fn deep_link(&self, host: &str, recipient: &str) -> String {
        format!(
            "https://{}/{}?text={}",
            host,
            recipient,
            urlencoding::encode(&self.message())
        )
    }

    pub fn confirm(self, host: &str, recipient: &str) -> Confirmation {
        let link = self.deep_link(host, recipient);
        Confirmation {
            name: self.name,
            service: self.service,
            date: self.date,
            time: self.time,
            link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> AppointmentDraft {
        AppointmentDraft {
            name: "Ali".to_string(),
            phone: "+92 300 1234567".to_string(),
            service: "Consult".to_string(),
            date: "2025-01-01".to_string(),
            time: "10:00".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_deep_link_decodes_to_template() {
        let link = draft().deep_link("wa.me", "923367251204");
        let text = link
            .strip_prefix("https://wa.me/923367251204?text=")
            .unwrap();
        assert!(text.contains("%0A%0A"));
        assert!(!text.contains('\n'));
        assert_eq!(
            urlencoding::decode(text).unwrap(),
            "*New Appointment Request*\n\n*Name:* Ali\n*Phone:* +92 300 1234567\n*Service:* Consult\n*Date:* 2025-01-01\n*Time:* 10:00\n*Notes:* None"
        );
    }

    #[test]
    fn test_notes_are_included_when_present() {
        let mut draft = draft();
        draft.notes = Some("Fasting since 8pm & thirsty".to_string());
        let link = draft.deep_link("wa.me", "1");
        let decoded = urlencoding::decode(link.split("text=").nth(1).unwrap()).unwrap().into_owned();
        assert!(decoded.ends_with("*Notes:* Fasting since 8pm & thirsty"));
        assert!(!link.contains(" & "));
    }

    #[test]
    fn test_draft_trims_free_text() {
        let mut form = FormState::new("+92 ");
        form.input(FieldId::Name, "  Ali ".to_string());
        form.input(FieldId::Notes, "   ".to_string());
        let draft = AppointmentDraft::from_form(&form);
        assert_eq!(draft.name, "Ali");
        assert_eq!(draft.notes, None);
    }

    #[test]
    fn test_confirm_keeps_summary_fields() {
        let confirmation = draft().confirm("wa.me", "923367251204");
        assert_eq!(confirmation.name, "Ali");
        assert_eq!(confirmation.date, "2025-01-01");
        assert!(confirmation.link.starts_with("https://wa.me/923367251204?text="));
    }
}
