use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::booking::draft::AppointmentDraft;
use crate::booking::phone::apply_country_prefix;
use crate::error::BookingError;

// Digits, whitespace, hyphen, plus and parentheses, at least seven of them.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-+()]{7,}$").unwrap());

const MIN_NAME_LEN: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Phone,
    Service,
    Date,
    Time,
    Notes,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Phone,
        FieldId::Service,
        FieldId::Date,
        FieldId::Time,
        FieldId::Notes,
    ];

    /// Element id of the control in the booking form.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Phone => "phone",
            FieldId::Service => "service",
            FieldId::Date => "date",
            FieldId::Time => "time",
            FieldId::Notes => "notes",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FieldId::Notes)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Unvalidated,
    Valid,
    Invalid,
}

impl Validity {
    /// Presentation class carried by the control, if any.
    pub fn marker_class(self) -> Option<&'static str> {
        match self {
            Validity::Unvalidated => None,
            Validity::Valid => Some("valid"),
            Validity::Invalid => Some("error"),
        }
    }
}

fn passes(id: FieldId, value: &str) -> bool {
    match id {
        // Counted in UTF-16 units, the way browsers measure input length.
        FieldId::Name => value.encode_utf16().count() >= MIN_NAME_LEN,
        FieldId::Phone => PHONE_PATTERN.is_match(value),
        FieldId::Service | FieldId::Date | FieldId::Time => !value.is_empty(),
        FieldId::Notes => true,
    }
}

/// Classifies a raw control value. Empty values are never marked, whatever
/// the field.
pub fn validate(id: FieldId, raw: &str) -> Validity {
    let value = raw.trim();
    if value.is_empty() {
        Validity::Unvalidated
    } else if passes(id, value) {
        Validity::Valid
    } else {
        Validity::Invalid
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub id: FieldId,
    pub value: String,
    pub validity: Validity,
}

impl Field {
    fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            validity: Validity::Unvalidated,
        }
    }

    fn revalidate(&mut self) {
        self.validity = if self.id.is_required() {
            validate(self.id, &self.value)
        } else {
            Validity::Unvalidated
        };
    }
}

/// Current values and markers of every booking control.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    fields: Vec<Field>,
    phone_prefix: &'static str,
}

impl FormState {
    pub fn new(phone_prefix: &'static str) -> Self {
        Self {
            fields: FieldId::ALL.iter().copied().map(Field::new).collect(),
            phone_prefix,
        }
    }

    // `fields` follows the declaration order of FieldId.
    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id as usize]
    }

    fn field_mut(&mut self, id: FieldId) -> &mut Field {
        &mut self.fields[id as usize]
    }

    pub fn value(&self, id: FieldId) -> &str {
        &self.field(id).value
    }

    pub fn validity(&self, id: FieldId) -> Validity {
        self.field(id).validity
    }

    pub fn blur(&mut self, id: FieldId) {
        self.field_mut(id).revalidate();
    }

    /// Stores a keystroke. Untouched controls are not re-validated until
    /// their first blur.
    pub fn input(&mut self, id: FieldId, value: String) {
        let value = if id == FieldId::Phone {
            apply_country_prefix(&value, self.phone_prefix)
        } else {
            value
        };
        let field = self.field_mut(id);
        field.value = value;
        if field.validity != Validity::Unvalidated {
            field.revalidate();
        }
    }

    /// Re-validates every required control and, when all pass, captures the
    /// draft to submit.
    pub fn check_all(&mut self) -> Result<AppointmentDraft, BookingError> {
        let mut failing = Vec::new();
        for field in self.fields.iter_mut().filter(|f| f.id.is_required()) {
            field.revalidate();
            if field.validity == Validity::Invalid || field.value.trim().is_empty() {
                failing.push(field.id);
            }
        }
        if failing.is_empty() {
            Ok(AppointmentDraft::from_form(self))
        } else {
            Err(BookingError::Incomplete { fields: failing })
        }
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.validity = Validity::Unvalidated;
        }
    }
}

/// Earliest selectable appointment date, in the format date inputs expect.
pub fn min_booking_date(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::new("+92 ");
        form.input(FieldId::Name, "Ali".to_string());
        form.input(FieldId::Phone, "+92 300 1234567".to_string());
        form.input(FieldId::Service, "Consult".to_string());
        form.input(FieldId::Date, "2025-01-01".to_string());
        form.input(FieldId::Time, "10:00".to_string());
        form
    }

    #[test]
    fn test_phone_pattern() {
        for ok in ["1234567", "+92 300 1234567", "(042) 111-2222", "  0300-1234567 "] {
            assert_eq!(validate(FieldId::Phone, ok), Validity::Valid, "{ok}");
        }
        for bad in ["123456", "12a4567", "+92 300 12#4567", "call me"] {
            assert_eq!(validate(FieldId::Phone, bad), Validity::Invalid, "{bad}");
        }
        assert_eq!(validate(FieldId::Phone, "   "), Validity::Unvalidated);
    }

    #[test]
    fn test_name_length() {
        assert_eq!(validate(FieldId::Name, ""), Validity::Unvalidated);
        assert_eq!(validate(FieldId::Name, " A "), Validity::Invalid);
        assert_eq!(validate(FieldId::Name, "Al"), Validity::Valid);
        assert_eq!(validate(FieldId::Name, "  Zoë  "), Validity::Valid);
        // One astral-plane character spans two UTF-16 units.
        assert_eq!(validate(FieldId::Name, "𝒜"), Validity::Valid);
        assert_eq!(validate(FieldId::Name, "é"), Validity::Invalid);
    }

    #[test]
    fn test_choice_fields_and_notes() {
        assert_eq!(validate(FieldId::Service, ""), Validity::Unvalidated);
        assert_eq!(validate(FieldId::Date, "2025-01-01"), Validity::Valid);
        assert_eq!(validate(FieldId::Time, "10:00"), Validity::Valid);
        assert_eq!(validate(FieldId::Notes, "fasting"), Validity::Valid);
        assert_eq!(Validity::Invalid.marker_class(), Some("error"));
        assert_eq!(Validity::Unvalidated.marker_class(), None);
    }

    #[test]
    fn test_input_waits_for_first_blur() {
        let mut form = FormState::new("+92 ");
        form.input(FieldId::Name, "A".to_string());
        assert_eq!(form.validity(FieldId::Name), Validity::Unvalidated);

        form.blur(FieldId::Name);
        assert_eq!(form.validity(FieldId::Name), Validity::Invalid);

        form.input(FieldId::Name, "Al".to_string());
        assert_eq!(form.validity(FieldId::Name), Validity::Valid);
    }

    #[test]
    fn test_notes_never_marked() {
        let mut form = FormState::new("+92 ");
        form.input(FieldId::Notes, "bring report".to_string());
        form.blur(FieldId::Notes);
        assert_eq!(form.validity(FieldId::Notes), Validity::Unvalidated);
    }

    #[test]
    fn test_phone_input_is_prefixed() {
        let mut form = FormState::new("+92 ");
        form.input(FieldId::Phone, "923001234567".to_string());
        assert_eq!(form.value(FieldId::Phone), "+92 3001234567");
    }

    #[test]
    fn test_check_all_reports_empty_required_fields() {
        let mut form = filled();
        form.input(FieldId::Date, String::new());
        form.input(FieldId::Name, "A".to_string());

        let err = form.check_all().unwrap_err();
        assert_eq!(
            err,
            BookingError::Incomplete { fields: vec![FieldId::Name, FieldId::Date] }
        );
        assert_eq!(form.validity(FieldId::Name), Validity::Invalid);
        assert_eq!(form.validity(FieldId::Date), Validity::Unvalidated);
        assert_eq!(form.validity(FieldId::Phone), Validity::Valid);
    }

    #[test]
    fn test_check_all_ignores_empty_notes() {
        let mut form = filled();
        let draft = form.check_all().unwrap();
        assert_eq!(draft.name, "Ali");
        assert_eq!(draft.notes, None);
    }

    #[test]
    fn test_reset_clears_values_and_markers() {
        let mut form = filled();
        form.check_all().unwrap();
        form.reset();
        for id in FieldId::ALL {
            assert_eq!(form.value(id), "");
            assert_eq!(form.validity(id), Validity::Unvalidated);
        }
    }

    #[test]
    fn test_min_booking_date_format() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(min_booking_date(today), "2025-03-07");
    }
}
