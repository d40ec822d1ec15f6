use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The six fields of the booking form, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Date,
    Time,
    Message,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Date,
        Field::Time,
        Field::Message,
    ];

    /// Name used for the html input and the json payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Date => "date",
            Field::Time => "time",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Email => "E-mail",
            Field::Phone => "Telefone",
            Field::Date => "Data",
            Field::Time => "Horário",
            Field::Message => "Mensagem",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Message)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// What the visitor typed into the form. Lives only as long as one form interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub message: String,
}

impl BookingRequest {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}

/// Input errors. The `Display` text is the notice shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Por favor, preencha todos os campos obrigatórios")]
    MissingField(Field),
    #[error("Por favor, insira um e-mail válido")]
    InvalidEmail,
    #[error("Por favor, insira um telefone válido")]
    InvalidPhone,
}

impl BookingError {
    pub fn kind(&self) -> &'static str {
        match self {
            BookingError::MissingField(_) => "missing_field",
            BookingError::InvalidEmail => "invalid_email",
            BookingError::InvalidPhone => "invalid_phone",
        }
    }

    /// The field the visitor has to fix.
    pub fn field(&self) -> Field {
        match self {
            BookingError::MissingField(field) => *field,
            BookingError::InvalidEmail => Field::Email,
            BookingError::InvalidPhone => Field::Phone,
        }
    }
}

/// A request that passed [`validate`]. Only `validate` can build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest(BookingRequest);

impl ValidatedRequest {
    pub fn request(&self) -> &BookingRequest {
        &self.0
    }
}

pub fn validate(request: &BookingRequest) -> Result<ValidatedRequest, BookingError> {
    if let Some(&missing) = Field::ALL
        .iter()
        .find(|field| field.is_required() && request.get(**field).is_empty())
    {
        return Err(BookingError::MissingField(missing));
    }

    if !is_valid_email(&request.email) {
        return Err(BookingError::InvalidEmail);
    }

    let digits = phone_digits(&request.phone);
    if !(10..=11).contains(&digits.len()) {
        return Err(BookingError::InvalidPhone);
    }

    Ok(ValidatedRequest(request.clone()))
}

/// The characters a javascript `\s` class matches. Differs from
/// `char::is_whitespace`: U+FEFF counts, U+0085 does not.
pub fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `local@domain.tld`: one '@', no whitespace, and a '.' inside the domain
/// with something on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_js_space) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Only the ASCII digits, so "(11) 98921-7827" becomes "11989217827".
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> BookingRequest {
        BookingRequest {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            phone: "11999998888".to_string(),
            date: "2026-03-10".to_string(),
            time: "14:00".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn accepts_complete_request() {
        let validated = validate(&ana()).unwrap();
        assert_eq!(validated.request(), &ana());
    }

    #[test]
    fn each_required_field_is_reported_when_empty() {
        for field in Field::ALL.into_iter().filter(|f| f.is_required()) {
            let mut request = ana();
            request.set(field, "");
            assert_eq!(validate(&request), Err(BookingError::MissingField(field)));
        }
    }

    #[test]
    fn first_missing_field_wins() {
        let mut request = ana();
        request.phone.clear();
        request.time.clear();
        assert_eq!(
            validate(&request),
            Err(BookingError::MissingField(Field::Phone))
        );
    }

    #[test]
    fn missing_field_is_checked_before_format() {
        let mut request = ana();
        request.email = "not an email".to_string();
        request.name.clear();
        assert_eq!(
            validate(&request),
            Err(BookingError::MissingField(Field::Name))
        );
    }

    #[test]
    fn message_is_optional() {
        let mut request = ana();
        request.message.clear();
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn email_shapes() {
        for good in [
            "name@domain.com",
            "a@b.c",
            "first.last@sub.domain.com.br",
            "an\u{85}a@x.com",
        ] {
            assert!(is_valid_email(good), "{good} should pass");
        }
        for bad in [
            "namedomain.com",
            "name@domain",
            "@domain.com",
            "name@.com",
            "name@domain.",
            "name@@domain.com",
            "na me@domain.com",
            "name@dom ain.com",
            "name@domain.com\n",
            "ana@x.com\u{FEFF}",
            "ana@x\u{A0}.com",
            "ana\u{2028}@x.com",
        ] {
            assert!(!is_valid_email(bad), "{bad:?} should fail");
        }
    }

    #[test]
    fn invalid_email_is_reported() {
        let mut request = ana();
        request.email = "ana.x.com".to_string();
        assert_eq!(validate(&request), Err(BookingError::InvalidEmail));
    }

    #[test]
    fn phone_digit_counts() {
        let mut request = ana();
        for (phone, ok) in [
            ("(11) 98921-7827", true),
            ("1198921782", true),
            ("+55 11 98921-7827", false),
            ("123", false),
            ("119892178", false),
            ("no digits here", false),
        ] {
            request.phone = phone.to_string();
            assert_eq!(validate(&request).is_ok(), ok, "{phone}");
            if !ok {
                assert_eq!(validate(&request), Err(BookingError::InvalidPhone));
            }
        }
    }

    #[test]
    fn non_ascii_digits_are_stripped() {
        assert_eq!(phone_digits("١١٩٩٩٩٩٨٨٨٨"), "");
        assert_eq!(phone_digits("(11) 98921-7827"), "11989217827");
    }

    #[test]
    fn validate_is_idempotent() {
        let mut bad = ana();
        bad.phone = "123".to_string();
        assert_eq!(validate(&bad), validate(&bad));
        assert_eq!(validate(&ana()), validate(&ana()));
    }

    #[test]
    fn whitespace_counts_as_filled_in() {
        let mut request = ana();
        request.name = " ".to_string();
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn errors_point_at_a_field() {
        assert_eq!(BookingError::InvalidEmail.field(), Field::Email);
        assert_eq!(BookingError::InvalidPhone.kind(), "invalid_phone");
        assert_eq!(
            BookingError::MissingField(Field::Date).to_string(),
            "Por favor, preencha todos os campos obrigatórios"
        );
    }
}
