use crate::booking::ValidatedRequest;
use crate::config::SiteConfig;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const NO_MESSAGE_PLACEHOLDER: &str = "Sem mensagem adicional";

// Same set javascript's encodeURIComponent leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Builds the messaging hand-off links for one fixed recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatcher {
    base_url: String,
    recipient: String,
    greeting_name: String,
    contact_email: String,
}

impl Dispatcher {
    pub fn new(
        base_url: impl Into<String>,
        recipient: impl Into<String>,
        greeting_name: impl Into<String>,
        contact_email: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            recipient: recipient.into(),
            greeting_name: greeting_name.into(),
            contact_email: contact_email.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            &config.messaging_base_url,
            &config.whatsapp_recipient,
            &config.greeting_name,
            &config.contact_email,
        )
    }

    pub fn compose_message(&self, validated: &ValidatedRequest) -> String {
        let request = validated.request();
        let message = if request.message.is_empty() {
            NO_MESSAGE_PLACEHOLDER
        } else {
            &request.message
        };
        format!(
            "Olá {}! Gostaria de agendar uma consulta:\n\n\
             Nome: {}\n\
             E-mail: {}\n\
             Telefone: {}\n\
             Data: {}\n\
             Horário: {}\n\n\
             Mensagem: {}",
            self.greeting_name,
            request.name,
            request.email,
            request.phone,
            request.date,
            request.time,
            message
        )
    }

    /// `<base>/<recipient>?text=<message>`. Never fails for a validated request.
    pub fn build_dispatch_url(&self, validated: &ValidatedRequest) -> String {
        format!(
            "{}?text={}",
            self.chat_link(),
            encode_component(&self.compose_message(validated))
        )
    }

    /// Direct chat link without a prefilled message.
    pub fn chat_link(&self) -> String {
        format!("{}/{}", self.base_url, self.recipient)
    }

    pub fn email_link(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}
