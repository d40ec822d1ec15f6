use crate::booking::{validate, BookingError, BookingRequest, Field};
use crate::dispatch::Dispatcher;
use std::time::Duration;
use tracing::{debug, info};

pub const SUCCESS_NOTICE: &str = "Solicitação enviada! Você será redirecionado para o WhatsApp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Editing,
    Validating,
    Invalid,
    Valid,
    Dispatched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Whatever shows notices and opens links on behalf of the form.
pub trait Presenter {
    fn notify(&mut self, notice: Notice);
    fn open_link(&mut self, url: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Validation failed. The form is still open with the same values.
    Rejected(BookingError),
    /// The link was handed to the presenter and the form was reset.
    Dispatched { url: String },
}

/// The booking dialog: one request, owned by one interaction.
#[derive(Debug)]
pub struct BookingForm {
    request: BookingRequest,
    state: FormState,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingForm {
    pub fn new() -> Self {
        Self {
            request: BookingRequest::default(),
            state: FormState::Idle,
        }
    }

    /// Starts an interaction with values already filled in, as when a whole
    /// form arrives in one post.
    pub fn with_request(request: BookingRequest) -> Self {
        Self {
            request,
            state: FormState::Editing,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    pub fn is_open(&self) -> bool {
        matches!(
            self.state,
            FormState::Editing | FormState::Validating | FormState::Invalid
        )
    }

    pub fn open(&mut self) {
        if self.state == FormState::Idle {
            self.state = FormState::Editing;
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.request.set(field, value);
        self.state = FormState::Editing;
    }

    /// Cancel: the request is thrown away.
    pub fn close(&mut self) {
        self.request = BookingRequest::default();
        self.state = FormState::Idle;
    }

    /// Validates and, when the request is good, shows the success notice,
    /// waits `delay` and hands the messaging link to the presenter.
    pub async fn submit<P: Presenter>(
        &mut self,
        dispatcher: &Dispatcher,
        presenter: &mut P,
        delay: Duration,
    ) -> DispatchOutcome {
        self.state = FormState::Validating;

        let validated = match validate(&self.request) {
            Ok(validated) => validated,
            Err(e) => {
                debug!("Booking rejected: {} ({})", e.kind(), e.field());
                self.state = FormState::Invalid;
                presenter.notify(Notice::error(e.to_string()));
                return DispatchOutcome::Rejected(e);
            }
        };

        self.state = FormState::Valid;
        let url = dispatcher.build_dispatch_url(&validated);
        presenter.notify(Notice::success(SUCCESS_NOTICE));

        tokio::time::sleep(delay).await;

        info!("Handing booking off to messaging link");
        presenter.open_link(&url);
        self.state = FormState::Dispatched;

        self.request = BookingRequest::default();
        self.state = FormState::Idle;
        DispatchOutcome::Dispatched { url }
    }
}
