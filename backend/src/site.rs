use crate::api::{BookingPayload, ContactLinks, DispatchResponse, RejectionResponse};
use crate::booking::BookingRequest;
use crate::config::SiteConfig;
use crate::dispatch::Dispatcher;
use crate::form::{BookingForm, DispatchOutcome, Notice, Presenter};
use crate::page::{self, HomePage};
use axum::{
    extract::{rejection::JsonRejection, Form, Json, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Datelike;
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, timeout::TimeoutLayer,
};
use tracing::{debug, info, trace};

pub struct SiteApp {
    pub config: SiteConfig,
    pub dispatcher: Dispatcher,
}

impl SiteApp {
    pub fn new(config: SiteConfig) -> Self {
        let dispatcher = Dispatcher::from_config(&config);
        Self { config, dispatcher }
    }

    fn home(&self, request: &BookingRequest, notices: &[Notice], booking_open: bool) -> String {
        let whatsapp_link = self.dispatcher.chat_link();
        let email_link = self.dispatcher.email_link();
        page::render_home(&HomePage {
            whatsapp_link: &whatsapp_link,
            email_link: &email_link,
            contact_email: &self.config.contact_email,
            photo_src: &self.config.profile_photo_url,
            year: chrono::Local::now().year(),
            request,
            notices,
            booking_open,
        })
    }
}

/// Collects the notices the form shows so they end up in the response.
#[derive(Default)]
struct ResponsePresenter {
    notices: Vec<Notice>,
}

impl Presenter for ResponsePresenter {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    // the hand-off page opens the link itself
    fn open_link(&mut self, _url: &str) {}
}

async fn handle_home(State(app): State<Arc<SiteApp>>) -> Html<String> {
    Html(app.home(&BookingRequest::default(), &[], false))
}

async fn handle_booking_form(
    State(app): State<Arc<SiteApp>>,
    Form(payload): Form<BookingPayload>,
) -> (StatusCode, Html<String>) {
    let mut form = BookingForm::with_request(payload.into());
    let mut presenter = ResponsePresenter::default();

    // the browser waits via meta refresh, so no server-side delay
    let outcome = form
        .submit(&app.dispatcher, &mut presenter, Duration::ZERO)
        .await;

    match outcome {
        DispatchOutcome::Dispatched { url } => (
            StatusCode::OK,
            Html(page::render_handoff(
                &presenter.notices,
                &url,
                app.config.handoff_delay,
            )),
        ),
        DispatchOutcome::Rejected(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(app.home(form.request(), &presenter.notices, true)),
        ),
    }
}

async fn handle_booking_json(
    State(app): State<Arc<SiteApp>>,
    payload: Result<Json<BookingPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            debug!("Unreadable booking body: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(RejectionResponse::malformed(rejection.body_text())),
            )
                .into_response();
        }
    };

    let mut form = BookingForm::with_request(payload.into());
    let mut presenter = ResponsePresenter::default();

    match form
        .submit(&app.dispatcher, &mut presenter, Duration::ZERO)
        .await
    {
        DispatchOutcome::Dispatched { url } => {
            (StatusCode::OK, Json(DispatchResponse { url })).into_response()
        }
        DispatchOutcome::Rejected(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(RejectionResponse::from(e)),
        )
            .into_response(),
    }
}

async fn handle_contact(State(app): State<Arc<SiteApp>>) -> Json<ContactLinks> {
    Json(ContactLinks {
        whatsapp: app.dispatcher.chat_link(),
        email: app.dispatcher.email_link(),
    })
}

async fn log_request(request: Request, next: Next) -> Response {
    trace!("{}, {}", request.method(), request.uri().path());
    let response = next.run(request).await;
    debug!("responded {}", response.status());
    response
}

pub fn router(app: Arc<SiteApp>) -> Router {
    let middleware = tower::ServiceBuilder::new()
        .layer(CompressionLayer::new().quality(tower_http::CompressionLevel::Fastest))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(log_request));

    let assets_dir = app.config.assets_dir.clone();

    let router = Router::new()
        .route("/", get(handle_home))
        .route("/agendar", post(handle_booking_form))
        .route("/api/booking", post(handle_booking_json))
        .route("/api/contact", get(handle_contact))
        .with_state(app);

    let router = match assets_dir {
        Some(dir) => {
            info!("Serving assets from: {}", dir.display());
            router.nest_service("/assets", ServeDir::new(dir))
        }
        None => router,
    };

    router.layer(middleware)
}
