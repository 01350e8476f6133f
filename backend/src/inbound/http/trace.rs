//! Request correlation middleware.
//!
//! Each request runs under a [`TraceId`] held in task-local storage. A valid
//! UUID in the inbound `trace-id` header is reused; anything else gets a fresh
//! identifier. The identifier is echoed in the response header and recorded
//! on the request completion log line.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{error, info};

use crate::domain::{TRACE_ID_HEADER, TraceId};

fn inbound_trace_id(req: &ServiceRequest) -> TraceId {
    TraceId::from_header_value(
        req.headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
    )
}

fn echo_trace_id<B>(res: &mut ServiceResponse<B>, trace_id: TraceId) {
    match HeaderValue::from_str(&trace_id.to_string()) {
        Ok(value) => {
            res.headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(err) => error!(error = %err, %trace_id, "trace id is not a valid header value"),
    }
}

/// Middleware factory; wrap an `App` or scope with it.
///
/// Inside handlers the identifier is available through
/// [`TraceId::current`], and domain errors pick it up on construction.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use dinos::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// The per-worker service built by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = inbound_trace_id(&req);
        let method = req.method().clone();
        let path = req.path().to_owned();
        let inner = self.service.call(req);

        Box::pin(TraceId::scope(trace_id, async move {
            let mut res = inner.await?;
            echo_trace_id(&mut res, trace_id);
            info!(
                %method,
                path,
                status = res.status().as_u16(),
                %trace_id,
                "request completed"
            );
            Ok(res)
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    use super::*;
    use crate::domain::Error as DomainError;
    use crate::inbound::http::ApiResult;

    async fn echo_current() -> HttpResponse {
        let body = TraceId::current().map_or_else(|| "none".to_owned(), |id| id.to_string());
        HttpResponse::Ok().body(body)
    }

    async fn fail_not_found() -> ApiResult<HttpResponse> {
        Err(DomainError::not_found("no such animal"))
    }

    async fn send(path: &str, inbound: Option<&str>) -> ServiceResponse {
        let app = test::init_service(
            App::new()
                .wrap(Trace)
                .route("/echo", web::get().to(echo_current))
                .route("/fail", web::get().to(fail_not_found)),
        )
        .await;
        let mut req = test::TestRequest::get().uri(path);
        if let Some(value) = inbound {
            req = req.insert_header((TRACE_ID_HEADER, value));
        }
        test::call_service(&app, req.to_request()).await
    }

    fn header(res: &ServiceResponse) -> String {
        res.headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .expect("trace-id header")
            .to_owned()
    }

    #[actix_web::test]
    async fn handler_sees_the_echoed_identifier() {
        let res = send("/echo", None).await;
        let echoed = header(&res);
        let body = test::read_body(res).await;

        assert!(echoed.parse::<TraceId>().is_ok());
        assert_eq!(body, echoed.as_bytes());
    }

    #[rstest]
    #[case(Some("3fa85f64-5717-4562-b3fc-2c963f66afa6"), true)]
    #[case(Some("not-a-uuid"), false)]
    #[case(None, false)]
    #[actix_web::test]
    async fn inbound_identifier_is_reused_only_when_valid(
        #[case] inbound: Option<&str>,
        #[case] reused: bool,
    ) {
        let res = send("/echo", inbound).await;
        let echoed = header(&res);

        assert!(echoed.parse::<TraceId>().is_ok());
        assert_eq!(Some(echoed.as_str()) == inbound, reused);
    }

    #[actix_web::test]
    async fn error_body_carries_the_same_identifier() {
        let res = send("/fail", None).await;
        let echoed = header(&res);
        let body: DomainError = test::read_body_json(res).await;

        assert_eq!(body.trace_id().map(|id| id.to_string()), Some(echoed));
    }
}
