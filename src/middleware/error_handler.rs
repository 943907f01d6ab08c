use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use super::request_id::RequestIdValue;

/// Middleware that logs failed requests
///
/// Service errors and 4xx/5xx responses are logged with the request id; the
/// response itself is passed through untouched.
pub struct ErrorHandler;

impl<S> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse, Error = Error> + 'static,
    S::Future: 'static,
{
    type Response = ServiceResponse;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse, Error = Error> + 'static,
    S::Future: 'static,
{
    type Response = ServiceResponse;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let request_id = req
            .extensions()
            .get::<RequestIdValue>()
            .map(|id| id.0.clone())
            .unwrap_or_default();
        let path = req.path().to_string();

        Box::pin(async move {
            let result = service.call(req).await;

            match &result {
                Err(err) => {
                    tracing::error!(request_id = %request_id, path = %path, "Request error: {:?}", err);
                }
                Ok(res) if res.status().is_server_error() => {
                    tracing::error!(
                        request_id = %request_id,
                        path = %path,
                        status = %res.status(),
                        "Request failed"
                    );
                }
                Ok(res) if res.status().is_client_error() => {
                    tracing::warn!(
                        request_id = %request_id,
                        path = %path,
                        status = %res.status(),
                        "Request rejected"
                    );
                }
                Ok(_) => {}
            }

            result
        })
    }
}
