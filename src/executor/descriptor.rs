//! Request descriptors.

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;
use serde::Serialize;

use crate::error::ServiceError;
use crate::transport::Method;

/// Zero-argument asynchronous producer of mock data.
pub type MockProducer<T> =
    Box<dyn FnOnce() -> BoxFuture<'static, Result<T, ServiceError>> + Send + 'static>;

/// The inert description of one request: verb, path, optional JSON body and
/// optional mock source. Consumed by [`Executor::execute`](super::Executor::execute).
pub struct RequestDescriptor<T> {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
    mock: Option<MockProducer<T>>,
}

impl<T> RequestDescriptor<T> {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            mock: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    /// Attach a raw JSON body.
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `body` as the JSON payload.
    pub fn json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, ServiceError> {
        Ok(self.body(serde_json::to_value(body)?))
    }

    /// Attach the mock source used when the executor runs in mock mode.
    pub fn mock<F, Fut>(mut self, producer: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, ServiceError>> + Send + 'static,
    {
        self.mock = Some(Box::new(
            move || -> BoxFuture<'static, Result<T, ServiceError>> { Box::pin(producer()) },
        ));
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body_ref(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub fn has_mock(&self) -> bool {
        self.mock.is_some()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Method,
        String,
        Option<serde_json::Value>,
        Option<MockProducer<T>>,
    ) {
        (self.method, self.path, self.body, self.mock)
    }
}

impl<T> fmt::Debug for RequestDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDescriptor")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("body", &self.body)
            .field("mock", &self.mock.is_some())
            .finish()
    }
}
