use axum::http::StatusCode;
use tracing::{field, info_span, Span};

use crate::storage::TodoId;

#[derive(Clone, Debug)]
pub struct RootSpan {
    span: Span,
}

impl RootSpan {
    pub fn new(method: &str, uri: &str) -> Self {
        Self {
            span: info_span!(
                "http_request",
                method = %method,
                uri    = %uri,
                http_status_code = tracing::field::Empty,
                status = tracing::field::Empty,
                todo_id = tracing::field::Empty,
            ),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn record(&self) -> RootSpanRecorder {
        RootSpanRecorder::new(&self.span)
    }
}

pub struct RootSpanRecorder<'a> {
    span: &'a Span,
}

impl<'a> RootSpanRecorder<'a> {
    pub fn new(span: &'a Span) -> Self {
        Self { span }
    }

    pub fn http_status_code(&self, status_code: &StatusCode) -> &Self {
        self.span.record("http_status_code", status_code.as_u16());
        self
    }

    pub fn status(&self, value: &str) -> &Self {
        self.span.record("status", field::display(value));
        self
    }

    pub fn todo_id(&self, id: &TodoId) -> &Self {
        self.span.record("todo_id", field::display(id));
        self
    }
}
