use super::QuoteError;
use rocket::{
    http::{ContentType, Status},
    request::Request,
    response::{self, Responder, Response},
};
use std::io::Cursor;
use tracing::error;

/// Plain-text 500 response wrapping a failed quote request.
#[derive(Debug)]
pub struct ApiError {
    pub error: QuoteError,
    /// When false the body carries only the status reason.
    pub expose: bool,
}

impl ApiError {
    pub fn new(error: QuoteError, expose: bool) -> ApiError {
        ApiError { error, expose }
    }

    pub fn body(&self) -> String {
        if self.expose {
            self.error.to_string()
        } else {
            Status::InternalServerError
                .reason()
                .unwrap_or("")
                .to_string()
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        error!(error = %self.error, "Unable to serve quote");

        let body = self.body();

        Response::build()
            .header(ContentType::Plain)
            .status(Status::InternalServerError)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

#[cfg(test)]
mod test {
    use super::ApiError;
    use crate::model::QuoteError;

    #[test]
    fn exposed_body_is_error_text() {
        let e = ApiError::new(QuoteError::Upstream("moeda nao encontrada".into()), true);
        assert_eq!("moeda nao encontrada", e.body());
    }

    #[test]
    fn hidden_body_is_status_reason() {
        let e = ApiError::new(QuoteError::UnexpectedQuoteCount(2), false);
        assert_eq!("Internal Server Error", e.body());
    }
}
