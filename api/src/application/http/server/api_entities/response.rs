use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum Response<T: Serialize + PartialEq> {
    OK(T),
    Created(T),
}

impl<T: Serialize + PartialEq> Response<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            Response::OK(_) => StatusCode::OK,
            Response::Created(_) => StatusCode::CREATED,
        }
    }
}

impl<T: Serialize + PartialEq> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        let status = self.status();
        match self {
            Response::OK(data) | Response::Created(data) => (status, Json(data)).into_response(),
        }
    }
}
