use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    decode_created, ApiError, CreatePositionRequest, CreateTeacherRequest, ListQuery, Position,
    Teacher, TeacherPage,
};

/// Base path of the REST backend, overridable at build time
pub const DEFAULT_API_BASE: &str = match option_env!("TEACHER_ADMIN_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE.to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn teachers_url(&self, query: ListQuery) -> String {
        format!("{}/teachers?page={}&limit={}", self.base_url, query.page, query.limit)
    }

    pub fn create_teacher_url(&self) -> String {
        format!("{}/teachers", self.base_url)
    }

    pub fn positions_url(&self) -> String {
        format!("{}/teacher-positions", self.base_url)
    }

    /// Get one page of teachers
    pub async fn list_teachers(&self, query: ListQuery) -> Result<TeacherPage, ApiError> {
        let response = Request::get(&self.teachers_url(query))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }

    /// Create a teacher; the backend assigns `_id` and `code`.
    ///
    /// Any 2xx counts as created. The echoed record is `None` when the body
    /// is empty or does not decode.
    pub async fn create_teacher(&self, request: &CreateTeacherRequest) -> Result<Option<Teacher>, ApiError> {
        self.post(&self.create_teacher_url(), request).await
    }

    /// Get every position (the endpoint is not paginated)
    pub async fn list_positions(&self) -> Result<Vec<Position>, ApiError> {
        let response = Request::get(&self.positions_url())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }

    pub async fn create_position(&self, request: &CreatePositionRequest) -> Result<Option<Position>, ApiError> {
        self.post(&self.positions_url(), request).await
    }

    async fn post<B, T>(&self, url: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(&response).await?;
        let body = response.text().await.unwrap_or_default();
        Ok(decode_created(&body))
    }

    /// Turn a non-2xx response into `ApiError::Http`
    async fn check_status(response: &Response) -> Result<(), ApiError> {
        if response.ok() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_error_body(response.status(), &body))
    }

    /// Decode a 2xx body, or turn anything else into `ApiError::Http`
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        Self::check_status(&response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
