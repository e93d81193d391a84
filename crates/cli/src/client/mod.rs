use api_types::{
    Changes, Created,
    expense::ExpenseNew,
    income::IncomeNew,
    project::{ProjectNew, SaveContribution},
    snapshot::Snapshot,
    task::{TaskNew, TaskStatus, TaskStatusUpdate},
};
use chrono::{DateTime, FixedOffset};
use reqwest::{RequestBuilder, Response, Url};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use crate::error::{AppError, Result};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("Could not connect to the server. Is it running?")]
    Transport(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// `base_url` is treated as a directory: `.../api` and `.../api/` both
    /// resolve endpoints below `api`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url =
            Url::parse(base_url).map_err(|err| AppError::BaseUrl(err.to_string()))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Server(format!("invalid base_url: {err}")))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> std::result::Result<T, ClientError> {
        let res = request.send().await.map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return res.json::<T>().await.map_err(ClientError::Transport);
        }
        Err(error_from(res).await)
    }

    pub async fn snapshot(&self) -> std::result::Result<Snapshot, ClientError> {
        let endpoint = self.endpoint("data")?;
        self.send(self.http.get(endpoint)).await
    }

    pub async fn income_new(
        &self,
        source: &str,
        amount: i64,
        date: DateTime<FixedOffset>,
    ) -> std::result::Result<Created, ClientError> {
        let endpoint = self.endpoint("income")?;
        let payload = IncomeNew {
            source: source.to_string(),
            amount,
            date: Some(date),
        };
        self.send(self.http.post(endpoint).json(&payload)).await
    }

    pub async fn expense_new(
        &self,
        description: &str,
        amount: i64,
        date: DateTime<FixedOffset>,
    ) -> std::result::Result<Created, ClientError> {
        let endpoint = self.endpoint("expenses")?;
        let payload = ExpenseNew {
            description: description.to_string(),
            amount,
            date: Some(date),
        };
        self.send(self.http.post(endpoint).json(&payload)).await
    }

    pub async fn project_new(
        &self,
        name: &str,
        goal: i64,
    ) -> std::result::Result<Created, ClientError> {
        let endpoint = self.endpoint("projects")?;
        let payload = ProjectNew {
            name: name.to_string(),
            goal,
        };
        self.send(self.http.post(endpoint).json(&payload)).await
    }

    pub async fn project_save(
        &self,
        project_id: i64,
        amount: i64,
    ) -> std::result::Result<Changes, ClientError> {
        let endpoint = self.endpoint("projects/save")?;
        let payload = SaveContribution { project_id, amount };
        self.send(self.http.post(endpoint).json(&payload)).await
    }

    pub async fn project_delete(&self, project_id: i64) -> std::result::Result<Changes, ClientError> {
        let endpoint = self.endpoint(&format!("projects/{project_id}"))?;
        self.send(self.http.delete(endpoint)).await
    }

    pub async fn task_new(
        &self,
        project_id: i64,
        description: &str,
    ) -> std::result::Result<Created, ClientError> {
        let endpoint = self.endpoint("tasks")?;
        let payload = TaskNew {
            project_id,
            description: description.to_string(),
        };
        self.send(self.http.post(endpoint).json(&payload)).await
    }

    pub async fn task_set_status(
        &self,
        task_id: i64,
        status: TaskStatus,
    ) -> std::result::Result<Changes, ClientError> {
        let endpoint = self.endpoint(&format!("tasks/{task_id}"))?;
        let payload = TaskStatusUpdate { status };
        self.send(self.http.put(endpoint).json(&payload)).await
    }
}

async fn error_from(res: Response) -> ClientError {
    let status = res.status();
    let body = res
        .json::<ErrorResponse>()
        .await
        .map(|err| err.error)
        .unwrap_or_else(|_| "unknown error".to_string());

    match status.as_u16() {
        400 => ClientError::BadRequest(body),
        404 => ClientError::NotFound(body),
        422 => ClientError::Validation(body),
        _ => ClientError::Server(body),
    }
}
