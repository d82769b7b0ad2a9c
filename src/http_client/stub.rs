use super::{BareRequest, HttpClient, HttpClientError, Payload};
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Debug)]
pub struct StubHttpClient {
    results: Mutex<Vec<Result<Payload, HttpClientError>>>,
    requests: Mutex<Vec<BareRequest>>,
}

impl StubHttpClient {
    pub fn new(mut results: Vec<Result<Payload, HttpClientError>>) -> Self {
        results.reverse();

        Self {
            results: results.into(),
            requests: Mutex::new(vec![]),
        }
    }

    pub async fn requests(&self) -> Vec<BareRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl HttpClient for StubHttpClient {
    async fn send(&self, request: &BareRequest) -> Result<Payload, HttpClientError> {
        self.requests.lock().await.push(request.clone());
        self.results.lock().await.pop().expect("stub result")
    }
}
