use std::{sync::Arc, time::Duration, collections::HashMap, net::SocketAddr};

use axum::{Router, extract::{Path, State}, response::IntoResponse, body::StreamBody, routing::get};
use reqwest::StatusCode;
use tokio::{sync::RwLock, task::JoinHandle};
use tokio_util::io::ReaderStream;

#[derive(Clone, Default)]
pub struct AppState {
    pub requests: HashMap<String, usize>,
}

/// Serves career pages from `./tests/integration/external/career`.
pub struct ExternalServer {
    port: u16,
    handles: Vec<JoinHandle<()>>,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl ExternalServer {
    pub fn new(port: u16) -> ExternalServer {
        ExternalServer { port, handles: vec![] }
    }

    pub async fn start(&mut self) -> Arc<RwLock<AppState>> {
        let external_mock_state = Arc::new(RwLock::new(AppState::default()));
        let external_mock = {
            let port = self.port;
            let state = external_mock_state.clone();
            tokio::spawn(async move { ExternalServer::serve_external_data(state, port).await })
        };
        self.handles.push(external_mock);

        tokio::time::sleep(Duration::from_secs(1)).await; // wait for mock to start

        external_mock_state
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    async fn serve_external_data(state: Arc<RwLock<AppState>>, port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/career/:platform/:tag", get(ExternalServer::get_career_file))
            .with_state(state);

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn get_career_file(
        Path((platform, tag)): Path<(String, String)>,
        State(state): State<Arc<RwLock<AppState>>>,
    ) -> impl IntoResponse {
        println!("[TEST] Career request {platform}/{tag}");
        *state.write().await.requests.entry(format!("{platform}/{tag}")).or_insert(0) += 1;
        let path = format!("./tests/integration/external/career/{platform}/{tag}.html");
        ExternalServer::get_file_from(path).await
    }

    async fn get_file_from(path: String) -> impl IntoResponse {
        let file = match tokio::fs::File::open(path).await {
            Ok(file) => file,
            Err(err) => return Err((StatusCode::NOT_FOUND, format!("File not found: {}", err))),
        };
        let stream = ReaderStream::new(file);
        let body = StreamBody::new(stream);
        Ok(body)
    }
}
