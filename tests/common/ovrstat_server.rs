use std::process::{Command, Child};

use assert_cmd::prelude::CommandCargoExt;
use predicates::{function::FnPredicate, Predicate};
use reqwest::Response;
use ovrstat_rs::config_handler::Config;

pub struct OvrstatServer {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for OvrstatServer {
    fn drop(&mut self) {
        if let Some(child) = self.child_process.as_mut() {
            child.kill().expect("Should kill");
        }
    }
}

impl OvrstatServer {
    pub fn new(port: u16) -> OvrstatServer {
        OvrstatServer { port, child_process: None }
    }

    pub fn start(&mut self, path: &str, external_url: &str) {
        let config = Config {
            port: self.port,
            base_url: format!("{external_url}/career"),
            db_path: format!("{}/db", path),
            ..Default::default()
        };

        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        let child_process = Command::cargo_bin("ovrstat-rs")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .env_remove("PORT")
            .env_remove("DB_PATH")
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
    }

    pub async fn get_stats(
        &self,
        platform: &str,
        tag: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::get(format!("http://localhost:{}/stats/{platform}/{tag}", self.port)).await?)
    }

    pub async fn get_healthcheck(&self) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        Ok(reqwest::get(format!("http://localhost:{}/healthcheck", self.port))
            .await?.json().await?)
    }

    pub async fn wait_until_healthy(&self) -> serde_json::Value {
        let predicate = predicates::function::function(|e: &serde_json::Value| e["status"] == "OK");
        self.retry_until(predicate, 100).await
    }

    pub async fn retry_until<F>(
        &self,
        predicate: FnPredicate<F, serde_json::Value>,
        retry_ms: u64,
    ) -> serde_json::Value
    where
        F: Fn(&serde_json::Value) -> bool,
    {
        let mut nr_loops = 0;
        loop {
            if let Ok(health) = self.get_healthcheck().await {
                if predicate.eval(&health) {
                    return health;
                }
            }
            tokio::time::sleep(std::time::Duration::from_millis(retry_ms)).await;
            nr_loops += 1;
            if nr_loops > 300 {
                panic!("retry failed");
            }
        }
    }
}
