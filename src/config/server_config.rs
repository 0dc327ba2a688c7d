/// Configuration for the HTTP server and RPC client, read from the environment.
use std::env;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address the server will bind to.
    pub host: String,
    /// The port number the server will listen on.
    pub port: u16,
    /// The file path to the network configuration file.
    pub config_file_path: String,
    /// Timeout applied to every execution layer RPC request, in milliseconds.
    pub rpc_timeout_ms: u64,
}

impl ServerConfig {
    /// Creates a new `ServerConfig` instance from environment variables.
    ///
    /// # Defaults
    ///
    /// - `HOST` defaults to `"0.0.0.0"`.
    /// - `APP_PORT` defaults to `8080`.
    /// - `CONFIG_DIR` defaults to `"./config"` (or `"config/"` in Docker).
    /// - `CONFIG_FILE_NAME` defaults to `"config.json"`.
    /// - `RPC_TIMEOUT_MS` defaults to `10000`.
    pub fn from_env() -> Self {
        let conf_dir = env::var("IN_DOCKER")
            .map(|val| val == "true")
            .unwrap_or(false)
            .then(|| "config/".to_string())
            .unwrap_or_else(|| env::var("CONFIG_DIR").unwrap_or_else(|_| "./config".to_string()));

        let conf_dir = format!("{}/", conf_dir.trim_end_matches('/'));

        // Get config filename (default: config.json), applies to both local and Docker
        let config_file_name =
            env::var("CONFIG_FILE_NAME").unwrap_or_else(|_| "config.json".to_string());

        // Construct full path
        let config_file_path = format!("{}{}", conf_dir, config_file_name);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("APP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            config_file_path,
            rpc_timeout_ms: env::var("RPC_TIMEOUT_MS")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .unwrap_or(10000),
        }
    }

    /// Timeout in whole seconds, as the RPC transport expects.
    pub fn rpc_timeout_seconds(&self) -> u64 {
        self.rpc_timeout_ms / 1000
    }
}
