use clap::{Parser, Subcommand};
use relax_client::{
    API_ROOT_VAR, ApiId, BASE_URL_VAR, ClientConfig, ORIGIN_VAR, RelaxApi, RequestError, error,
    info,
};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Endpoint base, takes precedence over `--base-url`
    #[arg(long, env = API_ROOT_VAR)]
    api_root: Option<String>,

    /// Application base URL, `apidoc` is appended to it
    #[arg(long, env = BASE_URL_VAR)]
    base_url: Option<String>,

    /// Origin the relaxer endpoint resolves against
    #[arg(long, env = ORIGIN_VAR)]
    origin: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// List the documented APIs
    List {
        /// Query parameters as key=value
        #[arg(value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
    /// Fetch one API entry by id
    Fetch {
        #[arg(value_parser = parse_api_id)]
        id: ApiId,

        /// Query parameters as key=value
        #[arg(value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
    /// Post a JSON body to the relaxer
    Relax {
        #[arg(value_parser = parse_json)]
        body: serde_json::Value,
    },
}

impl Cli {
    fn config(&self) -> ClientConfig {
        ClientConfig::from_lookup(|key| match key {
            API_ROOT_VAR => self.api_root.clone(),
            BASE_URL_VAR => self.base_url.clone(),
            ORIGIN_VAR => self.origin.clone(),
            _ => None,
        })
    }
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let api = match RelaxApi::new(&cli.config()) {
        Ok(api) => api,
        Err(e) => {
            error!("Could not configure client: {e} ({})", describe_source(&e));
            return ExitCode::FAILURE;
        }
    };
    info!("Using endpoint root {} (origin {})", api.root(), api.origin());

    let result = match &cli.command {
        Command::List { params } => api.get().list_apis(non_empty(params)).await,
        Command::Fetch { id, params } => api.get().fetch_api(id.clone(), non_empty(params)).await,
        Command::Relax { body } => api.post().relaxer(body).await,
    };
    match result {
        Ok(response) => print_response(response).await,
        Err(e) => {
            report_request_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn parse_key_val(pair: &str) -> Result<(String, String), String> {
    pair.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{pair}'"))
}

fn parse_api_id(id: &str) -> Result<ApiId, String> {
    Ok(id.parse::<i64>().map_or_else(|_| ApiId::from(id), ApiId::from))
}

fn parse_json(body: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(body).map_err(|e| format!("not valid JSON: {e}"))
}

fn non_empty(params: &[(String, String)]) -> Option<&[(String, String)]> {
    (!params.is_empty()).then_some(params)
}

async fn print_response(response: relax_client::reqwest::Response) -> ExitCode {
    let status = response.status();
    if status.is_success() {
        info!("{status} from {}", response.url());
    } else {
        relax_client::warn!("{status} from {}", response.url());
    }
    match response.text().await {
        Ok(body) => {
            println!("{body}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Could not read response body: {e}");
            ExitCode::FAILURE
        }
    }
}

fn report_request_error(e: &RequestError) {
    error!("Request failed: {e} ({})", describe_source(e));
}

fn describe_source(e: &dyn std::error::Error) -> String {
    e.source().map_or_else(|| "no further details".to_string(), ToString::to_string)
}
