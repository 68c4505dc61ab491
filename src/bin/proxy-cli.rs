use clap::Parser;
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Parser)]
#[command(name = "proxy-cli")]
#[command(about = "Submit a forwarding job to a proxy worker", long_about = None)]
struct Cli {
    /// Worker base URL.
    #[arg(long, default_value = "http://localhost:3010")]
    proxy_url: String,

    /// Target URL the worker should call.
    #[arg(short, long)]
    url: String,

    /// HTTP method (GET, POST, PUT, DELETE).
    #[arg(short, long, default_value = "GET")]
    method: String,

    /// Request header as key=value. Repeatable.
    #[arg(short = 'H', long = "header", value_parser = parse_pair)]
    headers: Vec<(String, String)>,

    /// Cookie as key=value. Repeatable.
    #[arg(short, long = "cookie", value_parser = parse_pair)]
    cookies: Vec<(String, String)>,

    /// Raw request body.
    #[arg(short, long, default_value = "")]
    body: String,

    /// Timeout in seconds (0 uses the worker default).
    #[arg(short, long, default_value_t = 0)]
    timeout: u64,
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let job = json!({
        "url": cli.url,
        "method": cli.method,
        "headers": cli.headers.into_iter().collect::<HashMap<_, _>>(),
        "cookies": cli.cookies.into_iter().collect::<HashMap<_, _>>(),
        "body": cli.body,
        "timeout": cli.timeout,
    });

    let res = client
        .post(format!("{}/proxy", cli.proxy_url))
        .json(&job)
        .send()
        .await?;

    print_response(res).await?;
    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    println!("Worker returned status {}", status);

    let mut value: Value = res.json().await?;

    // The origin body travels as a JSON byte array; render it as text
    // when it is valid UTF-8.
    if let Some(bytes) = value.get("body").and_then(decode_bytes) {
        if let Ok(text) = String::from_utf8(bytes) {
            value["body"] = Value::String(text);
        }
    }

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn decode_bytes(value: &Value) -> Option<Vec<u8>> {
    value
        .as_array()?
        .iter()
        .map(|n| n.as_u64().and_then(|n| u8::try_from(n).ok()))
        .collect()
}
