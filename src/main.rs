//! Web 服务器主程序入口

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use bing_translate_server::translation::{BingConfig, BingTranslator};
use bing_translate_server::web::{WebConfig, WebServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = WebConfig::from_env();

    // 解析命令行参数
    let args: Vec<String> = std::env::args().collect();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" | "-b" => {
                if i + 1 < args.len() {
                    config.bind_addr = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --bind requires an address");
                    std::process::exit(1);
                }
            }
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    config.port = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("Error: Invalid port number");
                        std::process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("Error: --port requires a port number");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Error: Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
    }

    config.validate()?;

    let provider = Arc::new(BingTranslator::new(BingConfig::from_env())?);

    let server = WebServer::new(config, provider);
    server.start().await?;

    Ok(())
}

fn print_help() {
    println!("Bing Translate Server");
    println!();
    println!("USAGE:");
    println!("    bing-translate-server [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -b, --bind <ADDRESS>     Bind address [default: 127.0.0.1]");
    println!("    -p, --port <PORT>        Port number [default: 3000]");
    println!("    -h, --help               Print help information");
    println!();
    println!("ENVIRONMENT:");
    println!("    PORT                     Port number");
    println!("    BIND_ADDRESS             Bind address");
    println!("    BING_BASE_URL            Bing site base URL");
    println!();
    println!("EXAMPLES:");
    println!("    bing-translate-server");
    println!("    bing-translate-server --bind 0.0.0.0 --port 3000");
}
