//! Web 服务器主程序入口

use clap::Parser;

use wordbook::env::{self, EnvVar};
use wordbook::logging::init_tracing;
use wordbook::web::{WebConfig, WebServer};

/// 命令行参数，未给出时使用环境变量配置
#[derive(Parser, Debug)]
#[clap(name = "wordbook-web", version, about = "Wordbook web server")]
struct Args {
    /// 绑定地址
    #[clap(short = 'b', long)]
    bind: Option<String>,

    /// 端口
    #[clap(short = 'p', long)]
    port: Option<u16>,

    /// 前缀树数据集
    #[clap(short = 'd', long)]
    dataset: Option<std::path::PathBuf>,

    /// 静态文件目录
    #[clap(long)]
    static_dir: Option<String>,

    /// 打印环境变量文档后退出
    #[clap(long)]
    env_docs: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    if args.env_docs {
        print!("{}", env::generate_env_docs());
        return Ok(());
    }

    init_tracing(&env::core::LogLevel::get_or_default("info".to_string()));

    let mut web_config = WebConfig::from_env()?;
    if let Some(bind) = args.bind {
        web_config.bind_addr = bind;
    }
    if let Some(port) = args.port {
        web_config.port = port;
    }
    if let Some(dataset) = args.dataset {
        web_config.dataset_path = dataset;
    }
    if let Some(static_dir) = args.static_dir {
        web_config.static_dir = Some(static_dir);
    }

    if let Ok(summary) = env::EnvConfig::from_env() {
        if summary.is_development() {
            summary.print_summary();
        }
    }

    let server = WebServer::new(web_config);
    server.start().await?;

    Ok(())
}
