//! 词典命令行工具
//!
//! 从数据集构建前缀树后执行一次查询、补全或统计。

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use wordbook::dataset::load_records;
use wordbook::env::{self, EnvVar};
use wordbook::error::DictionaryResult;
use wordbook::logging::init_tracing;
use wordbook::service::QueryService;
use wordbook::trie::TrieIndex;

/// 命令行参数
#[derive(Parser, Debug)]
#[clap(name = "wordbook", version, about = "Dictionary lookup and prefix autocomplete")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// 查询单词释义，输出 JSON
    Lookup {
        word: String,
        #[clap(flatten)]
        source: DatasetArgs,
    },

    /// 按前缀补全，每行输出一个单词
    Suggest {
        prefix: String,
        #[clap(flatten)]
        source: DatasetArgs,
    },

    /// 输出词条数与节点数
    Stats {
        #[clap(flatten)]
        source: DatasetArgs,
    },
}

#[derive(Parser, Debug)]
struct DatasetArgs {
    /// 数据集 JSON 文件，默认读取 WORDBOOK_DATASET_PATH
    #[clap(short = 'd', long)]
    dataset: Option<PathBuf>,

    /// 日志级别
    #[clap(long, default_value = "warn")]
    log_level: String,
}

impl DatasetArgs {
    fn build_index(&self) -> DictionaryResult<TrieIndex> {
        init_tracing(&self.log_level);

        let path = match self.dataset {
            Some(ref path) => path.clone(),
            None => env::dataset::Path::get_or_default(PathBuf::from("util/data.json")),
        };
        TrieIndex::from_records(load_records(path)?)
    }
}

fn run(cli: Cli) -> DictionaryResult<()> {
    match cli.command {
        Command::Lookup { word, source } => {
            let index = source.build_index()?;
            let service = QueryService::new(Arc::new(index), 1)?;
            let outcome = service.lookup(&word)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Command::Suggest { prefix, source } => {
            let index = source.build_index()?;
            for word in index.autocomplete(&prefix)? {
                println!("{}", word);
            }
        }
        Command::Stats { source } => {
            let index = source.build_index()?;
            println!("words: {}", index.len());
            println!("nodes: {}", index.node_count());
        }
    }
    Ok(())
}

fn main() {
    dotenv::dotenv().ok();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
