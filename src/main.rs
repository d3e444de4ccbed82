use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use futures::future::BoxFuture;
use spin::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader};

use forkify_core::app::{AppState, Dispatcher, RecipeApp};
use forkify_core::config::DEFAULT_API_BASE;
use forkify_core::observability::init_tracing;
use forkify_core::source::ForkifyClient;
use forkify_core::storage::JsonFileStore;
use forkify_core::terminal::{parse_command, Command, ShoppingIndex, TerminalRenderer, HELP};
use forkify_core::{Config, Runtime};

/// Search recipes, build a shopping list and keep liked recipes.
#[derive(Debug, Parser)]
#[command(name = "forkify", version)]
struct Cli {
    /// Root URL of the recipe API.
    #[arg(long, env = "FORKIFY_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// File holding liked recipes.
    #[arg(long, env = "FORKIFY_LIKES_PATH", default_value = "likes.json")]
    likes_path: PathBuf,

    /// Search results per page.
    #[arg(long, env = "FORKIFY_RESULTS_PER_PAGE", default_value_t = 10)]
    results_per_page: usize,

    /// Characters of a result title shown before it is shortened.
    #[arg(long, env = "FORKIFY_TITLE_LIMIT", default_value_t = 17)]
    title_limit: usize,

    /// Apply every fetch response in completion order instead of dropping
    /// responses overtaken by a newer request.
    #[arg(long, env = "FORKIFY_LAST_WRITER_WINS")]
    last_writer_wins: bool,

    /// Recipe id to open at startup.
    #[arg(long, env = "FORKIFY_RECIPE")]
    recipe: Option<String>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, env = "FORKIFY_LOG", default_value = "warn")]
    log_level: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            api_base: cli.api_base,
            likes_path: cli.likes_path,
            results_per_page: cli.results_per_page,
            title_limit: cli.title_limit,
            discard_stale_responses: !cli.last_writer_wins,
            initial_recipe: cli.recipe,
            log_level: cli.log_level,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from(Cli::parse());
    init_tracing(&config);
    config.validate().context("invalid configuration")?;

    let source = ForkifyClient::new(&config.api_base).context("create recipe client")?;
    let store = JsonFileStore::new(&config.likes_path);
    let shopping: ShoppingIndex = Arc::new(Mutex::new(Vec::new()));

    let app = RecipeApp::new(config, source, store);
    let renderer = TerminalRenderer::new(Arc::clone(&shopping));
    let spawner = |future: BoxFuture<'static, ()>| {
        tokio::spawn(future);
    };
    let mut runtime = Runtime::new(AppState::new(), app, renderer, spawner);
    let dispatcher = Dispatcher::new(runtime.emitter());

    println!("{HELP}");
    tokio::select! {
        () = runtime.run() => Ok(()),
        result = read_commands(dispatcher, shopping) => result,
    }
}

async fn read_commands(dispatcher: Dispatcher, shopping: ShoppingIndex) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("read stdin")? {
        let visible = shopping.lock().clone();
        match parse_command(&line, &visible) {
            Ok(Some(Command::Action(action))) => {
                dispatcher.dispatch(action);
            }
            Ok(Some(Command::Help)) => println!("{HELP}"),
            Ok(Some(Command::Quit)) => break,
            Ok(None) => {}
            Err(e) => eprintln!("{e}"),
        }
    }

    tracing::debug!("input closed, exiting");
    Ok(())
}
