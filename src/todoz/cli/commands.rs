use super::render::Renderer;
use super::session::Session;
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use todoz::api::{CmdMessage, TodozApi};
use todoz::config::{resolve_config_dir, ColorMode, TodozConfig, KEYS};
use todoz::error::Result;

struct AppContext {
    config_dir: PathBuf,
    config: TodozConfig,
    renderer: Renderer,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => handle_session(&ctx),
        Commands::Run { script, json } => handle_run(&ctx, &script, json),
        Commands::Config { key, value } => handle_config(ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    let config = TodozConfig::load(&config_dir)?;
    log::debug!("config dir {}", config_dir.display());

    let use_color = !cli.no_color
        && match config.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Term::stdout().features().colors_supported(),
        };
    let renderer = Renderer::new(use_color, config.line_width)?;

    Ok(AppContext {
        config_dir,
        config,
        renderer,
    })
}

fn handle_session(ctx: &AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(TodozApi::new(), &ctx.renderer);
    if stdin.is_terminal() {
        session = session.interactive(ctx.config.prompt.clone());
    }
    session.run(stdin.lock(), &mut io::stdout(), &mut io::stderr())
}

fn handle_run(ctx: &AppContext, script: &Path, json: bool) -> Result<()> {
    let input: Box<dyn BufRead> = if script == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(script)?))
    };

    let mut session = Session::new(TodozApi::new(), &ctx.renderer);
    // per-line messages are noise for --json consumers
    if json {
        session.run(input, &mut io::sink(), &mut io::stderr())?;
        let api = session.into_api();
        println!("{}", serde_json::to_string_pretty(api.todos())?);
    } else {
        session.run(input, &mut io::stdout(), &mut io::stderr())?;
        let api = session.into_api();
        print!("{}", ctx.renderer.list(&api.view())?);
    }
    Ok(())
}

fn handle_config(mut ctx: AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in KEYS {
                println!("{} = {:?}", key, ctx.config.get(key)?);
            }
        }
        (Some(key), None) => println!("{}", ctx.config.get(&key)?),
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.config_dir)?;
            let messages = [CmdMessage::success(format!("{} set to {:?}", key, value))];
            print!("{}", ctx.renderer.messages(&messages)?);
        }
    }
    Ok(())
}
