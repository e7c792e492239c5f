use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use viewmodel_kit::config::ObservableConfig;
use viewmodel_kit::logging::init_tracing;
use viewmodel_kit::samples::{
    ChildEvent, ChildViewModel, CounterViewModel, LoginEvent, LoginViewModel, ParentViewModel,
};
use viewmodel_kit::{EventEmitter, StateContainer};

/// How long the relay demo waits for a forwarded message.
const RELAY_WAIT: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(name = "viewmodel-demo", about = "Drive the sample view models")]
struct Cli {
    /// TOML file with an [observable] table. Missing file means defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Increment a counter and print every observed state.
    Counter {
        #[arg(long, default_value_t = 2)]
        times: u32,
    },
    /// Attempt a login and print the resulting event.
    Login { username: String, password: String },
    /// Forward a message from one child view model to another.
    Relay { payload: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ObservableConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ObservableConfig::default(),
    };

    match cli.command {
        Command::Counter { times } => run_counter(times).await,
        Command::Login { username, password } => {
            run_login(&config, &username, &password).await
        }
        Command::Relay { payload } => run_relay(&config, &payload).await,
    }
}

async fn run_counter(times: u32) -> Result<()> {
    let counter = CounterViewModel::new();
    let mut observer = counter.observe_state();

    if let Some(initial) = observer.next().await {
        println!("state count={}", initial.count);
    }
    for _ in 0..times {
        counter.increment();
        if let Some(state) = observer.next().await {
            println!("state count={}", state.count);
        }
    }
    println!("final count={}", counter.current_state().count);
    Ok(())
}

async fn run_login(config: &ObservableConfig, username: &str, password: &str) -> Result<()> {
    let login = LoginViewModel::with_config(config);
    let mut events = login.observe_events();

    login.login(username, password);

    match events.try_recv() {
        Some(LoginEvent::Succeeded { username }) => println!("succeeded user={username}"),
        Some(LoginEvent::Failed { message }) => println!("failed message={message}"),
        None => println!("no event"),
    }
    Ok(())
}

async fn run_relay(config: &ObservableConfig, payload: &str) -> Result<()> {
    let first = Arc::new(ChildViewModel::with_config("first", config));
    let second = Arc::new(ChildViewModel::with_config("second", config));
    let mut forwarded = second.observe_events();

    let parent = ParentViewModel::new(first, second);
    parent.relay();
    parent.command_child(payload);

    let event = tokio::time::timeout(RELAY_WAIT, forwarded.recv())
        .await
        .context("relay timed out")?;
    match event {
        Some(ChildEvent::Message { from, payload }) => println!("{from} received {payload}"),
        None => println!("relay closed"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_login_command() {
        let cli = Cli::parse_from(["viewmodel-demo", "login", "cat", "meow"]);
        assert!(cli.config.is_none());
        match cli.command {
            Command::Login { username, password } => {
                assert_eq!(username, "cat");
                assert_eq!(password, "meow");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn counter_defaults_to_two_increments() {
        let cli = Cli::parse_from(["viewmodel-demo", "--config", "x.toml", "counter"]);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Command::Counter { times: 2 }));
    }
}
