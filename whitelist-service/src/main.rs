// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The terminal page for the Crypto Devs whitelist registry.

use clap::Parser;
use tokio::io::{AsyncBufReadExt as _, BufReader};
use tracing::error;
use whitelist_client::{
    client_options::ClientOptions,
    controller::{DappController, DappState, Page, PageAction},
    session::DappSession,
    Error,
};
use whitelist_ethereum::connector::WalletConnector;

#[derive(Parser)]
#[command(
    name = "whitelist-service",
    about = "Run the terminal page for the Crypto Devs whitelist registry"
)]
struct ServiceOptions {
    #[command(flatten)]
    client: ClientOptions,
}

/// What a line of input asks the page to do.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Command {
    /// Press the primary button: connect or join, depending on state.
    Press,
    /// Re-read the member counter.
    Refresh,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "" | "join" | "connect" => Some(Command::Press),
        "refresh" => Some(Command::Refresh),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn print_page(page: &Page) {
    println!();
    println!("{}", page.title);
    println!("{}", page.description);
    println!(
        "{} have already joined the Whitelist",
        page.whitelisted_count
    );
    match &page.action {
        PageAction::Button(label) => println!("[ {label} ]"),
        PageAction::Notice(text) => println!("{text}"),
    }
    println!("{}", page.footer);
}

/// A user-facing alert on the page, plus the log record.
fn alert(error: &Error) {
    println!("! {error}");
    error!("{error}");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use is_terminal::IsTerminal as _;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let options = ServiceOptions::parse();
    let config = options.client.config()?;
    let signer = options.client.signer()?;

    let connector = WalletConnector::new(config.rpc_url.clone(), config.chain_id, signer);
    let session = DappSession::new(connector, config.contract_address);
    let mut controller = DappController::new(session);

    // The page connects on startup, as it would on first render.
    if let Err(error) = controller.connect_wallet().await {
        alert(&error);
    }
    print_page(&controller.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_command(&line) else {
            println!("commands: join (or enter), refresh, quit");
            continue;
        };
        match command {
            Command::Quit => break,
            Command::Refresh => {
                if let Err(error) = controller.refresh_count().await {
                    alert(&error);
                }
            }
            Command::Press => match controller.state() {
                DappState::Disconnected => {
                    if let Err(error) = controller.connect_wallet().await {
                        alert(&error);
                    }
                }
                DappState::NotJoined => {
                    // The page cannot be redrawn while the handler awaits
                    // confirmation, so show the in-flight button first.
                    print_page(&Page::loading(controller.whitelisted_count()));
                    if let Err(error) = controller.join_whitelist().await {
                        alert(&error);
                    }
                }
                DappState::Connecting | DappState::Joining | DappState::Joined => {}
            },
        }
        print_page(&controller.render());
    }
    Ok(())
}
