use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;
use v_password_generator::common::clipboard::{ClipboardWriter, SystemClipboard};
use v_password_generator::common::error::CommandError;
use v_password_generator::common::generator::PasswordOptions;
use v_password_generator::common::helper::config::{load_config, resolve_config_path, save_config};
use v_password_generator::common::session::command::{Command, HELP};
use v_password_generator::common::session::{CopyOutcome, PasswordSession};

#[derive(Parser, Debug)]
#[command(author, version, about = "Random password generator", long_about = None)]
struct Args {
    /// Password length
    #[arg(long, value_parser = clap::value_parser!(u8).range(6..=32))]
    length: Option<u8>,

    /// Include digits 0-9, --digits=false turns them off
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    digits: Option<bool>,

    /// Include symbols, --symbols=false turns them off
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    symbols: Option<bool>,

    /// Config file, falls back to $PWGEN_CONFIG then ./pwgen.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print one password and exit
    #[arg(long)]
    once: bool,

    /// With --once, also copy it to the clipboard
    #[arg(long, requires = "once")]
    copy: bool,
}

fn startup_options(args: &Args, defaults: PasswordOptions) -> PasswordOptions {
    PasswordOptions {
        length: args.length.map(usize::from).unwrap_or(defaults.length),
        include_digits: args.digits.unwrap_or(defaults.include_digits),
        include_symbols: args.symbols.unwrap_or(defaults.include_symbols),
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn render(options: &PasswordOptions, password: &str) {
    println!(
        "Password: {}   (length {}, digits {}, symbols {})",
        password,
        options.length,
        on_off(options.include_digits),
        on_off(options.include_symbols)
    );
}

fn copy_label(copied: bool) -> &'static str {
    if copied { "Copied!" } else { "Copy" }
}

//Reports every flip of the copy flag, including the timed reset
fn spawn_copy_label_printer<F>(mut copied: watch::Receiver<bool>, mut print: F) -> JoinHandle<()>
where
    F: FnMut(&'static str) + Send + 'static,
{
    tokio::spawn(async move {
        while copied.changed().await.is_ok() {
            let label = copy_label(*copied.borrow_and_update());
            print(label);
        }
    })
}

fn show(session: &PasswordSession) {
    let options = session.options();
    let label = copy_label(session.is_copied());
    println!("+---------------+----------------------------------+");
    println!("| {:<13} | {:<32} |", "Password", session.password().unwrap_or(""));
    println!("| {:<13} | {:<32} |", "Length", options.length);
    println!("| {:<13} | {:<32} |", "Digits", on_off(options.include_digits));
    println!("| {:<13} | {:<32} |", "Symbols", on_off(options.include_symbols));
    println!("| {:<13} | {:<32} |", "Clipboard", label);
    println!("+---------------+----------------------------------+");
}

async fn run_once<C: ClipboardWriter>(
    mut session: PasswordSession,
    clipboard: Option<&C>,
) -> anyhow::Result<String> {
    session.mount();
    let password = session.password().unwrap_or("").to_string();
    println!("{password}");

    if let Some(clipboard) = clipboard {
        if session.copy_current_password(clipboard).await == CopyOutcome::Copied {
            //Keep the clipboard owner alive until the feedback window closes
            let mut copied = session.copy_feedback();
            while *copied.borrow_and_update() {
                copied.changed().await?;
            }
        }
    }
    Ok(password)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config_path = resolve_config_path(args.config.clone());
    let mut config = load_config(&config_path)?;
    let options = startup_options(&args, config.defaults);
    let mut session = PasswordSession::new(options, config.copy_feedback.indicator());

    if args.once {
        let clipboard = args.copy.then(SystemClipboard::new);
        return run_once(session, clipboard.as_ref()).await.map(|_| ());
    }

    let clipboard = SystemClipboard::new();
    session.subscribe(Box::new(|options: &PasswordOptions, password: &str| {
        render(options, password)
    }));
    session.mount();
    let _copy_labels = spawn_copy_label_printer(session.copy_feedback(), |label| {
        println!("Clipboard: {label}");
        if label == copy_label(false) {
            //Arrives on its own timer, so put the prompt back
            print!("pwgen> ");
            let _ = io::stdout().flush();
        }
    });
    println!("Type 'help' to see the commands, 'exit' or 'quit' to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("pwgen> ");
        io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("ERR: {e}");
                continue;
            }
        };

        match command {
            Command::SetLength(length) => session.set_length(length),
            Command::ToggleDigits => session.toggle_digits(),
            Command::ToggleSymbols => session.toggle_symbols(),
            Command::Regenerate => session.regenerate(),
            Command::Copy => {
                //The label printer reports success, a failure is only logged
                session.copy_current_password(&clipboard).await;
            }
            Command::Show => show(&session),
            Command::Save => {
                config.defaults = session.options();
                match save_config(&config_path, &config) {
                    Ok(()) => println!("Saved defaults to {}", config_path.display()),
                    Err(e) => println!("ERR: {e}"),
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    info!("Session closed");
    Ok(())
}
