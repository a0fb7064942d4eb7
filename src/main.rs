use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use parrot::bot::{Reply, ReplyKind, Responder, CONTEXT_CAPACITY};
use parrot::command::ChatCommand;
use parrot::config::Config;
use parrot::session;
use parrot::transcript::Transcript;

#[derive(Parser)]
#[command(name = "parrot")]
#[command(about = "Keyword-matching chatbot over a fixed knowledge base")]
struct Args {
    #[arg(help = "Message to answer once, then exit")]
    prompt: Option<String>,

    #[arg(short, long, help = "Run in chat mode (interactive)")]
    interactive: bool,

    #[arg(short, long, help = "Verbose output")]
    verbose: bool,

    #[arg(long, help = "Show how each reply was scored")]
    explain: bool,

    #[arg(long, help = "Seed for greeting, farewell and fallback choices")]
    seed: Option<u64>,

    #[arg(short, long, help = "Path to a config.toml")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized tokens of a text
    Normalize {
        /// Text to normalize
        text: String,
    },
    /// List knowledge entries with their question tokens
    Knowledge,
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Some(env_path) = parrot::utils::paths::env_file() {
        dotenv::from_path(env_path).ok();
    }

    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    info!("Starting {}...", config.bot.name);
    let mut bot = session::open_session(&config).await?;

    match args.command {
        Some(Commands::Normalize { text }) => {
            let normalized = bot.normalizer().normalize(&text);
            println!("{}", serde_json::to_string(&normalized.tokens)?);
            return Ok(());
        }
        Some(Commands::Knowledge) => {
            show_knowledge(&bot);
            return Ok(());
        }
        None => {}
    }

    match args.prompt.as_deref() {
        Some(prompt) if !args.interactive => {
            let reply = bot.respond(prompt);
            println!("{}", reply.text);
            if args.explain {
                show_explanation(&reply);
            }
        }
        _ => run_interactive_mode(&mut bot, args.explain)?,
    }

    Ok(())
}

fn run_interactive_mode(bot: &mut Responder, explain: bool) -> Result<()> {
    let greeting = bot.pick_greeting();
    let mut transcript = Transcript::new(bot.name(), greeting);

    println!("\n🦜 {} - type ':help' for commands", bot.name());
    println!("════════════════════════════════════");
    if let Some(greeting) = transcript.exchanges.first() {
        println!("{}: {}", bot.name(), greeting.bot);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\nYou: ");
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        if input.trim().is_empty() {
            continue;
        }

        if let Some(command) = ChatCommand::parse(&input) {
            run_command(command, bot, &transcript);
            continue;
        }

        let reply = bot.respond(&input);
        println!("{}: {}", bot.name(), reply.text);
        if explain {
            show_explanation(&reply);
        }
        transcript.push(&input, &reply.text);

        if reply.kind == ReplyKind::Farewell {
            break;
        }
    }

    Ok(())
}

fn run_command(command: ChatCommand, bot: &Responder, transcript: &Transcript) {
    match command {
        ChatCommand::Memory => show_memory(bot),
        ChatCommand::Transcript => print!("{}", transcript),
        ChatCommand::Save(Some(path)) => match transcript.save_json(Path::new(&path)) {
            Ok(()) => println!("✅ Transcript saved to {}", path),
            Err(e) => println!("❌ {:#}", e),
        },
        ChatCommand::Save(None) => println!("Usage: :save <path>"),
        ChatCommand::Help => show_help(),
    }
}

fn show_memory(bot: &Responder) {
    let memory = bot.memory();
    println!("\n🧠 Context ({} of {} turns, oldest first):", memory.len(), CONTEXT_CAPACITY);
    for (i, turn) in memory.context().enumerate() {
        println!("   {}. {:?}", i + 1, turn);
    }
    println!("   Last input: {:?}", memory.last_input());
}

fn show_explanation(reply: &Reply) {
    println!("   ↳ {:?}", reply.kind);
    for candidate in &reply.candidates {
        println!(
            "     {:>4.1}  match={} context={}  \"{}\"",
            candidate.score, candidate.match_count, candidate.context_bonus, candidate.question
        );
    }
}

fn show_knowledge(bot: &Responder) {
    println!("\n📚 Knowledge base ({} entries):", bot.entries().len());
    for entry in bot.entries() {
        let mut tokens: Vec<&str> = entry.tokens.iter().map(String::as_str).collect();
        tokens.sort_unstable();
        println!("   • {}  {:?}", entry.question, tokens);
        println!("     → {}", entry.answer);
    }
}

fn show_help() {
    println!("\n📚 Commands:");
    println!("   • :memory          - Show the remembered turns");
    println!("   • :transcript      - Print the conversation so far");
    println!("   • :save <path>     - Save the conversation as JSON");
    println!("   • :help            - Show this help message");
    println!("   • bye, exit, quit  - End the conversation");
}
