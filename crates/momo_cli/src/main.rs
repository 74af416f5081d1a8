use anyhow::Result;
use clap::Parser;
use momo_chat::ChatOrchestrator;
use momo_core::{
    Action, Character, Clock, MomoConfig, Personality, PetError, PetState, SystemClock,
};
use momo_memory::{FileStorage, PersistenceAdapter};
use momo_store::{DecayScheduler, PetStore};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long, default_value = "momo.toml")]
    config: String,

    /// Override the data directory
    #[arg(short, long)]
    data_dir: Option<String>,

    /// Pet name used when no saved pet exists
    #[arg(long)]
    name: Option<String>,

    /// Personality used when no saved pet exists
    #[arg(long)]
    personality: Option<String>,

    /// Character used when no saved pet exists
    #[arg(long)]
    character: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut config = MomoConfig::load_or_default(&args.config);
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = dir;
    }
    if let Some(name) = args.name {
        config.pet.name = name;
    }
    if let Some(personality) = args.personality {
        config.pet.personality = personality;
    }
    if let Some(character) = args.character {
        config.pet.character = character;
    }

    let personality: Personality = config.pet.personality.parse()?;
    let character: Character = config.pet.character.parse()?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    info!("Opening storage at {}", config.storage.data_dir);
    let storage = Arc::new(FileStorage::new(&config.storage.data_dir).await?);
    let persistence = PersistenceAdapter::new(storage, config.storage.state_key.clone());

    let store = Arc::new(
        PetStore::load_or_create(
            clock.clone(),
            persistence,
            &config.pet.name,
            personality,
            character,
        )
        .await,
    );

    let scheduler = DecayScheduler::new();
    // Catch up any time that passed while the app was closed, in one shot.
    scheduler.on_resume(&store, clock.now()).await;

    // Periodic decay tick for as long as the session runs.
    {
        let store = store.clone();
        let clock = clock.clone();
        let scheduler = scheduler.clone();
        let interval_secs = config.sim.tick_interval_secs;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
            loop {
                interval.tick().await;
                scheduler.tick(&store, clock.now()).await;
            }
        });
    }

    let orchestrator = ChatOrchestrator::new(&config.llm, clock.clone());

    let state = store.state().await;
    println!(
        "{} {} is here! Type 'help' for commands, or just talk.",
        state.mood.indicator(),
        state.name
    );
    print_status(&state);

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => print_help(),
            "status" => print_status(&store.state().await),
            "reset" => {
                let state = store
                    .create_pet(&config.pet.name, personality, character)
                    .await;
                println!(
                    "{} {} is here! A brand new friend.",
                    state.mood.indicator(),
                    state.name
                );
            }
            _ => {
                // Care actions first; anything unrecognized is chat.
                if let Ok(action) = line.parse::<Action>() {
                    let message = store.perform_action(action).await;
                    let state = store.state().await;
                    println!("{} {}: {}", state.mood.indicator(), state.name, message.content);
                    continue;
                }
                if let Some(rest) = line.strip_prefix("rename ") {
                    store.set_name(rest.trim()).await;
                    println!("Your pet now goes by {}.", rest.trim());
                    continue;
                }
                if let Some(rest) = line.strip_prefix("character ") {
                    match rest.trim().parse::<Character>() {
                        Ok(character) => {
                            store.set_character(character).await;
                            println!("Switched to {}.", character.display_name());
                        }
                        Err(e) => println!("{e}"),
                    }
                    continue;
                }
                chat(&orchestrator, &store, line).await;
            }
        }
    }

    println!("See you soon!");
    Ok(())
}

async fn chat(orchestrator: &ChatOrchestrator, store: &PetStore, line: &str) {
    match orchestrator.send_message(store, line).await {
        Ok(reply) => {
            let state = store.state().await;
            println!("{} {}: {}", state.mood.indicator(), state.name, reply.content);
        }
        Err(PetError::TooUnhappy { name }) => {
            println!("{name} turns away... try 'feed', 'play', 'clean', or 'sleep' first.");
        }
        Err(PetError::ConcurrentSubmission) => {
            println!("One moment, a reply is already on its way.");
        }
        Err(e) => println!("{e}"),
    }
}

fn print_status(state: &PetState) {
    let stats = &state.stats;
    println!(
        "  hunger {:>5.1}  happiness {:>5.1}  energy {:>5.1}  hygiene {:>5.1}",
        stats.hunger, stats.happiness, stats.energy, stats.hygiene
    );
    println!(
        "  mood: {} {}{}",
        state.mood,
        state.mood.indicator(),
        if stats.needs_attention() {
            "  (needs attention!)"
        } else {
            ""
        }
    );
}

fn print_help() {
    println!("Commands:");
    println!("  feed | play | clean | sleep   care for your pet");
    println!("  status                        show needs and mood");
    println!("  rename <name>                 give your pet a new name");
    println!("  character <mochi|biscuit|pepper>  change the artwork");
    println!("  reset                         start over with a fresh pet");
    println!("  quit                          save and leave");
    println!("Anything else is chat; your pet will answer.");
}
