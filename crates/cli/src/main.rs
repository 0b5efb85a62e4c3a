use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result, anyhow, bail};
use app::network::DEFAULT_FAILURE_RATE;
use app::{AppConfig, ChatMessage, MoodReel, Role, StyleContext, Theme};
use catalog::{Movie, Mood};
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

/// MoodReel - movie recommendations for how you feel
#[derive(Parser)]
#[command(name = "moodreel")]
#[command(about = "Mood-based movie recommendations: quiz, chat, search and a watchlist", long_about = None)]
struct Cli {
    /// Directory for the persisted watchlist and theme
    #[arg(long, env = "MOODREEL_DATA_DIR", default_value = app::config::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// JSON movie catalog to use instead of the built-in one
    #[arg(long, env = "MOODREEL_CATALOG")]
    catalog: Option<PathBuf>,

    /// Probability that a recommendation request fails
    #[arg(long, env = "MOODREEL_FAILURE_RATE", default_value_t = DEFAULT_FAILURE_RATE)]
    failure_rate: f64,

    /// Skip the simulated network delays
    #[arg(long, env = "MOODREEL_NO_DELAY")]
    no_delay: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the mood quiz (interactive when no answers are given)
    Quiz {
        /// One option emoji per question, in order
        answers: Vec<String>,
    },

    /// Chat with the recommendation bot (interactive when no message is given)
    Chat {
        /// Send a single message and print the reply
        #[arg(long)]
        message: Option<String>,
    },

    /// Get recommendations for a mood
    Recommend {
        /// excited, calm, emotional, happy or relaxed
        #[arg(long)]
        mood: Mood,

        /// Only keep movies tagged with this genre
        #[arg(long)]
        genre: Option<String>,
    },

    /// Search movies by title or genre
    Search {
        /// Case-insensitive text to look for
        query: String,
    },

    /// Show what's trending
    Trending,

    /// Print a random piece of movie trivia
    Trivia,

    /// Show or edit the watchlist
    Watchlist {
        #[command(subcommand)]
        action: Option<WatchlistAction>,
    },

    /// Show or toggle the colour theme
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

#[derive(Subcommand)]
enum WatchlistAction {
    /// List saved movies
    List,
    /// Save a movie by id
    Add { id: String },
    /// Remove a movie by id
    Remove { id: String },
    /// Save the movie if missing, remove it otherwise
    Toggle { id: String },
}

/// Terminal palette that follows the app theme
#[derive(Default)]
struct TerminalStyle {
    light: AtomicBool,
}

impl TerminalStyle {
    fn accent(&self, text: &str) -> ColoredString {
        if self.light.load(Ordering::Relaxed) {
            text.blue().bold()
        } else {
            text.bright_cyan().bold()
        }
    }

    fn highlight(&self, text: &str) -> ColoredString {
        if self.light.load(Ordering::Relaxed) {
            text.magenta()
        } else {
            text.bright_yellow()
        }
    }
}

impl StyleContext for TerminalStyle {
    fn apply_theme(&self, theme: Theme) {
        debug!("Applying {} terminal theme", theme);
        self.light.store(theme == Theme::Light, Ordering::Relaxed);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = AppConfig {
        data_dir: cli.data_dir,
        catalog_path: cli.catalog,
        failure_rate: cli.failure_rate,
        simulate_latency: !cli.no_delay,
    };
    let style = Arc::new(TerminalStyle::default());
    let mut app =
        MoodReel::from_config(&config, style.clone()).context("Failed to start MoodReel")?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Quiz { answers } => handle_quiz(&mut app, &style, answers).await?,
        Commands::Chat { message } => handle_chat(&mut app, &style, message).await?,
        Commands::Recommend { mood, genre } => {
            handle_recommend(&mut app, &style, mood, genre.as_deref()).await?
        }
        Commands::Search { query } => handle_search(&app, &style, &query).await?,
        Commands::Trending => {
            let movies = app.service.get_trending_movies().await;
            print_movies(&app, &style, "Trending Now", &movies);
        }
        Commands::Trivia => {
            println!("{} {}", style.accent("Did you know?"), app.service.random_trivia());
        }
        Commands::Watchlist { action } => {
            handle_watchlist(&mut app, &style, action.unwrap_or(WatchlistAction::List))?
        }
        Commands::Theme { toggle } => {
            let theme = if toggle {
                app.store.toggle_theme()
            } else {
                app.store.state().theme
            };
            println!("Theme: {}", style.accent(theme.token()));
        }
    }

    Ok(())
}

type StdinLines = Lines<BufReader<Stdin>>;

fn stdin_lines() -> StdinLines {
    BufReader::new(tokio::io::stdin()).lines()
}

/// Handle the 'quiz' command
async fn handle_quiz(app: &mut MoodReel, style: &TerminalStyle, answers: Vec<String>) -> Result<()> {
    if answers.is_empty() {
        run_interactive_quiz(app, style).await?;
    } else {
        let total = app.quiz.questions().len();
        if answers.len() != total {
            bail!("Expected {} answers, got {}", total, answers.len());
        }
        for answer in &answers {
            app.quiz.select(answer)?;
            app.quiz.next()?;
        }
    }

    println!("{}", "Analyzing your mood...".dimmed());
    let outcome = app.quiz.submit(&app.service, &mut app.store).await?;

    println!(
        "{} {}",
        "Your mood:".bold(),
        style.highlight(outcome.mood.name())
    );
    println!("{}\n", outcome.description);
    print_movies(app, style, "Recommended For You", &outcome.recommendations);
    Ok(())
}

async fn run_interactive_quiz(app: &mut MoodReel, style: &TerminalStyle) -> Result<()> {
    let mut lines = stdin_lines();

    while let Some(question) = app.quiz.current_question() {
        println!(
            "\n{} {}",
            style.accent(&format!("[{}%]", app.quiz.progress())),
            question.prompt.bold()
        );
        for (i, option) in question.options.iter().enumerate() {
            let marker = if app.quiz.current_answer() == Some(option.value) {
                "*"
            } else {
                " "
            };
            println!(" {}{}. {} {}", marker, i + 1, option.emoji, option.label);
        }
        println!("{}", "Pick 1-4 (or the emoji), 'b' to go back".dimmed());

        let Some(line) = lines.next_line().await? else {
            bail!("Quiz aborted");
        };
        let input = line.trim();
        if input.eq_ignore_ascii_case("b") {
            app.quiz.previous();
            continue;
        }

        let symbol = match input.parse::<usize>() {
            Ok(n) if (1..=question.options.len()).contains(&n) => question.options[n - 1].value,
            _ => input,
        };
        if let Err(e) = app.quiz.select(symbol) {
            println!("{}", e.to_string().red());
            continue;
        }
        if app.quiz.is_last() {
            break;
        }
        app.quiz.next()?;
    }

    Ok(())
}

/// Handle the 'chat' command
async fn handle_chat(app: &mut MoodReel, style: &TerminalStyle, message: Option<String>) -> Result<()> {
    if let Some(text) = message {
        let reply = app
            .chat
            .send(&text, &app.service, &mut app.store)
            .await
            .ok_or_else(|| anyhow!("Nothing to send"))?
            .clone();
        print_message(app, style, &reply);
        return Ok(());
    }

    if let Some(greeting) = app.chat.last_message().cloned() {
        print_message(app, style, &greeting);
    }
    println!(
        "{}",
        "Type a message, '/react <n> <emoji>' to react to message n, or 'quit'".dimmed()
    );

    let mut lines = stdin_lines();
    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
            break;
        }

        if let Some(args) = text.strip_prefix("/react") {
            react(app, args);
            continue;
        }

        let Some(pending) = app.chat.begin(text, &mut app.store) else {
            continue;
        };
        println!("{}", "MoodReel is typing...".dimmed());
        app.service.compose_pause().await;
        let result = app
            .service
            .get_recommendations(pending.mood(), None)
            .await;
        let reply = app.chat.finish(pending, result, &mut app.store).clone();
        print_message(app, style, &reply);
    }

    Ok(())
}

fn react(app: &mut MoodReel, args: &str) {
    let mut parts = args.split_whitespace();
    let (Some(index), Some(emoji)) = (parts.next(), parts.next()) else {
        println!("{}", "Usage: /react <n> <emoji>".red());
        return;
    };

    let target = index
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| app.chat.messages().get(i))
        .map(|m| m.id);
    match target {
        Some(id) => {
            app.chat.add_reaction(id, emoji);
            if let Some(message) = app.chat.messages().iter().find(|m| m.id == id) {
                let reactions: Vec<_> = message.reactions.iter().map(|r| r.emoji()).collect();
                println!("Reactions on #{}: {}", index, reactions.join(" "));
            }
        }
        None => println!("{}", format!("No message #{}", index).red()),
    }
}

/// Handle the 'recommend' command
async fn handle_recommend(
    app: &mut MoodReel,
    style: &TerminalStyle,
    mood: Mood,
    genre: Option<&str>,
) -> Result<()> {
    println!("{}", mood::describe(mood).italic());
    let movies = app.recommend(mood, genre).await?;

    let title = match genre {
        Some(genre) => format!("{} Picks: {}", mood, genre),
        None => format!("{} Picks", mood),
    };
    print_movies(app, style, &title, &movies);
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(app: &MoodReel, style: &TerminalStyle, query: &str) -> Result<()> {
    let movies = app.service.search_movies(query).await?;
    if movies.is_empty() {
        println!("No movies match '{}'", query);
        return Ok(());
    }
    print_movies(app, style, &format!("Search results for '{}'", query), &movies);
    Ok(())
}

/// Handle the 'watchlist' command
fn handle_watchlist(app: &mut MoodReel, style: &TerminalStyle, action: WatchlistAction) -> Result<()> {
    match action {
        WatchlistAction::List => {
            let watchlist = app.store.state().watchlist.clone();
            if watchlist.is_empty() {
                println!("Your watchlist is empty");
            } else {
                print_movies(app, style, "Your Watchlist", &watchlist);
            }
        }
        WatchlistAction::Add { id } => {
            let movie = app
                .add_to_watchlist(&id)
                .ok_or_else(|| anyhow!("Movie {} not found", id))?;
            println!("{} Added {}", "✓".green(), movie.title);
        }
        WatchlistAction::Remove { id } => {
            if !app.store.is_in_watchlist(&id) {
                println!("Movie {} is not in your watchlist", id);
                return Ok(());
            }
            app.store.remove_from_watchlist(&id);
            println!("{} Removed {}", "✓".green(), id);
        }
        WatchlistAction::Toggle { id } => {
            let saved = app
                .toggle_watchlist(&id)
                .ok_or_else(|| anyhow!("Movie {} not found", id))?;
            let verb = if saved { "Added" } else { "Removed" };
            println!("{} {} {}", "✓".green(), verb, id);
        }
    }
    Ok(())
}

fn print_message(app: &MoodReel, style: &TerminalStyle, message: &ChatMessage) {
    let who = match message.role {
        Role::User => "You".bold(),
        Role::Bot => style.accent("MoodReel"),
    };
    println!(
        "{} {} {}",
        message.timestamp.format("%H:%M").to_string().dimmed(),
        who,
        message.text
    );
    if let Some(movies) = &message.movies {
        for movie in movies {
            println!("    {}", format_movie(app, style, movie));
        }
    }
}

fn print_movies(app: &MoodReel, style: &TerminalStyle, title: &str, movies: &[Movie]) {
    println!("{}", style.accent(title));
    for (i, movie) in movies.iter().enumerate() {
        println!("{}. {}", (i + 1).to_string().green(), format_movie(app, style, movie));
    }
}

fn format_movie(app: &MoodReel, style: &TerminalStyle, movie: &Movie) -> String {
    let saved = if app.store.is_in_watchlist(&movie.id) {
        " ♥".red().to_string()
    } else {
        String::new()
    };
    format!(
        "{} ({}) [{}] - IMDb {} - id {}{}",
        movie.title.bold(),
        movie.year,
        movie.genres.join(", "),
        style.highlight(&format!("{:.1}", movie.imdb)),
        movie.id,
        saved
    )
}
