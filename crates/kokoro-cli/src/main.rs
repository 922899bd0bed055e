//! Kokoro CLI - a self-care companion in the terminal
//!
//! Chat about what's weighing on you, watch it become a monster, and
//! spend the power you earn from diary, sleep, mood and to-do records to
//! beat it.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password, Select};
use kokoro::Screen;

use api::{KokoroClient, MonsterResponse};
use config::{Config, LocationPreference};

#[derive(Parser)]
#[command(name = "kokoro")]
#[command(about = "Kokoro CLI - chat your stress into a monster, then beat it", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login and store API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Interactive companion session (chat, monster, attacks)
    Start,

    /// Power bank, streak and active monster at a glance
    Status,

    /// Write (or update) today's diary
    Diary {
        /// Entry date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Log last night's sleep
    Sleep,

    /// Record or undo today's mood
    Mood {
        #[command(subcommand)]
        action: MoodAction,
    },

    /// To-do list operations
    Todo {
        #[command(subcommand)]
        action: TodoAction,
    },

    /// Current weather for the saved or given location
    Weather {
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lon: Option<f64>,
        /// Postal code (JP)
        #[arg(long)]
        zip: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum MoodAction {
    /// Record today's mood (-3..=3)
    Set {
        score: i8,
        /// Emoji shown next to the score
        #[arg(short, long, default_value = "🙂")]
        emoji: String,
    },
    /// Undo the last save (within its 2 second window)
    Undo,
}

#[derive(Subcommand)]
enum TodoAction {
    /// List items
    List,
    /// Add an item
    Add {
        title: String,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,
        /// Start time (HH:mm)
        #[arg(short = 't', long)]
        time: Option<String>,
        /// Free-form memo
        #[arg(short, long, default_value = "")]
        memo: String,
    },
    /// Toggle completion
    Done { id: i64 },
    /// Toggle favorite
    Fav { id: i64 },
    /// Remove an item
    Rm { id: i64 },
    /// Sort by due date (favorites first)
    Sort,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { key } => cmd_login(key).await,
        Commands::Start => cmd_start().await,
        Commands::Status => cmd_status().await,
        Commands::Diary { date } => cmd_diary(date).await,
        Commands::Sleep => cmd_sleep().await,
        Commands::Mood { action } => cmd_mood(action).await,
        Commands::Todo { action } => cmd_todo(action).await,
        Commands::Weather { lat, lon, zip } => cmd_weather(lat, lon, zip).await,
        Commands::Config => cmd_config(),
    }
}

fn client() -> Result<(Config, KokoroClient)> {
    let config = Config::load()?;
    let api_key = config
        .api_key
        .clone()
        .context("Not logged in. Run 'kokoro login' first.")?;
    let client = KokoroClient::new(&config.base_url, &api_key);
    Ok((config, client))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = KokoroClient::new(&config.base_url, &api_key);
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to the Kokoro API. Check the server URL and key.");
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

/// The interactive flow: HOME → CHAT → MONSTER_REVEAL → ATTACK_RESULT,
/// driven by the domain screen state machine.
async fn cmd_start() -> Result<()> {
    let (_, client) = client()?;

    // Login bonus, once per day
    let login = client.login().await?;
    if login.awarded {
        println!(
            "{} ログインボーナス: {}日目 (+{}パワー)",
            "🎁".yellow(),
            login.days,
            login.points
        );
    }

    let mut screen = Screen::Home;
    let mut last_attack: Option<api::AttackResponse> = None;

    loop {
        let assistant = client.get_assistant().await?.name;
        let monster = client.get_monster().await?;
        screen = screen.enforce(assistant.is_some(), monster.is_some());

        match screen {
            Screen::Home => {
                let power = client.power().await?.power;
                println!();
                println!("{} パワー貯金: {}", "⚡".yellow(), power.to_string().bold());
                if let Some(monster) = &monster {
                    print_monster(monster);
                }

                let mut options = vec!["チャットを始める"];
                if monster.is_some() {
                    options.push("モンスターを攻撃する");
                }
                options.push("終了");

                let choice = Select::new()
                    .with_prompt("どうしますか？")
                    .items(&options)
                    .default(0)
                    .interact()?;

                match options[choice] {
                    "チャットを始める" => {
                        let name = match assistant {
                            Some(name) => name,
                            None => {
                                let name: String = Input::new()
                                    .with_prompt("アシスタントの名前を決めてください")
                                    .interact_text()?;
                                let name = name.trim().to_string();
                                if name.is_empty() {
                                    continue;
                                }
                                client.set_assistant(&name).await?;
                                name
                            }
                        };
                        client.start_chat().await?;
                        println!(
                            "{}",
                            format!("{}とのチャットを開始しました。'/done' で終了します。", name)
                                .dimmed()
                        );
                        screen = screen.start_chat(true);
                    }
                    "モンスターを攻撃する" => {
                        last_attack = Some(client.attack().await?);
                        screen = screen.attack(true);
                    }
                    _ => break,
                }
            }

            Screen::Chat => {
                let message: String = Input::new().with_prompt("あなた").interact_text()?;

                if message.trim() == "/done" {
                    println!("{}", "モンスターを生成しています...".dimmed());
                    let monster = client.finish_chat().await?;
                    print_monster(&monster);
                    screen = screen.monster_created();
                } else {
                    let turn = client.send_message(&message).await?;
                    println!("{} {}", "🐣".cyan(), turn.reply);
                }
            }

            Screen::MonsterReveal => {
                let options = ["攻撃する", "ホームに戻る"];
                let choice = Select::new()
                    .with_prompt("モンスターが現れた！")
                    .items(&options)
                    .default(0)
                    .interact()?;

                if choice == 0 {
                    last_attack = Some(client.attack().await?);
                    screen = screen.attack(true);
                } else {
                    screen = screen.restart();
                }
            }

            Screen::AttackResult => {
                if let Some(attack) = last_attack.take() {
                    println!();
                    println!("{} {}のダメージ！", "💥".red(), attack.power.to_string().bold());
                    if attack.defeated {
                        println!("{}", "モンスターを倒した！お疲れさまでした。".green().bold());
                    } else {
                        println!("残りHP: {}", attack.remaining_hp.to_string().yellow());
                    }
                }
                // Returning home clears the monster only once defeated
                client.dismiss_monster().await?;
                screen = screen.restart();
            }
        }
    }

    Ok(())
}

async fn cmd_status() -> Result<()> {
    let (_, client) = client()?;

    let power = client.power().await?.power;
    let assistant = client.get_assistant().await?.name;

    println!("{}", "Kokoro".bold());
    println!(
        "  アシスタント: {}",
        assistant.as_deref().unwrap_or("(未設定)").cyan()
    );
    println!("  パワー貯金: {}", power.to_string().yellow().bold());

    match client.get_monster().await? {
        Some(monster) => print_monster(&monster),
        None => println!("  モンスター: {}", "いません".dimmed()),
    }

    Ok(())
}

async fn cmd_diary(date: Option<String>) -> Result<()> {
    let (_, client) = client()?;

    let date = match date {
        Some(date) => date.parse().context("Invalid date, expected YYYY-MM-DD")?,
        None => Local::now().date_naive(),
    };

    let plan: String = Input::new()
        .with_prompt("今日の計画・振り返り")
        .allow_empty(true)
        .interact_text()?;
    let score: u32 = Input::new().with_prompt("達成スコア (0-100)").interact_text()?;

    let saved = client.save_diary(date, &plan, score).await?;
    println!(
        "{} 日記を保存しました (+{}パワー, 合計 {})",
        "✓".green(),
        saved.credited,
        saved.power_bank
    );

    Ok(())
}

async fn cmd_sleep() -> Result<()> {
    let (_, client) = client()?;

    let bed: String = Input::new().with_prompt("就寝時刻 (HH:mm)").interact_text()?;
    let wake: String = Input::new().with_prompt("起床時刻 (HH:mm)").interact_text()?;

    let today = Local::now().date_naive();
    let saved = client.save_sleep(today, bed.trim(), wake.trim()).await?;

    println!(
        "{} 睡眠を記録しました ({:.1}時間, +{}パワー)",
        "✓".green(),
        saved.record.duration,
        saved.credited
    );

    Ok(())
}

async fn cmd_mood(action: MoodAction) -> Result<()> {
    let (_, client) = client()?;

    match action {
        MoodAction::Set { score, emoji } => {
            let today = Local::now().date_naive();
            let saved = client.save_mood(today, score, &emoji).await?;
            println!("{} 今日の状態を記録しました。", "✓".green());
            println!(
                "{}",
                format!(
                    "{}ms以内なら 'kokoro mood undo' で取り消せます",
                    saved.undo_window_ms
                )
                .dimmed()
            );
        }
        MoodAction::Undo => {
            if client.undo_mood().await?.restored {
                println!("{} 記録を取り消しました。", "✓".green());
            } else {
                println!("{}", "取り消せる記録がありません（期限切れ）。".yellow());
            }
        }
    }

    Ok(())
}

async fn cmd_todo(action: TodoAction) -> Result<()> {
    let (_, client) = client()?;

    match action {
        TodoAction::List => {
            let items = client.list_todos().await?;
            if items.is_empty() {
                println!("To-doはありません。");
                return Ok(());
            }

            for item in items {
                let check = if item.is_completed {
                    "✔".green()
                } else {
                    "○".normal()
                };
                let star = if item.is_favorite { "★".yellow() } else { " ".normal() };
                let due = match (item.due_date, item.start_time.as_deref()) {
                    (Some(date), Some(time)) => format!("{} {}", date, time),
                    (Some(date), None) => date.to_string(),
                    _ => String::new(),
                };
                println!(
                    "  {} {} {} {} {}",
                    check,
                    star,
                    item.id.to_string().dimmed(),
                    item.title.bold(),
                    due.dimmed()
                );
            }
        }

        TodoAction::Add { title, due, time, memo } => {
            let due_date = due
                .map(|d| d.parse())
                .transpose()
                .context("Invalid due date, expected YYYY-MM-DD")?;
            let item = client
                .add_todo(&title, due_date, time.as_deref(), &memo)
                .await?;
            println!("{} 追加しました: {} ({})", "✓".green(), item.title, item.id);
        }

        TodoAction::Done { id } => {
            let toggled = client.toggle_todo(id).await?;
            if toggled.item.is_completed {
                println!(
                    "{} 完了！ (+10パワー, 合計 {})",
                    "✓".green(),
                    toggled.power_bank
                );
            } else {
                println!("{} 未完了に戻しました (合計 {})", "↺".yellow(), toggled.power_bank);
            }
        }

        TodoAction::Fav { id } => {
            let item = client.favorite_todo(id).await?;
            if item.is_favorite {
                println!("{} お気に入りにしました: {}", "★".yellow(), item.title);
            } else {
                println!("{} お気に入りを外しました: {}", "☆".normal(), item.title);
            }
        }

        TodoAction::Rm { id } => {
            client.delete_todo(id).await?;
            println!("{} 削除しました ({})", "✓".green(), id);
        }

        TodoAction::Sort => {
            let items = client.sort_todos().await?;
            println!("{} 日付順に並べ替えました ({}件)", "✓".green(), items.len());
        }
    }

    Ok(())
}

async fn cmd_weather(lat: Option<f64>, lon: Option<f64>, zip: Option<String>) -> Result<()> {
    let (mut config, client) = client()?;

    // Explicit flags win; otherwise fall back to the saved preference
    let (lat, lon, zip) = if lat.is_some() || zip.is_some() {
        (lat, lon, zip)
    } else {
        let saved = config.location.clone().unwrap_or_default();
        (saved.lat, saved.lon, saved.zip)
    };

    if lat.is_none() && zip.is_none() {
        bail!("No location set. Pass --lat/--lon or --zip (it will be remembered).");
    }

    let weather = client.weather(lat, lon, zip.as_deref()).await?;

    let icon = match weather.condition.as_str() {
        "sun" => "☀️",
        "cloud" => "☁️",
        "rain" => "🌧️",
        "snow" => "❄️",
        _ => "🌈",
    };
    println!(
        "{} {}°C {}",
        icon,
        weather.temp_c.round(),
        weather.message.bold()
    );
    if let Some(place) = &weather.place {
        println!("  {} ({})", place.dimmed(), weather.updated_at.with_timezone(&Local));
    }

    // Remember the location for next time
    config.set_location(LocationPreference {
        lat,
        lon,
        zip: zip.clone(),
        name: zip.map(|z| format!("〒{}", z)),
    });
    config.save()?;

    Ok(())
}

fn print_monster(monster: &MonsterResponse) {
    println!();
    println!("  {} {}", "👾".red(), monster.name.bold());
    println!("  {}", monster.description.dimmed());
    println!(
        "  HP: {} / {}   {}",
        monster.current_hp.to_string().red().bold(),
        monster.score,
        if monster.current_hp == 0 {
            "(倒した！)".green().to_string()
        } else {
            String::new()
        }
    );
    if !monster.image_url.starts_with("data:") {
        println!("  画像: {}", monster.image_url.dimmed());
    }
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );
    match &config.location {
        Some(location) if !location.is_empty() => {
            println!(
                "  Location: {}",
                location.name.as_deref().unwrap_or("(coordinates)").cyan()
            );
        }
        _ => println!("  Location: {}", "Not set".dimmed()),
    }

    Ok(())
}
