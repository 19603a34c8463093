mod display;

use anyhow::bail;
use clap::{Parser, Subcommand};
use lexnugget_client::{ApiClient, BearerToken};
use lexnugget_ui::{
    BookmarkToggle, LoadOutcome, MemoryTokenStore, PageQuery, load_areas_of_law,
    load_judge_nuggets, load_personal_nuggets, toggle_bookmark,
};

#[derive(Parser)]
#[command(name = "lexnugget", version, about = "Browse case-law nuggets, digests, and bookmarks")]
struct Cli {
    /// Backend base URL, e.g. https://api.example.test
    #[arg(long, env = "LEXNUGGET_BASE_URL")]
    base_url: String,

    /// Bearer token for bookmark and personal-nugget operations
    #[arg(long, env = "LEXNUGGET_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Nuggets decided by a judge
    Judge {
        id: u64,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Areas of law
    Areas {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Your bookmarked nuggets
    Mine {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Case digests
    Digest {
        #[command(subcommand)]
        command: DigestCommand,
    },
    /// Bookmark a nugget, or remove a bookmark
    Bookmark {
        #[command(subcommand)]
        command: BookmarkCommand,
    },
}

#[derive(Subcommand)]
enum DigestCommand {
    /// Look up a stored digest by DL citation number
    Get { citation: String },
    /// Ask the AI service for a digest
    Ai {
        vector_store_id: String,
        citation: String,
    },
    /// Request digest generation with an optional JSON payload
    Generate {
        #[arg(long)]
        data: Option<String>,
    },
}

#[derive(Subcommand)]
enum BookmarkCommand {
    Add { id: u64 },
    Remove { id: u64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("lexnugget v{}", env!("CARGO_PKG_VERSION"));
    let cli = Cli::parse();

    let client = ApiClient::new(cli.base_url.clone());
    let tokens = MemoryTokenStore::empty();
    if let Some(token) = &cli.token {
        tokens.set(BearerToken::new(token.clone()));
    }
    let bearer = cli.token.as_deref().map(BearerToken::new);

    match cli.command {
        Command::Judge { id, page, limit } => {
            let query = PageQuery { page, limit };
            match load_judge_nuggets(&client, id, &query).await {
                LoadOutcome::Loaded(view) => {
                    match &view.judge {
                        Some(judge) => println!("Nuggets of {}", judge.fullname),
                        None => println!("Nuggets of judge {id}"),
                    }
                    if view.nuggets.is_empty() {
                        println!("No related sub-nuggets available.");
                    }
                    for nugget in &view.nuggets {
                        display::nugget_card(nugget);
                    }
                    display::page_footer(&view.pagination);
                }
                LoadOutcome::NotAuthenticated => bail!("judge pages do not require login"),
                LoadOutcome::Failed(message) => bail!(message),
            }
        }
        Command::Areas { page } => match load_areas_of_law(&client, &PageQuery::page(page)).await {
            LoadOutcome::Loaded(view) => {
                for area in &view.areas {
                    display::area_row(area);
                }
                display::page_footer(&view.pagination);
            }
            LoadOutcome::NotAuthenticated => bail!("area pages do not require login"),
            LoadOutcome::Failed(message) => bail!(message),
        },
        Command::Mine { page } => {
            match load_personal_nuggets(&client, &tokens, &PageQuery::page(page)).await {
                LoadOutcome::Loaded(view) => {
                    if view.nuggets.is_empty() {
                        println!("You haven't saved any nuggets yet.");
                    }
                    for nugget in &view.nuggets {
                        display::nugget_card(nugget);
                    }
                    display::page_footer(&view.pagination);
                }
                LoadOutcome::NotAuthenticated => {
                    bail!("You need to be logged in to view your nuggets.")
                }
                LoadOutcome::Failed(message) => bail!(message),
            }
        }
        Command::Digest { command } => match command {
            DigestCommand::Get { citation } => {
                match client
                    .digest_by_citation(&citation, bearer.as_ref())
                    .await?
                    .found()
                {
                    Some(found) => display::digest(&found)?,
                    None => println!("No digest stored for {citation}."),
                }
            }
            DigestCommand::Ai {
                vector_store_id,
                citation,
            } => {
                let result = client
                    .digest_from_ai(&vector_store_id, &citation, bearer.as_ref())
                    .await?;
                display::digest(&result)?;
            }
            DigestCommand::Generate { data } => {
                let payload = data.as_deref().map(serde_json::from_str).transpose()?;
                let body = client.generate_digest(payload, bearer.as_ref()).await?;
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
        },
        Command::Bookmark { command } => {
            let (id, bookmarked) = match command {
                // Seed the toggle so add issues POST and remove DELETE.
                BookmarkCommand::Add { id } => (id, false),
                BookmarkCommand::Remove { id } => (id, true),
            };
            let mut toggle = BookmarkToggle::new(bookmarked);
            let changed = toggle_bookmark(&mut toggle, &client, id, &tokens).await;
            if changed {
                println!(
                    "Nugget {id} is now {}.",
                    if toggle.is_bookmarked() {
                        "bookmarked"
                    } else {
                        "unbookmarked"
                    }
                );
            } else if let Some(message) = toggle.error_message() {
                bail!(message.to_string());
            }
        }
    }

    Ok(())
}
