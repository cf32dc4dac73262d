use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use villagehub_cli::{admin, seeder};
use villagehub_config::DatabaseConfig;
use villagehub_db::{PgPool, init_db_pool};

#[derive(Parser)]
#[command(name = "villagehub-cli")]
#[command(about = "VillageHub CLI - administrative tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new administrator account
    CreateAdmin {
        #[arg(short = 'u', long)]
        username: Option<String>,

        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Give an existing account the ADMIN role
    Promote {
        /// Username of the account to promote
        username: String,
    },
    /// Load sample tourism spots, businesses and events
    Seed,
    /// Remove all tourism spots, businesses and events (accounts are kept)
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn connect() -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::from_env()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;
    Ok(init_db_pool(&config).await?)
}

fn prompt(label: &str, value: Option<String>) -> anyhow::Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new().with_prompt(label).interact_text()?),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let db = connect().await?;

    match cli.command {
        Commands::CreateAdmin {
            username,
            email,
            password,
        } => {
            let username = prompt("Username", username)?;
            let email = prompt("Email address", email)?;
            let password = match password {
                Some(p) => p,
                None => Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords don't match")
                    .interact()?,
            };

            let id = admin::create_admin(&db, &username, &email, &password).await?;
            println!("\n✅ Admin created (id {})", id);
            println!("   Username: {}", username.trim());
        }
        Commands::Promote { username } => {
            admin::promote(&db, &username).await?;
            println!("✅ {} is now an admin", username.trim());
        }
        Commands::Seed => {
            let report = seeder::seed(&db).await?;
            println!(
                "✅ Seeded {} tourism spots, {} businesses, {} events",
                report.spots, report.businesses, report.events
            );
        }
        Commands::ClearSeed => {
            seeder::clear(&db).await?;
            println!("✅ Directory content cleared");
        }
    }

    Ok(())
}
