use catalog_bridge::api::{build_http_client, ApiError};
use catalog_bridge::cache::ProductCache;
use catalog_bridge::config::{self, DEFAULT_HOST, DEFAULT_LISTING_LIMIT, DEFAULT_PORT};
use catalog_bridge::models::{AppState, Product, ProductInput};
use catalog_bridge::routes::build_router;
use catalog_bridge::settings::SettingsStore;

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use comfy_table::{Table, presets, modifiers, ContentArrangement};
use terminal_size::{Width, terminal_size};

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let client = match build_http_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    };

    AppState {
        settings: Arc::new(SettingsStore::from_env()),
        cache: ProductCache::new(),
        client,
        cache_ttl_seconds: config::get_cache_ttl(),
        public_base_url: config::get_public_base_url(),
        custom_css: None,
    }
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting catalog bridge server");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn print_products_table(products: &[Product]) {
    if products.is_empty() {
        println!("(no products)");
        return;
    }
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }

    table.set_header(vec!["ID", "Name", "Slug", "Price (EUR)", "Category", "In stock", "Rating"]);
    for p in products {
        table.add_row(vec![
            p.id.clone(),
            p.name.clone(),
            p.slug.clone(),
            format!("{:.2}", p.price_eur),
            p.category.clone(),
            if p.in_stock { "yes".into() } else { "no".into() },
            format!("{:.1}", p.rating),
        ]);
    }
    println!("\n{table}\n");
}

fn exit_with_api_error(context: &str, e: &ApiError) -> ! {
    tracing::error!(%e, "{}", context);
    eprintln!("{}: {}", yansi::Paint::new(context).red(), e);
    if e.is_retryable() {
        eprintln!("{}", yansi::Paint::new("This looks like a network problem; retrying later may help.").yellow());
    }
    process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "catalog-bridge",
    author,
    version,
    about = "Catalog API bridge: public product listing and admin tools",
    long_about = r#"catalog-bridge fetches products from a remote Catalog API, sanitizes them and
serves them as a public listing plus an admin page for connection settings and new products.

The API base URL and key come from the settings file (edited on the admin page or with
`catalog-bridge settings set`), falling back to CATALOG_API_URL / CATALOG_API_KEY.

Examples:
  1) Run the web UI:
      catalog-bridge serve --host 127.0.0.1 --port 8080
  2) Inspect the catalog:
      catalog-bridge products list --limit 20
  3) Create a product:
      catalog-bridge products add --name "Moka Pot" --price 24.90 --in-stock
"#,
    after_help = "Use `catalog-bridge <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Log outbound API requests and responses
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration and API connectivity
    #[command(about = "Validate configuration and ensure API connectivity.", long_about = "Check that an API base URL is configured, then fetch the product list once to confirm the API answers with a valid payload.")]
    CheckConfig,
    /// Work with the remote catalog
    Products {
        #[command(subcommand)]
        sub: ProductCommands,
    },
    /// Show or change the stored connection settings
    Settings {
        #[command(subcommand)]
        sub: SettingsCommands,
    },
}

#[derive(Subcommand)]
enum ProductCommands {
    #[command(about = "List products", long_about = "Fetch the product list from the Catalog API and print it as a table (or JSON with --json).")]
    List {
        /// Maximum number of products to show
        #[arg(long, default_value_t = DEFAULT_LISTING_LIMIT)]
        limit: usize,
        /// Print sanitized products as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Add a product", long_about = "Create a product through the Catalog API. Name and a positive price are required; the slug is derived from the name when omitted.")]
    Add {
        #[arg(long)]
        name: String,
        /// Price in EUR
        #[arg(long)]
        price: f64,
        #[arg(long, default_value = "")]
        slug: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Image URL
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long)]
        in_stock: bool,
        #[arg(long, default_value_t = 0.0)]
        rating: f64,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Print the effective settings (the API key is masked)
    Show,
    /// Save a new API base URL and key
    Set {
        #[arg(long)]
        api_url: String,
        #[arg(long)]
        api_key: String,
    },
}

fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".into();
    }
    let visible: String = key.chars().take(4).collect();
    format!("{}…", visible)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_directive = if cli.verbose { "catalog_bridge=debug" } else { "catalog_bridge=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    let state = build_state_from_env(cli.env_file.as_deref());

    // No command: serve the web app with defaults
    let Some(command) = cli.command else {
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };

    match command {
        Commands::Serve { host, port, stylesheet } => {
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig => {
            let settings = state.settings.load().await;
            if settings.api_url.trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("API base URL is not configured").red());
                process::exit(1);
            }
            if settings.api_key.trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("API key is not configured; adding products will fail").yellow());
            }
            let client = state.catalog_client().await;
            match client.list_products().await {
                Ok(products) => {
                    println!(
                        "{} ({} products returned)",
                        yansi::Paint::new("Configuration looks valid").green(),
                        products.len()
                    );
                }
                Err(e) => exit_with_api_error("Configuration appears invalid", &e),
            }
        }
        Commands::Products { sub } => {
            let client = state.catalog_client().await;
            match sub {
                ProductCommands::List { limit, json } => {
                    let products = match client.list_products().await {
                        Ok(p) => p,
                        Err(e) => exit_with_api_error("Error fetching products", &e),
                    };
                    let shown: Vec<Product> = products.into_iter().take(limit).collect();
                    if json {
                        match serde_json::to_string_pretty(&shown) {
                            Ok(s) => println!("{}", s),
                            Err(e) => {
                                eprintln!("{}: {}", yansi::Paint::new("Failed to encode products").red(), e);
                                process::exit(1);
                            }
                        }
                    } else {
                        print_products_table(&shown);
                    }
                }
                ProductCommands::Add { name, price, slug, description, image, category, in_stock, rating } => {
                    let input = ProductInput {
                        name,
                        slug,
                        price_eur: price,
                        description,
                        image,
                        category,
                        in_stock,
                        rating,
                    };
                    match client.add_product(&input).await {
                        Ok(created) => println!(
                            "{} {}",
                            yansi::Paint::new("Product added successfully! ID:").green(),
                            yansi::Paint::new(created.product_id).cyan()
                        ),
                        Err(e) => exit_with_api_error("Failed to add product", &e),
                    }
                }
            }
        }
        Commands::Settings { sub } => match sub {
            SettingsCommands::Show => {
                let settings = state.settings.load().await;
                println!("{}", yansi::Paint::new("setting\tvalue").bold().underline());
                println!("file\t{}", state.settings.path().display());
                println!("api_url\t{}", if settings.api_url.is_empty() { "(not set)" } else { settings.api_url.as_str() });
                println!("api_key\t{}", mask_key(&settings.api_key));
                println!("cache_ttl\t{}s", state.cache_ttl_seconds);
            }
            SettingsCommands::Set { api_url, api_key } => match state.settings.save(&api_url, &api_key).await {
                Ok(saved) => println!(
                    "{} {}",
                    yansi::Paint::new("Settings saved for").green(),
                    yansi::Paint::new(saved.api_url).cyan()
                ),
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Failed to save settings").red(), e);
                    process::exit(1);
                }
            },
        },
    }
}
