use cascade::{
    schema::TableBuilder,
    stmt::{Type, Value},
    Db,
    DependentFilter,
    Registry,
    Resource,
};
use cascade_server::{AppState, Config};

use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// Serves the clients/projects/tasks demo with dependent select filters.
#[derive(Debug, Parser)]
#[command(name = "clients-projects")]
struct Cli {
    #[arg(long, env = "CASCADE_LISTEN", default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// Path the endpoints are mounted under
    #[arg(long, env = "CASCADE_PREFIX", default_value = Config::DEFAULT_PREFIX)]
    prefix: String,

    #[arg(long, env = "CASCADE_DATABASE_URL", default_value = "sqlite::memory:")]
    database_url: String,

    /// Default page size of resource listings
    #[arg(long, env = "CASCADE_PER_PAGE", default_value_t = Resource::DEFAULT_PER_PAGE)]
    per_page: u64,

    /// Drop and recreate every table before seeding
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> cascade::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::new()
        .with_listen(cli.listen)
        .with_prefix(&cli.prefix)
        .with_database_url(&cli.database_url)
        .with_per_page(cli.per_page);

    let mut builder = Db::builder();
    builder
        .table("clients", clients)
        .table("projects", projects)
        .table("tasks", tasks);

    let db = builder.connect(config.database_url()).await?;

    if cli.reset {
        db.reset_db().await?;
    } else {
        db.push_schema().await?;
    }

    if db.all(db.query("clients")?.limit(1)).await?.is_empty() {
        seed(&db).await?;
    }

    let mut registry = Registry::new();
    registry.register(
        Resource::new("tasks")
            .per_page(config.per_page())
            .filter(client_filter())
            .filter(project_filter()),
    )?;

    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    cascade_server::serve(&config, AppState::new(db, registry), shutdown).await?;
    Ok(())
}

fn clients(t: &mut TableBuilder) {
    t.id();
    t.column("name", Type::String);
    t.has_many("projects", "projects", "client_id");
}

fn projects(t: &mut TableBuilder) {
    t.id();
    t.column("name", Type::String);
    t.column("archived", Type::Bool);
    t.column("client_id", Type::I64);
    t.belongs_to("client", "clients", "client_id");
}

fn tasks(t: &mut TableBuilder) {
    t.id();
    t.column("title", Type::String);
    t.column("client_id", Type::I64).nullable();
    t.column("project_id", Type::I64).nullable();
    t.belongs_to("client", "clients", "client_id");
    t.belongs_to("project", "projects", "project_id");
}

fn client_filter() -> DependentFilter {
    DependentFilter::new("Client", "clients", "client_id")
}

fn project_filter() -> DependentFilter {
    DependentFilter::new("Project", "projects", "project_id")
        .depends_on_foreign_key("dependent-filter-client_id", "client_id")
        .scope(|query| query.where_eq("archived", false))
}

async fn seed(db: &Db) -> cascade::Result<()> {
    db.insert("clients")
        .columns(["id", "name"])
        .values([Value::from(1), Value::from("Acme")])
        .values([Value::from(2), Value::from("Globex")])
        .exec()
        .await?;

    db.insert("projects")
        .columns(["id", "name", "archived", "client_id"])
        .values([Value::from(10), Value::from("Acme Launch"), Value::from(false), Value::from(1)])
        .values([Value::from(11), Value::from("Globex Merger"), Value::from(false), Value::from(2)])
        .values([Value::from(12), Value::from("Acme Legacy"), Value::from(true), Value::from(1)])
        .values([Value::from(13), Value::from("Acme Rebrand"), Value::from(false), Value::from(1)])
        .exec()
        .await?;

    db.insert("tasks")
        .columns(["title", "client_id", "project_id"])
        .values([Value::from("Kickoff"), Value::from(1), Value::from(10)])
        .values([Value::from("Due diligence"), Value::from(2), Value::from(11)])
        .values([Value::from("Archive exports"), Value::from(1), Value::from(12)])
        .values([Value::from("Logo review"), Value::from(1), Value::from(13)])
        .exec()
        .await?;

    tracing::info!("seeded demo data");
    Ok(())
}
