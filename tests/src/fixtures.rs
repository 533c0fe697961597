//! The clients/projects scenario shared by the integration tests.
//!
//! Clients own projects, projects carry tags through `project_tag`, and
//! tasks point at both a client and a project.

use cascade::{
    db,
    stmt::{Type, Value},
    Db, DependentFilter, Registry, Resource, SelectFilter,
};

pub const CLIENT: &str = "dependent-filter-client_id";
pub const PROJECT: &str = "dependent-filter-project_id";

pub fn schema() -> db::Builder {
    let mut builder = Db::builder();

    builder
        .table("clients", |t| {
            t.id();
            t.column("name", Type::String);
            t.column("active", Type::Bool);
            t.has_many("projects", "projects", "client_id");
        })
        .table("projects", |t| {
            t.id();
            t.column("name", Type::String);
            t.column("client_id", Type::I64).nullable();
            t.belongs_to("client", "clients", "client_id");
            t.belongs_to_many("tags", "tags", "project_tag", "project_id", "tag_id");
        })
        .table("tags", |t| {
            t.id();
            t.column("name", Type::String);
        })
        .table("project_tag", |t| {
            t.column("project_id", Type::I64);
            t.column("tag_id", Type::I64);
        })
        .table("tasks", |t| {
            t.id();
            t.column("title", Type::String);
            t.column("client_id", Type::I64).nullable();
            t.column("project_id", Type::I64).nullable();
            t.belongs_to("client", "clients", "client_id");
            t.belongs_to("project", "projects", "project_id");
        });

    builder
}

/// Clients `1: Acme` and `2: Globex` (plus the inactive `3: Initech`),
/// projects `10: Acme Launch` and `11: Globex Merger`.
pub async fn seed(db: &Db) {
    db.insert("clients")
        .columns(["id", "name", "active"])
        .values(row([1.into(), "Acme".into(), true.into()]))
        .values(row([2.into(), "Globex".into(), true.into()]))
        .values(row([3.into(), "Initech".into(), false.into()]))
        .exec()
        .await
        .unwrap();

    db.insert("projects")
        .columns(["id", "name", "client_id"])
        .values(row([10.into(), "Acme Launch".into(), 1.into()]))
        .values(row([11.into(), "Globex Merger".into(), 2.into()]))
        .exec()
        .await
        .unwrap();

    db.insert("tags")
        .columns(["id", "name"])
        .values(row([100.into(), "urgent".into()]))
        .values(row([101.into(), "internal".into()]))
        .exec()
        .await
        .unwrap();

    db.insert("project_tag")
        .columns(["project_id", "tag_id"])
        .values(row([10.into(), 100.into()]))
        .values(row([10.into(), 101.into()]))
        .values(row([11.into(), 101.into()]))
        .exec()
        .await
        .unwrap();

    db.insert("tasks")
        .columns(["title", "client_id", "project_id"])
        .values(row(["Kickoff".into(), 1.into(), 10.into()]))
        .values(row(["Due diligence".into(), 2.into(), 11.into()]))
        .values(row(["Retro".into(), 1.into(), 10.into()]))
        .values(row(["Unassigned".into(), Value::Null, Value::Null]))
        .exec()
        .await
        .unwrap();
}

// Pins `.into()` to `Value`
fn row<const N: usize>(values: [Value; N]) -> [Value; N] {
    values
}

pub fn client_filter() -> DependentFilter {
    DependentFilter::new("Client", "clients", "client_id")
}

pub fn project_filter() -> DependentFilter {
    DependentFilter::new("Project", "projects", "project_id")
        .depends_on_foreign_key(CLIENT, "client_id")
}

/// `projects` serves the options of both dependent filters and has a plain
/// filter; `tasks` is listed through the same two dependent filters.
pub fn registry() -> Registry {
    let mut registry = Registry::new();

    registry
        .register(
            Resource::new("projects")
                .filter(client_filter())
                .filter(project_filter())
                .filter(SelectFilter::new("Name", "name").option("Acme Launch", "Acme Launch")),
        )
        .unwrap()
        .register(
            Resource::new("tasks")
                .filter(client_filter())
                .filter(project_filter()),
        )
        .unwrap();

    registry
}

/// A seeded database.
pub async fn db(setup: &impl crate::Setup) -> Db {
    let db = setup.setup(schema()).await;
    seed(&db).await;
    db
}
