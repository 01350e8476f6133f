//! Integration tests for `DieselAnimalRepository` against embedded PostgreSQL.
//!
//! Opt-in: run with `RUN_PG_EMBEDDED=1 cargo test -- --ignored`.

use dinos::domain::ports::{AnimalRepository, AnimalRepositoryError};
use dinos::domain::{AnimalDraft, AnimalId, NewAnimal};
use dinos::outbound::persistence::{DbPool, DieselAnimalRepository, PoolConfig};
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

mod support;

use support::{
    embedded_postgres_requested, handle_cluster_setup_failure, migrate_schema, reset_database,
    test_cluster,
};

const TEST_DB: &str = "diesel_animal_repo_test";

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    database_url: String,
    repository: DieselAnimalRepository,
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    let database_url = reset_database(&cluster, TEST_DB)?;
    migrate_schema(&database_url).map_err(|err| err.to_string())?;

    let config = PoolConfig::new(&database_url)
        .with_max_connections(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(async { DbPool::new(config).await })
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        database_url,
        repository: DieselAnimalRepository::new(pool),
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    if !embedded_postgres_requested() {
        eprintln!("SKIP-TEST-CLUSTER: set RUN_PG_EMBEDDED=1 to run");
        return None;
    }
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn draft(name: &str, weight: i32, diet: &str) -> AnimalDraft {
    AnimalDraft::try_from_parts(name, weight, diet).expect("valid draft")
}

#[rstest]
#[ignore = "requires embedded Postgres; opt-in via RUN_PG_EMBEDDED=1"]
fn identical_inserts_receive_distinct_generated_ids(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let repository = context.repository.clone();

    let (first, second) = context.runtime.block_on(async {
        let first = repository
            .insert(&NewAnimal::generated(draft("Tiger", 200, "carnivore")))
            .await
            .expect("first insert");
        let second = repository
            .insert(&NewAnimal::generated(draft("Tiger", 200, "carnivore")))
            .await
            .expect("second insert");
        (first, second)
    });

    assert_ne!(first.id(), second.id());
    assert_eq!(first.name(), second.name());
    assert_eq!(first.weight(), second.weight());
}

#[rstest]
#[ignore = "requires embedded Postgres; opt-in via RUN_PG_EMBEDDED=1"]
fn duplicate_explicit_id_is_rejected(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let repository = context.repository.clone();
    let id = AnimalId::random();

    let (stored, duplicate) = context.runtime.block_on(async {
        let stored = repository
            .insert(&NewAnimal::with_id(id, draft("Tiger", 200, "carnivore")))
            .await
            .expect("first insert");
        let duplicate = repository
            .insert(&NewAnimal::with_id(id, draft("Lion", 190, "carnivore")))
            .await;
        (stored, duplicate)
    });

    assert_eq!(stored.id(), id);
    assert_eq!(duplicate, Err(AnimalRepositoryError::duplicate_id(id)));
}

#[rstest]
#[ignore = "requires embedded Postgres; opt-in via RUN_PG_EMBEDDED=1"]
fn records_can_be_read_updated_and_deleted(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let repository = context.repository.clone();

    context.runtime.block_on(async {
        let stored = repository
            .insert(&NewAnimal::generated(draft("Tiger", 200, "carnivore")))
            .await
            .expect("insert");
        let id = stored.id();

        let found = repository.find_by_id(&id).await.expect("find");
        assert_eq!(found.as_ref(), Some(&stored));

        let updated = repository
            .update(&id, &draft("Tiger", 220, "omnivore"))
            .await
            .expect("update")
            .expect("row exists");
        assert_eq!(updated.id(), id);
        assert_eq!(updated.weight().get(), 220);
        assert_eq!(updated.diet().as_str(), "omnivore");

        assert!(repository.delete(&id).await.expect("delete"));
        assert!(!repository.delete(&id).await.expect("second delete"));
        assert_eq!(repository.find_by_id(&id).await.expect("find"), None);
    });
}

#[rstest]
#[ignore = "requires embedded Postgres; opt-in via RUN_PG_EMBEDDED=1"]
fn update_of_unknown_id_reports_absence(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let repository = context.repository.clone();

    let outcome = context.runtime.block_on(async {
        repository
            .update(&AnimalId::random(), &draft("Tiger", 200, "carnivore"))
            .await
    });

    assert_eq!(outcome, Ok(None));
}

#[rstest]
#[ignore = "requires embedded Postgres; opt-in via RUN_PG_EMBEDDED=1"]
fn list_orders_by_name(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let repository = context.repository.clone();

    let names: Vec<String> = context.runtime.block_on(async {
        for name in ["Zebra", "Antelope", "Moose"] {
            repository
                .insert(&NewAnimal::generated(draft(name, 100, "herbivore")))
                .await
                .expect("insert");
        }
        repository
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|animal| animal.name().to_string())
            .collect()
    });

    assert_eq!(names, ["Antelope", "Moose", "Zebra"]);
}

#[rstest]
#[ignore = "requires embedded Postgres; opt-in via RUN_PG_EMBEDDED=1"]
fn externally_written_rows_stay_readable(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let mut client = Client::connect(&context.database_url, NoTls).expect("connect");
    let row = client
        .query_one(
            "INSERT INTO animals (name, weight, diet) VALUES ('', -5, 'x') RETURNING id",
            &[],
        )
        .expect("schema accepts the row");
    let id = AnimalId::from_uuid(row.get(0));
    let repository = context.repository.clone();

    let (listed, found) = context.runtime.block_on(async {
        repository
            .insert(&NewAnimal::generated(draft("Tiger", 200, "carnivore")))
            .await
            .expect("insert");
        let listed = repository.list().await.expect("list");
        let found = repository.find_by_id(&id).await.expect("find");
        (listed, found)
    });

    assert_eq!(listed.len(), 2);
    let stored = found.expect("row exists");
    assert_eq!(stored.name().as_str(), "");
    assert_eq!(stored.weight().get(), -5);
}
