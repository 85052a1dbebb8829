//! End-to-end truncation against a real MySQL server.
//!
//! Runs only when `TRUNCATE_TEST_MYSQL_HOST` is set. The other settings
//! default to a local root login:
//! `TRUNCATE_TEST_MYSQL_PORT`, `TRUNCATE_TEST_MYSQL_USER`,
//! `TRUNCATE_TEST_MYSQL_PASSWORD`, `TRUNCATE_TEST_MYSQL_DATABASE`,
//! `TRUNCATE_TEST_MYSQL_SCHEMA` (default `aws`).

use rand::Rng;
use rand::distributions::Alphanumeric;
use serde_json::json;
use sqlx::{Connection, MySqlConnection};
use table_truncator::TruncateError;
use table_truncator::config::Config;
use table_truncator::handler::InvocationHandler;
use table_truncator::models::{ConnectionParams, TruncateResponse};
use table_truncator::params::StaticParameterStore;

struct TestDb {
    params: ConnectionParams,
    schema: String,
}

fn test_db() -> Option<TestDb> {
    let host = std::env::var("TRUNCATE_TEST_MYSQL_HOST").ok()?;
    let var = |name: &str, default: &str| std::env::var(name).unwrap_or_else(|_| default.into());

    Some(TestDb {
        params: ConnectionParams {
            host,
            port: var("TRUNCATE_TEST_MYSQL_PORT", "3306").parse().unwrap(),
            username: var("TRUNCATE_TEST_MYSQL_USER", "root"),
            password: var("TRUNCATE_TEST_MYSQL_PASSWORD", ""),
            database: var("TRUNCATE_TEST_MYSQL_DATABASE", "mysql"),
        },
        schema: var("TRUNCATE_TEST_MYSQL_SCHEMA", "aws"),
    })
}

impl TestDb {
    fn store(&self) -> StaticParameterStore {
        StaticParameterStore::from_pairs([
            ("mysql-staging-db-name", self.params.database.clone()),
            ("mysql-endpoint", self.params.host.clone()),
            ("mysql-port", self.params.port.to_string()),
            ("mysql-username", self.params.username.clone()),
            ("mysql-password", self.params.password.clone()),
        ])
    }

    fn handler(&self) -> InvocationHandler<StaticParameterStore> {
        let config = Config {
            schema: self.schema.clone(),
            ..Config::default()
        };
        InvocationHandler::from_config(self.store(), &config)
    }

    async fn connect(&self) -> MySqlConnection {
        MySqlConnection::connect_with(&self.params.connect_options())
            .await
            .unwrap()
    }

    /// Create `schema.<random>` holding `rows` rows and return its name.
    async fn create_table(&self, rows: usize) -> String {
        let name = format!("orders_{}", random_suffix()).to_lowercase();
        let mut conn = self.connect().await;

        sqlx::query(&format!("CREATE DATABASE IF NOT EXISTS `{}`", self.schema))
            .execute(&mut conn)
            .await
            .unwrap();
        sqlx::query(&format!(
            "CREATE TABLE `{}`.`{}` (id INT PRIMARY KEY AUTO_INCREMENT, item VARCHAR(64))",
            self.schema, name
        ))
        .execute(&mut conn)
        .await
        .unwrap();

        for i in 0..rows {
            sqlx::query(&format!(
                "INSERT INTO `{}`.`{}` (item) VALUES (?)",
                self.schema, name
            ))
            .bind(format!("item-{}", i))
            .execute(&mut conn)
            .await
            .unwrap();
        }

        conn.close().await.unwrap();
        name
    }

    async fn count_rows(&self, table: &str) -> i64 {
        let mut conn = self.connect().await;
        let (count,): (i64,) =
            sqlx::query_as(&format!("SELECT COUNT(*) FROM `{}`.`{}`", self.schema, table))
                .fetch_one(&mut conn)
                .await
                .unwrap();
        conn.close().await.unwrap();
        count
    }

    async fn drop_table(&self, table: &str) {
        let mut conn = self.connect().await;
        sqlx::query(&format!("DROP TABLE IF EXISTS `{}`.`{}`", self.schema, table))
            .execute(&mut conn)
            .await
            .unwrap();
        conn.close().await.unwrap();
    }
}

fn random_suffix() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect()
}

#[tokio::test]
async fn test_truncate_empties_table() {
    let Some(db) = test_db() else {
        eprintln!("TRUNCATE_TEST_MYSQL_HOST not set, skipping");
        return;
    };
    let table = db.create_table(10).await;
    assert_eq!(db.count_rows(&table).await, 10);

    let response = db
        .handler()
        .handle(json!({ "TableName": table }))
        .await
        .unwrap();

    assert_eq!(response, TruncateResponse::ok());
    assert_eq!(
        serde_json::to_value(response).unwrap(),
        json!({ "statusCode": 200 })
    );
    assert_eq!(db.count_rows(&table).await, 0);

    db.drop_table(&table).await;
}

#[tokio::test]
async fn test_truncate_is_idempotent() {
    let Some(db) = test_db() else {
        eprintln!("TRUNCATE_TEST_MYSQL_HOST not set, skipping");
        return;
    };
    let table = db.create_table(3).await;
    let handler = db.handler();

    for _ in 0..2 {
        let response = handler.handle(json!({ "TableName": table })).await.unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(db.count_rows(&table).await, 0);
    }

    db.drop_table(&table).await;
}

#[tokio::test]
async fn test_nonexistent_table_is_execution_error() {
    let Some(db) = test_db() else {
        eprintln!("TRUNCATE_TEST_MYSQL_HOST not set, skipping");
        return;
    };
    // Make sure the schema exists, and a neighbouring table keeps its rows.
    let neighbour = db.create_table(4).await;

    let name = format!("nonexistent_{}", random_suffix()).to_lowercase();
    let err = db
        .handler()
        .handle(json!({ "TableName": name }))
        .await
        .unwrap_err();

    assert!(
        matches!(err, TruncateError::Execution { .. }),
        "expected execution error, got {:?}",
        err
    );
    assert_eq!(db.count_rows(&neighbour).await, 4);

    db.drop_table(&neighbour).await;
}

#[tokio::test]
async fn test_rejected_credentials_are_connection_error() {
    let Some(db) = test_db() else {
        eprintln!("TRUNCATE_TEST_MYSQL_HOST not set, skipping");
        return;
    };
    let mut store = db.store();
    store.insert("mysql-password", format!("wrong-{}", random_suffix()));
    let handler = InvocationHandler::from_config(store, &Config::default());

    let err = handler
        .handle(json!({ "TableName": "orders" }))
        .await
        .unwrap_err();
    assert!(matches!(err, TruncateError::Connection { .. }));
}
