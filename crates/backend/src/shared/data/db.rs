use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use std::path::Path;

/// Таблицы локальной копии контента: (имя, DDL)
const CONTENT_TABLES: &[(&str, &str)] = &[
    (
        "category",
        r#"
            CREATE TABLE category (
                id TEXT PRIMARY KEY NOT NULL,
                title TEXT NOT NULL
            );
        "#,
    ),
    (
        "subcategory",
        r#"
            CREATE TABLE subcategory (
                id TEXT PRIMARY KEY NOT NULL,
                title TEXT NOT NULL,
                slug TEXT NOT NULL,
                category_id TEXT
            );
        "#,
    ),
    (
        "project",
        r#"
            CREATE TABLE project (
                id TEXT PRIMARY KEY NOT NULL,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                slug TEXT NOT NULL,
                category_id TEXT,
                subcategory_id TEXT,
                main_image_ref TEXT,
                main_image_alt TEXT,
                featured INTEGER NOT NULL DEFAULT 0,
                location TEXT,
                year INTEGER,
                materials TEXT,
                dimensions TEXT,
                created_at TEXT NOT NULL
            );
        "#,
    ),
    (
        "project_image",
        r#"
            CREATE TABLE project_image (
                id TEXT PRIMARY KEY NOT NULL,
                project_id TEXT NOT NULL,
                position INTEGER NOT NULL DEFAULT 0,
                asset_ref TEXT NOT NULL,
                alt TEXT
            );
        "#,
    ),
];

const CONTENT_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_subcategory_category_slug ON subcategory (category_id, slug);",
    "CREATE INDEX IF NOT EXISTS idx_project_subcategory_slug ON project (subcategory_id, slug);",
    "CREATE INDEX IF NOT EXISTS idx_project_image_project ON project_image (project_id, position);",
];

/// Открыть (создать) файл базы и подготовить схему
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening content database {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

/// База в памяти со схемой; одно соединение, иначе у каждого своя база
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let conn = Database::connect(options).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

async fn table_exists(conn: &DatabaseConnection, table: &str) -> anyhow::Result<bool> {
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?;",
            [table.into()],
        ))
        .await?;
    Ok(!rows.is_empty())
}

/// Создать недостающие таблицы и индексы
pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, ddl) in CONTENT_TABLES {
        if table_exists(conn, table).await? {
            continue;
        }
        tracing::info!("Creating {} table", table);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await?;
    }

    for index in CONTENT_INDEXES {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            index.to_string(),
        ))
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_bootstrap_is_repeatable() {
        let conn = connect_in_memory().await.unwrap();
        ensure_schema(&conn).await.unwrap();
        for (table, _) in CONTENT_TABLES {
            assert!(table_exists(&conn, table).await.unwrap(), "{}", table);
        }
    }
}
