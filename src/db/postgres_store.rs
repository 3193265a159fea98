use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::postgres::PgPool;
use sqlx::types::Json;
use sqlx::{Postgres, QueryBuilder};

use crate::db::document_store::{
    prepare_document, timestamp_now, Condition, Document, DocumentStore, Filter, StoreError,
    ID_FIELD, UPDATED_AT_FIELD,
};
use crate::models::object_id::ObjectId;

/// Document store over a single PostgreSQL table with a JSONB body column.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    db_pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { db_pool: pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.db_pool
    }

    /// Creates the `documents` table and its lookup index if they are missing.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                collection TEXT NOT NULL,
                body JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.db_pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS documents_collection_idx ON documents (collection, created_at, id)",
        )
        .execute(&self.db_pool)
        .await?;

        log::info!("Document table ready");
        Ok(())
    }
}

/// Appends `collection = $n AND <conditions>` to `builder`.
fn push_where(builder: &mut QueryBuilder<'_, Postgres>, collection: &str, filter: &Filter) {
    builder.push("collection = ");
    builder.push_bind(collection.to_string());

    for (field, condition) in filter.conditions() {
        match condition {
            Condition::Eq(value) => {
                let mut probe = Map::new();
                probe.insert(field.clone(), value.clone());
                builder.push(" AND body @> ");
                builder.push_bind(Json(Value::Object(probe)));
            }
            Condition::In(values) => {
                let texts: Vec<String> = values.iter().map(value_as_text).collect();
                builder.push(" AND body ->> ");
                builder.push_bind(field.clone());
                builder.push(" = ANY(");
                builder.push_bind(texts);
                builder.push(")");
            }
        }
    }
}

/// Text form `->>` yields for a JSON value.
fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn into_document(value: Value) -> Result<Document, StoreError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::InvalidDocument(format!("expected an object, found {}", other))),
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn create(&self, collection: &str, fields: Document) -> Result<ObjectId, StoreError> {
        let id = ObjectId::new();
        let document = prepare_document(fields, &id);

        sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
            .bind(id.to_hex())
            .bind(collection)
            .bind(Json(Value::Object(document)))
            .execute(&self.db_pool)
            .await?;

        log::debug!("Inserted document {} into {}", id, collection);
        Ok(id)
    }

    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT body FROM documents WHERE ");
        push_where(&mut builder, collection, filter);
        builder.push(" ORDER BY created_at, id");

        let rows: Vec<Json<Value>> = builder
            .build_query_scalar()
            .fetch_all(&self.db_pool)
            .await?;

        rows.into_iter().map(|Json(body)| into_document(body)).collect()
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, StoreError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT body FROM documents WHERE ");
        push_where(&mut builder, collection, filter);
        builder.push(" ORDER BY created_at, id LIMIT 1");

        let row: Option<Json<Value>> = builder
            .build_query_scalar()
            .fetch_optional(&self.db_pool)
            .await?;

        row.map(|Json(body)| into_document(body)).transpose()
    }

    async fn update_one(&self, collection: &str, filter: &Filter, mut set: Document) -> Result<u64, StoreError> {
        set.remove(ID_FIELD);
        set.insert(UPDATED_AT_FIELD.to_string(), Value::String(timestamp_now()));

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE documents SET body = body || ");
        builder.push_bind(Json(Value::Object(set)));
        builder.push(" WHERE id = (SELECT id FROM documents WHERE ");
        push_where(&mut builder, collection, filter);
        builder.push(" ORDER BY created_at, id LIMIT 1)");

        let result = builder.build().execute(&self.db_pool).await?;
        Ok(result.rows_affected())
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
        )
        .fetch_all(&self.db_pool)
        .await?;
        Ok(names)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.db_pool)
            .await?;
        Ok(())
    }
}
