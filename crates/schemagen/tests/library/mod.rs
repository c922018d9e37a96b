use schemagen::schema::*;

use std::path::PathBuf;

/// Authors editing books. Books have a NOT NULL column with an insert
/// default and a column refreshed on update.
pub fn schema() -> Schema {
    let mut schema = Schema::new("app");

    let author = schema.add_table(
        Table::new("author")
            .with_column(Column::new("id", Type::BigSerial).primary_key())
            .with_column(Column::new("name", Type::Text).not_null()),
    );
    let book = schema.add_table(
        Table::new("book")
            .with_column(Column::new("id", Type::BigSerial).primary_key())
            .with_column(Column::new("title", Type::Text).not_null())
            .with_column(Column::new("editor_id", Type::BigInt))
            .with_column(
                Column::new("active", Type::Bool)
                    .not_null()
                    .default_on(Event::Insert, "TRUE"),
            )
            .with_column(
                Column::new("updated_at", Type::TimestampTz).default_on(Event::Update, "NOW()"),
            ),
    );

    schema.add_relationship(Relationship::many_to_one(
        RelationshipSide::new(book).columns(["editor_id"]),
        RelationshipSide::new(author).columns(["id"]).name("editor"),
    ));

    schema
}

/// The checked-in module generated from [`schema`].
pub fn generated_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/library/generated.rs")
}
