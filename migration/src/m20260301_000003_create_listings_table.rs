use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Listings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Listings::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(Listings::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Listings::Title).string_len(40).not_null())
                    .col(ColumnDef::new(Listings::Description).text().not_null())
                    .col(
                        ColumnDef::new(Listings::Price)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Listings::Contacts).text().not_null())
                    // Blob-store reference of the primary image
                    .col(ColumnDef::new(Listings::Image).string_len(255))
                    .col(
                        ColumnDef::new(Listings::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Listings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Categories are protected references: a sub-category in
                    // use cannot be removed.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listings_category_id")
                            .from(Listings::Table, Listings::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    // Engine-level backstop only; user deletion walks the
                    // listings one at a time in the application first.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listings_author_id")
                            .from(Listings::Table, Listings::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Newest-first listing feeds
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_listings_created_at
                ON listings (created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_listings_category_id
                ON listings (category_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_listings_author_id
                ON listings (author_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_listings_is_active
                ON listings (is_active);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_listings_created_at;
                DROP INDEX IF EXISTS idx_listings_category_id;
                DROP INDEX IF EXISTS idx_listings_author_id;
                DROP INDEX IF EXISTS idx_listings_is_active;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Listings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Listings {
    Table,
    Id,
    CategoryId,
    AuthorId,
    Title,
    Description,
    Price,
    Contacts,
    Image,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
