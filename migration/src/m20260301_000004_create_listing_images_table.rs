use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListingImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ListingImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ListingImages::ListingId)
                            .uuid()
                            .not_null(),
                    )
                    // Blob-store reference
                    .col(
                        ColumnDef::new(ListingImages::Image)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ListingImages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Backstop; listing deletion removes each image row
                    // individually after releasing its blob.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listing_images_listing_id")
                            .from(ListingImages::Table, ListingImages::ListingId)
                            .to(Listings::Table, Listings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_listing_images_listing_id
                ON listing_images (listing_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_listing_images_listing_id")
            .await?;

        manager
            .drop_table(Table::drop().table(ListingImages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ListingImages {
    Table,
    Id,
    ListingId,
    Image,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Listings {
    Table,
    Id,
}
