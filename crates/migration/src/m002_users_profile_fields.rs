use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m002_users_profile_fields"
    }
}

/// Must stay in sync with `warbler_common::DEFAULT_HEADER_IMAGE_URL`.
const DEFAULT_HEADER_IMAGE_URL: &str = "/static/images/warbler-hero.jpg";

#[derive(DeriveIden)]
enum Users {
    Table,
    HeaderImageUrl,
    Bio,
    Location,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite 的 ALTER TABLE 每次只能加一列
        if !manager.has_column("users", "header_image_url").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Users::Table)
                        .add_column(
                            ColumnDef::new(Users::HeaderImageUrl)
                                .text()
                                .not_null()
                                .default(DEFAULT_HEADER_IMAGE_URL),
                        )
                        .to_owned(),
                )
                .await?;
        }
        if !manager.has_column("users", "bio").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Users::Table)
                        .add_column(ColumnDef::new(Users::Bio).text().null())
                        .to_owned(),
                )
                .await?;
        }
        if !manager.has_column("users", "location").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Users::Table)
                        .add_column(ColumnDef::new(Users::Location).text().null())
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
