use sea_orm_migration::prelude::*;

/// Scopes cached entries by translation direction. The same word may now
/// be cached once per (source, target) pair, so the old unique index on
/// `word` alone is replaced with a composite one.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Words::Table)
                    .add_column(
                        ColumnDef::new(Words::SourceLanguage)
                            .string()
                            .not_null()
                            .default("en"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Words::Table)
                    .add_column(
                        ColumnDef::new(Words::TranslateLanguage)
                            .string()
                            .not_null()
                            .default("ru"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_words_word")
                    .table(Words::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_words_word_pair")
                    .table(Words::Table)
                    .col(Words::Word)
                    .col(Words::SourceLanguage)
                    .col(Words::TranslateLanguage)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_words_word_pair")
                    .table(Words::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Words::Table)
                    .drop_column(Words::SourceLanguage)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Words::Table)
                    .drop_column(Words::TranslateLanguage)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_words_word")
                    .table(Words::Table)
                    .col(Words::Word)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Words {
    Table,
    Word,
    SourceLanguage,
    TranslateLanguage,
}
