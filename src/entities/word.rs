use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "words")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub created_date: String, // RFC 3339; SQLite stores timestamps as text
    pub modified_date: String,
    pub word: String,
    pub source_language: String,
    pub translate_language: String,
    #[sea_orm(column_type = "Text")]
    pub definitions: String, // JSON array of strings
    #[sea_orm(column_type = "Text")]
    pub synonyms: String,
    #[sea_orm(column_type = "Text")]
    pub translations: String,
    #[sea_orm(column_type = "Text")]
    pub examples: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
