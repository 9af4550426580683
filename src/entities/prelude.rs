pub use super::word::Entity as Words;
