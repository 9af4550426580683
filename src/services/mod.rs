pub mod translator;
pub use translator::{TranslateError, Translator};

pub mod word_service;
pub use word_service::{WordError, WordService};

pub mod word_service_impl;
pub use word_service_impl::SeaOrmWordService;
