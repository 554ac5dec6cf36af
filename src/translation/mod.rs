//! 翻译子系统
//!
//! 提供方抽象、必应客户端、批量翻译协调器和语言表。

pub mod batch;
pub mod bing;
pub mod config;
pub mod error;
pub mod languages;
pub mod provider;

pub use batch::{normalize_texts, translate_batch, BatchReport, BatchUnit};
pub use bing::BingTranslator;
pub use config::{resolve_batch_langs, resolve_langs, BingConfig, RequestLangs};
pub use error::{TranslationError, TranslationResult};
pub use provider::{DetectedLanguage, LanguageInfo, TranslatedText, TranslationProvider};
