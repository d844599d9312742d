//! Process-wide language preference.
//!
//! The archive is bilingual (Arabic/English). A single preference drives
//! which side of every [`Bilingual`](crate::Bilingual) value is rendered
//! and the document text direction. Leaf consumers read it through one
//! shared store with an explicit getter/setter and a narrow subscription
//! mechanism instead of scattered mutable statics.

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, OnceLock, RwLock};

use serde::{Deserialize, Serialize};

/// The two supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Document text direction for this language.
    pub fn direction(&self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            Language::En => "ltr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" | "arabic" => Ok(Language::Ar),
            "en" | "english" => Ok(Language::En),
            other => Err(format!("Unknown language: {other}")),
        }
    }
}

type Subscriber = Box<dyn Fn(Language) + Send + Sync>;

/// Shared holder for the active language preference.
pub struct LanguageStore {
    current: RwLock<Language>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl LanguageStore {
    pub fn new(initial: Language) -> Self {
        Self {
            current: RwLock::new(initial),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub fn get(&self) -> Language {
        self.current.read().map(|lang| *lang).unwrap_or_default()
    }

    /// Switch the active language and notify subscribers of the change.
    /// Setting the already-active language is a no-op.
    pub fn set(&self, language: Language) {
        {
            let Ok(mut current) = self.current.write() else {
                return;
            };
            if *current == language {
                return;
            }
            *current = language;
        }
        if let Ok(subscribers) = self.subscribers.lock() {
            for subscriber in subscribers.iter() {
                subscriber(language);
            }
        }
    }

    /// Register a callback invoked on every language change.
    pub fn subscribe(&self, callback: impl Fn(Language) + Send + Sync + 'static) {
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(Box::new(callback));
        }
    }
}

impl Default for LanguageStore {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// The process-wide store. Created on first access with the default
/// language; callers restore a persisted preference via [`LanguageStore::set`].
pub fn language_store() -> &'static LanguageStore {
    static STORE: OnceLock<LanguageStore> = OnceLock::new();
    STORE.get_or_init(LanguageStore::default)
}
