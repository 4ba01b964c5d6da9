use yew::prelude::*;

use crate::config::CONFIG;
use crate::utils::{load_raw_from_storage, save_raw_to_storage, STORAGE_KEY_LANGUAGE};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    Chinese,
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
        }
    }

    /// Cualquier valor desconocido cae en chino
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "en" | "en-us" | "en_us" => Language::English,
            _ => Language::Chinese,
        }
    }

    /// El otro idioma, para el conmutador del panel de cuenta
    pub fn toggled(self) -> Self {
        match self {
            Language::Chinese => Language::English,
            Language::English => Language::Chinese,
        }
    }
}

/// Idioma actual + callback para cambiarlo
#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

impl LanguageContext {
    pub fn code(&self) -> String {
        self.language.as_str().to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    #[prop_or_default]
    pub children: Children,
}

fn initial_language() -> Language {
    load_raw_from_storage(STORAGE_KEY_LANGUAGE)
        .map(|code| Language::from_code(&code))
        .unwrap_or_else(|| Language::from_code(&CONFIG.ui.default_language))
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let language = use_state(initial_language);

    let set_language = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            log::info!("🌐 Idioma: {}", next.as_str());
            if let Err(e) = save_raw_to_storage(STORAGE_KEY_LANGUAGE, next.as_str()) {
                log::warn!("⚠️ {}", e);
            }
            language.set(next);
        })
    };

    let context = LanguageContext {
        language: *language,
        set_language,
    };

    html! {
        <ContextProvider<LanguageContext> {context}>
            { for props.children.iter() }
        </ContextProvider<LanguageContext>>
    }
}
