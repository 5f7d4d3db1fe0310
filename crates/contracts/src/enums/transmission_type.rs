use serde::{Deserialize, Serialize};

/// Типы коробки передач
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransmissionType {
    Manual,
    Automatic,
}

impl TransmissionType {
    /// Подпись для витрины (fr)
    pub fn display_name(&self) -> &'static str {
        match self {
            TransmissionType::Manual => "Manuelle",
            TransmissionType::Automatic => "Automatique",
        }
    }

    /// Парсинг кода: канонические коды в верхнем регистре и старые коды в нижнем.
    /// Смешанный регистр не распознаётся.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MANUAL" | "manual" => Some(TransmissionType::Manual),
            "AUTOMATIC" | "automatic" => Some(TransmissionType::Automatic),
            _ => None,
        }
    }

    /// Подпись для произвольного кода: неизвестный код возвращается как есть,
    /// пустой код даёт пустую подпись.
    pub fn label_for(code: &str) -> String {
        if code.is_empty() {
            return String::new();
        }
        Self::from_code(code)
            .map(|t| t.display_name().to_string())
            .unwrap_or_else(|| code.to_string())
    }
}
