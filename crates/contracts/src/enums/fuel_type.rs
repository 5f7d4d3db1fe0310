use serde::{Deserialize, Serialize};

/// Типы топлива
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    /// Подпись для витрины (fr)
    pub fn display_name(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "Essence",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Électrique",
            FuelType::Hybrid => "Hybride",
        }
    }

    /// Старое API отдавало `petrol` вместо `GASOLINE`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GASOLINE" | "petrol" => Some(FuelType::Gasoline),
            "DIESEL" | "diesel" => Some(FuelType::Diesel),
            "ELECTRIC" | "electric" => Some(FuelType::Electric),
            "HYBRID" | "hybrid" => Some(FuelType::Hybrid),
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
            .map(|f| f.display_name().to_string())
            .unwrap_or_else(|| code.to_string())
    }
}
