use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Raw vehicle record
// ============================================================================

/// Сырая запись автомобиля в том виде, в каком её отдаёт API.
///
/// Исторически существуют две формы: поля лежат прямо на объекте
/// (`make`, `year`, `transmission`) либо внутри вложенного `specs`.
/// Запись не валидируется: любой JSON десериализуется, а разбор полей
/// откладывается до нормализатора.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleRecord(pub Value);

impl VehicleRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Поле верхнего уровня
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.as_object().and_then(|o| o.get(name))
    }

    /// Поле внутри `specs`, если `specs` является объектом
    pub fn spec(&self, name: &str) -> Option<&Value> {
        self.field("specs")
            .and_then(Value::as_object)
            .and_then(|o| o.get(name))
    }

    /// Идентификатор записи: `id`, для старых записей `_id`
    pub fn id(&self) -> Option<String> {
        ["id", "_id"]
            .iter()
            .filter_map(|k| self.field(k))
            .find_map(|v| match v {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_and_spec_access() {
        let record = VehicleRecord::new(json!({
            "make": "Renault",
            "specs": { "transmission": "MANUAL" }
        }));
        assert_eq!(record.field("make"), Some(&json!("Renault")));
        assert_eq!(record.spec("transmission"), Some(&json!("MANUAL")));
        assert_eq!(record.spec("make"), None);
    }

    #[test]
    fn test_spec_ignores_non_object_specs() {
        let record = VehicleRecord::new(json!({ "specs": null }));
        assert_eq!(record.spec("color"), None);
        let record = VehicleRecord::new(json!({ "specs": ["color"] }));
        assert_eq!(record.spec("color"), None);
    }

    #[test]
    fn test_id_fallbacks() {
        assert_eq!(
            VehicleRecord::new(json!({ "id": 42 })).id(),
            Some("42".to_string())
        );
        assert_eq!(
            VehicleRecord::new(json!({ "id": "", "_id": "abc" })).id(),
            Some("abc".to_string())
        );
        assert_eq!(VehicleRecord::new(json!(null)).id(), None);
    }

    #[test]
    fn test_deserializes_any_json() {
        let record: VehicleRecord = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(record, VehicleRecord::new(json!([1, 2])));
        assert_eq!(record.field("make"), None);
    }
}
