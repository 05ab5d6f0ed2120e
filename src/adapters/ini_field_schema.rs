//! Field schema read from the `[fields]` section of an INI config.
//!
//! Each entry maps a field name to a type name. Names are resolved to
//! [`TargetType`]s once, at load time.

use std::collections::BTreeMap;

use crate::domain::error::FixconvError;
use crate::domain::target_type::TargetType;
use crate::ports::config_port::ConfigPort;
use crate::ports::field_schema_port::FieldSchemaPort;

pub const FIELDS_SECTION: &str = "fields";

#[derive(Debug, Clone, Default)]
pub struct IniFieldSchema {
    fields: BTreeMap<String, TargetType>,
}

impl IniFieldSchema {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, FixconvError> {
        let mut fields = BTreeMap::new();
        for (field, type_name) in config.section_entries(FIELDS_SECTION) {
            let target =
                TargetType::from_name(&type_name, None).map_err(|e| FixconvError::ConfigInvalid {
                    section: FIELDS_SECTION.into(),
                    key: field.clone(),
                    reason: e.to_string(),
                })?;
            fields.insert(field, target);
        }
        tracing::debug!(count = fields.len(), "loaded field schema");
        Ok(Self { fields })
    }
}

impl FieldSchemaPort for IniFieldSchema {
    fn target_type(&self, field: &str) -> Option<TargetType> {
        self.fields.get(field).copied()
    }

    fn fields(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    #[test]
    fn resolves_type_names() {
        let config = FileConfigAdapter::from_string(
            "[fields]\nPrice = Price_t\nSide = char\nCurrency = Currency_t\n",
        )
        .unwrap();
        let schema = IniFieldSchema::from_config(&config).unwrap();
        assert_eq!(schema.target_type("Price"), Some(TargetType::Decimal));
        assert_eq!(schema.target_type("Side"), Some(TargetType::Char));
        assert_eq!(schema.target_type("Currency"), Some(TargetType::Currency));
        assert_eq!(schema.target_type("Account"), None);
        assert_eq!(schema.fields(), vec!["Currency", "Price", "Side"]);
    }

    #[test]
    fn unknown_type_is_config_error() {
        let config = FileConfigAdapter::from_string("[fields]\nWidget = Gizmo_t\n").unwrap();
        let err = IniFieldSchema::from_config(&config).unwrap_err();
        match err {
            FixconvError::ConfigInvalid { section, key, reason } => {
                assert_eq!(section, "fields");
                assert_eq!(key, "Widget");
                assert!(reason.contains("Gizmo_t"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_section_gives_empty_schema() {
        let config = FileConfigAdapter::from_string("[logging]\nlevel = info\n").unwrap();
        let schema = IniFieldSchema::from_config(&config).unwrap();
        assert!(schema.fields().is_empty());
        assert_eq!(schema.target_type("Price"), None);
    }
}
