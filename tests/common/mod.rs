#![allow(dead_code)]

use fixconv::domain::target_type::TargetType;
use fixconv::ports::field_schema_port::FieldSchemaPort;
use std::collections::BTreeMap;
use std::io::Write;

pub struct MockSchema {
    pub fields: BTreeMap<String, TargetType>,
}

impl MockSchema {
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, field: &str, target: TargetType) -> Self {
        self.fields.insert(field.to_string(), target);
        self
    }
}

impl FieldSchemaPort for MockSchema {
    fn target_type(&self, field: &str) -> Option<TargetType> {
        self.fields.get(field).copied()
    }

    fn fields(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }
}

pub fn write_temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub const ORDER_FIELDS_INI: &str = r#"
[fields]
Price = Price_t
OrderQty = Qty_t
Side = Char_t
ExpireTime = UTCTimestamp_t
MaturityMonthYear = MonthYear_t
SettlTenor = Tenor_t
Currency = Currency_t
Country = Country_t
Language = Language_t
Urgent = Boolean_t
MaxFloor = Int_t
SeqNum = SeqNum_t
Text = String_t
Control = EnumState

[logging]
level = warn
"#;
