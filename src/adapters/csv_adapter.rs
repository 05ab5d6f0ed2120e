//! Batch conversion of `field,value` CSV rows.
//!
//! Each input row is converted with the target type the schema gives its
//! field. Failures are written into the output row rather than aborting the
//! batch; only I/O and CSV framing errors stop it.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::domain::convert::convert_text;
use crate::domain::error::FixconvError;
use crate::ports::field_schema_port::FieldSchemaPort;

#[derive(Debug, Deserialize)]
struct InputRow {
    field: String,
    value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRow {
    pub field: String,
    pub value: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub result: String,
    pub error: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

pub fn convert_row(schema: &dyn FieldSchemaPort, field: &str, value: &str) -> BatchRow {
    let mut row = BatchRow {
        field: field.to_string(),
        value: value.to_string(),
        type_name: String::new(),
        result: String::new(),
        error: String::new(),
    };

    let Some(target) = schema.target_type(field) else {
        row.error = FixconvError::UnknownField {
            field: field.to_string(),
        }
        .to_string();
        return row;
    };
    row.type_name = target.name().to_string();

    match convert_text(target, value) {
        Ok(converted) => row.result = converted.to_string(),
        Err(e) => row.error = e.to_string(),
    }
    row
}

pub fn convert_csv<R: Read, W: Write>(
    schema: &dyn FieldSchemaPort,
    input: R,
    output: W,
) -> Result<BatchSummary, FixconvError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(input);
    let mut wtr = csv::Writer::from_writer(output);
    let mut summary = BatchSummary::default();

    for (line, record) in rdr.deserialize::<InputRow>().enumerate() {
        let record = record?;
        let row = convert_row(schema, &record.field, &record.value);
        if row.error.is_empty() {
            summary.converted += 1;
        } else {
            tracing::warn!(row = line + 1, field = %row.field, error = %row.error, "row not converted");
            summary.failed += 1;
        }
        wtr.serialize(&row)?;
    }

    wtr.flush()?;
    Ok(summary)
}
