//! Field schema port: which target type a named field converts to.

use crate::domain::target_type::TargetType;

pub trait FieldSchemaPort {
    /// Target type of `field`, or `None` if the field is not in the schema.
    fn target_type(&self, field: &str) -> Option<TargetType>;

    /// Field names known to the schema, sorted.
    fn fields(&self) -> Vec<String>;
}
