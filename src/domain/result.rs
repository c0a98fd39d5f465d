//! Crate-wide result alias

use super::errors::MedrosterError;

/// Result of loading, configuring or exporting
///
/// ```
/// use medroster::domain::{MedrosterError, RecordError, RecordKind, Result};
///
/// fn check_arity(found: usize) -> Result<()> {
///     let expected = RecordKind::Nurse.field_count();
///     if found != expected {
///         return Err(RecordError::FieldCount { kind: RecordKind::Nurse, expected, found }.into());
///     }
///     Ok(())
/// }
///
/// assert!(check_arity(19).is_ok());
/// assert!(matches!(check_arity(3), Err(MedrosterError::InvalidRecord(_))));
/// ```
pub type Result<T> = std::result::Result<T, MedrosterError>;
