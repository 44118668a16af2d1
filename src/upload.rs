//! Client-side checks for file inputs before a form is submitted.
//!
//! Both checks clear the input on rejection so the oversized or unsupported
//! file cannot be submitted with the form.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::consts::BYTES_PER_KIB;
use crate::dialogs::Dialogs;

/// A file input control, reduced to what the checks need.
pub trait FileField {
    /// Byte size of the first selected file.
    fn selected_size(&self) -> Option<f64>;
    /// Name of the first selected file.
    fn selected_name(&self) -> Option<String>;
    /// Drop the current selection.
    fn clear(&self);
}

pub fn bytes_to_mb(bytes: f64) -> f64 {
    bytes / BYTES_PER_KIB / BYTES_PER_KIB
}

pub fn exceeds_limit(bytes: f64, max_size_mb: f64) -> bool {
    bytes_to_mb(bytes) > max_size_mb
}

pub fn oversize_message(max_size_mb: f64) -> String {
    format!("Файл слишком большой. Максимальный размер: {max_size_mb}MB")
}

pub fn unsupported_type_message(allowed: &[String]) -> String {
    format!("Недопустимый тип файла. Разрешены: {}", allowed.join(", "))
}

/// Whether `file_name` carries one of the `allowed` extensions.
///
/// Same rule as the server: a dot is required and the text after the last
/// dot is compared case-insensitively.
pub fn extension_allowed(file_name: &str, allowed: &[String]) -> bool {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return false;
    };
    let ext = ext.to_lowercase();
    allowed.iter().any(|candidate| candidate.to_lowercase() == ext)
}

/// Reject a selected file larger than `max_size_mb`.
///
/// Returns `true` when nothing is selected or the file fits.
pub fn validate_file_size(input: &impl FileField, dialogs: &impl Dialogs, max_size_mb: f64) -> bool {
    let Some(bytes) = input.selected_size() else {
        return true;
    };
    if !exceeds_limit(bytes, max_size_mb) {
        return true;
    }
    log::debug!("rejecting upload of {bytes} bytes, limit {max_size_mb}MB");
    dialogs.alert(&oversize_message(max_size_mb));
    input.clear();
    false
}

/// Reject a selected file whose extension is not in `allowed`.
///
/// Returns `true` when nothing is selected or the extension is accepted.
pub fn validate_file_extension(input: &impl FileField, dialogs: &impl Dialogs, allowed: &[String]) -> bool {
    let Some(name) = input.selected_name() else {
        return true;
    };
    if extension_allowed(&name, allowed) {
        return true;
    }
    log::debug!("rejecting upload `{name}`: extension not allowed");
    dialogs.alert(&unsupported_type_message(allowed));
    input.clear();
    false
}
