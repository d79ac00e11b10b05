use web_sys::{File, FormData};

use shared::error::ApiError;

use crate::connect_fetch::js_error;

/// Multipart body from text fields and optional files. Absent files are left
/// out so the backend keeps what it has.
pub fn form_data(texts: &[(&str, &str)], files: &[(&str, Option<File>)]) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    for (name, value) in texts {
        form.append_with_str(name, value).map_err(js_error)?;
    }
    for (name, file) in files {
        if let Some(file) = file {
            form.append_with_blob_and_filename(name, file, &file.name()).map_err(js_error)?;
        }
    }
    Ok(form)
}
