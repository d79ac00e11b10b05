use dominator::Dom;
use web_sys::FormData;

use shared::error::ApiError;
use shared::forms::{outfit_form, OutfitFormMode, FIELD_CATEGORY, FIELD_DESCRIPTION, FIELD_IMAGE, FIELD_TITLE};
use shared::types::Outfit;
use shared::validate::FieldName;

use crate::connect_files::form_data;
use crate::elements::widgets::{category_select, file_input, text_input, textarea_input};
use crate::types::FormState;
use crate::utils::get_input_file;

pub const OUTFIT_TEXT_FIELDS: [FieldName; 3] = [FIELD_TITLE, FIELD_DESCRIPTION, FIELD_CATEGORY];
pub const OUTFIT_ALL_FIELDS: [FieldName; 4] = [FIELD_TITLE, FIELD_DESCRIPTION, FIELD_CATEGORY, FIELD_IMAGE];

/// Inputs for creating (`outfit` absent) or editing an outfit.
pub fn outfit_fields(form: &FormState, outfit: Option<&Outfit>) -> Vec<Dom> {
    vec![
        text_input(form, FIELD_TITLE, "Outfit Title", outfit.map(|o| o.title.as_str()).unwrap_or_default()),
        textarea_input(form, FIELD_DESCRIPTION, "Description", outfit.map(|o| o.description.as_str()).unwrap_or_default()),
        category_select(form, FIELD_CATEGORY, outfit.map(|o| o.category)),
        file_input(form, FIELD_IMAGE),
    ]
}

/// Validated multipart body, or `None` when the inline errors are showing.
pub fn outfit_submit(form: &FormState, mode: OutfitFormMode) -> Option<Result<FormData, ApiError>> {
    let files: &[FieldName] = match mode {
        OutfitFormMode::Create => &[FIELD_IMAGE],
        OutfitFormMode::Edit => &[],
    };
    let values = form.check(&outfit_form(mode), &OUTFIT_TEXT_FIELDS, files)?;
    Some(form_data(
        &[
            (FIELD_TITLE, values.text(FIELD_TITLE)),
            (FIELD_DESCRIPTION, values.text(FIELD_DESCRIPTION)),
            (FIELD_CATEGORY, values.text(FIELD_CATEGORY)),
        ],
        &[(FIELD_IMAGE, get_input_file(FIELD_IMAGE))],
    ))
}
