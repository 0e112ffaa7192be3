use super::model::{MultipartPayload, Part};
use crate::shared::api_error::RequestError;
use crate::shared::api_utils::api_url;
use crate::shared::http;
use async_trait::async_trait;
use wasm_bindgen::JsValue;

#[async_trait(?Send)]
pub trait RegistrationApi {
    /// `POST register`; only the acknowledgement matters
    async fn register(&self, payload: &MultipartPayload) -> Result<(), RequestError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HttpRegistrationApi;

#[async_trait(?Send)]
impl RegistrationApi for HttpRegistrationApi {
    async fn register(&self, payload: &MultipartPayload) -> Result<(), RequestError> {
        let form = to_form_data(payload)?;
        http::post_form(&api_url("/register"), form).await
    }
}

fn to_form_data(payload: &MultipartPayload) -> Result<web_sys::FormData, RequestError> {
    let form = web_sys::FormData::new().map_err(js_err)?;
    for part in &payload.parts {
        match part {
            Part::Text { name, value } => form.append_with_str(name, value).map_err(js_err)?,
            Part::File { name, attachment } => {
                let bytes = js_sys::Uint8Array::from(attachment.bytes.as_slice());
                let sequence = js_sys::Array::of1(&bytes);
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(&attachment.content_type);
                let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
                    .map_err(js_err)?;
                form.append_with_blob_and_filename(name, &blob, &attachment.file_name)
                    .map_err(js_err)?;
            }
        }
    }
    Ok(form)
}

fn js_err(e: JsValue) -> RequestError {
    RequestError::Encode(format!("{e:?}"))
}
