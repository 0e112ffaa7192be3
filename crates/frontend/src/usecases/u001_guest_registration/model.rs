use crate::shared::api_error::RequestError;
use contracts::domain::common::EntityId;
use contracts::usecases::u001_guest_registration::request::{fields, RegistrationRequest};

/// Binary attachment held in memory until submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Free-form fields typed by the guest
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuestFields {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub photo: Option<Attachment>,
}

/// Everything the form holds at submit time. Never persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub photo: Option<Attachment>,
    pub district_id: Option<EntityId>,
    pub place_id: Option<EntityId>,
}

impl RegistrationDraft {
    pub fn new(
        fields: GuestFields,
        district_id: Option<EntityId>,
        place_id: Option<EntityId>,
    ) -> Self {
        Self {
            full_name: fields.full_name,
            email: fields.email,
            password: fields.password,
            photo: fields.photo,
            district_id,
            place_id,
        }
    }

    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            place_id: self.place_id.clone(),
        }
    }

    /// Assemble the multi-part body. The photo goes right before `place_id`;
    /// without a photo the part is omitted.
    pub fn to_multipart(&self) -> MultipartPayload {
        let mut parts: Vec<Part> = Vec::new();
        for (name, value) in self.to_request().text_parts() {
            if name == fields::PLACE_ID {
                if let Some(photo) = &self.photo {
                    parts.push(Part::File {
                        name: fields::PHOTO,
                        attachment: photo.clone(),
                    });
                }
            }
            parts.push(Part::Text { name, value });
        }
        MultipartPayload { parts }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text {
        name: &'static str,
        value: String,
    },
    File {
        name: &'static str,
        attachment: Attachment,
    },
}

impl Part {
    pub fn name(&self) -> &'static str {
        match self {
            Part::Text { name, .. } => name,
            Part::File { name, .. } => name,
        }
    }
}

/// Transport-neutral multi-part body, turned into `FormData` at the HTTP edge
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultipartPayload {
    pub parts: Vec<Part>,
}

impl MultipartPayload {
    pub fn names(&self) -> Vec<&'static str> {
        self.parts.iter().map(Part::name).collect()
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match p {
            Part::Text { name: n, value } if *n == name => Some(value.as_str()),
            _ => None,
        })
    }
}

/// Read a picked file into memory
pub async fn read_attachment(file: web_sys::File) -> Result<Attachment, RequestError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| RequestError::Attachment(format!("{e:?}")))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(Attachment {
        file_name: file.name(),
        content_type: file.type_(),
        bytes,
    })
}
