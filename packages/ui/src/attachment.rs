//! Picked files: reading them from an `<input type="file">` and previewing them.

use api::Attachment;
use base64::prelude::*;
use dioxus::prelude::*;

/// The first file selected in a file input, read into memory.
pub async fn read_attachment(evt: &FormEvent) -> Option<Attachment> {
    let file = evt.files().into_iter().next()?;
    let name = file.name();
    match file.read_bytes().await {
        Ok(bytes) => {
            let attachment = Attachment::new(name, bytes.to_vec());
            Some(match file.content_type() {
                Some(content_type) => attachment.with_content_type(content_type),
                None => attachment,
            })
        }
        Err(e) => {
            tracing::error!("Failed to read {name}: {e}");
            None
        }
    }
}

/// `data:` URL for showing a picked image before upload.
pub fn data_url(attachment: &Attachment) -> String {
    let mime = attachment
        .content_type
        .as_deref()
        .unwrap_or("application/octet-stream");
    format!("data:{mime};base64,{}", BASE64_STANDARD.encode(&attachment.bytes))
}
