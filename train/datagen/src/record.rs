use serde::Serialize;

/// One line of `dataset/metadata.jsonl`, in the layout the training
/// loader joins on.
#[derive(Debug, Serialize)]
pub struct MetadataRecord {
    pub file_name: String,
    pub conditioning_image: String,
    pub ao_image: String,
    pub text: String,
}

impl MetadataRecord {
    pub fn for_frame(frame_id: &str, text: String) -> Self {
        Self {
            file_name: format!("renders/render_{frame_id}.png"),
            conditioning_image: format!("conditioning/conditioning_{frame_id}.png"),
            ao_image: format!("ao/ao_{frame_id}.png"),
            text,
        }
    }
}
