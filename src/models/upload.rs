//! Multipart upload requests for listing images, files and videos.
//!
//! Uploads carry raw bytes; reading them from disk is left to the caller.

use std::fmt;

use crate::clients::{FilePart, MultipartBody, RequestBody};

/// MIME type the file part of a listing file upload is sent with.
const LISTING_FILE_MIME: &str = "multipart/form-data";

/// A request sent as a multipart form.
pub trait MultipartRequest {
    /// Builds the form: one file part plus the set text fields.
    fn to_multipart(&self) -> MultipartBody;

    /// Wraps the form as a request body.
    fn to_body(&self) -> RequestBody {
        RequestBody::Multipart(self.to_multipart())
    }
}

/// Body of `upload_listing_image`. The bytes are sent as part `image`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UploadListingImageRequest {
    /// Raw image bytes.
    pub image: Vec<u8>,
    /// Id of an existing image to attach instead of uploading.
    pub listing_image_id: Option<u64>,
    /// Display position, starting at 1.
    pub rank: Option<u32>,
    /// Whether to replace the image currently at `rank`.
    pub overwrite: Option<bool>,
    /// Whether the image is watermarked.
    pub is_watermarked: Option<bool>,
    /// Alternative text for the image.
    pub alt_text: Option<String>,
}

impl UploadListingImageRequest {
    /// Creates an upload of `image` with no optional fields set.
    #[must_use]
    pub fn new(image: impl Into<Vec<u8>>) -> Self {
        Self {
            image: image.into(),
            ..Default::default()
        }
    }
}

impl MultipartRequest for UploadListingImageRequest {
    fn to_multipart(&self) -> MultipartBody {
        MultipartBody::new(FilePart {
            name: "image",
            bytes: self.image.clone(),
            file_name: "image".to_string(),
            mime: None,
        })
        .text("listing_image_id", self.listing_image_id)
        .text("rank", self.rank)
        .text("overwrite", self.overwrite)
        .text("is_watermarked", self.is_watermarked)
        .text("alt_text", self.alt_text.as_deref())
    }
}

impl fmt::Debug for UploadListingImageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadListingImageRequest")
            .field("image", &format_args!("<{} bytes>", self.image.len()))
            .field("listing_image_id", &self.listing_image_id)
            .field("rank", &self.rank)
            .field("overwrite", &self.overwrite)
            .field("is_watermarked", &self.is_watermarked)
            .field("alt_text", &self.alt_text)
            .finish()
    }
}

/// Body of `upload_listing_file`.
///
/// The bytes are sent as part `file`, named after `name`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UploadListingFileRequest {
    /// Raw file bytes.
    pub file: Vec<u8>,
    /// Id of an existing shop file to attach instead of uploading.
    pub listing_file_id: Option<u64>,
    /// File name shown to buyers.
    pub name: Option<String>,
    /// Display position, starting at 1.
    pub rank: Option<u32>,
}

impl UploadListingFileRequest {
    /// Creates an upload of `file` with no optional fields set.
    #[must_use]
    pub fn new(file: impl Into<Vec<u8>>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }
}

impl MultipartRequest for UploadListingFileRequest {
    fn to_multipart(&self) -> MultipartBody {
        MultipartBody::new(FilePart {
            name: "file",
            bytes: self.file.clone(),
            file_name: self.name.clone().unwrap_or_else(|| "file".to_string()),
            mime: Some(LISTING_FILE_MIME),
        })
        .text("listing_file_id", self.listing_file_id)
        .text("rank", self.rank)
        .text("name", self.name.as_deref())
    }
}

impl fmt::Debug for UploadListingFileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadListingFileRequest")
            .field("file", &format_args!("<{} bytes>", self.file.len()))
            .field("listing_file_id", &self.listing_file_id)
            .field("name", &self.name)
            .field("rank", &self.rank)
            .finish()
    }
}

/// Body of `upload_listing_video`. The bytes are sent as part `video`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UploadListingVideoRequest {
    /// Raw video bytes.
    pub video: Vec<u8>,
    /// Id of an existing video to attach instead of uploading.
    pub listing_video_id: Option<u64>,
    /// Video file name.
    pub name: Option<String>,
}

impl UploadListingVideoRequest {
    /// Creates an upload of `video` with no optional fields set.
    #[must_use]
    pub fn new(video: impl Into<Vec<u8>>) -> Self {
        Self {
            video: video.into(),
            ..Default::default()
        }
    }
}

impl MultipartRequest for UploadListingVideoRequest {
    fn to_multipart(&self) -> MultipartBody {
        MultipartBody::new(FilePart {
            name: "video",
            bytes: self.video.clone(),
            file_name: "video".to_string(),
            mime: None,
        })
        .text("listing_video_id", self.listing_video_id)
        .text("name", self.name.as_deref())
    }
}

impl fmt::Debug for UploadListingVideoRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadListingVideoRequest")
            .field("video", &format_args!("<{} bytes>", self.video.len()))
            .field("listing_video_id", &self.listing_video_id)
            .field("name", &self.name)
            .finish()
    }
}
