//! Listing files, images and videos.

use serde_json::Value;

use crate::api::EtsyApi;
use crate::clients::{HttpError, HttpMethod, QueryParams};
use crate::models::{
    MultipartRequest, UpdateListingImageIdRequest, UploadListingFileRequest,
    UploadListingImageRequest, UploadListingVideoRequest, Validated,
};

impl EtsyApi {
    /// Deletes a digital file from a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_listing_file(
        &self,
        shop_id: u64,
        listing_id: u64,
        listing_file_id: u64,
    ) -> Result<Value, HttpError> {
        self.delete(format!(
            "shops/{shop_id}/listings/{listing_id}/files/{listing_file_id}"
        ))
        .await
    }

    /// Returns the metadata of a listing's digital file.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listing_file(
        &self,
        shop_id: u64,
        listing_id: u64,
        listing_file_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/listings/{listing_id}/files/{listing_file_id}"),
            QueryParams::new(),
        )
        .await
    }

    /// Returns the metadata of every digital file of a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_all_listing_files(
        &self,
        shop_id: u64,
        listing_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/listings/{listing_id}/files"),
            QueryParams::new(),
        )
        .await
    }

    /// Uploads a digital file to a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn upload_listing_file(
        &self,
        shop_id: u64,
        listing_id: u64,
        listing_file: &UploadListingFileRequest,
    ) -> Result<Value, HttpError> {
        self.send(
            HttpMethod::Post,
            format!("shops/{shop_id}/listings/{listing_id}/files"),
            listing_file.to_body(),
        )
        .await
    }

    /// Deletes a video from a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_listing_video(
        &self,
        shop_id: u64,
        listing_id: u64,
        listing_video_id: u64,
    ) -> Result<Value, HttpError> {
        self.delete(format!(
            "shops/{shop_id}/listings/{listing_id}/videos/{listing_video_id}"
        ))
        .await
    }

    /// Returns a video of a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listing_video(
        &self,
        listing_id: u64,
        listing_video_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("listings/{listing_id}/videos/{listing_video_id}"),
            QueryParams::new(),
        )
        .await
    }

    /// Returns the videos of a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listing_videos(&self, listing_id: u64) -> Result<Value, HttpError> {
        self.get(format!("listings/{listing_id}/videos"), QueryParams::new())
            .await
    }

    /// Uploads a video to a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn upload_listing_video(
        &self,
        shop_id: u64,
        listing_id: u64,
        listing_video: &UploadListingVideoRequest,
    ) -> Result<Value, HttpError> {
        self.send(
            HttpMethod::Post,
            format!("shops/{shop_id}/listings/{listing_id}/videos"),
            listing_video.to_body(),
        )
        .await
    }

    /// Deletes an image from a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_listing_image(
        &self,
        shop_id: u64,
        listing_id: u64,
        listing_image_id: u64,
    ) -> Result<Value, HttpError> {
        self.delete(format!(
            "shops/{shop_id}/listings/{listing_id}/images/{listing_image_id}"
        ))
        .await
    }

    /// Returns an image of a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listing_image(
        &self,
        listing_id: u64,
        listing_image_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("listings/{listing_id}/images/{listing_image_id}"),
            QueryParams::new(),
        )
        .await
    }

    /// Returns the images of a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listing_images(&self, listing_id: u64) -> Result<Value, HttpError> {
        self.get(format!("listings/{listing_id}/images"), QueryParams::new())
            .await
    }

    /// Uploads an image to a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn upload_listing_image(
        &self,
        shop_id: u64,
        listing_id: u64,
        listing_image: &UploadListingImageRequest,
    ) -> Result<Value, HttpError> {
        self.send(
            HttpMethod::Post,
            format!("shops/{shop_id}/listings/{listing_id}/images"),
            listing_image.to_body(),
        )
        .await
    }

    /// Attaches an image already uploaded to the shop to a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_listing_image_id(
        &self,
        shop_id: u64,
        listing_id: u64,
        listing_image: Validated<UpdateListingImageIdRequest>,
    ) -> Result<Value, HttpError> {
        self.send(
            HttpMethod::Post,
            format!("shops/{shop_id}/listings/{listing_id}/images"),
            listing_image,
        )
        .await
    }
}
