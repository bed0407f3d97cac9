//! Image upload acknowledgment endpoint
//!
//! `POST /` accepts a `multipart/form-data` body and reports whether a file
//! was sent under the `image` field. The uploaded bytes are never read.

use serde::Serialize;
use volga::{
    App, HttpResult, Multipart,
    error::Error,
    http::{IntoResponse, StatusCode},
    status
};

/// Name of the multipart field that carries the image
pub const IMAGE_FIELD: &str = "image";

/// Outcome of inspecting an upload request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCheck {
    /// A file was sent under the `image` field
    Received,
    /// There is no file under the `image` field
    Missing,
    /// The `image` field was sent with an empty file name
    NotSelected,
}

/// JSON body of every image check response
#[derive(Debug, Serialize)]
struct Ack {
    message: &'static str
}

impl ImageCheck {
    /// Walks the whole multipart stream, the first file part named `image` decides.
    ///
    /// Plain form fields named `image` are skipped, only parts with a `filename` count.
    /// Field data is skipped, not read, but the stream must end with a closing boundary:
    /// a truncated body is an error even after a valid `image` part.
    pub async fn inspect(multipart: &mut multer::Multipart<'_>) -> Result<Self, multer::Error> {
        let mut check = None;
        while let Some(field) = multipart.next_field().await? {
            if check.is_some() || field.name() != Some(IMAGE_FIELD) {
                continue;
            }
            check = field.file_name().map(Self::from_file_name);
        }
        Ok(check.unwrap_or(Self::Missing))
    }

    /// Classifies an `image` file part by its file name
    #[inline]
    pub fn from_file_name(file_name: &str) -> Self {
        if file_name.is_empty() {
            Self::NotSelected
        } else {
            Self::Received
        }
    }

    /// Message sent back to the client
    #[inline]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Received => "Image received successfully",
            Self::Missing => "No image received",
            Self::NotSelected => "No image selected",
        }
    }

    /// HTTP status of the response
    #[inline]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Received => StatusCode::OK,
            Self::Missing | Self::NotSelected => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ImageCheck {
    #[inline]
    fn into_response(self) -> HttpResult {
        let ack = Ack { message: self.message() };
        status!(self.status().as_u16(), ack)
    }
}

/// Checks whether the request carries a non-empty `image` file.
///
/// A request without a `multipart/form-data` boundary has no files at all,
/// so it is answered the same way as a form without the `image` field.
pub async fn check_image(multipart: Option<Multipart>) -> HttpResult {
    let Some(mut multipart) = multipart else {
        tracing::debug!("request is not multipart/form-data");
        return ImageCheck::Missing.into_response();
    };

    let check = ImageCheck::inspect(&mut multipart)
        .await
        .map_err(multipart_error)?;

    tracing::debug!(?check, "image check finished");
    check.into_response()
}

/// Maps `POST /` to [`check_image`]
///
/// # Example
/// ```no_run
/// use imgcheck::upload;
/// use volga::App;
///
/// # #[tokio::main]
/// # async fn main() -> std::io::Result<()> {
/// let mut app = App::new();
/// upload::map_routes(&mut app);
/// # app.run().await
/// # }
/// ```
pub fn map_routes(app: &mut App) {
    app.map_post("/", check_image);
}

/// Keeps the status of a body read failure (e.g. `413` over the body limit),
/// any other multipart failure is a client error.
fn multipart_error(err: multer::Error) -> Error {
    match err {
        multer::Error::StreamReadFailed(inner) => match inner.downcast::<Error>() {
            Ok(err) => *err,
            Err(inner) => Error::client_error(inner),
        },
        err => Error::client_error(format!("Multipart error: {err}")),
    }
}
