//! # imgcheck
//!
//! > A tiny HTTP service built on [Volga](https://docs.rs/volga)
//! > that acknowledges multipart image uploads.
//!
//! ## Endpoint
//! `POST /` with a multipart form field `image` (file):
//! * `200 {"message":"Image received successfully"}`
//! * `400 {"message":"No image received"}`
//! * `400 {"message":"No image selected"}`
//!
//! ## Example
//! ```no_run
//! use imgcheck::upload;
//! use volga::App;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let mut app = App::new().bind("127.0.0.1:3000");
//!
//!     upload::map_routes(&mut app);
//!
//!     app.run().await
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(unreachable_pub)]

pub mod upload;

pub use crate::upload::{check_image, ImageCheck};
