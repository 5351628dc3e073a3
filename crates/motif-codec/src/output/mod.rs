//! Output containers: the encoded artifact and the decoded raster.

mod encoded_image;
mod raster;

pub use encoded_image::EncodedImage;
pub use raster::Raster;
