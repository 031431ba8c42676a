mod photo_store;

pub use photo_store::{PhotoStorage, S3PhotoStorage};

#[cfg(test)]
pub use photo_store::memory::FakePhotoStorage;
