use serde::{Deserialize, Serialize};
use std::fmt;

/// Estado de una imagen dentro del pipeline. La secuencia es lineal:
/// `Discovered → Uploaded → Labeled → Recorded`, sin retrocesos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageStage {
    Discovered,
    Uploaded,
    Labeled,
    Recorded,
}

impl ImageStage {
    /// Siguiente estado; `None` cuando ya se registró.
    pub fn next(self) -> Option<ImageStage> {
        match self {
            ImageStage::Discovered => Some(ImageStage::Uploaded),
            ImageStage::Uploaded => Some(ImageStage::Labeled),
            ImageStage::Labeled => Some(ImageStage::Recorded),
            ImageStage::Recorded => None,
        }
    }
}

impl fmt::Display for ImageStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ImageStage::Discovered => "discovered",
            ImageStage::Uploaded => "uploaded",
            ImageStage::Labeled => "labeled",
            ImageStage::Recorded => "recorded",
        };
        f.write_str(s)
    }
}
