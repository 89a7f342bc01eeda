pub mod fixed_detector;
pub mod rekognition;
