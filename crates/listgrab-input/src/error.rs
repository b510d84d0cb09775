use crate::types::RayOriginId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureError {
    /// A move arrived for a ray origin that never pressed on this item.
    UnknownRayOrigin { ray_origin: RayOriginId },
}

impl std::fmt::Display for GestureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureError::UnknownRayOrigin { ray_origin } => {
                write!(f, "ray origin {ray_origin} moved without a recorded press")
            }
        }
    }
}

impl std::error::Error for GestureError {}
