//! The 21-point hand skeleton and gesture classification on top of it.

pub mod gesture;

use anyhow::ensure;
use nalgebra::{Point2, Rotation2, Vector2};

use crate::landmark::Landmarks;

/// Names for the hand pose landmarks.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// The gesture rules treat each finger's MCP (the thumb's for the thumb) as the finger's "base"
/// joint.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// The landmarks surrounding the palm.
pub const PALM_LANDMARKS: &[LandmarkIdx] = {
    use LandmarkIdx::*;
    &[
        Wrist,
        ThumbCmc,
        IndexFingerMcp,
        MiddleFingerMcp,
        RingFingerMcp,
        PinkyMcp,
    ]
};

/// The bones of the hand skeleton, as landmark index pairs.
///
/// A display collaborator can use this table (or [`HandLandmarks::connections`]) to draw the
/// skeleton overlay.
pub const CONNECTIVITY: &[(LandmarkIdx, LandmarkIdx)] = {
    use LandmarkIdx::*;
    &[
        // Surround the palm:
        (Wrist, ThumbCmc),
        (ThumbCmc, IndexFingerMcp),
        (IndexFingerMcp, MiddleFingerMcp),
        (MiddleFingerMcp, RingFingerMcp),
        (RingFingerMcp, PinkyMcp),
        (PinkyMcp, Wrist),
        // Thumb:
        (ThumbCmc, ThumbMcp),
        (ThumbMcp, ThumbIp),
        (ThumbIp, ThumbTip),
        // Index:
        (IndexFingerMcp, IndexFingerPip),
        (IndexFingerPip, IndexFingerDip),
        (IndexFingerDip, IndexFingerTip),
        // Middle:
        (MiddleFingerMcp, MiddleFingerPip),
        (MiddleFingerPip, MiddleFingerDip),
        (MiddleFingerDip, MiddleFingerTip),
        // Ring:
        (RingFingerMcp, RingFingerPip),
        (RingFingerPip, RingFingerDip),
        (RingFingerDip, RingFingerTip),
        // Pinky:
        (PinkyMcp, PinkyPip),
        (PinkyPip, PinkyDip),
        (PinkyDip, PinkyTip),
    ]
};

/// The landmark set of a single detected hand.
///
/// Wraps a [`Landmarks`] collection that is known to contain exactly [`NUM_LANDMARKS`] entries
/// with the index assignment of [`LandmarkIdx`].
///
/// [`NUM_LANDMARKS`]: Self::NUM_LANDMARKS
#[derive(Clone)]
pub struct HandLandmarks {
    landmarks: Landmarks,
}

impl HandLandmarks {
    pub const NUM_LANDMARKS: usize = 21;

    /// Wraps a landmark collection delivered by the tracking pipeline.
    ///
    /// Returns an error if `landmarks` does not contain exactly [`Self::NUM_LANDMARKS`] entries.
    pub fn new(landmarks: Landmarks) -> anyhow::Result<Self> {
        ensure!(
            landmarks.len() == Self::NUM_LANDMARKS,
            "hand landmark set needs exactly {} landmarks, got {}",
            Self::NUM_LANDMARKS,
            landmarks.len(),
        );
        Ok(Self { landmarks })
    }

    pub fn landmarks(&self) -> &Landmarks {
        &self.landmarks
    }

    /// Returns a landmark's position in normalized image coordinates.
    pub fn position(&self, index: LandmarkIdx) -> Point2<f32> {
        let [x, y] = self.landmarks.positions()[index as usize];
        Point2::new(x, y)
    }

    /// Returns all 21 landmark positions, in [`LandmarkIdx`] order.
    pub fn positions(&self) -> impl Iterator<Item = Point2<f32>> + '_ {
        self.landmarks.positions().iter().map(|&[x, y]| Point2::new(x, y))
    }

    /// Returns an iterator over the landmarks that surround the palm.
    pub fn palm_landmarks(&self) -> impl Iterator<Item = Point2<f32>> + '_ {
        PALM_LANDMARKS.iter().map(|&lm| self.position(lm))
    }

    /// Computes the center position of the hand's palm by averaging some of the landmarks.
    pub fn palm_center(&self) -> Point2<f32> {
        let mut pos = Vector2::zeros();
        let mut count = 0;
        for lm in self.palm_landmarks() {
            pos += lm.coords;
            count += 1;
        }

        Point2::from(pos / count as f32)
    }

    /// Computes the clockwise rotation of the palm compared to an upright position.
    ///
    /// A rotation of 0° means that fingers are pointed upwards.
    pub fn rotation_radians(&self) -> f32 {
        let finger = self.position(LandmarkIdx::MiddleFingerMcp);
        let wrist = self.position(LandmarkIdx::Wrist);

        let rel = wrist - finger;
        Rotation2::rotation_between(&Vector2::y(), &rel).angle()
    }

    /// Returns the skeleton's bone endpoints, for drawing the overlay.
    pub fn connections(&self) -> impl Iterator<Item = (Point2<f32>, Point2<f32>)> + '_ {
        CONNECTIVITY
            .iter()
            .map(|&(a, b)| (self.position(a), self.position(b)))
    }
}
