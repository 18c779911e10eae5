//! Geometric gesture classification.
//!
//! Each gesture is a threshold rule over the relative positions of a few landmarks. The rules are
//! tried in a fixed order and the first matching rule wins, so a pose that satisfies several rules
//! always resolves to the earliest one in [`RULES`]. Classification is stateless: every frame is
//! classified on its own, with no smoothing across frames.

use std::fmt;

use nalgebra::Point2;

use super::{HandLandmarks, LandmarkIdx, LandmarkIdx::*};

/// Maximum per-axis distance between thumb tip and index tip for the two to count as pinched.
const PINCH_DIST: f32 = 0.1;

/// Maximum vertical distance between a fingertip and its base joint for the finger to count as
/// curled into the palm.
const CURL_DIST: f32 = 0.1;

/// Maximum horizontal distance between thumb tip and pinky tip for the two to count as touching.
const THUMB_PINKY_DIST: f32 = 0.05;

/// A classified hand gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Thumb and index fingertips pinched together, remaining fingers raised.
    OkSign,
    /// All fingertips curled in next to their base joints.
    Fist,
    /// All five fingers extended.
    OpenHand,
    /// Index finger extended, thumb out to the side, remaining fingers curled.
    Pointing,
    /// Thumb raised above the rest of the hand.
    ThumbsUp,
    /// Index, middle and ring finger extended, thumb holding down the pinky.
    ThreeFingersUp,
    /// A hand was detected, but no rule matched its pose.
    Unknown,
    /// The frame contained no hand.
    NoHandsDetected,
}

impl Gesture {
    /// Returns the human-readable label for a display collaborator to render.
    pub fn label(&self) -> &'static str {
        match self {
            Gesture::OkSign => "👌 OK Sign",
            Gesture::Fist => "✊ Fist",
            Gesture::OpenHand => "🖐️ Open Hand",
            Gesture::Pointing => "👉 Pointing",
            Gesture::ThumbsUp => "👍 Thumbs Up",
            Gesture::ThreeFingersUp => "||| Three Fingers Up",
            Gesture::Unknown => "Unknown Gesture",
            Gesture::NoHandsDetected => "No Hands Detected",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The gesture rules, in the order they are tried.
///
/// Ambiguous poses resolve to the earliest matching entry: a pose that pinches thumb and index
/// while keeping every fingertip near its base is an [`Gesture::OkSign`], not a [`Gesture::Fist`].
const RULES: &[(fn(&HandLandmarks) -> bool, Gesture)] = &[
    (is_ok_sign, Gesture::OkSign),
    (is_fist, Gesture::Fist),
    (is_open_hand, Gesture::OpenHand),
    (is_pointing, Gesture::Pointing),
    (is_thumbs_up, Gesture::ThumbsUp),
    (is_three_fingers_up, Gesture::ThreeFingersUp),
];

/// Classifies the pose of a single hand, or the absence of one.
///
/// Passing [`None`] means the tracker found no hand in the frame and yields
/// [`Gesture::NoHandsDetected`]. Otherwise the first matching entry of [`RULES`] decides, falling
/// back to [`Gesture::Unknown`] when no rule matches.
pub fn classify(hand: Option<&HandLandmarks>) -> Gesture {
    let Some(hand) = hand else {
        return Gesture::NoHandsDetected;
    };

    RULES
        .iter()
        .find(|(rule, _)| rule(hand))
        .map_or(Gesture::Unknown, |&(_, gesture)| gesture)
}

/// Classifies one frame's worth of tracking output.
///
/// Like the upstream tracking pipelines, a frame may contain any number of hands; only the first
/// detected hand is classified. An empty frame yields [`Gesture::NoHandsDetected`].
pub fn classify_frame(hands: &[HandLandmarks]) -> Gesture {
    let gesture = classify(hands.first());
    log::trace!("frame with {} hand(s): {:?}", hands.len(), gesture);
    gesture
}

/// Fingertip landmarks, thumb to pinky.
const FINGER_TIPS: [LandmarkIdx; 5] = [ThumbTip, IndexFingerTip, MiddleFingerTip, RingFingerTip, PinkyTip];

/// The joint treated as each finger's base, in [`FINGER_TIPS`] order.
const FINGER_BASES: [LandmarkIdx; 5] = [ThumbMcp, IndexFingerMcp, MiddleFingerMcp, RingFingerMcp, PinkyMcp];

/// Yields each finger's (tip, base) position pair, thumb to pinky.
fn fingers(hand: &HandLandmarks) -> impl Iterator<Item = (Point2<f32>, Point2<f32>)> + '_ {
    FINGER_TIPS
        .into_iter()
        .zip(FINGER_BASES)
        .map(|(tip, base)| (hand.position(tip), hand.position(base)))
}

/// Thumb tip and index tip close in both axes, middle/ring/pinky tips all above the pinch point.
fn is_ok_sign(hand: &HandLandmarks) -> bool {
    let thumb = hand.position(ThumbTip);
    let index = hand.position(IndexFingerTip);

    let pinched = (thumb.x - index.x).abs() < PINCH_DIST && (thumb.y - index.y).abs() < PINCH_DIST;
    let others_raised = [MiddleFingerTip, RingFingerTip, PinkyTip]
        .into_iter()
        .all(|tip| hand.position(tip).y < index.y);

    pinched && others_raised
}

/// Every fingertip within [`CURL_DIST`] of its base joint's height.
fn is_fist(hand: &HandLandmarks) -> bool {
    fingers(hand).all(|(tip, base)| (tip.y - base.y).abs() < CURL_DIST)
}

/// Every fingertip strictly above its base joint.
fn is_open_hand(hand: &HandLandmarks) -> bool {
    fingers(hand).all(|(tip, base)| tip.y < base.y)
}

/// Index extended, thumb sticking out to the side, the remaining fingers curled.
fn is_pointing(hand: &HandLandmarks) -> bool {
    let index_extended = hand.position(IndexFingerTip).y < hand.position(IndexFingerMcp).y;
    let thumb_extended = hand.position(ThumbTip).x < hand.position(ThumbIp).x;
    let others_curled = [
        (MiddleFingerTip, MiddleFingerMcp),
        (RingFingerTip, RingFingerMcp),
        (PinkyTip, PinkyMcp),
    ]
    .into_iter()
    .all(|(tip, base)| hand.position(tip).y > hand.position(base).y);

    index_extended && thumb_extended && others_curled
}

/// Thumb tip above both the thumb's and the index finger's base joint.
fn is_thumbs_up(hand: &HandLandmarks) -> bool {
    let thumb_tip = hand.position(ThumbTip);
    thumb_tip.y < hand.position(ThumbMcp).y && thumb_tip.y < hand.position(IndexFingerMcp).y
}

/// Index, middle and ring finger extended while the thumb tip touches the pinky tip.
fn is_three_fingers_up(hand: &HandLandmarks) -> bool {
    let extended = [
        (IndexFingerTip, IndexFingerMcp),
        (MiddleFingerTip, MiddleFingerMcp),
        (RingFingerTip, RingFingerMcp),
    ]
    .into_iter()
    .all(|(tip, base)| hand.position(tip).y < hand.position(base).y);
    let thumb_on_pinky =
        (hand.position(ThumbTip).x - hand.position(PinkyTip).x).abs() < THUMB_PINKY_DIST;

    extended && thumb_on_pinky
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::Landmarks;
    use crate::test;

    #[test]
    fn no_hands() {
        assert_eq!(classify(None), Gesture::NoHandsDetected);
        assert_eq!(classify_frame(&[]), Gesture::NoHandsDetected);
    }

    #[test]
    fn open_hand() {
        assert_eq!(classify(Some(&test::open_hand())), Gesture::OpenHand);
    }

    #[test]
    fn fist() {
        assert_eq!(classify(Some(&test::fist())), Gesture::Fist);
    }

    #[test]
    fn pointing() {
        assert_eq!(classify(Some(&test::pointing())), Gesture::Pointing);
    }

    #[test]
    fn thumbs_up() {
        assert_eq!(classify(Some(&test::thumbs_up())), Gesture::ThumbsUp);
    }

    #[test]
    fn ok_sign() {
        assert_eq!(classify(Some(&test::ok_sign())), Gesture::OkSign);
    }

    #[test]
    fn three_fingers_up() {
        assert_eq!(
            classify(Some(&test::three_fingers_up())),
            Gesture::ThreeFingersUp
        );
    }

    #[test]
    fn unmatched_pose_is_unknown() {
        // Index and middle extended, ring and pinky curled, thumb tucked in: no rule fits.
        assert_eq!(classify(Some(&test::two_fingers())), Gesture::Unknown);
    }

    #[test]
    fn pinched_fist_resolves_to_ok_sign() {
        let hand = test::pinched_fist();
        assert!(is_ok_sign(&hand));
        assert!(is_fist(&hand));
        assert_eq!(classify(Some(&hand)), Gesture::OkSign);
    }

    #[test]
    fn flat_pose_reads_as_fist() {
        // Every tip at its base's height satisfies the fist rule's curl tolerance, and the fist
        // rule outranks everything but the OK sign.
        let flat: Landmarks = (0..HandLandmarks::NUM_LANDMARKS)
            .map(|i| [i as f32 * 0.04, 0.5])
            .collect();
        let hand = HandLandmarks::new(flat).unwrap();
        assert_eq!(classify(Some(&hand)), Gesture::Fist);
    }

    #[test]
    fn first_hand_decides_the_frame() {
        let hands = [test::thumbs_up(), test::open_hand()];
        assert_eq!(classify_frame(&hands), Gesture::ThumbsUp);
    }

    #[test]
    fn classification_is_deterministic() {
        fastrand::seed(0x4a3912);
        for _ in 0..100 {
            let landmarks: Landmarks = (0..HandLandmarks::NUM_LANDMARKS)
                .map(|_| [fastrand::f32(), fastrand::f32()])
                .collect();
            let hand = HandLandmarks::new(landmarks).unwrap();

            let first = classify(Some(&hand));
            assert_eq!(classify(Some(&hand)), first);
            assert_eq!(classify_frame(std::slice::from_ref(&hand)), first);
        }
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(Gesture::Fist.to_string(), "✊ Fist");
        assert_eq!(Gesture::NoHandsDetected.to_string(), "No Hands Detected");
    }
}
