//! Property-based tests for the timecode codec.
//!
//! Uses proptest to verify that frame counts, components and strings
//! convert back and forth without loss at every frame rate.

use proptest::prelude::*;
use timecode::{frames_to_components, is_dropped_frame, Framerate, Timecode};

fn any_framerate() -> impl Strategy<Value = Framerate> {
    prop::sample::select(Framerate::ALL.to_vec())
}

proptest! {
    /// Decoding then encoding a frame count yields the same count.
    #[test]
    fn roundtrip_total_frames(frames in 0i64..1_000_000_000, rate in any_framerate()) {
        let tc = Timecode::from_total_frames(frames, rate).unwrap();
        let c = tc.components();
        let back = Timecode::from_components(c.hours, c.minutes, c.seconds, c.frames, rate).unwrap();
        prop_assert_eq!(back.total_frames(), frames as u64);
    }

    /// Formatting then parsing yields the same count.
    #[test]
    fn roundtrip_string(frames in 0i64..1_000_000_000, rate in any_framerate()) {
        let tc = Timecode::from_total_frames(frames, rate).unwrap();
        let parsed = Timecode::parse(&tc.to_string(), rate).unwrap();
        prop_assert_eq!(parsed, tc);
    }

    /// Decoded components stay in range and never name a dropped label.
    #[test]
    fn decoded_components_are_valid(frames in 0u64..1_000_000_000, rate in any_framerate()) {
        let c = frames_to_components(frames, rate);
        prop_assert!(c.minutes < 60);
        prop_assert!(c.seconds < 60);
        prop_assert!((c.frames as u32) < rate.nominal_fps());
        prop_assert!(!is_dropped_frame(c.minutes, c.seconds, c.frames, rate));
    }

    /// Adding then subtracting the same delta restores the original.
    #[test]
    fn add_frames_inverse(start in 0i64..1_000_000_000, delta in -1_000_000_000i64..1_000_000_000, rate in any_framerate()) {
        let original = Timecode::from_total_frames(start, rate).unwrap();
        let mut tc = original;
        if tc.add_frames(delta).is_ok() {
            tc.add_frames(-delta).unwrap();
            prop_assert_eq!(tc, original);
        } else {
            prop_assert!(start + delta < 0);
            prop_assert_eq!(tc, original);
        }
    }

    /// Successive frames never decrease in display order within one rate.
    #[test]
    fn consecutive_frames_are_ordered(frames in 0u64..100_000_000, rate in any_framerate()) {
        let a = frames_to_components(frames, rate);
        let b = frames_to_components(frames + 1, rate);
        prop_assert!((a.hours, a.minutes, a.seconds, a.frames) < (b.hours, b.minutes, b.seconds, b.frames));
    }

    /// Frame-preserving conversion never changes the count.
    #[test]
    fn convert_keeps_frames(frames in 0i64..1_000_000_000, from in any_framerate(), to in any_framerate()) {
        let mut tc = Timecode::from_total_frames(frames, from).unwrap();
        tc.convert_framerate(to);
        prop_assert_eq!(tc.total_frames(), frames as u64);
        prop_assert_eq!(tc.framerate(), to);
    }

    /// Duration-preserving conversion stays within half a target frame.
    #[test]
    fn rescale_keeps_duration(frames in 0i64..1_000_000_000, from in any_framerate(), to in any_framerate()) {
        let mut tc = Timecode::from_total_frames(frames, from).unwrap();
        let before = tc.to_seconds();
        tc.rescale_framerate(to).unwrap();
        let half_frame = 0.5 / to.real_fps();
        prop_assert!((tc.to_seconds() - before).abs() <= half_frame + 1e-6);
    }
}
