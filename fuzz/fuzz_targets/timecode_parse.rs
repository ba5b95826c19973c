#![no_main]

use libfuzzer_sys::fuzz_target;
use timecode::{is_valid_timecode, Framerate, Timecode, TimecodeError};

fuzz_target!(|input: (&str, u8)| {
    let (s, rate_index) = input;
    let rate = Framerate::ALL[rate_index as usize % Framerate::ALL.len()];

    match Timecode::parse(s, rate) {
        Ok(tc) => {
            assert!(is_valid_timecode(s));
            // Formatting normalises the hours field, so compare counts
            let reparsed = Timecode::parse(&tc.to_string(), rate).unwrap();
            assert_eq!(reparsed.total_frames(), tc.total_frames());
        }
        Err(TimecodeError::InvalidFormat { .. }) => {}
        Err(TimecodeError::Overflow) => assert!(is_valid_timecode(s)),
        Err(e) => {
            assert!(is_valid_timecode(s));
            assert!(e.is_range_error(), "unexpected error {:?} for {:?}", e, s);
        }
    }
});
