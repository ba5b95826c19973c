#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use timecode::{Framerate, Timecode};

#[derive(Arbitrary, Debug)]
struct TimecodeInput {
    start: u32,
    rate: u8,
    operations: Vec<TimecodeOperation>,
}

#[derive(Arbitrary, Debug)]
enum TimecodeOperation {
    AddFrames(i64),
    AddSeconds(i32),
    AddMinutes(i32),
    AddHours(i16),
    Convert(u8),
    Rescale(u8),
}

fn rate(index: u8) -> Framerate {
    Framerate::ALL[index as usize % Framerate::ALL.len()]
}

fuzz_target!(|input: TimecodeInput| {
    let mut tc = match Timecode::from_total_frames(input.start as i64, rate(input.rate)) {
        Ok(tc) => tc,
        Err(_) => return,
    };

    for op in input.operations.iter().take(100) {
        let before = tc;
        let result = match *op {
            TimecodeOperation::AddFrames(n) => tc.add_frames(n),
            TimecodeOperation::AddSeconds(n) => tc.add_seconds(n as i64),
            TimecodeOperation::AddMinutes(n) => tc.add_minutes(n as i64),
            TimecodeOperation::AddHours(n) => tc.add_hours(n as i64),
            TimecodeOperation::Convert(r) => {
                tc.convert_framerate(rate(r));
                Ok(())
            }
            TimecodeOperation::Rescale(r) => tc.rescale_framerate(rate(r)),
        };

        // Failed operations must not touch the value
        if result.is_err() {
            assert_eq!(tc, before);
        }

        let c = tc.components();
        let back =
            Timecode::from_components(c.hours, c.minutes, c.seconds, c.frames, tc.framerate())
                .unwrap();
        assert_eq!(back.total_frames(), tc.total_frames());
    }
});
