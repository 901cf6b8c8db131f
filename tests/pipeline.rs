use blindtype::backend_config::BackendConfig;
use blindtype::blob::{HandSide, KeySymbol};
use blindtype::frame::PressureFrame;
use blindtype::session::TouchSession;

const ROWS: usize = 20;
const COLS: usize = 40;
const IDLE: f32 = 100.;

fn frame(pressed: &[(usize, usize)]) -> PressureFrame {
    let mut rows = vec![vec![IDLE; COLS]; ROWS];
    for &(r, c) in pressed {
        rows[r][c] = 0.;
    }
    PressureFrame::from_rows(&rows).expect("test frames are rectangular")
}

/// Both hands flat on the pad: two 3x3 palms, two 2-pixel thumbs and
/// eight single-pixel fingers, mirrored halves.
fn both_hands() -> Vec<(usize, usize)> {
    let mut pixels = Vec::new();
    for c in [4usize, 6, 8, 10, 29, 31, 33, 35] {
        pixels.push((4, c));
    }
    pixels.extend([(8, 12), (8, 13), (8, 26), (8, 27)]);
    for r in 10..13 {
        for c in 6..9 {
            pixels.push((r, c));
        }
        for c in 31..34 {
            pixels.push((r, c));
        }
    }
    pixels
}

/// Same placement, but the left palm lands as two separate 3-pixel bars
/// (13 blobs total): the clusterer has to merge them back into one palm.
fn both_hands_split_left_palm() -> Vec<(usize, usize)> {
    let mut pixels = Vec::new();
    for c in [4usize, 6, 8, 10, 29, 31, 33, 35] {
        pixels.push((4, c));
    }
    pixels.extend([(8, 12), (8, 13), (8, 26), (8, 27)]);
    for c in 5..8 {
        pixels.push((10, c));
        pixels.push((12, c));
    }
    for r in 10..13 {
        for c in 31..34 {
            pixels.push((r, c));
        }
    }
    pixels
}

fn warmed_up() -> TouchSession {
    let mut session = TouchSession::new(&BackendConfig::default());
    for _ in 0..10 {
        let events = session.process_frame(&frame(&[])).unwrap();
        assert!(events.is_empty());
    }
    session
}

#[test]
fn hands_calibrate_and_touches_become_keys() {
    let mut session = warmed_up();

    let events = session.process_frame(&frame(&both_hands())).unwrap();
    assert!(events.is_empty());
    assert!(session.is_calibrated());
    assert!(session.left().unwrap().is_left);
    assert!(!session.right().unwrap().is_left);

    // one contact per hand, both at their home columns
    let events = session.process_frame(&frame(&[(4, 10), (4, 29)])).unwrap();
    assert_eq!(events.len(), 2);
    let left_event = events.iter().find(|e| e.side == HandSide::Left).unwrap();
    let right_event = events.iter().find(|e| e.side == HandSide::Right).unwrap();
    assert_eq!(left_event.symbol, KeySymbol::Middle);
    assert_eq!(right_event.symbol, KeySymbol::Middle);
}

#[test]
fn off_home_contacts_fall_into_outer_buckets() {
    let mut session = warmed_up();
    session.process_frame(&frame(&both_hands())).unwrap();

    // left hand pinky column and right hand pinky column
    let events = session.process_frame(&frame(&[(4, 4), (4, 35)])).unwrap();
    assert_eq!(events.len(), 2);
    let left_event = events.iter().find(|e| e.side == HandSide::Left).unwrap();
    let right_event = events.iter().find(|e| e.side == HandSide::Right).unwrap();
    assert_eq!(left_event.symbol, KeySymbol::Leftmost);
    assert_eq!(right_event.symbol, KeySymbol::Rightmost);
}

#[test]
fn split_palm_placement_still_calibrates() {
    let mut session = warmed_up();
    let events = session
        .process_frame(&frame(&both_hands_split_left_palm()))
        .unwrap();
    assert!(events.is_empty());
    assert!(session.is_calibrated());

    let left = session.left().unwrap();
    assert!(left.is_left);
    // the two 3-pixel bars merged into one size-6 palm at their midpoint
    assert_eq!(left.palm.size, 6);
    assert_eq!(left.palm.position, (11., 6.));
}

#[test]
fn recalibration_replaces_hands_wholesale() {
    let mut session = warmed_up();
    session.process_frame(&frame(&both_hands())).unwrap();
    let old_palm = session.left().unwrap().palm;

    // second full placement shifted two columns right
    let shifted: Vec<(usize, usize)> = both_hands()
        .iter()
        .map(|&(r, c)| (r, c + 2))
        .collect();
    session.process_frame(&frame(&shifted)).unwrap();
    let new_palm = session.left().unwrap().palm;
    assert_eq!(new_palm.position.1, old_palm.position.1 + 2.);
}

#[test]
fn no_events_before_calibration_and_after_reset() {
    let mut session = warmed_up();
    let events = session.process_frame(&frame(&[(4, 10)])).unwrap();
    assert!(events.is_empty());

    session.process_frame(&frame(&both_hands())).unwrap();
    assert!(!session
        .process_frame(&frame(&[(4, 10)]))
        .unwrap()
        .is_empty());

    session.reset();
    assert!(!session.is_calibrated());
    // mid-warm-up frames yield nothing, even ones with contacts
    let events = session.process_frame(&frame(&[(4, 10)])).unwrap();
    assert!(events.is_empty());
    assert_eq!(session.warmup_frames_absorbed(), 1);
}
