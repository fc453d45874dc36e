use srm_core::addresses::{self, rooms};
use srm_core::{
    EditError, FieldErrorKind, FieldInputs, INVERSE_CHECKSUM_OFFSET, MIN_SAVE_LEN, RawValue,
    SLOT_OFFSETS, SLOT_SIZE, STATIC_MARKER, STATIC_MARKER_OFFSET, SlotVerdict, apply_to_all_slots,
    compute_inverse_checksum, generate_edited_save, verify_save,
};

/// A plausible baseline: noisy slot data, marker set, every slot sealed.
fn baseline() -> Vec<u8> {
    let mut save = vec![0u8; MIN_SAVE_LEN];
    let mut state = 0x1234_5678u32;
    for b in save.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *b = state as u8;
    }
    for offset in SLOT_OFFSETS {
        let slot = &mut save[offset..offset + SLOT_SIZE];
        slot[STATIC_MARKER_OFFSET..STATIC_MARKER_OFFSET + 2]
            .copy_from_slice(&STATIC_MARKER.to_le_bytes());
        let cs = compute_inverse_checksum((&*slot).try_into().unwrap());
        slot[INVERSE_CHECKSUM_OFFSET..].copy_from_slice(&cs.to_le_bytes());
    }
    save
}

fn inputs() -> FieldInputs {
    FieldInputs::new()
        .with("arrows", "30")
        .with("bombs", "3")
        .with("rupees", "100")
        .with("sanc_heart", RawValue::heart("10", true))
        .with("heart_refill", false)
        .with("bug_net", true)
        .with("mushroom", "mushroom")
        .with("tavern_bottle", "red")
        .with("vendor_bottle", "bee")
}

#[test]
fn test_baseline_fixture_is_valid() {
    let verdicts = verify_save(&baseline()).unwrap();
    assert!(verdicts.iter().all(SlotVerdict::is_valid));
}

#[test]
fn test_generate_writes_every_slot() {
    let base = baseline();
    let edited = generate_edited_save(&base, &inputs()).unwrap();

    assert_eq!(edited.bytes.len(), base.len());
    assert!(edited.report.is_clean());
    for offset in SLOT_OFFSETS {
        let slot = &edited.bytes[offset..offset + SLOT_SIZE];
        assert_eq!(slot[addresses::ARROWS], 30);
        assert_eq!(slot[addresses::BOMBS], 3);
        assert_eq!(slot[addresses::RUPEES], 100);
        assert_eq!(slot[addresses::RUPEE_DISP], 100);
        assert_eq!(slot[addresses::MAX_HEALTH], 56);
        assert_eq!(slot[addresses::CURRENT_HEALTH], 56);
        assert_eq!(slot[rooms::SANCTUARY], 0x10);
        assert_eq!(slot[addresses::HEART_REFILL], 0);
        assert_eq!(slot[addresses::BUG_NET], 1);
        assert_eq!(slot[addresses::MUSHROOM], 1);
        assert_eq!(slot[addresses::BOTTLE_1], 3);
        assert_eq!(slot[addresses::BOTTLE_2], 7);
        assert_eq!(slot[rooms::TAVERN], 0x1A);
        assert_eq!(slot[addresses::PROGRESS_FLAGS], 0x2);
    }
    assert!(verify_save(&edited.bytes).unwrap().iter().all(SlotVerdict::is_valid));
}

#[test]
fn test_baseline_is_not_mutated() {
    let base = baseline();
    let copy = base.clone();
    generate_edited_save(&base, &inputs()).unwrap();
    assert_eq!(base, copy);
}

#[test]
fn test_repeated_requests_are_identical() {
    let base = baseline();
    let first = generate_edited_save(&base, &inputs()).unwrap();
    let second = generate_edited_save(&base, &inputs()).unwrap();
    assert_eq!(first.bytes, second.bytes);
}

#[test]
fn test_input_error_leaks_no_edits() {
    let base = baseline();
    let err = generate_edited_save(&base, &inputs().with("arrows", "31")).unwrap_err();
    let EditError::Field(err) = err else {
        panic!("expected a field error, got {err:?}");
    };
    assert_eq!(err.field, "arrows");
    assert_eq!(
        err.kind,
        FieldErrorKind::OutOfRange {
            value: 31,
            min: 0,
            max: 30
        }
    );
}

#[test]
fn test_corrupt_slot_is_reported_not_fatal() {
    let mut save = baseline();
    save[0x500 + STATIC_MARKER_OFFSET] = 0x00;

    let report = apply_to_all_slots(&mut save, &[]).unwrap();
    let verdicts: Vec<_> = report.slots.iter().map(|s| s.verdict).collect();
    assert!(verdicts[0].is_valid());
    assert_eq!(verdicts[1], SlotVerdict::BadMarker { found: 0x5500 });
    assert!(verdicts[2].is_valid());
    assert_eq!(report.failures().count(), 1);
    assert!(report.into_result().is_err());
}

#[test]
fn test_corrupt_baseline_still_generates() {
    let mut base = baseline();
    base[0x500 + STATIC_MARKER_OFFSET] = 0x00;
    let edited = generate_edited_save(&base, &inputs()).unwrap();
    assert!(!edited.report.is_clean());
    assert_eq!(edited.bytes[0xA00 + addresses::ARROWS], 30);
}
