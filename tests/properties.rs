use unreal_color_picker::{
    ColorSync, EditOutcome, EditableFields, FieldId, FieldTable, PickerConfig, RgbColor,
    SyncState,
};

fn shown(sync: &ColorSync) -> FieldTable<String> {
    FieldTable::from_fn(|field| sync.text(field).to_string())
}

#[test]
fn hex_round_trips_for_every_color() {
    for r in 0..=255u8 {
        for g in (0..=255u8).step_by(5) {
            for b in (0..=255u8).step_by(15) {
                let c = RgbColor::new(r, g, b);
                assert_eq!(RgbColor::from_hex(&c.to_hex()), Ok(c));
            }
        }
    }
}

#[test]
fn selector_refresh_overwrites_every_field() {
    let mut sync = ColorSync::new(&PickerConfig::default());
    // Leave some stale text behind first.
    sync.on_text_field_edited(FieldId::Hue, "stale");
    sync.on_text_field_edited(FieldId::Red, "abc");

    sync.on_selector_color_changed(RgbColor::new(200, 100, 50));

    let expected = [
        (FieldId::Red, "200"),
        (FieldId::Green, "100"),
        (FieldId::Blue, "50"),
        (FieldId::Hue, "20"),
        (FieldId::Saturation, "191"),
        (FieldId::Value, "200"),
        (FieldId::Hex, "#c86432"),
        (FieldId::EngineRed, "0.78431372549020"),
        (FieldId::EngineGreen, "0.39215686274510"),
        (FieldId::EngineBlue, "0.19607843137255"),
    ];
    for (field, text) in expected {
        assert_eq!(sync.text(field), text, "{field}");
    }
    assert_eq!(sync.state(), SyncState::Idle);
}

#[test]
fn invalid_text_leaves_other_fields_alone() {
    let config = PickerConfig::default().with_initial_color(RgbColor::new(10, 20, 30));
    let mut sync = ColorSync::new(&config);
    let before = shown(&sync);

    assert_eq!(sync.on_text_field_edited(FieldId::Red, "abc"), EditOutcome::Discarded);

    for (field, text) in before.iter() {
        if field != FieldId::Red {
            assert_eq!(sync.text(field), text.as_str(), "{field}");
        }
    }
    assert_eq!(sync.text(FieldId::Red), "abc");
    assert_eq!(sync.color(), RgbColor::new(10, 20, 30));
    assert_eq!(sync.state(), SyncState::Idle);
}

#[test]
fn committed_edit_round_trips_through_the_surface() {
    let mut sync = ColorSync::new(&PickerConfig::default().with_initial_color(RgbColor::BLACK));

    // Typing "128" into R one keystroke at a time.
    assert_eq!(sync.on_text_field_edited(FieldId::Red, "1"), EditOutcome::Commit(RgbColor::new(1, 0, 0)));
    let updates = sync.on_selector_color_changed(RgbColor::new(1, 0, 0));
    for update in &updates {
        assert_eq!(sync.on_text_field_edited(update.field, &update.text), EditOutcome::Unchanged);
    }
    assert_eq!(sync.on_text_field_edited(FieldId::Red, "12"), EditOutcome::Commit(RgbColor::new(12, 0, 0)));
    sync.on_selector_color_changed(RgbColor::new(12, 0, 0));
    assert_eq!(sync.on_text_field_edited(FieldId::Red, "128"), EditOutcome::Commit(RgbColor::new(128, 0, 0)));
    assert_eq!(sync.state(), SyncState::Editing(FieldId::Red));
    sync.on_selector_color_changed(RgbColor::new(128, 0, 0));

    assert_eq!(sync.text(FieldId::Hex), "#800000");
    assert_eq!(sync.text(FieldId::EngineRed), "0.50196078431373");
    assert_eq!(sync.state(), SyncState::Idle);
}

#[test]
fn hex_typed_key_by_key_keeps_its_text() {
    let config = PickerConfig::default()
        .with_initial_color(RgbColor::BLACK)
        .with_editable(EditableFields::All);
    let mut sync = ColorSync::new(&config);

    let mut typed = String::new();
    for ch in "#336699".chars() {
        typed.push(ch);
        if let EditOutcome::Commit(c) = sync.on_text_field_edited(FieldId::Hex, &typed) {
            let updates = sync.on_selector_color_changed(c);
            assert!(updates.iter().all(|u| u.field != FieldId::Hex));
            assert_eq!(sync.text(FieldId::Hex), typed);
        }
    }

    assert_eq!(sync.color(), RgbColor::new(0x33, 0x66, 0x99));
    assert_eq!(sync.text(FieldId::Hex), "#336699");
    assert_eq!(sync.text(FieldId::Red), "51");
}
