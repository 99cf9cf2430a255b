use nexus_avatar::{AvatarConfig, CrestConfig, CrestOptions, render_crest};

const SIZE: u32 = 200;

#[test]
fn crest_renders_are_bit_identical() {
    let opts = CrestOptions::default();
    let a = render_crest("alice", None, SIZE, &opts).unwrap();
    let b = render_crest("alice", None, SIZE, &opts).unwrap();
    assert_eq!(a.width, SIZE);
    assert_eq!(a.height, SIZE);
    assert_eq!(a.data.len(), (SIZE * SIZE * 4) as usize);
    assert!(a.premultiplied);
    assert_eq!(a.data, b.data);
}

#[test]
fn different_names_produce_different_crests() {
    let opts = CrestOptions::default();
    let alice = render_crest("alice", None, SIZE, &opts).unwrap();
    let bob = render_crest("bob", None, SIZE, &opts).unwrap();
    assert_ne!(alice.data, bob.data);
}

#[test]
fn avatar_colors_change_the_crest() {
    let opts = CrestOptions::default();
    let avatar = AvatarConfig::default();
    let with_avatar = render_crest("alice", Some(&avatar), SIZE, &opts).unwrap();
    let without = render_crest("alice", None, SIZE, &opts).unwrap();
    assert_ne!(with_avatar.data, without.data);

    // Borrowing colors is just as deterministic as seeding them.
    let again = render_crest("alice", Some(&avatar), SIZE, &opts).unwrap();
    assert_eq!(with_avatar.data, again.data);
}

#[test]
fn rendered_crest_matches_derived_config() {
    // The raster and the derived config must come from the same tables.
    let derived_a = CrestConfig::derive("alice", None);
    let derived_b = CrestConfig::derive("alice", None);
    assert_eq!(derived_a, derived_b);

    let opts = CrestOptions::default();
    let frame = render_crest("alice", None, SIZE, &opts).unwrap();
    // The shield interior must not be the bare backdrop: the gradient fill
    // and sigil paint over it deterministically.
    let center = ((SIZE / 2) * SIZE * 4 + (SIZE / 2) * 4) as usize;
    assert_eq!(frame.data[center + 3], 255);
}

#[test]
fn missing_label_font_skips_the_label() {
    // No font bytes: the label row stays at backdrop/border pixels and the
    // render still succeeds.
    let opts = CrestOptions { label_font: None };
    let frame = render_crest("alice", None, SIZE, &opts).unwrap();
    assert_eq!(frame.data.len(), (SIZE * SIZE * 4) as usize);
}

#[test]
fn small_and_large_canvases_render() {
    let opts = CrestOptions::default();
    for size in [64u32, 200, 512] {
        let frame = render_crest("nexus", None, size, &opts).unwrap();
        assert_eq!(frame.width, size);
        assert_eq!(frame.data.len(), (size * size * 4) as usize);
    }
}

#[test]
fn zero_size_surface_is_rejected() {
    let opts = CrestOptions::default();
    assert!(render_crest("alice", None, 0, &opts).is_err());
}
