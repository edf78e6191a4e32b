//! End-to-end scenarios exercising the public API the way a caller would:
//! through [`blit_rop2_xyhw`] alone, never reaching into `src/*` internals.
//!
//! Mirrors `examples/original_source/test/pat.c`'s whole-bitmap checkerboard
//! scenario and exercises the rest of the engine the same black-box way;
//! per-module edge cases live next to their module instead (`src/region.rs`,
//! `src/align.rs`, `src/rop2.rs`).

use bitblt_rop2::{blit_rop2_xyhw, Rop2, Scan};

#[test]
fn tiling_a_checkerboard_pattern_across_a_bitmap() {
    let mut pat_store = [0x40u8, 0x80u8];
    let pat = Scan::new(&mut pat_store, 2, 2, 1);
    let mut image_store = [0u8; 8];
    let image = Scan::new(&mut image_store, 8, 8, 1);

    let mut y = 0;
    while y < 8 {
        let mut x = 0;
        while x < 2 {
            assert!(blit_rop2_xyhw(image, x, y, 2, 2, pat, 0, 0, Rop2::COPY));
            x += 2;
        }
        y += 2;
    }

    for (y, &row) in image_store.iter().enumerate() {
        for x in 0..8 {
            let bit = (row >> (7 - x)) & 1;
            let want = (x & 1) ^ (y & 1);
            assert_eq!(bit, want as u8, "x={x} y={y}");
        }
    }
}

#[test]
fn clearing_then_setting_a_whole_bitmap_via_self_blit() {
    let mut store = [0xA5u8; 10];
    let scan = Scan::new(&mut store, 80, 1, 10);
    assert!(blit_rop2_xyhw(scan, 0, 0, 80, 1, scan, 0, 0, Rop2::BLACKNESS));
    assert_eq!(store, [0x00u8; 10]);
    let scan = Scan::new(&mut store, 80, 1, 10);
    assert!(blit_rop2_xyhw(scan, 0, 0, 80, 1, scan, 0, 0, Rop2::WHITENESS));
    assert_eq!(store, [0xffu8; 10]);
}

#[test]
fn a_rectangle_entirely_off_the_negative_axis_is_rejected() {
    let mut src_store = [0xFFu8; 10];
    let src = Scan::new(&mut src_store, 80, 1, 10);
    let mut dst_store = [0u8; 10];
    let before = dst_store;
    let dst = Scan::new(&mut dst_store, 80, 1, 10);
    assert!(!blit_rop2_xyhw(dst, -100, 0, 50, 1, src, 0, 0, Rop2::COPY));
    assert_eq!(dst_store, before);
}

#[test]
fn an_out_of_phase_copy_preserves_bits_outside_the_masked_edges() {
    let mut dst_store = [0xAAu8];
    let dst = Scan::new(&mut dst_store, 8, 1, 1);
    let mut src_store = [0xFFu8];
    let src = Scan::new(&mut src_store, 8, 1, 1);
    assert!(blit_rop2_xyhw(dst, 2, 0, 4, 1, src, 0, 0, Rop2::XOR));
    assert_eq!(dst_store[0], 0xAA ^ 0x3C);
}

#[test]
fn a_full_extent_copy_round_trips_through_an_independent_buffer() {
    let mut src_store = vec![0x3Cu8; 20];
    let src = Scan::new(&mut src_store, 160, 1, 20);
    let mut dst_store = vec![0u8; 20];
    let dst = Scan::new(&mut dst_store, 160, 1, 20);
    assert!(blit_rop2_xyhw(dst, 0, 0, 160, 1, src, 0, 0, Rop2::COPY));
    assert_eq!(dst_store, src_store);
}

#[test]
fn panning_a_single_set_pixel_across_every_bit_phase() {
    let mut src_store = vec![0u8; 800];
    let src = Scan::new(&mut src_store, 80, 80, 10);
    let mut dst_store = vec![0u8; 800];
    let dst = Scan::new(&mut dst_store, 80, 80, 10);
    for x in 0..80 {
        src_store.iter_mut().for_each(|b| *b = 0);
        assert!(blit_rop2_xyhw(src, x, 0, 1, 80, src, 0, 0, Rop2::WHITENESS));
        assert!(blit_rop2_xyhw(dst, 79, 0, 1, 80, src, x, 0, Rop2::COPY));
        let row = dst.locate(0, 0);
        assert_eq!(dst_store[row + 9] & 1, 1, "x={x}");
    }
}
