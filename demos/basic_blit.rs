//! Tiles a checkerboard pattern into an 8x8 bitmap, then phase-shifts the
//! whole image one bit to the right into a second buffer and prints both.
//! Run with `cargo run --example basic_blit`.

use bitblt_rop2::{blit_rop2_xyhw, Rop2, Scan};

fn print_bitmap(store: &[u8], width: i32, height: i32, stride: i32) {
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            let byte = store[(y * stride + (x >> 3)) as usize];
            let bit = (byte >> (7 - (x & 7))) & 1;
            line.push(if bit == 1 { '#' } else { '.' });
        }
        println!("{line}");
    }
}

fn main() {
    env_logger::init();

    let mut pattern_store = [0x40u8, 0x80u8];
    let mut image_store = [0u8; 8];
    let mut shifted_store = [0u8; 8];

    {
        let pattern = Scan::new(&mut pattern_store, 2, 2, 1);
        let image = Scan::new(&mut image_store, 8, 8, 1);
        let mut y = 0;
        while y < 8 {
            let mut x = 0;
            while x < 2 {
                blit_rop2_xyhw(image, x, y, 2, 2, pattern, 0, 0, Rop2::COPY);
                x += 2;
            }
            y += 2;
        }
    }

    println!("checkerboard:");
    print_bitmap(&image_store, 8, 8, 1);

    {
        let image = Scan::new(&mut image_store, 8, 8, 1);
        let shifted = Scan::new(&mut shifted_store, 8, 8, 1);
        // Copy 7 of the 8 columns one bit to the right; source and
        // destination are distinct buffers, so this is safe regardless of
        // the phase shift (overlapping source/destination is unspecified,
        // see SPEC_FULL.md SS5).
        blit_rop2_xyhw(shifted, 1, 0, 7, 8, image, 0, 0, Rop2::COPY);
    }

    println!("\nphase-shifted one bit right:");
    print_bitmap(&shifted_store, 8, 8, 1);
}
