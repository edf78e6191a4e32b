use afl::*;

use bitblt_rop2::{blit_rop2_xyhw, Rop2, Scan};

/// Interprets a byte slice as a blit call: a fixed-size header of
/// coordinates/extents/rop code, followed by two equal-size buffers for
/// destination and source storage. Never panics regardless of the header's
/// contents, including negative/overflowing coordinates and malformed ROP2
/// codes (invalid codes fall back to `Rop2::COPY`).
fn main() {
    fuzz!(|data: &[u8]| {
        const HEADER: usize = 4 * 9 + 1;
        if data.len() < HEADER {
            return;
        }
        let mut cur = data;
        let mut next_i32 = || {
            let (head, tail) = cur.split_at(4);
            cur = tail;
            i32::from_le_bytes(head.try_into().unwrap())
        };

        let dest_width = next_i32().rem_euclid(200);
        let dest_height = next_i32().rem_euclid(50);
        let dest_stride = next_i32().rem_euclid(40) + 1;
        let source_width = next_i32().rem_euclid(200);
        let source_height = next_i32().rem_euclid(50);
        let source_stride = next_i32().rem_euclid(40) + 1;
        let x = next_i32() % 1000;
        let y = next_i32() % 1000;
        let x_extent = next_i32() % 1000;
        let rop_code = cur[0] % 16;
        cur = &cur[1..];
        let y_extent = 1;
        let (x_source, y_source) = (0, 0);

        let rop = Rop2::from_code(rop_code).unwrap_or(Rop2::COPY);

        let dest_len = (dest_stride as usize) * (dest_height.max(1) as usize);
        let source_len = (source_stride as usize) * (source_height.max(1) as usize);
        if cur.len() < dest_len + source_len {
            return;
        }

        let mut dest_store = cur[..dest_len].to_vec();
        let mut source_store = cur[dest_len..dest_len + source_len].to_vec();

        let dest = Scan::new(&mut dest_store, dest_width, dest_height, dest_stride);
        let source = Scan::new(&mut source_store, source_width, source_height, source_stride);

        blit_rop2_xyhw(
            dest, x, y, x_extent, y_extent, source, x_source, y_source, rop,
        );
    })
}
