//! Minimal TrueType font builder for tests.
//!
//! Produces a font with 1024 units per em, ascender 768, descender -256 and
//! a line gap of 64, so a line is 1088 units tall. Glyphs:
//!
//! - `BLOCK` (U+E000): a square from (128, -128) to (896, 640), one em wide
//! - `CORNER` (U+E001): a square in the top-left from (0, 384) to (384, 768),
//!   one em wide
//! - `FULL` (U+E002): the whole em box from (0, -256) to (1024, 768)
//! - `NARROW` (U+E003): a bar from (0, 384) to (256, 768), half an em wide
//!
//! At 32px the scale is exactly 1/32, so every edge falls on a pixel
//! boundary. Em-wide glyphs measure 32x34 there and `NARROW` 16x34.

#![allow(dead_code)]

pub const FAMILY: &str = "Synth Icons";
pub const BLOCK: char = '\u{E000}';
pub const CORNER: char = '\u{E001}';
pub const FULL: char = '\u{E002}';
pub const NARROW: char = '\u{E003}';

const UNITS_PER_EM: u16 = 1024;
const ASCENDER: i16 = 768;
const DESCENDER: i16 = -256;
const LINE_GAP: i16 = 64;

/// Code point, advance width and outline rectangle of each glyph.
const GLYPHS: &[(char, u16, [i16; 4])] = &[
    (BLOCK, UNITS_PER_EM, [128, -128, 896, 640]),
    (CORNER, UNITS_PER_EM, [0, 384, 384, 768]),
    (FULL, UNITS_PER_EM, [0, -256, 1024, 768]),
    (NARROW, UNITS_PER_EM / 2, [0, 384, 256, 768]),
];

/// Returns the bytes of the synthesized font.
pub fn font_bytes() -> Vec<u8> {
    let num_glyphs = GLYPHS.len() as u16 + 1;

    let mut glyf = Vec::new();
    let mut loca = vec![0u32, 0];
    for (_, _, rect) in GLYPHS {
        glyf.extend(rect_glyph(*rect));
        loca.push(glyf.len() as u32);
    }

    let tables: Vec<([u8; 4], Vec<u8>)> = vec![
        (*b"cmap", cmap()),
        (*b"glyf", glyf),
        (*b"head", head()),
        (*b"hhea", hhea(num_glyphs)),
        (*b"hmtx", hmtx()),
        (*b"loca", loca.iter().flat_map(|o| o.to_be_bytes()).collect()),
        (*b"maxp", maxp(num_glyphs)),
    ];

    let mut out = Vec::new();
    out.extend(0x0001_0000u32.to_be_bytes());
    out.extend((tables.len() as u16).to_be_bytes());
    out.extend(64u16.to_be_bytes());
    out.extend(2u16.to_be_bytes());
    out.extend(((tables.len() as u16) * 16 - 64).to_be_bytes());

    let mut offset = 12 + tables.len() * 16;
    let mut body = Vec::new();
    for (tag, data) in &tables {
        out.extend(tag);
        out.extend(0u32.to_be_bytes());
        out.extend((offset as u32).to_be_bytes());
        out.extend((data.len() as u32).to_be_bytes());

        body.extend(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
        offset = 12 + tables.len() * 16 + body.len();
    }
    out.extend(body);
    out
}

fn rect_glyph([x0, y0, x1, y1]: [i16; 4]) -> Vec<u8> {
    let mut g = Vec::new();
    g.extend(1i16.to_be_bytes());
    for v in [x0, y0, x1, y1] {
        g.extend(v.to_be_bytes());
    }
    g.extend(3u16.to_be_bytes());
    g.extend(0u16.to_be_bytes());
    g.extend([0x01u8; 4]);

    let points = [(x0, y0), (x0, y1), (x1, y1), (x1, y0)];
    let (mut px, mut py) = (0i16, 0i16);
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (x, y) in points {
        xs.extend((x - px).to_be_bytes());
        ys.extend((y - py).to_be_bytes());
        px = x;
        py = y;
    }
    g.extend(xs);
    g.extend(ys);
    while g.len() % 4 != 0 {
        g.push(0);
    }
    g
}

fn cmap() -> Vec<u8> {
    let mut t = Vec::new();
    t.extend(0u16.to_be_bytes());
    t.extend(1u16.to_be_bytes());
    // Unicode platform, full repertoire.
    t.extend(0u16.to_be_bytes());
    t.extend(4u16.to_be_bytes());
    t.extend(12u32.to_be_bytes());

    t.extend(12u16.to_be_bytes());
    t.extend(0u16.to_be_bytes());
    t.extend((16 + 12 * GLYPHS.len() as u32).to_be_bytes());
    t.extend(0u32.to_be_bytes());
    t.extend((GLYPHS.len() as u32).to_be_bytes());
    for (i, (ch, _, _)) in GLYPHS.iter().enumerate() {
        let cp = *ch as u32;
        t.extend(cp.to_be_bytes());
        t.extend(cp.to_be_bytes());
        t.extend((i as u32 + 1).to_be_bytes());
    }
    t
}

fn head() -> Vec<u8> {
    let mut t = Vec::new();
    t.extend(0x0001_0000u32.to_be_bytes());
    t.extend(0x0001_0000u32.to_be_bytes());
    t.extend(0u32.to_be_bytes());
    t.extend(0x5F0F_3CF5u32.to_be_bytes());
    t.extend(0u16.to_be_bytes());
    t.extend(UNITS_PER_EM.to_be_bytes());
    t.extend([0u8; 16]);
    for v in [0i16, DESCENDER, UNITS_PER_EM as i16, ASCENDER] {
        t.extend(v.to_be_bytes());
    }
    t.extend(0u16.to_be_bytes());
    t.extend(8u16.to_be_bytes());
    t.extend(2i16.to_be_bytes());
    // Long loca offsets.
    t.extend(1i16.to_be_bytes());
    t.extend(0i16.to_be_bytes());
    t
}

fn hhea(num_glyphs: u16) -> Vec<u8> {
    let mut t = Vec::new();
    t.extend(0x0001_0000u32.to_be_bytes());
    t.extend(ASCENDER.to_be_bytes());
    t.extend(DESCENDER.to_be_bytes());
    t.extend(LINE_GAP.to_be_bytes());
    t.extend(UNITS_PER_EM.to_be_bytes());
    t.extend(0i16.to_be_bytes());
    t.extend(0i16.to_be_bytes());
    t.extend((UNITS_PER_EM as i16).to_be_bytes());
    t.extend(1i16.to_be_bytes());
    t.extend(0i16.to_be_bytes());
    t.extend(0i16.to_be_bytes());
    t.extend([0u8; 8]);
    t.extend(0i16.to_be_bytes());
    t.extend(num_glyphs.to_be_bytes());
    t
}

fn hmtx() -> Vec<u8> {
    let mut t = Vec::new();
    // .notdef
    t.extend(UNITS_PER_EM.to_be_bytes());
    t.extend(0i16.to_be_bytes());
    for (_, advance, [x0, ..]) in GLYPHS {
        t.extend(advance.to_be_bytes());
        t.extend(x0.to_be_bytes());
    }
    t
}

fn maxp(num_glyphs: u16) -> Vec<u8> {
    let mut t = Vec::new();
    t.extend(0x0000_5000u32.to_be_bytes());
    t.extend(num_glyphs.to_be_bytes());
    t
}
