//! Netpbm PAM output (`P7`, `RGB_ALPHA`), a header plus raw RGBA rows.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::icon::ArgbImage;

pub fn write_pam<W: Write>(image: &ArgbImage, mut out: W) -> io::Result<()> {
    write!(
        out,
        "P7\nWIDTH {}\nHEIGHT {}\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n",
        image.width(),
        image.height()
    )?;
    out.write_all(&image.to_rgba8())?;
    out.flush()
}

pub fn save_pam(image: &ArgbImage, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_pam(image, BufWriter::new(file))
}
