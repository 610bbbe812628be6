use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::chart::band::BandRow;
use crate::report::format_f64_6;

pub fn write_band_tsv(rows: &[BandRow], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{}", ["x", "y", "fit", "lo", "hi"].join("\t"))?;
    for row in rows {
        let line = [row.x, row.y, row.fit, row.lo, row.hi]
            .iter()
            .map(|&v| format_f64_6(v))
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(w, "{}", line)?;
    }
    w.flush()
}
